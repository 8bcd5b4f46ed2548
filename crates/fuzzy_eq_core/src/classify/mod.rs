//! Type classification.
//!
//! Each supported type declares its category facts through
//! [`Comparable::CAPABILITIES`](crate::Comparable) and exposes the matching
//! [`Inspect`](crate::Inspect) hooks. Classification is structural: a type is
//! a sequence because it hands out sized element iteration, a map because it
//! hands out entries, and so on.
//!
//! Built-in coverage:
//! - `std_impls`: primitive numbers, std containers, smart pointers, and the
//!   equatable leaves (`bool`, `char`, strings, raw pointers).
//! - `tuples`: tuples of arity 0 through 12.
//! - `linalg`: complex scalars and nalgebra vectors.
//!
//! User types opt into the identical-type equality rule with [`equatable!`].
//!
//! Plain references are not classified. The only borrowed types that are
//! `Comparable` are slices (`&[T]`) and `&'static str`, so a `Vec<&str>`
//! borrowed from a local `String` cannot be compared directly:
//!
//! ```compile_fail
//! use fuzzy_eq_core::fuzzy_eq;
//!
//! let text = String::from("a b");
//! let words: Vec<&str> = text.split(' ').collect();
//! fuzzy_eq(&words, &words);
//! ```
//!
//! Collect owned `String`s instead:
//!
//! ```
//! use fuzzy_eq_core::fuzzy_eq;
//!
//! let text = String::from("a b");
//! let words: Vec<String> = text.split(' ').map(String::from).collect();
//! assert!(fuzzy_eq(&words, &vec![String::from("a"), String::from("b")]));
//! ```

use std::any::Any;

/// Implements [`Comparable`](crate::Comparable) for types whose own
/// `PartialEq` should decide equality when both operands share that type.
///
/// ```
/// use fuzzy_eq_core::{equatable, fuzzy_eq};
///
/// #[derive(PartialEq)]
/// struct Label(&'static str);
/// equatable!(Label);
///
/// assert!(fuzzy_eq(&Label("a"), &Label("a")));
/// assert!(!fuzzy_eq(&Label("a"), &Label("b")));
/// ```
#[macro_export]
macro_rules! equatable {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::Inspect for $ty {
            fn as_any(&self) -> ::std::option::Option<&dyn ::std::any::Any> {
                ::std::option::Option::Some(self)
            }

            fn eq_any(&self, other: &dyn ::std::any::Any) -> ::std::option::Option<bool> {
                $crate::eq_same_type(self, other)
            }
        }

        impl $crate::Comparable for $ty {
            const CAPABILITIES: $crate::Capabilities = $crate::Capabilities::EQUATABLE;
        }
    )+};
}

mod linalg;
mod std_impls;
mod tuples;

/// Applies `T`'s own equality when `other` is also a `T`.
pub fn eq_same_type<T: PartialEq + 'static>(this: &T, other: &dyn Any) -> Option<bool> {
    other.downcast_ref::<T>().map(|other| this == other)
}
