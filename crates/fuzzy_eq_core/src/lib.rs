//! The `fuzzy_eq_core` crate compares values of possibly different types for
//! equality, matching numeric leaves within a tolerance instead of exactly.
//!
//! A `Vec<f32>` against a `Vec<f64>`, a `BTreeMap<i32, f64>` against a
//! `HashMap<i32, f32>`, or `(1, 2)` against `(1.0, 2.0_f32)` all compare
//! structurally, recursing until they reach numbers or types with their own
//! equality.
//!
//! Key components:
//! - **Traits**: `Inspect` (structural hooks), `Comparable` (static category
//!   facts), `DynComparable` (object-safe view used for recursion).
//! - **Classify**: implementations for primitives, std containers, tuples,
//!   smart pointers, complex numbers and nalgebra vectors.
//! - **Dispatch**: rule precedence (`select`) and the `Comparator` engine.
//! - **Compare**: one rule per category.
//! - **Observer**: optional per-rule diagnostics, including a `log` bridge.
//!
//! ```
//! use fuzzy_eq_core::{fuzzy_eq, fuzzy_eq_within};
//!
//! let floats: Vec<f32> = vec![1.2, 36.6, 25.11, 22.44];
//! let doubles: Vec<f64> = vec![1.2, 36.6, 25.11, 22.44];
//! assert!(fuzzy_eq(&floats, &doubles));
//! assert!(fuzzy_eq_within(&1, &2, 1.0));
//! assert!(!fuzzy_eq(&floats, &2.9));
//! ```
//!
//! Only types implementing [`Comparable`] can be passed in; anything else is
//! rejected at compile time. Between two `Comparable` types the comparison is
//! total: shapes that cannot match yield `false`.
//!
//! Recursion depth follows the nesting depth of the inputs. Use
//! [`CompareConfig::max_depth`] to bound it for untrusted input.

pub mod classify;
mod compare;
pub mod config;
pub mod dispatch;
pub mod observer;
pub mod traits;

pub use classify::eq_same_type;
pub use compare::numeric::distance;
pub use config::{CompareConfig, ConfigError, DEFAULT_TOLERANCE};
pub use dispatch::{same_type, select, Category, Comparator};
pub use observer::{Detail, Event, LogObserver, NoopObserver, Observer, RecordingObserver};
pub use traits::{
    Capabilities, Comparable, DynComparable, Elements, Entries, Fields, Inspect, MapOrder,
};

/// Compares two values with [`DEFAULT_TOLERANCE`].
pub fn fuzzy_eq<A: Comparable, B: Comparable>(left: &A, right: &B) -> bool {
    fuzzy_eq_within(left, right, DEFAULT_TOLERANCE)
}

/// Compares two values, matching numeric leaves within `tolerance`.
///
/// The tolerance is not validated: a negative or NaN tolerance makes every
/// numeric leaf a mismatch. Use [`Comparator::new`] to reject such values.
pub fn fuzzy_eq_within<A: Comparable, B: Comparable>(left: &A, right: &B, tolerance: f64) -> bool {
    Comparator::unchecked(CompareConfig::with_tolerance(tolerance)).compare(left, right)
}
