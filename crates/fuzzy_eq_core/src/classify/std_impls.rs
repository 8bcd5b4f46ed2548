use num_complex::Complex64;
use num_traits::ToPrimitive;
use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use super::eq_same_type;
use crate::traits::{
    erase, Capabilities, Comparable, Elements, Entries, Fields, Inspect, MapOrder,
};

macro_rules! numeric {
    ($($ty:ty),+ $(,)?) => {$(
        impl Inspect for $ty {
            fn widen(&self) -> Option<Complex64> {
                self.to_f64().map(|re| Complex64::new(re, 0.0))
            }
        }

        impl Comparable for $ty {
            const CAPABILITIES: Capabilities = Capabilities::NUMERIC;
        }
    )+};
}

numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

equatable!(bool, char, String, &'static str);

// Raw pointers compare by address. They never take part in tolerance arithmetic.
impl<T: ?Sized + 'static> Inspect for *const T {
    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }

    fn eq_any(&self, other: &dyn Any) -> Option<bool> {
        eq_same_type(self, other)
    }
}

impl<T: ?Sized + 'static> Comparable for *const T {
    const CAPABILITIES: Capabilities = Capabilities::EQUATABLE;
}

impl<T: ?Sized + 'static> Inspect for *mut T {
    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }

    fn eq_any(&self, other: &dyn Any) -> Option<bool> {
        eq_same_type(self, other)
    }
}

impl<T: ?Sized + 'static> Comparable for *mut T {
    const CAPABILITIES: Capabilities = Capabilities::EQUATABLE;
}

macro_rules! sequence {
    ($($container:ident),+ $(,)?) => {$(
        impl<T: Comparable> Inspect for $container<T> {
            fn elements(&self) -> Option<Elements<'_>> {
                Some(Box::new(self.iter().map(|item| erase(item))))
            }
        }

        impl<T: Comparable> Comparable for $container<T> {
            const CAPABILITIES: Capabilities = Capabilities::SEQUENCE;
        }
    )+};
}

sequence!(Vec, VecDeque, LinkedList, BTreeSet);

impl<T: Comparable> Inspect for [T] {
    fn elements(&self) -> Option<Elements<'_>> {
        Some(Box::new(self.iter().map(|item| erase(item))))
    }
}

impl<T: Comparable> Comparable for [T] {
    const CAPABILITIES: Capabilities = Capabilities::SEQUENCE;
}

impl<'a, T: Comparable> Inspect for &'a [T] {
    fn elements(&self) -> Option<Elements<'_>> {
        (**self).elements()
    }
}

impl<'a, T: Comparable> Comparable for &'a [T] {
    const CAPABILITIES: Capabilities = Capabilities::SEQUENCE;
}

// Fixed-size arrays are homogeneous, so they classify as sequences rather than tuples.
impl<T: Comparable, const N: usize> Inspect for [T; N] {
    fn elements(&self) -> Option<Elements<'_>> {
        Some(Box::new(self.iter().map(|item| erase(item))))
    }
}

impl<T: Comparable, const N: usize> Comparable for [T; N] {
    const CAPABILITIES: Capabilities = Capabilities::SEQUENCE;
}

impl<K: Comparable, V: Comparable> Inspect for BTreeMap<K, V> {
    fn entries(&self) -> Option<Entries<'_>> {
        Some(Box::new(self.iter().map(|(key, value)| (erase(key), erase(value)))))
    }

    fn map_order(&self) -> MapOrder {
        MapOrder::Sorted
    }
}

impl<K: Comparable, V: Comparable> Comparable for BTreeMap<K, V> {
    const CAPABILITIES: Capabilities = Capabilities::MAP;
}

impl<K: Comparable, V: Comparable, S> Inspect for HashMap<K, V, S> {
    fn entries(&self) -> Option<Entries<'_>> {
        Some(Box::new(self.iter().map(|(key, value)| (erase(key), erase(value)))))
    }

    fn map_order(&self) -> MapOrder {
        MapOrder::Unordered
    }
}

impl<K: Comparable, V: Comparable, S> Comparable for HashMap<K, V, S> {
    const CAPABILITIES: Capabilities = Capabilities::MAP;
}

// Owning pointers are looked through; `Box<T>` classifies exactly like `T`.
macro_rules! transparent {
    ($($pointer:ident),+ $(,)?) => {$(
        impl<T: Comparable + ?Sized> Inspect for $pointer<T> {
            fn widen(&self) -> Option<Complex64> {
                (**self).widen()
            }

            fn elements(&self) -> Option<Elements<'_>> {
                (**self).elements()
            }

            fn entries(&self) -> Option<Entries<'_>> {
                (**self).entries()
            }

            fn map_order(&self) -> MapOrder {
                (**self).map_order()
            }

            fn fields(&self) -> Option<Fields<'_>> {
                (**self).fields()
            }

            fn as_any(&self) -> Option<&dyn Any> {
                (**self).as_any()
            }

            fn eq_any(&self, other: &dyn Any) -> Option<bool> {
                (**self).eq_any(other)
            }
        }

        impl<T: Comparable + ?Sized> Comparable for $pointer<T> {
            const CAPABILITIES: Capabilities = T::CAPABILITIES;
        }
    )+};
}

transparent!(Box, Rc, Arc);
