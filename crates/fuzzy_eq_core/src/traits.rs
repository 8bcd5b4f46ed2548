use num_complex::Complex64;
use std::any::Any;

/// Positional view over the elements of a sequence.
pub type Elements<'a> = Box<dyn ExactSizeIterator<Item = &'a dyn DynComparable> + 'a>;

/// Key/value view over the entries of a map.
pub type Entries<'a> =
    Box<dyn ExactSizeIterator<Item = (&'a dyn DynComparable, &'a dyn DynComparable)> + 'a>;

/// Index-ordered view over the fields of a tuple.
pub type Fields<'a> = Vec<&'a dyn DynComparable>;

/// The category facts a type exposes to the dispatcher.
///
/// A type may report several facts at once (a container with its own
/// equality is both `sequence` and `equatable`); the dispatcher decides which
/// one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub numeric: bool,
    pub sequence: bool,
    pub map: bool,
    pub tuple: bool,
    pub equatable: bool,
}

impl Capabilities {
    pub const OPAQUE: Self = Self {
        numeric: false,
        sequence: false,
        map: false,
        tuple: false,
        equatable: false,
    };
    pub const NUMERIC: Self = Self {
        numeric: true,
        ..Self::OPAQUE
    };
    pub const SEQUENCE: Self = Self {
        sequence: true,
        ..Self::OPAQUE
    };
    pub const MAP: Self = Self {
        map: true,
        ..Self::OPAQUE
    };
    pub const TUPLE: Self = Self {
        tuple: true,
        ..Self::OPAQUE
    };
    pub const EQUATABLE: Self = Self {
        equatable: true,
        ..Self::OPAQUE
    };

    /// Combines the facts of two capability sets.
    pub const fn union(self, other: Self) -> Self {
        Self {
            numeric: self.numeric || other.numeric,
            sequence: self.sequence || other.sequence,
            map: self.map || other.map,
            tuple: self.tuple || other.tuple,
            equatable: self.equatable || other.equatable,
        }
    }

    pub fn is_opaque(&self) -> bool {
        *self == Self::OPAQUE
    }
}

/// Whether a map iterates equal key sets in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapOrder {
    /// Iteration follows key order, so equal maps can be walked in lock-step.
    Sorted,
    /// No ordering guarantee; entries must be matched by key.
    Unordered,
}

/// Structural hooks the engine uses to look inside a value.
///
/// Every hook defaults to "not supported". A type only overrides the hooks
/// that correspond to the facts in its [`Comparable::CAPABILITIES`].
pub trait Inspect {
    /// Widens a numeric scalar to the common comparison representation.
    /// Real values carry a zero imaginary part.
    fn widen(&self) -> Option<Complex64> {
        None
    }

    /// Elements of an ordered, sized container.
    fn elements(&self) -> Option<Elements<'_>> {
        None
    }

    /// Entries of an associative container.
    fn entries(&self) -> Option<Entries<'_>> {
        None
    }

    fn map_order(&self) -> MapOrder {
        MapOrder::Unordered
    }

    /// Fields of a fixed-arity product type.
    fn fields(&self) -> Option<Fields<'_>> {
        None
    }

    /// Concrete type identity, used to decide whether two operands share a type.
    fn as_any(&self) -> Option<&dyn Any> {
        None
    }

    /// The type's own equality against another value of the same type.
    /// Returns `None` when `other` is a different type.
    fn eq_any(&self, _other: &dyn Any) -> Option<bool> {
        None
    }
}

/// A type the engine can classify.
///
/// Capabilities are an associated constant, so the category decision for a
/// pair of operands depends on their static types only.
pub trait Comparable: Inspect {
    const CAPABILITIES: Capabilities;
}

/// Object-safe face of [`Comparable`], used for recursion into heterogeneous
/// children.
pub trait DynComparable: Inspect {
    fn capabilities(&self) -> Capabilities;
    fn type_name(&self) -> &'static str;
}

impl<T: Comparable + ?Sized> DynComparable for T {
    fn capabilities(&self) -> Capabilities {
        T::CAPABILITIES
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Erases a concrete child value for recursive comparison.
pub(crate) fn erase<T: Comparable>(value: &T) -> &dyn DynComparable {
    value
}
