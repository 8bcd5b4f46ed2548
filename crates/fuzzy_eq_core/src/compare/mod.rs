//! Comparison rules, one per [`Category`](crate::Category).
//!
//! Each rule returns the verdict together with the [`Detail`] reported to the
//! observer. Container rules recurse through
//! [`Comparator::compare_at`](crate::Comparator), so children are classified
//! and dispatched independently of their parents.

pub(crate) mod map;
pub(crate) mod numeric;
pub(crate) mod sequence;
pub(crate) mod tuple;

use crate::observer::Detail;
use crate::traits::DynComparable;

/// Delegates to the operand type's own equality. Tolerance is not involved.
pub(crate) fn user_equatable(
    left: &dyn DynComparable,
    right: &dyn DynComparable,
) -> (bool, Detail) {
    match right.as_any().and_then(|other| left.eq_any(other)) {
        Some(equal) => (equal, Detail::None),
        None => (false, Detail::Malformed),
    }
}

pub(crate) fn incompatible() -> (bool, Detail) {
    (false, Detail::None)
}
