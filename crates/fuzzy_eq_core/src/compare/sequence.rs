use crate::dispatch::Comparator;
use crate::observer::{Detail, Observer};
use crate::traits::DynComparable;

/// Lock-step comparison of two sized sequences.
///
/// A length mismatch fails before any element is touched; otherwise the walk
/// stops at the first position that does not match.
pub(crate) fn compare<O: Observer>(
    engine: &Comparator<O>,
    left: &dyn DynComparable,
    right: &dyn DynComparable,
    depth: usize,
) -> (bool, Detail) {
    let (Some(left), Some(right)) = (left.elements(), right.elements()) else {
        return (false, Detail::Malformed);
    };
    if left.len() != right.len() {
        return (
            false,
            Detail::SizeMismatch {
                left: left.len(),
                right: right.len(),
            },
        );
    }

    for (index, (left, right)) in left.zip(right).enumerate() {
        if !engine.compare_at(left, right, depth + 1) {
            return (false, Detail::Mismatch { index });
        }
    }
    (true, Detail::None)
}
