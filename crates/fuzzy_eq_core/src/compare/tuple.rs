use crate::dispatch::Comparator;
use crate::observer::{Detail, Observer};
use crate::traits::DynComparable;

/// Position-wise comparison of two tuples.
///
/// Unlike sequences and maps, every position is evaluated even after a
/// mismatch; the verdict is the AND of all positions. An operand that is not
/// a tuple has no arity and never matches.
pub(crate) fn compare<O: Observer>(
    engine: &Comparator<O>,
    left: &dyn DynComparable,
    right: &dyn DynComparable,
    depth: usize,
) -> (bool, Detail) {
    let (left_fields, right_fields) = (left.fields(), right.fields());
    let (Some(left_fields), Some(right_fields)) = (&left_fields, &right_fields) else {
        return (
            false,
            Detail::ArityMismatch {
                left: left_fields.as_ref().map(Vec::len),
                right: right_fields.as_ref().map(Vec::len),
            },
        );
    };
    if left_fields.len() != right_fields.len() {
        return (
            false,
            Detail::ArityMismatch {
                left: Some(left_fields.len()),
                right: Some(right_fields.len()),
            },
        );
    }

    let mut equal = true;
    let mut first_mismatch = None;
    for (index, (left, right)) in left_fields.iter().zip(right_fields).enumerate() {
        let position = engine.compare_at(*left, *right, depth + 1);
        if !position && first_mismatch.is_none() {
            first_mismatch = Some(index);
        }
        equal &= position;
    }

    match first_mismatch {
        Some(index) => (equal, Detail::Mismatch { index }),
        None => (equal, Detail::None),
    }
}
