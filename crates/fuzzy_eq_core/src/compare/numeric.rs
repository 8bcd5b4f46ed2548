use num_complex::Complex64;

use crate::observer::Detail;
use crate::traits::DynComparable;

/// Absolute distance between two widened scalars.
///
/// Purely real operands use `|a - b|` directly; anything with an imaginary
/// part uses the modulus of the difference.
pub fn distance(left: Complex64, right: Complex64) -> f64 {
    if left.im == 0.0 && right.im == 0.0 {
        (left.re - right.re).abs()
    } else {
        (left - right).norm()
    }
}

/// `|a - b| <= tolerance` after widening. NaN on either side never matches.
pub(crate) fn compare(
    tolerance: f64,
    left: &dyn DynComparable,
    right: &dyn DynComparable,
) -> (bool, Detail) {
    let (Some(left), Some(right)) = (left.widen(), right.widen()) else {
        return (false, Detail::Malformed);
    };
    let distance = distance(left, right);
    (
        distance <= tolerance,
        Detail::Numeric {
            left,
            right,
            distance,
            tolerance,
        },
    )
}
