//! Classification for the numeric types of the linear algebra stack.
//!
//! Complex numbers are numeric scalars; their distance is the modulus of the
//! difference. nalgebra column vectors are plain sequences, so a `DVector`
//! compares against a `Vec` or an array of the same length.

use nalgebra::{DVector, SVector, Scalar};
use num_complex::{Complex, Complex64};

use crate::traits::{erase, Capabilities, Comparable, Elements, Inspect};

macro_rules! complex {
    ($($part:ty),+ $(,)?) => {$(
        impl Inspect for Complex<$part> {
            fn widen(&self) -> Option<Complex64> {
                Some(Complex64::new(f64::from(self.re), f64::from(self.im)))
            }
        }

        impl Comparable for Complex<$part> {
            const CAPABILITIES: Capabilities = Capabilities::NUMERIC;
        }
    )+};
}

complex!(f32, f64);

impl<T: Comparable + Scalar> Inspect for DVector<T> {
    fn elements(&self) -> Option<Elements<'_>> {
        Some(Box::new(self.as_slice().iter().map(|item| erase(item))))
    }
}

impl<T: Comparable + Scalar> Comparable for DVector<T> {
    const CAPABILITIES: Capabilities = Capabilities::SEQUENCE;
}

impl<T: Comparable + Scalar, const D: usize> Inspect for SVector<T, D> {
    fn elements(&self) -> Option<Elements<'_>> {
        Some(Box::new(self.as_slice().iter().map(|item| erase(item))))
    }
}

impl<T: Comparable + Scalar, const D: usize> Comparable for SVector<T, D> {
    const CAPABILITIES: Capabilities = Capabilities::SEQUENCE;
}
