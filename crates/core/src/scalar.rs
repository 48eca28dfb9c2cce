use std::{
    fmt::Debug,
    ops::{Add, Div, Mul, Neg, Sub},
};

use num_complex::Complex64;
use num_traits::{One, Zero};

/// A complex-capable number used by every factorization and root finder.
///
/// Arithmetic comes from the standard operator traits; the methods here cover
/// what the operators cannot express. Values are `Copy` and every operation
/// yields a new value.
///
/// Zero tests are exact: [`Scalar::is_exact_zero`] compares the complex
/// representation against zero without a tolerance, so a pivot is either
/// exactly singular or usable.
pub trait Scalar:
    Copy
    + PartialEq
    + Debug
    + Send
    + Sync
    + 'static
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Creates a scalar from a real value.
    fn from_real(re: f64) -> Self;

    /// Returns the real part.
    fn re(&self) -> f64;

    /// Returns the full complex form.
    fn to_complex(&self) -> Complex64;

    /// Returns the complex conjugate.
    #[must_use]
    fn conj(&self) -> Self;

    /// Returns the magnitude as a scalar with zero imaginary part.
    #[must_use]
    fn abs(&self) -> Self;

    /// Raises the value to an integer power.
    #[must_use]
    fn powi(&self, n: i32) -> Self;

    /// Returns true if the complex representation is exactly zero.
    fn is_exact_zero(&self) -> bool {
        let z = self.to_complex();
        z.re == 0.0 && z.im == 0.0
    }
}

impl Scalar for f64 {
    fn from_real(re: f64) -> Self {
        re
    }

    fn re(&self) -> f64 {
        *self
    }

    fn to_complex(&self) -> Complex64 {
        Complex64::new(*self, 0.0)
    }

    fn conj(&self) -> Self {
        *self
    }

    fn abs(&self) -> Self {
        f64::abs(*self)
    }

    fn powi(&self, n: i32) -> Self {
        f64::powi(*self, n)
    }
}

impl Scalar for Complex64 {
    fn from_real(re: f64) -> Self {
        Complex64::new(re, 0.0)
    }

    fn re(&self) -> f64 {
        self.re
    }

    fn to_complex(&self) -> Complex64 {
        *self
    }

    fn conj(&self) -> Self {
        Complex64::conj(self)
    }

    fn abs(&self) -> Self {
        Complex64::new(self.norm(), 0.0)
    }

    fn powi(&self, n: i32) -> Self {
        Complex64::powi(self, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn exact_zero_ignores_sign() {
        assert!(0.0_f64.is_exact_zero());
        assert!((-0.0_f64).is_exact_zero());
        assert!(!f64::EPSILON.is_exact_zero());
        assert!(Complex64::new(0.0, 0.0).is_exact_zero());
        assert!(!Complex64::new(0.0, 1e-300).is_exact_zero());
    }

    #[test]
    fn complex_magnitude_is_real() {
        let z = Complex64::new(3.0, -4.0);
        let magnitude = Scalar::abs(&z);

        assert_relative_eq!(magnitude.re, 5.0);
        assert_relative_eq!(magnitude.im, 0.0);
    }

    #[test]
    fn real_scalar_round_trips_through_complex() {
        let x = -2.5_f64;
        assert_eq!(x.to_complex(), Complex64::new(-2.5, 0.0));
        assert_eq!(Scalar::re(&x), -2.5);
        assert_eq!(Scalar::conj(&x), x);
    }

    #[test]
    fn powers_match_repeated_products() {
        let z = Complex64::new(1.0, 1.0);
        assert_eq!(Scalar::powi(&z, 2), z * z);
        assert_eq!(Scalar::powi(&3.0_f64, 3), 27.0);
    }
}
