use alloc::borrow::Cow;

use crate::algorithms::{extended_gcd, mod_inverse};
use crate::BigInt;

/// Generic trait for modular multiplicative inverse.
///
/// Computes the [modular multiplicative inverse](https://en.wikipedia.org/wiki/Modular_multiplicative_inverse)
/// of an integer *a* modulo *m*.
///
/// Returns `None` if the inverse does not exist (i.e., `gcd(a, m) != 1`).
///
/// ```
/// use num_bigint_dec::{BigInt, ModInverse};
///
/// let inv = BigInt::from(3).mod_inverse(&BigInt::from(11));
/// assert_eq!(inv, Some(BigInt::from(4)));
/// ```
pub trait ModInverse<R: Sized>: Sized {
    /// The output type of the modular inverse.
    type Output: Sized;

    /// Returns the modular inverse of `self` modulo `m`, or `None` if it does not exist.
    fn mod_inverse(self, m: R) -> Option<Self::Output>;
}

/// Generic trait for the extended Euclidean algorithm.
///
/// Computes the [extended GCD](https://en.wikipedia.org/wiki/Extended_Euclidean_algorithm),
/// returning `(gcd, x, y)` such that `self * x + other * y = gcd`.
pub trait ExtendedGcd<R: Sized>: Sized {
    /// Returns `(gcd, x, y)` such that `self * x + other * y = gcd`.
    fn extended_gcd(self, other: R) -> (BigInt, BigInt, BigInt);
}

// --- ModInverse impls ---

impl ModInverse<&BigInt> for BigInt {
    type Output = BigInt;

    fn mod_inverse(self, m: &BigInt) -> Option<BigInt> {
        mod_inverse(Cow::Owned(self), Cow::Borrowed(m))
    }
}

impl ModInverse<BigInt> for BigInt {
    type Output = BigInt;

    fn mod_inverse(self, m: BigInt) -> Option<BigInt> {
        mod_inverse(Cow::Owned(self), Cow::Owned(m))
    }
}

impl<'a> ModInverse<&BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mod_inverse(self, m: &BigInt) -> Option<BigInt> {
        mod_inverse(Cow::Borrowed(self), Cow::Borrowed(m))
    }
}

// --- ExtendedGcd impls ---

impl ExtendedGcd<&BigInt> for BigInt {
    fn extended_gcd(self, other: &BigInt) -> (BigInt, BigInt, BigInt) {
        extended_gcd(&self, other)
    }
}

impl ExtendedGcd<BigInt> for BigInt {
    fn extended_gcd(self, other: BigInt) -> (BigInt, BigInt, BigInt) {
        extended_gcd(&self, &other)
    }
}

impl<'a> ExtendedGcd<&BigInt> for &'a BigInt {
    fn extended_gcd(self, other: &BigInt) -> (BigInt, BigInt, BigInt) {
        extended_gcd(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_inverse_forms() {
        let a = BigInt::from(10);
        let m = BigInt::from(17);
        let expected = Some(BigInt::from(12));

        assert_eq!((&a).mod_inverse(&m), expected);
        assert_eq!(a.clone().mod_inverse(&m), expected);
        assert_eq!(a.mod_inverse(m), expected);
        assert_eq!(BigInt::from(6).mod_inverse(BigInt::from(9)), None);
    }

    #[test]
    fn test_extended_gcd_forms() {
        let a = BigInt::from(240);
        let b = BigInt::from(46);
        let expected = (BigInt::from(2), BigInt::from(-9), BigInt::from(47));

        assert_eq!((&a).extended_gcd(&b), expected);
        assert_eq!(a.clone().extended_gcd(&b), expected);
        assert_eq!(a.extended_gcd(b), expected);
    }
}
