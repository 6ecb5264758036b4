use alloc::vec::Vec;
use core::cmp::Ordering::Less;
use core::ops::{Div, DivAssign, Rem, RemAssign};

use num_integer::Integer;
use num_traits::{CheckedDiv, CheckedRem, Zero};

use crate::big_digit::{BigDigit, DoubleBigDigit, BASE};
use crate::BigIntError;

use super::subtraction::sub2;
use super::Sign::{Minus, Plus};
use super::{cmp_slice, trim_slice, BigInt};

/// Divide a magnitude by a single non-zero digit, returning the quotient
/// (possibly with most-significant zeros) and the remainder digit.
pub fn div_rem_digit(mut a: Vec<BigDigit>, b: BigDigit) -> (Vec<BigDigit>, BigDigit) {
    assert!(b != 0, "attempt to divide by zero");

    let base = DoubleBigDigit::from(BASE);
    let b = DoubleBigDigit::from(b);
    let mut rem: DoubleBigDigit = 0;

    for d in a.iter_mut().rev() {
        let lhs = rem * base + DoubleBigDigit::from(*d);
        *d = (lhs / b) as BigDigit;
        rem = lhs % b;
    }

    (a, rem as BigDigit)
}

/// Whether `d * 10^shift` can still be taken from `rem`.
#[inline]
fn shifted_fits(rem: &[BigDigit], d: &[BigDigit], shift: usize) -> bool {
    cmp_slice(trim_slice(&rem[shift..]), d) != Less
}

/// Long division of magnitudes.
///
/// For each quotient position, from most significant down, the divisor
/// shifted to that position is subtracted from the running remainder for as
/// long as it fits. That happens at most nine times per position, so the
/// whole division is quadratic in the number of digits.
///
/// `d` must be normalized and non-empty. Both results may carry
/// most-significant zeros.
pub fn div_rem(u: &[BigDigit], d: &[BigDigit]) -> (Vec<BigDigit>, Vec<BigDigit>) {
    assert!(!d.is_empty(), "attempt to divide by zero");

    let u = trim_slice(u);
    if u.len() < d.len() {
        return (Vec::new(), u.to_vec());
    }

    if let [digit] = *d {
        let (q, r) = div_rem_digit(u.to_vec(), digit);
        return (q, alloc::vec![r]);
    }

    let mut rem = u.to_vec();
    let mut quot = alloc::vec![0; u.len() - d.len() + 1];

    for shift in (0..quot.len()).rev() {
        let mut q: BigDigit = 0;
        while shifted_fits(&rem, d, shift) {
            sub2(&mut rem[shift..], d);
            q += 1;
        }
        debug_assert!(q < BASE);
        quot[shift] = q;
    }

    (quot, rem)
}

impl BigInt {
    /// Truncating division with remainder: the quotient rounds toward zero
    /// and the remainder takes the sign of the dividend, so that
    /// `self == q * other + r`.
    ///
    /// ```
    /// use num_bigint_dec::{BigInt, BigIntError};
    ///
    /// let (q, r) = BigInt::from(-7).checked_div_rem(&BigInt::from(2)).unwrap();
    /// assert_eq!((q, r), (BigInt::from(-3), BigInt::from(-1)));
    ///
    /// let zero = BigInt::from(0);
    /// assert_eq!(BigInt::from(5).checked_div_rem(&zero), Err(BigIntError::DivideByZero));
    /// ```
    pub fn checked_div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if other.is_zero() {
            return Err(BigIntError::DivideByZero);
        }
        if self.data.len() < other.data.len() {
            return Ok((BigInt::zero(), self.clone()));
        }

        let (q, r) = div_rem(&self.data, &other.data);
        Ok((
            BigInt::from_vec(self.sign * other.sign, q),
            BigInt::from_vec(self.sign, r),
        ))
    }

    /// Truncating division, or [`BigIntError::DivideByZero`].
    #[inline]
    pub fn checked_div(&self, other: &BigInt) -> Result<BigInt, BigIntError> {
        self.checked_div_rem(other).map(|(q, _)| q)
    }

    /// Remainder with the sign of the dividend, or [`BigIntError::DivideByZero`].
    #[inline]
    pub fn checked_rem(&self, other: &BigInt) -> Result<BigInt, BigIntError> {
        self.checked_div_rem(other).map(|(_, r)| r)
    }

    /// Divide by a single non-zero digit, returning the truncated quotient
    /// and the remainder magnitude.
    #[inline]
    pub(crate) fn div_rem_digit(&self, d: BigDigit) -> (BigInt, BigDigit) {
        let (q, r) = div_rem_digit(self.data.clone(), d);
        (BigInt::from_vec(self.sign, q), r)
    }
}

impl<'a, 'b> Div<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn div(self, other: &BigInt) -> BigInt {
        let (q, _) = self.div_rem(other);
        q
    }
}

impl<'a, 'b> Rem<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn rem(self, other: &BigInt) -> BigInt {
        let (_, r) = self.div_rem(other);
        r
    }
}

impl_arith_family!(impl Div, div, DivAssign, div_assign for BigInt);
impl_arith_family!(impl Rem, rem, RemAssign, rem_assign for BigInt);

impl CheckedDiv for BigInt {
    #[inline]
    fn checked_div(&self, v: &BigInt) -> Option<BigInt> {
        BigInt::checked_div(self, v).ok()
    }
}

impl CheckedRem for BigInt {
    #[inline]
    fn checked_rem(&self, v: &BigInt) -> Option<BigInt> {
        BigInt::checked_rem(self, v).ok()
    }
}

impl Integer for BigInt {
    /// Truncating division with remainder.
    ///
    /// Panics if `other` is zero.
    #[inline]
    fn div_rem(&self, other: &BigInt) -> (BigInt, BigInt) {
        match self.checked_div_rem(other) {
            Ok(qr) => qr,
            Err(e) => panic!("{}", e),
        }
    }

    #[inline]
    fn div_floor(&self, other: &BigInt) -> BigInt {
        let (q, r) = self.div_rem(other);
        if !r.is_zero() && r.sign != other.sign {
            q - 1u8
        } else {
            q
        }
    }

    #[inline]
    fn mod_floor(&self, other: &BigInt) -> BigInt {
        let r = self % other;
        if !r.is_zero() && r.sign != other.sign {
            r + other
        } else {
            r
        }
    }

    /// Non-negative greatest common divisor, see [`gcd`](crate::gcd).
    #[inline]
    fn gcd(&self, other: &BigInt) -> BigInt {
        crate::algorithms::gcd(self, other)
    }

    /// Non-negative least common multiple, see [`lcm`](crate::lcm).
    #[inline]
    fn lcm(&self, other: &BigInt) -> BigInt {
        crate::algorithms::lcm(self, other)
    }

    #[inline]
    fn is_multiple_of(&self, other: &BigInt) -> bool {
        if other.is_zero() {
            return self.is_zero();
        }
        (self % other).is_zero()
    }

    #[inline]
    fn is_even(&self) -> bool {
        self.data.first().map_or(true, |d| d % 2 == 0)
    }

    #[inline]
    fn is_odd(&self) -> bool {
        !self.is_even()
    }
}

/// Halve a non-negative value, rounding down.
#[inline]
pub(crate) fn halve(n: &BigInt) -> BigInt {
    debug_assert!(n.sign != Minus);
    n.div_rem_digit(2).0
}

/// The digit of a positive single-digit value.
#[inline]
pub(crate) fn single_digit(d: &BigInt) -> Option<BigDigit> {
    match (d.sign, &d.data[..]) {
        (Plus, &[digit]) => Some(digit),
        _ => None,
    }
}
