use alloc::vec::Vec;
use core::ops::{Add, AddAssign};

use crate::big_digit::{self, BigDigit, DoubleBigDigit};

use super::Sign::{self, Minus, NoSign, Plus};
use super::{pad, BigInt};

/// Add with carry.
#[inline]
pub fn adc(a: BigDigit, b: BigDigit, acc: &mut BigDigit) -> BigDigit {
    let sum = DoubleBigDigit::from(a) + DoubleBigDigit::from(b) + DoubleBigDigit::from(*acc);
    let (hi, lo) = big_digit::split(sum);
    *acc = hi;
    lo
}

/// Two argument addition of raw slices, `a += b`, returning the carry.
///
/// This is used when the data `Vec` might need to resize to push a non-zero carry, so we perform
/// the addition first hoping that it will fit.
///
/// The caller _must_ ensure that `a` is at least as long as `b`.
#[inline]
pub fn __add2(a: &mut [BigDigit], b: &[BigDigit]) -> BigDigit {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry
}

/// Two argument addition of raw slices:
/// a += b
///
/// The caller _must_ ensure that a is big enough to store the result - typically this means
/// resizing a to max(a.len(), b.len()) + 1, to fit a possible carry.
pub fn add2(a: &mut [BigDigit], b: &[BigDigit]) {
    let carry = __add2(a, b);

    assert!(carry == 0);
}

/// Vertical addition of two magnitudes. The longer operand is padded by one
/// digit so the final carry always has somewhere to land.
pub(crate) fn add_magnitudes(a: &[BigDigit], b: &[BigDigit]) -> Vec<BigDigit> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut sum = long.to_vec();
    pad(&mut sum, 1);
    add2(&mut sum, short);
    sum
}

/// `a + b` for two operands that share a non-zero sign.
#[inline]
pub(crate) fn add_same_sign(sign: Sign, a: &[BigDigit], b: &[BigDigit]) -> BigInt {
    BigInt::from_vec(sign, add_magnitudes(a, b))
}

/// Add one to a non-empty magnitude, touching only the trailing run of nines.
pub(crate) fn grow_by_one(data: &mut Vec<BigDigit>) {
    for d in data.iter_mut() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    data.push(1);
}

impl<'a, 'b> Add<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        match (self.sign, other.sign) {
            (_, NoSign) => self.clone(),
            (NoSign, _) => other.clone(),

            // a + b == a - (-b), and -b carries the sign of a
            (Plus, Minus) | (Minus, Plus) => {
                super::subtraction::sub_same_sign(self.sign, &self.data, &other.data)
            }

            (sign, _) => add_same_sign(sign, &self.data, &other.data),
        }
    }
}

impl_arith_family!(impl Add, add, AddAssign, add_assign for BigInt);

impl BigInt {
    /// Adds one in place. Equivalent to `*self += 1`, but only walks the
    /// trailing run of digits that actually change.
    ///
    /// ```
    /// use num_bigint_dec::BigInt;
    ///
    /// let mut n = BigInt::from(-1);
    /// n.increment();
    /// assert_eq!(n, BigInt::from(0));
    /// n.increment();
    /// assert_eq!(n, BigInt::from(1));
    /// ```
    pub fn increment(&mut self) {
        match self.sign {
            NoSign => {
                self.sign = Plus;
                self.data.push(1);
            }
            Plus => grow_by_one(&mut self.data),
            Minus => {
                super::subtraction::shrink_by_one(&mut self.data);
                self.normalize();
            }
        }
    }
}
