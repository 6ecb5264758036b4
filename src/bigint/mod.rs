use alloc::vec::Vec;
use core::cmp::Ordering::{self, Equal};
use core::ops::{Mul, Neg};

use num_traits::{One, Signed, Zero};

use crate::big_digit::{BigDigit, BASE};

use self::Sign::{Minus, NoSign, Plus};

pub(crate) mod addition;
pub(crate) mod convert;
pub(crate) mod division;
pub(crate) mod multiplication;
pub(crate) mod power;
pub(crate) mod roots;
pub(crate) mod subtraction;

mod zeroize;

/// A Sign is a [`BigInt`]'s composing element.
#[derive(PartialEq, PartialOrd, Eq, Ord, Copy, Clone, Debug, Hash)]
pub enum Sign {
    Minus,
    NoSign,
    Plus,
}

impl Neg for Sign {
    type Output = Sign;

    /// Negate Sign value.
    #[inline]
    fn neg(self) -> Sign {
        match self {
            Minus => Plus,
            NoSign => NoSign,
            Plus => Minus,
        }
    }
}

impl Mul<Sign> for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, other: Sign) -> Sign {
        match (self, other) {
            (NoSign, _) | (_, NoSign) => NoSign,
            (Plus, Plus) | (Minus, Minus) => Plus,
            (Plus, Minus) | (Minus, Plus) => Minus,
        }
    }
}

/// A big signed integer type.
///
/// The magnitude is a little-endian vector of decimal digits. It never holds
/// a most-significant zero, and it is empty exactly when the sign is
/// [`Sign::NoSign`], so structural equality agrees with numeric equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) sign: Sign,
    pub(crate) data: Vec<BigDigit>,
}

impl Default for BigInt {
    #[inline]
    fn default() -> BigInt {
        Zero::zero()
    }
}

/// Compare two normalized magnitudes.
#[inline]
pub fn cmp_slice(a: &[BigDigit], b: &[BigDigit]) -> Ordering {
    debug_assert!(a.last() != Some(&0));
    debug_assert!(b.last() != Some(&0));

    match a.len().cmp(&b.len()) {
        Equal => a.iter().rev().cmp(b.iter().rev()),
        other => other,
    }
}

/// Append `n` zero digits at the most-significant end, so two operands can
/// be lined up for vertical arithmetic. Undone by normalization.
#[inline]
pub fn pad(data: &mut Vec<BigDigit>, n: usize) {
    data.resize(data.len() + n, 0);
}

/// The significant part of a magnitude that may carry most-significant zeros.
#[inline]
pub(crate) fn trim_slice(mut data: &[BigDigit]) -> &[BigDigit] {
    while let [rest @ .., 0] = data {
        data = rest;
    }
    data
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    #[inline]
    fn cmp(&self, other: &BigInt) -> Ordering {
        let scmp = self.sign.cmp(&other.sign);
        if scmp != Equal {
            return scmp;
        }

        match self.sign {
            NoSign => Equal,
            Plus => cmp_slice(&self.data, &other.data),
            Minus => cmp_slice(&other.data, &self.data),
        }
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        self.sign = -self.sign;
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl Zero for BigInt {
    #[inline]
    fn zero() -> BigInt {
        BigInt {
            sign: NoSign,
            data: Vec::new(),
        }
    }

    #[inline]
    fn set_zero(&mut self) {
        self.data.clear();
        self.sign = NoSign;
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.sign == NoSign
    }
}

impl One for BigInt {
    #[inline]
    fn one() -> BigInt {
        BigInt {
            sign: Plus,
            data: alloc::vec![1],
        }
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.sign == Plus && self.data[..] == [1]
    }
}

impl Signed for BigInt {
    #[inline]
    fn abs(&self) -> BigInt {
        match self.sign {
            Plus | NoSign => self.clone(),
            Minus => BigInt::from_vec(Plus, self.data.clone()),
        }
    }

    #[inline]
    fn abs_sub(&self, other: &BigInt) -> BigInt {
        if *self <= *other {
            Zero::zero()
        } else {
            self - other
        }
    }

    #[inline]
    fn signum(&self) -> BigInt {
        match self.sign {
            Plus => BigInt::one(),
            Minus => -BigInt::one(),
            NoSign => BigInt::zero(),
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        self.sign == Plus
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.sign == Minus
    }
}

impl BigInt {
    /// Creates and initializes a [`BigInt`] from little-endian decimal
    /// digits. Most-significant zeros are dropped.
    ///
    /// Returns `None` if any digit is 10 or larger. A non-zero magnitude
    /// given with [`Sign::NoSign`] is taken as positive.
    pub fn from_digits_le(sign: Sign, digits: Vec<BigDigit>) -> Option<BigInt> {
        if digits.iter().any(|&d| d >= BASE) {
            return None;
        }
        let sign = if sign == NoSign { Plus } else { sign };
        Some(BigInt::from_vec(sign, digits))
    }

    /// Creates and initializes a [`BigInt`] from big-endian decimal digits.
    pub fn from_digits_be(sign: Sign, digits: &[BigDigit]) -> Option<BigInt> {
        BigInt::from_digits_le(sign, digits.iter().rev().cloned().collect())
    }

    /// Crate-internal constructor: takes ownership of a magnitude that may
    /// carry most-significant zeros and brings it into canonical form.
    #[inline]
    pub(crate) fn from_vec(sign: Sign, data: Vec<BigDigit>) -> BigInt {
        let mut n = BigInt { sign, data };
        n.normalize();
        n
    }

    /// Strip most-significant zero digits, and force the sign to
    /// [`Sign::NoSign`] when nothing is left.
    #[inline]
    pub(crate) fn normalize(&mut self) {
        while let Some(&0) = self.data.last() {
            self.data.pop();
        }
        if self.data.is_empty() {
            self.sign = NoSign;
        }
        if self.data.len() < self.data.capacity() / 4 {
            self.data.shrink_to_fit();
        }
    }

    /// Returns the sign of the [`BigInt`] as a [`Sign`].
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the number of decimal digits, `0` for zero.
    ///
    /// ```
    /// use num_bigint_dec::BigInt;
    ///
    /// assert_eq!(BigInt::from(-1230).digits(), 4);
    /// assert_eq!(BigInt::from(0).digits(), 0);
    /// ```
    #[inline]
    pub fn digits(&self) -> usize {
        self.data.len()
    }

    /// The magnitude as decimal digits, least significant first.
    #[inline]
    pub fn digits_le(&self) -> &[BigDigit] {
        &self.data
    }

    /// The magnitude as decimal digits, most significant first.
    pub fn to_digits_be(&self) -> Vec<BigDigit> {
        self.data.iter().rev().cloned().collect()
    }

    /// Returns the sign and the little-endian magnitude, consuming `self`.
    #[inline]
    pub fn into_parts(self) -> (Sign, Vec<BigDigit>) {
        (self.sign, self.data)
    }

    /// Returns the absolute value as a non-negative [`BigInt`].
    #[inline]
    pub fn magnitude(&self) -> BigInt {
        self.abs()
    }

    /// Whether this value is prime. See [`algorithms::is_prime`](crate::algorithms::is_prime).
    #[inline]
    pub fn is_prime(&self) -> bool {
        crate::algorithms::is_prime(self)
    }

    /// The smallest prime strictly greater than `self`.
    /// See [`algorithms::next_prime`](crate::algorithms::next_prime).
    #[inline]
    pub fn next_prime(&self) -> BigInt {
        crate::algorithms::next_prime(self)
    }

    /// `self!`, or [`BigIntError::NegativeFactorial`](crate::BigIntError::NegativeFactorial)
    /// for negative values.
    #[inline]
    pub fn factorial(&self) -> Result<BigInt, crate::BigIntError> {
        crate::algorithms::factorial(self)
    }
}
