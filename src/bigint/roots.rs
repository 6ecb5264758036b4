use num_traits::{One, Signed, Zero};

use crate::BigIntError;

use super::division::{halve, single_digit};
use super::BigInt;

impl BigInt {
    /// Returns the truncated principal square root of `self`, the largest
    /// `r` with `r * r <= self`.
    ///
    /// ```
    /// use num_bigint_dec::{BigInt, BigIntError};
    ///
    /// assert_eq!(BigInt::from(9801).sqrt(), Ok(BigInt::from(99)));
    /// assert_eq!(BigInt::from(-4).sqrt(), Err(BigIntError::NegativeSquareRoot));
    /// ```
    pub fn sqrt(&self) -> Result<BigInt, BigIntError> {
        if self.is_negative() {
            return Err(BigIntError::NegativeSquareRoot);
        }

        if let Some(small) = self.to_small() {
            let root: u8 = match small {
                0 => 0,
                1..=3 => 1,
                4..=8 => 2,
                _ => 3,
            };
            return Ok(BigInt::from(root));
        }

        // 10^ceil(d/2) lies above the root, so Newton's iteration descends
        // monotonically onto the floor and then stops decreasing.
        let mut guess = BigInt::one();
        guess.data = alloc::vec![0; (self.data.len() + 1) / 2];
        guess.data.push(1);

        loop {
            let next = halve(&(&guess + self / &guess));
            if next >= guess {
                return Ok(guess);
            }
            guess = next;
        }
    }

    /// Value of `self` when it lies in `0..16`, the range answered by the
    /// square root lookup.
    fn to_small(&self) -> Option<u8> {
        match self.data[..] {
            [] => Some(0),
            [d] => Some(d),
            [d, 1] if d < 6 => Some(10 + d),
            _ => None,
        }
    }

    /// Returns the floor of the logarithm of `self` in the given `base`.
    ///
    /// ```
    /// use num_bigint_dec::BigInt;
    ///
    /// let n = BigInt::from(1000);
    /// assert_eq!(n.log(&BigInt::from(10)), Ok(BigInt::from(3)));
    /// assert_eq!(n.log(&BigInt::from(2)), Ok(BigInt::from(9)));
    /// ```
    pub fn log(&self, base: &BigInt) -> Result<BigInt, BigIntError> {
        if !self.is_positive() || *base < BigInt::from(2u8) {
            return Err(BigIntError::MathDomainError);
        }

        let mut count: u64 = 0;
        let mut n = self.clone();
        match single_digit(base) {
            Some(d) => loop {
                n = n.div_rem_digit(d).0;
                if n.is_zero() {
                    break;
                }
                count += 1;
            },
            None => loop {
                n = &n / base;
                if n.is_zero() {
                    break;
                }
                count += 1;
            },
        }

        Ok(BigInt::from(count))
    }
}

/// Integer square root of `n`. See [`BigInt::sqrt`].
#[inline]
pub fn sqrt(n: &BigInt) -> Result<BigInt, BigIntError> {
    n.sqrt()
}

/// Floor logarithm of `n` in `base`. See [`BigInt::log`].
#[inline]
pub fn log(n: &BigInt, base: &BigInt) -> Result<BigInt, BigIntError> {
    n.log(base)
}
