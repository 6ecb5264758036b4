use num_integer::Integer;
use num_traits::{One, Pow, Signed, Zero};

use crate::BigIntError;

use super::division::halve;
use super::BigInt;
use super::Sign::Minus;

impl BigInt {
    /// Raises `self` to the power of `exponent`.
    ///
    /// A negative exponent yields `0`, except that a base of magnitude one
    /// yields `±1` and a zero base is a [`BigIntError::MathDomainError`].
    ///
    /// ```
    /// use num_bigint_dec::BigInt;
    ///
    /// let two = BigInt::from(2);
    /// assert_eq!(
    ///     two.pow(&BigInt::from(100)).unwrap().to_string(),
    ///     "1267650600228229401496703205376"
    /// );
    /// ```
    #[inline]
    pub fn pow(&self, exponent: &BigInt) -> Result<BigInt, BigIntError> {
        self.modpow(exponent, &BigInt::zero())
    }

    /// Returns `(self ^ exponent) % modulus`, where a zero `modulus` means no
    /// reduction at all.
    ///
    /// Reductions use the truncating remainder, so a negative intermediate
    /// keeps its sign, just like `%`.
    pub fn modpow(&self, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt, BigIntError> {
        let reduce = |x: BigInt| {
            if modulus.is_zero() {
                x
            } else {
                x % modulus
            }
        };

        if self.is_zero() && exponent.is_negative() {
            return Err(BigIntError::MathDomainError);
        }

        if self.data[..] == [1] {
            let one = if self.sign == Minus && exponent.is_odd() {
                -BigInt::one()
            } else {
                BigInt::one()
            };
            return Ok(reduce(one));
        }

        if exponent.is_negative() {
            return Ok(BigInt::zero());
        }

        // square and multiply, from the low digit of the exponent up
        let mut acc = reduce(BigInt::one());
        let mut base = reduce(self.clone());
        let mut exp = exponent.clone();
        while !exp.is_zero() {
            if exp.is_odd() {
                acc = reduce(&acc * &base);
            }
            exp = halve(&exp);
            if !exp.is_zero() {
                base = reduce(&base * &base);
            }
        }

        Ok(acc)
    }
}

/// Square-and-multiply for a native exponent.
fn pow_native(base: &BigInt, mut exp: u128) -> BigInt {
    if exp == 0 {
        return BigInt::one();
    }
    if base.is_zero() || base.data[..] == [1] {
        return if base.sign == Minus && exp % 2 == 0 {
            -base
        } else {
            base.clone()
        };
    }

    let mut base = base.clone();
    while exp % 2 == 0 {
        base = &base * &base;
        exp /= 2;
    }
    let mut acc = base.clone();
    while exp > 1 {
        exp /= 2;
        base = &base * &base;
        if exp % 2 == 1 {
            acc = &acc * &base;
        }
    }
    acc
}

macro_rules! pow_impl {
    ($T:ty) => {
        impl Pow<$T> for BigInt {
            type Output = BigInt;

            #[inline]
            fn pow(self, exp: $T) -> BigInt {
                pow_native(&self, exp as u128)
            }
        }

        impl<'b> Pow<&'b $T> for BigInt {
            type Output = BigInt;

            #[inline]
            fn pow(self, exp: &$T) -> BigInt {
                pow_native(&self, *exp as u128)
            }
        }

        impl<'a> Pow<$T> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn pow(self, exp: $T) -> BigInt {
                pow_native(self, exp as u128)
            }
        }

        impl<'a, 'b> Pow<&'b $T> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn pow(self, exp: &$T) -> BigInt {
                pow_native(self, *exp as u128)
            }
        }
    };
}

pow_impl!(u8);
pow_impl!(u16);
pow_impl!(u32);
pow_impl!(u64);
pow_impl!(usize);
pow_impl!(u128);

impl<'b> Pow<&'b BigInt> for BigInt {
    type Output = BigInt;

    /// Panics on zero raised to a negative power.
    #[inline]
    fn pow(self, exp: &BigInt) -> BigInt {
        Pow::pow(&self, exp)
    }
}

impl<'a, 'b> Pow<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    /// Panics on zero raised to a negative power.
    fn pow(self, exp: &BigInt) -> BigInt {
        match self.modpow(exp, &BigInt::zero()) {
            Ok(n) => n,
            Err(e) => panic!("{}", e),
        }
    }
}
