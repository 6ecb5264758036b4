use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::convert::TryFrom;
use core::fmt;
use core::str::FromStr;

use num_traits::float::FloatCore;
use num_traits::{FromPrimitive, Num, Pow, Signed, ToPrimitive, Zero};

use crate::big_digit::BigDigit;
use crate::{BigIntError, TryFromBigIntError};

use super::BigInt;
use super::Sign::{self, Minus, NoSign, Plus};

impl FromStr for BigInt {
    type Err = BigIntError;

    /// Parses an optional `+` or `-` followed by one or more decimal digits.
    /// Anything else, surrounding whitespace included, is an
    /// [`BigIntError::InvalidLiteral`].
    fn from_str(s: &str) -> Result<BigInt, BigIntError> {
        let (sign, digits) = match s.as_bytes().first() {
            Some(b'-') => (Minus, &s[1..]),
            Some(b'+') => (Plus, &s[1..]),
            _ => (Plus, s),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BigIntError::InvalidLiteral);
        }

        let data: Vec<BigDigit> = digits.bytes().rev().map(|b| b - b'0').collect();
        Ok(BigInt::from_vec(sign, data))
    }
}

impl BigInt {
    /// Like [`FromStr`], but ignores leading and trailing whitespace.
    ///
    /// ```
    /// use num_bigint_dec::BigInt;
    ///
    /// assert_eq!(BigInt::parse_trimmed("  -42\n"), Ok(BigInt::from(-42)));
    /// assert!(" -42".parse::<BigInt>().is_err());
    /// ```
    #[inline]
    pub fn parse_trimmed(s: &str) -> Result<BigInt, BigIntError> {
        s.trim().parse()
    }

    /// Digits, most significant first, without a sign.
    fn magnitude_string(&self) -> String {
        if self.data.is_empty() {
            return "0".to_string();
        }
        self.data.iter().rev().map(|&d| char::from(b'0' + d)).collect()
    }

    /// Fold the magnitude into a `u128`, or `None` on overflow.
    fn magnitude_u128(&self) -> Option<u128> {
        self.data.iter().rev().try_fold(0u128, |acc, &d| {
            acc.checked_mul(10)?.checked_add(u128::from(d))
        })
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_string())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Num for BigInt {
    type FromStrRadixErr = BigIntError;

    /// Only radix 10 is supported; any other radix is an invalid literal.
    #[inline]
    fn from_str_radix(s: &str, radix: u32) -> Result<BigInt, BigIntError> {
        if radix != 10 {
            return Err(BigIntError::InvalidLiteral);
        }
        s.parse()
    }
}

impl From<u128> for BigInt {
    fn from(mut n: u128) -> Self {
        let mut data = Vec::new();
        while n != 0 {
            data.push((n % 10) as BigDigit);
            n /= 10;
        }
        BigInt::from_vec(Plus, data)
    }
}

impl From<i128> for BigInt {
    #[inline]
    fn from(n: i128) -> Self {
        let magnitude = BigInt::from(n.unsigned_abs());
        if n < 0 {
            -magnitude
        } else {
            magnitude
        }
    }
}

macro_rules! impl_bigint_from {
    ($wide:ty; $($T:ident)*) => {$(
        impl From<$T> for BigInt {
            #[inline]
            fn from(n: $T) -> Self {
                BigInt::from(n as $wide)
            }
        }
    )*};
}

impl_bigint_from!(u128; u8 u16 u32 u64 usize);
impl_bigint_from!(i128; i8 i16 i32 i64 isize);

impl ToPrimitive for BigInt {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|n| i64::try_from(n).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        let magnitude = self.magnitude_u128()?;
        match self.sign {
            Minus if magnitude == 1 << 127 => Some(i128::MIN),
            Minus => i128::try_from(magnitude).ok().map(|n| -n),
            NoSign | Plus => i128::try_from(magnitude).ok(),
        }
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| u64::try_from(n).ok())
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        match self.sign {
            Minus => None,
            NoSign | Plus => self.magnitude_u128(),
        }
    }

    #[inline]
    fn to_f32(&self) -> Option<f32> {
        self.to_string().parse().ok()
    }

    /// Correctly rounded through the decimal text; values beyond `f64::MAX`
    /// become infinite.
    #[inline]
    fn to_f64(&self) -> Option<f64> {
        self.to_string().parse().ok()
    }
}

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_f32(n: f32) -> Option<BigInt> {
        BigInt::from_f64(f64::from(n))
    }

    fn from_f64(n: f64) -> Option<BigInt> {
        // handle NAN, INFINITY, NEG_INFINITY
        if !n.is_finite() {
            return None;
        }

        // match the rounding of casting from float to int
        let n = FloatCore::trunc(n);

        // handle 0.x, -0.x
        if n.is_zero() {
            return Some(BigInt::zero());
        }

        let (mantissa, exponent, sign) = FloatCore::integer_decode(n);

        let scale = Pow::pow(BigInt::from(2u8), exponent.unsigned_abs());
        let mut ret = BigInt::from(mantissa);
        if exponent > 0 {
            ret = ret * scale;
        } else if exponent < 0 {
            ret = ret / scale;
        }

        if sign == -1 {
            ret = -ret;
        }
        Some(ret)
    }
}

macro_rules! impl_try_from_bigint {
    ($T:ty, $to_ty:path) => {
        impl TryFrom<&BigInt> for $T {
            type Error = TryFromBigIntError<()>;

            #[inline]
            fn try_from(value: &BigInt) -> Result<$T, TryFromBigIntError<()>> {
                $to_ty(value).ok_or(TryFromBigIntError::new(()))
            }
        }

        impl TryFrom<BigInt> for $T {
            type Error = TryFromBigIntError<BigInt>;

            #[inline]
            fn try_from(value: BigInt) -> Result<$T, TryFromBigIntError<BigInt>> {
                <$T>::try_from(&value).map_err(|_| TryFromBigIntError::new(value))
            }
        }
    };
}

impl_try_from_bigint!(u8, ToPrimitive::to_u8);
impl_try_from_bigint!(u16, ToPrimitive::to_u16);
impl_try_from_bigint!(u32, ToPrimitive::to_u32);
impl_try_from_bigint!(u64, ToPrimitive::to_u64);
impl_try_from_bigint!(usize, ToPrimitive::to_usize);
impl_try_from_bigint!(u128, ToPrimitive::to_u128);

impl_try_from_bigint!(i8, ToPrimitive::to_i8);
impl_try_from_bigint!(i16, ToPrimitive::to_i16);
impl_try_from_bigint!(i32, ToPrimitive::to_i32);
impl_try_from_bigint!(i64, ToPrimitive::to_i64);
impl_try_from_bigint!(isize, ToPrimitive::to_isize);
impl_try_from_bigint!(i128, ToPrimitive::to_i128);

impl From<Sign> for BigInt {
    /// `-1`, `0` or `1`.
    #[inline]
    fn from(sign: Sign) -> Self {
        match sign {
            Minus => BigInt::from(-1i8),
            NoSign => BigInt::zero(),
            Plus => BigInt::from(1u8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_from_str_strict() {
        assert_eq!("0".parse::<BigInt>().unwrap().sign(), NoSign);
        assert_eq!("-0".parse::<BigInt>().unwrap().sign(), NoSign);
        assert_eq!("+0".parse::<BigInt>().unwrap().sign(), NoSign);
        assert_eq!("000123".parse::<BigInt>(), Ok(BigInt::from(123)));
        assert_eq!("-000123".parse::<BigInt>(), Ok(BigInt::from(-123)));
        assert_eq!("+7".parse::<BigInt>(), Ok(BigInt::from(7)));

        for bad in ["", "-", "+", "12a", " 1", "1 ", "--1", "+-1", "1_000", "٣"] {
            assert_eq!(bad.parse::<BigInt>(), Err(BigIntError::InvalidLiteral), "{:?}", bad);
        }
    }

    #[test]
    fn test_parse_trimmed() {
        assert_eq!(BigInt::parse_trimmed("\t 15 \n"), Ok(BigInt::from(15)));
        assert_eq!(BigInt::parse_trimmed("  "), Err(BigIntError::InvalidLiteral));
        assert_eq!(BigInt::parse_trimmed("- 1"), Err(BigIntError::InvalidLiteral));
    }

    #[test]
    fn test_from_str_radix() {
        assert_eq!(BigInt::from_str_radix("-255", 10), Ok(BigInt::from(-255)));
        assert_eq!(BigInt::from_str_radix("ff", 16), Err(BigIntError::InvalidLiteral));
        assert_eq!(BigInt::from_str_radix("11", 2), Err(BigIntError::InvalidLiteral));
    }

    #[test]
    fn test_display() {
        let n: BigInt = "-00012345678901234567890".parse().unwrap();
        assert_eq!(n.to_string(), "-12345678901234567890");
        assert_eq!(BigInt::zero().to_string(), "0");
        assert_eq!(format!("{:?}", BigInt::from(-5)), "-5");
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(format!("{:+}", BigInt::from(42)), "+42");
        assert_eq!(format!("{:>6}", BigInt::from(-42)), "   -42");
        assert_eq!(format!("{:06}", BigInt::from(-42)), "-00042");
        assert_eq!(format!("{:<4}|", BigInt::from(0)), "0   |");
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(BigInt::from(0u8).sign(), NoSign);
        assert_eq!(BigInt::from(i8::MIN).to_string(), "-128");
        assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(
            BigInt::from(i128::MIN).to_string(),
            "-170141183460469231731687303715884105728"
        );
        assert_eq!(
            BigInt::from(u128::MAX).to_string(),
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn test_to_primitive_ranges() {
        let n = BigInt::from(i64::MIN);
        assert_eq!(n.to_i64(), Some(i64::MIN));
        assert_eq!(n.to_u64(), None);
        assert_eq!((&n - 1u8).to_i64(), None);

        assert_eq!(BigInt::from(i128::MIN).to_i128(), Some(i128::MIN));
        assert_eq!(BigInt::from(u128::MAX).to_u128(), Some(u128::MAX));
        assert_eq!((BigInt::from(u128::MAX) + 1u8).to_u128(), None);
        assert_eq!(BigInt::from(300).to_u8(), None);
        assert_eq!(BigInt::zero().to_u8(), Some(0));
    }

    #[test]
    fn test_try_from() {
        assert_eq!(u8::try_from(&BigInt::from(255)), Ok(255u8));
        assert!(u8::try_from(&BigInt::from(256)).is_err());
        assert!(u32::try_from(&BigInt::from(-1)).is_err());
        assert_eq!(i16::try_from(BigInt::from(-32768)), Ok(i16::MIN));

        let big = BigInt::from(i64::MAX) + 1u8;
        let err = i64::try_from(big.clone()).unwrap_err();
        assert_eq!(err.into_original(), big);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(BigInt::from(-3).to_f64(), Some(-3.0));
        assert_eq!(BigInt::zero().to_f64(), Some(0.0));
        assert_eq!(
            BigInt::from(9007199254740993u64).to_f64(),
            Some(9007199254740992.0)
        );

        let huge = Pow::pow(BigInt::from(10u8), 400u32);
        assert_eq!(huge.to_f64(), Some(f64::INFINITY));
        assert_eq!((-huge).to_f64(), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(BigInt::from_f64(-2.9), Some(BigInt::from(-2)));
        assert_eq!(BigInt::from_f64(0.5), Some(BigInt::zero()));
        assert_eq!(BigInt::from_f64(1e20), Some(BigInt::from(100_000_000_000_000_000_000u128)));
        assert_eq!(BigInt::from_f64(f64::NAN), None);
        assert_eq!(BigInt::from_f64(f64::INFINITY), None);
        assert_eq!(BigInt::from_f32(-16.0), Some(BigInt::from(-16)));
    }

    #[test]
    fn test_from_sign() {
        assert_eq!(BigInt::from(Minus), BigInt::from(-1));
        assert_eq!(BigInt::from(NoSign), BigInt::zero());
        assert_eq!(BigInt::from(Plus), BigInt::from(1));
    }
}
