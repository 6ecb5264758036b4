use alloc::vec::Vec;
use core::ops::{Mul, MulAssign};

use num_traits::Zero;

use crate::big_digit::{self, BigDigit, DoubleBigDigit};

use super::addition::adc;
use super::{pad, BigInt};

/// Multiply-accumulate one digit position: returns the low digit of
/// `a + b * c + acc` and leaves the high digit in `acc`.
#[inline]
pub fn mac_with_carry(a: BigDigit, b: BigDigit, c: BigDigit, acc: &mut BigDigit) -> BigDigit {
    let sum = DoubleBigDigit::from(a)
        + DoubleBigDigit::from(b) * DoubleBigDigit::from(c)
        + DoubleBigDigit::from(*acc);
    let (hi, lo) = big_digit::split(sum);
    *acc = hi;
    lo
}

/// `acc += b * c` for a single digit `c`.
///
/// `acc` must be at least one digit longer than `b` so the final carry fits.
pub fn mac_digit(acc: &mut [BigDigit], b: &[BigDigit], c: BigDigit) {
    if c == 0 {
        return;
    }

    let mut carry = 0;
    let (a_lo, a_hi) = acc.split_at_mut(b.len());

    for (a, &b) in a_lo.iter_mut().zip(b) {
        *a = mac_with_carry(*a, b, c, &mut carry);
    }

    let mut a_hi = a_hi.iter_mut();
    while carry != 0 {
        let a = a_hi.next().expect("carry overflow during multiplication!");
        *a = adc(*a, 0, &mut carry);
    }
}

/// Schoolbook multiplication: `acc += b * c`.
///
/// Every pair of positions `(i, j)` contributes `c[i] * b[j]` at `i + j`,
/// carrying into `i + j + 1` and beyond.
pub fn mac3(acc: &mut [BigDigit], b: &[BigDigit], c: &[BigDigit]) {
    let (x, y) = if b.len() < c.len() { (b, c) } else { (c, b) };

    for (i, xi) in x.iter().enumerate() {
        mac_digit(&mut acc[i..], y, *xi);
    }
}

/// Product of two magnitudes, `len(x) + len(y)` digits wide before
/// normalization.
pub fn mul3(x: &[BigDigit], y: &[BigDigit]) -> Vec<BigDigit> {
    let mut prod = Vec::new();
    pad(&mut prod, x.len() + y.len());
    mac3(&mut prod, x, y);
    prod
}

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }

        BigInt::from_vec(self.sign * other.sign, mul3(&self.data, &other.data))
    }
}

impl_arith_family!(impl Mul, mul, MulAssign, mul_assign for BigInt);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::Sign::{Minus, NoSign, Plus};
    use core::str::FromStr;
    use num_traits::One;

    fn big(s: &str) -> BigInt {
        BigInt::from_str(s).unwrap()
    }

    #[test]
    fn test_mac_with_carry() {
        let mut carry = 9;
        assert_eq!(mac_with_carry(9, 9, 9, &mut carry), 9);
        assert_eq!(carry, 9);
    }

    #[test]
    fn test_mac_digit() {
        // 0 + 999 * 9
        let mut acc = alloc::vec![0; 4];
        mac_digit(&mut acc, &[9, 9, 9], 9);
        assert_eq!(acc, [1, 9, 9, 8]);
    }

    #[test]
    fn test_mul3_width() {
        let prod = mul3(&[9, 9], &[9, 9, 9]);
        assert_eq!(prod.len(), 5);
        // 99 * 999 = 98901
        assert_eq!(prod, [1, 0, 9, 8, 9]);

        // 10 * 10 leaves a most-significant zero for normalization
        assert_eq!(mul3(&[0, 1], &[0, 1]), [0, 0, 1, 0]);
    }

    #[test]
    fn test_mul_signs() {
        assert_eq!(big("-12") * big("12"), big("-144"));
        assert_eq!(big("-12") * big("-12"), big("144"));
        assert_eq!((big("-12") * big("0")).sign(), NoSign);
        assert_eq!((big("0") * big("-12")).sign(), NoSign);
        assert_eq!((big("3") * big("4")).sign(), Plus);
        assert_eq!((big("3") * big("-4")).sign(), Minus);
    }

    #[test]
    fn test_mul_identity() {
        let a = big("-98765432109876543210987654321");
        assert_eq!(&a * BigInt::one(), a);
        assert_eq!(BigInt::one() * &a, a);
        assert!((&a * BigInt::zero()).is_zero());
    }

    #[test]
    fn test_mul_large() {
        let a = big("18446744073709551616");
        assert_eq!(&a * &a, big("340282366920938463463374607431768211456"));
        assert_eq!(
            big("123456789012345678901234567890") * big("987654321098765432109876543210"),
            big("121932631137021795226185032733622923332237463801111263526900")
        );
    }

    #[test]
    fn test_mul_scalars() {
        assert_eq!(big("25") * 4u64, big("100"));
        assert_eq!(-3i8 * big("7"), big("-21"));
        let mut n = big("11");
        n *= 11u32;
        n *= &big("-1");
        assert_eq!(n, big("-121"));
    }
}
