use alloc::vec::Vec;
use core::cmp::Ordering::{Equal, Greater, Less};
use core::ops::{Sub, SubAssign};

use num_traits::Zero;

use crate::big_digit::BigDigit;

use super::Sign::{self, Minus, NoSign, Plus};
use super::{cmp_slice, BigInt};

/// Subtract with borrow.
#[inline]
pub fn sbb(a: BigDigit, b: BigDigit, acc: &mut BigDigit) -> BigDigit {
    let diff = i16::from(a) - i16::from(b) - i16::from(*acc);
    if diff < 0 {
        *acc = 1;
        (diff + 10) as BigDigit
    } else {
        *acc = 0;
        diff as BigDigit
    }
}

/// Two argument subtraction of raw slices, `a -= b`, returning the borrow.
///
/// The caller _must_ ensure that `a` is at least as long as `b`.
#[inline]
pub fn __sub2(a: &mut [BigDigit], b: &[BigDigit]) -> BigDigit {
    debug_assert!(a.len() >= b.len());

    let mut borrow = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = sbb(*a, *b, &mut borrow);
    }

    if borrow != 0 {
        for a in a_hi {
            *a = sbb(*a, 0, &mut borrow);
            if borrow == 0 {
                break;
            }
        }
    }

    borrow
}

/// Two argument subtraction of raw slices: `a -= b`.
///
/// The value held by `a` must not be smaller than `b`.
pub fn sub2(a: &mut [BigDigit], b: &[BigDigit]) {
    let (b_lo, b_hi) = b.split_at(Ord::min(a.len(), b.len()));
    let borrow = __sub2(a, b_lo);

    assert!(
        borrow == 0 && b_hi.iter().all(|x| *x == 0),
        "Cannot subtract b from a because b is larger than a."
    );
}

/// Vertical subtraction of magnitudes, requiring `a >= b`.
pub(crate) fn sub_magnitudes(a: &[BigDigit], b: &[BigDigit]) -> Vec<BigDigit> {
    let mut diff = a.to_vec();
    sub2(&mut diff, b);
    diff
}

/// `a - b` for two operands that share a non-zero sign. The smaller
/// magnitude is always taken from the larger; when that means swapping the
/// operands the result takes the opposite sign.
pub(crate) fn sub_same_sign(sign: Sign, a: &[BigDigit], b: &[BigDigit]) -> BigInt {
    match cmp_slice(a, b) {
        Greater => BigInt::from_vec(sign, sub_magnitudes(a, b)),
        Less => BigInt::from_vec(-sign, sub_magnitudes(b, a)),
        Equal => Zero::zero(),
    }
}

/// Subtract one from a non-zero magnitude, touching only the trailing run
/// of zeros. The result may carry a most-significant zero.
pub(crate) fn shrink_by_one(data: &mut [BigDigit]) {
    for d in data.iter_mut() {
        if *d == 0 {
            *d = 9;
        } else {
            *d -= 1;
            return;
        }
    }
    unreachable!("shrink_by_one on a zero magnitude");
}

impl<'a, 'b> Sub<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        match (self.sign, other.sign) {
            (_, NoSign) => self.clone(),
            (NoSign, _) => -other,

            // a - b == a + (-b), and -b carries the sign of a
            (Plus, Minus) | (Minus, Plus) => {
                super::addition::add_same_sign(self.sign, &self.data, &other.data)
            }

            (sign, _) => sub_same_sign(sign, &self.data, &other.data),
        }
    }
}

impl_arith_family!(impl Sub, sub, SubAssign, sub_assign for BigInt);

impl BigInt {
    /// Subtracts one in place. Equivalent to `*self -= 1`, but only walks
    /// the trailing run of digits that actually change.
    ///
    /// ```
    /// use num_bigint_dec::BigInt;
    ///
    /// let mut n = BigInt::from(1);
    /// n.decrement();
    /// assert_eq!(n, BigInt::from(0));
    /// n.decrement();
    /// assert_eq!(n, BigInt::from(-1));
    /// ```
    pub fn decrement(&mut self) {
        match self.sign {
            NoSign => {
                self.sign = Minus;
                self.data.push(1);
            }
            Minus => super::addition::grow_by_one(&mut self.data),
            Plus => {
                shrink_by_one(&mut self.data);
                self.normalize();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    fn big(s: &str) -> BigInt {
        BigInt::from_str(s).unwrap()
    }

    #[test]
    fn test_sbb() {
        let mut borrow = 0;
        assert_eq!(sbb(0, 1, &mut borrow), 9);
        assert_eq!(borrow, 1);
        assert_eq!(sbb(0, 0, &mut borrow), 9);
        assert_eq!(borrow, 1);
        assert_eq!(sbb(5, 2, &mut borrow), 2);
        assert_eq!(borrow, 0);
    }

    #[test]
    fn test_sub2_borrow_chain() {
        // 1000 - 1
        let mut a = alloc::vec![0, 0, 0, 1];
        sub2(&mut a, &[1]);
        assert_eq!(a, [9, 9, 9, 0]);
    }

    #[test]
    #[should_panic(expected = "Cannot subtract b from a because b is larger than a.")]
    fn test_sub2_underflow() {
        let mut a = alloc::vec![1];
        sub2(&mut a, &[2]);
    }

    #[test]
    fn test_sub_swaps_operands() {
        assert_eq!(big("3") - big("10"), big("-7"));
        assert_eq!(big("-3") - big("-10"), big("7"));
        assert_eq!(big("-10") - big("-3"), big("-7"));
        assert_eq!(big("10") - big("3"), big("7"));
    }

    #[test]
    fn test_sub_zero_cases() {
        let a = big("4242");
        assert_eq!(&a - BigInt::zero(), a);
        assert_eq!(BigInt::zero() - &a, -&a);
        assert_eq!(BigInt::zero() - BigInt::zero(), BigInt::zero());
    }

    #[test]
    fn test_sub_mixed_signs() {
        assert_eq!(big("5") - big("-5"), big("10"));
        assert_eq!(big("-5") - big("5"), big("-10"));
    }

    #[test]
    fn test_sub_cancellation_normalizes() {
        let d = big("100000000000000000000") - big("99999999999999999999");
        assert_eq!(d, big("1"));
        assert_eq!(d.digits(), 1);

        let d = big("123") - big("123");
        assert_eq!(d.sign(), NoSign);
        assert!(d.digits_le().is_empty());
    }

    #[test]
    fn test_sub_scalars() {
        assert_eq!(big("100") - 1u32, big("99"));
        assert_eq!(0i32 - big("100"), big("-100"));
        let mut n = big("1");
        n -= 2u8;
        assert_eq!(n, big("-1"));
    }

    #[test]
    fn test_decrement_boundaries() {
        let cases = [
            ("0", "-1"),
            ("1", "0"),
            ("10", "9"),
            ("1000", "999"),
            ("-9", "-10"),
            ("-999", "-1000"),
            ("1300", "1299"),
        ];
        for &(input, expected) in &cases {
            let mut n = big(input);
            n.decrement();
            assert_eq!(n, big(expected));
            assert_eq!(big(input) - 1i32, n);
        }
    }
}
