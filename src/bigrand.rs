//! Randomization of big integers
#![cfg(feature = "rand")]
#![cfg_attr(docsrs, doc(cfg(feature = "rand")))]

use alloc::vec::Vec;

use rand::distr::uniform::{Error, SampleBorrow, SampleUniform, UniformSampler};
use rand::prelude::*;

use crate::big_digit::{BigDigit, BASE};
use crate::BigInt;
use crate::Sign::*;

use num_traits::{Signed, ToPrimitive, Zero};

/// A trait for sampling random big integers.
///
/// The random source is always the receiver, so a seeded generator gives
/// reproducible values.
///
/// The `rand` feature must be enabled to use this. See crate-level documentation for details.
pub trait RandBigInt {
    /// Generate a random non-negative [`BigInt`] of at most the given number
    /// of decimal digits, uniformly in `[0, 10^digit_size)`.
    fn gen_unsigned_bigint(&mut self, digit_size: u64) -> BigInt;

    /// Generate a random [`BigInt`] of at most the given number of decimal
    /// digits, with either sign.
    fn gen_bigint(&mut self, digit_size: u64) -> BigInt;

    /// Generate a random positive [`BigInt`] with exactly `digits` decimal
    /// digits. Zero digits gives zero.
    fn gen_bigint_with_digits(&mut self, digits: u64) -> BigInt;

    /// Generate a random [`BigInt`] in `[0, bound)`. Fails when the bound
    /// is not positive.
    fn gen_bigint_below(&mut self, bound: &BigInt) -> BigInt;

    /// Generate a random [`BigInt`] within the given range. The lower
    /// bound is inclusive; the upper bound is exclusive. Fails when
    /// the upper bound is not greater than the lower bound.
    fn gen_bigint_range(&mut self, lbound: &BigInt, ubound: &BigInt) -> BigInt;
}

fn gen_digits<R: Rng + ?Sized>(rng: &mut R, len: u64) -> Vec<BigDigit> {
    let len = len.to_usize().expect("capacity overflow");
    (0..len).map(|_| rng.random_range(0..BASE)).collect()
}

impl<R: Rng + ?Sized> RandBigInt for R {
    fn gen_unsigned_bigint(&mut self, digit_size: u64) -> BigInt {
        BigInt::from_vec(Plus, gen_digits(self, digit_size))
    }

    fn gen_bigint(&mut self, digit_size: u64) -> BigInt {
        loop {
            // Generate a random magnitude...
            let magnitude = self.gen_unsigned_bigint(digit_size);
            // ...and then randomly assign it a Sign...
            let sign = if magnitude.is_zero() {
                // ...except that if the magnitude is zero, we need to try
                // again with probability 0.5. This is because otherwise,
                // the probability of generating a zero BigInt would be
                // double that of any other number.
                if self.random() {
                    continue;
                } else {
                    NoSign
                }
            } else if self.random() {
                Plus
            } else {
                Minus
            };
            return BigInt::from_vec(sign, magnitude.data);
        }
    }

    fn gen_bigint_with_digits(&mut self, digits: u64) -> BigInt {
        if digits == 0 {
            return BigInt::zero();
        }
        let mut data = gen_digits(self, digits - 1);
        data.push(self.random_range(1..BASE));
        BigInt::from_vec(Plus, data)
    }

    fn gen_bigint_below(&mut self, bound: &BigInt) -> BigInt {
        assert!(bound.is_positive());
        let digits = bound.digits() as u64;
        loop {
            let n = self.gen_unsigned_bigint(digits);
            if n < *bound {
                return n;
            }
        }
    }

    fn gen_bigint_range(&mut self, lbound: &BigInt, ubound: &BigInt) -> BigInt {
        assert!(*lbound < *ubound);
        if lbound.is_zero() {
            self.gen_bigint_below(ubound)
        } else {
            lbound + self.gen_bigint_below(&(ubound - lbound))
        }
    }
}

/// The back-end implementing rand's [`UniformSampler`] for [`BigInt`].
#[derive(Clone, Debug)]
pub struct UniformBigInt {
    base: BigInt,
    len: BigInt,
}

impl UniformSampler for UniformBigInt {
    type X = BigInt;

    #[inline]
    fn new<B1, B2>(low_b: B1, high_b: B2) -> Result<Self, Error>
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let low = low_b.borrow();
        let high = high_b.borrow();
        if low >= high {
            return Err(Error::EmptyRange);
        }
        Ok(UniformBigInt {
            len: high - low,
            base: low.clone(),
        })
    }

    #[inline]
    fn new_inclusive<B1, B2>(low_b: B1, high_b: B2) -> Result<Self, Error>
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let low = low_b.borrow();
        let high = high_b.borrow();
        if low > high {
            return Err(Error::EmptyRange);
        }
        Self::new(low, high + 1u32)
    }

    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        &self.base + rng.gen_bigint_below(&self.len)
    }

    #[inline]
    fn sample_single<R: Rng + ?Sized, B1, B2>(
        low: B1,
        high: B2,
        rng: &mut R,
    ) -> Result<Self::X, Error>
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let low = low.borrow();
        let high = high.borrow();
        if low >= high {
            return Err(Error::EmptyRange);
        }
        Ok(rng.gen_bigint_range(low, high))
    }
}

impl SampleUniform for BigInt {
    type Sampler = UniformBigInt;
}

/// A random distribution for [`BigInt`] values of up to a particular number
/// of decimal digits, with either sign.
///
/// The `rand` feature must be enabled to use this. See crate-level documentation for details.
#[derive(Clone, Copy, Debug)]
pub struct RandomDigits {
    digits: u64,
}

impl RandomDigits {
    #[inline]
    pub fn new(digits: u64) -> RandomDigits {
        RandomDigits { digits }
    }
}

impl Distribution<BigInt> for RandomDigits {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BigInt {
        rng.gen_bigint(self.digits)
    }
}

/// A generic trait for generating random primes.
///
/// Candidates are checked with the trial-division [`is_prime`](crate::algorithms::is_prime),
/// so this is meant for primes of modest size.
///
/// *Warning*: This is highly dependent on the provided random number generator,
/// to provide actually random primes.
///
/// # Example
#[cfg_attr(feature = "std", doc = " ```")]
#[cfg_attr(not(feature = "std"), doc = " ```ignore")]
/// use num_bigint_dec::RandPrime;
///
/// let mut rng = rand::rng();
/// let p = rng.gen_prime(12);
/// assert_eq!(p.digits(), 12);
/// assert!(p.is_prime());
/// ```
pub trait RandPrime {
    /// Generate a random prime number with exactly as many decimal digits as given.
    fn gen_prime(&mut self, digits: usize) -> BigInt;
}

impl<R: Rng + ?Sized> RandPrime for R {
    fn gen_prime(&mut self, digits: usize) -> BigInt {
        if digits < 1 {
            panic!("prime size must be at least 1 digit");
        }

        loop {
            let mut candidate = self.gen_bigint_with_digits(digits as u64);
            // the smallest prime not below the candidate
            candidate.decrement();
            let p = candidate.next_prime();

            // Walking up from the top of the range can run into the next
            // power of ten.
            if p.digits() == digits {
                return p;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distr::Uniform;
    use rand_xorshift::XorShiftRng;

    fn rng() -> XorShiftRng {
        XorShiftRng::from_seed([7u8; 16])
    }

    #[test]
    fn test_gen_unsigned_bigint_digits() {
        let mut rng = rng();
        for digits in 0..50 {
            let n = rng.gen_unsigned_bigint(digits);
            assert!(!n.is_negative());
            assert!(n.digits() as u64 <= digits);
        }
    }

    #[test]
    fn test_gen_bigint_signs() {
        let mut rng = rng();
        let mut seen_neg = false;
        let mut seen_pos = false;
        for _ in 0..100 {
            let n = rng.gen_bigint(20);
            assert!(n.digits() <= 20);
            seen_neg |= n.is_negative();
            seen_pos |= n.is_positive();
        }
        assert!(seen_neg && seen_pos);
    }

    #[test]
    fn test_gen_bigint_with_digits() {
        let mut rng = rng();
        assert!(rng.gen_bigint_with_digits(0).is_zero());
        for digits in 1..40 {
            let n = rng.gen_bigint_with_digits(digits);
            assert!(n.is_positive());
            assert_eq!(n.digits() as u64, digits);
        }
    }

    #[test]
    fn test_gen_bigint_below() {
        let mut rng = rng();
        let bound: BigInt = "1000000000000000000001".parse().unwrap();
        for _ in 0..100 {
            let n = rng.gen_bigint_below(&bound);
            assert!(!n.is_negative());
            assert!(n < bound);
        }
    }

    #[test]
    #[should_panic]
    fn test_gen_bigint_below_zero_bound() {
        rng().gen_bigint_below(&BigInt::zero());
    }

    #[test]
    fn test_gen_bigint_range() {
        let mut rng = rng();
        let cases = [("-100", "100"), ("0", "7"), ("-12345678901234567890", "0"), ("5", "6")];
        for &(lo, hi) in &cases {
            let lo: BigInt = lo.parse().unwrap();
            let hi: BigInt = hi.parse().unwrap();
            for _ in 0..50 {
                let n = rng.gen_bigint_range(&lo, &hi);
                assert!(lo <= n && n < hi);
            }
        }
    }

    #[test]
    fn test_uniform_sampler() {
        let mut rng = rng();
        let low = BigInt::from(-3);
        let high = BigInt::from(3);

        let dist = Uniform::new_inclusive(&low, &high).unwrap();
        let mut hits = [false; 7];
        for _ in 0..500 {
            let n: BigInt = dist.sample(&mut rng);
            assert!(low <= n && n <= high);
            hits[(n + 3i32).to_usize().unwrap()] = true;
        }
        assert!(hits.iter().all(|&h| h));

        assert!(Uniform::new(&high, &low).is_err());
        let n = rng.random_range(low.clone()..high.clone());
        assert!(low <= n && n < high);
    }

    #[test]
    fn test_random_digits_distribution() {
        let rng = rng();
        let values: Vec<BigInt> = rng.sample_iter(RandomDigits::new(30)).take(20).collect();
        assert!(values.iter().all(|n| n.digits() <= 30));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = rng().gen_bigint(64);
        let b = rng().gen_bigint(64);
        assert_eq!(a, b);
    }

    #[test]
    fn test_gen_prime() {
        let mut rng = rng();
        for digits in 1..12 {
            let p = rng.gen_prime(digits);
            assert_eq!(p.digits(), digits);
            assert!(p.is_prime());
        }
    }
}
