use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::BigInt;

/// Deterministic primality test by trial division.
///
/// Values up to `u64::MAX` are tested with native arithmetic; larger ones
/// divide by every odd `i` with `i * i <= n`, which is only practical while
/// the square root stays small.
///
/// ```
/// use num_bigint_dec::{algorithms, BigInt};
///
/// assert!(algorithms::is_prime(&BigInt::from(1_000_000_007)));
/// assert!(!algorithms::is_prime(&BigInt::from(1)));
/// ```
pub fn is_prime(n: &BigInt) -> bool {
    if let Some(small) = n.to_u64() {
        return is_prime_u64(small);
    }
    if n < &BigInt::zero() || n.is_even() {
        return false;
    }

    let mut i = BigInt::from(3u8);
    while &(&i * &i) <= n {
        if n.is_multiple_of(&i) {
            return false;
        }
        i += 2u8;
    }
    true
}

fn is_prime_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// The smallest prime strictly greater than `n`; `2` for anything below `2`.
///
/// ```
/// use num_bigint_dec::{algorithms, BigInt};
///
/// assert_eq!(algorithms::next_prime(&BigInt::from(-10)), BigInt::from(2));
/// assert_eq!(algorithms::next_prime(&BigInt::from(13)), BigInt::from(17));
/// ```
pub fn next_prime(n: &BigInt) -> BigInt {
    let two = BigInt::from(2u8);
    if n < &two {
        return two;
    }

    let mut candidate = n + 1u8;
    if candidate.is_even() {
        candidate.increment();
    }
    while !is_prime(&candidate) {
        candidate += 2u8;
    }
    candidate
}
