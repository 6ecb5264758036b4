#![cfg(feature = "rand")]

use num_bigint_dec::{gcd, BigInt, RandBigInt, RandPrime, RandomDigits};
use num_integer::Integer;
use num_traits::{Signed, Zero};
use rand::prelude::*;
use rand_xorshift::XorShiftRng;

fn rng() -> XorShiftRng {
    XorShiftRng::from_seed([42u8; 16])
}

#[test]
fn test_random_arithmetic_round_trips() {
    let mut rng = rng();
    for digits in 1..60 {
        let a = rng.gen_bigint(digits);
        let b = rng.gen_bigint(digits / 2 + 1);

        assert_eq!(&(&a + &b) - &b, a);
        if !b.is_zero() {
            let (q, r) = a.checked_div_rem(&b).unwrap();
            assert_eq!(q * &b + r, a);
            assert!(a.is_multiple_of(&gcd(&a, &b)));
        }
    }
}

#[test]
fn test_random_sqrt_floor() {
    let mut rng = rng();
    for digits in 1..80 {
        let n = rng.gen_bigint_with_digits(digits);
        let r = n.sqrt().unwrap();
        assert!(&r * &r <= n);
        let r1 = r + 1u8;
        assert!(&r1 * &r1 > n);
    }
}

#[test]
fn test_random_parse_round_trip() {
    let rng = rng();
    for n in rng.sample_iter::<BigInt, _>(RandomDigits::new(100)).take(100) {
        assert_eq!(n.to_string().parse::<BigInt>(), Ok(n));
    }
}

#[test]
fn test_random_range_is_exclusive() {
    let mut rng = rng();
    let low: BigInt = "-1000000000000000000000".parse().unwrap();
    let high: BigInt = "-999999999999999999990".parse().unwrap();
    for _ in 0..200 {
        let n: BigInt = rng.random_range(low.clone()..high.clone());
        assert!(low <= n && n < high);
        assert!(n.is_negative());
    }
}

#[test]
fn test_random_prime_digits() {
    let mut rng = rng();
    for digits in [1, 2, 5, 9, 13] {
        let p = rng.gen_prime(digits);
        assert_eq!(p.digits(), digits);
        assert!(p.is_prime());
    }
}
