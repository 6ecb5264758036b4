use core::mem;

use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::BigInt;

/// Greatest common divisor of `a` and `b`.
///
/// Euclid's algorithm over the absolute values, so the result is never
/// negative and `gcd(0, 0) == 0`.
///
/// ```
/// use num_bigint_dec::{gcd, BigInt};
///
/// let g = gcd(&BigInt::from(12345), &BigInt::from(-54321));
/// assert_eq!(g, BigInt::from(3));
/// ```
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();

    while !b.is_zero() {
        let r = &a % &b;
        a = mem::replace(&mut b, r);
    }

    a
}

/// Least common multiple of `a` and `b`, zero when either is zero and
/// otherwise `|a * b| / gcd(a, b)`.
pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }

    (a * b).abs() / gcd(a, b)
}

/// XGCD sets z to the greatest common divisor of a and b and returns z.
/// If extended is true, XGCD returns their value such that z = a*x + b*y.
///
/// Allow the inputs a and b to be zero or negative to GCD
/// with the following definitions.
///
/// If x or y are not nil, GCD sets their value such that z = a*x + b*y.
/// Regardless of the signs of a and b, z is always >= 0.
/// If a == b == 0, GCD sets z = x = y = 0.
/// If a == 0 and b != 0, GCD sets z = |b|, x = 0, y = sign(b) * 1.
/// If a != 0 and b == 0, GCD sets z = |a|, x = sign(a) * 1, y = 0.
pub fn xgcd(
    a_in: &BigInt,
    b_in: &BigInt,
    extended: bool,
) -> (BigInt, Option<BigInt>, Option<BigInt>) {
    if extended {
        let (z, x, y) = extended_gcd(a_in, b_in);
        (z, Some(x), Some(y))
    } else {
        (gcd(a_in, b_in), None, None)
    }
}

/// Returns `(z, x, y)` with `z = gcd(a, b) >= 0` and `a*x + b*y = z`.
///
/// The coefficients are the ones produced by the iterative extended
/// Euclidean algorithm, started from the larger magnitude.
pub fn extended_gcd(a_in: &BigInt, b_in: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a_in.is_zero() && b_in.is_zero() {
        return (BigInt::zero(), BigInt::zero(), BigInt::zero());
    }

    if a_in.is_zero() {
        return (b_in.abs(), BigInt::zero(), b_in.signum());
    }

    if b_in.is_zero() {
        return (a_in.abs(), a_in.signum(), BigInt::zero());
    }

    euclid_gcd(a_in, b_in)
}

/// Both inputs must be non-zero.
fn euclid_gcd(a_in: &BigInt, b_in: &BigInt) -> (BigInt, BigInt, BigInt) {
    let mut a = a_in.abs();
    let mut b = b_in.abs();

    // ua tracks the coefficient of |a_in| in a, ub the one in b.
    let mut ua = BigInt::one();
    let mut ub = BigInt::zero();

    if a < b {
        mem::swap(&mut a, &mut b);
        mem::swap(&mut ua, &mut ub);
    }

    while !b.is_zero() {
        euclid_update(&mut a, &mut b, &mut ua, &mut ub);
    }

    let x = if a_in.is_negative() { -ua } else { ua };

    // a_in * x + b_in * y == a, and the division is exact
    let y = (&a - a_in * &x) / b_in;

    (a, x, y)
}

/// One Euclidean step: `(a, b) <- (b, a mod b)`, carrying the cofactors
/// along.
fn euclid_update(a: &mut BigInt, b: &mut BigInt, ua: &mut BigInt, ub: &mut BigInt) {
    let (q, r) = a.div_rem(b);

    *a = mem::replace(b, r);

    let next = &*ua - &q * &*ub;
    *ua = mem::replace(ub, next);
}
