use alloc::borrow::Cow;

use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::algorithms::extended_gcd;
use crate::BigInt;

/// Calculate the modular inverse of `g`.
///
/// The result lies in `[0, |n|)`. Returns `None` when `n` is zero or when
/// `g` and `n` are not coprime.
pub fn mod_inverse(g: Cow<'_, BigInt>, n: Cow<'_, BigInt>) -> Option<BigInt> {
    let n = n.abs();
    if n.is_zero() {
        return None;
    }

    let g = g.mod_floor(&n);
    let (d, x, _) = extended_gcd(&g, &n);
    if !d.is_one() {
        return None;
    }

    Some(x.mod_floor(&n))
}
