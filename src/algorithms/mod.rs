//! Low-level algorithms for decimal big integer arithmetic.
//!
//! The slice primitives operate on little-endian runs of decimal digits
//! ([`BigDigit`](crate::big_digit::BigDigit)) and back the operator impls of
//! [`BigInt`](crate::BigInt). The number-theoretic routines work on whole
//! [`BigInt`](crate::BigInt) values.

#![allow(clippy::many_single_char_names)]

// The slice primitives live next to the operator impls that use them. They
// are only made public here.

// --- addition ---
pub use crate::bigint::addition::{__add2, adc, add2};

// --- subtraction ---
pub use crate::bigint::subtraction::{__sub2, sbb, sub2};

// --- multiplication ---
pub use crate::bigint::multiplication::{mac3, mac_digit, mac_with_carry, mul3};

// --- division ---
pub use crate::bigint::division::{div_rem, div_rem_digit};

// --- comparison and padding ---
pub use crate::bigint::{cmp_slice, pad};

// --- number theory ---
mod factorial;
mod gcd;
mod mod_inverse;
mod prime;

pub use self::factorial::*;
pub use self::gcd::*;
pub use self::mod_inverse::*;
pub use self::prime::*;
