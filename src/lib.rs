//! Big integer implementation over base-10 digit vectors.
//!
//! A [`BigInt`] is a sign together with a little-endian sequence of decimal
//! digits. Every arithmetic operation is written out digit by digit, the way
//! it would be done with pencil and paper: vertical addition and subtraction
//! with carry and borrow, schoolbook multiplication, long division by
//! repeated subtraction of a shifted divisor, square-and-multiply
//! exponentiation and Newton's method for integer square roots.
//!
//! ## Example
//!
//! ```rust
//! use num_bigint_dec::BigInt;
//! use num_traits::One;
//!
//! // Calculate large fibonacci numbers.
//! fn fib(n: usize) -> BigInt {
//!     let mut f0 = BigInt::from(0u32);
//!     let mut f1 = BigInt::one();
//!     for _ in 0..n {
//!         let f2 = f0 + &f1;
//!         f0 = core::mem::replace(&mut f1, f2);
//!     }
//!     f0
//! }
//!
//! // This is a very large number.
//! assert_eq!(fib(100).to_string(), "354224848179261915075");
//! ```
//!
//! Fallible operations such as [`BigInt::checked_div_rem`], [`BigInt::sqrt`]
//! or [`BigInt::factorial`] report failures through [`BigIntError`]. The
//! operator traits (`/`, `%`) panic on a zero divisor, like the primitive
//! integer types.
//!
//! ## Features
//!
//! - `std` (default): implements `std::error::Error` for the error types.
//! - `rand` (default): random big integers and primes from a caller-supplied
//!   random number generator, see [`RandBigInt`].
//! - `zeroize`: implements `zeroize::Zeroize` for [`BigInt`].

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use core::fmt;

#[macro_use]
mod macros;

mod bigint;

pub mod algorithms;

#[cfg(feature = "rand")]
mod bigrand;

mod traits;

pub use crate::bigint::{BigInt, Sign};

pub use crate::algorithms::{gcd, lcm};
pub use crate::bigint::roots::{log, sqrt};

pub use crate::traits::{ExtendedGcd, ModInverse};

#[cfg(feature = "rand")]
pub use crate::bigrand::{RandBigInt, RandPrime, RandomDigits, UniformBigInt};

/// Errors reported by fallible big integer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BigIntError {
    /// The text is not an optionally signed, non-empty run of decimal digits.
    InvalidLiteral,
    /// The divisor of a division or remainder is zero.
    DivideByZero,
    /// A square root of a negative number was requested.
    NegativeSquareRoot,
    /// A factorial of a negative number was requested.
    NegativeFactorial,
    /// The arguments lie outside the domain of the operation, such as zero
    /// raised to a negative power or a logarithm of a non-positive number.
    MathDomainError,
}

impl BigIntError {
    fn __description(&self) -> &str {
        use crate::BigIntError::*;
        match *self {
            InvalidLiteral => "invalid big integer literal",
            DivideByZero => "attempt to divide by zero",
            NegativeSquareRoot => "square root of a negative number",
            NegativeFactorial => "factorial of a negative number",
            MathDomainError => "math domain error",
        }
    }
}

impl fmt::Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.__description().fmt(f)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for BigIntError {
    fn description(&self) -> &str {
        self.__description()
    }
}

/// The error type returned when a checked conversion regarding big integer fails.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TryFromBigIntError<T> {
    original: T,
}

impl<T> TryFromBigIntError<T> {
    fn new(original: T) -> Self {
        TryFromBigIntError { original }
    }

    fn __description(&self) -> &str {
        "out of range conversion regarding big integer attempted"
    }

    /// Extract the original value. Conversions from an owned [`BigInt`] hand
    /// it back here; conversions from a reference carry `()`.
    pub fn into_original(self) -> T {
        self.original
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<T> std::error::Error for TryFromBigIntError<T>
where
    T: fmt::Debug,
{
    fn description(&self) -> &str {
        self.__description()
    }
}

impl<T> fmt::Display for TryFromBigIntError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.__description().fmt(f)
    }
}

pub mod big_digit {
    /// A single decimal digit of a [`BigInt`](crate::BigInt), always `0..=9`.
    pub type BigDigit = u8;

    /// Wide enough to hold `9 + 9 * 9 + 9` during multiply-accumulate.
    pub type DoubleBigDigit = u16;

    /// The radix every [`BigInt`](crate::BigInt) is stored in.
    pub const BASE: BigDigit = 10;

    /// Split a wide intermediate into `(high, low)` digits.
    #[inline]
    pub(crate) fn split(n: DoubleBigDigit) -> (BigDigit, BigDigit) {
        let base = DoubleBigDigit::from(BASE);
        ((n / base) as BigDigit, (n % base) as BigDigit)
    }
}
