#![cfg(feature = "zeroize")]

use super::{BigInt, Sign};

impl zeroize::Zeroize for BigInt {
    /// Overwrites every digit with zero and leaves `self` equal to zero.
    fn zeroize(&mut self) {
        self.data.zeroize();
        self.sign = Sign::NoSign;
    }
}
