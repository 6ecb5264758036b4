use num_traits::{One, Signed};

use crate::{BigInt, BigIntError};

/// `n!` as the iterative product `2 * 3 * ... * n`, with `0! == 1! == 1`.
///
/// ```
/// use num_bigint_dec::{algorithms, BigInt, BigIntError};
///
/// assert_eq!(algorithms::factorial(&BigInt::from(20)), Ok(BigInt::from(2_432_902_008_176_640_000u64)));
/// assert_eq!(algorithms::factorial(&BigInt::from(-1)), Err(BigIntError::NegativeFactorial));
/// ```
pub fn factorial(n: &BigInt) -> Result<BigInt, BigIntError> {
    if n.is_negative() {
        return Err(BigIntError::NegativeFactorial);
    }

    let mut acc = BigInt::one();
    let mut i = BigInt::from(2u8);
    while &i <= n {
        acc *= &i;
        i.increment();
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_factorial_small() {
        let expected = [1u64, 1, 2, 6, 24, 120, 720, 5040, 40320, 362880, 3628800];
        for (n, &f) in expected.iter().enumerate() {
            assert_eq!(factorial(&BigInt::from(n)), Ok(BigInt::from(f)));
        }
    }

    #[test]
    fn test_factorial_hundred() {
        let f = factorial(&BigInt::from(100)).unwrap();
        let s = f.to_string();

        assert_eq!(f.digits(), 158);
        assert!(s.starts_with("933262154439441526816992"));
        assert!(s.ends_with(&"0".repeat(24)));
        assert!(!s.ends_with(&"0".repeat(25)));
    }

    #[test]
    fn test_factorial_recurrence() {
        let mut prev = factorial(&BigInt::from(0)).unwrap();
        for n in 1u32..60 {
            let cur = factorial(&BigInt::from(n)).unwrap();
            assert_eq!(cur, &prev * BigInt::from(n));
            prev = cur;
        }
    }

    #[test]
    fn test_factorial_negative() {
        assert_eq!(
            factorial(&BigInt::from(-5)),
            Err(BigIntError::NegativeFactorial)
        );
    }
}
