//! Big Int \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers with the full set of
//!   arithmetic, comparison, bitwise and shift operators. Bitwise operators
//!   behave as if values were stored in two's-complement notation.
//! - [`DigitStorage`]: the digit container underneath, which keeps short
//!   magnitudes inline and shares long ones copy-on-write between clones.
//!
//! Parsing reports [`Error::Empty`] and [`Error::InvalidDigit`]; dividing by
//! zero panics, or returns [`Error::DivisionByZero`] from the `try_*` methods.
//!
//! Enable the `serde` feature to (de)serialize values as decimal strings.

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod bitwise;
mod digit_storage;
mod error;
#[cfg(feature = "serde")]
mod serde_impl;

pub use big_int::BigInt;
pub use big_num_constants::{Digit, INLINE_CAPACITY};
pub use digit_storage::DigitStorage;
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
        assert_eq!((&a << 10).to_string(), "10240000000000000");
        assert_eq!((&a >> 10).to_string(), "9765625000");
    }
}
