use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;
use crate::digit_storage::DigitStorage;

macro_rules! small_constants {
    ($positive: expr) => {
        {
            let mut cache: Vec<BigInt> = Vec::with_capacity(MAX_CONSTANT + 1);
            for n in 0..=MAX_CONSTANT {
                cache.push(BigInt::from_raw($positive, DigitStorage::from_digit(n as Digit)));
            }
            cache
        }
    };
}

lazy_static! {
    /// `0, 1, ..., MAX_CONSTANT`
    pub static ref POS_CACHE: Vec<BigInt> = small_constants!(true);
    /// `0, -1, ..., -MAX_CONSTANT`; entry 0 is the canonical positive zero.
    pub static ref NEG_CACHE: Vec<BigInt> = small_constants!(false);
    /// `10^0 ..= 10^9`, the multipliers applied per decimal chunk.
    pub static ref POW10_CACHE: Vec<BigInt> = POW10
        .iter()
        .map(|&p| BigInt::from_raw(true, DigitStorage::from_digit(p)))
        .collect();
}
