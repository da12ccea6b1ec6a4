/// One positional digit of a magnitude, base 2^32.
pub type Digit = u32;

/// A value wide enough to hold any product of two digits plus two carries.
pub type DoubleDigit = u64;

pub const DIGIT_BITS: u32 = Digit::BITS;

/// Number of digits a [`DigitStorage`](crate::DigitStorage) keeps without
/// allocating: as many as fit in the space of one pointer.
pub const INLINE_CAPACITY: usize = {
    let cap = std::mem::size_of::<*const ()>() / std::mem::size_of::<Digit>();
    if cap == 0 { 1 } else { cap }
};

/// Decimal digits handled per accumulation step when parsing or printing.
/// 10^9 is the largest power of ten below 2^32.
pub const DECIMAL_CHUNK_DIGITS: usize = 9;

pub const DECIMAL_CHUNK_RADIX: Digit = 1_000_000_000;

pub const POW10: [Digit; DECIMAL_CHUNK_DIGITS + 1] = [
    1, 10, 100, 1_000, 10_000, 100_000,
    1_000_000, 10_000_000, 100_000_000, 1_000_000_000
];

pub const MAX_CONSTANT: usize = 16;
