//! Bitwise operators and shifts.
//!
//! Values are stored as sign and magnitude, so `&`, `|` and `^` first widen
//! both operands to a two's-complement pattern one digit longer than the
//! larger magnitude (that digit holds nothing but sign bits), combine the
//! patterns digit by digit, and convert a negative result back.
//! Shifts multiply or floor-divide by powers of two.

use std::ops::{Not, Shl, ShlAssign, Shr, ShrAssign};

use crate::big_num_constants::Digit;
use crate::digit_storage::DigitStorage;
use crate::BigInt;

/// Two's-complement negation of a fixed-width pattern: invert, then add one.
fn negate_in_place(words: &mut [Digit]) {
    for w in words.iter_mut() {
        *w = !*w;
    }
    for w in words.iter_mut() {
        let (sum, carry) = w.overflowing_add(1);
        *w = sum;
        if !carry {
            break;
        }
    }
}

/// `value` as a `len`-digit two's-complement pattern.
fn to_twos_complement(value: &BigInt, len: usize) -> DigitStorage {
    let mut words = value.magnitude().clone();
    words.increase_size(len, 0);
    if value.is_negative() {
        negate_in_place(words.as_mut_slice());
    }
    words
}

fn sign_word(value: &BigInt) -> Digit {
    if value.is_negative() { Digit::MAX } else { 0 }
}

fn bit_function_applier<F>(lhs: &BigInt, rhs: &BigInt, bit_function: F) -> BigInt
where
    F: Fn(Digit, Digit) -> Digit,
{
    let len = lhs.digits().len().max(rhs.digits().len()) + 1;
    let mut result = to_twos_complement(lhs, len);
    let other = to_twos_complement(rhs, len);
    let negative = bit_function(sign_word(lhs), sign_word(rhs)) != 0;

    let words = result.as_mut_slice();
    for (a, &b) in words.iter_mut().zip(other.iter()) {
        *a = bit_function(*a, b);
    }
    if negative {
        negate_in_place(words);
    }

    BigInt::from_raw(!negative, result)
}

// 实现位运算
impl BigInt {
    pub(crate) fn bitand_assign_ref(&mut self, rhs: &BigInt) {
        *self = bit_function_applier(self, rhs, |a, b| a & b);
    }

    pub(crate) fn bitor_assign_ref(&mut self, rhs: &BigInt) {
        *self = bit_function_applier(self, rhs, |a, b| a | b);
    }

    pub(crate) fn bitxor_assign_ref(&mut self, rhs: &BigInt) {
        *self = bit_function_applier(self, rhs, |a, b| a ^ b);
    }
}

impl Not for BigInt {
    type Output = BigInt;

    /// `!x == -x - 1`
    fn not(self) -> Self::Output {
        let mut result = -self;
        result.decrement();
        result
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        !self.clone()
    }
}

// 实现左移
impl ShlAssign<u32> for BigInt {
    fn shl_assign(&mut self, n: u32) {
        if n == 0 || self.is_zero() {
            return;
        }
        *self *= &BigInt::from(2_u32).pow(n);
    }
}

impl Shl<u32> for BigInt {
    type Output = BigInt;

    fn shl(mut self, n: u32) -> Self::Output {
        self <<= n;
        self
    }
}

impl Shl<u32> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> Self::Output {
        self.clone() << n
    }
}

// 实现右移
impl ShrAssign<u32> for BigInt {
    /// Arithmetic shift: rounds toward negative infinity, so `-1 >> n == -1`.
    fn shr_assign(&mut self, n: u32) {
        let two = BigInt::from(2_u32);
        let minus_one = BigInt::from(-1);
        for _ in 0..n {
            if self.is_zero() || *self == minus_one {
                break;
            }
            if self.is_negative() {
                self.decrement();
            }
            *self /= &two;
        }
    }
}

impl Shr<u32> for BigInt {
    type Output = BigInt;

    fn shr(mut self, n: u32) -> Self::Output {
        self >>= n;
        self
    }
}

impl Shr<u32> for &BigInt {
    type Output = BigInt;

    fn shr(self, n: u32) -> Self::Output {
        self.clone() >> n
    }
}
