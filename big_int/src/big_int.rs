//! # BigInt
//! Arbitrary-precision signed integers. A value is a sign plus a magnitude of
//! base 2^32 digits kept in a [`DigitStorage`], least significant first.
//! Bitwise operations behave as if BigInt were represented in two's-complement
//! notation.
//! # Example
//! ```
//! use big_int::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10);
//! println!("a >> 10 = {}", &a >> 10);
//! ```
//!

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Neg,
};
use std::str::FromStr;

use tracing::trace;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::digit_storage::DigitStorage;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct BigInt {
    /// `true` for zero and every positive value.
    positive: bool,
    digits: DigitStorage,
}

// 杂项辅助函数
/// Compares two magnitudes. Slices of equal length may carry leading zeros.
pub(crate) fn cmp_magnitude(a: &[Digit], b: &[Digit]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// `acc -= rhs`, borrowing through the rest of `acc`. Returns the final borrow,
/// which is `false` whenever `acc >= rhs`.
pub(crate) fn sub_in_place(acc: &mut [Digit], rhs: &[Digit]) -> bool {
    let mut borrow = false;
    for (i, a) in acc.iter_mut().enumerate() {
        if i >= rhs.len() && !borrow {
            break;
        }
        let r = rhs.get(i).copied().unwrap_or(0);
        let (d1, b1) = a.overflowing_sub(r);
        let (d2, b2) = d1.overflowing_sub(borrow as Digit);
        *a = d2;
        borrow = b1 || b2;
    }
    borrow
}

/// `x * k` as `x.len() + 1` digits.
fn mul_digit(x: &[Digit], k: Digit) -> Vec<Digit> {
    let mut product = Vec::with_capacity(x.len() + 1);
    let mut carry: DoubleDigit = 0;
    for &d in x {
        let t = d as DoubleDigit * k as DoubleDigit + carry;
        product.push(t as Digit);
        carry = t >> DIGIT_BITS;
    }
    product.push(carry as Digit);
    product
}

/// Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1 exercise 16
pub(crate) fn div_rem_digit(u: &[Digit], v: Digit) -> (DigitStorage, Digit) {
    let mut quotient = DigitStorage::zeroed(u.len());
    let q = quotient.as_mut_slice();
    let v = v as DoubleDigit;
    let mut r: DoubleDigit = 0;
    for j in (0..u.len()).rev() {
        let cur = (r << DIGIT_BITS) | u[j] as DoubleDigit;
        q[j] = (cur / v) as Digit;
        r = cur % v;
    }
    (quotient, r as Digit)
}

/// Schoolbook long division of two magnitudes, `divisor` at least two digits
/// long and not larger than `dividend`.
///
/// Each quotient digit is estimated from the top three digits of the working
/// window over the top two digits of the divisor. That estimate is never too
/// small and at most one too large, so a single correction suffices.
fn div_rem_long(dividend: &DigitStorage, divisor: &[Digit]) -> (DigitStorage, DigitStorage) {
    let n = divisor.len();
    let m = dividend.len() - n;

    let mut remainder = dividend.clone();
    remainder.push(0);
    let mut quotient = DigitStorage::zeroed(m + 1);

    let top_divisor = ((divisor[n - 1] as u128) << DIGIT_BITS) | divisor[n - 2] as u128;
    let r = remainder.as_mut_slice();
    let q = quotient.as_mut_slice();
    for j in (0..=m).rev() {
        let window = &mut r[j..=j + n];
        let top = ((window[n] as u128) << (2 * DIGIT_BITS))
            | ((window[n - 1] as u128) << DIGIT_BITS)
            | window[n - 2] as u128;
        let mut qhat = (top / top_divisor).min(Digit::MAX as u128) as Digit;
        let mut trial = mul_digit(divisor, qhat);
        if cmp_magnitude(&trial, window) == Ordering::Greater {
            qhat -= 1;
            sub_in_place(&mut trial, divisor);
        }
        sub_in_place(window, &trial);
        q[j] = qhat;
    }

    (quotient, remainder)
}

// 实现构造
impl BigInt {
    pub const ZERO: BigInt = BigInt { positive: true, digits: DigitStorage::from_digit(0) };
    pub const ONE: BigInt = BigInt { positive: true, digits: DigitStorage::from_digit(1) };

    /// Builds a value from a sign and raw magnitude digits, normalizing them.
    pub(crate) fn from_raw(positive: bool, digits: DigitStorage) -> Self {
        let mut value = BigInt { positive, digits };
        value.normalize();
        value
    }

    fn value_of(mut mag: u128, positive: bool) -> BigInt {
        if mag <= MAX_CONSTANT as u128 {
            if positive {
                return POS_CACHE[mag as usize].clone();
            } else {
                return NEG_CACHE[mag as usize].clone();
            }
        }
        let mut digits = DigitStorage::new();
        while mag != 0 {
            digits.push(mag as Digit);
            mag >>= DIGIT_BITS;
        }
        BigInt::from_raw(positive, digits)
    }

    /// Drops most-significant zero digits and turns a negative zero positive.
    fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(0);
        }
        if self.is_zero() {
            self.positive = true;
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::ZERO
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, true)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val.unsigned_abs() as u128, val >= 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_int!(i8, i16, i32, isize, i64, i128);

// 实现查询
impl BigInt {
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    /// `true` if strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.positive && !self.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        !self.positive
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.positive {
            1
        } else {
            -1
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt { positive: true, digits: self.digits.clone() }
    }

    /// Magnitude digits, least significant first. Never empty.
    pub fn digits(&self) -> &[Digit] {
        self.digits.as_slice()
    }

    pub fn magnitude(&self) -> &DigitStorage {
        &self.digits
    }

    pub fn to_u64(&self) -> Option<u64> {
        if self.is_negative() || self.digits.len() > 2 {
            return None;
        }
        Some(self.digits.iter().rev().fold(0u64, |acc, &d| (acc << DIGIT_BITS) | d as u64))
    }

    pub fn to_i64(&self) -> Option<i64> {
        if self.digits.len() > 2 {
            return None;
        }
        let mag = self.digits.iter().rev().fold(0u64, |acc, &d| (acc << DIGIT_BITS) | d as u64);
        if self.positive {
            i64::try_from(mag).ok()
        } else if mag <= i64::MAX as u64 + 1 {
            Some((mag as i64).wrapping_neg())
        } else {
            None
        }
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.positive, "", &self.magnitude_to_decimal())
    }
}

impl BigInt {
    /// Decimal digits of the magnitude, collected 9 at a time by repeated
    /// division by 10^9.
    fn magnitude_to_decimal(&self) -> String {
        let mut chunks: Vec<Digit> = Vec::new();
        let mut rest = self.abs();
        loop {
            let (q, r) = div_rem_digit(rest.digits(), DECIMAL_CHUNK_RADIX);
            chunks.push(r);
            rest = BigInt::from_raw(true, q);
            if rest.is_zero() {
                break;
            }
        }

        let mut iter = chunks.iter().rev();
        let mut s = iter.next().map(Digit::to_string).unwrap_or_default();
        s.reserve(chunks.len() * DECIMAL_CHUNK_DIGITS);
        for chunk in iter {
            s.push_str(&format!("{:0width$}", chunk, width = DECIMAL_CHUNK_DIGITS));
        }
        s
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = Error;

    /// Parses an optionally `-`-prefixed string of ASCII decimal digits.
    fn from_str(val: &str) -> Result<BigInt> {
        let (negative, body) = match val.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, val),
        };
        if body.is_empty() {
            return Err(Error::Empty);
        }
        let offset = val.len() - body.len();

        let mut value = BigInt::ZERO;
        for (n, group) in body.as_bytes().chunks(DECIMAL_CHUNK_DIGITS).enumerate() {
            let mut group_val: Digit = 0;
            for (i, &b) in group.iter().enumerate() {
                if !b.is_ascii_digit() {
                    let index = offset + n * DECIMAL_CHUNK_DIGITS + i;
                    let found = val[index..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(Error::InvalidDigit { found, index });
                }
                group_val = group_val * 10 + (b - b'0') as Digit;
            }
            value *= &POW10_CACHE[group.len()];
            value += &BigInt::from(group_val);
        }

        Ok(if negative { -value } else { value })
    }
}

impl TryFrom<&str> for BigInt {
    type Error = Error;

    fn try_from(val: &str) -> Result<BigInt> {
        val.parse()
    }
}

// 实现大小比较
impl BigInt {
    fn compare(&self, other: &BigInt) -> Ordering {
        let self_len = self.digits.len();
        let other_len = other.digits.len();

        if self_len > other_len {
            return if self.positive { Ordering::Greater } else { Ordering::Less };
        }
        if self_len < other_len {
            return if other.positive { Ordering::Less } else { Ordering::Greater };
        }
        if self.positive != other.positive {
            return if self.positive { Ordering::Greater } else { Ordering::Less };
        }

        let ord = cmp_magnitude(self.digits(), other.digits());
        if self.positive { ord } else { ord.reverse() }
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.positive == other.positive && self.digits == other.digits
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.positive.hash(state);
        self.digits().hash(state);
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.positive = !self.positive;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加法
impl BigInt {
    fn add_assign_ref(&mut self, rhs: &BigInt) {
        if rhs.is_zero() {
            return;
        }
        if self.positive != rhs.positive {
            return self.sub_assign_ref(&-rhs);
        }

        let rhs_len = rhs.digits.len();
        let len = self.digits.len().max(rhs_len) + 1;
        self.digits.increase_size(len, 0);

        let mut carry = false;
        for (i, d) in self.digits.as_mut_slice().iter_mut().enumerate() {
            if i >= rhs_len && !carry {
                break;
            }
            let r = rhs.digits.get(i).unwrap_or(0);
            let (s1, c1) = d.overflowing_add(r);
            let (s2, c2) = s1.overflowing_add(carry as Digit);
            *d = s2;
            carry = c1 || c2;
        }

        self.normalize();
    }

    pub fn increment(&mut self) -> &mut Self {
        self.add_assign_ref(&BigInt::ONE);
        self
    }
}

// 实现减法
impl BigInt {
    fn sub_assign_ref(&mut self, rhs: &BigInt) {
        if rhs.is_zero() {
            return;
        }
        if self.positive != rhs.positive {
            return self.add_assign_ref(&-rhs);
        }
        if cmp_magnitude(self.digits(), rhs.digits()) == Ordering::Less {
            let mut result = rhs.clone();
            result.sub_assign_ref(self);
            *self = -result;
            return;
        }

        sub_in_place(self.digits.as_mut_slice(), rhs.digits.as_slice());
        self.normalize();
    }

    pub fn decrement(&mut self) -> &mut Self {
        self.sub_assign_ref(&BigInt::ONE);
        self
    }
}

// 实现乘法
impl BigInt {
    fn mul_assign_ref(&mut self, rhs: &BigInt) {
        if self.is_zero() || rhs.is_zero() {
            *self = BigInt::ZERO;
            return;
        }

        let x = self.digits();
        let y = rhs.digits();
        let mut product = DigitStorage::zeroed(x.len() + y.len());
        let z = product.as_mut_slice();
        for (i, &xi) in x.iter().enumerate() {
            if xi == 0 {
                continue;
            }
            let mut carry: DoubleDigit = 0;
            for (j, &yj) in y.iter().enumerate() {
                let t = xi as DoubleDigit * yj as DoubleDigit + z[i + j] as DoubleDigit + carry;
                z[i + j] = t as Digit;
                carry = t >> DIGIT_BITS;
            }
            // the carry may ripple through several digits
            let mut k = i + y.len();
            while carry != 0 {
                let t = z[k] as DoubleDigit + carry;
                z[k] = t as Digit;
                carry = t >> DIGIT_BITS;
                k += 1;
            }
        }

        *self = BigInt::from_raw(self.positive == rhs.positive, product);
    }

    /// `self^exp` by repeated squaring.
    pub fn pow(&self, mut exp: u32) -> BigInt {
        let mut base = self.clone();
        let mut result = BigInt::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                result.mul_assign_ref(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        result
    }
}

// 实现除法和求余
impl BigInt {
    /// Truncating division: the quotient rounds toward zero and the remainder
    /// takes the sign of `self`, as with the primitive integer types.
    pub fn try_div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt)> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if cmp_magnitude(self.digits(), rhs.digits()) == Ordering::Less {
            return Ok((BigInt::ZERO, self.clone()));
        }

        let quotient_positive = self.positive == rhs.positive;
        if rhs.digits.len() == 1 {
            let (q, r) = div_rem_digit(self.digits(), rhs.digits[0]);
            return Ok((
                BigInt::from_raw(quotient_positive, q),
                BigInt::from_raw(self.positive, DigitStorage::from_digit(r)),
            ));
        }

        trace!(dividend = self.digits.len(), divisor = rhs.digits.len(), "long division");
        let (q, r) = div_rem_long(&self.digits, rhs.digits());
        Ok((
            BigInt::from_raw(quotient_positive, q),
            BigInt::from_raw(self.positive, r),
        ))
    }

    pub fn try_div(&self, rhs: &BigInt) -> Result<BigInt> {
        self.try_div_rem(rhs).map(|(q, _)| q)
    }

    pub fn try_rem(&self, rhs: &BigInt) -> Result<BigInt> {
        self.try_div_rem(rhs).map(|(_, r)| r)
    }

    /// # Panics
    /// If `rhs` is zero.
    pub fn div_rem(&self, rhs: &BigInt) -> (BigInt, BigInt) {
        match self.try_div_rem(rhs) {
            Ok(qr) => qr,
            Err(err) => panic!("{}", err),
        }
    }

    /// Quotient of Euclidean division; pairs with [`BigInt::rem_euclid`].
    pub fn div_euclid(&self, rhs: &BigInt) -> BigInt {
        let (mut q, r) = self.div_rem(rhs);
        if r.is_negative() {
            if rhs.positive {
                q.decrement();
            } else {
                q.increment();
            }
        }
        q
    }

    /// The least non-negative remainder of `self` modulo `rhs`.
    pub fn rem_euclid(&self, rhs: &BigInt) -> BigInt {
        let mut r = self.div_rem(rhs).1;
        if r.is_negative() {
            r.add_assign_ref(&rhs.abs());
        }
        r
    }

    fn div_assign_ref(&mut self, rhs: &BigInt) {
        *self = self.div_rem(rhs).0;
    }

    fn rem_assign_ref(&mut self, rhs: &BigInt) {
        *self = self.div_rem(rhs).1;
    }
}

// 实现运算符
macro_rules! forward_binop {
    ($($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident, $kernel: ident;)*) => {
    $(
    impl $imp_assign<&BigInt> for BigInt {
        fn $method_assign(&mut self, rhs: &BigInt) {
            self.$kernel(rhs);
        }
    }

    impl $imp_assign for BigInt {
        fn $method_assign(&mut self, rhs: BigInt) {
            self.$kernel(&rhs);
        }
    }

    impl $imp<&BigInt> for BigInt {
        type Output = BigInt;

        fn $method(mut self, rhs: &BigInt) -> Self::Output {
            self.$kernel(rhs);
            self
        }
    }

    impl $imp for BigInt {
        type Output = BigInt;

        fn $method(mut self, rhs: BigInt) -> Self::Output {
            self.$kernel(&rhs);
            self
        }
    }

    impl $imp<&BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            let mut result = self.clone();
            result.$kernel(rhs);
            result
        }
    }

    impl $imp<BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            let mut result = self.clone();
            result.$kernel(&rhs);
            result
        }
    }
    )*
    };
}

forward_binop! {
    Add, add, AddAssign, add_assign, add_assign_ref;
    Sub, sub, SubAssign, sub_assign, sub_assign_ref;
    Mul, mul, MulAssign, mul_assign, mul_assign_ref;
    Div, div, DivAssign, div_assign, div_assign_ref;
    Rem, rem, RemAssign, rem_assign, rem_assign_ref;
    BitAnd, bitand, BitAndAssign, bitand_assign, bitand_assign_ref;
    BitOr, bitor, BitOrAssign, bitor_assign, bitor_assign_ref;
    BitXor, bitxor, BitXorAssign, bitxor_assign, bitxor_assign_ref;
}
