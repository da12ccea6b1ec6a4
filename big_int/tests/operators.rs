use big_int::{BigInt, Error};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[rstest]
#[case("123", "123")]
#[case("-0", "0")]
#[case("0000", "0")]
#[case("-000042", "-42")]
#[case("4294967296", "4294967296")]
#[case("123456789123456789", "123456789123456789")]
#[case("-1000000000000000000000000000", "-1000000000000000000000000000")]
fn parse_then_print_is_canonical(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(big(input).to_string(), expected);
}

#[rstest]
#[case("", Error::Empty)]
#[case("-", Error::Empty)]
#[case("12a", Error::InvalidDigit { found: 'a', index: 2 })]
#[case("1 2", Error::InvalidDigit { found: ' ', index: 1 })]
#[case("--1", Error::InvalidDigit { found: '-', index: 1 })]
#[case("12345678901234567890x", Error::InvalidDigit { found: 'x', index: 20 })]
fn parse_rejects(#[case] input: &str, #[case] expected: Error) {
    assert_eq!(input.parse::<BigInt>(), Err(expected));
}

#[rstest]
#[case("7", "3", "2", "1")]
#[case("-7", "3", "-2", "-1")]
#[case("7", "-3", "-2", "1")]
#[case("-7", "-3", "2", "-1")]
#[case("2", "7", "0", "2")]
#[case("-2", "7", "0", "-2")]
#[case(
    "340282366920938463463374607431768211456",
    "18446744073709551616",
    "18446744073709551616",
    "0"
)]
#[case(
    "-340282366920938463463374607431768211457",
    "18446744073709551616",
    "-18446744073709551616",
    "-1"
)]
#[case("18446744073709551616", "4294967295", "4294967297", "1")]
fn truncating_division(#[case] a: &str, #[case] b: &str, #[case] q: &str, #[case] r: &str) {
    let (a, b) = (big(a), big(b));
    assert_eq!(&a / &b, big(q));
    assert_eq!(&a % &b, big(r));
    assert_eq!(&(&a / &b) * &b + &a % &b, a);
}

#[test]
fn division_by_zero_is_reported() {
    assert_eq!(big("5").try_rem(&big("0")), Err(Error::DivisionByZero));
    assert_eq!(big("5").try_div_rem(&BigInt::ZERO), Err(Error::DivisionByZero));
    assert_eq!(Error::DivisionByZero.to_string(), "division by zero");
}

#[test]
#[should_panic(expected = "division by zero")]
fn division_by_zero_panics() {
    let _ = big("5") / BigInt::ZERO;
}

#[rstest]
#[case(5, -1, 5, -1, -6)]
#[case(-1, -1, -1, -1, 0)]
#[case(-6, 3, 2, -5, -7)]
#[case(0, -9, 0, -9, -9)]
#[case(i64::MIN, -1, i64::MIN, -1, i64::MAX)]
fn bitwise_matches_twos_complement(
    #[case] a: i64,
    #[case] b: i64,
    #[case] and: i64,
    #[case] or: i64,
    #[case] xor: i64,
) {
    let (x, y) = (BigInt::from(a), BigInt::from(b));
    assert_eq!(&x & &y, BigInt::from(and));
    assert_eq!(&x | &y, BigInt::from(or));
    assert_eq!(&x ^ &y, BigInt::from(xor));
}

#[rstest]
#[case(7, 1, 3)]
#[case(-7, 1, -4)]
#[case(-8, 3, -1)]
#[case(-9, 3, -2)]
#[case(1, 40, 0)]
#[case(-1, 40, -1)]
fn shift_right_floors(#[case] value: i64, #[case] by: u32, #[case] expected: i64) {
    assert_eq!(BigInt::from(value) >> by, BigInt::from(expected));
}

#[test]
fn shift_left_grows_without_bound() {
    let value = BigInt::from(3) << 200;
    assert_eq!(value.digits().len(), 7);
    assert_eq!(value >> 200, BigInt::from(3));
}

#[test]
fn negative_zero_is_never_observable() {
    let a = big("-5");
    assert!(!(&a + &big("5")).is_negative());
    assert!(!(&a * &BigInt::ZERO).is_negative());
    assert!(!(-BigInt::ZERO).is_negative());
    assert!(!(&big("-4") % &big("2")).is_negative());
    assert!(!(&big("-1") / &big("3")).is_negative());
    assert_eq!(big("-0"), BigInt::ZERO);
}

#[test]
fn ordering_follows_sign_then_magnitude() {
    let mut values = vec![
        big("18446744073709551616"),
        big("-1"),
        big("0"),
        big("-18446744073709551616"),
        big("4294967295"),
        big("-4294967296"),
    ];
    values.sort();
    let printed: Vec<String> = values.iter().map(ToString::to_string).collect();
    assert_eq!(
        printed,
        [
            "-18446744073709551616",
            "-4294967296",
            "-1",
            "0",
            "4294967295",
            "18446744073709551616",
        ]
    );
}

#[test]
fn copies_are_independent() {
    let original = big("123456789012345678901234567890");
    assert!(!original.magnitude().is_inline());

    let mut copy = original.clone();
    assert!(original.magnitude().is_shared());

    copy *= &big("-2");
    copy.increment();
    copy <<= 5;
    assert_eq!(original, big("123456789012345678901234567890"));
    assert_eq!(copy, big("-7901234496790123449679012344928"));
}

#[test]
fn increment_and_decrement_cross_zero() {
    let mut value = BigInt::from(-2);
    value.increment().increment().increment();
    assert_eq!(value, BigInt::ONE);
    value.decrement().decrement();
    assert_eq!(value, BigInt::from(-1));
}

#[test]
fn euclidean_remainder_is_non_negative() {
    for (a, b) in [(-7, 3), (7, -3), (-7, -3), (7, 3), (-9, 3)] {
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        assert_eq!(x.rem_euclid(&y), BigInt::from(i64::rem_euclid(a, b)));
        assert_eq!(x.div_euclid(&y), BigInt::from(i64::div_euclid(a, b)));
    }
}
