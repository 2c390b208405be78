//! End-to-end scenarios and property tests spanning the whole crate.

use crate::{Decimal, RoundingMode};
use proptest::prelude::*;

#[test]
fn parses_and_formats_a_price() {
    let price: Decimal = "19.99".parse().unwrap();
    let quantity = Decimal::from_i64(3);
    let total = price.checked_mul(&quantity).unwrap();
    assert_eq!(total.to_string(), "59.97");
}

#[test]
fn addition_overflow_is_reported() {
    let result = Decimal::MAX.checked_add(&Decimal::ONE);
    assert!(matches!(result, Err(crate::Error::Overflow(_))));
}

#[test]
fn half_even_rounds_ties_to_the_even_digit() {
    let a: Decimal = "2.5".parse().unwrap();
    let b: Decimal = "3.5".parse().unwrap();
    assert_eq!(a.round(0, RoundingMode::HalfEven).unwrap().to_string(), "2");
    assert_eq!(b.round(0, RoundingMode::HalfEven).unwrap().to_string(), "4");
}

#[test]
fn sign_normalizes_on_parse_but_not_on_explicit_negate() {
    let parsed: Decimal = "-0".parse().unwrap();
    assert!(!parsed.is_negative());

    let negated = Decimal::ZERO.neg();
    assert_eq!(negated, Decimal::ZERO);
    assert!(negated.is_sign_negative());
}

#[test]
fn division_by_zero_and_zero_over_zero_are_distinguished() {
    let one = Decimal::ONE;
    assert!(matches!(
        one.checked_div(&Decimal::ZERO),
        Err(crate::Error::DivisionByZero(_))
    ));
    assert!(matches!(
        Decimal::ZERO.checked_div(&Decimal::ZERO),
        Err(crate::Error::InvalidOperation(_))
    ));
}

#[test]
fn sqrt_of_a_perfect_square_is_exact() {
    let nine = Decimal::from_i64(9);
    let root = nine.checked_sqrt().unwrap();
    assert_eq!(root.round(0, RoundingMode::Down).unwrap().to_string(), "3");
}

#[test]
fn conversion_syntax_errors_are_distinct_from_overflow() {
    assert!(matches!(
        "not a number".parse::<Decimal>(),
        Err(crate::Error::ConversionSyntax(_))
    ));
    assert!(matches!(
        "999999999999999999999999999999999".parse::<Decimal>(),
        Err(crate::Error::Overflow(_))
    ));
}

fn coefficient_strategy() -> impl Strategy<Value = u128> {
    0..=79_228_162_514_264_337_593_543_950_335u128
}

fn scale_strategy() -> impl Strategy<Value = u32> {
    0..=28u32
}

fn decimal_strategy() -> impl Strategy<Value = Decimal> {
    (coefficient_strategy(), scale_strategy(), any::<bool>()).prop_map(|(c, s, neg)| {
        Decimal::from_parts(c as u32, (c >> 32) as u32, (c >> 64) as u32, s, neg)
            .expect("coefficient_strategy and scale_strategy stay within range")
    })
}

proptest! {
    #[test]
    fn addition_is_commutative(a in decimal_strategy(), b in decimal_strategy()) {
        let lhs = a.checked_add(&b);
        let rhs = b.checked_add(&a);
        prop_assert_eq!(lhs.is_ok(), rhs.is_ok());
        if let (Ok(l), Ok(r)) = (lhs, rhs) {
            prop_assert_eq!(l, r);
        }
    }

    #[test]
    fn adding_zero_is_identity(a in decimal_strategy()) {
        let result = a.checked_add(&Decimal::ZERO).unwrap();
        prop_assert_eq!(result, a);
    }

    #[test]
    fn multiplying_by_one_is_identity(a in decimal_strategy()) {
        let result = a.checked_mul(&Decimal::ONE).unwrap();
        prop_assert_eq!(result, a);
    }

    #[test]
    fn multiplication_is_commutative(a in decimal_strategy(), b in decimal_strategy()) {
        let lhs = a.checked_mul(&b);
        let rhs = b.checked_mul(&a);
        prop_assert_eq!(lhs.is_ok(), rhs.is_ok());
        if let (Ok(l), Ok(r)) = (lhs, rhs) {
            prop_assert_eq!(l, r);
        }
    }

    #[test]
    fn parse_format_roundtrips(a in decimal_strategy()) {
        let text = a.to_string();
        let reparsed: Decimal = text.parse().unwrap();
        prop_assert_eq!(reparsed, a);
        prop_assert_eq!(reparsed.scale(), a.scale());
    }

    #[test]
    fn sqrt_squared_is_within_one_unit_of_least_precision(a in coefficient_strategy(), s in scale_strategy()) {
        let d = Decimal::from_parts(a as u32, (a >> 32) as u32, (a >> 64) as u32, s, false).unwrap();
        if let Ok(root) = d.checked_sqrt() {
            if let Ok(squared) = root.checked_mul(&root) {
                let diff = if squared > d { squared.checked_sub(&d).unwrap() } else { d.checked_sub(&squared).unwrap() };
                let tolerance: Decimal = "0.001".parse().unwrap();
                prop_assert!(diff <= tolerance || d.is_zero());
            }
        }
    }

    #[test]
    fn round_half_even_never_increases_scale(a in decimal_strategy(), digits in scale_strategy()) {
        if let Ok(rounded) = a.round(digits, RoundingMode::HalfEven) {
            prop_assert!(rounded.scale() <= a.scale().max(digits));
        }
    }

    #[test]
    fn comparison_is_consistent_with_subtraction(a in decimal_strategy(), b in decimal_strategy()) {
        if let Ok(diff) = a.checked_sub(&b) {
            if diff.is_zero() {
                prop_assert_eq!(a, b);
            } else if diff.is_negative() {
                prop_assert!(a < b);
            } else {
                prop_assert!(a > b);
            }
        }
    }
}
