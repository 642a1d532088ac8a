use decicalc::interpreter::value::decimal::{Decimal, PRECISION};
use num_bigint::BigInt;
use pretty_assertions::assert_eq;

fn dec(text: &str) -> Decimal {
    text.parse().unwrap_or_else(|e| panic!("{text:?} is not a decimal: {e}"))
}

fn quotient(dividend: &str, divisor: &str) -> String {
    dec(dividend).checked_div(&dec(divisor))
                 .unwrap_or_else(|e| panic!("{dividend}/{divisor} failed: {e}"))
                 .to_string()
}

#[test]
fn literals_render_with_their_scale() {
    assert_eq!(dec("0").to_string(), "0");
    assert_eq!(dec("0.00").to_string(), "0.00");
    assert_eq!(dec("-1.50").to_string(), "-1.50");
    assert_eq!(dec("1.").to_string(), "1");
    assert_eq!(dec("1.2E3").to_string(), "1.2E+3");
    assert_eq!(dec("12E-1").to_string(), "1.2");
    assert_eq!(dec("1E-10").to_string(), "1E-10");
    assert_eq!(dec("123E-9").to_string(), "1.23E-7");
    assert_eq!(dec("0.00000123").to_string(), "0.00000123");
}

#[test]
fn scale_follows_arithmetic_rules() {
    assert_eq!(dec("1.5").checked_add(&dec("2.25")).unwrap().scale(), 2);
    assert_eq!(dec("1.5").checked_sub(&dec("2")).unwrap().to_string(), "-0.5");
    assert_eq!(dec("1.5").checked_mul(&dec("0.02")).unwrap().to_string(), "0.030");
    assert_eq!(dec("1E3").checked_mul(&dec("1")).unwrap().to_string(), "1E+3");
}

#[test]
fn zero_and_one_operands_keep_the_scale() {
    assert_eq!(dec("1").checked_sub(&dec("0.00")).unwrap().to_string(), "1.00");
    assert_eq!(dec("0.00").checked_sub(&dec("1")).unwrap().to_string(), "-1.00");
    assert_eq!(dec("0E-20").checked_add(&dec("1")).unwrap().scale(), 20);
    assert_eq!(dec("1.00").checked_mul(&dec("2")).unwrap().to_string(), "2.00");
    assert_eq!(dec("2.5").checked_mul(&dec("1.0")).unwrap().to_string(), "2.50");
}

#[test]
fn overflowing_scales_are_errors() {
    let huge = dec("1E9000000000000000000");
    let tiny = dec("1E-9000000000000000000");
    assert!(huge.checked_mul(&huge).is_err());
    assert!(tiny.checked_mul(&tiny).is_err());
    assert!(tiny.checked_div(&huge).is_err());
    assert!(tiny.checked_add(&huge).is_err());
    assert!(huge.checked_sub(&tiny).is_err());
    assert!(tiny.checked_rem(&huge).is_err());
    assert!(tiny.checked_add(&dec("1")).is_err());
    assert!(huge.floor().is_err());
    assert!(huge.to_integer().is_err());
    assert_eq!(huge.to_string(), "1E+9000000000000000000");
    assert_eq!(tiny.to_string(), "1E-9000000000000000000");
}

#[test]
fn equality_ignores_scale() {
    assert_eq!(dec("1.0"), dec("1.00"));
    assert!(dec("0.1") < dec("0.11"));
    assert!(dec("-2") < dec("-1.5"));
}

#[test]
fn exact_quotients_are_trimmed_to_the_preferred_scale() {
    assert_eq!(quotient("1", "2"), "0.5");
    assert_eq!(quotient("1.00", "2"), "0.50");
    assert_eq!(quotient("6", "2"), "3");
    assert_eq!(quotient("1", "8"), "0.125");
    assert_eq!(quotient("1", "0.5"), "2");
    assert_eq!(quotient("0.00", "3"), "0.00");
    assert_eq!(quotient("-1", "4"), "-0.25");
}

#[test]
fn inexact_quotients_round_half_even() {
    assert_eq!(quotient("1", "7"), "0.1428571428571428571428571428571429");
    assert_eq!(quotient("-1", "3"), "-0.3333333333333333333333333333333333");
    assert_eq!(quotient("1.0000000000000000000000000000000005", "1"),
               "1.000000000000000000000000000000000");
    assert_eq!(quotient("1.0000000000000000000000000000000015", "1"),
               "1.000000000000000000000000000000002");
    assert_eq!(quotient("123456789012345678901234567890123456789", "1"),
               "1.234567890123456789012345678901235E+38");
}

#[test]
fn rounding_carries_into_a_new_digit() {
    let nines = format!("0.{}", "9".repeat(40));
    let rounded = dec(&nines).checked_div(&dec("1")).unwrap();
    assert_eq!(rounded, Decimal::one());
    let (unscaled, _) = rounded.parts();
    assert!(unscaled.to_string().len() as u64 <= PRECISION);
}

#[test]
fn division_by_zero_fails() {
    assert!(dec("1").checked_div(&dec("0.0")).is_err());
    assert!(dec("1").checked_rem(&dec("0")).is_err());
}

#[test]
fn remainder_truncates() {
    assert_eq!(dec("7").checked_rem(&dec("3")).unwrap().to_string(), "1");
    assert_eq!(dec("-7").checked_rem(&dec("3")).unwrap().to_string(), "-1");
    assert_eq!(dec("7.5").checked_rem(&dec("2")).unwrap().to_string(), "1.5");
}

#[test]
fn powers() {
    assert_eq!(dec("10").pow(3).unwrap().to_string(), "1000");
    assert_eq!(dec("0.1").pow(3).unwrap().to_string(), "0.001");
    assert_eq!(dec("2").powi(-1).unwrap().to_string(), "0.5");
    assert_eq!(dec("3").powi(-1).unwrap().to_string(), "0.3333333333333333333333333333333333");
    assert!(dec("0").powi(-1).is_err());
}

#[test]
fn rounding_to_integers() {
    assert_eq!(dec("1.5").round().unwrap().to_string(), "2");
    assert_eq!(dec("-1.5").round().unwrap().to_string(), "-2");
    assert_eq!(dec("1.49").round().unwrap().to_string(), "1");
    assert_eq!(dec("-1.1").floor().unwrap().to_string(), "-2");
    assert_eq!(dec("-1.9").ceil().unwrap().to_string(), "-1");
    assert_eq!(dec("-1.9").trunc().unwrap().to_string(), "-1");
    assert_eq!(dec("1E3").floor().unwrap().to_string(), "1000");
    assert_eq!(dec("1E-9000000000000000000").floor().unwrap().to_string(), "0");
}

#[test]
fn integral_values() {
    assert!(dec("3.000").is_integral());
    assert!(dec("1E3").is_integral());
    assert!(!dec("3.001").is_integral());
    assert!(!dec("1E-9000000000000000000").is_integral());
    assert!(dec("0E-9000000000000000000").is_integral());
    assert_eq!(dec("1E3").to_integer().unwrap(), Some(BigInt::from(1000)));
    assert_eq!(dec("3.000").to_integer().unwrap(), Some(BigInt::from(3)));
    assert_eq!(dec("2.50").to_integer().unwrap(), None);
}

#[test]
fn floating_point_conversion() {
    assert_eq!(Decimal::from_f64(0.1).unwrap().to_string(), "0.1");
    assert_eq!(Decimal::from_f64(1e20).unwrap().to_string(), "100000000000000000000");
    assert_eq!(Decimal::from_f64(-3.0).unwrap().to_string(), "-3");
    assert_eq!(Decimal::from_f64(1.5e-7).unwrap().to_string(), "1.5E-7");
    assert!(Decimal::from_f64(f64::INFINITY).is_none());
    assert!((dec("2.5").to_f64() - 2.5).abs() < f64::EPSILON);
}

#[test]
fn radix_literals() {
    assert_eq!(Decimal::from_radix("ff", 16), Some(Decimal::from(255)));
    assert_eq!(Decimal::from_radix("101", 2), Some(Decimal::from(5)));
    assert_eq!(Decimal::from_radix("2", 2), None);
}
