use std::{fs, sync::Once};

use decicalc::{Calculator, evaluate};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
            let _ = env_logger::builder().is_test(true).try_init();
        });
}

/// Runs every `tests/scripts/*.calc` file on its own session. Each line is
/// `expression => expected` or `expression => error: message`.
#[test]
fn scripted_sessions_work() {
    init_logging();
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let mut calculator = Calculator::new();

        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (expression, expected) =
                line.rsplit_once(" => ")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing ' => '", number + 1));
            count += 1;

            let actual = match calculator.evaluate(expression) {
                Ok(result) => result,
                Err(e) => format!("error: {e}"),
            };
            assert_eq!(actual,
                       expected,
                       "{:?}:{}: evaluating {expression:?}",
                       path,
                       number + 1);
        }
    }

    assert!(count > 0, "No scripted expressions found in tests/scripts");
}

fn assert_result(expression: &str, expected: &str) {
    init_logging();
    match evaluate(expression) {
        Ok(result) => assert_eq!(result, expected, "evaluating {expression:?}"),
        Err(e) => panic!("{expression:?} failed: {e}"),
    }
}

fn assert_approx(expression: &str, expected: f64) {
    init_logging();
    let result = evaluate(expression).unwrap_or_else(|e| panic!("{expression:?} failed: {e}"));
    let value: f64 = result.parse()
                           .unwrap_or_else(|e| panic!("{expression:?} gave {result:?}: {e}"));
    assert!((value - expected).abs() < 1e-12,
            "{expression:?} gave {result}, expected about {expected}");
}

fn assert_failure(expression: &str, message: &str) {
    init_logging();
    match evaluate(expression) {
        Ok(result) => panic!("{expression:?} succeeded with {result} but was expected to fail"),
        Err(e) => assert_eq!(e.to_string(), message, "evaluating {expression:?}"),
    }
}

#[test]
fn literals_keep_their_scale() {
    assert_result("0", "0");
    assert_result("-1", "-1");
    assert_result("--1", "1");
    assert_result("1.00", "1.00");
    assert_result(".2", "0.2");
    assert_result("1.2E3", "1.2E+3");
    assert_result("1E3", "1E+3");
    assert_result("1.E3", "1E+3");
    assert_result(".1E3", "1E+2");
    assert_result("2e-3", "0.002");
    assert_result("0x1234", "4660");
    assert_result("0b1010", "10");
}

#[test]
fn addition_and_subtraction() {
    assert_result("1+2+3", "6");
    assert_result("1+-2", "-1");
    assert_result("3-2-1", "0");
    assert_result("10000+0.001", "10000.001");
    assert_result("0.001+10000", "10000.001");
    assert_result("10000-0.001", "9999.999");
    assert_result("0.001-10000", "-9999.999");
    assert_result("1.00 + 0", "1.00");
}

#[test]
fn multiplication_division_and_remainder() {
    assert_result("3*4", "12");
    assert_result("-3*4", "-12");
    assert_result("3*-4", "-12");
    assert_result("-3*-4", "12");
    assert_result("1+2*3", "7");
    assert_result("(1+2)*3", "9");
    assert_result("1/2", "0.5");
    assert_result("1.00/2", "0.50");
    assert_result("10/4", "2.5");
    assert_result("2/3", "0.6666666666666666666666666666666667");
    assert_result("3%4", "3");
    assert_result("4%4", "0");
    assert_result("5%4", "1");
    assert_result("-5%4", "-1");
    assert_result("5.5%2", "1.5");
}

#[test]
fn relational_operators_yield_one_or_zero() {
    assert_result("1<2", "1");
    assert_result("2<1", "0");
    assert_result("2<=2", "1");
    assert_result("3>=4", "0");
    assert_result("3>2", "1");
    assert_result("1==1.00", "1");
    assert_result("1!=2", "1");
    assert_result("1<2<3", "1");
}

#[test]
fn logical_not() {
    assert_result("!(1==2)", "1");
    assert_result("!(2==2)", "0");
    assert_result("!!(2==2)", "1");
    assert_result("!0", "1");
}

#[test]
fn shifts() {
    assert_result("1<<4", "16");
    assert_result("(12<<3)>>3", "12");
    assert_result("-7>>1", "-4");
    assert_result("16<<-2", "4");
}

#[test]
fn bitwise_operations() {
    assert_result("(0x1234 & 0xff0)==0x230", "1");
    assert_result("(0x1200 | 0x34)==0x1234", "1");
    assert_result("BitXor(5,3)", "6");
    assert_result("BitAnd(7,6,3)", "2");
    assert_result("BitOr(1,2,4)", "7");
    assert_result("((0x1234 & ~0xff) | 0x56)==0x1256", "1");
    assert_result("~3", "-4");
    assert_result("~~3", "3");
    assert_result("BitNot(0)", "-1");
}

#[test]
fn exponentiation() {
    assert_result("2^3", "8");
    assert_result("2^3^4", "2417851639229258349412352");
    assert_result("4^0.5", "2");
    assert_result("-10^2", "-100");
    assert_result("(-10)^2", "100");
    assert_result("1.5^2", "2.25");
    assert_result("2^(-2)", "0.25");
    assert_result("2^0", "1");
}

#[test]
fn constants() {
    assert_approx("e", std::f64::consts::E);
    assert_approx("pi", std::f64::consts::PI);
    assert_result("pi == π", "1");
    assert_result("e", "2.718281828459045235360287471352662");
}

#[test]
fn trigonometric_and_hyperbolic_functions() {
    assert_result("acos(1)", "0");
    assert_result("asin(0)", "0");
    assert_result("acos(0)==asin(1)", "1");
    assert_result("atan(0)", "0");
    assert_result("cos(0)", "1");
    assert_result("cos(pi)", "-1");
    assert_result("cosh(0)", "1");
    assert_result("sin(0)", "0");
    assert_result("sin(pi/2)", "1");
    assert_result("sinh(0)", "0");
    assert_result("tan(0)", "0");
    assert_result("tanh(0)", "0");
    assert_approx("atan2(1, 1)", std::f64::consts::FRAC_PI_4);
}

#[test]
fn rounding_and_absolute_value() {
    assert_result("abs(2)", "2");
    assert_result("abs(-2)", "2");
    assert_result("abs(-2.50)", "2.50");
    assert_result("ceil(1.2)", "2");
    assert_result("ceiling(-1.2)", "-1");
    assert_result("floor(1.2)", "1");
    assert_result("floor(-1.2)", "-2");
    assert_result("round(1.2)", "1");
    assert_result("round(1.8)", "2");
    assert_result("round(2.5)", "3");
}

#[test]
fn exponentials_logarithms_and_roots() {
    assert_approx("exp(1)/e", 1.0);
    assert_result("log(2,1024)", "10");
    assert_result("log2(1024)", "10");
    assert_approx("logE(exp(4))", 4.0);
    assert_approx("log10(1000)", 3.0);
    assert_approx("log(e)", 1.0);
    assert_result("cbrt(27)", "3");
    assert_result("sqrt(81)", "9");
    assert_result("hypot(3,4)", "5");
    assert_result("√4", "2");
    assert_result("√√16", "2");
    assert!(evaluate("√3*2").unwrap().starts_with("3.464"));
}

#[test]
fn integer_functions() {
    assert_result("factorial(5)", "120");
    assert_result("factorial(5)==5!", "1");
    assert_result("0!", "1");
    assert_result("is_prime(0)", "0");
    assert_result("is_prime(1)", "0");
    assert_result("is_prime(2)", "1");
    assert_result("is_prime(3)", "1");
    assert_result("is_prime(4)", "0");
    assert_result("is_prime(5)", "1");
    assert_result("is_prime(-4)", "0");
    assert_result("is_prime(-5)", "1");
    assert_result("is_prime(2^61-1)", "1");
    assert_result("is_prime(561)", "0");
}

#[test]
fn sum_and_product() {
    assert_result("sum(0,10,i)", "55");
    assert_result("sum(0,10.2,i)", "55");
    assert_result("sum(0,10,i^2)", "385");
    assert_approx("sum(0,30,1/i!)-e", 0.0);
    assert_result("product(1,10,i)", "3628800");
    assert_result("product(1,10.2,i)", "3628800");
    assert_result("product(1,6,i^2)", "518400");
    assert_result("Σ(1,4,i)", "10");
    assert_result("∑(1,4,i)", "10");
    assert_result("Π(1,4,i)", "24");
    assert_result("∏(1,4,i)", "24");
    assert_result("sum(5,1,i)", "0");
    assert_result("product(5,1,i)", "1");
    assert_result("sum(1,3,sum(1,i,1))", "6");
}

#[test]
fn random_numbers_are_in_the_unit_interval() {
    for name in ["rand()", "random()"] {
        let value: f64 = evaluate(name).unwrap().parse().unwrap();
        assert!((0.0..1.0).contains(&value), "{name} gave {value}");
    }
}

#[test]
fn ans_chains_through_a_session() {
    let mut calculator = Calculator::new();
    let results = ["0", "1+Ans", "1+Ans", "Ans*2"].map(|e| calculator.evaluate(e).unwrap());
    assert_eq!(results, ["0", "1", "2", "4"]);
}

#[test]
fn variables_persist_within_a_session() {
    let mut calculator = Calculator::new();
    let results = ["a = 2", "a", "2*a"].map(|e| calculator.evaluate(e).unwrap());
    assert_eq!(results, ["2", "2", "4"]);
    assert_eq!(calculator.variable("a").map(|v| v.to_string()), Some("2".to_string()));
    assert_eq!(calculator.variable("Ans").map(|v| v.to_string()), Some("4".to_string()));
}

#[test]
fn failed_evaluation_keeps_bindings() {
    let mut calculator = Calculator::new();
    calculator.evaluate("x = 5").unwrap();
    assert!(calculator.evaluate("x = 1/0").is_err());
    assert_eq!(calculator.evaluate("x + Ans").unwrap(), "10");
}

#[test]
fn loop_variable_is_restored() {
    let mut calculator = Calculator::new();
    calculator.evaluate("i = 42").unwrap();
    assert_eq!(calculator.evaluate("sum(1,3,i)").unwrap(), "6");
    assert_eq!(calculator.evaluate("i").unwrap(), "42");

    let mut fresh = Calculator::new();
    assert_eq!(fresh.evaluate("product(1,3,i)").unwrap(), "6");
    assert!(fresh.evaluate("i").is_err());
}

#[test]
fn syntax_errors() {
    assert_failure("1+", "unexpected end of input");
    assert_failure("(1", "expected ')', got end of input instead");
    assert_failure("1 2", "expected end of input, got number instead");
    assert_failure("1 << 2 )", "expected end of input, got ')' instead");
    assert_failure("sqrt 4", "expected '(', got number instead");
    assert_failure("sqrt(4", "expected ')', got end of input instead");
    assert_failure("*3", "unexpected '*'");
    assert_failure("1 $ 2", "unexpected character '$' at offset 2");
}

#[test]
fn evaluation_errors() {
    assert_failure("undefinedVar", "unknown variable 'undefinedVar'");
    assert_failure("3 = 4", "can't assign to 3");
    assert_failure("sqrt(1,2)", "'sqrt' expects 1 argument(s), got 2");
    assert_failure("BitAnd(1)", "'BitAnd' expects at least 2 argument(s), got 1");
    assert_failure("log(1,2,3)", "'log' expects 1 or 2 argument(s), got 3");
    assert_failure("Σ(1,2)", "'Σ' expects 3 argument(s), got 2");
    assert_failure("1/0", "division by zero");
    assert_failure("1%0", "division by zero");
    assert_failure("BitAnd(1.5, 1)", "BitAnd: 1.5 is not an integer");
    assert_failure("1.5 << 1", "'<<': 1.5 is not an integer");
    assert_failure("factorial(-1)", "factorial: -1 is negative");
    assert_failure("2.5!", "factorial: 2.5 is not an integer");
    assert_failure("is_prime(2.5)", "is_prime: 2.5 is not an integer");
    assert_failure("sqrt(-1)", "sqrt: result is not a finite number");
    assert_failure("log(0)", "log: result is not a finite number");
    assert_failure("logE(0)", "logE: result is not a finite number");
}

#[test]
fn oversized_operands_fail_without_aborting() {
    let huge = "1E9000000000000000000";
    let tiny = "1E-9000000000000000000";
    assert_failure(&format!("{huge} * {huge}"), "scale overflow");
    assert_failure(&format!("{tiny} / {huge}"), "scale overflow");
    assert_failure(&format!("{tiny} + {huge}"), "scale overflow");
    assert_failure(&format!("{huge} - {tiny}"), "scale overflow");
    assert_failure(&format!("{tiny} + 1"), "scale overflow");
    assert_failure(&format!("floor({huge})"), "scale overflow");
    assert_failure(&format!("{huge} << 1"), "scale overflow");
    assert_failure(&format!("{tiny} >> 1"), &format!("'>>': {tiny} is not an integer"));
    assert_failure("1 << 100000000000000", "shift amount 100000000000000 is out of range");
    assert_failure("1 >> -4294967296", "shift amount -4294967296 is out of range");
    assert_result(&format!("{huge} * 1"), "1E+9000000000000000000");
}

#[test]
fn identifiers_may_use_any_letters() {
    let mut calculator = Calculator::new();
    let results =
        ["é = 2", "é * 3", "größe_2 = é + 1", "größe_2"].map(|e| calculator.evaluate(e).unwrap());
    assert_eq!(results, ["2", "6", "3", "3"]);
    assert_eq!(calculator.evaluate("2 * π == 2 * pi").unwrap(), "1");
}
