use crate::interpreter::{
    evaluator::{core::EvalResult, utils::float_result},
    value::decimal::Decimal,
};

/// Applies a unary binary64 function to a decimal.
///
/// The generated functions expect exactly one argument, already checked by
/// the registry. The argument is converted to the nearest `f64`, the function
/// applied, and the result converted back through its shortest decimal form.
/// NaN and infinite results become domain errors.
///
/// # Example
/// ```
/// use decicalc::interpreter::{evaluator::function::math::cos, value::decimal::Decimal};
///
/// let pi: Decimal = "3.141592653589793238462643383279503".parse().unwrap();
/// assert_eq!(cos(&[pi]).unwrap(), Decimal::from(-1));
/// ```
macro_rules! float_builtin {
    ($fname:ident, $name:literal, $real_fn:ident) => {
        #[doc = concat!("`", $name, "(x)`")]
        pub fn $fname(args: &[Decimal]) -> EvalResult<Decimal> {
            float_result($name, args[0].to_f64().$real_fn())
        }
    };
}

float_builtin!(sin, "sin", sin);
float_builtin!(cos, "cos", cos);
float_builtin!(tan, "tan", tan);
float_builtin!(asin, "asin", asin);
float_builtin!(acos, "acos", acos);
float_builtin!(atan, "atan", atan);
float_builtin!(sinh, "sinh", sinh);
float_builtin!(cosh, "cosh", cosh);
float_builtin!(tanh, "tanh", tanh);
float_builtin!(exp, "exp", exp);
float_builtin!(ln, "logE", ln);
float_builtin!(log2, "log2", log2);
float_builtin!(log10, "log10", log10);
float_builtin!(sqrt, "sqrt", sqrt);
float_builtin!(cbrt, "cbrt", cbrt);

/// `log(x)` is the natural logarithm; `log(base, x)` the logarithm of `x` in
/// `base`.
///
/// The two-argument form divides base-2 logarithms, so exact powers of two
/// such as `log(2, 1024)` come out exact.
pub fn log(args: &[Decimal]) -> EvalResult<Decimal> {
    if let [base, x] = args {
        return float_result("log", x.to_f64().log2() / base.to_f64().log2());
    }
    float_result("log", args[0].to_f64().ln())
}

/// `atan2(y, x)`: the angle of the point `(x, y)`.
pub fn atan2(args: &[Decimal]) -> EvalResult<Decimal> {
    float_result("atan2", args[0].to_f64().atan2(args[1].to_f64()))
}

/// `hypot(x, y)`: `sqrt(x^2 + y^2)` without intermediate overflow.
pub fn hypot(args: &[Decimal]) -> EvalResult<Decimal> {
    float_result("hypot", args[0].to_f64().hypot(args[1].to_f64()))
}

/// `abs(x)`, exact.
pub fn abs(args: &[Decimal]) -> EvalResult<Decimal> {
    Ok(args[0].abs())
}

/// `ceil(x)`, exact, scale 0.
pub fn ceil(args: &[Decimal]) -> EvalResult<Decimal> {
    args[0].ceil()
}

/// `floor(x)`, exact, scale 0.
pub fn floor(args: &[Decimal]) -> EvalResult<Decimal> {
    args[0].floor()
}

/// `round(x)`: halves round away from zero, scale 0.
///
/// # Example
/// ```
/// use decicalc::interpreter::{evaluator::function::math::round, value::decimal::Decimal};
///
/// let half: Decimal = "-2.5".parse().unwrap();
/// assert_eq!(round(&[half]).unwrap().to_string(), "-3");
/// ```
pub fn round(args: &[Decimal]) -> EvalResult<Decimal> {
    args[0].round()
}
