use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};

use crate::{
    ast::{BinaryOperator, Expr},
    error::Error,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::{float_result, integer_operand},
        },
        value::decimal::Decimal,
    },
    util::num::magnitude_to_u32_checked,
};

impl Context {
    /// Evaluates a binary operation.
    ///
    /// Assignment is handled first because its left side is a name, not a
    /// value. Every other operator evaluates the left operand, then the right,
    /// then combines them.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The operator.
    /// - `right`: Right operand expression.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Errors
    /// - `NotAssignable` when the target of `=` is not a variable.
    /// - `DivisionByZero` for `/` or `%` by zero.
    /// - `Domain` for non-integral shift operands, oversized shift amounts,
    ///   out-of-range powers and scales that overflow.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr)
                                 -> EvalResult<Decimal> {
        if op == BinaryOperator::Assign {
            return self.eval_assignment(left, right);
        }
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_binary(op, &left, &right)
    }

    /// Binds the value of `right` to the variable named on the left.
    fn eval_assignment(&mut self, left: &Expr, right: &Expr) -> EvalResult<Decimal> {
        let Expr::Variable { name } = left else {
            return Err(Error::NotAssignable { target: left.to_string() });
        };
        let value = self.eval(right)?;
        self.set_variable(name, value.clone());
        Ok(value)
    }

    /// Applies a binary operator to two evaluated operands.
    ///
    /// Comparisons yield `1` or `0`.
    ///
    /// # Example
    /// ```
    /// use decicalc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::decimal::Decimal},
    /// };
    ///
    /// let a: Decimal = "0.001".parse().unwrap();
    /// let b = Decimal::from(10000);
    /// let sum = Context::eval_binary(BinaryOperator::Add, &a, &b).unwrap();
    /// assert_eq!(sum.to_string(), "10000.001");
    ///
    /// let less = Context::eval_binary(BinaryOperator::Less, &a, &b).unwrap();
    /// assert_eq!(less, Decimal::from(1));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Decimal, right: &Decimal) -> EvalResult<Decimal> {
        match op {
            BinaryOperator::Equal => Ok(Decimal::from(left == right)),
            BinaryOperator::NotEqual => Ok(Decimal::from(left != right)),
            BinaryOperator::Less => Ok(Decimal::from(left < right)),
            BinaryOperator::LessEqual => Ok(Decimal::from(left <= right)),
            BinaryOperator::Greater => Ok(Decimal::from(left > right)),
            BinaryOperator::GreaterEqual => Ok(Decimal::from(left >= right)),
            BinaryOperator::ShiftLeft | BinaryOperator::ShiftRight => shift(op, left, right),
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
            BinaryOperator::Div => left.checked_div(right),
            BinaryOperator::Mod => left.checked_rem(right),
            BinaryOperator::Pow => power(left, right),
            BinaryOperator::Assign => Err(Error::NotAssignable { target: left.to_string() }),
        }
    }
}

/// Shifts an integer left (multiplying by `2^n`) or right (dividing by `2^n`
/// and rounding toward negative infinity). A negative amount shifts the other
/// way. The amount must fit in 32 bits.
fn shift(op: BinaryOperator, value: &Decimal, amount: &Decimal) -> EvalResult<Decimal> {
    let name = format!("'{op}'");
    let value = integer_operand(&name, value)?;
    let amount = integer_operand(&name, amount)?;
    let bits = magnitude_to_u32_checked(&amount, "shift amount")?;

    let shifted: BigInt = if (op == BinaryOperator::ShiftLeft) != amount.is_negative() {
        value << bits
    } else {
        value >> bits
    };
    Ok(Decimal::from(shifted))
}

/// Raises `base` to `exponent`.
///
/// Integral exponents are exact (negative ones divide one by the power);
/// any other exponent goes through binary64, so `4^0.5` is `2`.
fn power(base: &Decimal, exponent: &Decimal) -> EvalResult<Decimal> {
    if let Some(integer) = exponent.to_integer()? {
        let integer = integer.to_i64()
                             .ok_or_else(|| Error::domain(format!("exponent {exponent} is out of range")))?;
        return base.powi(integer);
    }
    float_result("'^'", base.to_f64().powf(exponent.to_f64()))
}
