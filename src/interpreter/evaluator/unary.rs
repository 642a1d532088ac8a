use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::integer::factorial,
        },
        value::decimal::Decimal,
    },
};

impl Context {
    /// Evaluates a unary operation.
    ///
    /// Supported operators:
    /// - `Not`: `1` if the operand is zero, otherwise `0`.
    /// - `Factorial`: the factorial of a non-negative integer.
    ///
    /// Negation and bitwise NOT never reach here; the parser rewrites them.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `expr`: Operand expression.
    ///
    /// # Returns
    /// The computed value.
    pub(crate) fn eval_unary_op(&mut self, op: UnaryOperator, expr: &Expr) -> EvalResult<Decimal> {
        let value = self.eval(expr)?;
        match op {
            UnaryOperator::Not => Ok(Decimal::from(value.is_zero())),
            UnaryOperator::Factorial => factorial(&[value]),
        }
    }
}
