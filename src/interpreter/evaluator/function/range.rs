use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::{Context, EvalResult, LOOP_VARIABLE},
        value::decimal::Decimal,
    },
};

/// `sum(min, max, body)`: the sum of `body` for `i` from `min` up to `max`
/// truncated toward zero. An empty range sums to `0`.
///
/// # Example
/// ```
/// use decicalc::Calculator;
///
/// let mut calculator = Calculator::new();
/// assert_eq!(calculator.evaluate("sum(0, 10, i^2)").unwrap(), "385");
/// assert_eq!(calculator.evaluate("Σ(0, 10.2, i)").unwrap(), "55");
/// ```
pub fn sum(context: &mut Context, args: &[Expr]) -> EvalResult<Decimal> {
    accumulate(context, args, Decimal::zero(), Decimal::checked_add)
}

/// `product(min, max, body)`: the product of `body` for `i` from `min` up to
/// `max` truncated toward zero. An empty range multiplies to `1`.
pub fn product(context: &mut Context, args: &[Expr]) -> EvalResult<Decimal> {
    accumulate(context, args, Decimal::one(), Decimal::checked_mul)
}

/// Evaluates the bounds, then the body once per step, and puts back whatever
/// `i` was bound to before, whether or not the loop succeeded.
fn accumulate(context: &mut Context,
              args: &[Expr],
              identity: Decimal,
              combine: fn(&Decimal, &Decimal) -> EvalResult<Decimal>)
              -> EvalResult<Decimal> {
    let [min, max, body] = args else {
        return Ok(identity);
    };
    let min = context.eval(min)?;
    let max = context.eval(max)?.trunc()?;

    let saved = context.take_variable(LOOP_VARIABLE);
    let result = run(context, &min, &max, body, identity, combine);
    context.restore_variable(LOOP_VARIABLE, saved);
    result
}

fn run(context: &mut Context,
       min: &Decimal,
       max: &Decimal,
       body: &Expr,
       identity: Decimal,
       combine: fn(&Decimal, &Decimal) -> EvalResult<Decimal>)
       -> EvalResult<Decimal> {
    let one = Decimal::one();
    let mut accumulator = identity;
    let mut i = min.clone();
    while i <= *max {
        context.set_variable(LOOP_VARIABLE, i.clone());
        let value = context.eval(body)?;
        accumulator = combine(&accumulator, &value)?;
        i = i.checked_add(&one)?;
    }
    Ok(accumulator)
}
