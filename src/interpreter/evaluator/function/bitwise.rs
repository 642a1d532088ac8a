use num_bigint::BigInt;

use crate::interpreter::{
    evaluator::{core::EvalResult, utils::integer_operand},
    value::decimal::Decimal,
};

/// Folds two or more integral operands with a two's-complement bit
/// operation.
fn fold(name: &str,
        args: &[Decimal],
        combine: fn(BigInt, &BigInt) -> BigInt)
        -> EvalResult<Decimal> {
    let mut operands = args.iter().map(|arg| integer_operand(name, arg));
    let Some(first) = operands.next() else {
        return Ok(Decimal::zero());
    };
    let mut result = first?;
    for operand in operands {
        result = combine(result, &operand?);
    }
    Ok(Decimal::from(result))
}

/// `BitAnd(a, b, ...)`
///
/// # Example
/// ```
/// use decicalc::interpreter::{evaluator::function::bitwise::and, value::decimal::Decimal};
///
/// let args = [Decimal::from(0x1234), Decimal::from(0xff0)];
/// assert_eq!(and(&args).unwrap(), Decimal::from(0x230));
/// assert!(and(&["1.5".parse().unwrap(), Decimal::from(1)]).is_err());
/// ```
pub fn and(args: &[Decimal]) -> EvalResult<Decimal> {
    fold("BitAnd", args, |a, b| a & b)
}

/// `BitOr(a, b, ...)`
pub fn or(args: &[Decimal]) -> EvalResult<Decimal> {
    fold("BitOr", args, |a, b| a | b)
}

/// `BitXor(a, b, ...)`
pub fn xor(args: &[Decimal]) -> EvalResult<Decimal> {
    fold("BitXor", args, |a, b| a ^ b)
}

/// `BitNot(a)`, which is `-a - 1`.
pub fn not(args: &[Decimal]) -> EvalResult<Decimal> {
    let value = integer_operand("BitNot", &args[0])?;
    Ok(Decimal::from(!value))
}
