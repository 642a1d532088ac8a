use crate::interpreter::{
    evaluator::{core::EvalResult, utils::float_result},
    value::decimal::Decimal,
};

/// `rand()`: a uniformly distributed value in `[0, 1)`.
pub fn random(_args: &[Decimal]) -> EvalResult<Decimal> {
    float_result("rand", rand::random::<f64>())
}
