/// Numeric helpers shared by the value type and the evaluator.
///
/// Provides power-of-ten construction, decimal digit counting, and checked
/// conversions from arbitrary-precision integers into machine integers.
pub mod num;
