use log::debug;

use crate::{
    error::Result,
    interpreter::{
        evaluator::core::{ANS, Context},
        parser::core::parse,
        value::decimal::Decimal,
    },
};

/// One calculator session.
///
/// A session owns its [`Context`], so variables assigned with `=` and the
/// previous result `Ans` carry over from one [`Calculator::evaluate`] call to
/// the next. A failed call leaves every binding as it was.
///
/// # Example
/// ```
/// use decicalc::Calculator;
///
/// let mut calculator = Calculator::new();
/// assert_eq!(calculator.evaluate("a = 2").unwrap(), "2");
/// assert_eq!(calculator.evaluate("2*a").unwrap(), "4");
/// assert_eq!(calculator.evaluate("Ans + 1").unwrap(), "5");
/// assert!(calculator.evaluate("1+").is_err());
/// assert_eq!(calculator.evaluate("Ans").unwrap(), "5");
/// ```
#[derive(Default)]
pub struct Calculator {
    context: Context,
}

impl Calculator {
    /// Starts a session with no variables bound.
    #[must_use]
    pub fn new() -> Self {
        Self { context: Context::new() }
    }

    /// Parses and evaluates one expression, stores the result as `Ans`, and
    /// returns it rendered as text.
    ///
    /// # Errors
    /// Any lexical, syntax or evaluation error. Nothing is stored in that
    /// case, though an assignment that completed before a later failure in
    /// the same expression keeps its binding.
    pub fn evaluate(&mut self, expression: &str) -> Result<String> {
        let tree = parse(expression, &self.context)?;
        let value = self.context.eval(&tree).inspect_err(|error| {
                                                 debug!("evaluating {expression:?} failed: {error}");
                                             })?;
        debug!("{expression:?} = {value}");
        self.context.set_variable(ANS, value.clone());
        Ok(value.to_string())
    }

    /// The value currently bound to `name`, including `Ans`.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<Decimal> {
        self.context.variable(name)
    }

    /// The session context.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }
}
