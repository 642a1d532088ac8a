use std::collections::HashMap;

use log::trace;

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{evaluator::function::core::Builtin, value::decimal::Decimal},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// [`Error`] describing the failure.
pub type EvalResult<T> = Result<T, Error>;

/// Name of the variable holding the previous result.
pub const ANS: &str = "Ans";

/// Name of the variable `sum` and `product` bind for each step.
pub const LOOP_VARIABLE: &str = "i";

/// `e` to 34 significant digits.
const E: &str = "2.718281828459045235360287471352662";
/// `π` to 34 significant digits.
const PI: &str = "3.141592653589793238462643383279503";

/// Stores the evaluation context of one calculator session.
///
/// This struct holds the session state: the named constants, the builtin
/// functions under all their aliases, and the variables assigned so far
/// (including `Ans`).
///
/// ## Usage
///
/// `Context` is created once per session and reused for every expression.
/// The parser reads it to resolve identifiers; evaluation may bind variables.
/// It is not meant to be shared between threads.
pub struct Context {
    /// Constant names mapped to the literal node substituted for them.
    constants: HashMap<String, Expr>,
    /// Every function name and alias mapped to its builtin.
    functions: HashMap<String, Builtin>,
    /// Variable bindings, each a literal node.
    variables: HashMap<String, Expr>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with the constants `e`, `pi` and `π`, every builtin
    /// and no variables.
    #[must_use]
    pub fn new() -> Self {
        let mut constants = HashMap::new();
        for (name, digits) in [("e", E), ("pi", PI), ("π", PI)] {
            if let Ok(value) = Decimal::parse_literal(digits) {
                constants.insert(name.to_string(), Expr::number(value));
            }
        }

        let functions = Builtin::ALL.iter()
                                    .flat_map(|builtin| {
                                        builtin.aliases()
                                               .iter()
                                               .map(move |alias| ((*alias).to_string(), *builtin))
                                    })
                                    .collect();

        Self { constants,
               functions,
               variables: HashMap::new() }
    }

    /// The node a constant name stands for.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<&Expr> {
        self.constants.get(name)
    }

    /// The builtin a function name or alias refers to.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<Builtin> {
        self.functions.get(name).copied()
    }

    /// The current value of a variable, if it is bound.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<Decimal> {
        match self.variables.get(name) {
            Some(Expr::Number { value }) => Some(value.clone()),
            _ => None,
        }
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set_variable(&mut self, name: &str, value: Decimal) {
        trace!("binding {name} = {value}");
        self.variables.insert(name.to_string(), Expr::number(value));
    }

    /// Removes a binding and returns it, so it can be put back later with
    /// [`Context::restore_variable`].
    pub fn take_variable(&mut self, name: &str) -> Option<Expr> {
        self.variables.remove(name)
    }

    /// Restores a binding saved by [`Context::take_variable`]; `None` leaves
    /// the name unbound.
    pub fn restore_variable(&mut self, name: &str, saved: Option<Expr>) {
        match saved {
            Some(node) => {
                self.variables.insert(name.to_string(), node);
            },
            None => {
                self.variables.remove(name);
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches on the expression variant: literals, variables,
    /// unary and binary operations, and builtin calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression. Only assignment changes the context.
    ///
    /// # Example
    /// ```
    /// use decicalc::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, value::decimal::Decimal},
    /// };
    ///
    /// let mut ctx = Context::new();
    /// let v = ctx.eval(&Expr::number(Decimal::from(10))).unwrap();
    /// assert_eq!(v, Decimal::from(10));
    ///
    /// let missing = ctx.eval(&Expr::Variable { name: "x".to_string() });
    /// assert!(missing.is_err());
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Decimal> {
        match expr {
            Expr::Number { value } => Ok(value.clone()),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::UnaryOp { op, expr } => self.eval_unary_op(*op, expr),
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right),
            Expr::FunctionCall { name,
                                 function,
                                 arguments, } => function.apply(name, arguments, self),
        }
    }

    /// Looks up a variable.
    ///
    /// The stored node is evaluated again, so a binding always yields the
    /// value it was assigned.
    fn eval_variable(&mut self, name: &str) -> EvalResult<Decimal> {
        let node = self.variables
                       .get(name)
                       .cloned()
                       .ok_or_else(|| Error::UnknownVariable { name: name.to_string() })?;
        self.eval(&node)
    }
}
