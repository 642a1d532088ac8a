use std::fmt;

use crate::interpreter::{evaluator::function::core::Builtin, value::decimal::Decimal};

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node evaluates to a [`Decimal`] against an evaluation context. The
/// tree is immutable once built; assignment changes the context, not the
/// tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, or a constant substituted at parse time.
    Number {
        /// The literal value.
        value: Decimal,
    },
    /// Reference to a variable by name, resolved when evaluated.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A unary operation.
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (addition, comparison, assignment, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Application of a builtin function (e.g. `sin(x)`).
    FunctionCall {
        /// The name the function was called by, which may be an alias.
        name:      String,
        /// The resolved builtin.
        function:  Builtin,
        /// Arguments to the function, unevaluated.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Wraps a value in a literal node.
    #[must_use]
    pub const fn number(value: Decimal) -> Self {
        Self::Number { value }
    }

    /// Builds a call node for `function` under its canonical name.
    #[must_use]
    pub fn call(function: Builtin, arguments: Vec<Self>) -> Self {
        Self::FunctionCall { name: function.name().to_string(),
                             function,
                             arguments }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Prefix `!`: `1` if the operand is zero, otherwise `0`.
    Not,
    /// Postfix `!`.
    Factorial,
}

/// Binary operators, from lowest to highest precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `=`
    Assign,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, Assign, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual,
            Pow, ShiftLeft, ShiftRight, Sub,
        };
        let operator = match self {
            Assign => "=",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// Renders the tree fully parenthesized, so the shape of the parse is
/// visible: `1+2*3` renders as `(1 + (2 * 3))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value } => write!(f, "{value}"),
            Self::Variable { name } => write!(f, "{name}"),
            Self::UnaryOp { op: UnaryOperator::Not, expr } => write!(f, "(!{expr})"),
            Self::UnaryOp { op: UnaryOperator::Factorial, expr } => write!(f, "({expr}!)"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}
