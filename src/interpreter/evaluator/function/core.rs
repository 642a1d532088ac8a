use std::fmt;

use log::trace;

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{bitwise, integer, math, random, range},
        },
        value::decimal::Decimal,
    },
};

/// Handler for builtins that take evaluated arguments.
type EagerFn = fn(&[Decimal]) -> EvalResult<Decimal>;

/// Handler for builtins that evaluate their own argument expressions.
type LazyFn = fn(&mut Context, &[Expr]) -> EvalResult<Decimal>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `AtLeast(n)` means `n` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::OneOf(counts) => {
                let counts = counts.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{}", counts.join(" or "))
            },
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// How a builtin receives its arguments.
#[derive(Clone, Copy)]
enum Implementation {
    /// Arguments are evaluated left to right before the call.
    Eager(EagerFn),
    /// The builtin gets the expressions and the context.
    Lazy(LazyFn),
}

/// Defines the builtin functions as a closed enum.
///
/// Each entry provides:
/// - the variant,
/// - the names it can be called by, canonical name first,
/// - an arity specification,
/// - the implementation.
///
/// The macro produces the `Builtin` enum, `Builtin::ALL`, and the lookup
/// methods `aliases`, `arity` and `implementation`.
macro_rules! builtin_functions {
    (
        $(
            $variant:ident => {
                names: [$($name:literal),+ $(,)?],
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A builtin function, identified independently of the name it was
        /// called by.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Builtin {
            $(
                #[doc = concat!($("`", $name, "` "),+)]
                $variant,
            )*
        }

        impl Builtin {
            /// Every builtin, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// The names this builtin can be called by.
            #[must_use]
            pub const fn aliases(self) -> &'static [&'static str] {
                match self {
                    $(Self::$variant => &[$($name),+],)*
                }
            }

            /// The number of arguments the builtin accepts.
            #[must_use]
            pub const fn arity(self) -> Arity {
                match self {
                    $(Self::$variant => $arity,)*
                }
            }

            const fn implementation(self) -> Implementation {
                match self {
                    $(Self::$variant => $func,)*
                }
            }
        }
    };
}

builtin_functions! {
    Abs       => { names: ["abs"],                 arity: Arity::Exact(1),        func: Implementation::Eager(math::abs) },
    Acos      => { names: ["acos"],                arity: Arity::Exact(1),        func: Implementation::Eager(math::acos) },
    Asin      => { names: ["asin"],                arity: Arity::Exact(1),        func: Implementation::Eager(math::asin) },
    Atan      => { names: ["atan"],                arity: Arity::Exact(1),        func: Implementation::Eager(math::atan) },
    Atan2     => { names: ["atan2"],               arity: Arity::Exact(2),        func: Implementation::Eager(math::atan2) },
    BitAnd    => { names: ["BitAnd"],              arity: Arity::AtLeast(2),      func: Implementation::Eager(bitwise::and) },
    BitNot    => { names: ["BitNot"],              arity: Arity::Exact(1),        func: Implementation::Eager(bitwise::not) },
    BitOr     => { names: ["BitOr"],               arity: Arity::AtLeast(2),      func: Implementation::Eager(bitwise::or) },
    BitXor    => { names: ["BitXor"],              arity: Arity::AtLeast(2),      func: Implementation::Eager(bitwise::xor) },
    Cbrt      => { names: ["cbrt"],                arity: Arity::Exact(1),        func: Implementation::Eager(math::cbrt) },
    Ceil      => { names: ["ceil", "ceiling"],     arity: Arity::Exact(1),        func: Implementation::Eager(math::ceil) },
    Cos       => { names: ["cos"],                 arity: Arity::Exact(1),        func: Implementation::Eager(math::cos) },
    Cosh      => { names: ["cosh"],                arity: Arity::Exact(1),        func: Implementation::Eager(math::cosh) },
    Exp       => { names: ["exp"],                 arity: Arity::Exact(1),        func: Implementation::Eager(math::exp) },
    Factorial => { names: ["factorial"],           arity: Arity::Exact(1),        func: Implementation::Eager(integer::factorial) },
    Floor     => { names: ["floor"],               arity: Arity::Exact(1),        func: Implementation::Eager(math::floor) },
    Hypot     => { names: ["hypot"],               arity: Arity::Exact(2),        func: Implementation::Eager(math::hypot) },
    IsPrime   => { names: ["is_prime"],            arity: Arity::Exact(1),        func: Implementation::Eager(integer::is_prime) },
    Log       => { names: ["log"],                 arity: Arity::OneOf(&[1, 2]),  func: Implementation::Eager(math::log) },
    Log10     => { names: ["log10"],               arity: Arity::Exact(1),        func: Implementation::Eager(math::log10) },
    Log2      => { names: ["log2"],                arity: Arity::Exact(1),        func: Implementation::Eager(math::log2) },
    LogE      => { names: ["logE"],                arity: Arity::Exact(1),        func: Implementation::Eager(math::ln) },
    Random    => { names: ["rand", "random"],      arity: Arity::Exact(0),        func: Implementation::Eager(random::random) },
    Round     => { names: ["round"],               arity: Arity::Exact(1),        func: Implementation::Eager(math::round) },
    Sin       => { names: ["sin"],                 arity: Arity::Exact(1),        func: Implementation::Eager(math::sin) },
    Sinh      => { names: ["sinh"],                arity: Arity::Exact(1),        func: Implementation::Eager(math::sinh) },
    Sqrt      => { names: ["sqrt"],                arity: Arity::Exact(1),        func: Implementation::Eager(math::sqrt) },
    Tan       => { names: ["tan"],                 arity: Arity::Exact(1),        func: Implementation::Eager(math::tan) },
    Tanh      => { names: ["tanh"],                arity: Arity::Exact(1),        func: Implementation::Eager(math::tanh) },
    Sum       => { names: ["sum", "Σ", "∑"],       arity: Arity::Exact(3),        func: Implementation::Lazy(range::sum) },
    Product   => { names: ["product", "Π", "∏"],   arity: Arity::Exact(3),        func: Implementation::Lazy(range::product) },
}

impl Builtin {
    /// The canonical name, used when the parser builds a call itself (for
    /// `&`, `|`, `~` and `√`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.aliases() {
            [first, ..] => *first,
            [] => "",
        }
    }

    /// Applies the builtin to its argument expressions.
    ///
    /// The arity is checked before anything is evaluated. Eager builtins get
    /// their arguments evaluated left to right; `sum` and `product` get the
    /// expressions themselves.
    ///
    /// # Parameters
    /// - `called_as`: The name used in the call, for error messages.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `context`: The session context.
    ///
    /// # Returns
    /// The function result or an error if arity or evaluation fails.
    ///
    /// # Example
    /// ```
    /// use decicalc::{
    ///     ast::Expr,
    ///     interpreter::{
    ///         evaluator::{core::Context, function::core::Builtin},
    ///         value::decimal::Decimal,
    ///     },
    /// };
    ///
    /// let mut ctx = Context::new();
    /// let args = [Expr::number(Decimal::from(3)), Expr::number(Decimal::from(4))];
    /// assert_eq!(Builtin::Hypot.apply("hypot", &args, &mut ctx).unwrap(), Decimal::from(5));
    ///
    /// let error = Builtin::Sqrt.apply("sqrt", &args, &mut ctx).unwrap_err();
    /// assert_eq!(error.to_string(), "'sqrt' expects 1 argument(s), got 2");
    /// ```
    pub fn apply(self,
                 called_as: &str,
                 arguments: &[Expr],
                 context: &mut Context)
                 -> EvalResult<Decimal> {
        let arity = self.arity();
        if !arity.check(arguments.len()) {
            return Err(Error::ArgumentCountMismatch { function: called_as.to_string(),
                                                      expected: arity.to_string(),
                                                      found:    arguments.len(), });
        }
        trace!("calling {called_as} with {} argument(s)", arguments.len());

        match self.implementation() {
            Implementation::Eager(func) => {
                let values = arguments.iter()
                                      .map(|argument| context.eval(argument))
                                      .collect::<EvalResult<Vec<_>>>()?;
                func(&values)
            },
            Implementation::Lazy(func) => func(context, arguments),
        }
    }
}
