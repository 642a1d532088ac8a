use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::{
    error::Error,
    interpreter::{
        evaluator::{core::EvalResult, utils::integer_operand},
        value::decimal::Decimal,
    },
    util::num::bigint_to_u64_checked,
};

/// Bases for the Miller-Rabin test. Testing with the first twelve primes is
/// deterministic for every `n < 3.3 * 10^24`.
const WITNESSES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// `factorial(n)` and postfix `n!` for a non-negative integer `n`.
///
/// # Errors
/// `Error::Domain` for a fractional or negative operand.
///
/// # Example
/// ```
/// use decicalc::interpreter::{evaluator::function::integer::factorial, value::decimal::Decimal};
///
/// assert_eq!(factorial(&[Decimal::from(5)]).unwrap(), Decimal::from(120));
/// assert_eq!(factorial(&[Decimal::from(0)]).unwrap(), Decimal::from(1));
/// assert!(factorial(&[Decimal::from(-1)]).is_err());
/// ```
pub fn factorial(args: &[Decimal]) -> EvalResult<Decimal> {
    let n = integer_operand("factorial", &args[0])?;
    if n.is_negative() {
        return Err(Error::domain(format!("factorial: {n} is negative")));
    }
    let n = bigint_to_u64_checked(&n, "factorial operand")?;
    let product = (2..=n).fold(BigInt::one(), |acc, k| acc * k);
    Ok(Decimal::from(product))
}

/// `is_prime(n)`: `1` if `|n|` is prime, otherwise `0`.
///
/// # Errors
/// `Error::Domain` for a fractional operand.
///
/// # Example
/// ```
/// use decicalc::interpreter::{evaluator::function::integer::is_prime, value::decimal::Decimal};
///
/// assert_eq!(is_prime(&[Decimal::from(-5)]).unwrap(), Decimal::from(1));
/// assert_eq!(is_prime(&[Decimal::from(1)]).unwrap(), Decimal::from(0));
/// ```
pub fn is_prime(args: &[Decimal]) -> EvalResult<Decimal> {
    let n = integer_operand("is_prime", &args[0])?.abs();
    Ok(Decimal::from(miller_rabin(&n)))
}

/// Primality of a non-negative integer.
fn miller_rabin(n: &BigInt) -> bool {
    if n < &BigInt::from(2u8) {
        return false;
    }
    for witness in WITNESSES {
        let witness = BigInt::from(witness);
        if n == &witness {
            return true;
        }
        if (n % &witness).is_zero() {
            return false;
        }
    }

    let n_minus_one = n - 1u8;
    let rounds = n_minus_one.trailing_zeros().unwrap_or(0);
    let odd = &n_minus_one >> rounds;

    'witness: for witness in WITNESSES {
        let mut x = BigInt::from(witness).modpow(&odd, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..rounds {
            x = (&x * &x).mod_floor(n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
