// RSA Modular Arithmetic
// Wrapper around num-bigint for the operations the break needs

use num_bigint::{BigInt, BigUint};
use num_integer::{Integer, Roots};
use num_traits::{One, Signed, Zero};
use thiserror::Error;

/// Errors from the arithmetic helpers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("no modular inverse: gcd({a}, {n}) != 1")]
    NoInverse { a: BigUint, n: BigUint },
}

/// Create a big integer from u64
pub fn from_u64(n: u64) -> BigUint {
    BigUint::from(n)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a.clone(), BigInt::one(), BigInt::zero());
    }

    let (gcd, x1, y1) = extended_gcd(b, &(a % b));
    let x = y1.clone();
    let y = x1 - (a / b) * &y1;

    (gcd, x, y)
}

/// Compute modular inverse: a^(-1) mod n, normalized into [0, n)
/// Fails when gcd(a, n) != 1
pub fn mod_inverse(a: &BigUint, n: &BigUint) -> Result<BigUint, ArithmeticError> {
    let a_signed = BigInt::from(a.clone());
    let n_signed = BigInt::from(n.clone());

    let (gcd, x, _) = extended_gcd(&a_signed, &n_signed);

    if !gcd.is_one() {
        return Err(ArithmeticError::NoInverse {
            a: a.clone(),
            n: n.clone(),
        });
    }

    let mut result = x % &n_signed;
    if result.is_negative() {
        result += &n_signed;
    }

    // Non-negative and below n at this point
    Ok(result.magnitude().clone())
}

/// Greatest common divisor
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Deterministic primality test by trial division up to sqrt(n)
/// Sufficient for the demo-scale numbers this crate works with
pub fn is_prime(n: &BigUint) -> bool {
    if n < &BigUint::from(2u8) {
        return false;
    }

    let bound = n.sqrt();
    let mut x = BigUint::from(2u8);
    while x <= bound {
        if (n % &x).is_zero() {
            return false;
        }
        x += 1u8;
    }
    true
}
