// Trial Division Factorizer
// Deterministic classical fallback: scan divisors up to sqrt(n)

use num_bigint::BigUint;
use num_integer::Roots;
use num_traits::{One, Zero};

use super::{FactorPair, FactorResult, FactorizationOracle};

/// Brute-force factorization by testing every candidate divisor from 2 up
/// to and including floor(sqrt(n)); guaranteed to succeed for composite n
pub struct TrialDivisionFactorizer;

impl FactorizationOracle for TrialDivisionFactorizer {
    fn name(&self) -> &'static str {
        "trial-division"
    }

    fn factor(&self, n: &BigUint) -> FactorResult {
        if n <= &BigUint::one() {
            return FactorResult::Unavailable;
        }

        let bound = n.sqrt();
        let mut x = BigUint::from(2u8);

        while x <= bound {
            if (n % &x).is_zero() {
                let other = n / &x;
                // x >= 2 and x <= sqrt(n) imply other >= 2, so the pair
                // always passes validation
                if let Some(pair) = FactorPair::checked(x, other, n) {
                    return FactorResult::Found(pair);
                }
                return FactorResult::Unavailable;
            }
            x += 1u8;
        }

        // No divisor in range: n is prime
        FactorResult::Unavailable
    }
}
