// Factorization Oracle - Main module file
// Polymorphic "give me a factor pair for n" capability with an ordered
// fallback chain: quantum route first, classical trial division second

pub mod quantum;
pub mod trial;

use log::debug;
use num_bigint::BigUint;
use num_traits::One;

pub use quantum::{BackendError, QuantumFactorizer, ShorBackend, ShorHandle};
pub use trial::TrialDivisionFactorizer;

/// A validated non-trivial decomposition of a modulus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorPair {
    pub a: BigUint,
    pub b: BigUint,
}

impl FactorPair {
    /// Accept (a, b) only if it is a non-trivial decomposition of n:
    /// a > 1, b > 1, a * b == n
    pub fn checked(a: BigUint, b: BigUint, n: &BigUint) -> Option<Self> {
        if a <= BigUint::one() || b <= BigUint::one() || &(&a * &b) != n {
            return None;
        }
        Some(Self { a, b })
    }

    pub fn product(&self) -> BigUint {
        &self.a * &self.b
    }
}

/// Outcome of asking an oracle to factor n
/// "Could not factor" is an ordinary outcome, not an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactorResult {
    Found(FactorPair),
    Unavailable,
}

/// A strategy that may produce a factor pair for a composite modulus
pub trait FactorizationOracle {
    /// Short name reported as the factorization source
    fn name(&self) -> &'static str;

    /// Attempt to factor n; must not panic on ordinary failure
    fn factor(&self, n: &BigUint) -> FactorResult;
}

/// The factor pair together with the oracle that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOutcome {
    pub source: &'static str,
    pub factors: FactorPair,
}

/// Ordered list of oracles, walked until one returns Found
pub struct OracleChain {
    oracles: Vec<Box<dyn FactorizationOracle>>,
}

impl OracleChain {
    pub fn new(oracles: Vec<Box<dyn FactorizationOracle>>) -> Self {
        Self { oracles }
    }

    /// Return the first Found result in priority order, or Unavailable if
    /// every oracle comes up empty
    pub fn factor(&self, n: &BigUint) -> Option<ChainOutcome> {
        for oracle in &self.oracles {
            match oracle.factor(n) {
                FactorResult::Found(factors) => {
                    debug!("oracle '{}' factored {}: ({}, {})", oracle.name(), n, factors.a, factors.b);
                    return Some(ChainOutcome {
                        source: oracle.name(),
                        factors,
                    });
                }
                FactorResult::Unavailable => {
                    debug!("oracle '{}' unavailable for {}, trying next", oracle.name(), n);
                }
            }
        }
        None
    }
}

impl Default for OracleChain {
    /// Prefer the quantum route, fall back to classical trial division
    fn default() -> Self {
        Self::new(vec![
            Box::new(QuantumFactorizer::default()),
            Box::new(TrialDivisionFactorizer),
        ])
    }
}
