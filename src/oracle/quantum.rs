// Quantum Factorizer
// Adapter over an external Shor implementation, tried through two
// integration surfaces (modern API, then the legacy path older releases
// shipped). Construction and runtime failures are typed values that move
// the walk to the next backend, never uncaught faults.

use log::debug;
use num_bigint::BigUint;
use thiserror::Error;

use super::{FactorPair, FactorResult, FactorizationOracle};

/// Failures from an external Shor backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("backend construction failed: {0}")]
    Construction(String),
    #[error("backend run failed: {0}")]
    Runtime(String),
}

/// A constructed instance of the external factorizer, ready to run
pub trait ShorHandle {
    /// Run the factorization, returning every candidate pair the backend
    /// proposes; candidates are validated by the caller, not here
    fn run_factor(&self, n: &BigUint) -> Result<Vec<(BigUint, BigUint)>, BackendError>;
}

/// One integration surface of the external factorization library
pub trait ShorBackend {
    fn name(&self) -> &'static str;

    /// Set up the external capability; fails when the library (or the API
    /// surface this backend targets) is not present in the environment
    fn construct(&self) -> Result<Box<dyn ShorHandle>, BackendError>;
}

/// A backend targeting an API surface that is not linked into this build;
/// construction always reports the capability as missing
struct UnlinkedBackend {
    name: &'static str,
}

impl ShorBackend for UnlinkedBackend {
    fn name(&self) -> &'static str {
        self.name
    }

    fn construct(&self) -> Result<Box<dyn ShorHandle>, BackendError> {
        Err(BackendError::Construction(format!(
            "no quantum runtime provides '{}' in this environment",
            self.name
        )))
    }
}

/// Oracle that delegates to the first external backend that can be
/// constructed and produces a valid non-trivial factor pair
pub struct QuantumFactorizer {
    backends: Vec<Box<dyn ShorBackend>>,
}

impl QuantumFactorizer {
    pub fn new(backends: Vec<Box<dyn ShorBackend>>) -> Self {
        Self { backends }
    }

    fn try_backend(&self, backend: &dyn ShorBackend, n: &BigUint) -> Option<FactorPair> {
        let handle = match backend.construct() {
            Ok(handle) => handle,
            Err(e) => {
                debug!("shor backend '{}': {}", backend.name(), e);
                return None;
            }
        };

        let candidates = match handle.run_factor(n) {
            Ok(candidates) => candidates,
            Err(e) => {
                debug!("shor backend '{}': {}", backend.name(), e);
                return None;
            }
        };

        // First valid non-trivial pair wins; the rest of the list is never
        // compared against it
        for (a, b) in candidates {
            match FactorPair::checked(a, b, n) {
                Some(pair) => return Some(pair),
                None => debug!("shor backend '{}': discarding trivial/invalid candidate", backend.name()),
            }
        }

        None
    }
}

impl FactorizationOracle for QuantumFactorizer {
    fn name(&self) -> &'static str {
        "shor"
    }

    fn factor(&self, n: &BigUint) -> FactorResult {
        for backend in &self.backends {
            if let Some(pair) = self.try_backend(backend.as_ref(), n) {
                return FactorResult::Found(pair);
            }
        }
        FactorResult::Unavailable
    }
}

impl Default for QuantumFactorizer {
    /// The two stock integration surfaces, modern first. Neither has a
    /// quantum runtime behind it in this build, so the stock factorizer
    /// reports Unavailable and the chain falls back to trial division.
    fn default() -> Self {
        Self::new(vec![
            Box::new(UnlinkedBackend { name: "shor-sampler" }),
            Box::new(UnlinkedBackend { name: "shor-legacy" }),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::arith::from_u64;

    struct StubBackend {
        name: &'static str,
        outcome: Result<Vec<(u64, u64)>, BackendError>,
    }

    impl ShorBackend for StubBackend {
        fn name(&self) -> &'static str {
            self.name
        }

        fn construct(&self) -> Result<Box<dyn ShorHandle>, BackendError> {
            match &self.outcome {
                Ok(candidates) => Ok(Box::new(StubHandle {
                    candidates: candidates.clone(),
                })),
                Err(e) => Err(e.clone()),
            }
        }
    }

    struct StubHandle {
        candidates: Vec<(u64, u64)>,
    }

    impl ShorHandle for StubHandle {
        fn run_factor(&self, _n: &BigUint) -> Result<Vec<(BigUint, BigUint)>, BackendError> {
            Ok(self
                .candidates
                .iter()
                .map(|(a, b)| (from_u64(*a), from_u64(*b)))
                .collect())
        }
    }

    struct FailingHandleBackend;

    impl ShorBackend for FailingHandleBackend {
        fn name(&self) -> &'static str {
            "failing-run"
        }

        fn construct(&self) -> Result<Box<dyn ShorHandle>, BackendError> {
            Ok(Box::new(FailingHandle))
        }
    }

    struct FailingHandle;

    impl ShorHandle for FailingHandle {
        fn run_factor(&self, _n: &BigUint) -> Result<Vec<(BigUint, BigUint)>, BackendError> {
            Err(BackendError::Runtime("circuit execution failed".to_string()))
        }
    }

    #[test]
    fn test_default_is_unavailable() {
        let result = QuantumFactorizer::default().factor(&from_u64(15));
        assert_eq!(result, FactorResult::Unavailable);
    }

    #[test]
    fn test_first_valid_candidate_wins() {
        // Trivial pairs are discarded, (3, 5) is accepted
        let factorizer = QuantumFactorizer::new(vec![Box::new(StubBackend {
            name: "stub",
            outcome: Ok(vec![(1, 15), (15, 1), (3, 5)]),
        })]);

        let expected = FactorPair::checked(from_u64(3), from_u64(5), &from_u64(15)).unwrap();
        assert_eq!(factorizer.factor(&from_u64(15)), FactorResult::Found(expected));
    }

    #[test]
    fn test_all_candidates_invalid_is_unavailable() {
        let factorizer = QuantumFactorizer::new(vec![Box::new(StubBackend {
            name: "stub",
            outcome: Ok(vec![(1, 15), (2, 6)]),
        })]);

        assert_eq!(factorizer.factor(&from_u64(15)), FactorResult::Unavailable);
    }

    #[test]
    fn test_construction_failure_falls_through_to_next_backend() {
        let factorizer = QuantumFactorizer::new(vec![
            Box::new(StubBackend {
                name: "modern",
                outcome: Err(BackendError::Construction("not installed".to_string())),
            }),
            Box::new(StubBackend {
                name: "legacy",
                outcome: Ok(vec![(3, 5)]),
            }),
        ]);

        let expected = FactorPair::checked(from_u64(3), from_u64(5), &from_u64(15)).unwrap();
        assert_eq!(factorizer.factor(&from_u64(15)), FactorResult::Found(expected));
    }

    #[test]
    fn test_runtime_failure_falls_through_to_next_backend() {
        let factorizer = QuantumFactorizer::new(vec![
            Box::new(FailingHandleBackend),
            Box::new(StubBackend {
                name: "legacy",
                outcome: Ok(vec![(3, 5)]),
            }),
        ]);

        let expected = FactorPair::checked(from_u64(3), from_u64(5), &from_u64(15)).unwrap();
        assert_eq!(factorizer.factor(&from_u64(15)), FactorResult::Found(expected));
    }

    #[test]
    fn test_empty_candidate_list_is_unavailable() {
        let factorizer = QuantumFactorizer::new(vec![Box::new(StubBackend {
            name: "stub",
            outcome: Ok(vec![]),
        })]);

        assert_eq!(factorizer.factor(&from_u64(15)), FactorResult::Unavailable);
    }
}
