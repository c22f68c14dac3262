// shor_rsa_break - Library root
// Demonstrates how factoring the modulus breaks RSA: a tiny key pair, a
// pluggable factorization oracle chain, and the reconstruction pipeline

pub mod oracle;
pub mod pipeline;
pub mod rsa;

pub use oracle::{
    FactorPair, FactorResult, FactorizationOracle, OracleChain, QuantumFactorizer,
    TrialDivisionFactorizer,
};
pub use pipeline::{BreakReport, Pipeline, PipelineError, PipelineState};
pub use rsa::keys::DemoKeyConfig;
