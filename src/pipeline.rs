// Break Pipeline
// Drives the full demonstration: encrypt with the public key, factor the
// modulus through the oracle chain, rebuild the private key from the
// discovered pair, decrypt, verify against the original message

use log::{debug, warn};
use num_bigint::BigUint;
use thiserror::Error;

use crate::oracle::{FactorPair, OracleChain};
use crate::rsa::keys::{complete_private_key, DemoKeyConfig, KeyError, RsaPublicKey};

/// Fatal pipeline failures; anything here leaves the pipeline Aborted
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no oracle in the chain could factor n={0}")]
    OracleUnavailable(BigUint),
    #[error(transparent)]
    Key(#[from] KeyError),
}

/// Progress of a run; terminal states are Verified and Aborted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Initialized,
    Encrypted,
    Factoring,
    Reconstructed,
    Decrypted,
    Verified,
    Aborted,
}

/// Everything the run made observable, for the caller to present
#[derive(Debug, Clone)]
pub struct BreakReport {
    pub public_key: RsaPublicKey,
    pub message: BigUint,
    pub ciphertext: BigUint,
    /// Which oracle produced the factorization
    pub source: &'static str,
    pub factors: FactorPair,
    /// The reconstructed private exponent
    pub d: BigUint,
    pub recovered: BigUint,
    /// Whether the recovered plaintext matches the original message; a
    /// mismatch is reported, not raised
    pub verified: bool,
}

pub struct Pipeline {
    config: DemoKeyConfig,
    chain: OracleChain,
    state: PipelineState,
}

impl Pipeline {
    pub fn new(config: DemoKeyConfig, chain: OracleChain) -> Self {
        Self {
            config,
            chain,
            state: PipelineState::Initialized,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Run the demonstration to completion or abort
    pub fn run(&mut self) -> Result<BreakReport, PipelineError> {
        match self.run_inner() {
            Ok(report) => Ok(report),
            Err(e) => {
                self.state = PipelineState::Aborted;
                Err(e)
            }
        }
    }

    fn run_inner(&mut self) -> Result<BreakReport, PipelineError> {
        let public_key = self.config.public_key();
        let message = self.config.message.clone();

        let ciphertext = public_key.encrypt(&message)?;
        self.state = PipelineState::Encrypted;
        debug!("encrypted {} -> {} under (n={}, e={})", message, ciphertext, public_key.n, public_key.e);

        self.state = PipelineState::Factoring;
        let outcome = self
            .chain
            .factor(&public_key.n)
            .ok_or_else(|| PipelineError::OracleUnavailable(public_key.n.clone()))?;

        let private_key = complete_private_key(&public_key, &outcome.factors)?;
        self.state = PipelineState::Reconstructed;

        let recovered = private_key.decrypt(&ciphertext);
        self.state = PipelineState::Decrypted;

        let verified = recovered == message;
        if !verified {
            warn!("recovered plaintext {} does not match original {}", recovered, message);
        }
        self.state = PipelineState::Verified;

        Ok(BreakReport {
            public_key,
            message,
            ciphertext,
            source: outcome.source,
            factors: outcome.factors,
            d: private_key.d,
            recovered,
            verified,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(DemoKeyConfig::default(), OracleChain::default())
    }
}
