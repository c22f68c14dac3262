// RSA Key Material
// Public/private key components for the didactic key pair, plus the
// attacker-side private-key reconstruction from a discovered factor pair

use num_bigint::BigUint;
use num_traits::One;
use thiserror::Error;

use super::arith::{from_u64, gcd, is_prime, mod_inverse, mod_pow};
use crate::oracle::FactorPair;

/// Errors from key construction and reconstruction
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid key configuration: {0}")]
    InvalidConfig(String),
    #[error("message must be in [0, n), got {message} for n={n}")]
    MessageOutOfRange { message: BigUint, n: BigUint },
    #[error("key reconstruction failed: {0}")]
    Reconstruction(String),
}

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: BigUint, // Modulus
    pub e: BigUint, // Public exponent
}

/// RSA Private Key
/// Only ever built from a factor pair; holds no CRT parameters because the
/// reconstructed key is used for a single decryption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub n: BigUint, // Modulus (same as public)
    pub d: BigUint, // Private exponent
}

impl RsaPublicKey {
    /// Encrypt a message using this public key: c = m^e mod n
    /// No padding scheme is modeled, so the message must already fit the modulus
    pub fn encrypt(&self, message: &BigUint) -> Result<BigUint, KeyError> {
        if message >= &self.n {
            return Err(KeyError::MessageOutOfRange {
                message: message.clone(),
                n: self.n.clone(),
            });
        }
        Ok(mod_pow(message, &self.e, &self.n))
    }
}

impl RsaPrivateKey {
    /// Decrypt a ciphertext using this private key: m = c^d mod n
    pub fn decrypt(&self, ciphertext: &BigUint) -> BigUint {
        mod_pow(ciphertext, &self.d, &self.n)
    }
}

/// Fixed parameters for the didactic key pair
/// The generator knows p, q and the true phi; the oracle-consuming side of
/// the pipeline only ever sees the public key derived here
#[derive(Debug, Clone)]
pub struct DemoKeyConfig {
    pub p: BigUint,
    pub q: BigUint,
    pub e: BigUint,
    pub message: BigUint,
}

impl DemoKeyConfig {
    pub fn new(p: u64, q: u64, e: u64, message: u64) -> Result<Self, KeyError> {
        let config = Self {
            p: from_u64(p),
            q: from_u64(q),
            e: from_u64(e),
            message: from_u64(message),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), KeyError> {
        if self.p == self.q {
            return Err(KeyError::InvalidConfig("p and q must differ".to_string()));
        }
        if self.p <= BigUint::one() || self.q <= BigUint::one() {
            return Err(KeyError::InvalidConfig(
                "p and q must be greater than 1".to_string(),
            ));
        }
        if !is_prime(&self.p) || !is_prime(&self.q) {
            return Err(KeyError::InvalidConfig(format!(
                "p={} and q={} must both be prime",
                self.p, self.q
            )));
        }
        let phi = self.phi();
        if !gcd(&self.e, &phi).is_one() {
            return Err(KeyError::InvalidConfig(format!(
                "e={} is not coprime with phi(n)={}",
                self.e, phi
            )));
        }
        if self.message >= self.modulus() {
            return Err(KeyError::InvalidConfig(format!(
                "message {} does not fit modulus {}",
                self.message,
                self.modulus()
            )));
        }
        Ok(())
    }

    pub fn modulus(&self) -> BigUint {
        &self.p * &self.q
    }

    fn phi(&self) -> BigUint {
        (&self.p - 1u8) * (&self.q - 1u8)
    }

    pub fn public_key(&self) -> RsaPublicKey {
        RsaPublicKey {
            n: self.modulus(),
            e: self.e.clone(),
        }
    }
}

impl Default for DemoKeyConfig {
    /// The canonical tiny example: p=3, q=5, n=15, phi=8, e=3, m=7
    fn default() -> Self {
        Self::new(3, 5, 3, 7).expect("canonical demo parameters are valid")
    }
}

/// Rebuild the private key from a factor pair discovered by the oracle
/// Recomputes phi from the discovered factors only, never from the
/// generator's secret primes
pub fn complete_private_key(
    public_key: &RsaPublicKey,
    factors: &FactorPair,
) -> Result<RsaPrivateKey, KeyError> {
    if factors.product() != public_key.n {
        return Err(KeyError::Reconstruction(format!(
            "factor pair ({}, {}) does not multiply to n={}",
            factors.a, factors.b, public_key.n
        )));
    }

    let phi = (&factors.a - 1u8) * (&factors.b - 1u8);
    let d = mod_inverse(&public_key.e, &phi)
        .map_err(|e| KeyError::Reconstruction(e.to_string()))?;

    Ok(RsaPrivateKey {
        n: public_key.n.clone(),
        d,
    })
}
