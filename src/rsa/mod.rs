// RSA Module - Main module file
// Exports the arithmetic helpers and key material

pub mod arith;
pub mod keys;

pub use arith::{extended_gcd, is_prime, mod_inverse, mod_pow, ArithmeticError};
pub use keys::{
    complete_private_key, DemoKeyConfig, KeyError, RsaPrivateKey, RsaPublicKey,
};
