pub mod cipher;
pub mod evaluator;
pub mod keychain;
#[cfg(test)]
mod vectors;

use std::io;

use rug::Integer;
use serde::{Deserialize, Serialize};

use crate::{
    oracle::OracleError,
    params::{Params, ParamsError},
    poly::RingError,
};

pub use self::{cipher::Cipher, evaluator::Evaluator, keychain::Keychain};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SchemeError {
    Oracle(OracleError),
    Ring(RingError),
    Params(ParamsError),
    Io(io::Error),
    Serialization(bincode::Error),
    #[display(fmt = "stored keys were generated for different parameters")]
    ParamsMismatch,
    #[display(fmt = "malformed {}", what)]
    MalformedKey { what: &'static str },
}

impl From<OracleError> for SchemeError {
    fn from(e: OracleError) -> Self {
        Self::Oracle(e)
    }
}

impl From<RingError> for SchemeError {
    fn from(e: RingError) -> Self {
        Self::Ring(e)
    }
}

/// Ternary secret `s`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SecretKey {
    pub s: Vec<Integer>,
}

/// `(b, a)` with `b = -(a s) + e`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PublicKey {
    pub b: Vec<Integer>,
    pub a: Vec<Integer>,
}

/// One relinearization level, encrypting `w^i s^2`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EvaluationKeyLevel {
    pub b: Vec<Integer>,
    pub a: Vec<Integer>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EvaluationKey {
    pub levels: Vec<EvaluationKeyLevel>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Ciphertext {
    pub c_0: Vec<Integer>,
    pub c_1: Vec<Integer>,
}

pub(crate) fn coefficient_modulus(params: &Params) -> Integer {
    Integer::from(params.coefficient_modulus())
}

pub(crate) fn decryption_modulus(params: &Params) -> Integer {
    Integer::from(params.decryption_modulus())
}

/// Scaling factor `floor(q / t)`.
pub fn delta(params: &Params) -> Integer {
    coefficient_modulus(params) / decryption_modulus(params)
}

/// Number of base-`w` digits used by relinearization: `floor(log_w(q)) + 1`.
pub fn coeff_exp_len(params: &Params) -> usize {
    let q = coefficient_modulus(params);
    let w = Integer::from(params.relinearization_base());
    let mut len = 1;
    let mut power = w.clone();
    while power <= q {
        len += 1;
        power *= &w;
    }
    len
}
