//! Conversions between real numbers and plaintext coefficient vectors.
//!
//! [`laurent::LaurentCodec`] pairs with HERatio, whose ring has slots for negative powers of the
//! expansion base. [`sim2d::Sim2dCodec`] pairs with BFV and folds the negative powers into the
//! upper half of the ring.

pub mod laurent;
pub mod sim2d;

use rug::{Float, Integer, Rational};

use crate::{
    params::{Params, Scheme},
    util::F64_PRECISION,
};

pub use self::{laurent::LaurentCodec, sim2d::Sim2dCodec};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum CodecError {
    #[display(fmt = "lowest power {} is not below highest power {}", min, max)]
    MinPowNotBelowMaxPow { min: i64, max: i64 },
    #[display(fmt = "lowest power {} is not negative", min)]
    MinPowNotNegative { min: i64 },
    #[display(fmt = "highest power {} is not positive", max)]
    MaxPowNotPositive { max: i64 },
    #[display(fmt = "cannot encode non-finite value {}", value)]
    NotFinite { value: f64 },
    #[display(fmt = "expected a code of length {}, found {}", expected, found)]
    LengthMismatch { expected: usize, found: usize },
}

/// Maps real numbers to plaintext coefficient vectors of a fixed ring and back.
pub trait Codec {
    fn enc(&self, r: f64) -> Result<Vec<Integer>, CodecError>;

    fn dec(&self, code: &[Integer]) -> Result<f64, CodecError>;
}

/// The codec that pairs with the scheme of `params`.
pub fn for_params(params: &Params) -> Result<Box<dyn Codec>, CodecError> {
    Ok(match params.scheme() {
        Scheme::HERatio => Box::new(LaurentCodec::new(params)),
        Scheme::Bfv => Box::new(Sim2dCodec::new(params)?),
    })
}

pub(crate) fn check_code_len<T>(code: &[T], expected: usize) -> Result<(), CodecError> {
    if code.len() != expected {
        return Err(CodecError::LengthMismatch {
            expected,
            found: code.len(),
        });
    }
    Ok(())
}

/// Nearest `f64` to an exact rational.
pub(crate) fn nearest_f64(r: &Rational) -> f64 {
    Float::with_val(F64_PRECISION, r).to_f64()
}
