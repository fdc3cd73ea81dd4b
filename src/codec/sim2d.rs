use rug::{ops::Pow, Float, Integer, Rational};

use crate::{
    params::Params,
    util::{expand, numerator, F64_PRECISION},
};

use super::{check_code_len, nearest_f64, Codec, CodecError};

/// Encodes `r` over the powers `b^min_pow ..= b^max_pow` of a BFV ring of degree `n`, with
/// `min_pow = -n/2` and `max_pow = n/2 - 1`.
///
/// The non-negative powers occupy the lower half of the code. The negative powers are negated
/// into the upper half, since `X^-k = -X^(n-k)` in the negacyclic ring.
#[derive(Clone, Debug)]
pub struct Sim2dCodec {
    base: Integer,
    degree: usize,
    min_pow: i64,
    max_pow: i64,
    powers: Vec<Rational>,
    /// `b^-min_pow`, the denominator of the lowest power.
    scale: Integer,
    /// `scale` as an `f64`, or `None` when it overflows.
    rounding_scale: Option<f64>,
}

impl Sim2dCodec {
    pub fn new(params: &Params) -> Result<Self, CodecError> {
        let degree = params.degree();
        let min = -(degree as i64 / 2);
        let max = degree as i64 / 2 - 1;
        if min >= max {
            return Err(CodecError::MinPowNotBelowMaxPow { min, max });
        }
        if min >= 0 {
            return Err(CodecError::MinPowNotNegative { min });
        }
        if max <= 0 {
            return Err(CodecError::MaxPowNotPositive { max });
        }

        let base = Integer::from(params.expansion_base());
        let powers = (min..=max)
            .map(|p| {
                let power = base.clone().pow(p.unsigned_abs() as u32);
                if p < 0 {
                    Rational::from((Integer::from(1), power))
                } else {
                    Rational::from(power)
                }
            })
            .collect();
        let scale = base.clone().pow(min.unsigned_abs() as u32);
        let rounding_scale = Some(Float::with_val(F64_PRECISION, &scale).to_f64())
            .filter(|s| s.is_finite());
        Ok(Self {
            base,
            degree,
            min_pow: min,
            max_pow: max,
            powers,
            scale,
            rounding_scale,
        })
    }

    pub fn min_pow(&self) -> i64 {
        self.min_pow
    }

    pub fn max_pow(&self) -> i64 {
        self.max_pow
    }
}

impl Codec for Sim2dCodec {
    fn enc(&self, r: f64) -> Result<Vec<Integer>, CodecError> {
        let half = self.degree / 2;
        let n = numerator(r, &self.base, half as u32)?;
        Ok(inflate(expand(&n, self.degree, &self.base), half))
    }

    fn dec(&self, code: &[Integer]) -> Result<f64, CodecError> {
        check_code_len(code, self.degree)?;
        let negative = self.min_pow.unsigned_abs() as usize;
        let positive = self.max_pow as usize + 1;
        let deflated = code[code.len() - negative..]
            .iter()
            .map(|c| Integer::from(-c))
            .chain(code[..positive].iter().cloned());

        let mut value = Rational::new();
        for (digit, power) in deflated.zip(&self.powers) {
            value += Rational::from(digit) * power;
        }

        let r = nearest_f64(&value);
        let exact = Rational::from_f64(r).map_or(false, |x| x == value);
        if exact {
            return Ok(r);
        }
        match self.rounding_scale {
            Some(scale) => Ok((scale * r).ceil() / scale),
            // The scale overflows an f64, so round up on the exact value instead.
            None => {
                let ceiled = (value * &self.scale).ceil();
                Ok(nearest_f64(&(ceiled / &self.scale)))
            }
        }
    }
}

/// Moves the digits of the negative powers behind the others, negated.
fn inflate(mut digits: Vec<Integer>, half: usize) -> Vec<Integer> {
    let mut code = digits.split_off(half);
    code.extend(digits.into_iter().map(|d| -d));
    code
}
