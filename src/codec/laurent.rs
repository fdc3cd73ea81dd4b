use rug::{ops::Pow, Integer, Rational};

use crate::{
    params::Params,
    util::{expand, numerator},
};

use super::{check_code_len, nearest_f64, Codec, CodecError};

/// Balanced base-`b` digits of `r`, where coefficient `i` carries the power `b^(i - n)`.
#[derive(Clone, Debug)]
pub struct LaurentCodec {
    base: Integer,
    degree: usize,
    size: usize,
}

impl LaurentCodec {
    pub fn new(params: &Params) -> Self {
        Self {
            base: Integer::from(params.expansion_base()),
            degree: params.degree(),
            size: params.size(),
        }
    }
}

impl Codec for LaurentCodec {
    fn enc(&self, r: f64) -> Result<Vec<Integer>, CodecError> {
        let n = numerator(r, &self.base, self.degree as u32)?;
        Ok(expand(&n, self.size, &self.base))
    }

    fn dec(&self, code: &[Integer]) -> Result<f64, CodecError> {
        check_code_len(code, self.size)?;
        // Horner over the digits gives the value scaled by b^n.
        let mut scaled = Integer::new();
        for digit in code.iter().rev() {
            scaled *= &self.base;
            scaled += digit;
        }
        let value = Rational::from((scaled, self.base.clone().pow(self.degree as u32)));
        Ok(nearest_f64(&value))
    }
}
