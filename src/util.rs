use std::fmt::Debug;

use log::{error, info};
use rug::{ops::Pow, Float, Integer};

use crate::{codec::CodecError, poly::sym_mod};

/// Binary precision of an `f64` significand.
pub const F64_PRECISION: u32 = 53;

pub fn log_error<T>(name: &str, res: &Result<T, impl Debug>) {
    if let Err(e) = res {
        error!("{} failed with error: {:?}", name, e)
    } else {
        info!("{} succeeded", name);
    }
}

/// Balanced base-`base` expansion of `m` into `len` digits.
///
/// Digit `i` is `sym_mod(floor(v / base^i), base)`. Whenever a digit is negative, `base^(i+1)`
/// is added to the running value so that the higher digits absorb the borrow.
pub fn expand(m: &Integer, len: usize, base: &Integer) -> Vec<Integer> {
    let mut v = m.clone();
    let mut power = Integer::from(1);
    let mut digits = Vec::with_capacity(len);
    for _ in 0..len {
        let (quotient, _) = v.clone().div_rem_floor(power.clone());
        let digit = sym_mod(&quotient, base);
        let next = Integer::from(&power * base);
        if digit < 0 {
            v += &next;
        }
        digits.push(digit);
        power = next;
    }
    digits
}

/// `r * base^exponent` rounded to an `f64`-sized significand, then truncated towards zero.
pub fn numerator(r: f64, base: &Integer, exponent: u32) -> Result<Integer, CodecError> {
    if !r.is_finite() {
        return Err(CodecError::NotFinite { value: r });
    }
    let scale = base.clone().pow(exponent);
    let scaled = Float::with_val(F64_PRECISION, r) * &scale;
    scaled
        .trunc()
        .to_integer()
        .ok_or(CodecError::NotFinite { value: r })
}
