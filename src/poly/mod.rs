//! Coefficient-vector arithmetic over arbitrary-precision signed integers.
//!
//! Nothing in here reduces implicitly: every helper returns a freshly allocated vector and the
//! caller decides when to re-center with [`vec_sym_mod`].

use std::cmp::Ordering;

use rug::Integer;

pub mod ring;

pub use self::ring::{bfv_poly_mult, heratio_poly_mult, poly_mult};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum RingError {
    #[display(fmt = "expected {} coefficients, found {}", expected, found)]
    LengthMismatch { expected: usize, found: usize },
}

pub(crate) fn check_len(v: &[Integer], expected: usize) -> Result<(), RingError> {
    if v.len() != expected {
        return Err(RingError::LengthMismatch {
            expected,
            found: v.len(),
        });
    }
    Ok(())
}

/// Reduces `x` into `[-m/2, m/2)`. A remainder of exactly `m/2` lands on the negative side.
pub fn sym_mod(x: &Integer, m: &Integer) -> Integer {
    let mut r = x.clone().modulo(m);
    if Integer::from(&r * 2u32) >= *m {
        r -= m;
    }
    if Integer::from(&r * 2u32) < Integer::from(-m) {
        r += m;
    }
    r
}

/// Integer division rounded to the nearest quotient, ties away from zero.
pub fn div_round(num: &Integer, den: &Integer) -> Integer {
    let (mut quo, rem) = num.clone().div_rem(den.clone());
    let (half, _) = den.clone().div_rem_floor(Integer::from(2));
    if rem.cmp0() != Ordering::Equal && rem.cmp_abs(&half) != Ordering::Less {
        if rem.cmp0() == Ordering::Greater {
            quo += 1;
        } else {
            quo -= 1;
        }
    }
    quo
}

/// Schoolbook product of two equally long coefficient vectors, without any folding.
pub fn convolution(f: &[Integer], g: &[Integer]) -> Result<Vec<Integer>, RingError> {
    check_len(g, f.len())?;
    let mut c = vec![Integer::new(); (2 * f.len()).saturating_sub(1)];
    for (i, f_i) in f.iter().enumerate() {
        for (j, g_j) in g.iter().enumerate() {
            c[i + j] += f_i * g_j;
        }
    }
    Ok(c)
}

pub fn sum_zip(x: &[Integer], y: &[Integer]) -> Result<Vec<Integer>, RingError> {
    check_len(y, x.len())?;
    Ok(x.iter().zip(y).map(|(a, b)| Integer::from(a + b)).collect())
}

pub fn vec_sym_mod(v: &[Integer], m: &Integer) -> Vec<Integer> {
    v.iter().map(|x| sym_mod(x, m)).collect()
}

pub fn vec_neg(v: &[Integer]) -> Vec<Integer> {
    v.iter().map(|x| Integer::from(-x)).collect()
}

pub fn vec_scale(v: &[Integer], k: &Integer) -> Vec<Integer> {
    v.iter().map(|x| Integer::from(x * k)).collect()
}

#[cfg(test)]
pub(crate) fn ints(values: &[i64]) -> Vec<Integer> {
    values.iter().map(|&x| Integer::from(x)).collect()
}
