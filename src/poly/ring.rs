use rug::Integer;

use crate::params::{Params, Scheme};

use super::{check_len, convolution, RingError};

/// Multiplies two ring elements of the scheme selected by `params`.
///
/// The result is not reduced modulo the coefficient modulus.
pub fn poly_mult(x: &[Integer], y: &[Integer], params: &Params) -> Result<Vec<Integer>, RingError> {
    match params.scheme() {
        Scheme::Bfv => bfv_poly_mult(x, y, params.size()),
        Scheme::HERatio => heratio_poly_mult(x, y, params.degree()),
    }
}

/// Product in `Z[X]/(X^n + 1)`.
pub fn bfv_poly_mult(x: &[Integer], y: &[Integer], n: usize) -> Result<Vec<Integer>, RingError> {
    check_len(x, n)?;
    check_len(y, n)?;
    let c = convolution(x, y)?;
    let (low, high) = c.split_at(n);
    Ok(low
        .iter()
        .enumerate()
        .map(|(i, lo)| match high.get(i) {
            Some(hi) => Integer::from(lo - hi),
            None => lo.clone(),
        })
        .collect())
}

/// Product of two length `2n` HERatio elements.
///
/// The length `4n - 1` convolution is folded through three windows of length `2n`: the middle
/// coefficients minus the tail (zero padded) minus the head (shifted right by `n`).
pub fn heratio_poly_mult(
    x: &[Integer],
    y: &[Integer],
    n: usize,
) -> Result<Vec<Integer>, RingError> {
    check_len(x, 2 * n)?;
    check_len(y, 2 * n)?;
    let p = convolution(x, y)?;
    Ok((0..2 * n)
        .map(|i| {
            let mut out = p[n + i].clone();
            if let Some(tail) = p.get(3 * n + i) {
                out -= tail;
            }
            if i >= n {
                out -= &p[i - n];
            }
            out
        })
        .collect())
}
