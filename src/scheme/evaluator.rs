use rug::Integer;

use crate::{
    params::Params,
    poly::{check_len, div_round, poly_mult, sum_zip, sym_mod, vec_scale, vec_sym_mod},
    util::expand,
};

use super::{
    coeff_exp_len, coefficient_modulus, decryption_modulus, delta, Ciphertext, Keychain,
    SchemeError,
};

/// Homomorphic operations on ciphertexts of one keychain.
///
/// Noise is not tracked. Once it outgrows the modulus decryption silently yields a wrong
/// plaintext, so callers bound the circuit depth themselves.
pub struct Evaluator<'a> {
    keychain: &'a Keychain,
}

impl<'a> Evaluator<'a> {
    pub fn new(keychain: &'a Keychain) -> Self {
        Self { keychain }
    }

    fn check(&self, c: &Ciphertext) -> Result<(), SchemeError> {
        let size = self.keychain.params().size();
        check_len(&c.c_0, size)?;
        check_len(&c.c_1, size)?;
        Ok(())
    }

    /// Adds the plaintext `s` scaled by delta to `c_0`. The result is not re-centered.
    pub fn s_add(&self, c: &Ciphertext, s: &[Integer]) -> Result<Ciphertext, SchemeError> {
        self.check(c)?;
        let scaled = vec_scale(s, &delta(self.keychain.params()));
        Ok(Ciphertext {
            c_0: sum_zip(&c.c_0, &scaled)?,
            c_1: c.c_1.clone(),
        })
    }

    pub fn add(&self, lhs: &Ciphertext, rhs: &Ciphertext) -> Result<Ciphertext, SchemeError> {
        self.check(lhs)?;
        self.check(rhs)?;
        let q = coefficient_modulus(self.keychain.params());
        Ok(Ciphertext {
            c_0: vec_sym_mod(&sum_zip(&lhs.c_0, &rhs.c_0)?, &q),
            c_1: vec_sym_mod(&sum_zip(&lhs.c_1, &rhs.c_1)?, &q),
        })
    }

    pub fn s_mult(&self, c: &Ciphertext, k: &Integer) -> Ciphertext {
        let q = coefficient_modulus(self.keychain.params());
        Ciphertext {
            c_0: vec_sym_mod(&vec_scale(&c.c_0, k), &q),
            c_1: vec_sym_mod(&vec_scale(&c.c_1, k), &q),
        }
    }

    /// Multiplies two ciphertexts and relinearizes the result back to two components.
    ///
    /// The output components are not re-centered modulo `q`.
    pub fn mult(&self, lhs: &Ciphertext, rhs: &Ciphertext) -> Result<Ciphertext, SchemeError> {
        self.check(lhs)?;
        self.check(rhs)?;
        let [d_0, d_1, d_2] = self.tensor(lhs, rhs)?;
        self.relinearize(d_0, d_1, &d_2)
    }

    /// The three components of `lhs * rhs`, each scaled by `t/q` and centered modulo `q`.
    fn tensor(
        &self,
        lhs: &Ciphertext,
        rhs: &Ciphertext,
    ) -> Result<[Vec<Integer>; 3], SchemeError> {
        let params = self.keychain.params();
        let c_00 = poly_mult(&lhs.c_0, &rhs.c_0, params)?;
        let c_01 = poly_mult(&lhs.c_0, &rhs.c_1, params)?;
        let c_10 = poly_mult(&lhs.c_1, &rhs.c_0, params)?;
        let c_11 = poly_mult(&lhs.c_1, &rhs.c_1, params)?;
        Ok([
            rescale(&c_00, params),
            rescale(&sum_zip(&c_01, &c_10)?, params),
            rescale(&c_11, params),
        ])
    }

    /// Switches `d_2` from `s^2` to `s` with the evaluation key and adds it onto `d_0` and `d_1`.
    fn relinearize(
        &self,
        d_0: Vec<Integer>,
        d_1: Vec<Integer>,
        d_2: &[Integer],
    ) -> Result<Ciphertext, SchemeError> {
        let params = self.keychain.params();
        let len = coeff_exp_len(params);
        let w = Integer::from(params.relinearization_base());

        // digits[i][j] is the j-th base-w digit of coefficient i.
        let digits: Vec<Vec<Integer>> = d_2.iter().map(|x| expand(x, len, &w)).collect();
        let columns: Vec<Vec<Integer>> = (0..len)
            .map(|j| digits.iter().map(|d| d[j].clone()).collect())
            .collect();

        let mut c_0 = d_0;
        let mut c_1 = d_1;
        for (level, column) in self.keychain.evaluation_key().levels.iter().zip(&columns) {
            c_0 = sum_zip(&c_0, &poly_mult(&level.b, column, params)?)?;
            c_1 = sum_zip(&c_1, &poly_mult(&level.a, column, params)?)?;
        }
        Ok(Ciphertext { c_0, c_1 })
    }
}

fn rescale(v: &[Integer], params: &Params) -> Vec<Integer> {
    let q = coefficient_modulus(params);
    let t = decryption_modulus(params);
    v.iter()
        .map(|x| sym_mod(&div_round(&Integer::from(&t * x), &q), &q))
        .collect()
}
