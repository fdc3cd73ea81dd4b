use rug::Integer;

use crate::{
    oracle::Randomizer,
    poly::{check_len, div_round, poly_mult, sum_zip, vec_scale, vec_sym_mod},
};

use super::{coefficient_modulus, decryption_modulus, delta, Ciphertext, Keychain, SchemeError};

/// Encrypts plaintext vectors under a keychain's public key and decrypts with its secret key.
pub struct Cipher<'a, R> {
    keychain: &'a Keychain,
    oracle: R,
}

impl<'a, R> Cipher<'a, R>
where
    R: Randomizer,
{
    pub fn new(keychain: &'a Keychain, oracle: R) -> Self {
        Self { keychain, oracle }
    }

    pub fn keychain(&self) -> &'a Keychain {
        self.keychain
    }

    /// `c_0 = delta m + pk_0 u + e_0`, `c_1 = pk_1 u + e_1`, both centered modulo `q`.
    pub fn enc(&mut self, m: &[Integer]) -> Result<Ciphertext, SchemeError> {
        let params = self.keychain.params();
        let size = params.size();
        check_len(m, size)?;

        let u = self.oracle.rand_int(-1, 2, size)?;
        let e_0 = self.oracle.norm_dist(size)?;
        let e_1 = self.oracle.norm_dist(size)?;

        let pk = self.keychain.public_key();
        let p_0 = poly_mult(&pk.b, &u, params)?;
        let p_1 = poly_mult(&pk.a, &u, params)?;
        let delta_m = vec_scale(m, &delta(params));

        let q = coefficient_modulus(params);
        let c_0 = vec_sym_mod(&sum_zip(&delta_m, &sum_zip(&p_0, &e_0)?)?, &q);
        let c_1 = vec_sym_mod(&sum_zip(&p_1, &e_1)?, &q);
        Ok(Ciphertext { c_0, c_1 })
    }

    /// Recovers the plaintext, centered modulo `t`. Too much noise yields a wrong plaintext
    /// rather than an error.
    pub fn dec(&self, c: &Ciphertext) -> Result<Vec<Integer>, SchemeError> {
        let params = self.keychain.params();
        let q = coefficient_modulus(params);
        let t = decryption_modulus(params);

        let c_1_s = poly_mult(&c.c_1, &self.keychain.secret_key().s, params)?;
        let v = vec_sym_mod(&sum_zip(&c.c_0, &c_1_s)?, &q);
        let scaled: Vec<Integer> = v
            .iter()
            .map(|x| div_round(&Integer::from(x * &t), &q))
            .collect();
        Ok(vec_sym_mod(&scaled, &t))
    }
}
