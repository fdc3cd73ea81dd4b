use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use log::{debug, info, warn};
use rug::{ops::Pow, Integer};
use serde::{Deserialize, Serialize};

use crate::{
    oracle::Randomizer,
    params::{Literal, Params},
    poly::{poly_mult, sum_zip, vec_neg, vec_scale, vec_sym_mod},
};

use super::{
    coeff_exp_len, coefficient_modulus, EvaluationKey, EvaluationKeyLevel, PublicKey,
    SchemeError, SecretKey,
};

/// Bounds for uniform samples modulo `q`: `[-ceil((q-1)/2), floor((q-1)/2))`.
fn uniform_bounds(params: &Params) -> (i64, i64) {
    let q = params.coefficient_modulus();
    (-(q / 2), (q - 1) / 2)
}

impl SecretKey {
    pub fn gen<R>(params: &Params, oracle: &mut R) -> Result<Self, SchemeError>
    where
        R: Randomizer + ?Sized,
    {
        let s = oracle.rand_int(-1, 2, params.size())?;
        Ok(Self { s })
    }
}

impl PublicKey {
    pub fn gen<R>(params: &Params, sk: &SecretKey, oracle: &mut R) -> Result<Self, SchemeError>
    where
        R: Randomizer + ?Sized,
    {
        let (lower, upper) = uniform_bounds(params);
        let a = oracle.rand_int(lower, upper, params.size())?;
        let e = oracle.norm_dist(params.size())?;
        let a_s = poly_mult(&a, &sk.s, params)?;
        let b = vec_sym_mod(&sum_zip(&vec_neg(&a_s), &e)?, &coefficient_modulus(params));
        Ok(Self { b, a })
    }
}

impl EvaluationKey {
    pub fn gen<R>(params: &Params, sk: &SecretKey, oracle: &mut R) -> Result<Self, SchemeError>
    where
        R: Randomizer + ?Sized,
    {
        let (lower, upper) = uniform_bounds(params);
        let q = coefficient_modulus(params);
        let w = Integer::from(params.relinearization_base());
        let s_squared = poly_mult(&sk.s, &sk.s, params)?;

        let len = coeff_exp_len(params);
        let mut levels = Vec::with_capacity(len);
        for i in 0..len {
            let a = oracle.rand_int(lower, upper + 1, params.size())?;
            let e = oracle.norm_dist(params.size())?;
            let a_s = poly_mult(&a, &sk.s, params)?;
            let scaled = vec_scale(&s_squared, &w.clone().pow(i as u32));
            let b = vec_sym_mod(&sum_zip(&sum_zip(&vec_neg(&a_s), &e)?, &scaled)?, &q);
            debug!("Generated evaluation key level {}/{}", i + 1, len);
            levels.push(EvaluationKeyLevel { b, a });
        }
        Ok(Self { levels })
    }
}

/// On-disk form of a [`Keychain`].
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct KeyStorage {
    pub sk: SecretKey,
    pub pk: PublicKey,
    pub ek: EvaluationKey,
    pub literal: Literal,
}

/// Key material of one scheme instance. Keys never change after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Keychain {
    params: Params,
    sk: SecretKey,
    pk: PublicKey,
    ek: EvaluationKey,
}

impl Keychain {
    pub fn generate<R>(params: &Params, oracle: &mut R) -> Result<Self, SchemeError>
    where
        R: Randomizer + ?Sized,
    {
        info!(
            "Generating {} keychain (size {}, {} evaluation key levels)",
            params.scheme(),
            params.size(),
            coeff_exp_len(params)
        );
        let sk = SecretKey::gen(params, oracle)?;
        let pk = PublicKey::gen(params, &sk, oracle)?;
        let ek = EvaluationKey::gen(params, &sk, oracle)?;
        info!("Generated {} keychain", params.scheme());
        Ok(Self {
            params: params.clone(),
            sk,
            pk,
            ek,
        })
    }

    /// Assembles a keychain from existing key material after checking its shape.
    pub fn from_parts(
        params: Params,
        sk: SecretKey,
        pk: PublicKey,
        ek: EvaluationKey,
    ) -> Result<Self, SchemeError> {
        let size = params.size();
        if sk.s.len() != size {
            return Err(SchemeError::MalformedKey { what: "secret key" });
        }
        if pk.b.len() != size || pk.a.len() != size {
            return Err(SchemeError::MalformedKey { what: "public key" });
        }
        if ek.levels.len() != coeff_exp_len(&params)
            || ek
                .levels
                .iter()
                .any(|level| level.b.len() != size || level.a.len() != size)
        {
            return Err(SchemeError::MalformedKey {
                what: "evaluation key",
            });
        }
        Ok(Self { params, sk, pk, ek })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.sk
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.pk
    }

    pub fn evaluation_key(&self) -> &EvaluationKey {
        &self.ek
    }

    pub fn store<Q: AsRef<Path>>(&self, path: Q) -> Result<(), SchemeError> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(SchemeError::Io)?;
        }
        let storage = KeyStorage {
            sk: self.sk.clone(),
            pk: self.pk.clone(),
            ek: self.ek.clone(),
            literal: *self.params.literal(),
        };
        let mut writer = BufWriter::new(File::create(path).map_err(SchemeError::Io)?);
        bincode::serialize_into(&mut writer, &storage).map_err(SchemeError::Serialization)?;
        writer.flush().map_err(SchemeError::Io)?;
        info!("Stored keychain at {}", path.display());
        Ok(())
    }

    /// Reads a keychain stored by [`Keychain::store`]. The stored parameters must equal `params`.
    pub fn load<Q: AsRef<Path>>(path: Q, params: &Params) -> Result<Self, SchemeError> {
        let file = File::open(path).map_err(SchemeError::Io)?;
        let storage: KeyStorage =
            bincode::deserialize_from(BufReader::new(file)).map_err(SchemeError::Serialization)?;
        let stored = Params::new(storage.literal).map_err(SchemeError::Params)?;
        if stored != *params {
            return Err(SchemeError::ParamsMismatch);
        }
        Self::from_parts(stored, storage.sk, storage.pk, storage.ek)
    }

    /// Loads the keychain at `path`, or generates and stores a new one if that fails.
    pub fn setup<Q, R>(path: Q, params: &Params, oracle: &mut R) -> Result<Self, SchemeError>
    where
        Q: AsRef<Path>,
        R: Randomizer + ?Sized,
    {
        let path = path.as_ref();
        match Self::load(path, params) {
            Ok(keychain) => {
                info!("Loaded keychain from {}", path.display());
                Ok(keychain)
            }
            Err(e) => {
                warn!(
                    "Could not load keychain from {} ({}), generating a new one",
                    path.display(),
                    e
                );
                let keychain = Self::generate(params, oracle)?;
                keychain.store(path)?;
                Ok(keychain)
            }
        }
    }
}
