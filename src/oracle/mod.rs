//! Randomness consumed by key generation and encryption.
//!
//! [`Oracle`] draws fresh samples, [`OracleDouble`] replays pre-loaded batches so that keys and
//! ciphertexts can be reproduced coefficient by coefficient in tests.

pub mod double;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, Normal};
use rug::Integer;

use crate::params::Params;

pub use self::double::OracleDouble;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum OracleError {
    #[display(fmt = "lower bound {} is not less than upper bound {}", lower, upper)]
    InvalidRange { lower: i64, upper: i64 },
    #[display(fmt = "end of pre-loaded samples")]
    OutOfSamples,
    #[display(fmt = "invalid standard deviation {}", sigma)]
    InvalidDeviation { sigma: f64 },
}

pub trait Randomizer {
    /// Returns `count` integers drawn uniformly from `[lower, upper)`.
    fn rand_int(&mut self, lower: i64, upper: i64, count: usize)
        -> Result<Vec<Integer>, OracleError>;

    /// Returns `count` integers drawn from the truncated discrete Gaussian.
    fn norm_dist(&mut self, count: usize) -> Result<Vec<Integer>, OracleError>;
}

impl<R> Randomizer for &mut R
where
    R: Randomizer + ?Sized,
{
    fn rand_int(
        &mut self,
        lower: i64,
        upper: i64,
        count: usize,
    ) -> Result<Vec<Integer>, OracleError> {
        (**self).rand_int(lower, upper, count)
    }

    fn norm_dist(&mut self, count: usize) -> Result<Vec<Integer>, OracleError> {
        (**self).norm_dist(count)
    }
}

pub struct Oracle {
    rng: ChaCha20Rng,
    normal: Normal<f64>,
    // Samples with a larger magnitude are rejected.
    limit: f64,
}

impl Oracle {
    pub fn new(params: &Params) -> Result<Self, OracleError> {
        Self::with_rng(ChaCha20Rng::from_entropy(), params)
    }

    /// Deterministic stream, for benchmarks and reproducible runs.
    pub fn from_seed(seed: [u8; 32], params: &Params) -> Result<Self, OracleError> {
        Self::with_rng(ChaCha20Rng::from_seed(seed), params)
    }

    fn with_rng(rng: ChaCha20Rng, params: &Params) -> Result<Self, OracleError> {
        let sigma = params.standard_deviation();
        let normal =
            Normal::new(0.0, sigma).map_err(|_| OracleError::InvalidDeviation { sigma })?;
        Ok(Self {
            rng,
            normal,
            limit: params.bound() as f64 * sigma,
        })
    }
}

impl Randomizer for Oracle {
    fn rand_int(
        &mut self,
        lower: i64,
        upper: i64,
        count: usize,
    ) -> Result<Vec<Integer>, OracleError> {
        if lower >= upper {
            return Err(OracleError::InvalidRange { lower, upper });
        }
        Ok((0..count)
            .map(|_| Integer::from(self.rng.gen_range(lower..upper)))
            .collect())
    }

    fn norm_dist(&mut self, count: usize) -> Result<Vec<Integer>, OracleError> {
        let mut samples = Vec::with_capacity(count);
        while samples.len() < count {
            let sample = self.normal.sample(&mut self.rng);
            if -self.limit <= sample && sample <= self.limit {
                samples.push(Integer::from(sample.round() as i64));
            }
        }
        Ok(samples)
    }
}
