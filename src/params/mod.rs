// Toy parameters, fast enough for unit tests
pub mod bfv32;
pub mod heratio16;

// Larger parameters for benchmarks
pub mod bfv1024;
pub mod bfv512;
pub mod heratio512;

// Secure BFV parameters
pub mod bfv2048;

use std::{fmt, fs::File, io, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

pub use self::{
    bfv1024::BFV_1024, bfv2048::BFV_2048, bfv32::BFV_32, bfv512::BFV_512,
    heratio16::HERATIO_16, heratio512::HERATIO_512,
};

/// Expansion base shared by the non-secure presets.
pub const EXPANSION_BASE: i64 = 10;
pub const COEFFICIENT_MODULUS: i64 = 9_876_523_525;
pub const DECRYPTION_MODULUS: i64 = 2_131;
pub const RELINEARIZATION_BASE: i64 = 128;
pub const SIGMA: f64 = 3.19;
pub const BOUND: i64 = 10;

// Reference messages.
pub const M0: f64 = 12345.678;
pub const M1: f64 = 947.1273;
pub const M2: f64 = 351.179;
pub const M3: f64 = 198.26;
/// Multiplicative scalar.
pub const MS: i64 = 4;
/// Additive scalar.
pub const AS: f64 = 42.122;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Scheme {
    Bfv,
    HERatio,
}

impl Scheme {
    pub const fn tag(self) -> u8 {
        match self {
            Scheme::Bfv => 0,
            Scheme::HERatio => 1,
        }
    }
}

impl TryFrom<u8> for Scheme {
    type Error = ParamsError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Scheme::Bfv),
            1 => Ok(Scheme::HERatio),
            tag => Err(ParamsError::InvalidScheme { tag }),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Bfv => write!(f, "BFV"),
            Scheme::HERatio => write!(f, "HERatio"),
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParamsError {
    #[display(fmt = "degree {} is not a positive integer", degree)]
    DegreeNotPositive { degree: usize },
    #[display(fmt = "degree {} is not a power of two", degree)]
    DegreeNotPowerOfTwo { degree: usize },
    #[display(fmt = "expansion base {} is less than 2", base)]
    ExpansionBaseTooSmall { base: i64 },
    #[display(fmt = "coefficient modulus {} is not positive", modulus)]
    CoefficientModulusNotPositive { modulus: i64 },
    #[display(fmt = "decryption modulus {} is not positive", modulus)]
    DecryptionModulusNotPositive { modulus: i64 },
    #[display(fmt = "relinearization base {} is not greater than 2", base)]
    RelinearizationBaseTooSmall { base: i64 },
    #[display(fmt = "standard deviation {} is not positive", sigma)]
    StandardDeviationNotPositive { sigma: f64 },
    #[display(fmt = "bound {} is not positive", bound)]
    BoundNotPositive { bound: i64 },
    #[display(fmt = "factor {} is not positive", factor)]
    FactorNotPositive { factor: usize },
    #[display(fmt = "scheme tag {} is unknown", tag)]
    InvalidScheme { tag: u8 },
    #[display(fmt = "{} does not support factor {}", scheme, factor)]
    FactorMismatch { scheme: Scheme, factor: usize },
    Io(io::Error),
    Json(serde_json::Error),
}

/// Raw parameter values as they are written down or stored next to a keychain.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Literal {
    pub degree: usize,
    pub expansion_base: i64,
    pub coefficient_modulus: i64,
    pub decryption_modulus: i64,
    pub relinearization_base: i64,
    /// Standard deviation of the discrete Gaussian.
    pub standard_deviation: f64,
    /// Gaussian samples outside `bound * standard_deviation` are rejected.
    pub bound: i64,
    /// Ring dimension is `factor * degree`.
    pub factor: usize,
    /// 0 selects BFV, 1 selects HERatio.
    pub scheme: u8,
}

impl Literal {
    pub fn from_json_file<Q: AsRef<Path>>(path: Q) -> Result<Self, ParamsError> {
        let file = File::open(path).map_err(ParamsError::Io)?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(ParamsError::Json)
    }
}

/// Validated, immutable scheme parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    literal: Literal,
    scheme: Scheme,
}

impl Params {
    pub fn new(literal: Literal) -> Result<Self, ParamsError> {
        validate_degree(literal.degree)?;
        if literal.expansion_base < 2 {
            return Err(ParamsError::ExpansionBaseTooSmall {
                base: literal.expansion_base,
            });
        }
        if literal.coefficient_modulus <= 0 {
            return Err(ParamsError::CoefficientModulusNotPositive {
                modulus: literal.coefficient_modulus,
            });
        }
        if literal.decryption_modulus <= 0 {
            return Err(ParamsError::DecryptionModulusNotPositive {
                modulus: literal.decryption_modulus,
            });
        }
        if literal.relinearization_base <= 2 {
            return Err(ParamsError::RelinearizationBaseTooSmall {
                base: literal.relinearization_base,
            });
        }
        // Also rejects NaN.
        if !(literal.standard_deviation > 0.0) {
            return Err(ParamsError::StandardDeviationNotPositive {
                sigma: literal.standard_deviation,
            });
        }
        if literal.bound <= 0 {
            return Err(ParamsError::BoundNotPositive {
                bound: literal.bound,
            });
        }
        if literal.factor == 0 {
            return Err(ParamsError::FactorNotPositive {
                factor: literal.factor,
            });
        }
        let scheme = Scheme::try_from(literal.scheme)?;
        // The HERatio fold splits a product of two `2n`-length vectors.
        if scheme == Scheme::HERatio && literal.factor != 2 {
            return Err(ParamsError::FactorMismatch {
                scheme,
                factor: literal.factor,
            });
        }
        Ok(Self { literal, scheme })
    }

    pub fn literal(&self) -> &Literal {
        &self.literal
    }

    pub fn degree(&self) -> usize {
        self.literal.degree
    }

    pub fn expansion_base(&self) -> i64 {
        self.literal.expansion_base
    }

    pub fn coefficient_modulus(&self) -> i64 {
        self.literal.coefficient_modulus
    }

    pub fn decryption_modulus(&self) -> i64 {
        self.literal.decryption_modulus
    }

    pub fn relinearization_base(&self) -> i64 {
        self.literal.relinearization_base
    }

    pub fn standard_deviation(&self) -> f64 {
        self.literal.standard_deviation
    }

    pub fn bound(&self) -> i64 {
        self.literal.bound
    }

    pub fn factor(&self) -> usize {
        self.literal.factor
    }

    /// Ring dimension, i.e. the length of every plaintext and ciphertext component.
    pub fn size(&self) -> usize {
        self.literal.factor * self.literal.degree
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }
}

fn validate_degree(degree: usize) -> Result<(), ParamsError> {
    if degree == 0 {
        return Err(ParamsError::DegreeNotPositive { degree });
    }
    if !degree.is_power_of_two() {
        return Err(ParamsError::DegreeNotPowerOfTwo { degree });
    }
    Ok(())
}
