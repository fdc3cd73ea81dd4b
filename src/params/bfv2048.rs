// Secure BFV parameters with degree 2048. The binary expansion base keeps encoded digits small
// enough for one multiplication under the 54-bit coefficient modulus.

use super::{Literal, Scheme, BOUND, DECRYPTION_MODULUS, RELINEARIZATION_BASE, SIGMA};

pub const BFV_2048: Literal = Literal {
    degree: 1 << 11,
    expansion_base: 2,
    coefficient_modulus: 18_014_398_509_481_983,
    decryption_modulus: DECRYPTION_MODULUS,
    relinearization_base: RELINEARIZATION_BASE,
    standard_deviation: SIGMA,
    bound: BOUND,
    factor: 1,
    scheme: Scheme::Bfv.tag(),
};
