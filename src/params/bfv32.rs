// Non-optimized BFV parameters with degree 32

use super::{
    Literal, Scheme, BOUND, COEFFICIENT_MODULUS, DECRYPTION_MODULUS, EXPANSION_BASE,
    RELINEARIZATION_BASE, SIGMA,
};

pub const BFV_32: Literal = Literal {
    degree: 1 << 5,
    expansion_base: EXPANSION_BASE,
    coefficient_modulus: COEFFICIENT_MODULUS,
    decryption_modulus: DECRYPTION_MODULUS,
    relinearization_base: RELINEARIZATION_BASE,
    standard_deviation: SIGMA,
    bound: BOUND,
    factor: 1,
    scheme: Scheme::Bfv.tag(),
};
