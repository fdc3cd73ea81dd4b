// Insecure HERatio parameters with degree 16 (ring dimension 32)

use super::{
    Literal, Scheme, BOUND, COEFFICIENT_MODULUS, DECRYPTION_MODULUS, EXPANSION_BASE,
    RELINEARIZATION_BASE, SIGMA,
};

pub const HERATIO_16: Literal = Literal {
    degree: 1 << 4,
    expansion_base: EXPANSION_BASE,
    coefficient_modulus: COEFFICIENT_MODULUS,
    decryption_modulus: DECRYPTION_MODULUS,
    relinearization_base: RELINEARIZATION_BASE,
    standard_deviation: SIGMA,
    bound: BOUND,
    factor: 2,
    scheme: Scheme::HERatio.tag(),
};
