// Insecure HERatio parameters with degree 512 (ring dimension 1024)

use super::{
    Literal, Scheme, BOUND, COEFFICIENT_MODULUS, DECRYPTION_MODULUS, EXPANSION_BASE,
    RELINEARIZATION_BASE, SIGMA,
};

pub const HERATIO_512: Literal = Literal {
    degree: 1 << 9,
    expansion_base: EXPANSION_BASE,
    coefficient_modulus: COEFFICIENT_MODULUS,
    decryption_modulus: DECRYPTION_MODULUS,
    relinearization_base: RELINEARIZATION_BASE,
    standard_deviation: SIGMA,
    bound: BOUND,
    factor: 2,
    scheme: Scheme::HERatio.tag(),
};
