pub mod codec;
pub mod oracle;
pub mod params;
pub mod poly;
pub mod scheme;
pub mod util;

pub mod demos {
    use std::error::Error;
    use std::path::Path;
    use std::time::Instant;

    use log::info;
    use rug::Integer;

    use crate::codec::{self, Codec};
    use crate::oracle::Oracle;
    use crate::params::{Literal, Params};
    use crate::scheme::{Cipher, Ciphertext, Evaluator, Keychain};
    use crate::util::log_error;

    /// Operands of one demo run.
    #[derive(Clone, Copy, Debug)]
    pub struct Operands {
        pub lhs: f64,
        pub rhs: f64,
        pub addend: f64,
        pub multiplier: i64,
    }

    /// Loads or generates keys for `literal` under `keys`, then evaluates each homomorphic
    /// operation on the operands and prints the decoded result next to the plain one.
    pub fn arith<Q: AsRef<Path>>(
        literal: Literal,
        keys: Q,
        operands: Operands,
    ) -> Result<(), Box<dyn Error>> {
        let params = Params::new(literal)?;
        let mut oracle = Oracle::new(&params)?;

        let now = Instant::now();
        let keychain = Keychain::setup(keys, &params, &mut oracle);
        log_error("key setup", &keychain);
        let keychain = keychain?;
        info!("keys ready after {} ms", now.elapsed().as_millis());

        let codec = codec::for_params(&params)?;
        let eval = Evaluator::new(&keychain);
        let mut cipher = Cipher::new(&keychain, oracle);
        let lhs = cipher.enc(&codec.enc(operands.lhs)?)?;
        let rhs = cipher.enc(&codec.enc(operands.rhs)?)?;

        let Operands {
            lhs: x,
            rhs: y,
            addend,
            multiplier,
        } = operands;
        let report = |name: &str, c: &Ciphertext, plain: f64| -> Result<(), Box<dyn Error>> {
            let decoded = codec.dec(&cipher.dec(c)?)?;
            println!("{}: {} (plain {})", name, decoded, plain);
            Ok(())
        };

        let now = Instant::now();
        let sum = eval.add(&lhs, &rhs)?;
        let shifted = eval.s_add(&lhs, &codec.enc(addend)?)?;
        let scaled = eval.s_mult(&lhs, &Integer::from(multiplier));
        let product = eval.mult(&lhs, &rhs);
        log_error("multiplication", &product);
        let product = product?;
        info!(
            "{} evaluation took {} ms",
            params.scheme(),
            now.elapsed().as_millis()
        );

        report("add", &sum, x + y)?;
        report("scalar add", &shifted, x + addend)?;
        report("scalar mult", &scaled, x * multiplier as f64)?;
        report("mult", &product, x * y)?;
        Ok(())
    }
}
