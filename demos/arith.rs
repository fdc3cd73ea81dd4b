use std::path::PathBuf;

use clap::Parser;
use heratio::{
    demos::{self, Operands},
    params::{
        Literal, AS, BFV_1024, BFV_2048, BFV_32, BFV_512, HERATIO_16, HERATIO_512, M0, M1, MS,
    },
};

#[derive(Clone, Debug, Parser)]
struct Args {
    #[arg(long, value_enum, default_value_t = Preset::Heratio16)]
    preset: Preset,

    /// JSON parameter file, used instead of the preset when given.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Key file, `keys/<preset>.bin` by default.
    #[arg(long)]
    keys: Option<PathBuf>,

    #[arg(long, default_value_t = M0)]
    lhs: f64,

    #[arg(long, default_value_t = M1)]
    rhs: f64,

    #[arg(long, default_value_t = AS)]
    addend: f64,

    #[arg(long, default_value_t = MS)]
    scalar: i64,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Preset {
    Heratio16,
    Heratio512,
    Bfv32,
    Bfv512,
    Bfv1024,
    Bfv2048,
}

impl Preset {
    fn literal(self) -> Literal {
        match self {
            Preset::Heratio16 => HERATIO_16,
            Preset::Heratio512 => HERATIO_512,
            Preset::Bfv32 => BFV_32,
            Preset::Bfv512 => BFV_512,
            Preset::Bfv1024 => BFV_1024,
            Preset::Bfv2048 => BFV_2048,
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let literal = match &args.params {
        Some(path) => Literal::from_json_file(path).unwrap(),
        None => args.preset.literal(),
    };
    let operands = Operands {
        lhs: args.lhs,
        rhs: args.rhs,
        addend: args.addend,
        multiplier: args.scalar,
    };
    let keys = args
        .keys
        .unwrap_or_else(|| PathBuf::from(format!("keys/{:?}.bin", args.preset).to_lowercase()));
    demos::arith(literal, keys, operands).unwrap();
}
