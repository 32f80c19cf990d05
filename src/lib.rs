use std::{error, fmt::Display};

use clap::Parser;
use log::LevelFilter;

macro_rules! time_debug {
    ($name:expr, $f:block) => {{
        let start = std::time::Instant::now();
        let result = $f;
        log::debug!("{} (took {:?})", $name, start.elapsed());
        result
    }};
}

pub mod divisor;

pub use divisor::{
    brute_force_divisor_sum, divisor_sum, divisor_sum_table, find_divergences, Divergence,
    ParityPolicy, BRUTE_FORCE_TARGET_LIMIT, ODD_ONLY_TARGET_LIMIT,
};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidMode(usize),
    InvalidTarget(i64),
    TargetTooLarge(usize, usize),
    SumOverflow(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidMode(m) => write!(f, "Invalid mode({}), expect 0 or 1", m),
            Error::InvalidTarget(t) => {
                write!(f, "Invalid target({}), expect a positive integer", t)
            }
            Error::TargetTooLarge(t, limit) => write!(
                f,
                "Target({}) is too large for this method, which accepts at most {}",
                t, limit
            ),
            Error::SumOverflow(t) => write!(f, "Sum of divisors of {} overflows", t),
        }
    }
}

impl error::Error for Error {}

/// Every target is this base plus a mode dependent offset.
pub const TARGET_BASE: usize = 920;
const COMPLEX_OFFSET: usize = 10551320;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Simple,
    Complex,
}

impl TryFrom<usize> for Mode {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mode::Simple),
            1 => Ok(Mode::Complex),
            other => Err(Error::InvalidMode(other)),
        }
    }
}

impl Mode {
    pub fn target(&self) -> usize {
        let offset = match self {
            Mode::Simple => 0,
            Mode::Complex => COMPLEX_OFFSET,
        };

        TARGET_BASE + offset
    }
}

/// Picks the target to factor, an explicit override wins over the one derived from `mode`.
pub fn resolve_target(mode: Mode, target_override: Option<i64>) -> Result<usize, Error> {
    match target_override {
        None => Ok(mode.target()),
        Some(t) if t < 1 => Err(Error::InvalidTarget(t)),
        Some(t) => usize::try_from(t).map_err(|_| Error::InvalidTarget(t)),
    }
}

pub fn init_logger(level: LevelFilter) {
    let _ = env_logger::Builder::new().filter_level(level).try_init();
}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    /// 0 for the simple target, 1 for the complex one.
    #[arg(env = "DAY19_MODE")]
    pub mode: usize,
    #[arg(long, value_enum, default_value_t = ParityPolicy::All)]
    pub policy: ParityPolicy,
    /// Factor this number instead of the one derived from mode.
    #[arg(long, allow_negative_numbers = true)]
    pub target: Option<i64>,
    /// Use the pairwise search instead of trial division, only for small targets.
    #[arg(long)]
    pub brute_force: bool,
    #[arg(short, long, value_name = "LEVEL", default_value_t = LevelFilter::Warn)]
    pub verbose: LevelFilter,
}

#[derive(Debug, Parser)]
pub struct DivergenceArgs {
    /// Last target to check, inclusive.
    pub end: usize,
    #[arg(long, default_value_t = 1)]
    pub start: usize,
    /// Print every diverging target, not only the summary.
    #[arg(long)]
    pub list: bool,
    #[arg(short, long, value_name = "LEVEL", default_value_t = LevelFilter::Warn)]
    pub verbose: LevelFilter,
}
