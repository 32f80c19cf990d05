use anyhow::{Context, Result};
use clap::Parser;
use day19::{CLIArgs, Mode};
use log::info;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    day19::init_logger(args.verbose);

    let mode = Mode::try_from(args.mode)
        .with_context(|| format!("Failed to select mode from given flag({}).", args.mode))?;
    let target = day19::resolve_target(mode, args.target)
        .context("Failed to determine the number to factor.")?;
    info!("Mode {:?} selects target {}.", mode, target);

    let sum = if args.brute_force {
        day19::brute_force_divisor_sum(target, args.policy)
    } else {
        day19::divisor_sum(target, args.policy)
    }
    .with_context(|| {
        format!(
            "Failed to sum divisors of {} with policy {:?}.",
            target, args.policy
        )
    })?;
    println!("{}", sum);

    Ok(())
}
