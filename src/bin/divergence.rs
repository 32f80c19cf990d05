use anyhow::{Context, Result};
use clap::Parser;
use day19::DivergenceArgs;

fn main() -> Result<()> {
    let args = DivergenceArgs::parse();
    day19::init_logger(args.verbose);

    let divergences = day19::find_divergences(args.start..=args.end).with_context(|| {
        format!(
            "Failed to compare policies on targets from {} to {}.",
            args.start, args.end
        )
    })?;

    if args.list {
        for d in &divergences {
            println!("{} {} {}", d.target, d.all_sum, d.odd_only_sum);
        }
    }
    let target_count = if args.start > args.end {
        0
    } else {
        args.end - args.start + 1
    };
    println!(
        "{} of {} targets diverge between policies.",
        divergences.len(),
        target_count
    );

    Ok(())
}
