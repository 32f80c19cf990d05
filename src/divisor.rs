use std::{iter, ops::RangeInclusive};

use clap::ValueEnum;
use log::debug;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::Error;

/// Largest target the linear scan of `ParityPolicy::OddOnly` accepts.
pub const ODD_ONLY_TARGET_LIMIT: usize = 1_000_000;
/// Largest target the pairwise search accepts.
pub const BRUTE_FORCE_TARGET_LIMIT: usize = 10_000;

/// Which cofactors `c` may pair with a factor `f` to satisfy `f * c == target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParityPolicy {
    /// Any cofactor, this is the true divisor sum.
    All,
    /// Only odd cofactors below the target, the way the stepping-by-2 loop searches.
    OddOnly,
}

impl ParityPolicy {
    fn accepts(&self, target: usize, cofactor: usize) -> bool {
        match self {
            ParityPolicy::All => true,
            ParityPolicy::OddOnly => cofactor % 2 == 1 && cofactor < target,
        }
    }
}

/// Sums every factor of `target` that has a cofactor allowed by `policy`, each factor once.
///
/// `ParityPolicy::All` pairs divisors up to the square root with their complements, so it
/// runs in O(√target). `ParityPolicy::OddOnly` scans every factor and is limited to
/// targets up to [`ODD_ONLY_TARGET_LIMIT`].
pub fn divisor_sum(target: usize, policy: ParityPolicy) -> Result<usize, Error> {
    check_target(target)?;
    if policy == ParityPolicy::OddOnly && target > ODD_ONLY_TARGET_LIMIT {
        return Err(Error::TargetTooLarge(target, ODD_ONLY_TARGET_LIMIT));
    }

    let sum = time_debug!(format!("Sum divisors of {} with policy {:?}", target, policy), {
        match policy {
            ParityPolicy::All => paired_divisor_sum(target),
            ParityPolicy::OddOnly => scan_divisor_sum(target, policy),
        }
    })?;
    debug!("Divisor sum of {} is {}", target, sum);

    Ok(sum)
}

/// Searches every (factor, cofactor) pair, stopping at the first cofactor that matches.
pub fn brute_force_divisor_sum(target: usize, policy: ParityPolicy) -> Result<usize, Error> {
    check_target(target)?;
    if target > BRUTE_FORCE_TARGET_LIMIT {
        return Err(Error::TargetTooLarge(target, BRUTE_FORCE_TARGET_LIMIT));
    }

    let mut sum: usize = 0;
    for factor in 1..=target {
        let mut cofactors: Box<dyn Iterator<Item = usize>> = match policy {
            ParityPolicy::All => Box::new(1..=target),
            ParityPolicy::OddOnly => Box::new((1..target).step_by(2)),
        };
        if cofactors.any(|c| factor * c == target) {
            sum = sum
                .checked_add(factor)
                .ok_or(Error::SumOverflow(target))?;
        }
    }

    Ok(sum)
}

/// Sieves the sums for every target in `[0, limit]`, `table[0]` stays 0.
pub fn divisor_sum_table(limit: usize, policy: ParityPolicy) -> Vec<usize> {
    let mut table = vec![0; limit + 1];
    for factor in 1..=limit {
        for (cofactor, target) in (factor..=limit).step_by(factor).enumerate() {
            if policy.accepts(target, cofactor + 1) {
                table[target] += factor;
            }
        }
    }

    table
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divergence {
    pub target: usize,
    pub all_sum: usize,
    pub odd_only_sum: usize,
}

/// Finds the targets in `targets` on which the two policies disagree, in ascending order.
pub fn find_divergences(targets: RangeInclusive<usize>) -> Result<Vec<Divergence>, Error> {
    targets
        .into_par_iter()
        .map(|target| -> Result<Option<Divergence>, Error> {
            let all_sum = divisor_sum(target, ParityPolicy::All)?;
            let odd_only_sum = divisor_sum(target, ParityPolicy::OddOnly)?;
            Ok((all_sum != odd_only_sum).then_some(Divergence {
                target,
                all_sum,
                odd_only_sum,
            }))
        })
        .filter_map(Result::transpose)
        .collect()
}

fn check_target(target: usize) -> Result<(), Error> {
    if target == 0 {
        Err(Error::InvalidTarget(0))
    } else {
        Ok(())
    }
}

fn checked_sum<I: Iterator<Item = usize>>(target: usize, mut factors: I) -> Result<usize, Error> {
    factors.try_fold(0usize, |acc, f| {
        acc.checked_add(f).ok_or(Error::SumOverflow(target))
    })
}

fn paired_divisor_sum(target: usize) -> Result<usize, Error> {
    let factors = (1..)
        .take_while(|&f| f <= target / f)
        .filter(|&f| target % f == 0)
        .flat_map(|f| {
            let complement = target / f;
            iter::once(f).chain((complement != f).then_some(complement))
        });

    checked_sum(target, factors)
}

fn scan_divisor_sum(target: usize, policy: ParityPolicy) -> Result<usize, Error> {
    let factors = (1..=target).filter(|&f| target % f == 0 && policy.accepts(target, target / f));

    checked_sum(target, factors)
}
