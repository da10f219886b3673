use std::io::Write;

use anyhow::Result;
use clap::ArgMatches;

use seqgate_random::{RAND_MAX, RandomError, RandomStream};

use crate::config::SeqgateConfig;

/// A zero seed asks for OS entropy.
pub fn resolve_seed(flag: Option<u32>, config: &SeqgateConfig) -> Option<u32> {
    flag.or(config.seed).filter(|&seed| seed != 0)
}

/// Reject an empty or oversized range up front, even when no draw is requested.
pub fn check_bound(below: u64, large: bool) -> std::result::Result<(), RandomError> {
    let max = if large { u64::MAX } else { RAND_MAX as u64 + 1 };
    if below == 0 || below > max {
        return Err(RandomError::InvalidRange { n: below, max });
    }
    Ok(())
}

pub fn run_sample<W: Write>(matches: &ArgMatches, config: &SeqgateConfig, out: &mut W) -> Result<()> {
    let below = *matches
        .get_one::<u64>("below")
        .expect("An upper bound is required.");
    let count = *matches.get_one::<usize>("count").unwrap_or(&1);
    let large = matches.get_flag("large");
    check_bound(below, large)?;

    let seed = resolve_seed(matches.get_one::<u32>("seed").copied(), config);
    let mut stream = RandomStream::new(seed)?;

    if large {
        for _ in 0..count {
            writeln!(out, "{}", stream.draw_below_large(below)?)?;
        }
    } else {
        let below = below as u32;
        for _ in 0..count {
            writeln!(out, "{}", stream.draw_below(below)?)?;
        }
    }

    Ok(())
}
