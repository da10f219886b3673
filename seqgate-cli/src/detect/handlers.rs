use std::io::Write;

use anyhow::Result;
use clap::ArgMatches;

use seqgate_io::detect_with;

use crate::config::SeqgateConfig;

/// Print `path<TAB>codec<TAB>record_type` for every file, stopping at the first bad one.
pub fn run_detect<W: Write>(matches: &ArgMatches, config: &SeqgateConfig, out: &mut W) -> Result<()> {
    let capabilities = config.capabilities();

    let files = matches
        .get_many::<String>("files")
        .expect("At least one input file is required.");

    for file in files {
        let detected = detect_with(file, &capabilities)?;
        writeln!(
            out,
            "{}\t{}\t{}",
            detected.path.display(),
            detected.codec,
            detected.record_type
        )?;
    }

    Ok(())
}
