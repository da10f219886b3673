use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use clap::ArgMatches;

use seqgate_digest::{DigestKind, write_fingerprint};
use seqgate_io::{Capabilities, InputHandle};

use crate::config::SeqgateConfig;

pub fn run_digest<W: Write>(matches: &ArgMatches, config: &SeqgateConfig, out: &mut W) -> Result<()> {
    let kind = match matches.get_one::<String>("digest") {
        Some(digest) => digest.parse::<DigestKind>().map_err(|e| anyhow!(e))?,
        None => config.digest.unwrap_or_default(),
    };

    let sequences = matches.get_many::<String>("sequences");
    let input = matches.get_one::<String>("input");

    if sequences.is_none() && input.is_none() {
        bail!("No sequences given: pass them as arguments or with --input");
    }

    for seq in sequences.into_iter().flatten() {
        write_line(out, seq.as_bytes(), kind)?;
    }

    if let Some(input) = input {
        digest_file(Path::new(input), &config.capabilities(), kind, out)?;
    }

    Ok(())
}

///
/// Fingerprint every non-empty line of a (possibly compressed) file.
///
/// # Arguments
/// - path: file with one raw sequence per line
/// - capabilities: codecs the file may use
/// - kind: digest family
/// - out: where `hex<TAB>sequence` lines go
pub fn digest_file<W: Write>(
    path: &Path,
    capabilities: &Capabilities,
    kind: DigestKind,
    out: &mut W,
) -> Result<()> {
    let handle = InputHandle::open_with(path, capabilities)?;
    let reader = BufReader::new(handle);

    for line in reader.split(b'\n') {
        let line = line.with_context(|| format!("Failed to read sequences from {}", path.display()))?;
        let seq = line.strip_suffix(b"\r").unwrap_or(&line);
        if seq.is_empty() {
            continue;
        }
        write_line(out, seq, kind)?;
    }

    Ok(())
}

fn write_line<W: Write>(out: &mut W, seq: &[u8], kind: DigestKind) -> Result<()> {
    write_fingerprint(out, seq, kind)?;
    out.write_all(b"\t")?;
    out.write_all(seq)?;
    out.write_all(b"\n")?;
    Ok(())
}
