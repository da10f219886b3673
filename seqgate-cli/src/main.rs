mod config;
mod detect;
mod digest;
mod report;
mod sample;

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, ArgMatches, Command, arg};
use log::debug;

use config::SeqgateConfig;
use report::FatalReporter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "seqgate";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Gatekeeping for sequence inputs: detect codecs and record types, fingerprint sequences and draw unbiased random numbers.")
        .subcommand_required(true)
        .arg(
            arg!(--config <config>)
                .help("TOML file with default settings")
                .global(true),
        )
        .arg(
            arg!(--log <log>)
                .help("Also write fatal errors to this file")
                .global(true),
        )
        .arg(
            arg!(-v --verbose)
                .help("Log progress at info level")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(detect::cli::create_detect_cli())
        .subcommand(digest::cli::create_digest_cli())
        .subcommand(sample::cli::create_sample_cli())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<SeqgateConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => {
            let config = SeqgateConfig::try_from(Path::new(path))
                .with_context(|| format!("Invalid config file {}", path))?;
            Ok(config)
        }
        None => Ok(SeqgateConfig::default()),
    }
}

fn run(matches: &ArgMatches, config: &SeqgateConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match matches.subcommand() {
        //
        // DETECT
        //
        Some((detect::cli::DETECT_CMD, matches)) => {
            detect::handlers::run_detect(matches, config, &mut out)?;
        }

        //
        // DIGEST
        //
        Some((digest::cli::DIGEST_CMD, matches)) => {
            digest::handlers::run_digest(matches, config, &mut out)?;
        }

        //
        // SAMPLE
        //
        Some((sample::cli::SAMPLE_CMD, matches)) => {
            sample::handlers::run_sample(matches, config, &mut out)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_parser().get_matches();
    init_logging(matches.get_flag("verbose"));

    let reporter = FatalReporter::new(matches.get_one::<String>("log").map(PathBuf::from));

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            reporter.fatal(&format!("{:#}", e));
            return ExitCode::FAILURE;
        }
    };
    let reporter = reporter.or_log(config.log.clone());
    if let Some(log) = reporter.log() {
        debug!("Mirroring fatal errors to {}", log.display());
    }

    match run(&matches, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.fatal(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
