use clap::{Arg, ArgAction, Command};

pub const DETECT_CMD: &str = "detect";

pub fn create_detect_cli() -> Command {
    Command::new(DETECT_CMD)
        .about("Report the compression codec and record type (FASTA/FASTQ) of sequence files.")
        .arg(
            Arg::new("files")
                .help("Sequence files, plain, gzip or bzip2 compressed")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append),
        )
}
