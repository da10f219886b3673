use clap::{Arg, ArgAction, Command, arg};

pub const DIGEST_CMD: &str = "digest";

pub fn create_digest_cli() -> Command {
    Command::new(DIGEST_CMD)
        .about("Fingerprint sequences. Case and U/T spelling do not change the result.")
        .arg(
            Arg::new("sequences")
                .help("Sequences to fingerprint")
                .num_args(0..)
                .action(ArgAction::Append),
        )
        .arg(
            arg!(--input <input>)
                .help("File with one sequence per line (plain, gzip or bzip2)"),
        )
        .arg(
            arg!(--digest <digest>)
                .help("Digest family: sha1 or md5 [default: sha1]"),
        )
}
