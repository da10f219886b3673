use clap::{Command, arg, value_parser};

pub const SAMPLE_CMD: &str = "sample";
pub const DEFAULT_COUNT: &str = "1";

pub fn create_sample_cli() -> Command {
    Command::new(SAMPLE_CMD)
        .about("Draw uniform random integers from [0, N).")
        .arg(
            arg!(--below <below>)
                .help("Exclusive upper bound N")
                .required(true)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            arg!(--count <count>)
                .help("Number of draws")
                .default_value(DEFAULT_COUNT)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            arg!(--seed <seed>)
                .help("Seed for reproducible draws; 0 seeds from OS entropy")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            arg!(--large)
                .help("Allow bounds beyond 2^31 by combining several raw values per draw")
                .action(clap::ArgAction::SetTrue),
        )
}
