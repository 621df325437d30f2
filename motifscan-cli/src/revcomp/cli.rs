use clap::{Arg, Command};

pub const REVCOMP_CMD: &str = "revcomp";

pub fn create_revcomp_cli() -> Command {
    Command::new(REVCOMP_CMD)
        .about("Print the reverse complement of an A/C/G/T sequence.")
        .arg(Arg::new("sequence").required(true))
}
