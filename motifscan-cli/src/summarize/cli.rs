use clap::{Arg, Command, arg};

pub const SUMMARIZE_CMD: &str = "summarize";
pub const DEFAULT_OUT_PREFIX: &str = "motifscan_hits";

pub fn create_summarize_cli() -> Command {
    Command::new(SUMMARIZE_CMD)
        .about("Validate a table of scored motif hits and write it out as a fixed-schema summary.")
        .arg(
            Arg::new("hits")
                .help("Tab separated hit table (optionally .gz), or '-' for stdin")
                .required(true),
        )
        .arg(arg!(-o --output <output> "Output file, or '-' for stdout"))
        .arg(arg!(
            --outdir <outdir> "Directory for the default output file (ignored with --output)"
        ))
        .arg(arg!(-f --format <format> "Output format: tsv, gff, json or parquet"))
        .arg(arg!(--qvalue "Carry the q-value column through to the summary"))
        .arg(
            arg!(--"no-qvalue" "Leave out the q-value column, even if the config asks for it")
                .conflicts_with("qvalue"),
        )
        .arg(arg!(--gzip "Compress tsv output"))
        .arg(
            arg!(--"no-gzip" "Write plain tsv, even if the config asks for gzip")
                .conflicts_with("gzip"),
        )
        .arg(arg!(--config <config> "Path to a motifscan.toml configuration file"))
        .arg(arg!(--"no-progress" "Don't draw a progress spinner"))
}
