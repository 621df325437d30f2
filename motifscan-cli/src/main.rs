mod config;
mod deps;
mod progress;
mod revcomp;
mod summarize;

use anyhow::Result;
use clap::{ArgAction, Command, arg};
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "motifscan";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Score motif occurrences in genomic sequence and summarize significant hits.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose "Increase logging verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(summarize::cli::create_summarize_cli())
        .subcommand(deps::cli::create_deps_cli())
        .subcommand(revcomp::cli::create_revcomp_cli())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, overrides the flag
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        //
        // SUMMARIZE
        //
        Some((summarize::cli::SUMMARIZE_CMD, matches)) => {
            summarize::handlers::run_summarize(matches)?;
        }

        //
        // DEPENDENCY GATE
        //
        Some((deps::cli::DEPS_CMD, matches)) => {
            deps::handlers::run_deps(matches)?;
        }

        //
        // REVERSE COMPLEMENT
        //
        Some((revcomp::cli::REVCOMP_CMD, matches)) => {
            revcomp::handlers::run_revcomp(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;

    #[rstest]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_verbose_is_global() {
        let matches = build_parser()
            .try_get_matches_from(["motifscan", "revcomp", "ACGT", "-vv"])
            .unwrap();
        assert_eq!(matches.get_count("verbose"), 2);
    }
}
