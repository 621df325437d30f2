use clap::{Arg, ArgAction, Command, arg};

pub const DEPS_CMD: &str = "deps";

pub fn create_deps_cli() -> Command {
    Command::new(DEPS_CMD)
        .about("Check that the external tools a graph scan needs (tabix, vg, dot) are on PATH.")
        .arg(
            Arg::new("tools")
                .help("Tools to look for instead of the configured ones")
                .action(ArgAction::Append),
        )
        .arg(arg!(--config <config> "Path to a motifscan.toml configuration file"))
}
