use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{debug, info};

use motifscan_core::deps::{DependencyCheck, check_dependencies};

use crate::config::MotifscanConfig;

///
/// Looks tools up in a list of directories, by default the entries of `PATH`.
///
pub struct PathLookup {
    dirs: Vec<PathBuf>,
}

impl PathLookup {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        PathLookup { dirs }
    }

    pub fn from_env() -> Self {
        let dirs = std::env::var_os("PATH")
            .map(|paths| std::env::split_paths(&paths).collect())
            .unwrap_or_default();
        PathLookup { dirs }
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file() || path.with_extension("exe").is_file()
}

impl DependencyCheck for PathLookup {
    fn is_available(&self, tool: &str) -> bool {
        self.dirs.iter().any(|dir| {
            let candidate = dir.join(tool);
            debug!("Looking for {} at {}", tool, candidate.display());
            is_executable(&candidate)
        })
    }
}

pub fn run_deps(matches: &ArgMatches) -> Result<()> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => MotifscanConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => MotifscanConfig::default(),
    };

    let tools: Vec<String> = match matches.get_many::<String>("tools") {
        Some(tools) => tools.cloned().collect(),
        None => config.dependencies.tools,
    };
    let tools: Vec<&str> = tools.iter().map(String::as_str).collect();

    let missing = check_dependencies(&PathLookup::from_env(), &tools);
    if !missing.is_empty() {
        anyhow::bail!(
            "Missing external dependencies: {}. Install them and make sure they are on PATH",
            missing.join(", ")
        );
    }

    info!("All external dependencies found: {}", tools.join(", "));
    println!("All dependencies satisfied");

    Ok(())
}
