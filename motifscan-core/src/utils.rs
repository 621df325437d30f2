use std::collections::HashSet;
use std::hash::Hash;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::consts::{NUM_AUTOSOMES, SEX_CHROMOSOMES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotifFileFormat {
    Jaspar,
    Meme,
    Unknown, // anything the motif parsers won't accept
}

impl FromStr for MotifFileFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jaspar" => Ok(MotifFileFormat::Jaspar),
            "meme" => Ok(MotifFileFormat::Meme),
            _ => Ok(MotifFileFormat::Unknown),
        }
    }
}

impl MotifFileFormat {
    ///
    /// Guess the motif file format from the path extension.
    ///
    /// Only the final extension is looked at: `motifs.jaspar` is JASPAR,
    /// `motifs.meme.txt` is unknown.
    ///
    pub fn from_path(path: &Path) -> MotifFileFormat {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| MotifFileFormat::from_str(e).ok())
            .unwrap_or(MotifFileFormat::Unknown)
    }
}

/// Human chromosomes `1..=22`, `X` and `Y`.
pub fn default_chromosomes() -> Vec<String> {
    (1..=NUM_AUTOSOMES)
        .map(|i| i.to_string())
        .chain(SEX_CHROMOSOMES.iter().map(|c| c.to_string()))
        .collect()
}

///
/// Pick the chromosomes to scan.
///
/// # Arguments
/// - requested: chromosomes given by the user, possibly none
///
pub fn initialize_chromosomes(requested: &[String]) -> Vec<String> {
    if requested.is_empty() {
        default_chromosomes()
    } else {
        requested.to_vec()
    }
}

///
/// Collect unique values in first-seen order.
///
/// # Arguments
/// - values: values to scan
/// - limit: stop as soon as this many unique values are found
///
pub fn unique_values<T: Eq + Hash + Clone>(values: &[T], limit: Option<usize>) -> Vec<T> {
    let mut seen: HashSet<&T> = HashSet::new();
    let mut unique: Vec<T> = Vec::new();

    for value in values {
        if limit.is_some_and(|l| unique.len() >= l) {
            break;
        }
        if seen.insert(value) {
            unique.push(value.clone());
        }
    }

    unique
}

/// True when both slices have the same length and the same set of elements.
pub fn same_elements<T: Eq + Hash>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().collect::<HashSet<_>>() == b.iter().collect::<HashSet<_>>()
}

///
/// Build `<dir>/<name><extension>` without doubling the separator.
///
pub fn join_output_path(dir: &Path, name: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}{}", name, extension))
}
