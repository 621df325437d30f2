use std::fmt::{self, Display};
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use motifscan_core::consts::EXTERNAL_DEPENDENCIES;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Tsv,
    Gff,
    Json,
    Parquet,
}

impl OutputFormat {
    /// File extension for default output names, including the leading dot.
    pub fn extension(&self, gzip: bool) -> &'static str {
        match (self, gzip) {
            (OutputFormat::Tsv, false) => ".tsv",
            (OutputFormat::Tsv, true) => ".tsv.gz",
            (OutputFormat::Gff, _) => ".gff",
            (OutputFormat::Json, _) => ".json",
            (OutputFormat::Parquet, _) => ".parquet",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(OutputFormat::Tsv),
            "gff" | "gff3" => Ok(OutputFormat::Gff),
            "json" => Ok(OutputFormat::Json),
            "parquet" => Ok(OutputFormat::Parquet),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Tsv => write!(f, "tsv"),
            OutputFormat::Gff => write!(f, "gff"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Parquet => write!(f, "parquet"),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct SummaryConfig {
    #[serde(default)]
    pub qvalue: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub gzip: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DependencyConfig {
    pub tools: Vec<String>,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        DependencyConfig {
            tools: EXTERNAL_DEPENDENCIES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

///
/// Settings read from a `motifscan.toml` file. Command line flags take precedence.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct MotifscanConfig {
    #[serde(default)]
    pub summary: SummaryConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub dependencies: DependencyConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown output format '{0}'. It must be one of `tsv`, `gff`, `json` or `parquet`")]
    InvalidOutputFormat(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl TryFrom<&Path> for MotifscanConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use std::path::PathBuf;

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../tests/data/config/motifscan.toml");
        let config = MotifscanConfig::try_from(path.as_path()).unwrap();

        assert!(config.summary.qvalue);
        assert_eq!(config.output.format, OutputFormat::Gff);
        assert!(!config.output.gzip);
        assert_eq!(config.dependencies.tools, vec!["tabix", "vg"]);
    }

    #[rstest]
    fn test_missing_sections_use_defaults() {
        let config: MotifscanConfig = toml::from_str("[output]\ngzip = true\n").unwrap();

        assert!(!config.summary.qvalue);
        assert_eq!(config.output.format, OutputFormat::Tsv);
        assert!(config.output.gzip);
        assert_eq!(config.dependencies.tools, vec!["tabix", "vg", "dot"]);
    }

    #[rstest]
    fn test_invalid_format_in_file() {
        let result: Result<MotifscanConfig, _> = toml::from_str("[output]\nformat = \"bed\"\n");
        assert!(result.is_err());
    }

    #[rstest]
    #[case("tsv", OutputFormat::Tsv)]
    #[case("GFF3", OutputFormat::Gff)]
    #[case("json", OutputFormat::Json)]
    #[case("parquet", OutputFormat::Parquet)]
    fn test_output_format_from_str(#[case] input: &str, #[case] expected: OutputFormat) {
        assert_eq!(OutputFormat::from_str(input).unwrap(), expected);
    }

    #[rstest]
    fn test_output_format_extension() {
        assert_eq!(OutputFormat::Tsv.extension(true), ".tsv.gz");
        assert_eq!(OutputFormat::Gff.extension(true), ".gff");
        assert!(OutputFormat::from_str("bed").is_err());
    }

    #[rstest]
    fn test_missing_file() {
        let result = MotifscanConfig::try_from(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
