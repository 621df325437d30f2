use std::io;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{debug, info, warn};

use motifscan_core::utils::{join_output_path, unique_values};
use motifscan_io::{SummaryWrite, get_dynamic_reader_w_stdin, read_summary_from};
use motifscan_summary::ColumnarSummary;

use crate::config::{MotifscanConfig, OutputFormat};
use crate::progress::ConsoleProgress;
use crate::summarize::cli::DEFAULT_OUT_PREFIX;

pub fn run_summarize(matches: &ArgMatches) -> Result<()> {
    let hits = matches
        .get_one::<String>("hits")
        .expect("A path to a hit table is required.");

    let config = match matches.get_one::<String>("config") {
        Some(path) => MotifscanConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => MotifscanConfig::default(),
    };

    // flags win over the configuration file
    let qvalue = flag_override(matches, "qvalue", "no-qvalue").unwrap_or(config.summary.qvalue);
    let gzip = flag_override(matches, "gzip", "no-gzip").unwrap_or(config.output.gzip);
    let format = match matches.get_one::<String>("format") {
        Some(format) => OutputFormat::from_str(format)?,
        None => config.output.format,
    };

    let outdir = matches
        .get_one::<String>("outdir")
        .map_or(Path::new("."), |dir| Path::new(dir));
    let default_out = join_output_path(outdir, DEFAULT_OUT_PREFIX, format.extension(gzip))
        .to_string_lossy()
        .to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let progress = ConsoleProgress::new(!matches.get_flag("no-progress"));
    let reader = get_dynamic_reader_w_stdin(hits)
        .with_context(|| format!("Failed to open hit table: {}", hits))?;
    let summary = read_summary_from(reader, qvalue, &progress)
        .with_context(|| format!("Failed to summarize hit table: {}", hits))?;

    info!(
        "Assembled {} hits into {} columns",
        summary.num_rows(),
        summary.column_names().len()
    );
    debug!(
        "Motifs in summary: {}",
        unique_values(summary.motif_ids(), None).join(", ")
    );

    write_summary(&summary, format, gzip, output)?;

    Ok(())
}

/// `Some(true)` for `on`, `Some(false)` for `off`, `None` when neither flag was given.
fn flag_override(matches: &ArgMatches, on: &str, off: &str) -> Option<bool> {
    if matches.get_flag(off) {
        Some(false)
    } else if matches.get_flag(on) {
        Some(true)
    } else {
        None
    }
}

fn write_summary(
    summary: &ColumnarSummary,
    format: OutputFormat,
    gzip: bool,
    output: &str,
) -> Result<()> {
    if gzip && format != OutputFormat::Tsv {
        warn!("--gzip only applies to tsv output, writing uncompressed {}", format);
    }

    if output == "-" {
        let stdout = io::stdout().lock();
        match format {
            OutputFormat::Tsv => summary.write_tsv_to(stdout)?,
            OutputFormat::Gff => summary.write_gff_to(stdout)?,
            OutputFormat::Json => summary.write_json_to(stdout)?,
            OutputFormat::Parquet => anyhow::bail!("Parquet output can't be written to stdout"),
        }
        return Ok(());
    }

    match format {
        OutputFormat::Tsv if gzip => summary.write_tsv_gz(output)?,
        OutputFormat::Tsv => summary.write_tsv(output)?,
        OutputFormat::Gff => summary.write_gff(output)?,
        OutputFormat::Json => summary.write_json(output)?,
        #[cfg(feature = "parquet")]
        OutputFormat::Parquet => motifscan_io::parquet_writer::write_parquet(summary, output)?,
        #[cfg(not(feature = "parquet"))]
        OutputFormat::Parquet => {
            anyhow::bail!(
                "Parquet output requires motifscan to be built with the `parquet` feature"
            )
        }
    }

    info!("Summary written to {}", output);

    Ok(())
}
