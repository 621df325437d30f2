use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use flate2::read::MultiGzDecoder;
use log::debug;

use motifscan_core::models::Strand;
use motifscan_core::progress::{NoProgress, ProgressSink};
use motifscan_summary::{Column, ColumnKind, ColumnarSummary, HitTable, assemble};

use crate::consts::{COMMENT_PREFIX, STDIN_PATH};
use crate::error::{Result, SummaryIoError};

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> io::Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for a gzipped file, a plain file, or stdin when given `-`.
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> io::Result<BufReader<Box<dyn Read>>> {
    if file_path_str == STDIN_PATH {
        Ok(BufReader::new(Box::new(io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}

enum ColumnBuilder {
    Text(Vec<String>),
    Integer(Vec<u64>),
    Float(Vec<f64>),
    Strand(Vec<Strand>),
}

impl ColumnBuilder {
    // names outside the schema are kept as text so assembly can reject them
    fn for_name(name: &str) -> Self {
        match ColumnKind::for_column(name).unwrap_or(ColumnKind::Text) {
            ColumnKind::Text => ColumnBuilder::Text(Vec::new()),
            ColumnKind::Integer => ColumnBuilder::Integer(Vec::new()),
            ColumnKind::Float => ColumnBuilder::Float(Vec::new()),
            ColumnKind::Strand => ColumnBuilder::Strand(Vec::new()),
        }
    }

    fn push(&mut self, value: &str) -> std::result::Result<(), String> {
        match self {
            ColumnBuilder::Text(v) => v.push(value.to_string()),
            ColumnBuilder::Integer(v) => v.push(
                value
                    .parse::<u64>()
                    .map_err(|e| format!("invalid integer '{}': {}", value, e))?,
            ),
            ColumnBuilder::Float(v) => v.push(
                value
                    .parse::<f64>()
                    .map_err(|e| format!("invalid number '{}': {}", value, e))?,
            ),
            ColumnBuilder::Strand(v) => v.push(Strand::from_str(value).map_err(|e| e.to_string())?),
        }
        Ok(())
    }
}

impl From<ColumnBuilder> for Column {
    fn from(builder: ColumnBuilder) -> Self {
        match builder {
            ColumnBuilder::Text(v) => Column::Text(v),
            ColumnBuilder::Integer(v) => Column::Integer(v),
            ColumnBuilder::Float(v) => Column::Float(v),
            ColumnBuilder::Strand(v) => Column::Strand(v),
        }
    }
}

///
/// Read a tab separated hit table from disk.
///
/// The first line that is not empty and not a `#` comment is the header; its names pick
/// the value type of each column. Files ending in `.gz` are decompressed on the fly.
///
/// # Arguments
/// - path: path to the hit table
///
pub fn read_hit_table(path: &Path) -> Result<HitTable> {
    read_hit_table_with_progress(path, &NoProgress)
}

/// [read_hit_table], reporting every parsed hit to `progress`.
pub fn read_hit_table_with_progress(
    path: &Path,
    progress: &dyn ProgressSink,
) -> Result<HitTable> {
    let reader = get_dynamic_reader(path)?;
    read_hit_table_from(reader, progress)
}

///
/// Parse a hit table from any buffered reader.
///
/// Every data line must have as many fields as the header, and header names must be unique.
///
pub fn read_hit_table_from<R: BufRead>(reader: R, progress: &dyn ProgressSink) -> Result<HitTable> {
    progress.start(None, "Reading hit table");

    match parse_hit_table(reader, progress) {
        Ok((table, num_hits)) => {
            progress.finish(&format!("Read {} hits", num_hits));
            Ok(table)
        }
        Err(e) => {
            progress.finish("Failed to read hit table");
            Err(e)
        }
    }
}

fn parse_hit_table<R: BufRead>(reader: R, progress: &dyn ProgressSink) -> Result<(HitTable, u64)> {
    let mut names: Vec<String> = Vec::new();
    let mut builders: Vec<ColumnBuilder> = Vec::new();
    let mut num_hits: u64 = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = idx + 1;

        if line.trim().is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();

        if names.is_empty() {
            names = parse_header(&fields, line_number)?;
            builders = names.iter().map(|n| ColumnBuilder::for_name(n)).collect();
            debug!("Hit table columns: {:?}", names);
            continue;
        }

        if fields.len() != names.len() {
            return Err(SummaryIoError::Parse {
                line: line_number,
                message: format!(
                    "expected {} tab separated fields, found {}",
                    names.len(),
                    fields.len()
                ),
            });
        }

        for ((builder, value), name) in builders.iter_mut().zip(fields).zip(&names) {
            builder
                .push(value.trim())
                .map_err(|message| SummaryIoError::Parse {
                    line: line_number,
                    message: format!("column '{}': {}", name, message),
                })?;
        }

        num_hits += 1;
        progress.advance(1);
    }

    if names.is_empty() {
        return Err(SummaryIoError::MissingHeader);
    }

    let mut table = HitTable::new();
    for (name, builder) in names.into_iter().zip(builders) {
        table.insert_column(name, Column::from(builder));
    }

    Ok((table, num_hits))
}

fn parse_header(fields: &[&str], line_number: usize) -> Result<Vec<String>> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut names: Vec<String> = Vec::with_capacity(fields.len());

    for field in fields {
        let name = field.trim();
        if !seen.insert(name) {
            return Err(SummaryIoError::Parse {
                line: line_number,
                message: format!("duplicate column '{}'", name),
            });
        }
        names.push(name.to_string());
    }

    Ok(names)
}

///
/// Read a hit table and assemble it into a summary in one step.
///
/// # Arguments
/// - reader: buffered hit table source
/// - include_qvalue: carry the q-value column through
/// - progress: receives one update per parsed hit
///
pub fn read_summary_from<R: BufRead>(
    reader: R,
    include_qvalue: bool,
    progress: &dyn ProgressSink,
) -> Result<ColumnarSummary> {
    let table = read_hit_table_from(reader, progress)?;
    Ok(assemble(&table, include_qvalue)?)
}

/// [read_summary_from] for a file on disk.
pub fn read_summary(path: &Path, include_qvalue: bool) -> Result<ColumnarSummary> {
    read_summary_from(get_dynamic_reader(path)?, include_qvalue, &NoProgress)
}
