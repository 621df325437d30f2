use motifscan_core::models::{HitRecord, Strand};

use crate::consts::*;
use crate::errors::{SchemaViolation, SummaryResult};
use crate::table::{Column, ColumnKind, HitTable};

/// Borrowed view of one summary column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnRef<'a> {
    Text(&'a [String]),
    Integer(&'a [u64]),
    Float(&'a [f64]),
    Strand(&'a [Strand]),
}

impl ColumnRef<'_> {
    pub fn len(&self) -> usize {
        match self {
            ColumnRef::Text(v) => v.len(),
            ColumnRef::Integer(v) => v.len(),
            ColumnRef::Float(v) => v.len(),
            ColumnRef::Strand(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnRef::Text(_) => ColumnKind::Text,
            ColumnRef::Integer(_) => ColumnKind::Integer,
            ColumnRef::Float(_) => ColumnKind::Float,
            ColumnRef::Strand(_) => ColumnKind::Strand,
        }
    }

    /// Text form of the value at `row`, as it appears in tabular output.
    pub fn format_value(&self, row: usize) -> Option<String> {
        match self {
            ColumnRef::Text(v) => v.get(row).cloned(),
            ColumnRef::Integer(v) => v.get(row).map(|x| x.to_string()),
            ColumnRef::Float(v) => v.get(row).map(|x| x.to_string()),
            ColumnRef::Strand(v) => v.get(row).map(|x| x.to_string()),
        }
    }
}

///
/// Validated, column oriented hit summary.
///
/// Built only by [assemble]; every column has the same length and the columns
/// come out of [ColumnarSummary::columns] in schema order, q-value last.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnarSummary {
    motif_ids: Vec<String>,
    motif_alt_ids: Vec<String>,
    sequence_names: Vec<String>,
    starts: Vec<u64>,
    stops: Vec<u64>,
    strands: Vec<Strand>,
    scores: Vec<f64>,
    p_values: Vec<f64>,
    matched_sequences: Vec<String>,
    references: Vec<String>,

    q_values: Option<Vec<f64>>,
}

impl ColumnarSummary {
    pub fn num_rows(&self) -> usize {
        self.motif_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    pub fn has_qvalue(&self) -> bool {
        self.q_values.is_some()
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns().into_iter().map(|(name, _)| name).collect()
    }

    ///
    /// Named columns in output order.
    ///
    pub fn columns(&self) -> Vec<(&'static str, ColumnRef<'_>)> {
        let mut columns = vec![
            (MOTIF_ID, ColumnRef::Text(&self.motif_ids)),
            (MOTIF_ALT_ID, ColumnRef::Text(&self.motif_alt_ids)),
            (SEQUENCE_NAME, ColumnRef::Text(&self.sequence_names)),
            (START, ColumnRef::Integer(&self.starts)),
            (STOP, ColumnRef::Integer(&self.stops)),
            (STRAND, ColumnRef::Strand(&self.strands)),
            (SCORE, ColumnRef::Float(&self.scores)),
            (P_VALUE, ColumnRef::Float(&self.p_values)),
            (MATCHED_SEQUENCE, ColumnRef::Text(&self.matched_sequences)),
            (REFERENCE, ColumnRef::Text(&self.references)),
        ];
        if let Some(q_values) = &self.q_values {
            columns.push((Q_VALUE, ColumnRef::Float(q_values)));
        }
        columns
    }

    pub fn column(&self, name: &str) -> Option<ColumnRef<'_>> {
        self.columns()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, column)| column)
    }

    pub fn motif_ids(&self) -> &[String] {
        &self.motif_ids
    }

    pub fn sequence_names(&self) -> &[String] {
        &self.sequence_names
    }

    pub fn starts(&self) -> &[u64] {
        &self.starts
    }

    pub fn stops(&self) -> &[u64] {
        &self.stops
    }

    pub fn strands(&self) -> &[Strand] {
        &self.strands
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn p_values(&self) -> &[f64] {
        &self.p_values
    }

    pub fn q_values(&self) -> Option<&[f64]> {
        self.q_values.as_deref()
    }

    /// Hit at `row`, rebuilt from the columns.
    pub fn record(&self, row: usize) -> Option<HitRecord> {
        if row >= self.num_rows() {
            return None;
        }

        Some(HitRecord {
            motif_id: self.motif_ids[row].clone(),
            motif_alt_id: self.motif_alt_ids[row].clone(),
            sequence_name: self.sequence_names[row].clone(),
            start: self.starts[row],
            stop: self.stops[row],
            strand: self.strands[row],
            score: self.scores[row],
            p_value: self.p_values[row],
            matched_sequence: self.matched_sequences[row].clone(),
            reference: self.references[row].clone(),
            q_value: self.q_values.as_ref().map(|q| q[row]),
        })
    }

    /// Iterate over the hits in row order.
    pub fn records(&self) -> impl Iterator<Item = HitRecord> + '_ {
        (0..self.num_rows()).filter_map(move |row| self.record(row))
    }
}

///
/// Validate a hit table and convert it to a [ColumnarSummary].
///
/// Checks run in this order and the first failure is returned:
/// 1. the table has 10 columns, or 11 when `include_qvalue` is set
/// 2. every schema column (and `q-value` when requested) is present
/// 3. every column holds the value type the schema expects
/// 4. every column has as many entries as the table has rows
///
/// The table is only read; the summary owns copies of its columns.
///
/// # Arguments
/// - table: scored hits
/// - include_qvalue: whether the summary carries a q-value column
///
pub fn assemble(table: &HitTable, include_qvalue: bool) -> SummaryResult<ColumnarSummary> {
    let expected = if include_qvalue {
        NUM_COLUMNS_WITH_QVALUE
    } else {
        NUM_COLUMNS
    };
    if table.num_columns() != expected {
        return Err(SchemaViolation::ColumnCount {
            expected,
            found: table.num_columns(),
            qvalue: include_qvalue,
        });
    }

    let required = REQUIRED_COLUMNS
        .iter()
        .chain(include_qvalue.then_some(&Q_VALUE));
    for name in required {
        if table.column(name).is_none() {
            return Err(SchemaViolation::MissingColumn(name.to_string()));
        }
    }

    let summary = ColumnarSummary {
        motif_ids: text_column(table, MOTIF_ID)?,
        motif_alt_ids: text_column(table, MOTIF_ALT_ID)?,
        sequence_names: text_column(table, SEQUENCE_NAME)?,
        starts: integer_column(table, START)?,
        stops: integer_column(table, STOP)?,
        strands: strand_column(table, STRAND)?,
        scores: float_column(table, SCORE)?,
        p_values: float_column(table, P_VALUE)?,
        matched_sequences: text_column(table, MATCHED_SEQUENCE)?,
        references: text_column(table, REFERENCE)?,
        q_values: match include_qvalue {
            true => Some(float_column(table, Q_VALUE)?),
            false => None,
        },
    };

    let num_rows = table.num_rows();
    for (name, column) in summary.columns() {
        if column.len() != num_rows {
            return Err(SchemaViolation::ColumnLength {
                column: name.to_string(),
                expected: num_rows,
                found: column.len(),
            });
        }
    }

    Ok(summary)
}

fn lookup<'a>(table: &'a HitTable, name: &str) -> SummaryResult<&'a Column> {
    table
        .column(name)
        .ok_or_else(|| SchemaViolation::MissingColumn(name.to_string()))
}

fn type_mismatch(name: &str, expected: ColumnKind, found: &Column) -> SchemaViolation {
    SchemaViolation::ColumnType {
        column: name.to_string(),
        expected,
        found: found.kind(),
    }
}

fn text_column(table: &HitTable, name: &str) -> SummaryResult<Vec<String>> {
    match lookup(table, name)? {
        Column::Text(values) => Ok(values.clone()),
        other => Err(type_mismatch(name, ColumnKind::Text, other)),
    }
}

fn integer_column(table: &HitTable, name: &str) -> SummaryResult<Vec<u64>> {
    match lookup(table, name)? {
        Column::Integer(values) => Ok(values.clone()),
        other => Err(type_mismatch(name, ColumnKind::Integer, other)),
    }
}

fn float_column(table: &HitTable, name: &str) -> SummaryResult<Vec<f64>> {
    match lookup(table, name)? {
        Column::Float(values) => Ok(values.clone()),
        other => Err(type_mismatch(name, ColumnKind::Float, other)),
    }
}

fn strand_column(table: &HitTable, name: &str) -> SummaryResult<Vec<Strand>> {
    match lookup(table, name)? {
        Column::Strand(values) => Ok(values.clone()),
        other => Err(type_mismatch(name, ColumnKind::Strand, other)),
    }
}
