use std::fmt::{self, Display};

use motifscan_core::models::{HitRecord, Strand};

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Text,
    Integer,
    Float,
    Strand,
}

impl Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Text => write!(f, "text"),
            ColumnKind::Integer => write!(f, "integer"),
            ColumnKind::Float => write!(f, "float"),
            ColumnKind::Strand => write!(f, "strand"),
        }
    }
}

impl ColumnKind {
    ///
    /// The value type a schema column must hold, or `None` for names outside the schema.
    ///
    pub fn for_column(name: &str) -> Option<ColumnKind> {
        match name {
            MOTIF_ID | MOTIF_ALT_ID | SEQUENCE_NAME | MATCHED_SEQUENCE | REFERENCE => {
                Some(ColumnKind::Text)
            }
            START | STOP => Some(ColumnKind::Integer),
            SCORE | P_VALUE | Q_VALUE => Some(ColumnKind::Float),
            STRAND => Some(ColumnKind::Strand),
            _ => None,
        }
    }
}

/// Values of one named column of a [HitTable].
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Text(Vec<String>),
    Integer(Vec<u64>),
    Float(Vec<f64>),
    Strand(Vec<Strand>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Text(v) => v.len(),
            Column::Integer(v) => v.len(),
            Column::Float(v) => v.len(),
            Column::Strand(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::Text(_) => ColumnKind::Text,
            Column::Integer(_) => ColumnKind::Integer,
            Column::Float(_) => ColumnKind::Float,
            Column::Strand(_) => ColumnKind::Strand,
        }
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Column::Text(values)
    }
}

impl From<Vec<&str>> for Column {
    fn from(values: Vec<&str>) -> Self {
        Column::Text(values.into_iter().map(String::from).collect())
    }
}

impl From<Vec<u64>> for Column {
    fn from(values: Vec<u64>) -> Self {
        Column::Integer(values)
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Column::Float(values)
    }
}

impl From<Vec<Strand>> for Column {
    fn from(values: Vec<Strand>) -> Self {
        Column::Strand(values)
    }
}

///
/// Scored hits as named columns, in insertion order.
///
/// Columns are independent vectors, so a table may be ragged or carry unexpected
/// columns; [crate::assemble] is where the schema gets enforced.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitTable {
    columns: Vec<(String, Column)>,
}

impl HitTable {
    pub fn new() -> Self {
        HitTable::default()
    }

    ///
    /// Add a column, replacing any existing column with the same name in place.
    ///
    /// # Returns
    /// The replaced column, if there was one.
    ///
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> Option<Column> {
        let name = name.into();
        let column = column.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, column)),
            None => {
                self.columns.push((name, column));
                None
            }
        }
    }

    /// Builder form of [HitTable::insert_column].
    pub fn with_column(mut self, name: impl Into<String>, column: impl Into<Column>) -> Self {
        self.insert_column(name, column);
        self
    }

    pub fn remove_column(&mut self, name: &str) -> Option<Column> {
        let idx = self.columns.iter().position(|(n, _)| n == name)?;
        Some(self.columns.remove(idx).1)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, column)| column)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    ///
    /// Number of hits in the table: the length of the `motif_id` column, falling back
    /// to the first column when there is none.
    ///
    pub fn num_rows(&self) -> usize {
        self.column(MOTIF_ID)
            .or_else(|| self.columns.first().map(|(_, column)| column))
            .map_or(0, Column::len)
    }

    ///
    /// Lay out hit records as schema columns.
    ///
    /// # Arguments
    /// - records: the hits, already in output order
    /// - with_qvalue: add a `q-value` column; hits without a q-value get `NaN`
    ///
    pub fn from_records(records: &[HitRecord], with_qvalue: bool) -> Self {
        let text = |f: fn(&HitRecord) -> &String| -> Column {
            Column::Text(records.iter().map(|r| f(r).clone()).collect())
        };

        let mut table = HitTable::new()
            .with_column(MOTIF_ID, text(|r| &r.motif_id))
            .with_column(MOTIF_ALT_ID, text(|r| &r.motif_alt_id))
            .with_column(SEQUENCE_NAME, text(|r| &r.sequence_name))
            .with_column(START, records.iter().map(|r| r.start).collect::<Vec<u64>>())
            .with_column(STOP, records.iter().map(|r| r.stop).collect::<Vec<u64>>())
            .with_column(STRAND, records.iter().map(|r| r.strand).collect::<Vec<Strand>>())
            .with_column(SCORE, records.iter().map(|r| r.score).collect::<Vec<f64>>())
            .with_column(P_VALUE, records.iter().map(|r| r.p_value).collect::<Vec<f64>>())
            .with_column(MATCHED_SEQUENCE, text(|r| &r.matched_sequence))
            .with_column(REFERENCE, text(|r| &r.reference));

        if with_qvalue {
            let q_values: Vec<f64> = records
                .iter()
                .map(|r| r.q_value.unwrap_or(f64::NAN))
                .collect();
            table.insert_column(Q_VALUE, q_values);
        }

        table
    }
}
