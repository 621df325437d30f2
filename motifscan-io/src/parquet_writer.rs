use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use motifscan_summary::{ColumnRef, ColumnarSummary};

use crate::error::Result;

///
/// Convert a summary into a single Arrow record batch.
///
/// Text and strand columns become `Utf8`, coordinates `UInt64` and scores `Float64`.
///
pub fn summary_to_record_batch(summary: &ColumnarSummary) -> Result<RecordBatch> {
    let mut fields: Vec<Field> = Vec::new();
    let mut arrays: Vec<ArrayRef> = Vec::new();

    for (name, column) in summary.columns() {
        let (data_type, array): (DataType, ArrayRef) = match column {
            ColumnRef::Text(v) => (
                DataType::Utf8,
                Arc::new(StringArray::from_iter_values(v.iter())),
            ),
            ColumnRef::Integer(v) => (DataType::UInt64, Arc::new(UInt64Array::from(v.to_vec()))),
            ColumnRef::Float(v) => (DataType::Float64, Arc::new(Float64Array::from(v.to_vec()))),
            ColumnRef::Strand(v) => (
                DataType::Utf8,
                Arc::new(StringArray::from_iter_values(v.iter().map(|s| s.as_str()))),
            ),
        };
        fields.push(Field::new(name, data_type, false));
        arrays.push(array);
    }

    let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?;
    Ok(batch)
}

///
/// Write the summary to disk as a parquet file
///
/// # Arguments
/// - summary: the assembled hits
/// - path: the path to the file to dump to
///
pub fn write_parquet<T: AsRef<Path>>(summary: &ColumnarSummary, path: T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let batch = summary_to_record_batch(summary)?;
    let file = std::fs::File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}
