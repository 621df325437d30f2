//! # Input/Output for motif hit summaries.
//!
//! Reads scored hit tables from (optionally gzip'd) tab separated files into a
//! [motifscan_summary::HitTable], and writes assembled
//! [motifscan_summary::ColumnarSummary] values to disk as TSV, GFF3, JSON or,
//! with the `parquet` feature, Parquet.
//!
pub mod consts;
pub mod error;
pub mod reader;
pub mod writer;
#[cfg(feature = "parquet")]
pub mod parquet_writer;

// re-expose core functions
pub use consts::*;
pub use error::*;
pub use reader::*;
pub use writer::*;
