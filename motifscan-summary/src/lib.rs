//! # Hit summary assembly
//!
//! Scored motif hits arrive as a [HitTable]: named, typed columns produced by a scan. [assemble]
//! checks the table against the fixed hit schema and returns a [ColumnarSummary] with the
//! columns in schema order, ready to be handed to a writer.
//!
//! ```
//! use motifscan_summary::{HitTable, assemble};
//!
//! let table = HitTable::from_records(&[], false);
//! let summary = assemble(&table, false).unwrap();
//! assert_eq!(summary.columns().len(), 10);
//! assert_eq!(summary.num_rows(), 0);
//! ```
pub mod consts;
pub mod errors;
pub mod summary;
pub mod table;

// re-exports
pub use consts::*;
pub use errors::*;
pub use summary::*;
pub use table::*;
