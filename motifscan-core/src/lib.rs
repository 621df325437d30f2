//! # motifscan-core
//!
//! Core building blocks for scanning genomic sequence with position-specific motif models:
//!
//! - the canonical `A`/`C`/`G`/`T` alphabet, its complement mapping and reverse complements
//! - pseudocount correction and the fast base-2 logarithm used to turn probabilities into
//!   log-odds scores
//! - probability and score matrices that score a motif window on either strand
//! - the hit record model shared by the summary assembler and the writers
//!
//! Everything in this crate is a pure function over its arguments. External concerns like
//! checking for helper tools or drawing progress bars are expressed as traits
//! ([deps::DependencyCheck], [progress::ProgressSink]) and implemented by callers.
//!
//! # Example
//!
//! ```
//! use motifscan_core::scoring::{corrected_probability, log2_fast};
//! use motifscan_core::alphabet::reverse_complement;
//!
//! let score = log2_fast(corrected_probability(0.5)).unwrap();
//! assert!((score + 1.0).abs() < 1e-9);
//!
//! assert_eq!(reverse_complement("AACG").unwrap(), "CGTT");
//! ```
pub mod alphabet;
pub mod consts;
pub mod deps;
pub mod errors;
pub mod models;
pub mod progress;
pub mod scoring;
pub mod utils;

// re-exports
pub use alphabet::{Nucleotide, complement, reverse_complement};
pub use errors::*;
pub use models::{HitRecord, Strand};
pub use scoring::{approximately_equal, corrected_probability, log2_fast};
