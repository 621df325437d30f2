use std::fmt::{self, Display};

use crate::models::Strand;

///
/// One occurrence of a motif on one strand of a sequence.
///
/// Field order follows the summary schema: `motif_id, motif_alt_id, sequence_name, start,
/// stop, strand, score, p-value, matched_sequence, reference[, q-value]`.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitRecord {
    pub motif_id: String,
    pub motif_alt_id: String,
    pub sequence_name: String,
    pub start: u64,
    pub stop: u64,
    pub strand: Strand,
    pub score: f64,
    #[cfg_attr(feature = "serde", serde(rename = "p-value"))]
    pub p_value: f64,
    pub matched_sequence: String,
    pub reference: String,

    #[cfg_attr(
        feature = "serde",
        serde(rename = "q-value", default, skip_serializing_if = "Option::is_none")
    )]
    pub q_value: Option<f64>,
}

impl HitRecord {
    /// Number of bases covered by the hit, both ends inclusive.
    pub fn width(&self) -> u64 {
        self.stop.saturating_sub(self.start) + 1
    }

    ///
    /// Get the tab separated line of this hit, in schema order.
    ///
    /// Values are written as is. Files should go through the summary writers, which reject
    /// text containing tabs or line breaks.
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}{}",
            self.motif_id,
            self.motif_alt_id,
            self.sequence_name,
            self.start,
            self.stop,
            self.strand,
            self.score,
            self.p_value,
            self.matched_sequence,
            self.reference,
            self.q_value.map_or(String::new(), |q| format!("\t{}", q)),
        )
    }
}

impl Display for HitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
