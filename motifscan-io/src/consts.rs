pub const GFF_VERSION_HEADER: &str = "##gff-version 3";
pub const GFF_SOURCE: &str = "motifscan";
pub const GFF_FEATURE_TYPE: &str = "nucleotide_motif";
pub const GFF_PHASE: &str = ".";

pub const STDIN_PATH: &str = "-";
pub const COMMENT_PREFIX: char = '#';
