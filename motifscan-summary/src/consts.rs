pub const MOTIF_ID: &str = "motif_id";
pub const MOTIF_ALT_ID: &str = "motif_alt_id";
pub const SEQUENCE_NAME: &str = "sequence_name";
pub const START: &str = "start";
pub const STOP: &str = "stop";
pub const STRAND: &str = "strand";
pub const SCORE: &str = "score";
pub const P_VALUE: &str = "p-value";
pub const MATCHED_SEQUENCE: &str = "matched_sequence";
pub const REFERENCE: &str = "reference";
pub const Q_VALUE: &str = "q-value";

/// Summary columns in output order, without the optional q-value.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    MOTIF_ID,
    MOTIF_ALT_ID,
    SEQUENCE_NAME,
    START,
    STOP,
    STRAND,
    SCORE,
    P_VALUE,
    MATCHED_SEQUENCE,
    REFERENCE,
];

pub const NUM_COLUMNS: usize = REQUIRED_COLUMNS.len();
pub const NUM_COLUMNS_WITH_QVALUE: usize = NUM_COLUMNS + 1;
