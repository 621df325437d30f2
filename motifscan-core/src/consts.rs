/// The scoring alphabet, in matrix row order. `N` and IUPAC ambiguity codes are not part of it.
pub const DNA_ALPHABET: [char; 4] = ['A', 'C', 'G', 'T'];

/// Replaces zero probabilities before taking logarithms.
pub const PSEUDOCOUNT: f64 = 0.000_000_5;

/// Reciprocal of `ln 2`, so that `log2(x) == ln(x) * LOG_FACTOR`.
pub const LOG_FACTOR: f64 = std::f64::consts::LOG2_E;

/// Uniform nucleotide background used when none is supplied.
pub const UNIFORM_BACKGROUND: [f64; 4] = [0.25; 4];

/// Tools a graph-based scan shells out to.
pub const EXTERNAL_DEPENDENCIES: [&str; 3] = ["tabix", "vg", "dot"];

/// Number of human autosomes scanned by default.
pub const NUM_AUTOSOMES: u8 = 22;

pub const SEX_CHROMOSOMES: [&str; 2] = ["X", "Y"];
