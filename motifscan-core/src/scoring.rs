//! Log-odds scoring of motif windows.
//!
//! A motif is a 4 x L probability matrix. Each cell is corrected with a fixed pseudocount,
//! converted with [log2_fast], and compared against a background distribution. A window of
//! sequence is scored by summing the cells selected by its bases, position by position.

use crate::alphabet::{Nucleotide, parse_sequence};
use crate::consts::{LOG_FACTOR, PSEUDOCOUNT, UNIFORM_BACKGROUND};
use crate::errors::ScoringError;
use crate::models::Strand;

///
/// Replace a non-positive probability with the pseudocount.
///
/// The result is always strictly positive, so it can be passed to [log2_fast].
///
#[inline]
pub fn corrected_probability(p: f64) -> f64 {
    if p > 0.0 { p } else { PSEUDOCOUNT }
}

///
/// Base-2 logarithm computed as `ln(value) * LOG_FACTOR`.
///
/// # Arguments
/// - value: must be strictly positive. Route probabilities through
///   [corrected_probability] first.
///
/// # Returns
/// [ScoringError::Domain] for zero, negative or NaN input.
///
#[inline]
pub fn log2_fast(value: f64) -> Result<f64, ScoringError> {
    if value > 0.0 {
        Ok(value.ln() * LOG_FACTOR)
    } else {
        Err(ScoringError::Domain(value))
    }
}

///
/// Check whether `b` lies in the closed band `[a - tolerance, a + tolerance]`.
///
pub fn approximately_equal(a: f64, b: f64, tolerance: f64) -> bool {
    b >= a - tolerance && b <= a + tolerance
}

///
/// Position probability matrix of a motif, one row per base in `A, C, G, T` order.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityMatrix {
    rows: [Vec<f64>; 4],
}

impl ProbabilityMatrix {
    ///
    /// Build a matrix from four equally long rows.
    ///
    /// Column sums are not checked; they come from the motif parser.
    ///
    pub fn new(rows: [Vec<f64>; 4]) -> Result<Self, ScoringError> {
        let lengths = [rows[0].len(), rows[1].len(), rows[2].len(), rows[3].len()];
        if lengths[0] == 0 || lengths.iter().any(|&l| l != lengths[0]) {
            return Err(ScoringError::MatrixShape(lengths));
        }

        for (row, values) in rows.iter().enumerate() {
            for (column, &value) in values.iter().enumerate() {
                if !(0.0..=1.0).contains(&value) {
                    return Err(ScoringError::ProbabilityRange { row, column, value });
                }
            }
        }

        Ok(ProbabilityMatrix { rows })
    }

    /// Motif length `L`.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn probability(&self, base: Nucleotide, position: usize) -> Option<f64> {
        self.rows[base.index()].get(position).copied()
    }

    pub fn row(&self, base: Nucleotide) -> &[f64] {
        &self.rows[base.index()]
    }
}

///
/// Log-odds scores derived from a [ProbabilityMatrix].
///
/// Cell `(b, i)` holds `log2(corrected(p[b][i])) - log2(background[b])`.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    scores: [Vec<f64>; 4],
    min_score: f64,
    max_score: f64,
}

impl ScoreMatrix {
    ///
    /// Convert a probability matrix into log-odds scores against a background.
    ///
    /// # Arguments
    /// - matrix: the motif probabilities
    /// - background: nucleotide frequencies in `A, C, G, T` order; every entry must be positive
    ///
    pub fn from_probabilities(
        matrix: &ProbabilityMatrix,
        background: &[f64; 4],
    ) -> Result<Self, ScoringError> {
        let mut scores: [Vec<f64>; 4] = Default::default();

        for base in Nucleotide::ALL {
            let bg = log2_fast(background[base.index()])?;
            scores[base.index()] = matrix
                .row(base)
                .iter()
                .map(|&p| log2_fast(corrected_probability(p)).map(|s| s - bg))
                .collect::<Result<Vec<f64>, ScoringError>>()?;
        }

        let mut min_score = 0.0;
        let mut max_score = 0.0;
        for i in 0..matrix.width() {
            let column = scores.iter().map(|row| row[i]);
            min_score += column.clone().fold(f64::INFINITY, f64::min);
            max_score += column.fold(f64::NEG_INFINITY, f64::max);
        }

        Ok(ScoreMatrix {
            scores,
            min_score,
            max_score,
        })
    }

    /// Same as [ScoreMatrix::from_probabilities] with a uniform background.
    pub fn with_uniform_background(matrix: &ProbabilityMatrix) -> Result<Self, ScoringError> {
        ScoreMatrix::from_probabilities(matrix, &UNIFORM_BACKGROUND)
    }

    pub fn width(&self) -> usize {
        self.scores[0].len()
    }

    pub fn cell(&self, base: Nucleotide, position: usize) -> Option<f64> {
        self.scores[base.index()].get(position).copied()
    }

    /// Lowest score any window can reach.
    pub fn min_score(&self) -> f64 {
        self.min_score
    }

    /// Highest score any window can reach.
    pub fn max_score(&self) -> f64 {
        self.max_score
    }

    ///
    /// Score a window on the given strand.
    ///
    /// `window` is always the forward strand sequence. For [Strand::Reverse] the motif is
    /// matched against its reverse complement.
    ///
    pub fn score(&self, window: &[Nucleotide], strand: Strand) -> Result<f64, ScoringError> {
        if window.len() != self.width() {
            return Err(ScoringError::WindowLength {
                expected: self.width(),
                found: window.len(),
            });
        }

        let score = match strand {
            Strand::Forward => window
                .iter()
                .enumerate()
                .map(|(i, base)| self.scores[base.index()][i])
                .sum(),
            Strand::Reverse => window
                .iter()
                .rev()
                .enumerate()
                .map(|(i, base)| self.scores[base.complement().index()][i])
                .sum(),
        };

        Ok(score)
    }

    /// Parse `window` (case-insensitive) and score it.
    pub fn score_str(&self, window: &str, strand: Strand) -> Result<f64, ScoringError> {
        let bases = parse_sequence(window)?;
        self.score(&bases, strand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::alphabet::{reverse_complement, reverse_complement_bases};
    use crate::errors::AlphabetError;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn matrix() -> ProbabilityMatrix {
        ProbabilityMatrix::new([
            vec![0.7, 0.0, 0.1, 0.25],
            vec![0.1, 0.9, 0.1, 0.25],
            vec![0.1, 0.1, 0.7, 0.25],
            vec![0.1, 0.0, 0.1, 0.25],
        ])
        .unwrap()
    }

    #[rstest]
    #[case(1.0)]
    #[case(0.5)]
    #[case(1e-12)]
    fn test_corrected_probability_keeps_positive(#[case] p: f64) {
        assert_eq!(corrected_probability(p), p);
    }

    #[rstest]
    fn test_corrected_probability_zero() {
        assert_eq!(corrected_probability(0.0), 0.000_000_5);
        assert_eq!(corrected_probability(-0.0), PSEUDOCOUNT);
    }

    #[rstest]
    fn test_log2_fast() {
        assert!(log2_fast(1.0).unwrap().abs() < 1e-9);
        assert!((log2_fast(0.5).unwrap() + 1.0).abs() < 1e-6);
        assert!((log2_fast(8.0).unwrap() - 3.0).abs() < 1e-12);
    }

    #[rstest]
    fn test_log2_fast_matches_log2() {
        for value in [1e-7, 0.001, 0.25, 0.3, 0.99, 17.0, 1e6] {
            let diff = (log2_fast(value).unwrap() - f64::log2(value)).abs();
            assert!(diff <= 1e-12 * f64::log2(value).abs().max(1.0));
        }
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    fn test_log2_fast_domain(#[case] value: f64) {
        assert!(matches!(log2_fast(value), Err(ScoringError::Domain(_))));
    }

    #[rstest]
    fn test_log2_fast_of_corrected_zero() {
        let score = log2_fast(corrected_probability(0.0)).unwrap();
        assert!((score - f64::log2(PSEUDOCOUNT)).abs() < 1e-9);
    }

    #[rstest]
    #[case(10.0, 10.0, 0.0, true)]
    #[case(10.0, 10.3, 0.2, false)]
    #[case(10.0, 9.9, 0.2, true)]
    #[case(10.0, 9.7, 0.2, false)]
    #[case(-3.5, -3.5, 0.1, true)]
    fn test_approximately_equal(
        #[case] a: f64,
        #[case] b: f64,
        #[case] tolerance: f64,
        #[case] expected: bool,
    ) {
        assert_eq!(approximately_equal(a, b, tolerance), expected);
    }

    #[rstest]
    fn test_matrix_shape_errors() {
        let ragged = ProbabilityMatrix::new([
            vec![0.25; 3],
            vec![0.25; 3],
            vec![0.25; 2],
            vec![0.25; 3],
        ]);
        assert_eq!(ragged, Err(ScoringError::MatrixShape([3, 3, 2, 3])));

        let empty = ProbabilityMatrix::new([vec![], vec![], vec![], vec![]]);
        assert!(matches!(empty, Err(ScoringError::MatrixShape(_))));

        let out_of_range = ProbabilityMatrix::new([vec![1.2], vec![0.0], vec![0.0], vec![0.0]]);
        assert!(matches!(
            out_of_range,
            Err(ScoringError::ProbabilityRange { row: 0, column: 0, .. })
        ));
    }

    #[rstest]
    fn test_single_column_score() {
        let matrix = ProbabilityMatrix::new([vec![1.0], vec![0.0], vec![0.0], vec![0.0]]).unwrap();
        let scores = ScoreMatrix::with_uniform_background(&matrix).unwrap();

        let a = scores.score(&[Nucleotide::A], Strand::Forward).unwrap();
        assert!((a - 2.0).abs() < 1e-9);

        let c = scores.score(&[Nucleotide::C], Strand::Forward).unwrap();
        assert!((c - (f64::log2(PSEUDOCOUNT) + 2.0)).abs() < 1e-9);

        // reverse strand of T reads as A
        let t = scores.score(&[Nucleotide::T], Strand::Reverse).unwrap();
        assert!((t - 2.0).abs() < 1e-9);
    }

    #[rstest]
    fn test_reverse_strand_scores_reverse_complement(matrix: ProbabilityMatrix) {
        let scores = ScoreMatrix::with_uniform_background(&matrix).unwrap();
        for window in ["ACGT", "TTGA", "GCGC", "AAAA"] {
            let reverse = scores.score_str(window, Strand::Reverse).unwrap();
            let rc = reverse_complement(window).unwrap();
            let forward_of_rc = scores.score_str(&rc, Strand::Forward).unwrap();
            assert!((reverse - forward_of_rc).abs() < 1e-12);
        }

        let bases = crate::alphabet::parse_sequence("ACGA").unwrap();
        let rc = reverse_complement_bases(&bases);
        assert_eq!(
            scores.score(&bases, Strand::Reverse).unwrap(),
            scores.score(&rc, Strand::Forward).unwrap()
        );
    }

    #[rstest]
    fn test_score_bounds(matrix: ProbabilityMatrix) {
        let scores = ScoreMatrix::with_uniform_background(&matrix).unwrap();
        let best = scores.score_str("ACGA", Strand::Forward).unwrap();
        assert!((best - scores.max_score()).abs() < 1e-12);
        assert!(scores.min_score() < scores.max_score());

        let worst = scores.score_str("TTTC", Strand::Forward).unwrap();
        assert!(worst >= scores.min_score() - 1e-12);
    }

    #[rstest]
    fn test_score_window_errors(matrix: ProbabilityMatrix) {
        let scores = ScoreMatrix::with_uniform_background(&matrix).unwrap();
        assert_eq!(
            scores.score_str("ACG", Strand::Forward),
            Err(ScoringError::WindowLength {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            scores.score_str("ACNT", Strand::Forward),
            Err(ScoringError::Alphabet(AlphabetError::InvalidSymbol {
                symbol: 'N',
                position: 2
            }))
        );
    }

    #[rstest]
    fn test_score_matrix_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScoreMatrix>();
        assert_send_sync::<ProbabilityMatrix>();
    }

    #[rstest]
    fn test_background_must_be_positive(matrix: ProbabilityMatrix) {
        let result = ScoreMatrix::from_probabilities(&matrix, &[0.5, 0.5, 0.0, 0.0]);
        assert_eq!(result, Err(ScoringError::Domain(0.0)));
    }
}
