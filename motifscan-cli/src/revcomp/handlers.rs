use anyhow::Result;
use clap::ArgMatches;

use motifscan_core::alphabet::reverse_complement;

pub fn run_revcomp(matches: &ArgMatches) -> Result<()> {
    let sequence = matches
        .get_one::<String>("sequence")
        .expect("A sequence is required.");

    println!("{}", reverse_complement(sequence)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;

    use motifscan_core::errors::AlphabetError;

    fn run(sequence: &str) -> Result<()> {
        let matches = crate::build_parser()
            .try_get_matches_from(["motifscan", "revcomp", sequence])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        run_revcomp(sub)
    }

    #[rstest]
    fn test_revcomp_valid() {
        assert!(run("GATTACA").is_ok());
    }

    #[rstest]
    fn test_revcomp_rejects_n() {
        let err = run("GATNACA").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AlphabetError>(),
            Some(AlphabetError::InvalidSymbol { symbol: 'N', position: 3 })
        ));
    }
}
