use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use log::info;

use motifscan_core::models::HitRecord;
use motifscan_summary::{ColumnRef, ColumnarSummary, SEQUENCE_NAME};

use crate::consts::*;
use crate::error::{Result, SummaryIoError};

pub trait SummaryWrite {
    ///
    /// Write the summary as a tab separated table with a header row
    ///
    /// Fails with [SummaryIoError::InvalidField] if a text value contains a tab or line break.
    ///
    /// # Arguments
    /// - writer: destination
    fn write_tsv_to<W: Write>(&self, writer: W) -> Result<()>;

    ///
    /// Write the summary as GFF3, one feature per hit
    ///
    /// # Arguments
    /// - writer: destination
    fn write_gff_to<W: Write>(&self, writer: W) -> Result<()>;

    ///
    /// Write the summary as a JSON array of hit objects
    ///
    /// # Arguments
    /// - writer: destination
    fn write_json_to<W: Write>(&self, writer: W) -> Result<()>;

    ///
    /// Write data to disk as a tsv file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_tsv<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let file = create_file(path.as_ref())?;
        self.write_tsv_to(BufWriter::new(file))
    }

    ///
    /// Write data to disk as a tsv.gz file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_tsv_gz<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let file = create_file(path.as_ref())?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());
        self.write_tsv_to(&mut encoder)?;
        encoder.finish()?;
        Ok(())
    }

    ///
    /// Write data to disk as a gff file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_gff<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let file = create_file(path.as_ref())?;
        self.write_gff_to(BufWriter::new(file))
    }

    ///
    /// Write data to disk as a json file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_json<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let file = create_file(path.as_ref())?;
        self.write_json_to(BufWriter::new(file))
    }
}

fn create_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    if path.exists() {
        info!("{} already exists and will be overwritten", path.display());
    }
    Ok(File::create(path)?)
}

fn check_field(column: &str, row: usize, value: &str) -> Result<()> {
    if value.contains(['\t', '\n', '\r']) {
        return Err(SummaryIoError::InvalidField {
            column: column.to_string(),
            row,
            value: value.to_string(),
        });
    }
    Ok(())
}

///
/// Percent-encode a GFF3 attribute value.
///
/// Tabs, line breaks, control characters, `%` and the attribute separators `;`, `=`, `&`
/// and `,` are escaped as `%XX`.
///
pub fn encode_gff_value(value: &str) -> Cow<'_, str> {
    let needs_escape = |c: char| c.is_control() || matches!(c, '%' | ';' | '=' | '&' | ',');

    if !value.contains(needs_escape) {
        return Cow::Borrowed(value);
    }

    let mut encoded = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        if needs_escape(c) {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                encoded.push_str(&format!("%{:02X}", byte));
            }
        } else {
            encoded.push(c);
        }
    }
    Cow::Owned(encoded)
}

///
/// GFF3 attribute column for one hit.
///
/// `Name` is built from the motif, sequence, strand and start so that it is unique per hit.
/// Values are escaped with [encode_gff_value].
///
pub fn gff_attributes(hit: &HitRecord) -> String {
    let name = format!("{}_{}{}{}", hit.motif_id, hit.sequence_name, hit.strand, hit.start);
    let mut attributes = format!(
        "Name={};Alias={};ID={};pvalue={};sequence={};reference={}",
        encode_gff_value(&name),
        encode_gff_value(&hit.motif_alt_id),
        encode_gff_value(&hit.motif_id),
        hit.p_value,
        encode_gff_value(&hit.matched_sequence),
        encode_gff_value(&hit.reference),
    );
    if let Some(q) = hit.q_value {
        attributes.push_str(&format!(";qvalue={}", q));
    }
    attributes
}

impl SummaryWrite for ColumnarSummary {
    fn write_tsv_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let columns = self.columns();

        let header: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
        writeln!(writer, "{}", header.join("\t"))?;

        for row in 0..self.num_rows() {
            for (name, column) in &columns {
                if let ColumnRef::Text(values) = column {
                    check_field(name, row, &values[row])?;
                }
            }
            let fields: Vec<String> = columns
                .iter()
                .map(|(_, column)| column.format_value(row).unwrap_or_default())
                .collect();
            writeln!(writer, "{}", fields.join("\t"))?;
        }

        writer.flush()?;
        Ok(())
    }

    fn write_gff_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", GFF_VERSION_HEADER)?;

        for (row, hit) in self.records().enumerate() {
            // attribute values are escaped, only the seqid goes out as is
            check_field(SEQUENCE_NAME, row, &hit.sequence_name)?;
            writeln!(
                writer,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                hit.sequence_name,
                GFF_SOURCE,
                GFF_FEATURE_TYPE,
                hit.start,
                hit.stop,
                hit.score,
                hit.strand,
                GFF_PHASE,
                gff_attributes(&hit),
            )?;
        }

        writer.flush()?;
        Ok(())
    }

    fn write_json_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let records: Vec<HitRecord> = self.records().collect();
        serde_json::to_writer_pretty(&mut writer, &records)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Read;

    use flate2::read::GzDecoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use motifscan_core::models::Strand;
    use motifscan_summary::{HitTable, MOTIF_ID, REFERENCE, assemble};

    use crate::reader::read_hit_table;

    #[fixture]
    fn records() -> Vec<HitRecord> {
        vec![
            HitRecord {
                motif_id: "MA0139.1".to_string(),
                motif_alt_id: "CTCF".to_string(),
                sequence_name: "chr22".to_string(),
                start: 100,
                stop: 118,
                strand: Strand::Forward,
                score: 18.25,
                p_value: 0.000001,
                matched_sequence: "TGGCCACCAGGGGGCGCTA".to_string(),
                reference: "ref".to_string(),
                q_value: Some(0.02),
            },
            HitRecord {
                motif_id: "MA0139.1".to_string(),
                motif_alt_id: "CTCF".to_string(),
                sequence_name: "chr22".to_string(),
                start: 250,
                stop: 268,
                strand: Strand::Reverse,
                score: 12.5,
                p_value: 0.0001,
                matched_sequence: "CAGCGCCCCCTGGTGGCCA".to_string(),
                reference: "alt".to_string(),
                q_value: Some(0.5),
            },
        ]
    }

    #[fixture]
    fn summary(records: Vec<HitRecord>) -> ColumnarSummary {
        assemble(&HitTable::from_records(&records, false), false).unwrap()
    }

    #[rstest]
    fn test_write_tsv_to(summary: ColumnarSummary) {
        let mut out: Vec<u8> = Vec::new();
        summary.write_tsv_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "motif_id\tmotif_alt_id\tsequence_name\tstart\tstop\tstrand\tscore\tp-value\tmatched_sequence\treference"
        );
        assert_eq!(
            lines[2],
            "MA0139.1\tCTCF\tchr22\t250\t268\t-\t12.5\t0.0001\tCAGCGCCCCCTGGTGGCCA\talt"
        );
        assert_eq!(lines.len(), 3);
    }

    #[rstest]
    fn test_write_tsv_with_qvalue(records: Vec<HitRecord>) {
        let summary = assemble(&HitTable::from_records(&records, true), true).unwrap();
        let mut out: Vec<u8> = Vec::new();
        summary.write_tsv_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut lines = text.lines();
        assert!(lines.next().unwrap().ends_with("\treference\tq-value"));
        assert!(lines.next().unwrap().ends_with("\tref\t0.02"));
    }

    #[rstest]
    fn test_write_gff_to(summary: ColumnarSummary) {
        let mut out: Vec<u8> = Vec::new();
        summary.write_gff_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "##gff-version 3");
        assert_eq!(lines.len(), 3);

        let fields: Vec<&str> = lines[1].split('\t').collect();
        assert_eq!(fields.len(), 9);
        assert_eq!(
            &fields[..8],
            &["chr22", "motifscan", "nucleotide_motif", "100", "118", "18.25", "+", "."]
        );
        assert_eq!(
            fields[8],
            "Name=MA0139.1_chr22+100;Alias=CTCF;ID=MA0139.1;pvalue=0.000001;sequence=TGGCCACCAGGGGGCGCTA;reference=ref"
        );
    }

    #[rstest]
    fn test_gff_attributes_with_qvalue(records: Vec<HitRecord>) {
        assert!(gff_attributes(&records[1]).ends_with(";reference=alt;qvalue=0.5"));
    }

    #[rstest]
    fn test_write_json_to(summary: ColumnarSummary) {
        let mut out: Vec<u8> = Vec::new();
        summary.write_json_to(&mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let hits = value.as_array().unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1]["strand"], "-");
        assert_eq!(hits[0]["p-value"], 0.000001);
        assert!(hits[0].get("q-value").is_none());
    }

    #[rstest]
    fn test_write_tsv_round_trip(summary: ColumnarSummary) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("nested/dir/hits.tsv");

        summary.write_tsv(&path).unwrap();

        let table = read_hit_table(&path).unwrap();
        assert_eq!(assemble(&table, false).unwrap(), summary);
    }

    #[rstest]
    fn test_write_tsv_gz(summary: ColumnarSummary) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("hits.tsv.gz");

        summary.write_tsv_gz(&path).unwrap();

        let mut text = String::new();
        GzDecoder::new(File::open(&path).unwrap())
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text.lines().count(), 3);

        let table = read_hit_table(&path).unwrap();
        assert_eq!(table.num_rows(), 2);
    }

    #[rstest]
    fn test_write_gff_and_json_files(summary: ColumnarSummary) {
        let tempdir = tempfile::tempdir().unwrap();
        let gff = tempdir.path().join("hits.gff");
        let json = tempdir.path().join("hits.json");

        summary.write_gff(&gff).unwrap();
        summary.write_json(&json).unwrap();

        assert!(std::fs::read_to_string(&gff).unwrap().starts_with("##gff-version 3\n"));
        assert!(std::fs::read_to_string(&json).unwrap().trim_start().starts_with('['));
    }

    #[rstest]
    #[case(MOTIF_ID, "MA0139\t1")]
    #[case(SEQUENCE_NAME, "chr22\nchr1")]
    #[case(REFERENCE, "ref\r")]
    fn test_write_tsv_rejects_layout_breaking_text(
        mut records: Vec<HitRecord>,
        #[case] column: &str,
        #[case] value: &str,
    ) {
        let field = match column {
            MOTIF_ID => &mut records[1].motif_id,
            SEQUENCE_NAME => &mut records[1].sequence_name,
            _ => &mut records[1].reference,
        };
        *field = value.to_string();
        let summary = assemble(&HitTable::from_records(&records, false), false).unwrap();

        let mut out: Vec<u8> = Vec::new();
        match summary.write_tsv_to(&mut out) {
            Err(SummaryIoError::InvalidField { column: c, row, value: v }) => {
                assert_eq!(c, column);
                assert_eq!(row, 1);
                assert_eq!(v, value);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[rstest]
    fn test_written_tsv_reads_back(mut records: Vec<HitRecord>) {
        records[0].motif_alt_id = "CTCF like, v2".to_string();
        let summary = assemble(&HitTable::from_records(&records, false), false).unwrap();

        let mut out: Vec<u8> = Vec::new();
        summary.write_tsv_to(&mut out).unwrap();

        let table = crate::reader::read_hit_table_from(
            std::io::Cursor::new(out),
            &motifscan_core::progress::NoProgress,
        )
        .unwrap();
        assert_eq!(assemble(&table, false).unwrap(), summary);
    }

    #[rstest]
    fn test_write_gff_rejects_tab_in_sequence_name(mut records: Vec<HitRecord>) {
        records[0].sequence_name = "chr\t22".to_string();
        let summary = assemble(&HitTable::from_records(&records, false), false).unwrap();

        let result = summary.write_gff_to(Vec::new());
        assert!(matches!(
            result,
            Err(SummaryIoError::InvalidField { row: 0, .. })
        ));
    }

    #[rstest]
    #[case("CTCF", "CTCF")]
    #[case("CTCF;x", "CTCF%3Bx")]
    #[case("a=b&c,d", "a%3Db%26c%2Cd")]
    #[case("50%", "50%25")]
    #[case("tab\there", "tab%09here")]
    fn test_encode_gff_value(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(encode_gff_value(input), expected);
    }

    #[rstest]
    fn test_gff_attributes_escape_reserved(mut records: Vec<HitRecord>) {
        records[0].motif_alt_id = "CTCF;x".to_string();
        let attributes = gff_attributes(&records[0]);

        assert!(attributes.contains(";Alias=CTCF%3Bx;"));
        assert_eq!(attributes.split(';').count(), 6);
    }
}
