use std::fmt::{self, Display};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::Serialize;

use crate::error::Result;
use crate::records::{AmpliconRecord, PrimerRecord};

/// Output layout of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One `Prefix_<index>_Field=value` line per field.
    #[default]
    Txt,
    /// A JSON array with one object per record.
    Json,
}

impl Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Txt => write!(f, "txt"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" | "text" => Ok(ReportFormat::Txt),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Invalid report format: {}. Valid options are 'txt' or 'json'",
                s
            )),
        }
    }
}

pub trait ReportWrite {
    ///
    /// Write records as `Key=Value` lines.
    ///
    /// # Arguments
    /// - writer: where to write to
    fn write_txt<W: Write>(&self, writer: &mut W) -> Result<()>;

    ///
    /// Write records as a JSON array.
    ///
    /// # Arguments
    /// - writer: where to write to
    fn write_json<W: Write>(&self, writer: &mut W) -> Result<()>;

    ///
    /// Write records in the given format.
    ///
    fn write_report<W: Write>(&self, writer: &mut W, format: ReportFormat) -> Result<()> {
        match format {
            ReportFormat::Txt => self.write_txt(writer),
            ReportFormat::Json => self.write_json(writer),
        }
    }

    ///
    /// Write records to disk, creating parent directories as needed.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    /// - format: txt or json
    fn write_report_to_path<T: AsRef<Path>>(&self, path: T, format: ReportFormat) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(path)?);
        self.write_report(&mut writer, format)?;
        writer.flush()?;

        debug!("Wrote {} report to {}", format, path.display());
        Ok(())
    }
}

fn write_json_array<T: Serialize, W: Write>(records: &[T], writer: &mut W) -> Result<()> {
    writeln!(writer, "[")?;
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            writeln!(writer, ",")?;
        }
        serde_json::to_writer(&mut *writer, record)?;
    }
    writeln!(writer)?;
    writeln!(writer, "]")?;
    Ok(())
}

impl ReportWrite for [PrimerRecord] {
    fn write_txt<W: Write>(&self, writer: &mut W) -> Result<()> {
        for (i, record) in self.iter().enumerate() {
            writeln!(writer, "Primer_{}_Tm={}", i, record.tm)?;
            writeln!(writer, "Primer_{}_Pos={}", i, record.pos)?;
            writeln!(writer, "Primer_{}_Ori={}", i, record.ori)?;
            writeln!(writer, "Primer_{}_Name={}", i, record.name)?;
            writeln!(writer, "Primer_{}_MatchTm={}", i, record.match_tm)?;
            writeln!(writer, "Primer_{}_Seq={}", i, record.seq)?;
            writeln!(writer, "Primer_{}_Genome={}", i, record.genome)?;
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_json_array(self, writer)
    }
}

impl ReportWrite for [AmpliconRecord] {
    fn write_txt<W: Write>(&self, writer: &mut W) -> Result<()> {
        for (i, record) in self.iter().enumerate() {
            writeln!(writer, "Amplicon_{}_Length={}", i, record.length)?;
            writeln!(writer, "Amplicon_{}_Penalty={}", i, record.penalty)?;
            writeln!(writer, "Amplicon_{}_For_Pos={}", i, record.for_pos)?;
            writeln!(writer, "Amplicon_{}_For_Tm={}", i, record.for_tm)?;
            writeln!(writer, "Amplicon_{}_For_Name={}", i, record.for_name)?;
            writeln!(writer, "Amplicon_{}_For_Seq={}", i, record.for_seq)?;
            writeln!(writer, "Amplicon_{}_Rev_Pos={}", i, record.rev_pos)?;
            writeln!(writer, "Amplicon_{}_Rev_Tm={}", i, record.rev_tm)?;
            writeln!(writer, "Amplicon_{}_Rev_Name={}", i, record.rev_name)?;
            writeln!(writer, "Amplicon_{}_Rev_Seq={}", i, record.rev_seq)?;
            writeln!(writer, "Amplicon_{}_Seq={}", i, record.seq)?;
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_json_array(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn primers() -> Vec<PrimerRecord> {
        vec![
            PrimerRecord {
                tm: 58.25,
                pos: "chr1:100".to_string(),
                ori: "forward".to_string(),
                name: "p1".to_string(),
                match_tm: 60.5,
                seq: "ACGT".to_string(),
                genome: "ACGA".to_string(),
            },
            PrimerRecord {
                tm: 59.0,
                pos: "chr2:7".to_string(),
                ori: "reverse".to_string(),
                name: "p2".to_string(),
                match_tm: 61.0,
                seq: "TTGA".to_string(),
                genome: "TTGA".to_string(),
            },
        ]
    }

    #[rstest]
    fn test_primer_txt(primers: Vec<PrimerRecord>) {
        let mut out = Vec::new();
        primers[..1].write_txt(&mut out).unwrap();
        let expected = "Primer_0_Tm=58.25\n\
                        Primer_0_Pos=chr1:100\n\
                        Primer_0_Ori=forward\n\
                        Primer_0_Name=p1\n\
                        Primer_0_MatchTm=60.5\n\
                        Primer_0_Seq=ACGT\n\
                        Primer_0_Genome=ACGA\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[rstest]
    fn test_primer_json(primers: Vec<PrimerRecord>) {
        let mut out = Vec::new();
        primers.as_slice().write_json(&mut out).unwrap();
        let expected = "[\n\
            {\"Tm\":58.25,\"Pos\":\"chr1:100\",\"Ori\":\"forward\",\"Name\":\"p1\",\"MatchTm\":60.5,\"Seq\":\"ACGT\",\"Genome\":\"ACGA\"},\n\
            {\"Tm\":59.0,\"Pos\":\"chr2:7\",\"Ori\":\"reverse\",\"Name\":\"p2\",\"MatchTm\":61.0,\"Seq\":\"TTGA\",\"Genome\":\"TTGA\"}\n\
            ]\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[rstest]
    fn test_empty_json() {
        let mut out = Vec::new();
        let records: Vec<AmpliconRecord> = Vec::new();
        records.as_slice().write_json(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[\n\n]\n");
    }

    #[rstest]
    fn test_amplicon_field_order() {
        let record = AmpliconRecord {
            length: 120,
            penalty: 0.5,
            for_pos: "chr1:10".to_string(),
            for_tm: 58.0,
            for_name: "f".to_string(),
            for_seq: "ACGT".to_string(),
            rev_pos: "chr1:129".to_string(),
            rev_tm: 57.5,
            rev_name: "r".to_string(),
            rev_seq: "TTGG".to_string(),
            seq: "ACGTTT".to_string(),
        };

        let mut txt = Vec::new();
        std::slice::from_ref(&record).write_txt(&mut txt).unwrap();
        let keys: Vec<String> = String::from_utf8(txt)
            .unwrap()
            .lines()
            .map(|line| line.split('=').next().unwrap().to_string())
            .collect();
        assert_eq!(
            keys,
            vec![
                "Amplicon_0_Length",
                "Amplicon_0_Penalty",
                "Amplicon_0_For_Pos",
                "Amplicon_0_For_Tm",
                "Amplicon_0_For_Name",
                "Amplicon_0_For_Seq",
                "Amplicon_0_Rev_Pos",
                "Amplicon_0_Rev_Tm",
                "Amplicon_0_Rev_Name",
                "Amplicon_0_Rev_Seq",
                "Amplicon_0_Seq",
            ]
        );

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.starts_with("{\"Length\":120,\"Penalty\":0.5,\"For_Pos\":\"chr1:10\""));
        assert!(json.ends_with("\"Rev_Seq\":\"TTGG\",\"Seq\":\"ACGTTT\"}"));
    }

    #[rstest]
    #[case("txt", ReportFormat::Txt)]
    #[case("TEXT", ReportFormat::Txt)]
    #[case("json", ReportFormat::Json)]
    fn test_format_from_str(#[case] input: &str, #[case] expected: ReportFormat) {
        assert_eq!(input.parse::<ReportFormat>().unwrap(), expected);
    }

    #[rstest]
    fn test_write_report_to_path(primers: Vec<PrimerRecord>) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("nested").join("primers.json");

        assert!(
            primers
                .as_slice()
                .write_report_to_path(&path, ReportFormat::Json)
                .is_ok()
        );

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("[\n{\"Tm\":58.25"));
        assert!(contents.ends_with("}\n]\n"));
    }
}
