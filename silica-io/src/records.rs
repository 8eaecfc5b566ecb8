use serde::Serialize;

use silica_core::{PcrProduct, PrimerBind};

use crate::error::{ReportError, Result};
use crate::reference::SubsequenceFetcher;

///
/// Names needed to turn binding sites into readable records.
///
/// `reference_id` on a [`PrimerBind`] indexes `reference_names`; `primer_id` indexes
/// `primer_names` and `primer_sequences`.
///
#[derive(Debug, Clone, Default)]
pub struct ReportContext {
    pub reference_names: Vec<String>,
    pub primer_names: Vec<String>,
    pub primer_sequences: Vec<String>,
}

impl ReportContext {
    pub fn reference_name(&self, reference_id: usize) -> Result<&str> {
        self.reference_names
            .get(reference_id)
            .map(String::as_str)
            .ok_or(ReportError::UnknownReference(reference_id))
    }

    pub fn primer(&self, primer_id: usize) -> Result<(&str, &str)> {
        match (
            self.primer_names.get(primer_id),
            self.primer_sequences.get(primer_id),
        ) {
            (Some(name), Some(sequence)) => Ok((name.as_str(), sequence.as_str())),
            _ => Err(ReportError::UnknownPrimer(primer_id)),
        }
    }

    ///
    /// Resolve a binding site into a primer record.
    ///
    pub fn primer_record(&self, bind: &PrimerBind) -> Result<PrimerRecord> {
        let reference = self.reference_name(bind.reference_id)?;
        let (name, sequence) = self.primer(bind.primer_id)?;

        Ok(PrimerRecord {
            tm: bind.match_temperature,
            pos: format!("{}:{}", reference, bind.position),
            ori: bind.strand.to_string(),
            name: name.to_string(),
            match_tm: bind.perfect_match_temperature,
            seq: sequence.to_string(),
            genome: bind.genomic_subsequence.clone(),
        })
    }

    ///
    /// Resolve a PCR product into an amplicon record.
    ///
    /// The amplicon sequence runs from the forward position through the reverse position
    /// (inclusive) and is uppercased.
    ///
    /// # Errors
    /// Fails if the product is invalid, an index is unknown, or the fetch fails.
    pub fn amplicon_record<F>(&self, product: &PcrProduct, fetcher: &F) -> Result<AmpliconRecord>
    where
        F: SubsequenceFetcher + ?Sized,
    {
        product.validate()?;

        let reference = self.reference_name(product.reference_id())?;
        let (forward_name, forward_seq) = self.primer(product.forward.primer_id)?;
        let (reverse_name, reverse_seq) = self.primer(product.reverse.primer_id)?;

        let seq = fetcher
            .fetch(reference, product.forward.position, product.reverse.position)?
            .to_uppercase();

        Ok(AmpliconRecord {
            length: product.length,
            penalty: product.penalty,
            for_pos: format!("{}:{}", reference, product.forward.position),
            for_tm: product.forward.match_temperature,
            for_name: forward_name.to_string(),
            for_seq: forward_seq.to_string(),
            rev_pos: format!("{}:{}", reference, product.reverse.position),
            rev_tm: product.reverse.match_temperature,
            rev_name: reverse_name.to_string(),
            rev_seq: reverse_seq.to_string(),
            seq,
        })
    }
}

///
/// One primer binding site as it appears in a report. Field order is the output order.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrimerRecord {
    pub tm: f64,
    /// `reference:coordinate`
    pub pos: String,
    pub ori: String,
    pub name: String,
    pub match_tm: f64,
    pub seq: String,
    pub genome: String,
}

///
/// One amplicon as it appears in a report. Field order is the output order.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmpliconRecord {
    #[serde(rename = "Length")]
    pub length: u64,
    #[serde(rename = "Penalty")]
    pub penalty: f64,
    #[serde(rename = "For_Pos")]
    pub for_pos: String,
    #[serde(rename = "For_Tm")]
    pub for_tm: f64,
    #[serde(rename = "For_Name")]
    pub for_name: String,
    #[serde(rename = "For_Seq")]
    pub for_seq: String,
    #[serde(rename = "Rev_Pos")]
    pub rev_pos: String,
    #[serde(rename = "Rev_Tm")]
    pub rev_tm: f64,
    #[serde(rename = "Rev_Name")]
    pub rev_name: String,
    #[serde(rename = "Rev_Seq")]
    pub rev_seq: String,
    #[serde(rename = "Seq")]
    pub seq: String,
}
