use fxhash::FxHashMap as HashMap;

use crate::error::{ReportError, Result};

///
/// Random access to reference subsequences by coordinate.
///
/// Implemented by whatever holds the reference (an indexed FASTA, a 2bit file, ...).
///
pub trait SubsequenceFetcher {
    ///
    /// Fetch the bases of `reference` from `start` through `end`, both 0-based and inclusive.
    ///
    fn fetch(&self, reference: &str, start: u64, end: u64) -> Result<String>;
}

///
/// A reference held entirely in memory, keyed by sequence name.
///
#[derive(Debug, Clone, Default)]
pub struct InMemoryReference {
    sequences: HashMap<String, String>,
}

impl InMemoryReference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, sequence: impl Into<String>) {
        self.sequences.insert(name.into(), sequence.into());
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

impl<N, S> FromIterator<(N, S)> for InMemoryReference
where
    N: Into<String>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, S)>>(iter: T) -> Self {
        let mut reference = InMemoryReference::new();
        for (name, sequence) in iter {
            reference.insert(name, sequence);
        }
        reference
    }
}

impl SubsequenceFetcher for InMemoryReference {
    fn fetch(&self, reference: &str, start: u64, end: u64) -> Result<String> {
        let sequence = self
            .sequences
            .get(reference)
            .ok_or_else(|| ReportError::UnknownReferenceName(reference.to_string()))?;

        let out_of_range = || ReportError::OutOfRange {
            reference: reference.to_string(),
            start,
            end,
            length: sequence.len(),
        };

        let first = usize::try_from(start).map_err(|_| out_of_range())?;
        let last = usize::try_from(end).map_err(|_| out_of_range())?;
        if first > last || last >= sequence.len() {
            return Err(out_of_range());
        }

        sequence
            .get(first..=last)
            .map(str::to_string)
            .ok_or_else(out_of_range)
    }
}
