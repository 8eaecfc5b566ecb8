use std::fs::read_to_string;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use silica_core::{Alphabet, ErrorBudget, SequenceError};

use crate::neighbors::{NeighborPolicy, VariantSet, neighbors_both_strands};

#[derive(Error, Debug)]
pub enum NeighborConfigError {
    #[error(transparent)]
    Sequence(#[from] SequenceError),
    #[error("Generated {produced} variants, more than the configured maximum of {limit}")]
    TooManyVariants { produced: usize, limit: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type NeighborConfigResult<T> = std::result::Result<T, NeighborConfigError>;

///
/// Settings for one neighbor generation run.
///
/// Every field has a default, so a config file only needs the values it changes:
///
/// ```toml
/// alphabet = "ACGT"
/// distance = 2
/// indel = true
/// policy = "ball"
/// max_variants = 100000
/// ```
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NeighborConfig {
    pub alphabet: Alphabet,
    pub distance: ErrorBudget,
    pub indel: bool,
    pub policy: NeighborPolicy,
    /// Refuse results larger than this. The generator itself never stops early.
    pub max_variants: Option<usize>,
    /// Add the reverse complement of every variant.
    pub both_strands: bool,
}

impl Default for NeighborConfig {
    fn default() -> Self {
        NeighborConfig {
            alphabet: Alphabet::dna(),
            distance: ErrorBudget::ZERO,
            indel: false,
            policy: NeighborPolicy::Scan,
            max_variants: None,
            both_strands: false,
        }
    }
}

impl NeighborConfig {
    ///
    /// Generate the variant set of a query with these settings.
    ///
    /// # Errors
    /// `Sequence` for invalid queries, `TooManyVariants` when the result exceeds
    /// `max_variants`.
    pub fn generate(&self, query: &str) -> NeighborConfigResult<VariantSet> {
        let variants = if self.both_strands {
            neighbors_both_strands(query, &self.alphabet, self.distance, self.indel, self.policy)?
        } else {
            self.policy
                .generate(query, &self.alphabet, self.distance, self.indel)?
        };

        self.check_size(variants.len())?;
        Ok(variants)
    }

    ///
    /// Generate the variant sets of many queries in parallel, in query order.
    ///
    pub fn generate_batch<S>(&self, queries: &[S]) -> Vec<NeighborConfigResult<VariantSet>>
    where
        S: AsRef<str> + Sync,
    {
        queries
            .par_iter()
            .map(|query| self.generate(query.as_ref()))
            .collect()
    }

    pub fn check_size(&self, produced: usize) -> NeighborConfigResult<()> {
        match self.max_variants {
            Some(limit) if produced > limit => {
                Err(NeighborConfigError::TooManyVariants { produced, limit })
            }
            _ => Ok(()),
        }
    }
}

impl TryFrom<&Path> for NeighborConfig {
    type Error = NeighborConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "{}", contents).expect("Failed to write");
        file
    }

    #[rstest]
    fn test_try_from_toml() {
        let file = write_config(
            "alphabet = \"acgt\"\ndistance = 2\nindel = true\npolicy = \"ball\"\nmax_variants = 500\n",
        );
        let config = NeighborConfig::try_from(file.path()).unwrap();

        assert_eq!(config.alphabet, Alphabet::dna4());
        assert_eq!(config.distance, ErrorBudget::new(2));
        assert!(config.indel);
        assert_eq!(config.policy, NeighborPolicy::Ball);
        assert_eq!(config.max_variants, Some(500));
        assert!(!config.both_strands);
    }

    #[rstest]
    fn test_empty_toml_is_default() {
        let file = write_config("");
        let config = NeighborConfig::try_from(file.path()).unwrap();
        assert_eq!(config, NeighborConfig::default());
    }

    #[rstest]
    #[case("distance = -1\n")]
    #[case("alphabet = \"AC-GT\"\n")]
    #[case("policy = \"dp\"\n")]
    fn test_invalid_toml(#[case] contents: &str) {
        let file = write_config(contents);
        let result = NeighborConfig::try_from(file.path());
        assert!(matches!(result, Err(NeighborConfigError::Toml(_))));
    }

    #[rstest]
    fn test_missing_file() {
        let result = NeighborConfig::try_from(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(NeighborConfigError::Io(_))));
    }

    #[rstest]
    fn test_generate_respects_cap() {
        let config = NeighborConfig {
            alphabet: Alphabet::dna4(),
            distance: ErrorBudget::new(1),
            max_variants: Some(6),
            ..Default::default()
        };

        let result = config.generate("AC");
        assert!(matches!(
            result,
            Err(NeighborConfigError::TooManyVariants {
                produced: 7,
                limit: 6
            })
        ));
    }

    #[rstest]
    fn test_generate_both_strands() {
        let config = NeighborConfig {
            alphabet: Alphabet::dna4(),
            both_strands: true,
            ..Default::default()
        };

        let variants = config.generate("AAC").unwrap();
        assert_eq!(variants.len(), 2);
        assert!(variants.contains("GTT"));
    }

    #[rstest]
    fn test_generate_batch() {
        let config = NeighborConfig {
            alphabet: Alphabet::dna4(),
            distance: ErrorBudget::new(1),
            ..Default::default()
        };

        let results = config.generate_batch(&["AC", "AXC", "ACG"]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().len(), 7);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().len(), 10);
    }

    #[rstest]
    fn test_generate_invalid_query() {
        let config = NeighborConfig::default();
        let result = config.generate("ACGU");
        assert!(matches!(result, Err(NeighborConfigError::Sequence(_))));
    }
}
