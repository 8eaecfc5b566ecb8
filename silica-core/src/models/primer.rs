use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SequenceError};

/// Reference strand a primer binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    pub fn is_forward(self) -> bool {
        matches!(self, Strand::Forward)
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "forward"),
            Strand::Reverse => write!(f, "reverse"),
        }
    }
}

impl FromStr for Strand {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" | "+" => Ok(Strand::Forward),
            "reverse" | "-" => Ok(Strand::Reverse),
            _ => Err(format!(
                "Invalid strand: {}. Valid options are 'forward', 'reverse', '+' or '-'",
                s
            )),
        }
    }
}

///
/// A single place where a primer was found on the reference.
///
/// Temperatures are computed by the caller; this crate only carries them.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrimerBind {
    /// Index of the reference sequence (chromosome) the hit lies on.
    pub reference_id: usize,
    /// 0-based coordinate of the hit on the reference.
    pub position: u64,
    pub strand: Strand,
    /// Melting temperature of the primer against the bound genomic sequence.
    pub match_temperature: f64,
    /// Melting temperature of the primer against its perfect complement.
    pub perfect_match_temperature: f64,
    /// Index of the primer in the caller's primer list.
    pub primer_id: usize,
    /// The genomic sequence under the binding site.
    pub genomic_subsequence: String,
}

///
/// An amplicon bounded by a forward and a reverse primer binding site.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PcrProduct {
    pub length: u64,
    pub penalty: f64,
    pub forward: PrimerBind,
    pub reverse: PrimerBind,
}

impl PcrProduct {
    ///
    /// Pair two binding sites into a product.
    ///
    /// # Errors
    /// `InvalidPcrProduct` unless the forward bind is on the forward strand, the reverse
    /// bind is on the reverse strand, both lie on the same reference, and the forward
    /// bind comes strictly first.
    pub fn new(length: u64, penalty: f64, forward: PrimerBind, reverse: PrimerBind) -> Result<Self> {
        let product = PcrProduct {
            length,
            penalty,
            forward,
            reverse,
        };
        product.validate()?;
        Ok(product)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.forward.strand.is_forward() {
            return Err(SequenceError::InvalidPcrProduct(
                "forward primer must bind the forward strand".to_string(),
            ));
        }
        if self.reverse.strand.is_forward() {
            return Err(SequenceError::InvalidPcrProduct(
                "reverse primer must bind the reverse strand".to_string(),
            ));
        }
        if self.forward.reference_id != self.reverse.reference_id {
            return Err(SequenceError::InvalidPcrProduct(format!(
                "primers bind different references ({} and {})",
                self.forward.reference_id, self.reverse.reference_id
            )));
        }
        if self.forward.position >= self.reverse.position {
            return Err(SequenceError::InvalidPcrProduct(format!(
                "forward position {} is not before reverse position {}",
                self.forward.position, self.reverse.position
            )));
        }
        Ok(())
    }

    /// Reference index shared by both binding sites.
    pub fn reference_id(&self) -> usize {
        self.forward.reference_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn bind(position: u64, strand: Strand) -> PrimerBind {
        PrimerBind {
            reference_id: 0,
            position,
            strand,
            match_temperature: 58.5,
            perfect_match_temperature: 60.0,
            primer_id: 0,
            genomic_subsequence: "ACGTACGTAC".to_string(),
        }
    }

    #[rstest]
    fn test_valid_product() {
        let product = PcrProduct::new(
            120,
            0.5,
            bind(100, Strand::Forward),
            bind(219, Strand::Reverse),
        );
        assert!(product.is_ok());
        assert_eq!(product.unwrap().reference_id(), 0);
    }

    #[rstest]
    #[case(bind(100, Strand::Reverse), bind(200, Strand::Reverse))]
    #[case(bind(100, Strand::Forward), bind(200, Strand::Forward))]
    #[case(bind(200, Strand::Forward), bind(200, Strand::Reverse))]
    #[case(bind(300, Strand::Forward), bind(200, Strand::Reverse))]
    fn test_invalid_product(#[case] forward: PrimerBind, #[case] reverse: PrimerBind) {
        let result = PcrProduct::new(100, 0.0, forward, reverse);
        assert!(matches!(result, Err(SequenceError::InvalidPcrProduct(_))));
    }

    #[rstest]
    fn test_different_references() {
        let mut reverse = bind(200, Strand::Reverse);
        reverse.reference_id = 3;
        let result = PcrProduct::new(100, 0.0, bind(100, Strand::Forward), reverse);
        assert!(matches!(result, Err(SequenceError::InvalidPcrProduct(_))));
    }

    #[rstest]
    #[case("forward", Strand::Forward)]
    #[case("Reverse", Strand::Reverse)]
    #[case("+", Strand::Forward)]
    #[case("-", Strand::Reverse)]
    fn test_strand_from_str(#[case] input: &str, #[case] expected: Strand) {
        assert_eq!(input.parse::<Strand>(), Ok(expected));
    }

    #[rstest]
    fn test_strand_from_str_invalid() {
        assert_eq!(
            "sideways".parse::<Strand>(),
            Err("Invalid strand: sideways. Valid options are 'forward', 'reverse', '+' or '-'".to_string())
        );
    }

    #[rstest]
    fn test_strand_display() {
        assert_eq!(Strand::Forward.to_string(), "forward");
        assert_eq!(Strand::Reverse.to_string(), "reverse");
    }
}
