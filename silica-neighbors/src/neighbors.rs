use std::fmt::{self, Display};
use std::str::FromStr;

use fxhash::FxHashSet;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use silica_core::consts::RECOMMENDED_MAX_BUDGET;
use silica_core::{Alphabet, ErrorBudget, Result};

use crate::revcomp::reverse_complement;

/// Every sequence within the edit budget of a query, the query included.
pub type VariantSet = FxHashSet<String>;

///
/// Enumerates all sequences within an edit budget of a query.
///
/// Implementations are pure: each call owns its result set and shares nothing with other
/// calls, so one generator can serve many threads at once.
///
pub trait NeighborGenerator: Send + Sync {
    ///
    /// Generate the variant set of a query.
    ///
    /// # Arguments
    /// - query: the sequence to expand; every symbol must belong to `alphabet`
    /// - alphabet: symbols usable for substitutions and insertions
    /// - budget: maximum number of edits
    /// - indel: allow insertions and deletions in addition to substitutions
    ///
    /// # Errors
    /// `InvalidSymbol` if the query holds a symbol outside the alphabet.
    fn generate(
        &self,
        query: &str,
        alphabet: &Alphabet,
        budget: ErrorBudget,
        indel: bool,
    ) -> Result<VariantSet>;
}

fn substitute(sequence: &str, i: usize, symbol: u8) -> String {
    let mut variant = String::with_capacity(sequence.len());
    variant.push_str(&sequence[..i]);
    variant.push(symbol as char);
    variant.push_str(&sequence[i + 1..]);
    variant
}

fn insert(sequence: &str, i: usize, symbol: u8) -> String {
    let mut variant = String::with_capacity(sequence.len() + 1);
    variant.push_str(&sequence[..i]);
    variant.push(symbol as char);
    variant.push_str(&sequence[i..]);
    variant
}

fn delete(sequence: &str, i: usize) -> String {
    let mut variant = String::with_capacity(sequence.len());
    variant.push_str(&sequence[..i]);
    variant.push_str(&sequence[i + 1..]);
    variant
}

fn check_inputs(query: &str, alphabet: &Alphabet, budget: ErrorBudget, indel: bool) -> Result<()> {
    alphabet.validate(query)?;
    if indel && budget.get() > RECOMMENDED_MAX_BUDGET {
        warn!(
            "Generating indel neighbors with a budget of {} (recommended at most {}). The variant set may be very large.",
            budget, RECOMMENDED_MAX_BUDGET
        );
    }
    Ok(())
}

///
/// Left-to-right scan with a monotonically advancing cursor.
///
/// At every cursor position from the current start onwards, each available edit is applied
/// and the result is expanded again with one edit less:
///
/// - substitution by every other alphabet symbol; the continuation starts one past the
///   current start
/// - insertion of every alphabet symbol before the position; the continuation keeps the
///   current start
/// - deletion of the symbol; the continuation starts one past the current start
///
/// With budget left, the query with each alphabet symbol appended is added as well. The
/// current sequence is always added, so the result is the union of all radii up to the budget.
///
/// Recursion depth is bounded by the budget: every recursive call spends one edit. Without
/// indels the result is exactly the Hamming ball. With indels it is contained in the
/// Levenshtein ball but not proven equal to it; use [`EditBallGenerator`] when completeness
/// matters.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanGenerator;

impl ScanGenerator {
    fn scan(
        sequence: &str,
        alphabet: &Alphabet,
        budget: ErrorBudget,
        indel: bool,
        start: usize,
        variants: &mut VariantSet,
    ) {
        if let Some(remaining) = budget.spend() {
            for i in start..sequence.len() {
                if indel {
                    for symbol in alphabet.iter() {
                        let inserted = insert(sequence, i, symbol);
                        Self::scan(&inserted, alphabet, remaining, indel, start, variants);
                    }
                    let deleted = delete(sequence, i);
                    Self::scan(&deleted, alphabet, remaining, indel, start + 1, variants);
                }

                let current = sequence.as_bytes()[i];
                for symbol in alphabet.iter().filter(|&s| s != current) {
                    let substituted = substitute(sequence, i, symbol);
                    Self::scan(&substituted, alphabet, remaining, indel, start + 1, variants);
                }
            }

            if indel {
                for symbol in alphabet.iter() {
                    variants.insert(insert(sequence, sequence.len(), symbol));
                }
            }
        }

        variants.insert(sequence.to_string());
    }
}

impl NeighborGenerator for ScanGenerator {
    fn generate(
        &self,
        query: &str,
        alphabet: &Alphabet,
        budget: ErrorBudget,
        indel: bool,
    ) -> Result<VariantSet> {
        check_inputs(query, alphabet, budget, indel)?;

        let mut variants = VariantSet::default();
        Self::scan(query, alphabet, budget, indel, 0, &mut variants);

        debug!(
            "Scan generated {} variants of {} (budget {}, indel {})",
            variants.len(),
            query,
            budget,
            indel
        );
        Ok(variants)
    }
}

///
/// Breadth-first expansion of the full edit ball.
///
/// Round `k` applies every single edit to every sequence first reached in round `k - 1` and
/// keeps the ones not seen before, so after `budget` rounds the set holds exactly the
/// sequences at edit distance at most `budget` from the query (Hamming distance without
/// indels). Memory is proportional to the size of the ball; no recursion is involved.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct EditBallGenerator;

impl EditBallGenerator {
    fn single_edits(sequence: &str, alphabet: &Alphabet, indel: bool) -> Vec<String> {
        let bytes = sequence.as_bytes();
        let mut edits = Vec::with_capacity((sequence.len() + 1) * alphabet.len() * 2);

        for (i, &current) in bytes.iter().enumerate() {
            for symbol in alphabet.iter().filter(|&s| s != current) {
                edits.push(substitute(sequence, i, symbol));
            }
        }

        if indel {
            for i in 0..=sequence.len() {
                for symbol in alphabet.iter() {
                    edits.push(insert(sequence, i, symbol));
                }
            }
            for i in 0..sequence.len() {
                edits.push(delete(sequence, i));
            }
        }

        edits
    }
}

impl NeighborGenerator for EditBallGenerator {
    fn generate(
        &self,
        query: &str,
        alphabet: &Alphabet,
        budget: ErrorBudget,
        indel: bool,
    ) -> Result<VariantSet> {
        check_inputs(query, alphabet, budget, indel)?;

        let mut variants = VariantSet::default();
        variants.insert(query.to_string());

        let mut frontier = vec![query.to_string()];
        for _ in 0..budget.get() {
            let mut next = Vec::new();
            for sequence in &frontier {
                for edit in Self::single_edits(sequence, alphabet, indel) {
                    if variants.insert(edit.clone()) {
                        next.push(edit);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        debug!(
            "Edit ball of {} holds {} variants (budget {}, indel {})",
            query,
            variants.len(),
            budget,
            indel
        );
        Ok(variants)
    }
}

/// Which [`NeighborGenerator`] to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighborPolicy {
    #[default]
    Scan,
    Ball,
}

impl NeighborPolicy {
    pub fn generator(self) -> Box<dyn NeighborGenerator> {
        match self {
            NeighborPolicy::Scan => Box::new(ScanGenerator),
            NeighborPolicy::Ball => Box::new(EditBallGenerator),
        }
    }

    pub fn generate(
        self,
        query: &str,
        alphabet: &Alphabet,
        budget: ErrorBudget,
        indel: bool,
    ) -> Result<VariantSet> {
        match self {
            NeighborPolicy::Scan => ScanGenerator.generate(query, alphabet, budget, indel),
            NeighborPolicy::Ball => EditBallGenerator.generate(query, alphabet, budget, indel),
        }
    }
}

impl Display for NeighborPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeighborPolicy::Scan => write!(f, "scan"),
            NeighborPolicy::Ball => write!(f, "ball"),
        }
    }
}

impl FromStr for NeighborPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scan" => Ok(NeighborPolicy::Scan),
            "ball" => Ok(NeighborPolicy::Ball),
            _ => Err(format!(
                "Invalid neighbor policy: {}. Valid options are 'scan' or 'ball'",
                s
            )),
        }
    }
}

///
/// Generate the variant set of a query with the default scan policy.
///
/// # Examples
///
/// ```
/// use silica_core::{Alphabet, ErrorBudget};
/// use silica_neighbors::neighbors;
///
/// let variants = neighbors("ACGT", &Alphabet::dna4(), ErrorBudget::ZERO, true).unwrap();
/// assert_eq!(variants.len(), 1);
/// ```
pub fn neighbors(
    query: &str,
    alphabet: &Alphabet,
    budget: ErrorBudget,
    indel: bool,
) -> Result<VariantSet> {
    ScanGenerator.generate(query, alphabet, budget, indel)
}

/// Generate the complete edit ball of a query.
pub fn edit_ball(
    query: &str,
    alphabet: &Alphabet,
    budget: ErrorBudget,
    indel: bool,
) -> Result<VariantSet> {
    EditBallGenerator.generate(query, alphabet, budget, indel)
}

///
/// Variants of a query together with the reverse complement of each variant.
///
/// This is the set an exact-match index is queried with to find hits on both strands.
///
pub fn neighbors_both_strands(
    query: &str,
    alphabet: &Alphabet,
    budget: ErrorBudget,
    indel: bool,
    policy: NeighborPolicy,
) -> Result<VariantSet> {
    let forward = policy.generate(query, alphabet, budget, indel)?;
    let mut variants = VariantSet::default();
    variants.reserve(forward.len() * 2);
    for variant in forward {
        variants.insert(reverse_complement(&variant));
        variants.insert(variant);
    }
    Ok(variants)
}
