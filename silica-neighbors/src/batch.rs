use log::debug;
use rayon::prelude::*;

use silica_core::{Alphabet, ErrorBudget, Result};

use crate::neighbors::{NeighborPolicy, VariantSet};

///
/// Generate the variant sets of many queries in parallel.
///
/// Each query is expanded independently on the rayon thread pool. Results come back in
/// query order; a failing query does not stop the others.
///
/// # Arguments
/// - queries: the sequences to expand
/// - alphabet: symbols usable for substitutions and insertions
/// - budget: maximum number of edits per variant
/// - indel: allow insertions and deletions
/// - policy: which generator to run
pub fn neighbors_batch<S>(
    queries: &[S],
    alphabet: &Alphabet,
    budget: ErrorBudget,
    indel: bool,
    policy: NeighborPolicy,
) -> Vec<Result<VariantSet>>
where
    S: AsRef<str> + Sync,
{
    debug!(
        "Generating {} neighbors for {} queries",
        policy,
        queries.len()
    );

    let generator = policy.generator();
    queries
        .par_iter()
        .map(|query| generator.generate(query.as_ref(), alphabet, budget, indel))
        .collect()
}

///
/// Union of several variant sets.
///
pub fn merge_variant_sets<I>(sets: I) -> VariantSet
where
    I: IntoIterator<Item = VariantSet>,
{
    let mut merged = VariantSet::default();
    for set in sets {
        if merged.is_empty() {
            merged = set;
        } else {
            merged.extend(set);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use silica_core::SequenceError;

    use crate::neighbors::neighbors;

    #[rstest]
    fn test_batch_matches_single_calls() {
        let alphabet = Alphabet::dna4();
        let queries = vec!["ACGT", "GATTACA", "TTT"];
        let results = neighbors_batch(
            &queries,
            &alphabet,
            ErrorBudget::new(1),
            true,
            NeighborPolicy::Scan,
        );

        assert_eq!(results.len(), 3);
        for (query, result) in queries.iter().zip(results) {
            let expected = neighbors(query, &alphabet, ErrorBudget::new(1), true).unwrap();
            assert_eq!(result.unwrap(), expected);
        }
    }

    #[rstest]
    fn test_batch_keeps_going_after_failure() {
        let queries = vec!["ACGT".to_string(), "ACXT".to_string(), "AA".to_string()];
        let results = neighbors_batch(
            &queries,
            &Alphabet::dna4(),
            ErrorBudget::new(1),
            false,
            NeighborPolicy::Ball,
        );

        assert!(results[0].is_ok());
        assert_eq!(
            results[1].as_ref().unwrap_err(),
            &SequenceError::InvalidSymbol {
                symbol: 'X',
                position: 2
            }
        );
        assert_eq!(results[2].as_ref().unwrap().len(), 7);
    }

    #[rstest]
    fn test_merge_variant_sets() {
        let alphabet = Alphabet::dna4();
        let a = neighbors("AA", &alphabet, ErrorBudget::new(1), false).unwrap();
        let b = neighbors("AC", &alphabet, ErrorBudget::new(1), false).unwrap();

        let merged = merge_variant_sets(vec![a.clone(), b.clone()]);
        assert!(a.is_subset(&merged));
        assert!(b.is_subset(&merged));
        // AA, AC, AG and AT are in both sets
        assert_eq!(merged.len(), a.len() + b.len() - 4);
    }

    #[rstest]
    fn test_merge_nothing() {
        assert!(merge_variant_sets(Vec::new()).is_empty());
    }
}
