//! # Bounded-error neighbor generation for approximate primer search.
//!
//! An exact-match index (suffix array, FM-index, ...) can only find exact occurrences. To find
//! primer binding sites that carry a few mismatches or indels, this crate expands a primer into
//! every sequence within a small edit budget; each variant is then looked up exactly.
//!
//! ## Quick Start
//!
//! ```rust
//! use silica_core::{Alphabet, ErrorBudget};
//! use silica_neighbors::{neighbors, reverse_complement};
//!
//! let variants = neighbors("AC", &Alphabet::dna4(), ErrorBudget::new(1), false).unwrap();
//! assert_eq!(variants.len(), 7);
//! assert!(variants.contains("AC"));
//!
//! assert_eq!(reverse_complement("ACGTN"), "NACGT");
//! ```
//!
//! Two generators are available through [`NeighborPolicy`]:
//!
//! - [`ScanGenerator`] (the default) walks the query left to right with a monotonically advancing
//!   cursor, branching into substitutions, insertions and deletions.
//! - [`EditBallGenerator`] expands the query breadth-first one edit at a time and yields exactly
//!   the Levenshtein ball (or Hamming ball without indels) of the requested radius.
//!
//! Without indels both produce the same set. With indels the scan result is a subset of the ball.
pub mod batch;
pub mod config;
pub mod distance;
pub mod neighbors;
pub mod revcomp;

// re-exports
pub use batch::*;
pub use config::*;
pub use distance::*;
pub use neighbors::*;
pub use revcomp::*;
