//! # silica
//!
//! Approximate primer matching against a reference genome. Each primer is expanded into every
//! sequence within a small edit budget, and each variant is then located with an exact-match
//! index. The pieces live in separate crates, re-exported here behind features:
//!
//! - `core` (default): alphabets, error budgets, binding sites and PCR products
//! - `neighbors` (default): neighbor generation and reverse complementing
//! - `io`: text and JSON reports
#[cfg(feature = "core")]
#[doc(inline)]
pub use silica_core as core;

#[cfg(feature = "neighbors")]
#[doc(inline)]
pub use silica_neighbors as neighbors;

#[cfg(feature = "io")]
#[doc(inline)]
pub use silica_io as io;
