//! # Report writers for in-silico PCR results.
//!
//! Binding sites and amplicons are found by an exact-match search collaborator; this crate
//! only turns them into reports. Every record is resolved against a [`ReportContext`]
//! (reference and primer names) into a flat [`PrimerRecord`] or [`AmpliconRecord`], which
//! can then be written as `Key=Value` text or as a JSON array through [`ReportWrite`].
//!
pub mod error;
pub mod records;
pub mod reference;
pub mod report;

// re-expose core functions
pub use error::*;
pub use records::*;
pub use reference::*;
pub use report::*;
