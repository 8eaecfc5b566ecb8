//! # Core data model for in-silico PCR.
//!
//! This crate holds the small, shared types the rest of the silica workspace is built on:
//!
//! - [`Alphabet`]: the set of symbols a query (and every generated variant) is drawn from.
//! - [`ErrorBudget`]: the maximum number of single-symbol edits, non-negative by construction.
//! - [`PrimerBind`] and [`PcrProduct`]: binding sites and amplicons handed to the report boundary.
//!
//! Nothing in here touches the reference genome or the file system.
pub mod consts;
pub mod errors;
pub mod models;

pub use errors::*;
pub use models::*;
