/// Symbols of the default genomic alphabet.
pub const DNA_SYMBOLS: &str = "ACGTN";

/// Symbols of the unambiguous nucleotide alphabet.
pub const DNA4_SYMBOLS: &str = "ACGT";

/// Budgets above this grow the variant set fast enough that callers
/// should cap the output themselves.
pub const RECOMMENDED_MAX_BUDGET: u32 = 3;
