use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SequenceError};

///
/// Maximum number of single-symbol edits a generated variant may be away from its query.
///
/// Negative budgets are rejected when converting from a signed integer, so a value of
/// this type is always valid.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ErrorBudget(u32);

impl ErrorBudget {
    pub const ZERO: ErrorBudget = ErrorBudget(0);

    pub fn new(edits: u32) -> Self {
        ErrorBudget(edits)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// The budget left after spending one edit, or `None` if nothing is left.
    #[inline]
    pub fn spend(self) -> Option<ErrorBudget> {
        self.0.checked_sub(1).map(ErrorBudget)
    }
}

impl From<u32> for ErrorBudget {
    fn from(value: u32) -> Self {
        ErrorBudget(value)
    }
}

impl TryFrom<i64> for ErrorBudget {
    type Error = SequenceError;

    fn try_from(value: i64) -> Result<Self> {
        u32::try_from(value)
            .map(ErrorBudget)
            .map_err(|_| SequenceError::InvalidBudget(value))
    }
}

impl TryFrom<i32> for ErrorBudget {
    type Error = SequenceError;

    fn try_from(value: i32) -> Result<Self> {
        ErrorBudget::try_from(i64::from(value))
    }
}

impl Display for ErrorBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(3, 3)]
    fn test_try_from_non_negative(#[case] value: i64, #[case] expected: u32) {
        assert_eq!(ErrorBudget::try_from(value).unwrap().get(), expected);
    }

    #[rstest]
    #[case(-1)]
    #[case(-100)]
    #[case(i64::MIN)]
    fn test_try_from_negative(#[case] value: i64) {
        assert_eq!(
            ErrorBudget::try_from(value).unwrap_err(),
            SequenceError::InvalidBudget(value)
        );
    }

    #[rstest]
    fn test_try_from_i32() {
        assert_eq!(
            ErrorBudget::try_from(-1i32).unwrap_err(),
            SequenceError::InvalidBudget(-1)
        );
        assert_eq!(ErrorBudget::try_from(2i32).unwrap(), ErrorBudget::new(2));
    }

    #[rstest]
    fn test_too_large_is_rejected() {
        let value = i64::from(u32::MAX) + 1;
        assert!(ErrorBudget::try_from(value).is_err());
    }

    #[rstest]
    fn test_spend() {
        let budget = ErrorBudget::new(2);
        assert_eq!(budget.spend(), Some(ErrorBudget::new(1)));
        assert_eq!(budget.spend().and_then(ErrorBudget::spend), Some(ErrorBudget::ZERO));
        assert_eq!(ErrorBudget::ZERO.spend(), None);
    }
}
