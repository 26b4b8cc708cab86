//! Error type for solver entry points.
//!
//! The only recoverable failure is an invalid input sequence. Misuse of the
//! API that indicates a programming error (for example a zero block size)
//! panics instead, matching the rest of the crate.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error returned when a sequence cannot be solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobberError {
    /// The sequence is empty or absent.
    InvalidArgument(&'static str),
}

impl RobberError {
    pub(crate) const EMPTY: Self = RobberError::InvalidArgument("sequence is empty");
    pub(crate) const ABSENT: Self = RobberError::InvalidArgument("sequence is absent");

    /// Human-readable reason attached to the error.
    pub fn reason(&self) -> &'static str {
        match self {
            RobberError::InvalidArgument(reason) => *reason,
        }
    }
}

impl Display for RobberError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            RobberError::InvalidArgument(reason) => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl Error for RobberError {}

#[cfg(test)]
mod tests {
    use super::RobberError;

    #[test]
    fn display_includes_reason() {
        assert_eq!(
            RobberError::EMPTY.to_string(),
            "invalid argument: sequence is empty"
        );
        assert_eq!(RobberError::ABSENT.reason(), "sequence is absent");
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(RobberError::EMPTY);
        assert!(err.to_string().contains("empty"));
    }
}
