use std::{error::Error, fmt};

pub type ParseResult<T> = Result<T, ParseError>;

/// Fieldless view of a [`ParseError`] for callers that only branch on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    EmptyInput,
    NonNumericCharacter,
    PartialConsumption,
    OutOfRange,
    InvalidConfiguration,
}

/// Why a token was rejected. A successful parse of `"0"` is never represented here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    EmptyInput,
    /// Not even a prefix of the token matched the grammar.
    NonNumericCharacter {
        found: char,
    },
    /// A numeric prefix matched but `found` at byte `offset` was left over.
    PartialConsumption {
        offset: usize,
        found: char,
    },
    OutOfRange {
        target: &'static str,
    },
    InvalidConfiguration {
        base: u32,
    },
}

impl ParseError {
    pub fn reason(&self) -> FailureReason {
        match self {
            ParseError::EmptyInput => FailureReason::EmptyInput,
            ParseError::NonNumericCharacter { .. } => FailureReason::NonNumericCharacter,
            ParseError::PartialConsumption { .. } => FailureReason::PartialConsumption,
            ParseError::OutOfRange { .. } => FailureReason::OutOfRange,
            ParseError::InvalidConfiguration { .. } => FailureReason::InvalidConfiguration,
        }
    }

    /// True for failures caused by the token rather than by the caller's arguments.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, ParseError::InvalidConfiguration { .. })
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "empty input"),
            ParseError::NonNumericCharacter { found } => {
                write!(f, "{found:?} does not start a number")
            }
            ParseError::PartialConsumption { offset, found } => write!(
                f,
                "unexpected {found:?} at byte {offset} after numeric prefix"
            ),
            ParseError::OutOfRange { target } => {
                write!(f, "value does not fit in {target}")
            }
            ParseError::InvalidConfiguration { base } => {
                write!(f, "base {base} is not supported (expected 2..=36)")
            }
        }
    }
}

impl Error for ParseError {}
