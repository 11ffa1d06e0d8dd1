//! Error types

/// Error generating or parsing a UUID.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The random number source could not produce bytes.
    #[error("entropy source failure: {0}")]
    Entropy(#[from] rand::Error),

    /// The text could not be parsed as a UUID.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The counter is exhausted and the timestamp is already at the largest value its field
    /// can hold, so no greater value can be issued.
    #[error("timestamp field exhausted: no greater value can be issued")]
    TimestampOverflow,

    /// The user or group id of the current process could not be determined.
    #[error("process identity unavailable: {0}")]
    ProcessIdentity(&'static str),
}

/// Error parsing an invalid string representation of UUID.
///
/// Positions are byte offsets into the input string.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum ParseError {
    /// The input length matches none of the accepted notations.
    #[error("invalid length {len}: expected 32 (compact), 36 (canonical), 38 (braced) or 45 (urn) characters")]
    InvalidLength { len: usize },

    /// A literal separator, brace, or prefix character does not match.
    #[error("invalid character {found:?} at position {index}: expected {expected:?}")]
    UnexpectedCharacter {
        index: usize,
        found: char,
        expected: char,
    },

    /// A character in a hex digit position is not a hex digit.
    #[error("invalid hex digit {found:?} at position {index}")]
    InvalidDigit { index: usize, found: char },
}

impl ParseError {
    /// Returns the byte offset of the offending character, if the error names one.
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::InvalidLength { .. } => None,
            Self::UnexpectedCharacter { index, .. } | Self::InvalidDigit { index, .. } => {
                Some(*index)
            }
        }
    }
}
