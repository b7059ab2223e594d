//! Isolation Engine error type.

use std::error;
use std::fmt::{self, Display};
use std::result;

/// Isolation Engine generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for the Isolation engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Remaining search time fell to or below the safety threshold.
    /// Recovered by iterative deepening, never returned from `Engine::get_move`.
    DeadlineExceeded,

    /// A move was applied to a position that does not allow it.
    IllegalMove,
    /// Legal moves handed to the engine disagree with the position they belong to.
    InconsistentLegalMoves,
    /// Board dimensions are zero or exceed the cells a bitboard can hold.
    BoardSize,

    /// Move parse string malformed.
    ParseMoveMalformed,
    /// Player parse string malformed.
    ParsePlayerMalformed,
    /// Evaluator parse string malformed.
    ParseEvaluatorMalformed,
    /// Search method parse string malformed.
    ParseMethodMalformed,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::DeadlineExceeded => "deadline exceeded",

            ErrorKind::IllegalMove => "illegal move",
            ErrorKind::InconsistentLegalMoves => "inconsistent legal moves",
            ErrorKind::BoardSize => "board size",

            ErrorKind::ParseMoveMalformed => "parse move malformed",
            ErrorKind::ParsePlayerMalformed => "parse player malformed",
            ErrorKind::ParseEvaluatorMalformed => "parse evaluator malformed",
            ErrorKind::ParseMethodMalformed => "parse method malformed",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the Isolation Engine.
#[derive(Debug)]
pub enum Error {
    Simple(ErrorKind),
    Message(ErrorKind, String),
    Custom(ErrorKind, Box<dyn error::Error + Send + Sync>),
}

impl Error {
    pub fn new<E>(error_kind: ErrorKind, inner_error: E) -> Self
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Self::Custom(error_kind, inner_error.into())
    }

    /// Returns the kind of this error, regardless of any attached context.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Simple(error_kind) => *error_kind,
            Error::Message(error_kind, _) => *error_kind,
            Error::Custom(error_kind, _) => *error_kind,
        }
    }

    /// Returns true if this error signals that a search ran out of time.
    pub fn is_deadline(&self) -> bool {
        self.kind() == ErrorKind::DeadlineExceeded
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Simple(error_kind) => {
                write!(f, "{error_kind}")
            }
            Error::Message(error_kind, string) => {
                write!(f, "{error_kind}: {string}")
            }
            Error::Custom(error_kind, ref box_error) => {
                write!(f, "{error_kind}, error: {}", *box_error)
            }
        }
    }
}

impl error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_survives_context() {
        let simple: Error = ErrorKind::DeadlineExceeded.into();
        let message: Error = (ErrorKind::IllegalMove, "(9, 9)").into();
        let custom = Error::new(ErrorKind::ParseMoveMalformed, "bad digit");

        assert!(simple.is_deadline());
        assert_eq!(message.kind(), ErrorKind::IllegalMove);
        assert_eq!(custom.kind(), ErrorKind::ParseMoveMalformed);
        assert!(!custom.is_deadline());
        assert_eq!(message.to_string(), "illegal move: (9, 9)");
    }
}
