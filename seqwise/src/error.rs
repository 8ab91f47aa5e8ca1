use strum::EnumMessage;
use strum_macros::{Display, EnumMessage};
use thiserror::Error;

/// The two ways a sequence operation can fail.
///
/// Every [`Error`] belongs to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumMessage)]
pub enum ErrorKind {
    /// Invalid argument.
    ///
    /// A value passed to an operation is outside of the domain the operation
    /// accepts. This is raised at the call that supplies the value, before
    /// any element is produced.
    InvalidArgument,
    /// Invalid operation.
    ///
    /// A terminal operation found that the sequence does not satisfy its
    /// precondition, such as asking for the first element of an empty
    /// sequence.
    InvalidOperation,
}

impl ErrorKind {
    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("");
            let second = pieces.next().unwrap_or("");
            (first, second)
        } else {
            ("", "")
        }
    }
}

/// Sequence error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `skip` or `take` was given a negative count.
    #[error("{operation} count must not be negative, got {count}")]
    NegativeCount { operation: &'static str, count: i64 },
    /// The sequence has no element to return.
    #[error("sequence contains no elements")]
    Empty,
    /// The sequence was expected to hold a single element but holds more.
    #[error("sequence contains more than one element")]
    MoreThanOne,
    /// Two elements could not be compared while sorting.
    #[error("sequence elements cannot be compared")]
    NotComparable,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NegativeCount { .. } => ErrorKind::InvalidArgument,
            Error::Empty | Error::MoreThanOne | Error::NotComparable => {
                ErrorKind::InvalidOperation
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
