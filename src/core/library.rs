use std::fmt;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        id: u64,
    },
    InvalidStatus {
        status: String,
    },
    // The catalog file exists but does not hold a list of book records.
    CorruptStore {
        message: String,
    },
    Io {
        message: String,
    },
}

impl LibraryError {
    pub fn not_found(id: u64) -> LibraryError {
        LibraryError::NotFound { id }
    }

    pub fn invalid_status(status: &str) -> LibraryError {
        LibraryError::InvalidStatus { status: status.to_string() }
    }

    pub fn corrupt_store(message: &str) -> LibraryError {
        LibraryError::CorruptStore { message: message.to_string() }
    }

    pub fn io(message: &str) -> LibraryError {
        LibraryError::Io { message: message.to_string() }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == ErrorKind::InvalidData {
            LibraryError::corrupt_store(format!("catalog file is not valid utf-8: {}", err).as_str())
        } else {
            LibraryError::io(format!("{}", err).as_str())
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            LibraryError::io(format!("{}", err).as_str())
        } else {
            LibraryError::corrupt_store(format!("{}", err).as_str())
        }
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { id } => {
                write!(f, "no book with ID {} was found", id)
            }
            LibraryError::InvalidStatus { status } => {
                write!(f, "invalid status '{}', valid statuses are '{}' and '{}'",
                       status, BookStatus::Available, BookStatus::Lent)
            }
            LibraryError::CorruptStore { message } => {
                write!(f, "corrupt catalog file: {}", message)
            }
            LibraryError::Io { message } => {
                write!(f, "catalog file i/o failed: {}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog and repository operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Lending state of a book.
///
/// `Unrecognized` only ever comes from a catalog file written by something
/// else; it keeps the stored text so that saving writes it back unchanged.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookStatus {
    Available,
    Lent,
    Unrecognized(String),
}

impl BookStatus {
    /// Parses a status supplied by the user. Only the two lending states are accepted.
    pub fn parse(s: &str) -> LibraryResult<BookStatus> {
        match s {
            "available" => Ok(BookStatus::Available),
            "lent" => Ok(BookStatus::Lent),
            _ => Err(LibraryError::invalid_status(s)),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, BookStatus::Unrecognized(_))
    }
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "available" => BookStatus::Available,
            "lent" => BookStatus::Lent,
            _ => BookStatus::Unrecognized(s),
        }
    }
}

impl From<BookStatus> for String {
    fn from(status: BookStatus) -> Self {
        match status {
            BookStatus::Unrecognized(s) => s,
            other => other.to_string(),
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "available"),
            BookStatus::Lent => write!(f, "lent"),
            BookStatus::Unrecognized(s) => write!(f, "{}", s),
        }
    }
}
