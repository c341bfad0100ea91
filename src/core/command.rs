use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    Validation {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
    },
}

impl CommandError {
    pub fn validation(message: &str) -> CommandError {
        CommandError::Validation { message: message.to_string() }
    }

    // recoverable errors are reported and the session goes on
    pub fn recoverable(&self) -> bool {
        matches!(self, CommandError::NotFound { .. } | CommandError::Validation { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            CommandError::NotFound { message } => { message }
            CommandError::Validation { message } => { message }
            CommandError::Serialization { message } => { message }
            CommandError::Runtime { message } => { message }
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        let message = other.to_string();
        match other {
            LibraryError::NotFound { .. } => {
                CommandError::NotFound { message }
            }
            LibraryError::InvalidStatus { .. } => {
                CommandError::Validation { message }
            }
            LibraryError::CorruptStore { .. } => {
                CommandError::Serialization { message }
            }
            LibraryError::Io { .. } => {
                CommandError::Runtime { message }
            }
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::Runtime { message: format!("terminal i/o failed: {}", err) }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CommandError {}
