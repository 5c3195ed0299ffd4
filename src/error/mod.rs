//! Centralized error handling for uarg
//! Defines the crate error type and its categories

use std::fmt;

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A host dispatch failed while executing or replaying a command
    Dispatch,
    /// The host does not know the requested command
    UnknownCommand,
    /// An operation referenced a view the host does not have
    View,
    /// Internal logic or invariant violations
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dispatch => write!(f, "Dispatch"),
            Self::UnknownCommand => write!(f, "UnknownCommand"),
            Self::View => write!(f, "View"),
            Self::Internal => write!(f, "Internal"),
        }
    }
}

/// A structured error in uarg
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UargError {
    /// What kind of error occurred
    pub kind: ErrorKind,
    /// Machine-readable error code (e.g., "UNKNOWN_COMMAND")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl UargError {
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// A dispatch rejected because the host has no such command.
    pub fn unknown_command(name: &str) -> Self {
        Self::new(
            ErrorKind::UnknownCommand,
            "UNKNOWN_COMMAND",
            format!("no such command: {name}"),
        )
    }

    /// A dispatch that reached the host but failed there.
    pub fn dispatch(name: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Dispatch,
            "DISPATCH_FAILED",
            format!("command {name} failed: {}", message.into()),
        )
    }
}

impl fmt::Display for UargError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}] {}", self.kind, self.code, self.message)
    }
}

impl std::error::Error for UargError {}
