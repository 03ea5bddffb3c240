use std::io;

use thiserror::Error;

/// Failure to turn text into a [`Document`](crate::Document).
///
/// Parsing stops at the first error, so at most one of these is produced per parse.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read data")]
    ReadFailure {
        #[source]
        source: io::Error,
    },
    #[error("line {line}: {kind}: {text:?}")]
    Syntax {
        line: usize,
        text: String,
        kind: SyntaxErrorKind,
    },
    #[error("line {line}: section [{name}] is declared more than once: {text:?}")]
    DuplicateSection {
        name: String,
        line: usize,
        text: String,
    },
    #[error("parsing already stopped at line {line}")]
    Aborted { line: usize },
}

impl ParseError {
    /// The 1-based line number the error was found on, if it relates to a line.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match *self {
            Self::Syntax { line, .. }
            | Self::DuplicateSection { line, .. }
            | Self::Aborted { line } => Some(line),
            Self::ReadFailure { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("mismatched section brackets")]
    UnbalancedBrackets,
    #[error("section name cannot be empty")]
    EmptySectionName,
    #[error("value without a key")]
    EmptyKey,
    #[error("expected a section header or a key = value pair")]
    MissingEquals,
    #[error("key = value pair appears before any section header")]
    KeyOutsideSection,
}

/// Failure of a lookup or update on an already-built document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("section name or key cannot be empty")]
    EmptySelector,
    #[error("section [{section}] does not exist")]
    SectionNotFound { section: String },
    #[error("key {key:?} does not exist in section [{section}]")]
    KeyNotFound { section: String, key: String },
}
