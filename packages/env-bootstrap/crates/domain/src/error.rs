use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::entities::StepKind;
use crate::ports::ProcessError;

/// Coarse classification used for exit handling and user guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingPrerequisite,
    ProcessFailure,
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingPrerequisite => write!(f, "missing prerequisite"),
            ErrorKind::ProcessFailure => write!(f, "process failure"),
            ErrorKind::Io => write!(f, "i/o error"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Missing {what}: {}", path.display())]
    MissingPrerequisite { what: String, path: PathBuf },

    #[error("No Python interpreter found on PATH (tried: {})", candidates.join(", "))]
    InterpreterNotFound { candidates: Vec<String> },

    #[error("Command failed ({}): {command}{}", exit_label(*code), detail_suffix(detail))]
    ProcessFailed {
        command: String,
        code: Option<i32>,
        detail: String,
    },

    #[error(transparent)]
    Spawn(#[from] ProcessError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BootstrapError {
    pub fn missing(what: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        BootstrapError::MissingPrerequisite {
            what: what.into(),
            path: path.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BootstrapError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BootstrapError::MissingPrerequisite { .. } | BootstrapError::InterpreterNotFound { .. } => {
                ErrorKind::MissingPrerequisite
            }
            BootstrapError::Spawn(ProcessError::SearchPath { .. }) => ErrorKind::Io,
            // A program that cannot be started is as good as absent.
            BootstrapError::Spawn(ProcessError::Spawn { .. }) => ErrorKind::MissingPrerequisite,
            BootstrapError::ProcessFailed { .. } => ErrorKind::ProcessFailure,
            BootstrapError::Io { .. } => ErrorKind::Io,
        }
    }
}

fn exit_label(code: Option<i32>) -> String {
    match code {
        Some(c) => format!("exit {}", c),
        None => "terminated by signal".to_string(),
    }
}

fn detail_suffix(detail: &str) -> String {
    if detail.is_empty() {
        String::new()
    } else {
        format!("\n{}", detail)
    }
}

/// The first failure of a run, tagged with the step it came from.
#[derive(Error, Debug)]
#[error("{step} failed: {error}")]
pub struct SequenceError {
    pub step: StepKind,
    #[source]
    pub error: BootstrapError,
}

impl SequenceError {
    pub fn new(step: StepKind, error: BootstrapError) -> Self {
        Self { step, error }
    }

    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}
