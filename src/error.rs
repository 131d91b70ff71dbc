use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum SchedulerError {
    Io(io::Error),
    Csv(csv::Error),
    Serialization(SerdeJsonError),
    /// An enrollment line that could not be turned into a record. `line` is 1-based.
    MalformedRecord { line: usize, reason: String },
    InvalidConfig(String),
    /// A stored period assignment that is not a dense one-period-per-course mapping.
    InvalidColoring(String),
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerError::Io(err) => write!(f, "io error: {err}"),
            SchedulerError::Csv(err) => write!(f, "csv error: {err}"),
            SchedulerError::Serialization(err) => write!(f, "serialization error: {err}"),
            SchedulerError::MalformedRecord { line, reason } => {
                write!(f, "malformed enrollment record on line {line}: {reason}")
            }
            SchedulerError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            SchedulerError::InvalidColoring(msg) => write!(f, "invalid coloring: {msg}"),
        }
    }
}

impl std::error::Error for SchedulerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SchedulerError::Io(err) => Some(err),
            SchedulerError::Csv(err) => Some(err),
            SchedulerError::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SchedulerError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for SchedulerError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<SerdeJsonError> for SchedulerError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
