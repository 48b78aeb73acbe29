use std::fmt;

/// Failure conditions of the task list store.
///
/// Errors are returned, never logged. `code()` is the stable,
/// machine-readable discriminant; `Display` renders `code - detail`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Carries the offending 1-based position.
    PositionOutOfRange(usize),
    Parse(String),
    Io(String),
}

impl StoreError {
    pub fn position_out_of_range(position: usize) -> Self {
        Self::PositionOutOfRange(position)
    }

    pub fn parse<M: Into<String>>(message: M) -> Self {
        Self::Parse(message.into())
    }

    pub fn io<M: Into<String>>(message: M) -> Self {
        Self::Io(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::PositionOutOfRange(_) => "position_out_of_range",
            Self::Parse(_) => "parse_error",
            Self::Io(_) => "io_error",
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionOutOfRange(position) => {
                write!(f, "{} - item {} does not exist", self.code(), position)
            }
            Self::Parse(message) | Self::Io(message) => {
                write!(f, "{} - {}", self.code(), message)
            }
        }
    }
}

impl std::error::Error for StoreError {}
