//! Error classification shared by the model types

use std::fmt::{self, Display, Formatter};

/// Broad category of a model error
///
/// Every error returned by [`Artifact`](crate::Artifact) and
/// [`Prototype`](crate::Prototype) maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required input was missing or out of range
    InvalidArgument,
    /// Stored text could not be parsed
    Format,
    /// Stored data parsed but violates an invariant
    InvalidState,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidArgument => "invalid argument",
            Self::Format => "format error",
            Self::InvalidState => "invalid state",
        };
        f.write_str(name)
    }
}
