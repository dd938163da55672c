//! Error types for ayanamsa method resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from resolving an ayanamsa method name.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AyanamsaError {
    /// Method name is not one of the recognized methods.
    InvalidMethod(String),
}

impl Display for AyanamsaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMethod(name) => write!(
                f,
                "invalid ayanamsa method: {name} (valid: Lahiri, Fagan-Bradley, Krishnamurti, Raman)"
            ),
        }
    }
}

impl Error for AyanamsaError {}
