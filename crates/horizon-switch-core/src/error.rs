//! Error types for Horizon Switch.

use std::fmt;

/// The main error type for Horizon Switch core operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Element registry error.
    Registry(RegistryError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registry(err) => write!(f, "Registry error: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Registry(err) => Some(err),
        }
    }
}

impl From<RegistryError> for CoreError {
    fn from(err: RegistryError) -> Self {
        Self::Registry(err)
    }
}

/// Errors raised by the element registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A definition already exists for this tag name.
    DuplicateDefinition {
        /// The tag name that was already defined.
        tag: String,
    },
    /// The tag name is not a valid custom element name.
    InvalidTagName {
        /// The rejected tag name.
        tag: String,
        /// Why the name was rejected.
        reason: &'static str,
    },
    /// No definition exists for this tag name.
    UnknownTag {
        /// The tag name that was looked up.
        tag: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDefinition { tag } => {
                write!(f, "An element named '{tag}' has already been defined")
            }
            Self::InvalidTagName { tag, reason } => {
                write!(f, "'{tag}' is not a valid custom element name: {reason}")
            }
            Self::UnknownTag { tag } => write!(f, "No element named '{tag}' has been defined"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// A specialized Result type for Horizon Switch core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
