//! Error types for configuration and composition.

use thiserror::Error;

use crate::options::ComponentKind;

/// Errors that can occur when reading selector configuration from strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("unknown era format '{0}' (expected ja_long, ja_short or alphabet)")]
    UnknownEraFormat(String),

    #[error("unknown date/time component '{0}'")]
    UnknownComponent(String),
}

/// Errors that can occur at composition entry, before any field is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("component '{0}' appears more than once in order")]
    DuplicateComponent(ComponentKind),
}
