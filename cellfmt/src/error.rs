//! Error types for cellfmt

use thiserror::Error;

/// Errors that can occur while formatting a value.
///
/// Transforms with a natural fallback (`N/A`, a placeholder, the input
/// itself) never produce these; they surface only from hard failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellfmtError {
    /// No transform is registered under the requested name
    #[error("no formatter registered under '{0}'")]
    UnknownFormatter(String),

    /// The value could not be converted to a number
    #[error("could not convert '{value}' to a number")]
    InvalidNumber { value: String },

    /// More positional arguments than the transform declares
    #[error("{transform}() takes at most {max} extra arguments ({given} given)")]
    TooManyArguments {
        transform: String,
        max: usize,
        given: usize,
    },

    /// A parameter was supplied both positionally and by name
    #[error("{transform}() got multiple values for argument '{name}'")]
    DuplicateArgument { transform: String, name: String },

    /// Arguments did not match the transform's option record
    #[error("invalid arguments for {transform}(): {message}")]
    InvalidArguments { transform: String, message: String },
}
