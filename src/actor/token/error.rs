//! Tokenizer errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// A field of a tag line is not `@` followed by a valid name. `ordinal` is 1-based.
    #[error("Tag '{field}' (#{ordinal} on the line) is not valid")]
    InvalidTag { field: String, ordinal: usize },

    #[error("Unrecognised keyword '{0}'")]
    UnknownKeyword(String),
}
