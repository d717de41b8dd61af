use oxrdf::{BlankNodeIdParseError, IriParseError};
use std::error::Error;

/// An error raised by a [TermFactory](crate::TermFactory) when a primitive value cannot be turned
/// into a term.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TermError {
    /// The value is not a valid IRI.
    #[error(transparent)]
    InvalidIri(#[from] IriParseError),
    /// The value is not a valid blank node identifier.
    #[error(transparent)]
    InvalidBlankNodeId(#[from] BlankNodeIdParseError),
    /// The value is not a valid BCP47 language tag.
    #[error("Invalid language tag '{tag}': {error}")]
    InvalidLanguageTag {
        /// The rejected tag.
        tag: String,
        /// The parsing error.
        #[source]
        error: Box<dyn Error + Send + Sync + 'static>,
    },
}
