use rdf_bridge_model::TermError;

/// A result of a conversion.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// An error raised while converting between the generic and the graph-centric model.
///
/// All errors are terminal for the conversion call that raised them.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConversionError {
    /// The input does not match any shape the requested operation can process (e.g., a quoted
    /// triple as the object of a quad).
    #[error("Unprocessable term type: {type_name}")]
    UnsupportedShape {
        /// The name of the rejected shape.
        type_name: &'static str,
    },
    /// A container produced by a caller-supplied factory does not satisfy the required contract.
    #[error("Contract violation: expected {expected}, got {actual}")]
    ContractViolation {
        /// What the factory should have produced.
        expected: String,
        /// What the factory produced.
        actual: String,
    },
    /// A resource without properties was treated as a triple.
    #[error("Resource {resource} contains no triples, therefore it can't be converted to a quad")]
    EmptyResource {
        /// The rejected resource.
        resource: String,
    },
    /// The term factory rejected a value.
    #[error(transparent)]
    Term(#[from] TermError),
}

impl ConversionError {
    pub(crate) fn unsupported(type_name: &'static str) -> Self {
        Self::UnsupportedShape { type_name }
    }
}
