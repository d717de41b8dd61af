mod dataset;
mod error;
mod factory;

pub use dataset::*;
pub use error::*;
pub use factory::*;

// Re-export some oxrdf types.
pub use oxrdf::vocab;
pub use oxrdf::Dataset as MemDataset;
pub use oxrdf::{
    BlankNode, BlankNodeIdParseError, BlankNodeRef, GraphName, GraphNameRef, IriParseError, Literal,
    LiteralRef, NamedNode, NamedNodeRef, NamedOrBlankNode, NamedOrBlankNodeRef, Quad, QuadRef,
    Subject, SubjectRef, Term, TermRef, Triple, TripleRef,
};
