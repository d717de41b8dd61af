//! A graph-centric RDF model.
//!
//! A [Graph] owns a collection of resources. Each resource holds an ordered multi-map from
//! predicate URIs to values, where a value is either another resource of the same graph or a
//! [GraphLiteral]. Resources are accessed through borrowed views ([ResourceRef] and
//! [ResourceMut]) that carry a reference to their graph.

mod graph;
mod literal;
mod namespace;
mod resource;
mod value;

pub use graph::Graph;
pub use literal::GraphLiteral;
pub use namespace::Namespaces;
pub use resource::{ResourceMut, ResourceRef};
pub use value::{ResourceId, Value};
