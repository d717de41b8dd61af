//! Conversion from the graph-centric model into the generic model.

mod importer;
mod merge;
mod quads;
mod source;

pub use importer::{GenericModelImporter, Imported};
pub use merge::{Container, Target};
pub use quads::QuadIter;
pub use source::GraphSource;
