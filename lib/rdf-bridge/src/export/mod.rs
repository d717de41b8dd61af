//! Conversion from the generic model into the graph-centric model.

mod exporter;
mod source;

pub use exporter::{Exported, GraphModelExporter};
pub use source::GenericSource;
