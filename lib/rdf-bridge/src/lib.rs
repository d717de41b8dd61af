#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod error;
pub mod export;
pub mod import;

pub mod model {
    pub use rdf_bridge_model::*;
}

pub mod graph {
    pub use rdf_bridge_graph::*;
}
