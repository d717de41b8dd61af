use rdf_bridge_graph::{Graph, GraphLiteral, ResourceRef};

/// An entity of the graph-centric model that can be imported into the generic model.
#[derive(Clone, Copy, Debug)]
pub enum GraphSource<'graph> {
    Literal(&'graph GraphLiteral),
    Resource(ResourceRef<'graph>),
    Graph(&'graph Graph),
}

impl GraphSource<'_> {
    /// Returns the name of the variant. Used for error reporting.
    pub fn type_name(&self) -> &'static str {
        match self {
            GraphSource::Literal(_) => "Literal",
            GraphSource::Resource(_) => "Resource",
            GraphSource::Graph(_) => "Graph",
        }
    }
}

impl<'graph> From<&'graph GraphLiteral> for GraphSource<'graph> {
    fn from(value: &'graph GraphLiteral) -> Self {
        GraphSource::Literal(value)
    }
}

impl<'graph> From<ResourceRef<'graph>> for GraphSource<'graph> {
    fn from(value: ResourceRef<'graph>) -> Self {
        GraphSource::Resource(value)
    }
}

impl<'graph> From<&'graph Graph> for GraphSource<'graph> {
    fn from(value: &'graph Graph) -> Self {
        GraphSource::Graph(value)
    }
}
