use rdf_bridge_model::{
    BlankNode, BlankNodeRef, Dataset, DatasetNode, Literal, LiteralRef, MemDataset,
    MemDatasetNode, NamedNode, NamedNodeRef, Quad, QuadRef, SubjectRef, TermRef, Triple,
};

/// An entity of the generic model that can be exported into a [Graph](rdf_bridge_graph::Graph).
pub enum GenericSource<'a> {
    Literal(LiteralRef<'a>),
    NamedNode(NamedNodeRef<'a>),
    BlankNode(BlankNodeRef<'a>),
    /// A quoted triple. Cannot be represented in the graph-centric model.
    Triple(&'a Triple),
    Quad(QuadRef<'a>),
    DatasetNode(&'a dyn DatasetNode),
    Dataset(&'a dyn Dataset),
    /// A sequence of quads that is consumed by the export.
    Quads(Box<dyn Iterator<Item = Quad> + 'a>),
}

impl<'a> GenericSource<'a> {
    /// Creates a [GenericSource] from a sequence of quads.
    pub fn from_quads<I>(quads: I) -> Self
    where
        I: IntoIterator<Item = Quad>,
        I::IntoIter: 'a,
    {
        GenericSource::Quads(Box::new(quads.into_iter()))
    }

    /// Returns the name of the variant. Used for error reporting.
    pub fn type_name(&self) -> &'static str {
        match self {
            GenericSource::Literal(_) => "Literal",
            GenericSource::NamedNode(_) => "NamedNode",
            GenericSource::BlankNode(_) => "BlankNode",
            GenericSource::Triple(_) => "Triple",
            GenericSource::Quad(_) => "Quad",
            GenericSource::DatasetNode(_) => "DatasetNode",
            GenericSource::Dataset(_) => "Dataset",
            GenericSource::Quads(_) => "Quads",
        }
    }
}

impl<'a> From<LiteralRef<'a>> for GenericSource<'a> {
    fn from(value: LiteralRef<'a>) -> Self {
        GenericSource::Literal(value)
    }
}

impl<'a> From<&'a Literal> for GenericSource<'a> {
    fn from(value: &'a Literal) -> Self {
        GenericSource::Literal(value.as_ref())
    }
}

impl<'a> From<NamedNodeRef<'a>> for GenericSource<'a> {
    fn from(value: NamedNodeRef<'a>) -> Self {
        GenericSource::NamedNode(value)
    }
}

impl<'a> From<&'a NamedNode> for GenericSource<'a> {
    fn from(value: &'a NamedNode) -> Self {
        GenericSource::NamedNode(value.as_ref())
    }
}

impl<'a> From<BlankNodeRef<'a>> for GenericSource<'a> {
    fn from(value: BlankNodeRef<'a>) -> Self {
        GenericSource::BlankNode(value)
    }
}

impl<'a> From<&'a BlankNode> for GenericSource<'a> {
    fn from(value: &'a BlankNode) -> Self {
        GenericSource::BlankNode(value.as_ref())
    }
}

impl<'a> From<&'a Triple> for GenericSource<'a> {
    fn from(value: &'a Triple) -> Self {
        GenericSource::Triple(value)
    }
}

impl<'a> From<QuadRef<'a>> for GenericSource<'a> {
    fn from(value: QuadRef<'a>) -> Self {
        GenericSource::Quad(value)
    }
}

impl<'a> From<&'a Quad> for GenericSource<'a> {
    fn from(value: &'a Quad) -> Self {
        GenericSource::Quad(value.as_ref())
    }
}

impl<'a> From<TermRef<'a>> for GenericSource<'a> {
    fn from(value: TermRef<'a>) -> Self {
        match value {
            TermRef::NamedNode(node) => GenericSource::NamedNode(node),
            TermRef::BlankNode(node) => GenericSource::BlankNode(node),
            TermRef::Literal(literal) => GenericSource::Literal(literal),
            TermRef::Triple(triple) => GenericSource::Triple(triple),
        }
    }
}

impl<'a> From<SubjectRef<'a>> for GenericSource<'a> {
    fn from(value: SubjectRef<'a>) -> Self {
        match value {
            SubjectRef::NamedNode(node) => GenericSource::NamedNode(node),
            SubjectRef::BlankNode(node) => GenericSource::BlankNode(node),
            SubjectRef::Triple(triple) => GenericSource::Triple(triple),
        }
    }
}

impl<'a> From<&'a MemDataset> for GenericSource<'a> {
    fn from(value: &'a MemDataset) -> Self {
        GenericSource::Dataset(value)
    }
}

impl<'a> From<&'a MemDatasetNode> for GenericSource<'a> {
    fn from(value: &'a MemDatasetNode) -> Self {
        GenericSource::DatasetNode(value)
    }
}
