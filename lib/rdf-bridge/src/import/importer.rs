use crate::error::{ConversionError, ConversionResult};
use crate::import::{Container, GraphSource, QuadIter, Target};
use rdf_bridge_graph::{Graph, GraphLiteral, Namespaces, ResourceId, ResourceRef, Value};
use rdf_bridge_model::{
    BlankNode, Dataset, DatasetNode, DefaultTermFactory, Literal, NamedNode, NamedOrBlankNode,
    Quad, Subject, Term, TermFactory,
};
use rdf_bridge_model::vocab::rdf;
use tracing::debug;

/// The result of [GenericModelImporter::import_any].
#[derive(Debug)]
pub enum Imported<'a, F> {
    Literal(Literal),
    BlankNode(BlankNode),
    NamedNode(NamedNode),
    Quads(QuadIter<'a, F>),
}

impl<'a, F> Imported<'a, F> {
    /// Returns the imported term, or [None] if the result is a quad sequence.
    pub fn into_term(self) -> Option<Term> {
        match self {
            Imported::Literal(literal) => Some(literal.into()),
            Imported::BlankNode(node) => Some(node.into()),
            Imported::NamedNode(node) => Some(node.into()),
            Imported::Quads(_) => None,
        }
    }

    pub fn into_quads(self) -> Option<QuadIter<'a, F>> {
        match self {
            Imported::Quads(quads) => Some(quads),
            Imported::Literal(_) | Imported::BlankNode(_) | Imported::NamedNode(_) => None,
        }
    }
}

/// Converts entities of the graph-centric model into the generic model.
///
/// Terms are created with the configured [TermFactory]. Prefixed datatypes of literals are
/// expanded with the configured [Namespaces] before they reach the factory.
///
/// Converting a resource is ambiguous: it can either denote a term (a named or blank node) or the
/// set of triples that have the resource as their subject. [GenericModelImporter::import_any]
/// resolves the ambiguity by looking at the properties of the resource, while
/// [GenericModelImporter::import_term] and [GenericModelImporter::import_quads] always pick one
/// interpretation.
#[derive(Clone, Debug)]
pub struct GenericModelImporter<F> {
    factory: F,
    namespaces: Namespaces,
}

impl Default for GenericModelImporter<DefaultTermFactory> {
    fn default() -> Self {
        Self::new(DefaultTermFactory)
    }
}

impl<F: TermFactory> GenericModelImporter<F> {
    /// Creates a new importer that uses the default [Namespaces].
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            namespaces: Namespaces::default(),
        }
    }

    /// Replaces the namespaces used for expanding prefixed datatypes.
    #[must_use]
    pub fn with_namespaces(mut self, namespaces: Namespaces) -> Self {
        self.namespaces = namespaces;
        self
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    pub fn namespaces_mut(&mut self) -> &mut Namespaces {
        &mut self.namespaces
    }

    /// Imports `source` using the following mapping:
    /// - [GraphLiteral] → [Literal]
    /// - resource without properties → [BlankNode] or [NamedNode]
    /// - resource with at least one property → the quads that have the resource as subject
    /// - [Graph] → all quads of the graph (also if the graph is empty)
    pub fn import_any<'a>(
        &'a self,
        source: impl Into<GraphSource<'a>>,
    ) -> ConversionResult<Imported<'a, F>> {
        match source.into() {
            GraphSource::Literal(literal) => Ok(Imported::Literal(self.import_literal(literal)?)),
            GraphSource::Resource(resource) if resource.has_properties() => {
                Ok(Imported::Quads(QuadIter::for_resource(self, resource)?))
            }
            GraphSource::Resource(resource) => Ok(match self.import_node(resource.id())? {
                NamedOrBlankNode::NamedNode(node) => Imported::NamedNode(node),
                NamedOrBlankNode::BlankNode(node) => Imported::BlankNode(node),
            }),
            GraphSource::Graph(graph) => Ok(Imported::Quads(QuadIter::for_graph(self, graph)?)),
        }
    }

    /// Returns a lazy sequence of quads.
    ///
    /// For a graph, the sequence contains the quads of all resources. For a resource, the
    /// sequence only contains the quads that have the resource as subject. The graph component of
    /// each quad is the URI of the graph, or the default graph if the graph has no URI.
    pub fn import_quads<'a>(
        &'a self,
        source: impl Into<GraphSource<'a>>,
    ) -> ConversionResult<QuadIter<'a, F>> {
        match source.into() {
            GraphSource::Resource(resource) => QuadIter::for_resource(self, resource),
            GraphSource::Graph(graph) => QuadIter::for_graph(self, graph),
            source @ GraphSource::Literal(_) => {
                Err(ConversionError::unsupported(source.type_name()))
            }
        }
    }

    /// Imports `source` as a single term.
    ///
    /// Unlike [GenericModelImporter::import_any], a resource is always converted into a
    /// [BlankNode] or a [NamedNode], regardless of its properties.
    pub fn import_term<'a>(&self, source: impl Into<GraphSource<'a>>) -> ConversionResult<Term> {
        match source.into() {
            GraphSource::Literal(literal) => Ok(self.import_literal(literal)?.into()),
            GraphSource::Resource(resource) => Ok(node_into_term(self.import_node(resource.id())?)),
            source @ GraphSource::Graph(_) => Err(ConversionError::unsupported(source.type_name())),
        }
    }

    /// Imports a literal. A prefixed datatype is expanded before it is passed to the factory.
    ///
    /// A literal typed as `rdf:langString` must carry a language tag.
    pub fn import_literal(&self, literal: &GraphLiteral) -> ConversionResult<Literal> {
        let datatype = literal.datatype().map(|d| self.namespaces.expand(d));
        if literal.language().is_none() && datatype.as_deref() == Some(rdf::LANG_STRING.as_str()) {
            return Err(ConversionError::unsupported("LangStringWithoutLanguage"));
        }
        Ok(self
            .factory
            .literal(literal.value(), literal.language(), datatype.as_deref())?)
    }

    /// Imports a named node from a URI.
    pub fn import_named_node(&self, uri: &str) -> ConversionResult<NamedNode> {
        Ok(self.factory.named_node(uri)?)
    }

    /// Imports a blank node from a label. The `_:` prefix is optional.
    pub fn import_blank_node(&self, label: &str) -> ConversionResult<BlankNode> {
        let label = label.strip_prefix("_:").unwrap_or(label);
        Ok(self.factory.blank_node(Some(label))?)
    }

    /// Treats `resource` as a single triple.
    ///
    /// The first property of the resource becomes the predicate and the first value of this
    /// property becomes the object. The URI of the graph that owns the resource becomes the graph
    /// component.
    pub fn import_quad(&self, resource: ResourceRef<'_>) -> ConversionResult<Quad> {
        let first = resource
            .property_at(0)
            .and_then(|(predicate, values)| Some((predicate, values.first()?)));
        let Some((predicate, value)) = first else {
            return Err(ConversionError::EmptyResource {
                resource: resource.id().to_string(),
            });
        };

        let graph_name = self.import_graph_name(resource.graph())?;
        Ok(self.factory.quad(
            self.import_subject(resource)?,
            self.factory.named_node(predicate)?,
            self.import_value(value)?,
            graph_name,
        ))
    }

    /// Appends the quads of `source` to a dataset or to the dataset of a dataset node.
    ///
    /// If `target` is a dataset node and `source` is a resource, the node is re-focused on the
    /// resource. If `target` is a factory, it is called first (with the converted resource, if
    /// any). A dataset node produced by a factory must be focused on the converted resource.
    ///
    /// `whole_graph` controls whether the whole graph of a resource is merged (`true`) or only the
    /// quads that have the resource as subject (`false`). If not given, it defaults to `true` for
    /// datasets and to `false` for dataset nodes, based on the resolved container.
    pub fn merge_into<'a, D: Dataset, N: DatasetNode>(
        &self,
        source: impl Into<GraphSource<'a>>,
        target: Target<'_, Container<D, N>>,
        whole_graph: Option<bool>,
    ) -> ConversionResult<Container<D, N>> {
        let source = source.into();
        let term = self.source_term(source)?;
        let from_factory = target.is_factory();

        let container = match target.resolve(term.clone()) {
            Container::DatasetNode(node) => {
                Container::DatasetNode(focus(node, term, from_factory)?)
            }
            container @ Container::Dataset(_) => container,
        };

        let whole_graph = whole_graph.unwrap_or(matches!(container, Container::Dataset(_)));
        match container {
            Container::Dataset(mut dataset) => {
                self.merge_quads(source, whole_graph, &mut dataset)?;
                Ok(Container::Dataset(dataset))
            }
            Container::DatasetNode(mut node) => {
                self.merge_quads(source, whole_graph, node.dataset_mut())?;
                Ok(Container::DatasetNode(node))
            }
        }
    }

    /// Appends the quads of `source` to a dataset.
    ///
    /// `whole_graph` defaults to `true`. See [GenericModelImporter::merge_into].
    pub fn merge_into_dataset<'a, D: Dataset>(
        &self,
        source: impl Into<GraphSource<'a>>,
        target: Target<'_, D>,
        whole_graph: Option<bool>,
    ) -> ConversionResult<D> {
        let source = source.into();
        let term = self.source_term(source)?;
        let mut dataset = target.resolve(term);
        self.merge_quads(source, whole_graph.unwrap_or(true), &mut dataset)?;
        Ok(dataset)
    }

    /// Appends the quads of `resource` to the dataset of a dataset node that is focused on
    /// `resource`.
    ///
    /// `whole_graph` defaults to `false`. See [GenericModelImporter::merge_into].
    pub fn merge_into_dataset_node<N: DatasetNode>(
        &self,
        resource: ResourceRef<'_>,
        target: Target<'_, N>,
        whole_graph: Option<bool>,
    ) -> ConversionResult<N> {
        let term = node_into_term(self.import_node(resource.id())?);
        let from_factory = target.is_factory();
        let node = target.resolve(Some(term.clone()));
        let mut node = focus(node, Some(term), from_factory)?;
        self.merge_quads(resource.into(), whole_graph.unwrap_or(false), node.dataset_mut())?;
        Ok(node)
    }

    /// Returns the converted term of a resource source, [None] for a graph source.
    fn source_term(&self, source: GraphSource<'_>) -> ConversionResult<Option<Term>> {
        match source {
            GraphSource::Resource(resource) => {
                Ok(Some(node_into_term(self.import_node(resource.id())?)))
            }
            GraphSource::Graph(_) => Ok(None),
            GraphSource::Literal(_) => Err(ConversionError::unsupported(source.type_name())),
        }
    }

    fn merge_quads(
        &self,
        source: GraphSource<'_>,
        whole_graph: bool,
        dataset: &mut dyn Dataset,
    ) -> ConversionResult<usize> {
        let source = match source {
            GraphSource::Resource(resource) if whole_graph => GraphSource::Graph(resource.graph()),
            source => source,
        };

        let mut added = 0;
        for quad in self.import_quads(source)? {
            if dataset.add(quad?) {
                added += 1;
            }
        }

        debug!(quads = added, whole_graph, "Merged quads into dataset");
        Ok(added)
    }

    pub(crate) fn import_graph_name(
        &self,
        graph: &Graph,
    ) -> ConversionResult<Option<NamedOrBlankNode>> {
        graph
            .uri()
            .map(|uri| Ok(self.factory.named_node(uri)?.into()))
            .transpose()
    }

    pub(crate) fn import_subject(&self, resource: ResourceRef<'_>) -> ConversionResult<Subject> {
        Ok(match self.import_node(resource.id())? {
            NamedOrBlankNode::NamedNode(node) => node.into(),
            NamedOrBlankNode::BlankNode(node) => node.into(),
        })
    }

    pub(crate) fn import_value(&self, value: &Value) -> ConversionResult<Term> {
        match value {
            Value::Resource(id) => Ok(node_into_term(self.import_node(id)?)),
            Value::Literal(literal) => Ok(self.import_literal(literal)?.into()),
        }
    }

    fn import_node(&self, id: &ResourceId) -> ConversionResult<NamedOrBlankNode> {
        Ok(match id.blank_label() {
            Some(label) => self.factory.blank_node(Some(label))?.into(),
            None => self.factory.named_node(id.as_str())?.into(),
        })
    }
}

fn node_into_term(node: NamedOrBlankNode) -> Term {
    match node {
        NamedOrBlankNode::NamedNode(node) => node.into(),
        NamedOrBlankNode::BlankNode(node) => node.into(),
    }
}

/// Focuses `node` on `term`. A node created by a factory must already be focused on `term`.
fn focus<N: DatasetNode>(node: N, term: Option<Term>, from_factory: bool) -> ConversionResult<N> {
    let Some(term) = term else {
        return Ok(node);
    };

    if !from_factory {
        return Ok(node.with_node(term));
    }

    if node.node() != term.as_ref() {
        return Err(ConversionError::ContractViolation {
            expected: format!("a dataset node focused on {term}"),
            actual: format!("a dataset node focused on {}", node.node()),
        });
    }
    Ok(node)
}
