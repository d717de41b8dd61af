use crate::error::{ConversionError, ConversionResult};
use crate::export::GenericSource;
use rdf_bridge_graph::{Graph, GraphLiteral, ResourceId, ResourceRef, Value};
use rdf_bridge_model::{GraphNameRef, LiteralRef, QuadRef, SubjectRef, TermRef};
use tracing::{debug, trace};

/// The result of exporting a [GenericSource] into a [Graph].
///
/// Resources and graphs are always borrowed from the graph the source was exported into.
#[derive(Debug)]
pub enum Exported<'graph> {
    Literal(GraphLiteral),
    Resource(ResourceRef<'graph>),
    Graph(&'graph Graph),
}

impl<'graph> Exported<'graph> {
    /// Returns the name of the variant. Used for error reporting.
    pub fn type_name(&self) -> &'static str {
        match self {
            Exported::Literal(_) => "Literal",
            Exported::Resource(_) => "Resource",
            Exported::Graph(_) => "Graph",
        }
    }

    pub fn into_literal(self) -> Option<GraphLiteral> {
        match self {
            Exported::Literal(literal) => Some(literal),
            Exported::Resource(_) | Exported::Graph(_) => None,
        }
    }

    pub fn into_resource(self) -> Option<ResourceRef<'graph>> {
        match self {
            Exported::Resource(resource) => Some(resource),
            Exported::Literal(_) | Exported::Graph(_) => None,
        }
    }

    /// Returns the graph. For a resource, this is the graph that owns the resource.
    pub fn into_graph(self) -> Option<&'graph Graph> {
        match self {
            Exported::Literal(_) => None,
            Exported::Resource(resource) => Some(resource.graph()),
            Exported::Graph(graph) => Some(graph),
        }
    }
}

/// Converts entities of the generic model into the graph-centric model.
///
/// All operations embed the converted entities into a caller-supplied [Graph] and mutate it in
/// place. Use [GraphModelExporter::to_graph] to export into a fresh graph.
///
/// Mapping:
/// - `Literal` → [GraphLiteral] (the language tag takes precedence over the datatype)
/// - `NamedNode` / `BlankNode` → the resource with the same key (created if necessary)
/// - `Quad` → the subject resource with the quad's predicate and object attached. The graph name
///   of the quad is not copied.
/// - `DatasetNode` → all quads of the dataset are exported, the focus resource is returned
/// - `Dataset` / quad sequences → all quads are exported, the graph is returned
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GraphModelExporter;

impl GraphModelExporter {
    pub fn new() -> Self {
        Self
    }

    /// Exports `source` into `graph`. See [GraphModelExporter] for the mapping.
    pub fn export_any<'source, 'graph>(
        &self,
        source: impl Into<GenericSource<'source>>,
        graph: &'graph mut Graph,
    ) -> ConversionResult<Exported<'graph>> {
        match source.into() {
            GenericSource::Literal(literal) => Ok(Exported::Literal(self.export_literal(literal))),
            GenericSource::NamedNode(node) => {
                Ok(Exported::Resource(graph.resource(node.as_str()).into_ref()))
            }
            GenericSource::BlankNode(node) => {
                let id = ResourceId::blank(node.as_str());
                Ok(Exported::Resource(graph.resource(id).into_ref()))
            }
            GenericSource::Triple(_) => Err(ConversionError::unsupported("Triple")),
            GenericSource::Quad(quad) => {
                let subject = self.export_quad(quad, graph)?;
                Ok(Exported::Resource(graph.resource(subject).into_ref()))
            }
            GenericSource::DatasetNode(node) => {
                let focus = resource_id(node.node())?;
                let count = self.export_quads(node.dataset().quads(), graph)?;
                debug!(quads = count, focus = focus.as_str(), "Exported dataset node");
                Ok(Exported::Resource(graph.resource(focus).into_ref()))
            }
            GenericSource::Dataset(dataset) => {
                let count = self.export_quads(dataset.quads(), graph)?;
                debug!(quads = count, "Exported dataset");
                Ok(Exported::Graph(graph))
            }
            GenericSource::Quads(quads) => {
                let mut count = 0;
                for quad in quads {
                    self.export_quad(quad.as_ref(), graph)?;
                    count += 1;
                }
                debug!(quads = count, "Exported quad sequence");
                Ok(Exported::Graph(graph))
            }
        }
    }

    /// Exports a literal. The language tag takes precedence over the datatype, so a
    /// language-tagged literal never carries a datatype.
    pub fn export_literal(&self, literal: LiteralRef<'_>) -> GraphLiteral {
        match literal.language() {
            Some(language) => GraphLiteral::language_tagged(literal.value(), language),
            None => GraphLiteral::typed(literal.value(), literal.datatype().as_str()),
        }
    }

    /// Exports a node, a quad, or a dataset node and returns the resulting resource.
    ///
    /// Sources that do not result in a resource are rejected before `graph` is modified.
    pub fn export_resource<'source, 'graph>(
        &self,
        source: impl Into<GenericSource<'source>>,
        graph: &'graph mut Graph,
    ) -> ConversionResult<ResourceRef<'graph>> {
        let source = source.into();
        match source {
            GenericSource::NamedNode(_)
            | GenericSource::BlankNode(_)
            | GenericSource::Quad(_)
            | GenericSource::DatasetNode(_) => {}
            GenericSource::Literal(_)
            | GenericSource::Triple(_)
            | GenericSource::Dataset(_)
            | GenericSource::Quads(_) => {
                return Err(ConversionError::unsupported(source.type_name()))
            }
        }

        let exported = self.export_any(source, graph)?;
        let type_name = exported.type_name();
        exported
            .into_resource()
            .ok_or(ConversionError::unsupported(type_name))
    }

    /// Exports `source` and returns the graph that holds the result.
    ///
    /// If the export results in a resource (e.g., for a dataset node), the graph that owns the
    /// resource is returned.
    pub fn export_graph<'source, 'graph>(
        &self,
        source: impl Into<GenericSource<'source>>,
        graph: &'graph mut Graph,
    ) -> ConversionResult<&'graph Graph> {
        let source = source.into();
        if matches!(source, GenericSource::Literal(_)) {
            return Err(ConversionError::unsupported(source.type_name()));
        }

        let exported = self.export_any(source, graph)?;
        let type_name = exported.type_name();
        exported
            .into_graph()
            .ok_or(ConversionError::unsupported(type_name))
    }

    /// Exports `source` into a fresh [Graph].
    ///
    /// If `source` is a single quad in a named graph, the fresh graph is identified by the graph
    /// name of the quad. Otherwise, the fresh graph has no URI.
    pub fn to_graph<'source>(
        &self,
        source: impl Into<GenericSource<'source>>,
    ) -> ConversionResult<Graph> {
        let source = source.into();
        let mut graph = match &source {
            GenericSource::Quad(QuadRef {
                graph_name: GraphNameRef::NamedNode(name),
                ..
            }) => Graph::with_uri(name.as_str()),
            _ => Graph::new(),
        };
        self.export_any(source, &mut graph)?;
        Ok(graph)
    }

    /// Exports all `quads` into `graph`. Returns the number of exported quads.
    fn export_quads<'quad>(
        &self,
        quads: impl Iterator<Item = QuadRef<'quad>>,
        graph: &mut Graph,
    ) -> ConversionResult<usize> {
        let mut count = 0;
        for quad in quads {
            self.export_quad(quad, graph)?;
            count += 1;
        }
        Ok(count)
    }

    /// Attaches the predicate and object of `quad` to its subject. Returns the subject.
    fn export_quad(&self, quad: QuadRef<'_>, graph: &mut Graph) -> ConversionResult<ResourceId> {
        let subject = match quad.subject {
            SubjectRef::NamedNode(node) => ResourceId::new(node.as_str()),
            SubjectRef::BlankNode(node) => ResourceId::blank(node.as_str()),
            SubjectRef::Triple(_) => return Err(ConversionError::unsupported("Triple")),
        };
        let object = self.export_value(quad.object)?;

        trace!(
            subject = subject.as_str(),
            predicate = quad.predicate.as_str(),
            "Exporting quad"
        );
        graph
            .resource(subject.clone())
            .add(quad.predicate.as_str(), object);
        Ok(subject)
    }

    /// Exports the object of a quad. Only a single level of nesting is supported.
    fn export_value(&self, term: TermRef<'_>) -> ConversionResult<Value> {
        match term {
            TermRef::NamedNode(node) => Ok(Value::Resource(ResourceId::new(node.as_str()))),
            TermRef::BlankNode(node) => Ok(Value::Resource(ResourceId::blank(node.as_str()))),
            TermRef::Literal(literal) => Ok(Value::Literal(self.export_literal(literal))),
            TermRef::Triple(_) => Err(ConversionError::unsupported("Triple")),
        }
    }
}

/// Returns the key of the resource that represents `term`.
fn resource_id(term: TermRef<'_>) -> ConversionResult<ResourceId> {
    match term {
        TermRef::NamedNode(node) => Ok(ResourceId::new(node.as_str())),
        TermRef::BlankNode(node) => Ok(ResourceId::blank(node.as_str())),
        TermRef::Literal(_) => Err(ConversionError::unsupported("Literal")),
        TermRef::Triple(_) => Err(ConversionError::unsupported("Triple")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_bridge_model::vocab::xsd;
    use rdf_bridge_model::{
        BlankNode, GraphName, Literal, MemDataset, MemDatasetNode, NamedNode, Quad, Triple,
    };

    fn named(uri: &str) -> NamedNode {
        NamedNode::new_unchecked(uri)
    }

    fn quad(subject: &str, object: impl Into<rdf_bridge_model::Term>) -> Quad {
        Quad::new(
            named(subject),
            named("http://example.com/p"),
            object,
            GraphName::DefaultGraph,
        )
    }

    #[test]
    fn export_literal_prefers_language() {
        let exporter = GraphModelExporter::new();
        let literal = Literal::new_language_tagged_literal_unchecked("chat", "fr");
        let exported = exporter.export_literal(literal.as_ref());
        assert_eq!(exported, GraphLiteral::language_tagged("chat", "fr"));
        assert_eq!(exported.datatype(), None);

        let literal = Literal::new_typed_literal("1", xsd::INTEGER);
        let exported = exporter.export_literal(literal.as_ref());
        assert_eq!(exported.datatype(), Some(xsd::INTEGER.as_str()));
    }

    #[test]
    fn export_nodes_as_resources() {
        let mut graph = Graph::new();
        let exporter = GraphModelExporter::new();

        let node = named("http://example.com/a");
        let resource = exporter.export_resource(&node, &mut graph).unwrap();
        assert_eq!(resource.uri(), "http://example.com/a");
        assert!(!resource.has_properties());

        let node = BlankNode::new_unchecked("b1");
        let resource = exporter.export_resource(&node, &mut graph).unwrap();
        assert_eq!(resource.uri(), "_:b1");
        assert!(resource.is_blank_node());

        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn export_quad_attaches_object() {
        let mut graph = Graph::new();
        let exporter = GraphModelExporter::new();
        let quad = quad("http://example.com/a", named("http://example.com/b"));

        let resource = exporter.export_resource(&quad, &mut graph).unwrap();
        assert_eq!(resource.uri(), "http://example.com/a");
        assert_eq!(
            resource.get("http://example.com/p"),
            Some(&Value::Resource(ResourceId::new("http://example.com/b")))
        );
        assert!(graph.get("http://example.com/b").is_some());
    }

    #[test]
    fn export_dataset_returns_graph() {
        let dataset = [
            quad("http://example.com/a", Literal::new_simple_literal("1")),
            quad("http://example.com/b", Literal::new_simple_literal("2")),
        ]
        .into_iter()
        .collect::<MemDataset>();

        let mut graph = Graph::with_uri("http://example.com/g");
        let exported = GraphModelExporter::new()
            .export_graph(&dataset, &mut graph)
            .unwrap();
        assert_eq!(exported.uri(), Some("http://example.com/g"));
        assert_eq!(exported.count_triples(), 2);
    }

    #[test]
    fn export_graph_coerces_resource() {
        let node = MemDatasetNode::with_dataset(
            [quad("http://example.com/a", Literal::new_simple_literal("1"))]
                .into_iter()
                .collect(),
            named("http://example.com/a"),
        );

        let mut graph = Graph::new();
        let exported = GraphModelExporter::new()
            .export_graph(&node, &mut graph)
            .unwrap();
        assert_eq!(exported.count_triples(), 1);
    }

    #[test]
    fn to_graph_keeps_graph_name_of_quad() {
        let exporter = GraphModelExporter::new();
        let named_quad = Quad::new(
            named("http://example.com/s"),
            named("http://example.com/p"),
            Literal::new_language_tagged_literal_unchecked("bar", "en"),
            named("http://example.com/g"),
        );
        let graph = exporter.to_graph(&named_quad).unwrap();
        assert_eq!(graph.uri(), Some("http://example.com/g"));
        assert_eq!(graph.count_triples(), 1);

        let default_quad = quad("http://example.com/s", Literal::new_simple_literal("o"));
        let graph = exporter.to_graph(&default_quad).unwrap();
        assert_eq!(graph.uri(), None);
    }

    #[test]
    fn export_resource_rejects_dataset_before_export() {
        let dataset = [quad("http://example.com/a", Literal::new_simple_literal("1"))]
            .into_iter()
            .collect::<MemDataset>();

        let mut graph = Graph::new();
        let error = GraphModelExporter::new()
            .export_resource(&dataset, &mut graph)
            .unwrap_err();
        assert!(matches!(
            error,
            ConversionError::UnsupportedShape {
                type_name: "Dataset"
            }
        ));
        assert!(graph.is_empty());
    }

    #[test]
    fn export_graph_rejects_literal() {
        let literal = Literal::new_simple_literal("x");
        let mut graph = Graph::new();
        let error = GraphModelExporter::new()
            .export_graph(&literal, &mut graph)
            .unwrap_err();
        assert!(matches!(
            error,
            ConversionError::UnsupportedShape {
                type_name: "Literal"
            }
        ));
    }

    #[test]
    fn export_triple_is_unsupported() {
        let triple = Triple::new(
            named("http://example.com/s"),
            named("http://example.com/p"),
            named("http://example.com/o"),
        );
        let mut graph = Graph::new();
        let error = GraphModelExporter::new()
            .export_any(&triple, &mut graph)
            .unwrap_err();
        assert!(matches!(
            error,
            ConversionError::UnsupportedShape { type_name: "Triple" }
        ));
    }
}
