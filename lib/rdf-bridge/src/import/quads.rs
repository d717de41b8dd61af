use crate::error::ConversionResult;
use crate::import::GenericModelImporter;
use rdf_bridge_graph::{Graph, ResourceRef, Value};
use rdf_bridge_model::{NamedNode, NamedOrBlankNode, Quad, Subject, TermFactory};
use std::fmt::{Debug, Formatter};

/// A lazy sequence of the quads held by a graph or by a single resource.
///
/// The iterator is a cursor over (resource, property, value) positions. Resources are visited in
/// the graph's insertion order, properties in their insertion order, and values in their
/// insertion order. Each call to [Iterator::next] converts exactly one value.
///
/// A consumed iterator cannot be rewound. Request a new one from the
/// [GenericModelImporter] to iterate again.
pub struct QuadIter<'a, F> {
    importer: &'a GenericModelImporter<F>,
    graph: &'a Graph,
    /// The graph component of all quads.
    graph_name: Option<NamedOrBlankNode>,
    /// Position of the current resource.
    resource: usize,
    /// Position after the last resource to visit.
    end: usize,
    /// Position of the current property within the current resource.
    property: usize,
    /// Position of the next value within the current property.
    value: usize,
    /// The converted subject of the current resource.
    subject: Option<Subject>,
    /// The converted predicate of the current property.
    predicate: Option<NamedNode>,
}

impl<'a, F: TermFactory> QuadIter<'a, F> {
    /// Creates an iterator over the quads of all resources of `graph`.
    pub(crate) fn for_graph(
        importer: &'a GenericModelImporter<F>,
        graph: &'a Graph,
    ) -> ConversionResult<Self> {
        Self::new(importer, graph, 0, graph.len())
    }

    /// Creates an iterator over the quads that have `resource` as their subject.
    pub(crate) fn for_resource(
        importer: &'a GenericModelImporter<F>,
        resource: ResourceRef<'a>,
    ) -> ConversionResult<Self> {
        let position = resource.position();
        Self::new(importer, resource.graph(), position, position + 1)
    }

    fn new(
        importer: &'a GenericModelImporter<F>,
        graph: &'a Graph,
        resource: usize,
        end: usize,
    ) -> ConversionResult<Self> {
        let graph_name = importer.import_graph_name(graph)?;
        Ok(Self {
            importer,
            graph,
            graph_name,
            resource,
            end,
            property: 0,
            value: 0,
            subject: None,
            predicate: None,
        })
    }

    fn next_resource(&mut self) {
        self.resource += 1;
        self.property = 0;
        self.value = 0;
        self.subject = None;
        self.predicate = None;
    }

    fn next_property(&mut self) {
        self.property += 1;
        self.value = 0;
        self.predicate = None;
    }

    fn create_quad(
        &mut self,
        resource: ResourceRef<'_>,
        predicate: &str,
        value: &Value,
    ) -> ConversionResult<Quad> {
        let subject = match &self.subject {
            Some(subject) => subject.clone(),
            None => {
                let subject = self.importer.import_subject(resource)?;
                self.subject = Some(subject.clone());
                subject
            }
        };
        let predicate = match &self.predicate {
            Some(predicate) => predicate.clone(),
            None => {
                let predicate = self.importer.factory().named_node(predicate)?;
                self.predicate = Some(predicate.clone());
                predicate
            }
        };
        let object = self.importer.import_value(value)?;

        Ok(self
            .importer
            .factory()
            .quad(subject, predicate, object, self.graph_name.clone()))
    }
}

impl<F: TermFactory> Iterator for QuadIter<'_, F> {
    type Item = ConversionResult<Quad>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        while self.resource < self.end {
            let resource = graph.resource_at(self.resource)?;
            let Some((predicate, values)) = resource.property_at(self.property) else {
                self.next_resource();
                continue;
            };
            let Some(value) = values.get(self.value) else {
                self.next_property();
                continue;
            };

            self.value += 1;
            return Some(self.create_quad(resource, predicate, value));
        }
        None
    }
}

impl<F> Debug for QuadIter<'_, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuadIter")
            .field("graph", &self.graph.uri())
            .field("resource", &self.resource)
            .field("end", &self.end)
            .field("property", &self.property)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::import::GenericModelImporter;
    use rdf_bridge_graph::{Graph, GraphLiteral};
    use rdf_bridge_model::{NamedNode, Subject, Term, TermFactory, UncheckedTermFactory};

    #[test]
    fn resource_scope_stops_at_resource() {
        let mut graph = Graph::new();
        graph
            .resource("http://example.com/a")
            .add_literal("http://example.com/p", GraphLiteral::simple("1"))
            .add_literal("http://example.com/p", GraphLiteral::simple("2"));
        graph
            .resource("http://example.com/b")
            .add_literal("http://example.com/p", GraphLiteral::simple("3"));

        let importer = GenericModelImporter::new(UncheckedTermFactory);
        let a = graph.get("http://example.com/a").unwrap();
        assert_eq!(importer.import_quads(a).unwrap().count(), 2);
        assert_eq!(importer.import_quads(&graph).unwrap().count(), 3);
    }

    #[test]
    fn skips_resources_without_properties() {
        let mut graph = Graph::new();
        graph.resource("http://example.com/empty");
        graph
            .resource("http://example.com/a")
            .add_resource("http://example.com/p", "http://example.com/empty");

        let importer = GenericModelImporter::new(UncheckedTermFactory);
        let quads = importer
            .import_quads(&graph)
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(quads.len(), 1);
        assert_eq!(
            quads[0].subject,
            Subject::from(NamedNode::new_unchecked("http://example.com/a"))
        );
    }

    #[test]
    fn continues_after_rejected_value() {
        let mut graph = Graph::new();
        graph
            .resource("http://example.com/a")
            .add_resource("http://example.com/p", "not an iri")
            .add_literal("http://example.com/p", GraphLiteral::simple("ok"));

        let importer = GenericModelImporter::default();
        let mut quads = importer.import_quads(&graph).unwrap();
        assert!(matches!(quads.next(), Some(Err(_))));
        let quad = quads.next().unwrap().unwrap();
        assert_eq!(
            quad.object,
            Term::from(UncheckedTermFactory.literal("ok", None, None).unwrap())
        );
        assert!(quads.next().is_none());
    }
}
