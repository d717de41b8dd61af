use crate::resource::ResourceData;
use crate::{ResourceId, ResourceMut, ResourceRef};
use rustc_hash::FxHashMap;

/// A mutable graph of resources, identified by an optional URI.
///
/// Resources are kept in insertion order. Creating a resource is idempotent: requesting the same
/// key twice yields the same resource.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    /// The URI of the graph. [None] for the default graph.
    uri: Option<String>,
    /// Holds the resources in insertion order.
    resources: Vec<ResourceData>,
    /// Maps resource ids to their position in `resources`.
    index: FxHashMap<ResourceId, usize>,
}

impl Graph {
    /// Creates a new graph without a URI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph identified by `uri`.
    pub fn with_uri(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()).filter(|uri| !uri.is_empty()),
            ..Self::default()
        }
    }

    /// Returns the URI of the graph.
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Returns the resource with the given key, creating it if it does not exist yet.
    ///
    /// Keys of the form `_:label` create blank nodes.
    pub fn resource(&mut self, id: impl Into<ResourceId>) -> ResourceMut<'_> {
        let index = self.get_or_insert(id.into());
        ResourceMut::new(self, index)
    }

    /// Returns the resource with the given key without creating it.
    pub fn get(&self, id: &str) -> Option<ResourceRef<'_>> {
        self.index
            .get(&ResourceId::new(id))
            .map(|index| ResourceRef::new(self, *index))
    }

    /// Returns the resource at `position` in insertion order.
    pub fn resource_at(&self, position: usize) -> Option<ResourceRef<'_>> {
        (position < self.resources.len()).then(|| ResourceRef::new(self, position))
    }

    /// Returns an iterator over all resources in insertion order.
    pub fn resources(&self) -> impl ExactSizeIterator<Item = ResourceRef<'_>> + '_ {
        (0..self.resources.len()).map(|index| ResourceRef::new(self, index))
    }

    /// Returns the number of resources, including resources without properties.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Returns the number of (subject, predicate, value) triples in the graph.
    pub fn count_triples(&self) -> usize {
        self.resources.iter().map(ResourceData::count_values).sum()
    }

    pub(crate) fn data(&self, index: usize) -> &ResourceData {
        &self.resources[index]
    }

    pub(crate) fn data_mut(&mut self, index: usize) -> &mut ResourceData {
        &mut self.resources[index]
    }

    pub(crate) fn get_or_insert(&mut self, id: ResourceId) -> usize {
        if let Some(index) = self.index.get(&id) {
            return *index;
        }

        let index = self.resources.len();
        self.index.insert(id.clone(), index);
        self.resources.push(ResourceData::new(id));
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GraphLiteral, Value};

    #[test]
    fn resource_is_get_or_create() {
        let mut graph = Graph::new();
        graph.resource("http://example.com/a");
        graph.resource("http://example.com/a");
        graph.resource("_:b1");

        assert_eq!(graph.len(), 2);
        assert!(graph.get("_:b1").unwrap().is_blank_node());
        assert!(graph.get("http://example.com/b").is_none());
    }

    #[test]
    fn resources_keep_insertion_order() {
        let mut graph = Graph::new();
        graph.resource("http://example.com/b");
        graph.resource("http://example.com/a");
        graph.resource("http://example.com/c");

        let uris = graph.resources().map(|r| r.uri()).collect::<Vec<_>>();
        assert_eq!(
            uris,
            [
                "http://example.com/b",
                "http://example.com/a",
                "http://example.com/c"
            ]
        );
    }

    #[test]
    fn adding_a_resource_value_creates_the_object() {
        let mut graph = Graph::new();
        graph
            .resource("http://example.com/a")
            .add("http://example.com/p", ResourceId::from("http://example.com/b"));

        assert_eq!(graph.len(), 2);
        let b = graph.get("http://example.com/b").unwrap();
        assert!(!b.has_properties());
        assert_eq!(graph.count_triples(), 1);
    }

    #[test]
    fn graph_uri() {
        assert_eq!(Graph::new().uri(), None);
        assert_eq!(Graph::with_uri("").uri(), None);
        assert_eq!(
            Graph::with_uri("http://example.com/g").uri(),
            Some("http://example.com/g")
        );
    }

    #[test]
    fn count_triples_counts_values() {
        let mut graph = Graph::new();
        graph
            .resource("http://example.com/a")
            .add("http://example.com/p", GraphLiteral::simple("1"))
            .add("http://example.com/p", GraphLiteral::simple("2"))
            .add("http://example.com/q", Value::Literal(GraphLiteral::simple("3")));
        assert_eq!(graph.count_triples(), 3);
    }
}
