use crate::{Graph, GraphLiteral, ResourceId, Value};
use rustc_hash::FxHashMap;
use std::fmt::{Debug, Formatter};

/// The properties of a single resource. Owned by the [Graph].
#[derive(Clone, Debug)]
pub(crate) struct ResourceData {
    id: ResourceId,
    /// Properties in insertion order.
    properties: Vec<Property>,
    /// Maps predicate URIs to their position in `properties`.
    property_index: FxHashMap<String, usize>,
}

#[derive(Clone, Debug)]
struct Property {
    predicate: String,
    values: Vec<Value>,
}

impl ResourceData {
    pub(crate) fn new(id: ResourceId) -> Self {
        Self {
            id,
            properties: Vec::new(),
            property_index: FxHashMap::default(),
        }
    }

    pub(crate) fn count_values(&self) -> usize {
        self.properties.iter().map(|p| p.values.len()).sum()
    }

    fn push(&mut self, predicate: &str, value: Value) {
        match self.property_index.get(predicate) {
            Some(index) => self.properties[*index].values.push(value),
            None => {
                self.property_index
                    .insert(predicate.to_owned(), self.properties.len());
                self.properties.push(Property {
                    predicate: predicate.to_owned(),
                    values: vec![value],
                });
            }
        }
    }
}

/// A read-only view on a resource of a [Graph].
///
/// The view borrows the graph, so the graph that owns the resource is always reachable through
/// [ResourceRef::graph].
#[derive(Clone, Copy)]
pub struct ResourceRef<'graph> {
    graph: &'graph Graph,
    index: usize,
}

impl<'graph> ResourceRef<'graph> {
    pub(crate) fn new(graph: &'graph Graph, index: usize) -> Self {
        Self { graph, index }
    }

    fn data(&self) -> &'graph ResourceData {
        self.graph.data(self.index)
    }

    /// Returns the graph that owns this resource.
    pub fn graph(&self) -> &'graph Graph {
        self.graph
    }

    /// Returns the position of the resource in the graph's insertion order.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> &'graph ResourceId {
        &self.data().id
    }

    /// Returns the URI of the resource. For blank nodes, this is the `_:label` key.
    pub fn uri(&self) -> &'graph str {
        self.data().id.as_str()
    }

    pub fn is_blank_node(&self) -> bool {
        self.data().id.is_blank_node()
    }

    /// Returns `true` if at least one property is attached to the resource.
    pub fn has_properties(&self) -> bool {
        !self.data().properties.is_empty()
    }

    /// Returns the number of distinct predicates.
    pub fn property_count(&self) -> usize {
        self.data().properties.len()
    }

    /// Returns the predicate URIs in insertion order.
    pub fn property_uris(&self) -> impl ExactSizeIterator<Item = &'graph str> + 'graph {
        self.data().properties.iter().map(|p| p.predicate.as_str())
    }

    /// Returns the predicates and their values in insertion order.
    pub fn properties(
        &self,
    ) -> impl ExactSizeIterator<Item = (&'graph str, &'graph [Value])> + 'graph {
        self.data()
            .properties
            .iter()
            .map(|p| (p.predicate.as_str(), p.values.as_slice()))
    }

    /// Returns the predicate and values at `position` in insertion order.
    pub fn property_at(&self, position: usize) -> Option<(&'graph str, &'graph [Value])> {
        self.data()
            .properties
            .get(position)
            .map(|p| (p.predicate.as_str(), p.values.as_slice()))
    }

    /// Returns all values of `predicate` in insertion order.
    pub fn values(&self, predicate: &str) -> &'graph [Value] {
        let data = self.data();
        match data.property_index.get(predicate) {
            Some(index) => data.properties[*index].values.as_slice(),
            None => &[],
        }
    }

    /// Returns the first value of `predicate`.
    pub fn get(&self, predicate: &str) -> Option<&'graph Value> {
        self.values(predicate).first()
    }
}

impl Debug for ResourceRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceRef")
            .field("graph", &self.graph.uri())
            .field("id", self.id())
            .finish()
    }
}

impl PartialEq for ResourceRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.index == other.index
    }
}

impl Eq for ResourceRef<'_> {}

/// A mutable view on a resource of a [Graph].
pub struct ResourceMut<'graph> {
    graph: &'graph mut Graph,
    index: usize,
}

impl<'graph> ResourceMut<'graph> {
    pub(crate) fn new(graph: &'graph mut Graph, index: usize) -> Self {
        Self { graph, index }
    }

    pub fn id(&self) -> &ResourceId {
        &self.graph.data(self.index).id
    }

    /// Appends `value` to the values of `predicate`.
    ///
    /// If `value` is a resource, it is created in the same graph if it does not exist yet.
    pub fn add(&mut self, predicate: &str, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        if let Value::Resource(id) = &value {
            self.graph.get_or_insert(id.clone());
        }
        self.graph.data_mut(self.index).push(predicate, value);
        self
    }

    /// Appends a literal to the values of `predicate`.
    pub fn add_literal(&mut self, predicate: &str, literal: GraphLiteral) -> &mut Self {
        self.add(predicate, literal)
    }

    /// Appends the resource `id` to the values of `predicate`.
    pub fn add_resource(&mut self, predicate: &str, id: impl Into<ResourceId>) -> &mut Self {
        self.add(predicate, Value::Resource(id.into()))
    }

    /// Returns a read-only view that borrows from this view.
    pub fn as_ref(&self) -> ResourceRef<'_> {
        ResourceRef::new(&*self.graph, self.index)
    }

    /// Converts this view into a read-only view on the same resource.
    pub fn into_ref(self) -> ResourceRef<'graph> {
        ResourceRef::new(self.graph, self.index)
    }
}

impl Debug for ResourceMut<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceMut")
            .field("graph", &self.graph.uri())
            .field("id", self.id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Graph, GraphLiteral, ResourceId, Value};

    #[test]
    fn properties_keep_insertion_order() {
        let mut graph = Graph::new();
        graph
            .resource("http://example.com/a")
            .add_literal("http://example.com/p2", GraphLiteral::simple("1"))
            .add_literal("http://example.com/p1", GraphLiteral::simple("2"))
            .add_literal("http://example.com/p2", GraphLiteral::simple("3"));

        let resource = graph.get("http://example.com/a").unwrap();
        assert_eq!(resource.property_count(), 2);
        assert_eq!(
            resource.property_uris().collect::<Vec<_>>(),
            ["http://example.com/p2", "http://example.com/p1"]
        );
        assert_eq!(
            resource.values("http://example.com/p2"),
            [
                Value::Literal(GraphLiteral::simple("1")),
                Value::Literal(GraphLiteral::simple("3"))
            ]
        );
        assert_eq!(
            resource.get("http://example.com/p1"),
            Some(&Value::Literal(GraphLiteral::simple("2")))
        );
        assert!(resource.values("http://example.com/p3").is_empty());
    }

    #[test]
    fn property_at() {
        let mut graph = Graph::new();
        graph
            .resource("http://example.com/a")
            .add_resource("http://example.com/p", "_:b1");

        let resource = graph.get("http://example.com/a").unwrap();
        let (predicate, values) = resource.property_at(0).unwrap();
        assert_eq!(predicate, "http://example.com/p");
        assert_eq!(values, [Value::Resource(ResourceId::blank("b1"))]);
        assert!(resource.property_at(1).is_none());

        let object = graph.get("_:b1").unwrap();
        assert!(object.is_blank_node());
        assert!(!object.has_properties());
    }

    #[test]
    fn into_ref_points_to_same_resource() {
        let mut graph = Graph::with_uri("http://example.com/g");
        let resource = graph.resource("http://example.com/a").into_ref();

        assert_eq!(resource.uri(), "http://example.com/a");
        assert_eq!(resource.graph().uri(), Some("http://example.com/g"));
        assert_eq!(resource.position(), 0);
        assert_eq!(
            Some(resource),
            resource.graph().get("http://example.com/a")
        );
    }
}
