use oxrdf::{Dataset as MemDataset, Quad, QuadRef, Term, TermRef};

/// An unordered collection of quads.
///
/// This is the minimal contract the converters require from a dataset: quads can be added and
/// iterated. How the quads are stored or indexed is up to the implementation.
pub trait Dataset {
    /// Adds a quad. Returns `true` if the quad was not yet part of the dataset.
    fn add(&mut self, quad: Quad) -> bool;

    /// Returns an iterator over all quads in the dataset.
    fn quads(&self) -> Box<dyn Iterator<Item = QuadRef<'_>> + '_>;

    /// Returns the number of quads in the dataset.
    fn len(&self) -> usize;

    /// Returns `true` if the dataset contains no quads.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Dataset for MemDataset {
    fn add(&mut self, quad: Quad) -> bool {
        self.insert(&quad)
    }

    fn quads(&self) -> Box<dyn Iterator<Item = QuadRef<'_>> + '_> {
        Box::new(self.iter())
    }

    fn len(&self) -> usize {
        MemDataset::len(self)
    }
}

/// A [Dataset] paired with a distinguished focus term (the node).
pub trait DatasetNode {
    /// Returns the backing dataset.
    fn dataset(&self) -> &dyn Dataset;

    /// Returns the backing dataset for modification.
    fn dataset_mut(&mut self) -> &mut dyn Dataset;

    /// Returns the focus term.
    fn node(&self) -> TermRef<'_>;

    /// Returns a [DatasetNode] with the same dataset that is focused on `node`.
    #[must_use]
    fn with_node(self, node: Term) -> Self
    where
        Self: Sized;
}

/// A [DatasetNode] backed by an in-memory [MemDataset].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemDatasetNode {
    dataset: MemDataset,
    node: Term,
}

impl MemDatasetNode {
    /// Creates a new [MemDatasetNode] with an empty dataset.
    pub fn new(node: impl Into<Term>) -> Self {
        Self::with_dataset(MemDataset::new(), node)
    }

    /// Creates a new [MemDatasetNode] from an existing dataset.
    pub fn with_dataset(dataset: MemDataset, node: impl Into<Term>) -> Self {
        Self {
            dataset,
            node: node.into(),
        }
    }

    /// Returns the backing [MemDataset].
    pub fn inner(&self) -> &MemDataset {
        &self.dataset
    }

    /// Consumes the node and returns the backing [MemDataset].
    pub fn into_inner(self) -> MemDataset {
        self.dataset
    }
}

impl DatasetNode for MemDatasetNode {
    fn dataset(&self) -> &dyn Dataset {
        &self.dataset
    }

    fn dataset_mut(&mut self) -> &mut dyn Dataset {
        &mut self.dataset
    }

    fn node(&self) -> TermRef<'_> {
        self.node.as_ref()
    }

    fn with_node(self, node: Term) -> Self {
        Self {
            dataset: self.dataset,
            node,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{GraphName, Literal, NamedNode};

    fn quad(object: &str) -> Quad {
        Quad::new(
            NamedNode::new_unchecked("http://example.com/s"),
            NamedNode::new_unchecked("http://example.com/p"),
            Literal::new_simple_literal(object),
            GraphName::DefaultGraph,
        )
    }

    #[test]
    fn add_reports_new_quads() {
        let mut dataset = MemDataset::new();
        assert!(dataset.add(quad("a")));
        assert!(!dataset.add(quad("a")));
        assert!(dataset.add(quad("b")));
        assert_eq!(Dataset::len(&dataset), 2);
        assert_eq!(dataset.quads().count(), 2);
    }

    #[test]
    fn with_node_keeps_dataset() {
        let mut node = MemDatasetNode::new(NamedNode::new_unchecked("http://example.com/a"));
        node.dataset_mut().add(quad("a"));

        let other = NamedNode::new_unchecked("http://example.com/b");
        let node = node.with_node(other.clone().into());

        assert_eq!(node.node(), TermRef::from(other.as_ref()));
        assert_eq!(node.dataset().len(), 1);
        assert!(!node.dataset().is_empty());
    }
}
