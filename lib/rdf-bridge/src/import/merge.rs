use rdf_bridge_model::{Dataset, DatasetNode, Term};
use std::fmt::{Debug, Formatter};

/// A container that imported quads can be merged into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Container<D, N> {
    Dataset(D),
    DatasetNode(N),
}

impl<D: Dataset, N: DatasetNode> Container<D, N> {
    /// Returns the dataset that holds the quads. For a [DatasetNode], this is the backing
    /// dataset.
    pub fn dataset(&self) -> &dyn Dataset {
        match self {
            Container::Dataset(dataset) => dataset,
            Container::DatasetNode(node) => node.dataset(),
        }
    }

    pub fn into_dataset(self) -> Option<D> {
        match self {
            Container::Dataset(dataset) => Some(dataset),
            Container::DatasetNode(_) => None,
        }
    }

    pub fn into_dataset_node(self) -> Option<N> {
        match self {
            Container::Dataset(_) => None,
            Container::DatasetNode(node) => Some(node),
        }
    }
}

/// The target of a merge: either a ready instance or a factory that creates the instance.
///
/// The factory receives the converted source term if the source is a resource, and [None] if the
/// source is a whole graph.
pub enum Target<'factory, T> {
    Instance(T),
    Factory(Box<dyn FnOnce(Option<Term>) -> T + 'factory>),
}

impl<'factory, T> Target<'factory, T> {
    /// Creates a [Target] from a factory.
    pub fn factory(factory: impl FnOnce(Option<Term>) -> T + 'factory) -> Self {
        Target::Factory(Box::new(factory))
    }

    /// Resolves the target into an instance. The factory, if any, is called with `term`.
    pub(crate) fn resolve(self, term: Option<Term>) -> T {
        match self {
            Target::Instance(instance) => instance,
            Target::Factory(factory) => factory(term),
        }
    }

    pub(crate) fn is_factory(&self) -> bool {
        matches!(self, Target::Factory(_))
    }
}

impl<T: Debug> Debug for Target<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Instance(instance) => f.debug_tuple("Instance").field(instance).finish(),
            Target::Factory(_) => f.write_str("Factory"),
        }
    }
}
