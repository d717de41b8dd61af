use crate::GraphLiteral;
use std::fmt::{Display, Formatter};

const BLANK_NODE_PREFIX: &str = "_:";

/// The key of a resource within a [Graph](crate::Graph).
///
/// Blank nodes are identified by keys of the form `_:label`. Any other key is interpreted as a
/// URI.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(String);

impl ResourceId {
    /// Creates a new [ResourceId] from a URI or a `_:label` key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Creates a [ResourceId] for the blank node with the given label.
    pub fn blank(label: &str) -> Self {
        Self(format!("{BLANK_NODE_PREFIX}{label}"))
    }

    /// Returns `true` if the id identifies a blank node.
    pub fn is_blank_node(&self) -> bool {
        self.0.starts_with(BLANK_NODE_PREFIX)
    }

    /// Returns the label of the blank node without the `_:` prefix, or [None] for URIs.
    pub fn blank_label(&self) -> Option<&str> {
        self.0.strip_prefix(BLANK_NODE_PREFIX)
    }

    /// Returns the key. For blank nodes, this includes the `_:` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_blank_node() {
            f.write_str(&self.0)
        } else {
            write!(f, "<{}>", self.0)
        }
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// The object of a property: either a resource of the same graph or a literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Resource(ResourceId),
    Literal(GraphLiteral),
}

impl Value {
    /// Returns the resource id if the value is a resource.
    pub fn as_resource(&self) -> Option<&ResourceId> {
        match self {
            Value::Resource(id) => Some(id),
            Value::Literal(_) => None,
        }
    }

    /// Returns the literal if the value is a literal.
    pub fn as_literal(&self) -> Option<&GraphLiteral> {
        match self {
            Value::Resource(_) => None,
            Value::Literal(literal) => Some(literal),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Resource(id) => id.fmt(f),
            Value::Literal(literal) => literal.fmt(f),
        }
    }
}

impl From<ResourceId> for Value {
    fn from(value: ResourceId) -> Self {
        Value::Resource(value)
    }
}

impl From<GraphLiteral> for Value {
    fn from(value: GraphLiteral) -> Self {
        Value::Literal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_node_ids() {
        let id = ResourceId::blank("b1");
        assert!(id.is_blank_node());
        assert_eq!(id.as_str(), "_:b1");
        assert_eq!(id.blank_label(), Some("b1"));
        assert_eq!(id.to_string(), "_:b1");
    }

    #[test]
    fn uri_ids() {
        let id = ResourceId::from("http://example.com/a");
        assert!(!id.is_blank_node());
        assert_eq!(id.blank_label(), None);
        assert_eq!(id.to_string(), "<http://example.com/a>");
    }
}
