use crate::TermError;
use oxrdf::{BlankNode, GraphName, Literal, NamedNode, NamedOrBlankNode, Quad, Subject, Term};

/// Creates terms of the generic data model from primitive values.
///
/// The converters never construct terms directly. Instead, they hand the primitive values to a
/// [TermFactory] which decides how (and how strictly) the values are validated.
pub trait TermFactory {
    /// Creates a named node from an absolute IRI.
    fn named_node(&self, iri: &str) -> Result<NamedNode, TermError>;

    /// Creates a blank node with the given identifier. If `id` is [None], a fresh blank node is
    /// created.
    fn blank_node(&self, id: Option<&str>) -> Result<BlankNode, TermError>;

    /// Creates a literal.
    ///
    /// The language tag takes precedence over the datatype. If neither is given, the literal is a
    /// simple literal (`xsd:string`).
    fn literal(
        &self,
        value: &str,
        language: Option<&str>,
        datatype: Option<&str>,
    ) -> Result<Literal, TermError>;

    /// Creates a quad. If `graph` is [None], the quad belongs to the default graph.
    fn quad(
        &self,
        subject: Subject,
        predicate: NamedNode,
        object: Term,
        graph: Option<NamedOrBlankNode>,
    ) -> Quad {
        let graph_name = match graph {
            Some(NamedOrBlankNode::NamedNode(node)) => GraphName::NamedNode(node),
            Some(NamedOrBlankNode::BlankNode(node)) => GraphName::BlankNode(node),
            None => GraphName::DefaultGraph,
        };
        Quad::new(subject, predicate, object, graph_name)
    }
}

/// A [TermFactory] that validates IRIs, blank node identifiers, and language tags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DefaultTermFactory;

impl TermFactory for DefaultTermFactory {
    fn named_node(&self, iri: &str) -> Result<NamedNode, TermError> {
        Ok(NamedNode::new(iri)?)
    }

    fn blank_node(&self, id: Option<&str>) -> Result<BlankNode, TermError> {
        match id {
            Some(id) => Ok(BlankNode::new(id)?),
            None => Ok(BlankNode::default()),
        }
    }

    fn literal(
        &self,
        value: &str,
        language: Option<&str>,
        datatype: Option<&str>,
    ) -> Result<Literal, TermError> {
        match (language, datatype) {
            (Some(language), _) => Literal::new_language_tagged_literal(value, language)
                .map_err(|error| TermError::InvalidLanguageTag {
                    tag: language.to_owned(),
                    error: Box::new(error),
                }),
            (None, Some(datatype)) => {
                Ok(Literal::new_typed_literal(value, NamedNode::new(datatype)?))
            }
            (None, None) => Ok(Literal::new_simple_literal(value)),
        }
    }
}

/// A [TermFactory] that trusts its input.
///
/// Useful if the values have already been validated, e.g., because they stem from a parser.
/// Passing invalid values results in terms that violate the RDF specification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UncheckedTermFactory;

impl TermFactory for UncheckedTermFactory {
    fn named_node(&self, iri: &str) -> Result<NamedNode, TermError> {
        Ok(NamedNode::new_unchecked(iri))
    }

    fn blank_node(&self, id: Option<&str>) -> Result<BlankNode, TermError> {
        Ok(id.map_or_else(BlankNode::default, BlankNode::new_unchecked))
    }

    fn literal(
        &self,
        value: &str,
        language: Option<&str>,
        datatype: Option<&str>,
    ) -> Result<Literal, TermError> {
        Ok(match (language, datatype) {
            (Some(language), _) => Literal::new_language_tagged_literal_unchecked(value, language),
            (None, Some(datatype)) => {
                Literal::new_typed_literal(value, NamedNode::new_unchecked(datatype))
            }
            (None, None) => Literal::new_simple_literal(value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::vocab::{rdf, xsd};

    #[test]
    fn literal_language_takes_precedence() {
        let literal = DefaultTermFactory
            .literal("bar", Some("en"), Some(xsd::INTEGER.as_str()))
            .unwrap();
        assert_eq!(literal.language(), Some("en"));
        assert_eq!(literal.datatype(), rdf::LANG_STRING);
    }

    #[test]
    fn literal_defaults_to_string() {
        let literal = DefaultTermFactory.literal("bar", None, None).unwrap();
        assert_eq!(literal.language(), None);
        assert_eq!(literal.datatype(), xsd::STRING);
    }

    #[test]
    fn literal_with_datatype() {
        let literal = DefaultTermFactory
            .literal("42", None, Some(xsd::INTEGER.as_str()))
            .unwrap();
        assert_eq!(literal.value(), "42");
        assert_eq!(literal.datatype(), xsd::INTEGER);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            DefaultTermFactory.named_node("not an iri"),
            Err(TermError::InvalidIri(_))
        ));
        assert!(matches!(
            DefaultTermFactory.blank_node(Some("a b")),
            Err(TermError::InvalidBlankNodeId(_))
        ));
        assert!(matches!(
            DefaultTermFactory.literal("bar", Some("not a tag!"), None),
            Err(TermError::InvalidLanguageTag { .. })
        ));
    }

    #[test]
    fn unchecked_factory_accepts_anything() {
        let node = UncheckedTermFactory.named_node("not an iri").unwrap();
        assert_eq!(node.as_str(), "not an iri");
    }

    #[test]
    fn blank_node_without_id_is_fresh() {
        let a = DefaultTermFactory.blank_node(None).unwrap();
        let b = DefaultTermFactory.blank_node(None).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn quad_without_graph_is_in_default_graph() {
        let node = NamedNode::new_unchecked("http://example.com/s");
        let quad = DefaultTermFactory.quad(
            node.clone().into(),
            node.clone(),
            node.clone().into(),
            None,
        );
        assert_eq!(quad.graph_name, GraphName::DefaultGraph);

        let quad = DefaultTermFactory.quad(
            node.clone().into(),
            node.clone(),
            node.clone().into(),
            Some(node.clone().into()),
        );
        assert_eq!(quad.graph_name, GraphName::NamedNode(node));
    }
}
