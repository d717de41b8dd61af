use std::fmt::{Display, Formatter};

/// A literal of the graph-centric model.
///
/// The datatype is kept as given and may be namespace-prefixed (e.g., `xsd:integer`). Use
/// [Namespaces::expand](crate::Namespaces::expand) to obtain the absolute URI.
///
/// A literal never carries both a language tag and a datatype. If a language tag is given, the
/// datatype is dropped.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GraphLiteral {
    value: String,
    language: Option<String>,
    datatype: Option<String>,
}

impl GraphLiteral {
    /// Creates a new literal. The language tag takes precedence over the datatype.
    pub fn new(
        value: impl Into<String>,
        language: Option<impl Into<String>>,
        datatype: Option<impl Into<String>>,
    ) -> Self {
        let language = language.map(Into::<String>::into).filter(|l| !l.is_empty());
        let datatype = match language {
            Some(_) => None,
            None => datatype.map(Into::<String>::into).filter(|d| !d.is_empty()),
        };
        Self {
            value: value.into(),
            language,
            datatype,
        }
    }

    /// Creates a literal without language tag and datatype.
    pub fn simple(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    /// Creates a language-tagged literal.
    pub fn language_tagged(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self::new(value, Some(language), None::<String>)
    }

    /// Creates a typed literal.
    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self::new(value, None::<String>, Some(datatype))
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref()
    }
}

impl Display for GraphLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.value.replace('\\', "\\\\").replace('"', "\\\""))?;
        if let Some(language) = &self.language {
            write!(f, "@{language}")?;
        } else if let Some(datatype) = &self.datatype {
            if datatype.contains(['/', '#']) {
                write!(f, "^^<{datatype}>")?;
            } else {
                write!(f, "^^{datatype}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_drops_datatype() {
        let literal = GraphLiteral::new("bar", Some("en"), Some("xsd:string"));
        assert_eq!(literal.language(), Some("en"));
        assert_eq!(literal.datatype(), None);
    }

    #[test]
    fn empty_language_is_ignored() {
        let literal = GraphLiteral::new("42", Some(""), Some("xsd:integer"));
        assert_eq!(literal.language(), None);
        assert_eq!(literal.datatype(), Some("xsd:integer"));
    }

    #[test]
    fn display() {
        assert_eq!(GraphLiteral::simple("a\"b").to_string(), r#""a\"b""#);
        assert_eq!(GraphLiteral::language_tagged("bar", "en").to_string(), r#""bar"@en"#);
        assert_eq!(GraphLiteral::typed("1", "xsd:integer").to_string(), r#""1"^^xsd:integer"#);
        assert_eq!(
            GraphLiteral::typed("1", "http://www.w3.org/2001/XMLSchema#integer").to_string(),
            r#""1"^^<http://www.w3.org/2001/XMLSchema#integer>"#
        );
    }
}
