use rustc_hash::FxHashMap;
use std::borrow::Cow;

/// The well-known prefixes that are registered by default.
const DEFAULT_NAMESPACES: &[(&str, &str)] = &[
    ("bibo", "http://purl.org/ontology/bibo/"),
    ("cc", "http://creativecommons.org/ns#"),
    ("cert", "http://www.w3.org/ns/auth/cert#"),
    ("ctag", "http://commontag.org/ns#"),
    ("dc", "http://purl.org/dc/terms/"),
    ("dc11", "http://purl.org/dc/elements/1.1/"),
    ("dcat", "http://www.w3.org/ns/dcat#"),
    ("dcterms", "http://purl.org/dc/terms/"),
    ("doap", "http://usefulinc.com/ns/doap#"),
    ("exif", "http://www.w3.org/2003/12/exif/ns#"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
    ("geo", "http://www.w3.org/2003/01/geo/wgs84_pos#"),
    ("gr", "http://purl.org/goodrelations/v1#"),
    ("grddl", "http://www.w3.org/2003/g/data-view#"),
    ("ical", "http://www.w3.org/2002/12/cal/icaltzd#"),
    ("ma", "http://www.w3.org/ns/ma-ont#"),
    ("mo", "http://purl.org/ontology/mo/"),
    ("og", "http://ogp.me/ns#"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("prov", "http://www.w3.org/ns/prov#"),
    ("qb", "http://purl.org/linked-data/cube#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfa", "http://www.w3.org/ns/rdfa#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("rev", "http://purl.org/stuff/rev#"),
    ("rif", "http://www.w3.org/2007/rif#"),
    ("rr", "http://www.w3.org/ns/r2rml#"),
    ("rss", "http://purl.org/rss/1.0/"),
    ("schema", "http://schema.org/"),
    ("sd", "http://www.w3.org/ns/sparql-service-description#"),
    ("sioc", "http://rdfs.org/sioc/ns#"),
    ("skos", "http://www.w3.org/2004/02/skos/core#"),
    ("skosxl", "http://www.w3.org/2008/05/skos-xl#"),
    ("synd", "http://purl.org/rss/1.0/modules/syndication/"),
    ("v", "http://rdf.data-vocabulary.org/#"),
    ("vcard", "http://www.w3.org/2006/vcard/ns#"),
    ("void", "http://rdfs.org/ns/void#"),
    ("wdr", "http://www.w3.org/2007/05/powder#"),
    ("wdrs", "http://www.w3.org/2007/05/powder-s#"),
    ("wot", "http://xmlns.com/wot/0.1/"),
    ("xhv", "http://www.w3.org/1999/xhtml/vocab#"),
    ("xml", "http://www.w3.org/XML/1998/namespace"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
];

/// A mapping from prefixes to namespace URIs.
///
/// Used to expand prefixed names such as `xsd:integer` into absolute URIs before they cross into
/// the generic model. Prefixes are case-insensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespaces {
    prefixes: FxHashMap<String, String>,
}

impl Default for Namespaces {
    /// Creates a [Namespaces] with the well-known prefixes (`rdf`, `rdfs`, `xsd`, `owl`, ...).
    fn default() -> Self {
        let prefixes = DEFAULT_NAMESPACES
            .iter()
            .map(|(prefix, uri)| ((*prefix).to_owned(), (*uri).to_owned()))
            .collect();
        Self { prefixes }
    }
}

impl Namespaces {
    /// Creates a [Namespaces] without any registered prefix.
    pub fn empty() -> Self {
        Self {
            prefixes: FxHashMap::default(),
        }
    }

    /// Registers `prefix` for the namespace `uri`. Replaces any previous registration.
    pub fn set(&mut self, prefix: &str, uri: impl Into<String>) {
        self.prefixes.insert(prefix.to_lowercase(), uri.into());
    }

    /// Returns the namespace URI of `prefix`.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.prefixes
            .get(&prefix.to_lowercase())
            .map(String::as_str)
    }

    /// Removes `prefix`. Returns the namespace URI it was bound to.
    pub fn remove(&mut self, prefix: &str) -> Option<String> {
        self.prefixes.remove(&prefix.to_lowercase())
    }

    /// Returns the number of registered prefixes.
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Expands a prefixed name (`prefix:local`) into an absolute URI.
    ///
    /// Names that are not of this form or that use an unknown prefix are returned unchanged. This
    /// includes absolute URIs.
    pub fn expand<'name>(&self, name: &'name str) -> Cow<'name, str> {
        let Some((prefix, local)) = split_prefixed_name(name) else {
            return Cow::Borrowed(name);
        };
        match self.get(prefix) {
            Some(namespace) => Cow::Owned(format!("{namespace}{local}")),
            None => Cow::Borrowed(name),
        }
    }
}

fn split_prefixed_name(name: &str) -> Option<(&str, &str)> {
    let (prefix, local) = name.split_once(':')?;
    let valid_prefix =
        !prefix.is_empty() && prefix.chars().all(|c| c.is_alphanumeric() || c == '_');
    (valid_prefix && is_local_name(local)).then_some((prefix, local))
}

fn is_local_name(local: &str) -> bool {
    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}
