use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind carried by padding vertices created by [`Vertex::placeholder`].
pub const PLACEHOLDER_KIND: &str = "__ISOLATED";

/// Arena index of a vertex inside one [`Graph`](super::Graph).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId {
    /// The underlying raw integer index.
    inner: u32,
}

impl VertexId {
    /// Creates a vertex index from a raw integer.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self { inner: id }
    }

    /// Returns the index as a usize for array access.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.inner as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.inner)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(id: usize) -> Self {
        Self { inner: id as u32 }
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(id: VertexId) -> Self {
        id.inner as Self
    }
}

/// A typed, labelled vertex.
///
/// Two vertices have the same *content* when their kind and properties
/// agree. `debug_name` and the isolated flag never take part in that
/// comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    kind: String,
    properties: BTreeMap<String, String>,
    debug_name: Option<String>,
    isolated: bool,
}

impl Vertex {
    /// Creates a real (non placeholder) vertex with no properties.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            properties: BTreeMap::new(),
            debug_name: None,
            isolated: false,
        }
    }

    /// Creates an isolated padding vertex.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            kind: PLACEHOLDER_KIND.to_string(),
            properties: BTreeMap::new(),
            debug_name: None,
            isolated: true,
        }
    }

    /// Adds or replaces a property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Sets the name used when describing edit operations.
    #[must_use]
    pub fn with_debug_name(mut self, name: impl Into<String>) -> Self {
        self.debug_name = Some(name.into());
        self
    }

    /// The vertex type tag.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Property name to value map.
    #[must_use]
    pub const fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Looks up a single property.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Optional human readable name.
    #[must_use]
    pub fn debug_name(&self) -> Option<&str> {
        self.debug_name.as_deref()
    }

    /// True for padding vertices with no real counterpart.
    #[must_use]
    pub const fn is_isolated(&self) -> bool {
        self.isolated
    }

    /// Compares type and properties, ignoring identity.
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.kind == other.kind && self.properties == other.properties
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.isolated {
            return write!(f, "<isolated>");
        }
        match &self.debug_name {
            Some(name) => write!(f, "{} '{}'", self.kind, name)?,
            None => write!(f, "{}", self.kind)?,
        }
        if !self.properties.is_empty() {
            let props: Vec<String> = self
                .properties
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            write!(f, " {{{}}}", props.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_content_ignores_debug_name() {
        let a = Vertex::new("Object").with_property("name", "Query").with_debug_name("a");
        let b = Vertex::new("Object").with_property("name", "Query").with_debug_name("b");
        assert!(a.same_content(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn same_content_checks_properties() {
        let a = Vertex::new("Field").with_property("name", "id");
        let b = Vertex::new("Field").with_property("name", "uuid");
        assert!(!a.same_content(&b));
    }

    #[test]
    fn placeholders_share_content() {
        assert!(Vertex::placeholder().same_content(&Vertex::placeholder()));
        assert!(Vertex::placeholder().is_isolated());
    }

    #[test]
    fn display_lists_properties() {
        let v = Vertex::new("Field")
            .with_property("name", "id")
            .with_debug_name("Query.id");
        assert_eq!(v.to_string(), "Field 'Query.id' {name=id}");
        assert_eq!(Vertex::placeholder().to_string(), "<isolated>");
    }
}
