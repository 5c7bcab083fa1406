//! Structured multiset keys.
//!
//! Keys stay structured inside the engine so a literal `@` or `=` in a tag, attribute name or value
//! can never make two different keys collide. The `tag@attr` / `tag@attr=value` string form only
//! exists through [`std::fmt::Display`], at the report boundary.

use std::fmt;

/// Attribute name, with the namespace URI kept apart from the local name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttrName {
    pub namespace: Option<String>,
    pub local: String,
}

impl AttrName {
    pub fn new(local: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local: local.into(),
        }
    }

    pub fn namespaced(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local: local.into(),
        }
    }

    pub(crate) fn from_attribute(a: &roxmltree::Attribute<'_, '_>) -> Self {
        Self {
            namespace: a.namespace().map(str::to_string),
            local: a.name().to_string(),
        }
    }
}

impl fmt::Display for AttrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            // Clark notation, e.g. `{http://www.w3.org/1999/xlink}href`.
            Some(ns) => write!(f, "{{{ns}}}{}", self.local),
            None => f.write_str(&self.local),
        }
    }
}

/// `tag@attr`: one attribute present on one element kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttrKey {
    pub tag: String,
    pub attr: AttrName,
}

impl AttrKey {
    pub fn new(tag: impl Into<String>, attr: AttrName) -> Self {
        Self {
            tag: tag.into(),
            attr,
        }
    }
}

impl fmt::Display for AttrKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.tag, self.attr)
    }
}

/// `tag@attr=value`, where `value` is already normalized.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttrValueKey {
    pub tag: String,
    pub attr: AttrName,
    pub value: String,
}

impl AttrValueKey {
    pub fn new(tag: impl Into<String>, attr: AttrName, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attr,
            value: value.into(),
        }
    }
}

impl fmt::Display for AttrValueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}={}", self.tag, self.attr, self.value)
    }
}
