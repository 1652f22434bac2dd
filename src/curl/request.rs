//! # Parsed Request Model
//!
//! The structured result of interpreting a curl invocation.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Method curl uses when no `-X` is given
pub const DEFAULT_METHOD: &str = "GET";

/// A single header entry. `value` is `None` when the header had no colon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: Option<String>,
}

/// Headers in first-seen order.
///
/// Inserting a name that is already present replaces its value but keeps the
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<Header>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|h| h.name == name) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Header { name, value }),
        }
    }

    /// Returns the stored value for `name`; `Some(None)` means present without a value
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|h| h.name == name)
            .map(|h| h.value.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Headers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for header in &self.entries {
            map.serialize_entry(&header.name, &header.value)?;
        }
        map.end()
    }
}

/// Structured form of a curl invocation
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ParsedRequest {
    pub(crate) url: String,
    pub(crate) method: String,
    pub(crate) headers: Headers,
    pub(crate) body: Vec<String>,
    pub(crate) user: Option<String>,
    pub(crate) other_flags: Vec<String>,
}

impl ParsedRequest {
    pub(crate) fn new(url: String) -> Self {
        Self {
            url,
            method: DEFAULT_METHOD.to_string(),
            headers: Headers::new(),
            body: Vec::new(),
            user: None,
            other_flags: Vec::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// One entry per data flag, in the order they appeared
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// Basic auth credential from `-u`/`--user`
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn other_flags(&self) -> &[String] {
        &self.other_flags
    }
}
