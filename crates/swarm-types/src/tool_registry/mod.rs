//! Ordered tool registry
//!
//! Agents expose their tools as a mapping from tool key to an opaque
//! definition. The mapping keeps insertion order because the order tools are
//! offered to the model is observable.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Insertion-ordered mapping from tool key to tool definition
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSet<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for ToolSet<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> ToolSet<T> {
    /// Create an empty tool set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tool, replacing an existing definition in place
    pub fn insert(&mut self, key: impl Into<String>, tool: T) -> Option<T> {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, tool)),
            None => {
                self.entries.push((key, tool));
                None
            }
        }
    }

    /// Insert a tool and return self for chaining
    pub fn with_tool(mut self, key: impl Into<String>, tool: T) -> Self {
        self.insert(key, tool);
        self
    }

    /// Look up a tool definition by key
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, tool)| tool)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Tool keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(key, tool)| (key.as_str(), tool))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for ToolSet<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut set = ToolSet::new();
        for (key, tool) in iter {
            set.insert(key, tool);
        }
        set
    }
}

impl<T> IntoIterator for ToolSet<T> {
    type Item = (String, T);
    type IntoIter = std::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Serializes as a JSON array of tool keys
impl<T> Serialize for ToolSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.keys())
    }
}

/// Deserializes from an object of tool key to definition, in document order
impl<'de, T: Deserialize<'de>> Deserialize<'de> for ToolSet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ToolSetVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for ToolSetVisitor<T> {
            type Value = ToolSet<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of tool keys to tool definitions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut set = ToolSet::new();
                while let Some((key, tool)) = map.next_entry::<String, T>()? {
                    set.insert(key, tool);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(ToolSetVisitor(PhantomData))
    }
}
