//! Insertion-ordered link table.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One saved link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub id: String,
    pub target: String,
}

/// Identifier-to-URL mapping that remembers insertion order.
///
/// The persisted form is a single JSON object whose member order is the
/// insertion order, so order survives a save/load round-trip. Display
/// wants newest first; [`LinkTable::iter_newest_first`] provides that.
/// Lookups scan the entries, which stays invisible at the table sizes a
/// person accumulates by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTable {
    entries: Vec<LinkRecord>,
}

impl LinkTable {
    pub fn new() -> Self {
        LinkTable::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|r| r.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.target.as_str())
    }

    /// Insert a link, or overwrite the target when the identifier is
    /// already present. Overwriting keeps the entry's original position.
    pub fn put(&mut self, id: impl Into<String>, target: impl Into<String>) {
        let id = id.into();
        let target = target.into();
        match self.entries.iter_mut().find(|r| r.id == id) {
            Some(existing) => existing.target = target,
            None => self.entries.push(LinkRecord { id, target }),
        }
    }

    /// Remove a link. Returns false when the identifier was absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|r| r.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries oldest first, the stored order
    pub fn iter(&self) -> impl Iterator<Item = &LinkRecord> {
        self.entries.iter()
    }

    /// Entries newest first, the display order
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &LinkRecord> {
        self.entries.iter().rev()
    }
}

impl Serialize for LinkTable {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for record in &self.entries {
            map.serialize_entry(&record.id, &record.target)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LinkTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = LinkTable;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object mapping identifiers to URLs")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut table = LinkTable::new();
                while let Some((id, target)) = access.next_entry::<String, String>()? {
                    table.put(id, target);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
