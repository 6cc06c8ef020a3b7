//! Ordered adjacency maps
//!
//! Both directions of the import graph are "file -> list of files" maps whose
//! key order matters: it is the order files were analyzed (forward) or first
//! referenced (reverse), and it decides ties in the impact ranking. Values keep
//! duplicates, one entry per import statement.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Insertion-ordered multimap from a project-relative file to other files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMap {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

/// `file -> files it imports`, in source order.
pub type ForwardGraph = AdjacencyMap;

/// `file -> files importing it`, one entry per import edge.
pub type ReverseGraph = AdjacencyMap;

impl AdjacencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set the list for `key`. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<String>) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = values,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, values));
            }
        }
    }

    /// Append one value to the list for `key`, creating the entry if absent.
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };
        self.entries[i].1.push(value.into());
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.index.get(key).map(|&i| self.entries[i].1.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Total number of values across all keys (edge count).
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|(_, v)| v.len()).sum()
    }
}

impl FromIterator<(String, Vec<String>)> for AdjacencyMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, values) in iter {
            map.insert(key, values);
        }
        map
    }
}

impl Serialize for AdjacencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, values) in &self.entries {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AdjacencyMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AdjacencyVisitor;

        impl<'de> Visitor<'de> for AdjacencyVisitor {
            type Value = AdjacencyMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping file paths to arrays of file paths")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = AdjacencyMap::new();
                while let Some((key, values)) = access.next_entry::<String, Vec<String>>()? {
                    map.insert(key, values);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(AdjacencyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_insert_preserves_first_position() {
        let mut map = AdjacencyMap::new();
        map.insert("b.ts", strings(&["x.ts"]));
        map.insert("a.ts", strings(&[]));
        map.insert("b.ts", strings(&["y.ts"]));

        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["b.ts", "a.ts"]);
        assert_eq!(map.get("b.ts"), Some(&["y.ts".to_string()][..]));
    }

    #[test]
    fn test_push_keeps_duplicates() {
        let mut map = AdjacencyMap::new();
        map.push("lib/util.ts", "a.ts");
        map.push("lib/util.ts", "a.ts");
        assert_eq!(map.len(), 1);
        assert_eq!(map.edge_count(), 2);
        assert_eq!(map.get("lib/util.ts").unwrap(), strings(&["a.ts", "a.ts"]));
    }

    #[test]
    fn test_serialize_in_insertion_order() {
        let map: AdjacencyMap = vec![
            ("z.ts".to_string(), strings(&["a.ts"])),
            ("a.ts".to_string(), strings(&[])),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"z.ts":["a.ts"],"a.ts":[]}"#);
    }

    #[test]
    fn test_deserialize_preserves_document_order() {
        let map: AdjacencyMap =
            serde_json::from_str(r#"{"lib/z.ts": ["lib/a.ts"], "lib/a.ts": []}"#).unwrap();
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["lib/z.ts", "lib/a.ts"]);
        assert!(map.contains_key("lib/a.ts"));
    }

    #[test]
    fn test_deserialize_rejects_non_object() {
        assert!(serde_json::from_str::<AdjacencyMap>("[1, 2]").is_err());
        assert!(serde_json::from_str::<AdjacencyMap>(r#"{"a.ts": "b.ts"}"#).is_err());
    }
}
