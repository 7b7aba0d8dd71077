use crate::dns_record::Record;
use crate::errors::DocumentError;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// Subdomain label -> record. The empty label is the zone apex.
///
/// Backed by an ordered map so that iteration, status output and the
/// serialized document are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: BTreeMap<String, Record>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, subdomain: impl Into<String>, record: Record) -> Option<Record> {
        self.records.insert(subdomain.into(), record)
    }

    pub fn get(&self, subdomain: &str) -> Option<&Record> {
        self.records.get(subdomain)
    }

    pub fn contains(&self, subdomain: &str) -> bool {
        self.records.contains_key(subdomain)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Record> {
        self.records.iter()
    }

    pub fn subdomains(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Parses a YAML mapping of subdomain -> `{ttl, type, value}`.
    ///
    /// An empty or `null` document is an empty set.
    pub fn from_document(contents: &str) -> Result<Self, DocumentError> {
        if contents.trim().is_empty() {
            return Ok(Self::new());
        }

        let records: Option<Self> =
            serde_yaml::from_str(contents).map_err(|e| DocumentError::Parse(e.to_string()))?;

        Ok(records.unwrap_or_default())
    }

    pub fn to_document(&self) -> Result<String, DocumentError> {
        serde_yaml::to_string(self).map_err(|e| DocumentError::Serialize(e.to_string()))
    }
}

impl FromIterator<(String, Record)> for RecordSet {
    fn from_iter<I: IntoIterator<Item = (String, Record)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, Record)> for RecordSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, Record)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(subdomain, record)| (subdomain.to_string(), record))
            .collect()
    }
}

impl Extend<(String, Record)> for RecordSet {
    fn extend<I: IntoIterator<Item = (String, Record)>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl IntoIterator for RecordSet {
    type Item = (String, Record);
    type IntoIter = btree_map::IntoIter<String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = (&'a String, &'a Record);
    type IntoIter = btree_map::Iter<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
