use super::RecordType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An expected or observed resource record, detached from the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "ttl", alias = "TTL")]
    pub ttl: u32,

    #[serde(rename = "type", alias = "TYPE", default)]
    pub dns_type: RecordType,

    #[serde(rename = "value", alias = "Value")]
    pub value: String,
}

impl Record {
    pub fn new(ttl: u32, dns_type: RecordType, value: impl Into<String>) -> Self {
        Self {
            ttl,
            dns_type,
            value: value.into(),
        }
    }

    /// The type a query for this record should ask for.
    pub fn query_type(&self) -> RecordType {
        RecordType::from_str_lossy(self.dns_type.as_str())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.ttl, self.dns_type, self.value)
    }
}
