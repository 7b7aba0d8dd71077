use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record types a verification entry can name.
///
/// Anything outside this set collapses into [`RecordType::ANY`], which is
/// also what gets queried for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    PTR,
    TXT,
    SPF,
    #[default]
    ANY,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::PTR => "PTR",
            RecordType::TXT => "TXT",
            RecordType::SPF => "SPF",
            RecordType::ANY => "ANY",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::CNAME => 5,
            RecordType::PTR => 12,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::SPF => 99,
            RecordType::ANY => 255,
        }
    }

    /// Wire codes outside the supported set map to `ANY`.
    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            5 => RecordType::CNAME,
            12 => RecordType::PTR,
            16 => RecordType::TXT,
            28 => RecordType::AAAA,
            99 => RecordType::SPF,
            _ => RecordType::ANY,
        }
    }

    /// Case-insensitive and total: unknown or empty input yields `ANY`.
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "A" => RecordType::A,
            "AAAA" => RecordType::AAAA,
            "CNAME" => RecordType::CNAME,
            "PTR" => RecordType::PTR,
            "TXT" => RecordType::TXT,
            "SPF" => RecordType::SPF,
            _ => RecordType::ANY,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, RecordType::TXT | RecordType::SPF)
    }

    pub fn all() -> [RecordType; 7] {
        use RecordType::*;
        [A, AAAA, CNAME, PTR, TXT, SPF, ANY]
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_str_lossy(s))
    }
}

impl From<String> for RecordType {
    fn from(s: String) -> Self {
        Self::from_str_lossy(&s)
    }
}

impl From<&str> for RecordType {
    fn from(s: &str) -> Self {
        Self::from_str_lossy(s)
    }
}

impl From<RecordType> for String {
    fn from(record_type: RecordType) -> Self {
        record_type.as_str().to_string()
    }
}
