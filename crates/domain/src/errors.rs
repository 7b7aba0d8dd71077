use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomain(String),

    #[error("Invalid port {0}: must be 53 or within 1024-65535")]
    InvalidPort(i64),

    #[error("Failed to resolve nameserver {host}: {reason}")]
    ResolutionError { host: String, reason: String },

    #[error("Query for {name} to {server} failed: {reason}")]
    QueryError {
        name: String,
        server: String,
        reason: String,
    },

    #[error("No answer records for {name} from nameserver {server}")]
    NoAnswer { name: String, server: String },

    #[error("Malformed resource record: {0}")]
    MalformedRecord(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Failures of the record document codec and its file wrappers.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read record file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to write record file {0}: {1}")]
    FileWrite(String, String),

    #[error("Failed to parse record document: {0}")]
    Parse(String),

    #[error("Failed to serialize record document: {0}")]
    Serialize(String),
}
