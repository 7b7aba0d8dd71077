//! DNS verify domain layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod record_set;

pub use config::{CliOverrides, Config, ResolverConfig, ResolverOption};
pub use dns_record::{Record, RecordType};
pub use errors::{DocumentError, DomainError};
pub use record_set::RecordSet;
