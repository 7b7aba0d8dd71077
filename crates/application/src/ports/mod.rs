mod dns_query;

pub use dns_query::{DnsQueryPort, QueryAnswer};
