use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_DNS_PORT: u16 = 53;
pub const MIN_UNPRIVILEGED_PORT: i64 = 1024;
pub const MAX_PORT: i64 = 65535;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

/// Resolver defaults read from the settings file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverSettings {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Seconds to wait for one query exchange.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
            query_timeout: default_query_timeout(),
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_DNS_PORT
}

fn default_query_timeout() -> u64 {
    5
}

/// One composable, independently validated piece of client construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverOption {
    Domain(String),
    NameServer(String),
    Port(i64),
    Timeout(Duration),
}

/// A validated query target: the zone plus the nameserver address to ask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub domain: String,
    pub name_server: SocketAddr,
    pub port: u16,
    pub timeout: Duration,
}

impl ResolverConfig {
    /// `<subdomain>.<domain>.`, or `<domain>.` for an empty subdomain.
    pub fn fqdn(&self, subdomain: &str) -> String {
        fqdn(&self.domain, subdomain)
    }
}

pub fn fqdn(domain: &str, subdomain: &str) -> String {
    let zone = domain.trim_end_matches('.');
    if subdomain.is_empty() {
        format!("{}.", zone)
    } else {
        format!("{}.{}.", subdomain, zone)
    }
}

/// Port 53, or anything in the unprivileged range.
pub fn validate_port(port: i64) -> Result<u16, DomainError> {
    if port == DEFAULT_DNS_PORT as i64 || (MIN_UNPRIVILEGED_PORT..=MAX_PORT).contains(&port) {
        Ok(port as u16)
    } else {
        Err(DomainError::InvalidPort(port))
    }
}

/// Syntactic check only; a single trailing dot is accepted.
pub fn validate_domain(domain: &str) -> Result<(), DomainError> {
    let name = domain.strip_suffix('.').unwrap_or(domain);

    if name.is_empty() {
        return Err(DomainError::InvalidDomain(format!(
            "'{}' has no labels",
            domain
        )));
    }

    if name.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomain(format!(
            "'{}' is longer than {} octets",
            domain, MAX_NAME_LEN
        )));
    }

    if let Some(c) = name.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(DomainError::InvalidDomain(format!(
            "'{}' contains illegal character {:?}",
            domain, c
        )));
    }

    for label in name.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomain(format!(
                "'{}' contains an empty label",
                domain
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomain(format!(
                "label '{}' is longer than {} octets",
                label, MAX_LABEL_LEN
            )));
        }
    }

    Ok(())
}
