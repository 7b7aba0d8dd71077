use dns_verify_domain::DomainError;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// Resolves a nameserver hostname (or IP literal) through the system resolver
/// and returns the first address it yields.
pub async fn resolve_name_server(hostname: &str, timeout: Duration) -> Result<IpAddr, DomainError> {
    let resolution_error = |reason: String| DomainError::ResolutionError {
        host: hostname.to_string(),
        reason,
    };

    let hostname = hostname.trim();
    if hostname.is_empty() {
        return Err(resolution_error("empty hostname".to_string()));
    }

    let mut addrs = tokio::time::timeout(timeout, tokio::net::lookup_host((hostname, 0)))
        .await
        .map_err(|_| resolution_error(format!("timed out after {:?}", timeout)))?
        .map_err(|e| resolution_error(e.to_string()))?;

    let address = addrs
        .next()
        .map(|addr| addr.ip())
        .ok_or_else(|| resolution_error("no addresses found".to_string()))?;

    debug!(host = %hostname, address = %address, "Nameserver resolved");

    Ok(address)
}
