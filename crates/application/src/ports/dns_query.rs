use async_trait::async_trait;
use dns_verify_domain::{DomainError, RecordType};
use hickory_proto::rr::Record;

/// Raw answer section of one query, owned by the wire library.
pub type QueryAnswer = Vec<Record>;

/// A single configured nameserver/zone pair that can be asked about labels.
#[async_trait]
pub trait DnsQueryPort: Send + Sync {
    /// Issue exactly one query of `record_type` for `subdomain` within the zone.
    ///
    /// An empty `subdomain` targets the zone apex. Fails with
    /// [`DomainError::QueryError`] when the exchange fails and with
    /// [`DomainError::NoAnswer`] when the answer section is empty.
    async fn query(
        &self,
        subdomain: &str,
        record_type: RecordType,
    ) -> Result<QueryAnswer, DomainError>;

    /// The fully-qualified name a query for `subdomain` is sent for.
    fn fqdn(&self, subdomain: &str) -> String;

    /// `ip:port` of the nameserver being asked.
    fn name_server(&self) -> String;
}
