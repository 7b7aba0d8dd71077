use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::{resolve_name_server, DnsTransport, TransportError, UdpTransport};
use async_trait::async_trait;
use dns_verify_application::ports::{DnsQueryPort, QueryAnswer};
use dns_verify_domain::config::{validate_domain, validate_port, DEFAULT_DNS_PORT};
use dns_verify_domain::{DomainError, RecordType, ResolverConfig, ResolverOption};
use hickory_proto::op::ResponseCode;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Asks one nameserver about names within one zone, one UDP exchange per query.
pub struct ResolverClient {
    config: ResolverConfig,
    transport: Arc<dyn DnsTransport>,
}

impl ResolverClient {
    /// Applies `options` in order, each validated on its own; the first
    /// failure aborts construction.
    ///
    /// The nameserver address and port are combined after all options are
    /// applied, so `Port` may come before or after `NameServer`.
    pub async fn new<I>(options: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = ResolverOption>,
    {
        let config = Self::build_config(options).await?;
        let transport = Arc::new(UdpTransport::new(config.name_server));

        info!(
            domain = %config.domain,
            name_server = %config.name_server,
            timeout_ms = config.timeout.as_millis() as u64,
            "Resolver client ready"
        );

        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    async fn build_config<I>(options: I) -> Result<ResolverConfig, DomainError>
    where
        I: IntoIterator<Item = ResolverOption>,
    {
        let mut domain: Option<String> = None;
        let mut address: Option<IpAddr> = None;
        let mut port = DEFAULT_DNS_PORT;
        let mut timeout = DEFAULT_QUERY_TIMEOUT;

        for option in options {
            match option {
                ResolverOption::Domain(name) => {
                    validate_domain(&name)?;
                    domain = Some(name);
                }
                ResolverOption::NameServer(host) => {
                    address = Some(resolve_name_server(&host, timeout).await?);
                }
                ResolverOption::Port(value) => {
                    port = validate_port(value)?;
                }
                ResolverOption::Timeout(value) => {
                    timeout = value;
                }
            }
        }

        let domain =
            domain.ok_or_else(|| DomainError::InvalidDomain("no domain configured".to_string()))?;
        let address = address.ok_or_else(|| DomainError::ResolutionError {
            host: String::new(),
            reason: "no nameserver configured".to_string(),
        })?;

        Ok(ResolverConfig {
            domain,
            name_server: SocketAddr::new(address, port),
            port,
            timeout,
        })
    }
}

#[async_trait]
impl DnsQueryPort for ResolverClient {
    async fn query(
        &self,
        subdomain: &str,
        record_type: RecordType,
    ) -> Result<QueryAnswer, DomainError> {
        let name = self.fqdn(subdomain);
        let server = self.name_server();
        let query_error = |e: TransportError| DomainError::QueryError {
            name: name.clone(),
            server: server.clone(),
            reason: e.to_string(),
        };

        let (id, request) =
            MessageBuilder::build_query_with_id(&name, &record_type).map_err(query_error)?;

        debug!(
            name = %name,
            record_type = %record_type,
            server = %server,
            id = id,
            protocol = self.transport.protocol_name(),
            "Sending query"
        );

        let response = self
            .transport
            .send(&request, self.config.timeout)
            .await
            .map_err(query_error)?;

        let parsed = ResponseParser::parse(&response.bytes).map_err(query_error)?;

        if parsed.id != id {
            return Err(query_error(TransportError::IdMismatch {
                expected: id,
                received: parsed.id,
            }));
        }

        if parsed.truncated {
            warn!(name = %name, server = %server, "Truncated response, using partial answer");
        }

        if parsed.is_server_error() {
            warn!(
                name = %name,
                server = %server,
                rcode = ResponseParser::rcode_to_status(parsed.rcode),
                "Nameserver reported an error"
            );
        } else if parsed.is_nxdomain() {
            debug!(name = %name, server = %server, "Name does not exist");
        } else if parsed.rcode != ResponseCode::NoError {
            debug!(
                name = %name,
                server = %server,
                rcode = ResponseParser::rcode_to_status(parsed.rcode),
                "Non-NOERROR response"
            );
        }

        if parsed.answers.is_empty() {
            return Err(DomainError::NoAnswer { name, server });
        }

        Ok(parsed.answers)
    }

    fn fqdn(&self, subdomain: &str) -> String {
        self.config.fqdn(subdomain)
    }

    fn name_server(&self) -> String {
        self.config.name_server.to_string()
    }
}
