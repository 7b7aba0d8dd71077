pub mod resolver;
pub mod udp;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub use resolver::resolve_name_server;
pub use udp::UdpTransport;

/// Failures of a single request/response exchange with a nameserver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("failed to bind UDP socket: {0}")]
    Bind(String),

    #[error("failed to send query: {0}")]
    Send(String),

    #[error("failed to receive response: {0}")]
    Receive(String),

    #[error("timed out after {timeout:?} while {stage}")]
    Timeout {
        stage: &'static str,
        timeout: Duration,
    },

    #[error("failed to encode query: {0}")]
    Encode(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("response id {received} does not match query id {expected}")]
    IdMismatch { expected: u16, received: u16 },
}

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError>;

    fn protocol_name(&self) -> &'static str;
}
