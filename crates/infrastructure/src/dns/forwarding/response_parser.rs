use crate::dns::transport::TransportError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::Record;
use tracing::debug;

/// The parts of a response the resolver client acts on.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub answers: Vec<Record>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    pub fn is_server_error(&self) -> bool {
        matches!(
            self.rcode,
            ResponseCode::ServFail | ResponseCode::Refused | ResponseCode::NotImp
        )
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, TransportError> {
        if response_bytes.len() < 12 {
            return Err(TransportError::Decode(format!(
                "response too short: {} bytes",
                response_bytes.len()
            )));
        }

        let message =
            Message::from_vec(response_bytes).map_err(|e| TransportError::Decode(e.to_string()))?;

        let id = u16::from_be_bytes([response_bytes[0], response_bytes[1]]);
        let rcode = message.response_code();
        let truncated = message.truncated();
        let answers = message.answers().to_vec();

        debug!(
            id = id,
            rcode = Self::rcode_to_status(rcode),
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id,
            rcode,
            truncated,
            answers,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
