//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use crate::dns::transport::TransportError;
use dns_verify_application::services::RecordTypeMapper;
use dns_verify_domain::RecordType;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query message and return its id alongside the wire bytes.
    ///
    /// Creates a standard recursive query with:
    /// - Random ID for request/response matching
    /// - RD (Recursion Desired) flag set
    /// - Single question section, class IN
    pub fn build_query_with_id(
        fqdn: &str,
        record_type: &RecordType,
    ) -> Result<(u16, Vec<u8>), TransportError> {
        let name = Name::from_str(fqdn)
            .map_err(|e| TransportError::Encode(format!("invalid name '{}': {}", fqdn, e)))?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, TransportError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message
            .emit(&mut encoder)
            .map_err(|e| TransportError::Encode(e.to_string()))?;

        Ok(buf)
    }
}
