//! Mapping between `dns_verify_domain::RecordType` and `hickory_proto::rr::RecordType`
//!
//! Hickory has no dedicated SPF variant; type 99 travels as `Unknown(99)`.

use dns_verify_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

/// Bidirectional mapper between domain and hickory record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::SPF => HickoryRecordType::from(RecordType::SPF.to_u16()),
            RecordType::ANY => HickoryRecordType::ANY,
        }
    }

    /// Convert hickory RecordType → domain RecordType (for answers)
    ///
    /// Types the domain model does not name become `ANY`.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        match hickory_type {
            HickoryRecordType::A => RecordType::A,
            HickoryRecordType::AAAA => RecordType::AAAA,
            HickoryRecordType::CNAME => RecordType::CNAME,
            HickoryRecordType::PTR => RecordType::PTR,
            HickoryRecordType::TXT => RecordType::TXT,
            other => RecordType::from_u16(u16::from(other)),
        }
    }
}
