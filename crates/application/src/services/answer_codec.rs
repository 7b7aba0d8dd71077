//! Normalizes a raw answer record into the comparable [`Record`] shape.
//!
//! Reads the structured fields instead of parsing the presentation text, but
//! produces the same values: TTL from the record header, the record's type,
//! and the rdata rendering with every `"` removed. Multi-string TXT/SPF data
//! is joined with single spaces and escaped the way zone files escape it.

use super::record_type_map::RecordTypeMapper;
use dns_verify_domain::{DomainError, Record, RecordType};
use hickory_proto::rr::{DNSClass, RData, Record as AnswerRecord};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};

pub struct AnswerCodec;

impl AnswerCodec {
    pub fn record_from_answer(answer: &AnswerRecord) -> Result<Record, DomainError> {
        if answer.dns_class() != DNSClass::IN {
            return Err(DomainError::MalformedRecord(format!(
                "{} has class {}, expected IN",
                answer.name(),
                answer.dns_class()
            )));
        }

        let dns_type = RecordTypeMapper::from_hickory(answer.record_type());
        let value = Self::render_value(dns_type, answer.data())?.replace('"', "");

        if value.is_empty() && !dns_type.is_text() {
            return Err(DomainError::MalformedRecord(format!(
                "{} {} carries no data",
                answer.name(),
                answer.record_type()
            )));
        }

        Ok(Record::new(answer.ttl(), dns_type, value))
    }

    fn render_value(dns_type: RecordType, rdata: &RData) -> Result<String, DomainError> {
        match rdata {
            RData::TXT(txt) => Ok(Self::render_character_strings(
                txt.iter().map(|bytes| &bytes[..]),
            )),
            _ if dns_type == RecordType::SPF => {
                let raw = Self::rdata_bytes(rdata)?;
                let strings = Self::split_character_strings(&raw)?;
                Ok(Self::render_character_strings(strings.into_iter()))
            }
            other => Ok(other.to_string()),
        }
    }

    fn rdata_bytes(rdata: &RData) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(256);
        let mut encoder = BinEncoder::new(&mut buf);

        rdata.emit(&mut encoder).map_err(|e| {
            DomainError::MalformedRecord(format!("Failed to read record data: {}", e))
        })?;

        Ok(buf)
    }

    /// Splits RFC 1035 <character-string> sequences (length byte + payload).
    fn split_character_strings(raw: &[u8]) -> Result<Vec<&[u8]>, DomainError> {
        let mut strings = Vec::new();
        let mut pos = 0;

        while pos < raw.len() {
            let len = raw[pos] as usize;
            let start = pos + 1;
            let end = start + len;
            if end > raw.len() {
                return Err(DomainError::MalformedRecord(format!(
                    "character-string of {} bytes overruns {} bytes of data",
                    len,
                    raw.len()
                )));
            }
            strings.push(&raw[start..end]);
            pos = end;
        }

        Ok(strings)
    }

    /// Zone-file presentation of character-strings, space separated, without
    /// the surrounding quotes.
    fn render_character_strings<'a>(strings: impl Iterator<Item = &'a [u8]>) -> String {
        let mut out = String::new();
        for (i, bytes) in strings.enumerate() {
            if i > 0 {
                out.push(' ');
            }
            Self::escape_character_string(bytes, &mut out);
        }
        out
    }

    /// `"` and `\` are backslash-escaped; bytes outside printable ASCII become `\DDD`.
    fn escape_character_string(bytes: &[u8], out: &mut String) {
        for &b in bytes {
            match b {
                b'"' | b'\\' => {
                    out.push('\\');
                    out.push(b as char);
                }
                b' '..=b'~' => out.push(b as char),
                _ => out.push_str(&format!("\\{:03}", b)),
            }
        }
    }
}
