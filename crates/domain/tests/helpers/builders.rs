#![allow(dead_code)]
use dns_verify_domain::{Record, RecordSet, RecordType};

pub struct RecordBuilder {
    ttl: u32,
    dns_type: RecordType,
    value: String,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            ttl: 300,
            dns_type: RecordType::A,
            value: "192.0.2.1".to_string(),
        }
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn dns_type(mut self, dns_type: RecordType) -> Self {
        self.dns_type = dns_type;
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn build(self) -> Record {
        Record::new(self.ttl, self.dns_type, self.value)
    }
}

/// The record set stored in `tests/fixtures/records.yaml`.
pub fn fixture_record_set() -> RecordSet {
    [
        (
            "aaaa",
            Record::new(600, RecordType::AAAA, "2601:644:500:e210:62f8:1dff:feb8:947a"),
        ),
        ("cname", Record::new(300, RecordType::CNAME, "githubtest.net.")),
        ("foo.sub", Record::new(60, RecordType::A, "2.2.3.3")),
        ("ptr", Record::new(300, RecordType::PTR, "foo.bar.com.")),
        (
            "spf",
            Record::new(600, RecordType::TXT, "v=spf1 ip4:192.168.0.1/16 -all"),
        ),
        (
            "txt",
            Record::new(600, RecordType::TXT, "Twinkle twinkle little star"),
        ),
        ("www", Record::new(300, RecordType::A, "2.2.3.7")),
        ("www.sub", Record::new(300, RecordType::A, "2.2.3.6")),
    ]
    .into_iter()
    .collect()
}
