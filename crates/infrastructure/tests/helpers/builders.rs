#![allow(dead_code)]
use dns_verify_domain::ResolverOption;
use hickory_proto::op::Message;
use hickory_proto::rr::rdata::{A, CNAME, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DOMAIN: &str = "dns-exercise.dev";

/// Options pointing a client at `addr` with a short timeout.
pub fn options_for(addr: SocketAddr) -> Vec<ResolverOption> {
    vec![
        ResolverOption::Domain(DOMAIN.to_string()),
        ResolverOption::NameServer(addr.ip().to_string()),
        ResolverOption::Port(addr.port() as i64),
        ResolverOption::Timeout(Duration::from_millis(200)),
    ]
}

fn name(fqdn: &str) -> Name {
    Name::from_str(fqdn).unwrap()
}

pub fn a_answer(fqdn: &str, ttl: u32, ip: &str) -> Record {
    Record::from_rdata(name(fqdn), ttl, RData::A(A(ip.parse().unwrap())))
}

pub fn cname_answer(fqdn: &str, ttl: u32, target: &str) -> Record {
    Record::from_rdata(name(fqdn), ttl, RData::CNAME(CNAME(name(target))))
}

pub fn txt_answer(fqdn: &str, ttl: u32, text: &str) -> Record {
    Record::from_rdata(name(fqdn), ttl, RData::TXT(TXT::new(vec![text.to_string()])))
}

/// Type 99 answer, decoded from hand-built wire bytes so hickory carries it
/// as opaque rdata exactly like a real SPF answer.
pub fn spf_answer(fqdn: &str, ttl: u32, strings: &[&str]) -> Record {
    let mut rdata = Vec::new();
    for s in strings {
        rdata.push(s.len() as u8);
        rdata.extend_from_slice(s.as_bytes());
    }

    let mut wire = vec![0x00, 0x01, 0x81, 0x80, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00];
    for label in fqdn.trim_end_matches('.').split('.') {
        wire.push(label.len() as u8);
        wire.extend_from_slice(label.as_bytes());
    }
    wire.push(0);
    wire.extend_from_slice(&99u16.to_be_bytes());
    wire.extend_from_slice(&1u16.to_be_bytes());
    wire.extend_from_slice(&ttl.to_be_bytes());
    wire.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    wire.extend_from_slice(&rdata);

    Message::from_vec(&wire).unwrap().answers()[0].clone()
}
