#![allow(dead_code)]
use async_trait::async_trait;
use dns_verify_application::ports::{DnsQueryPort, QueryAnswer};
use dns_verify_domain::config::fqdn;
use dns_verify_domain::{DomainError, RecordType};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const MOCK_NAME_SERVER: &str = "192.0.2.53:53";

/// Answers queries from a table keyed by subdomain and remembers every call.
pub struct MockDnsQuery {
    domain: String,
    answers: Arc<Mutex<HashMap<String, QueryAnswer>>>,
    errors: Arc<Mutex<HashMap<String, DomainError>>>,
    calls: Arc<Mutex<Vec<(String, RecordType)>>>,
}

impl MockDnsQuery {
    pub fn new(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            answers: Arc::new(Mutex::new(HashMap::new())),
            errors: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_answer(&self, subdomain: &str, answer: QueryAnswer) {
        self.answers
            .lock()
            .unwrap()
            .insert(subdomain.to_string(), answer);
    }

    pub fn set_error(&self, subdomain: &str, error: DomainError) {
        self.errors
            .lock()
            .unwrap()
            .insert(subdomain.to_string(), error);
    }

    pub fn calls(&self) -> Vec<(String, RecordType)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsQueryPort for MockDnsQuery {
    async fn query(
        &self,
        subdomain: &str,
        record_type: RecordType,
    ) -> Result<QueryAnswer, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((subdomain.to_string(), record_type));

        if let Some(err) = self.errors.lock().unwrap().get(subdomain).cloned() {
            return Err(err);
        }

        match self.answers.lock().unwrap().get(subdomain) {
            Some(answer) if !answer.is_empty() => Ok(answer.clone()),
            _ => Err(DomainError::NoAnswer {
                name: self.fqdn(subdomain),
                server: self.name_server(),
            }),
        }
    }

    fn fqdn(&self, subdomain: &str) -> String {
        fqdn(&self.domain, subdomain)
    }

    fn name_server(&self) -> String {
        MOCK_NAME_SERVER.to_string()
    }
}
