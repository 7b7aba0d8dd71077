use crate::ports::DnsQueryPort;
use crate::services::AnswerCodec;
use dns_verify_domain::{DomainError, Record};
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

/// Result of checking one subdomain against its expected record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The live answer equals the expected record, which is carried unchanged.
    Matched(Record),
    /// The live answer differs; carries the observed record.
    Changed(Record),
}

impl CheckOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, CheckOutcome::Changed(_))
    }

    pub fn record(&self) -> &Record {
        match self {
            CheckOutcome::Matched(record) | CheckOutcome::Changed(record) => record,
        }
    }

    pub fn into_record(self) -> Record {
        match self {
            CheckOutcome::Matched(record) | CheckOutcome::Changed(record) => record,
        }
    }
}

/// Compares one expected record with what the nameserver answers now and
/// writes one status line per check to `status`.
pub struct CheckSubdomainUseCase<W> {
    client: Arc<dyn DnsQueryPort>,
    status: W,
}

impl<W: Write> CheckSubdomainUseCase<W> {
    pub fn new(client: Arc<dyn DnsQueryPort>, status: W) -> Self {
        Self { client, status }
    }

    pub async fn execute(
        &mut self,
        subdomain: &str,
        expected: &Record,
    ) -> Result<CheckOutcome, DomainError> {
        let fqdn = self.client.fqdn(subdomain);
        let query_type = expected.query_type();

        let answer = self.client.query(subdomain, query_type).await?;

        let first = answer.first().ok_or_else(|| DomainError::NoAnswer {
            name: fqdn.clone(),
            server: self.client.name_server(),
        })?;

        let observed = AnswerCodec::record_from_answer(first)?;

        debug!(
            name = %fqdn,
            query_type = %query_type,
            answers = answer.len(),
            expected = %expected,
            observed = %observed,
            "Compared live answer"
        );

        if observed == *expected {
            self.write_status(format_args!("[ok] resource {} record matched", fqdn))?;
            Ok(CheckOutcome::Matched(expected.clone()))
        } else {
            self.write_status(format_args!(
                "[CHG] resource {} record did not match",
                fqdn
            ))?;
            Ok(CheckOutcome::Changed(observed))
        }
    }

    pub fn into_status(self) -> W {
        self.status
    }

    fn write_status(&mut self, line: std::fmt::Arguments<'_>) -> Result<(), DomainError> {
        writeln!(self.status, "{}", line).map_err(|e| DomainError::Io(e.to_string()))
    }
}
