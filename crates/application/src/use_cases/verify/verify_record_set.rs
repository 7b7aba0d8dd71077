use super::check_subdomain::CheckSubdomainUseCase;
use crate::ports::DnsQueryPort;
use dns_verify_domain::{DomainError, RecordSet};
use std::io::Write;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    pub checked: usize,
    /// Observed records for every subdomain that no longer matches.
    pub changed: RecordSet,
}

impl VerificationReport {
    pub fn has_changes(&self) -> bool {
        !self.changed.is_empty()
    }
}

/// Checks every entry of a record set, one query at a time.
///
/// The first failing subdomain aborts the run; no partial report is returned.
pub struct VerifyRecordSetUseCase<W> {
    check: CheckSubdomainUseCase<W>,
}

impl<W: Write> VerifyRecordSetUseCase<W> {
    pub fn new(client: Arc<dyn DnsQueryPort>, status: W) -> Self {
        Self {
            check: CheckSubdomainUseCase::new(client, status),
        }
    }

    pub async fn execute(&mut self, records: &RecordSet) -> Result<VerificationReport, DomainError> {
        let mut report = VerificationReport::default();

        for (subdomain, expected) in records {
            let outcome = self.check.execute(subdomain, expected).await.map_err(|e| {
                warn!(subdomain = %subdomain, error = %e, "Verification aborted");
                e
            })?;

            report.checked += 1;
            if outcome.is_changed() {
                report.changed.insert(subdomain.clone(), outcome.into_record());
            }
        }

        info!(
            checked = report.checked,
            changed = report.changed.len(),
            "Verification finished"
        );

        Ok(report)
    }

    pub fn into_status(self) -> W {
        self.check.into_status()
    }
}
