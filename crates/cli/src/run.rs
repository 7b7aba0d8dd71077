use crate::Cli;
use anyhow::Context;
use dns_verify_application::use_cases::{VerificationReport, VerifyRecordSetUseCase};
use dns_verify_domain::{Config, ResolverOption};
use dns_verify_infrastructure::dns::ResolverClient;
use dns_verify_infrastructure::repositories::RecordSetFile;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Verifies the record document named on the command line and writes the
/// changes document only when something no longer matches.
pub async fn run<W: Write>(
    cli: &Cli,
    config: &Config,
    status: W,
) -> anyhow::Result<VerificationReport> {
    let expected = RecordSetFile::load(&cli.config_file)
        .with_context(|| format!("Failed to load records from {}", cli.config_file))?;

    let client = ResolverClient::new([
        ResolverOption::Domain(cli.domain.clone()),
        ResolverOption::NameServer(cli.nameserver.clone()),
        ResolverOption::Port(i64::from(config.resolver.port)),
        ResolverOption::Timeout(Duration::from_secs(config.resolver.query_timeout)),
    ])
    .await
    .context("Failed to configure resolver client")?;

    let mut verify = VerifyRecordSetUseCase::new(Arc::new(client), status);

    let report = verify
        .execute(&expected)
        .await
        .with_context(|| format!("Verification of {} failed", cli.domain))?;

    if report.has_changes() {
        RecordSetFile::save(&report.changed, &config.output.path)
            .with_context(|| format!("Failed to write changes to {}", config.output.path))?;

        info!(
            path = %config.output.path,
            changed = report.changed.len(),
            "Changed records written"
        );
    } else {
        info!(checked = report.checked, "All records matched");
    }

    Ok(report)
}
