use anyhow::Context;
use dns_verify_domain::Config;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr; stdout carries only status lines.
pub fn init_logging(cli_level: Option<&str>, config: &Config) -> anyhow::Result<()> {
    let filter = env_filter(cli_level, config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    Ok(())
}

/// Level precedence: `--log-level`, then `RUST_LOG`, then the settings file.
fn env_filter(cli_level: Option<&str>, config: &Config) -> anyhow::Result<EnvFilter> {
    if let Some(level) = cli_level {
        return EnvFilter::try_new(level)
            .with_context(|| format!("Invalid --log-level '{}'", level));
    }

    if let Ok(directives) = std::env::var(EnvFilter::DEFAULT_ENV) {
        return EnvFilter::try_new(&directives)
            .with_context(|| format!("Invalid {} '{}'", EnvFilter::DEFAULT_ENV, directives));
    }

    EnvFilter::try_new(&config.logging.level)
        .with_context(|| format!("Invalid logging level '{}'", config.logging.level))
}
