use clap::Parser;
use dns_verify_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod run;

#[derive(Parser, Debug)]
#[command(name = "dns-verify")]
#[command(version)]
#[command(about = "Verify expected DNS records against a live nameserver")]
struct Cli {
    /// Record document listing the expected record per subdomain
    #[arg(value_name = "CONFIG_FILE")]
    config_file: String,

    /// Zone the subdomains belong to
    domain: String,

    /// Nameserver hostname or IP address
    nameserver: String,

    /// Nameserver port (53 or 1024-65535)
    #[arg(short, long)]
    port: Option<u16>,

    /// Per-query timeout in seconds
    #[arg(short, long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Where to write records that did not match [default: changes.yaml]
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Tool settings file
    #[arg(short, long, value_name = "FILE")]
    settings: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            port: self.port,
            query_timeout: self.timeout,
            output_path: self.output.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.settings.as_deref(), cli.overrides())?;

    bootstrap::init_logging(cli.log_level.as_deref(), &config)?;

    info!("Starting dns-verify v{}", env!("CARGO_PKG_VERSION"));
    info!(
        port = config.resolver.port,
        query_timeout = config.resolver.query_timeout,
        output = %config.output.path,
        "Settings resolved"
    );

    run::run(&cli, &config, std::io::stdout()).await?;

    Ok(())
}
