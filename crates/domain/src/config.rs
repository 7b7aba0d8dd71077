pub mod errors;
pub mod logging;
pub mod output;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use resolver::{
    fqdn, validate_domain, validate_port, ResolverConfig, ResolverOption, ResolverSettings,
    DEFAULT_DNS_PORT,
};
pub use root::{CliOverrides, Config};
