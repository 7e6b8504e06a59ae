//! Keypool Admin Command Line Tool
//!
//! This binary starts the interactive operator console for the remote
//! license key management service.

use clap::Parser;
use log::{info, warn};

// Import our library
use keypool_admin::api::KeyManagementClient;
use keypool_admin::common::{init_logger, Result};
use keypool_admin::config::{ConsoleConfig, ENV_PREFIX};
use keypool_admin::console::{ActivityLog, Console, Shell, StatusCell};
use keypool_admin::{APP_NAME, VERSION};

use std::path::Path;

/// Keypool Admin: operator console for a remote license key management service
#[derive(Parser, Debug)]
#[clap(author, version = VERSION, about, long_about = None)]
struct Args {
    /// Key-management endpoint URL
    #[clap(long)]
    endpoint: Option<String>,

    /// Service API key sent with every request
    #[clap(long, env = "KEYPOOL_ADMIN_SERVICE_KEY", hide_env_values = true)]
    service_key: Option<String>,

    /// Prefill the session admin secret key (prefer the environment variable)
    #[clap(long, env = "KEYPOOL_ADMIN_ADMIN_KEY", hide_env_values = true)]
    admin_key: Option<String>,

    /// Request timeout in seconds
    #[clap(long)]
    timeout: Option<u64>,

    /// Log level
    #[clap(long, default_value = "info")]
    log_level: String,

    /// Load configuration from a file
    #[clap(long)]
    config_file: Option<String>,

    /// Load configuration from environment variables
    #[clap(long)]
    from_env: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    init_logger(&args.log_level);

    info!("Starting {} v{}", APP_NAME, VERSION);

    // Start from built-in defaults (the embedded endpoint constants)
    let mut config = ConsoleConfig::default();

    // Load from configuration file if specified
    if let Some(config_file) = args.config_file.as_deref() {
        if Path::new(config_file).exists() {
            info!("Loading configuration from file: {}", config_file);
            config = config.merge(ConsoleConfig::from_file(config_file)?);
        } else {
            warn!("Configuration file not found: {}", config_file);
        }
    }

    // Load from environment variables if specified
    if args.from_env {
        info!(
            "Loading configuration from environment variables ({}*)",
            ENV_PREFIX
        );
        config = config.merge(ConsoleConfig::from_env()?);
    }

    // Command line arguments take the highest precedence
    let mut cli_config = ConsoleConfig::default();
    if let Some(endpoint) = args.endpoint {
        cli_config.endpoint = endpoint;
    }
    if let Some(service_key) = args.service_key {
        cli_config.service_key = service_key;
    }
    if let Some(admin_key) = args.admin_key {
        cli_config.admin_key = Some(admin_key);
    }
    if let Some(timeout) = args.timeout {
        cli_config.request_timeout = timeout;
    }
    cli_config.log_level = args.log_level.clone();
    config = config.merge(cli_config);

    // Validate the final configuration
    config.validate()?;

    info!("Endpoint: {}", config.endpoint);
    info!("Request timeout: {}s", config.request_timeout);

    // Assemble the console and hand control to the interactive shell
    let client = KeyManagementClient::new(&config)?;
    let console = Console {
        client,
        log: ActivityLog::echoing(),
        status: StatusCell::new(),
    };

    let shell = Shell::new(console, config.admin_key.clone());
    shell.run().await
}
