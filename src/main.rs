use anyhow::Result;
use clap::{Parser, Subcommand};

/// northlight - marketing site backend
#[derive(Parser)]
#[command(name = "northlight")]
#[command(about = "API for the Northlight marketing site", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = northlight::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    northlight::observability::init_observability(
        "northlight",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let result = match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
    };

    northlight::observability::shutdown_observability();

    result
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: northlight::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting northlight server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    if config.email.is_none() {
        tracing::warn!(
            "No [email] section configured; contact submissions will be acknowledged but not relayed"
        );
    }
    if config.maintenance.enabled {
        tracing::warn!("Maintenance mode is enabled; all routes redirect to /maintenance");
    }

    let app = northlight::create_app(config);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
