use anyhow::Context;
use clap::Parser;
use rise::server::create_router;
use rise::utils::{logger, validation::Validate};
use rise::{AppConfig, ServerCli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = ServerCli::parse();

    logger::init_logger(cli.verbose);

    tracing::info!("Starting rise-server");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut config = AppConfig::from_file(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config))?;

    if let Some(port) = cli.port {
        config.server.port = port;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let router = create_router(&config.server.static_dir);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    tracing::info!(%addr, static_dir = %config.server.static_dir, "Listening for HTTP traffic");
    println!("Server running on {}.", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
