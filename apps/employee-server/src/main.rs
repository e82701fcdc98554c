//! Employee Service HTTP server

mod config;
mod logging;

use anyhow::Result;
use clap::Parser;
use config::AppConfig;
use employee_service::EmployeeServiceModule;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

#[derive(Debug, Parser)]
#[command(name = "employee-server", version, about = "Employee management HTTP API")]
struct Args {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides server.bind_addr
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Log filter directive, overrides logging.level
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut cfg = AppConfig::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        cfg.server.bind_addr = bind;
    }
    if let Some(level) = args.log_level {
        cfg.logging.level = level;
    }

    logging::init(&cfg.logging.level);

    let shutdown = CancellationToken::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for shutdown signal");
        }
        signal.cancel();
    });

    let module = EmployeeServiceModule::new(cfg.employees);
    serve(cfg.server.bind_addr, module, shutdown).await
}

async fn serve(
    addr: SocketAddr,
    module: EmployeeServiceModule,
    shutdown: CancellationToken,
) -> Result<()> {
    let app = module.router().layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("REST listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            tracing::info!("REST shutdown requested");
        })
        .await?;
    tracing::info!("REST server exited");
    Ok(())
}
