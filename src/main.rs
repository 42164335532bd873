use ecomoving::config::Config;
use mimalloc::MiMalloc;
use tokio::{net::TcpListener, signal};
use tracing::info;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load_validated()?;

    ecomoving::telemetry::init(&cfg.basic.loglevel);

    info!(
        loglevel = %cfg.basic.loglevel,
        listen_addr = %cfg.basic.listen_addr,
        listen_port = cfg.basic.listen_port,
        poll_interval_secs = cfg.content.poll_interval_secs,
        bucket_url = %cfg.assets.bucket_url.as_ref().map_or("<none>", |u| u.as_str()),
        "Basic config (effective)"
    );

    let site = ecomoving::Site::start(&cfg).await?;
    let app = ecomoving::server::router::site_router(site.state.clone());

    let addr = cfg.basic.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(poller) = site.poller {
        poller.abort();
    }
    info!("Server has shut down gracefully.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
