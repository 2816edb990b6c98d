use brighella_api::{create_routes, AppState};
use std::net::SocketAddr;
use std::str::FromStr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_web_server(bind_addr: String, state: AppState) -> anyhow::Result<()> {
    let socket_addr = SocketAddr::from_str(&bind_addr)?;

    let app = create_routes(state).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(socket_addr).await?;
    info!(bind_address = %socket_addr, "🌍 Brighella listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
