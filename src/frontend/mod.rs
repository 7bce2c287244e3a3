pub mod context;
pub mod http;
pub mod server_state;
pub mod ws;


use context::FrontendContext;
use std::sync::Arc;
use tracing::info;

pub async fn start_all() -> anyhow::Result<()> {
    let ctx = FrontendContext::from_config();

    let shutdown_ctx = Arc::clone(&ctx);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            shutdown_ctx.server_state.signal_shutdown();
        }
    });

    tokio::try_join!(
        http::listener::run_http_server(Arc::clone(&ctx)),
        ws::listener::run_ws_server(Arc::clone(&ctx)),
    )?;
    Ok(())
}
