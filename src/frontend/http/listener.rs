use http_body_util::BodyExt;
use hyper::service::service_fn;
use hyper::{Request, Response as HyperResponse, body::Incoming};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::command::dispatcher::dispatch_request;
use crate::frontend::context::FrontendContext;
use crate::frontend::http::router::route;
use crate::shared::config::CONFIG;
use crate::shared::response::{JsonRenderer, Response, StatusCode};

pub async fn run_http_server(ctx: Arc<FrontendContext>) -> anyhow::Result<()> {
    let addr: SocketAddr = CONFIG.server.http_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("HTTP server running at http://{addr}");

    loop {
        if ctx.server_state.is_shutting_down() {
            info!("HTTP server shutting down, not accepting new connections");
            break;
        }

        // Make accept cancellable on shutdown.
        let accept_result = tokio::select! {
            result = listener.accept() => result,
            _ = async {
                loop {
                    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                    if ctx.server_state.is_shutting_down() {
                        break;
                    }
                }
            } => {
                info!("HTTP server shutting down, stopping accept loop");
                break;
            }
        };

        let (stream, _peer_addr) = match accept_result {
            Ok(pair) => pair,
            Err(e) => {
                warn!("Failed to accept HTTP connection: {}", e);
                continue;
            }
        };
        let io = TokioIo::new(stream);

        let ctx = Arc::clone(&ctx);
        tokio::spawn(async move {
            let builder = hyper::server::conn::http1::Builder::new();
            if let Err(err) = builder
                .serve_connection(
                    io,
                    service_fn(move |req| handle_request(req, Arc::clone(&ctx))),
                )
                .await
            {
                let msg = err.to_string();
                if !msg.contains("connection closed") && !msg.contains("broken pipe") {
                    warn!("Error serving HTTP connection: {:?}", err);
                }
            }
        });
    }

    if ctx.server_state.is_shutting_down() {
        info!("HTTP server waiting for active connections to complete...");
        tokio::time::sleep(tokio::time::Duration::from_secs(2)).await;
    }

    info!("HTTP server shutdown complete");
    Ok(())
}

async fn handle_request(
    req: Request<Incoming>,
    ctx: Arc<FrontendContext>,
) -> Result<HyperResponse<String>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            warn!("Failed to read HTTP request body: {}", e);
            return Ok(to_hyper(&Response::error(
                StatusCode::BadRequest,
                "Failed to read request body",
            )));
        }
    };

    let response = match route(&method, &path, &body) {
        Ok(request) => {
            ctx.server_state.increment_pending();
            let response = dispatch_request(request, &ctx.tables, ctx.fanout.as_ref()).await;
            ctx.server_state.decrement_pending();
            response
        }
        Err(rejection) => rejection,
    };

    Ok(to_hyper(&response))
}

fn to_hyper(response: &Response) -> HyperResponse<String> {
    let body = JsonRenderer.render(response);
    HyperResponse::builder()
        .status(response.status.code())
        .header(hyper::header::CONTENT_TYPE, "application/json")
        .body(String::from_utf8_lossy(&body).to_string())
        .unwrap_or_else(|_| HyperResponse::new(String::new()))
}
