use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::broadcast::error::RecvError;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::protocol::Message;
use tracing::{debug, info, warn};

use crate::frontend::context::FrontendContext;
use crate::shared::config::CONFIG;

/// WebSocket subscriber bridge. A client opens a connection, sends
/// `SUBSCRIBE <channel>`, and from then on receives every hub frame for
/// that channel as a JSON text message. Channels are event ids for
/// broadcasts and `interest-{regionId}` for published notifications.
pub async fn run_ws_server(ctx: Arc<FrontendContext>) -> anyhow::Result<()> {
    let addr: SocketAddr = CONFIG.server.ws_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("WebSocket server running at ws://{addr}");

    loop {
        if ctx.server_state.is_shutting_down() {
            info!("WebSocket server shutting down, not accepting new connections");
            break;
        }

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
                info!("WebSocket server shutting down, stopping accept loop");
                break;
            }
        };

        let (stream, peer_addr) = match accept_result {
            Ok(pair) => pair,
            Err(e) => {
                warn!("Failed to accept WebSocket connection: {}", e);
                continue;
            }
        };

        let ctx = Arc::clone(&ctx);
        tokio::spawn(async move {
            handle_subscriber(stream, peer_addr, ctx).await;
        });
    }

    info!("WebSocket server shutdown complete");
    Ok(())
}

async fn handle_subscriber(stream: TcpStream, peer_addr: SocketAddr, ctx: Arc<FrontendContext>) {
    let ws_stream = match accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            warn!("WebSocket handshake failed from {}: {:?}", peer_addr, e);
            return;
        }
    };

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();

    // First frame must name the channel to subscribe to.
    let channel = loop {
        match ws_receiver.next().await {
            Some(Ok(Message::Text(text))) => {
                let trimmed = text.trim();
                if let Some(channel) = trimmed.strip_prefix("SUBSCRIBE ") {
                    break channel.trim().to_string();
                }
                let _ = ws_sender
                    .send(Message::Text("ERROR: Expected SUBSCRIBE <channel>\n".into()))
                    .await;
            }
            Some(Ok(Message::Ping(payload))) => {
                let _ = ws_sender.send(Message::Pong(payload)).await;
            }
            Some(Ok(Message::Close(_))) | None => return,
            Some(Ok(_)) => {
                let _ = ws_sender
                    .send(Message::Text("ERROR: Expected SUBSCRIBE <channel>\n".into()))
                    .await;
            }
            Some(Err(e)) => {
                warn!("WebSocket error from {}: {:?}", peer_addr, e);
                return;
            }
        }
    };

    let mut rx = ctx.hub.subscribe(&channel);
    debug!(
        target: "pulsefeed::ws",
        channel = channel.as_str(),
        "Subscriber attached"
    );
    let _ = ws_sender.send(Message::Text("OK\n".into())).await;

    loop {
        tokio::select! {
            frame = rx.recv() => match frame {
                Ok(frame) => {
                    let text = match sonic_rs::to_string(&frame) {
                        Ok(text) => text,
                        Err(e) => {
                            warn!("Failed to serialize hub frame: {}", e);
                            continue;
                        }
                    };
                    if ws_sender.send(Message::Text(text)).await.is_err() {
                        break;
                    }
                }
                // A lagged subscriber misses frames rather than stalling the hub.
                Err(RecvError::Lagged(missed)) => {
                    debug!(
                        target: "pulsefeed::ws",
                        channel = channel.as_str(),
                        missed,
                        "Subscriber lagged"
                    );
                }
                Err(RecvError::Closed) => break,
            },
            msg = ws_receiver.next() => match msg {
                Some(Ok(Message::Ping(payload))) => {
                    let _ = ws_sender.send(Message::Pong(payload)).await;
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!("WebSocket error from {}: {:?}", peer_addr, e);
                    break;
                }
            },
        }
    }

    debug!(
        target: "pulsefeed::ws",
        channel = channel.as_str(),
        "Subscriber detached"
    );
}
