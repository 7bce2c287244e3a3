use async_trait::async_trait;
use dashmap::DashMap;
use serde::Serialize;
use serde_json::{Value, json};
use tokio::sync::broadcast;
use tracing::debug;

use crate::engine::errors::FanoutError;
use crate::engine::fanout::transport::Fanout;

/// Frame delivered to hub subscribers, serialized as JSON on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct HubFrame {
    pub event: String,
    pub data: Value,
}

/// In-process fan-out transport backed by per-channel broadcast senders.
///
/// Channels are created lazily on first subscribe or send. Sending to a
/// channel with no subscribers succeeds: delivery is best-effort and slow
/// consumers miss frames rather than backing up the write path.
pub struct BroadcastHub {
    channels: DashMap<String, broadcast::Sender<HubFrame>>,
    capacity: usize,
}

impl BroadcastHub {
    pub fn new(capacity: usize) -> Self {
        Self {
            channels: DashMap::new(),
            capacity,
        }
    }

    pub fn subscribe(&self, channel: &str) -> broadcast::Receiver<HubFrame> {
        self.sender(channel).subscribe()
    }

    pub fn subscriber_count(&self, channel: &str) -> usize {
        self.channels
            .get(channel)
            .map(|sender| sender.receiver_count())
            .unwrap_or(0)
    }

    fn sender(&self, channel: &str) -> broadcast::Sender<HubFrame> {
        self.channels
            .entry(channel.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .clone()
    }

    fn send(&self, channel: &str, frame: HubFrame) {
        // Err here only means no live subscribers on the channel.
        if self.sender(channel).send(frame).is_err() {
            debug!(target: "pulsefeed::fanout", channel, "No subscribers on channel");
        }
    }
}

/// Interest channel a region's subscribers listen on.
pub fn interest_channel(target: &str) -> String {
    format!("interest-{target}")
}

fn confirmation_id() -> String {
    format!("{:016x}{:016x}", rand::random::<u64>(), rand::random::<u64>())
}

#[async_trait]
impl Fanout for BroadcastHub {
    async fn publish(
        &self,
        targets: &[String],
        title: &str,
        body: &str,
    ) -> Result<String, FanoutError> {
        let frame = HubFrame {
            event: "notification".to_string(),
            data: json!({ "title": title, "body": body }),
        };

        for target in targets {
            self.send(&interest_channel(target), frame.clone());
        }

        Ok(confirmation_id())
    }

    async fn broadcast(
        &self,
        channel: &str,
        event_name: &str,
        payload: &[u8],
    ) -> Result<(), FanoutError> {
        let data = serde_json::from_slice(payload)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(payload).into_owned()));

        self.send(
            channel,
            HubFrame {
                event: event_name.to_string(),
                data,
            },
        );

        Ok(())
    }
}
