use async_trait::async_trait;

use crate::engine::errors::FanoutError;

/// Push-delivery seam. `publish` targets named subscription interests and
/// returns the transport's opaque confirmation id; `broadcast` delivers a
/// payload to every subscriber of a channel. Both are best-effort: delivery
/// guarantees belong to the transport, not to this core.
#[async_trait]
pub trait Fanout: Send + Sync {
    async fn publish(
        &self,
        targets: &[String],
        title: &str,
        body: &str,
    ) -> Result<String, FanoutError>;

    async fn broadcast(
        &self,
        channel: &str,
        event_name: &str,
        payload: &[u8],
    ) -> Result<(), FanoutError>;
}
