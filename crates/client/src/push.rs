//! # Push Channel
//!
//! Subscription to the shared parking-updates topic over WebSocket. The
//! broker publishes either a full spot snapshot or a single updated record;
//! both shapes deserialize into [`PushUpdate`].
//!
//! Updates are yielded strictly in receipt order. The wire carries no
//! sequence number, so a stale update arriving after a newer one overwrites
//! it and the last write wins.

use eyre::{Result, WrapErr};
use futures::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::protocol::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, info, warn};
use uuid::Uuid;

use parkview_core::models::push::PushUpdate;

/// One live subscription to the parking-updates topic.
pub struct PushChannel {
    id: Uuid,
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl PushChannel {
    /// Open the WebSocket connection to the push endpoint.
    pub async fn connect(ws_url: &str) -> Result<Self> {
        let (stream, _) = connect_async(ws_url)
            .await
            .wrap_err_with(|| format!("Failed to connect push channel at {ws_url}"))?;
        let id = Uuid::new_v4();
        info!(connection = %id, "Push channel connected to {ws_url}");
        Ok(Self { id, stream })
    }

    /// Connection id used to correlate log lines.
    pub fn connection_id(&self) -> Uuid {
        self.id
    }

    /// The next update on the topic, or `None` once the channel closes.
    ///
    /// Malformed payloads are logged and skipped rather than tearing down
    /// the subscription.
    pub async fn next_update(&mut self) -> Result<Option<PushUpdate>> {
        while let Some(message) = self.stream.next().await {
            let message = message.wrap_err("Push channel transport error")?;
            match message {
                Message::Text(text) => match serde_json::from_str::<PushUpdate>(text.as_str()) {
                    Ok(update) => return Ok(Some(update)),
                    Err(err) => {
                        warn!(connection = %self.id, "Dropping unparseable push payload: {err}");
                    }
                },
                Message::Close(_) => {
                    debug!(connection = %self.id, "Push channel closed by peer");
                    return Ok(None);
                }
                // Ping/pong is handled by the transport; binary frames carry
                // no updates on this topic.
                _ => {}
            }
        }
        Ok(None)
    }
}
