//! Push-stream client for live notifications.
//!
//! The stream is receive-only: the server sends one JSON object per new
//! notification and the client never writes back. A connection is opened
//! once; when it drops or never comes up the widget keeps working from the
//! initial fetch alone.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.

#[cfg(test)]
#[path = "push_client_test.rs"]
mod push_client_test;

use super::types::PushPayload;
use crate::error::WidgetError;

/// Decode one text message from the stream.
///
/// # Errors
///
/// Returns `WidgetError::Decode` for anything that is not a JSON object with
/// string fields where the payload expects them.
pub fn decode_push_message(text: &str) -> Result<PushPayload, WidgetError> {
    Ok(serde_json::from_str(text)?)
}

/// Open the stream at `url` and hand each decoded payload to `on_payload`.
///
/// Undecodable messages are dropped. Returns once the connection attempt has
/// been started; the read loop runs as a local task.
///
/// # Errors
///
/// Returns `WidgetError::Connect` when the browser refuses to create the socket.
#[cfg(feature = "hydrate")]
pub fn spawn_push_client<F>(url: &str, on_payload: F) -> Result<(), WidgetError>
where
    F: Fn(PushPayload) + 'static,
{
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| WidgetError::Connect(e.to_string()))?;
    log::debug!("push stream opening: {url}");
    leptos::task::spawn_local(read_loop(ws, on_payload));
    Ok(())
}

#[cfg(feature = "hydrate")]
async fn read_loop<F>(mut ws: gloo_net::websocket::futures::WebSocket, on_payload: F)
where
    F: Fn(PushPayload),
{
    use futures::StreamExt;
    use gloo_net::websocket::Message;

    while let Some(msg) = ws.next().await {
        match msg {
            Ok(Message::Text(text)) => match decode_push_message(&text) {
                Ok(payload) => on_payload(payload),
                Err(e) => log::debug!("dropping push message: {e}"),
            },
            Ok(Message::Bytes(_)) => log::debug!("dropping binary push message"),
            Err(e) => {
                log::debug!("push stream closed: {e}");
                break;
            }
        }
    }
    log::debug!("push stream ended; continuing without live updates");
}
