use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::broadcast::Receiver;

use crate::api::views::MatchView;
use crate::AppState;

/// Live stream of newly created matches.
pub async fn lifecycle(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let rx = state.events.subscribe_lifecycle();
    ws.on_upgrade(move |socket| forward_events(socket, rx, "lifecycle"))
}

/// Live stream of odds/score changes.
pub async fn odds(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let rx = state.events.subscribe_odds();
    ws.on_upgrade(move |socket| forward_events(socket, rx, "odds"))
}

/// Forward broadcast events to one WebSocket client until either side goes
/// away. Dropping the receiver on exit releases the subscriber's buffer.
async fn forward_events(mut socket: WebSocket, mut rx: Receiver<MatchView>, channel: &'static str) {
    tracing::info!(channel, "Stream client connected");

    loop {
        tokio::select! {
            event = rx.recv() => {
                match event {
                    Ok(view) => {
                        match serde_json::to_string(&view) {
                            Ok(json) => {
                                if socket.send(Message::Text(json)).await.is_err() {
                                    break;
                                }
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "Failed to serialize MatchView");
                            }
                        }
                    }
                    Err(RecvError::Lagged(n)) => {
                        tracing::warn!(channel, skipped = n, "Stream client lagged");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            // Handle incoming messages from client (ping/pong, close)
            client_msg = socket.recv() => {
                match client_msg {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(_)) => {} // ignore text/binary from client
                    Some(Err(_)) => break,
                }
            }
        }
    }

    tracing::info!(channel, "Stream client disconnected");
}
