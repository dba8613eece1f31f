//! Stand-in for a Discord webhook endpoint.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::Value;
use std::sync::Arc;
use tokio::{net::TcpListener, sync::Mutex};

/// Local HTTP server recording every JSON body POSTed to `/webhook`.
///
/// Answers every request with the status it was started with. The server task runs
/// until the test's runtime shuts down.
pub struct MockWebhook {
    /// Full URL of the webhook endpoint, e.g. `http://127.0.0.1:54321/webhook`.
    pub url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

#[derive(Clone)]
struct WebhookState {
    status: StatusCode,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl MockWebhook {
    /// Starts a webhook server on a random local port.
    ///
    /// # Arguments
    /// - `status` - Status returned for every request
    ///
    /// # Panics
    /// If no local port can be bound.
    pub async fn start(status: StatusCode) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new()
            .route("/webhook", post(record))
            .with_state(WebhookState {
                status,
                requests: requests.clone(),
            });

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock webhook listener");
        let addr = listener.local_addr().expect("mock webhook address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            url: format!("http://{}/webhook", addr),
            requests,
        }
    }

    /// Returns the bodies received so far, oldest first.
    pub async fn requests(&self) -> Vec<Value> {
        self.requests.lock().await.clone()
    }
}

async fn record(State(state): State<WebhookState>, Json(body): Json<Value>) -> StatusCode {
    state.requests.lock().await.push(body);
    state.status
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn records_bodies_and_answers_with_status() {
        let webhook = MockWebhook::start(StatusCode::BAD_REQUEST).await;

        let response = reqwest::Client::new()
            .post(&webhook.url)
            .json(&json!({"content": "hello"}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 400);
        assert_eq!(webhook.requests().await, vec![json!({"content": "hello"})]);
    }
}
