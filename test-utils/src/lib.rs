//! Application Form Test Utils
//!
//! Shared helpers for the server's unit and router tests.
//!
//! # Overview
//!
//! - **TestContext**: Standalone in-memory session for exercising session wrappers
//! - **MockWebhook**: Local HTTP server standing in for the Discord webhook
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{context::TestContext, webhook::MockWebhook};
//!
//! #[tokio::test]
//! async fn relays_once() {
//!     let webhook = MockWebhook::start(StatusCode::NO_CONTENT).await;
//!     // Point the relay at `webhook.url`, submit...
//!     assert_eq!(webhook.requests().await.len(), 1);
//! }
//! ```

pub mod context;
pub mod webhook;
