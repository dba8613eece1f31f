//! Data transfer objects shared by the web client and the server.
//!
//! Everything in here compiles for both the `web` and `server` feature sets, so it
//! only depends on `serde`, `regex` and `thiserror`.

pub mod api;
pub mod application;
pub mod question;
pub mod user;
