//! Server-side API backend.
//!
//! An Axum server handling Discord login, the session check, question draws and
//! application submission, and serving the built web client as static files.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and session checks
//! - **Service Layer** (`service/`) - Login flow, question draws, validation and the webhook relay
//! - **Model Layer** (`model/`) - Session identity and webhook payload types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers, auth guard and error detail exposure
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared handler state (identity provider, relay)
//! - **Startup** (`startup`) - Client setup, middleware stack and the serve loop
//! - **Router** (`router`) - Route table and static file fallback
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
