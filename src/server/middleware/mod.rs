//! Request guards, session wrappers and response middleware.

pub mod auth;
pub mod error;
pub mod session;
