//! Server-side domain models.
//!
//! Domain models are used throughout the service layer and converted to DTOs at the
//! controller boundary.

pub mod user;
pub mod webhook;
