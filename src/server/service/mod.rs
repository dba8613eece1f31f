//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the outside world. Controllers hand them
//! validated request data and the session identity; services apply the application
//! rules and talk to Discord.
//!
//! - **Auth** (`auth`) - OAuth2 login behind the `IdentityProvider` trait
//! - **Questions** (`question`) - Randomized question draws and answer checks
//! - **Applications** (`application`) - Submission validation
//! - **Relay** (`relay`) - Webhook message building and delivery

pub mod application;
pub mod auth;
pub mod question;
pub mod relay;
