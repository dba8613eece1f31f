pub mod application;
pub mod helper;
pub mod user;
