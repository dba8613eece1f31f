pub mod apply;
pub mod home;
pub mod not_found;

pub use apply::Apply;
pub use home::Home;
pub use not_found::NotFound;
