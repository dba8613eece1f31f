pub mod header;
pub mod layout;
pub mod page;
pub mod protected_layout;

pub use header::Header;
pub use layout::Layout;
pub use page::Page;
pub use protected_layout::RequiresLoggedIn;
