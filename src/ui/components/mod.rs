//! Shared server-rendered components.

pub mod layout;
pub mod theme;

pub use layout::Layout;
pub use theme::DarkModeToggle;
