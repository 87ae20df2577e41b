//! Shared UI components for the client app.

pub mod theme;

pub use theme::DarkModeToggle;
