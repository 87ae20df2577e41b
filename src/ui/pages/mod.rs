//! Server-rendered page components.

pub mod home;

pub use home::HomePage;
