//! Dark Mode Toggle
//!
//! Toggles a "dark" class on the page and remembers the choice in the
//! browser's localStorage.
//!
//! This library provides:
//! - The preference model, storage and UI marker abstractions (`darkmode`)
//! - A Dioxus client app with a toggle button (`app`)
//! - A server-rendered page that works without the wasm client (`ui`)

pub mod app;
#[cfg(feature = "server")]
pub mod config;
pub mod darkmode;
#[cfg(feature = "server")]
pub mod ui;
