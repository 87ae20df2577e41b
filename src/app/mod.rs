//! Dioxus client application entry point.
//!
//! Runs in the browser: restores the dark mode preference on startup and
//! renders the toggle control.

use dioxus::prelude::*;

pub mod components;
pub mod theme;

use components::DarkModeToggle;
use theme::use_dark_mode_provider;

/// Styles keyed off the body marker class
pub const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; background: #fff; color: #111; transition: background .2s, color .2s; }
body.dark { background: #111; color: #eee; }
.dark-mode-toggle { padding: 0.4rem 0.9rem; border-radius: 6px; border: 1px solid currentColor; background: transparent; color: inherit; cursor: pointer; }
"#;

/// Root app component
#[component]
pub fn App() -> Element {
    // Restore the saved preference before anything else renders
    use_dark_mode_provider();

    rsx! {
        style { {STYLES} }
        main { class: "container",
            h1 { "Dark Mode" }
            DarkModeToggle {}
        }
    }
}
