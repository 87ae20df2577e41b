//! Dark mode context for the client app.
//!
//! The browser marker (class on `<body>`) and localStorage are the source of
//! truth; the signal mirrors them so components re-render on toggle.

use dioxus::prelude::*;

use crate::darkmode::ColorScheme;

/// Global dark mode state shared via context
#[derive(Clone, Copy)]
pub struct DarkModeContext {
    pub current: Signal<ColorScheme>,
}

impl DarkModeContext {
    /// Get current color scheme
    pub fn get(&self) -> ColorScheme {
        (self.current)()
    }

    /// Flip dark mode, apply it to the DOM and try to persist it
    pub fn toggle(&self) {
        let mut current = self.current;

        #[cfg(target_arch = "wasm32")]
        let next = browser_dark_mode().toggle();

        #[cfg(not(target_arch = "wasm32"))]
        let next = current.peek().toggled();

        current.set(next);
    }
}

/// Initialize dark mode context provider - call once at app root.
///
/// The stored preference is restored when the signal is created, which
/// happens exactly once per app instance.
pub fn use_dark_mode_provider() {
    let current = use_signal(restore_on_load);
    use_context_provider(|| DarkModeContext { current });
}

/// Get dark mode context - use in any component
pub fn use_dark_mode() -> DarkModeContext {
    use_context::<DarkModeContext>()
}

#[cfg(target_arch = "wasm32")]
fn browser_dark_mode(
) -> crate::darkmode::DarkMode<crate::darkmode::LocalStorage, crate::darkmode::BodyClassMarker> {
    use crate::darkmode::{BodyClassMarker, DarkMode, LocalStorage, DEFAULT_MARKER_CLASS};

    DarkMode::new(LocalStorage, BodyClassMarker::new(DEFAULT_MARKER_CLASS))
}

#[cfg(target_arch = "wasm32")]
fn restore_on_load() -> ColorScheme {
    browser_dark_mode().restore()
}

#[cfg(not(target_arch = "wasm32"))]
fn restore_on_load() -> ColorScheme {
    ColorScheme::Light
}
