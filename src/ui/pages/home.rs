//! Home page: a heading and the toggle.

use dioxus::prelude::*;

use crate::darkmode::DarkModeSettings;
use crate::ui::components::{DarkModeToggle, Layout};

#[component]
pub fn HomePage(settings: DarkModeSettings) -> Element {
    rsx! {
        Layout { title: "Home".to_string(), settings: settings,
            h1 { "Dark Mode" }
            p { "Your choice is remembered in this browser." }
            DarkModeToggle {}
        }
    }
}
