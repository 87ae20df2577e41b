//! Layout component wrapping server-rendered pages.

use dioxus::prelude::*;

use super::theme::{restore_script, toggle_script};
use crate::app::STYLES;
use crate::darkmode::DarkModeSettings;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Storage key and marker class baked into the inline scripts
    pub settings: DarkModeSettings,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let restore = restore_script(&props.settings);
    let toggle = toggle_script(&props.settings);

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title} - Dark Mode Toggle" }
            style { {STYLES} }
            script { dangerous_inner_html: toggle }
        }
        body {
            // First child of body so the class lands before content paints
            script { dangerous_inner_html: restore }
            main { class: "container",
                {props.children}
            }
            footer { class: "container",
                small { "Dark Mode Toggle v{version}" }
            }
        }
    }
}
