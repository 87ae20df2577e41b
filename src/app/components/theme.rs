//! Dark mode toggle button.

use dioxus::prelude::*;

use crate::app::theme::use_dark_mode;

/// Button that flips between light and dark mode.
#[component]
pub fn DarkModeToggle() -> Element {
    let dark_mode = use_dark_mode();
    let scheme = dark_mode.get();
    let pressed = scheme.is_dark();
    let next = scheme.toggled().label();

    rsx! {
        button {
            id: "dark-mode-toggle",
            class: "dark-mode-toggle",
            r#type: "button",
            "aria-pressed": "{pressed}",
            onclick: move |_| dark_mode.toggle(),
            "{next} mode"
        }
    }
}
