//! Server-rendered dark mode toggle and its inline scripts.

use dioxus::prelude::*;

use crate::darkmode::DarkModeSettings;

/// Toggle button wired to the page-level `toggleMode()` function.
/// Raw onclick attribute since Dioxus SSR doesn't render string event handlers.
#[component]
pub fn DarkModeToggle() -> Element {
    rsx! {
        div {
            class: "dark-mode-switcher",
            dangerous_inner_html: r#"<button id="dark-mode-toggle" class="dark-mode-toggle" type="button" onclick="toggleMode()">Toggle dark mode</button>"#
        }
    }
}

/// Quote a value as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Restore-on-load script. Must run inside `<body>`, before content paints.
pub fn restore_script(settings: &DarkModeSettings) -> String {
    let key = js_string(&settings.storage_key);
    let class = js_string(&settings.marker_class);
    format!(
        r#"
(function () {{
    try {{
        if (localStorage.getItem({key}) === 'true') document.body.classList.add({class});
    }} catch (e) {{}}
}})();
"#
    )
}

/// Global `toggleMode()` for the toggle button.
pub fn toggle_script(settings: &DarkModeSettings) -> String {
    let key = js_string(&settings.storage_key);
    let class = js_string(&settings.marker_class);
    format!(
        r#"
function toggleMode() {{
    const on = document.body.classList.toggle({class});
    try {{ localStorage.setItem({key}, on ? 'true' : 'false'); }} catch (e) {{}}
}}
"#
    )
}
