//! App header bar.

use dioxus::prelude::*;

/// Purple title bar at the top of the window
#[component]
pub fn Header(
    /// Title text
    #[props(default = "카카오톡 웹".to_string())]
    title: String,
) -> Element {
    rsx! {
        header { class: "app-header",
            h1 { class: "app-header__title", "{title}" }
        }
    }
}
