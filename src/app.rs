use dioxus::prelude::*;

use crate::components::{ComposerForm, Footer, Header};
use crate::context::ShareContext;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the share context, then lays out
/// header, composer and footer.
#[component]
pub fn App() -> Element {
    use_context_provider(|| crate::get_share_context().unwrap_or_else(ShareContext::offline));

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app",
            Header {}
            ComposerForm {}
            Footer {}
        }
    }
}
