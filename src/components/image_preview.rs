//! Image Preview Component
//!
//! Shows the attached image before upload, with a detach button.

use std::sync::Arc;

use dioxus::prelude::*;

#[component]
pub fn ImagePreview(
    /// Preview URL from the composer's preview handle
    url: Arc<str>,
    /// File name, used as alt text
    name: String,
    /// Hide the detach button (e.g. while sending)
    #[props(default = false)]
    locked: bool,
    /// Handler called when the detach button is pressed
    on_remove: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "image-preview",
            img {
                class: "image-preview__img",
                src: "{url}",
                alt: "{name}",
            }
            button {
                class: "image-preview__remove",
                title: "이미지 삭제",
                disabled: locked,
                onclick: move |_| on_remove.call(()),
                "×"
            }
        }
    }
}
