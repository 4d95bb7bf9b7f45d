//! Composer Form
//!
//! Message text field, image picker, reset and send buttons. All state lives
//! in a `ComposerState` signal; this component only forwards events to its
//! transitions and runs the async part of a submission.

use std::sync::Arc;

use dioxus::prelude::*;
use kakaoshare_core::{ComposerState, DataUriPreviews, FileHandle, ValidationError};
use rfd::FileDialog;

use super::ImagePreview;
use crate::context::use_share;

const PLACEHOLDER_TEXT_ONLY: &str = "한번에 200자까지만 전송 가능 (이미지 첨부할 경우 100자만 가능)";
const PLACEHOLDER_WITH_IMAGE: &str = "이미지 첨부 시 최대 100자까지 전송 가능합니다.";

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

#[component]
pub fn ComposerForm() -> Element {
    let share = use_share();
    let mut state = use_signal(|| ComposerState::new(Arc::new(DataUriPreviews::new())));
    let mut picking = use_signal(|| false);
    // bumped on every rejected edit to rebuild the textarea from the draft
    let mut rejections = use_signal(|| 0u32);

    // Initialize the SDK once on mount
    let activation = share.clone();
    use_effect(move || {
        let _ = state
            .write()
            .activate(activation.sdk.as_ref(), activation.app_key());
    });

    let handle_input = move |e: FormEvent| {
        if state.write().set_text(e.value()).is_err() {
            *rejections.write() += 1;
        }
    };

    let handle_reset = move |_| {
        let _ = state.write().reset();
    };

    let handle_pick = move |_| {
        picking.set(true);
        spawn(async move {
            // Open file picker and read the file off the UI thread
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", IMAGE_EXTENSIONS)
                    .set_title("이미지 올리기")
                    .pick_file()
                    .map(FileHandle::from_path)
            })
            .await;

            let _ = match picked {
                Ok(Some(Ok(file))) => state.write().set_file(file),
                Ok(Some(Err(e))) => state.write().reject_file(e),
                // User cancelled
                Ok(None) => Ok(()),
                Err(e) => {
                    tracing::error!("File picker failed: {}", e);
                    state
                        .write()
                        .reject_file(ValidationError::Unreadable(e.to_string()))
                }
            };
            picking.set(false);
        });
    };

    let handle_remove = move |_: ()| {
        let _ = state.write().clear_file();
    };

    let submit_sdk = share.sdk.clone();
    let handle_submit = move |_| {
        let submission = match state.write().begin_submit() {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!("Submit refused: {}", e);
                return;
            }
        };

        let sdk = submit_sdk.clone();
        spawn(async move {
            let outcome = submission.run(sdk.as_ref()).await;
            if let Err(e) = state.write().finish_submit(outcome) {
                tracing::error!("Submission failed: {}", e);
            }
        });
    };

    let view = state.read();
    let draft = view.draft();
    let text = draft.text().to_string();
    let counter = draft.counter();
    let at_limit = draft.text().chars().count() >= draft.limit();
    let preview = draft
        .shared_preview_url()
        .zip(draft.file().map(|f| f.name().to_string()));
    let placeholder = if draft.has_file() {
        PLACEHOLDER_WITH_IMAGE
    } else {
        PLACEHOLDER_TEXT_ONLY
    };
    let error = view.error_message();
    let submitting = view.is_submitting();
    let can_submit = view.can_submit();
    drop(view);

    rsx! {
        section { class: "composer",
            label { class: "composer__label", r#for: "message", "메시지" }
            for generation in std::iter::once(rejections()) {
                textarea {
                    key: "{generation}",
                    id: "message",
                    class: "composer__textarea",
                    placeholder: placeholder,
                    value: "{text}",
                    rows: 5,
                    autofocus: true,
                    disabled: submitting,
                    oninput: handle_input,
                }
            }
            p {
                class: if at_limit { "composer__counter composer__counter--full" } else { "composer__counter" },
                "{counter}"
            }

            div { class: "composer__actions",
                button {
                    class: "btn btn-outlined",
                    onclick: handle_reset,
                    disabled: submitting,
                    "다시 쓰기"
                }
                button {
                    class: "btn btn-send",
                    id: "kakao-link-btn",
                    onclick: handle_submit,
                    disabled: !can_submit,
                    if submitting {
                        span { class: "spinner" }
                    } else {
                        "카톡 전송"
                    }
                }
                button {
                    class: "btn btn-outlined",
                    onclick: handle_pick,
                    disabled: submitting || picking(),
                    "이미지 올리기"
                }
            }

            if let Some(err) = error {
                div { class: "alert-error", "{err}" }
            }

            if let Some((url, name)) = preview {
                ImagePreview {
                    url,
                    name,
                    locked: submitting,
                    on_remove: handle_remove,
                }
            }
        }
    }
}
