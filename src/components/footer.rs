//! App footer with the tutorial link.

use dioxus::prelude::*;

const TUTORIAL_URL: &str = "https://cpro95.tistory.com/50";

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "app-footer",
            p {
                a { href: TUTORIAL_URL, "링크 : 튜토리얼 보기" }
            }
            p { "카카오톡 API와 Rust, Dioxus로 만들었습니다." }
        }
    }
}
