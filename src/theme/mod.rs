//! Styles for the KakaoShare window.

mod styles;

pub use styles::GLOBAL_STYLES;
