//! UI Components for KakaoShare.

mod composer_form;
mod footer;
mod header;
mod image_preview;

pub use composer_form::ComposerForm;
pub use footer::Footer;
pub use header::Header;
pub use image_preview::ImagePreview;
