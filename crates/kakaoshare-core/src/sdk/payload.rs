//! Link payloads sent through the share capability.
//!
//! Serializes to the KakaoTalk message template JSON:
//!
//! ```text
//! {"object_type":"text","text":"hello","link":{"web_url":"","mobile_web_url":""}}
//! {"object_type":"feed","content":{"title":..,"description":..,"image_url":..,"link":{..}},"link":{..}}
//! ```

use serde::{Deserialize, Serialize};

/// Title used for image (feed) messages
pub const FEED_TITLE: &str = "공유 메시지";

/// Link target attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub web_url: String,
    pub mobile_web_url: String,
}

impl Link {
    /// Same URL for desktop and mobile.
    pub fn to(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            web_url: url.clone(),
            mobile_web_url: url,
        }
    }
}

/// Body of a feed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedContent {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link: Link,
}

/// Message handed to `SdkCapability::send_link`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "object_type", rename_all = "snake_case")]
pub enum LinkPayload {
    /// Plain text message
    Text { text: String, link: Link },
    /// Image card with the message as description
    Feed { content: FeedContent, link: Link },
}

impl LinkPayload {
    /// Build the payload for a draft's text and an optional uploaded image.
    pub fn for_message(text: &str, image_url: Option<&str>) -> Self {
        match image_url.filter(|url| !url.is_empty()) {
            Some(url) => LinkPayload::Feed {
                content: FeedContent {
                    title: FEED_TITLE.to_string(),
                    description: text.to_string(),
                    image_url: url.to_string(),
                    link: Link::to(url),
                },
                link: Link::to(url),
            },
            None => LinkPayload::Text {
                text: text.to_string(),
                link: Link::default(),
            },
        }
    }

    pub fn object_type(&self) -> &'static str {
        match self {
            LinkPayload::Text { .. } => "text",
            LinkPayload::Feed { .. } => "feed",
        }
    }

    pub fn link(&self) -> &Link {
        match self {
            LinkPayload::Text { link, .. } | LinkPayload::Feed { link, .. } => link,
        }
    }

    /// Template JSON as the send endpoint expects it.
    pub fn to_template_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
