//! KakaoTalk REST adapter.
//!
//! - upload: `POST /v2/api/talk/message/image/upload` (`KakaoAK` app key, multipart `file`)
//! - send:   `POST /v2/api/talk/memo/default/send` (bearer user token, form `template_object`)

use std::sync::OnceLock;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::{InitOutcome, LinkPayload, SdkCapability};
use crate::config::ShareConfig;
use crate::draft::FileHandle;
use crate::error::SdkError;

const UPLOAD_PATH: &str = "/v2/api/talk/message/image/upload";
const SEND_PATH: &str = "/v2/api/talk/memo/default/send";
const ERROR_BODY_CHARS: usize = 200;

/// Image upload response.
///
/// Only `infos.original.url` is used; every other field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub infos: Option<UploadInfos>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadInfos {
    #[serde(default)]
    pub original: Option<UploadedImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadedImage {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub length: Option<u64>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl UploadResponse {
    /// Hosted image URL, if the response carries a non-empty one.
    pub fn image_url(&self) -> Option<&str> {
        self.infos
            .as_ref()?
            .original
            .as_ref()?
            .url
            .as_deref()
            .filter(|url| !url.is_empty())
    }

    /// Parse a raw response body into the hosted image URL.
    pub fn parse_url(body: &str) -> Result<String, SdkError> {
        let parsed: UploadResponse = serde_json::from_str(body)?;
        parsed
            .image_url()
            .map(str::to_string)
            .ok_or(SdkError::MalformedUploadResponse)
    }
}

/// KakaoTalk REST API client.
#[derive(Debug)]
pub struct KakaoApi {
    http: Client,
    api_base: String,
    access_token: Option<String>,
    app_key: OnceLock<String>,
}

impl KakaoApi {
    /// Create a client from configuration. The app key is not recorded until
    /// `initialize` is called.
    pub fn new(config: &ShareConfig) -> Result<Self, SdkError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            api_base: config.api_base.clone(),
            access_token: config.access_token.clone(),
            app_key: OnceLock::new(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn app_key(&self) -> Result<&str, SdkError> {
        self.app_key
            .get()
            .map(String::as_str)
            .ok_or(SdkError::NotInitialized)
    }

    /// Turn a non-2xx response into an error built by `make`.
    async fn check_status(
        response: Response,
        make: fn(String) -> SdkError,
    ) -> Result<Response, SdkError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(make(format!(
            "Kakao API error {}: {}",
            status,
            body.chars().take(ERROR_BODY_CHARS).collect::<String>()
        )))
    }
}

fn validate_app_key(key: &str) -> Result<(), SdkError> {
    if key.trim().is_empty() {
        return Err(SdkError::InvalidAppKey("key is blank".to_string()));
    }
    if key.chars().any(char::is_whitespace) {
        return Err(SdkError::InvalidAppKey("key contains whitespace".to_string()));
    }
    Ok(())
}

#[async_trait]
impl SdkCapability for KakaoApi {
    fn initialize(&self, app_key: &str) -> Result<InitOutcome, SdkError> {
        if let Some(existing) = self.app_key.get() {
            if existing != app_key {
                warn!("SDK already initialized with a different app key; keeping the first");
            }
            return Ok(InitOutcome::AlreadyInitialized);
        }

        validate_app_key(app_key)?;
        match self.app_key.set(app_key.to_string()) {
            Ok(()) => {
                info!(api_base = %self.api_base, "Kakao SDK initialized");
                Ok(InitOutcome::Initialized)
            }
            // lost a race with another initialize
            Err(_) => Ok(InitOutcome::AlreadyInitialized),
        }
    }

    fn is_initialized(&self) -> bool {
        self.app_key.get().is_some()
    }

    async fn upload_image(&self, file: &FileHandle) -> Result<String, SdkError> {
        let app_key = self.app_key()?;

        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.name().to_string())
            .mime_str(file.mime())?;
        let form = Form::new().part("file", part);

        debug!(file = %file.name(), size = file.size(), "uploading image");
        let response = self
            .http
            .post(self.url(UPLOAD_PATH))
            .header("Authorization", format!("KakaoAK {}", app_key))
            .multipart(form)
            .send()
            .await?;

        let response = Self::check_status(response, SdkError::Upload).await?;
        let body = response.text().await?;
        let url = UploadResponse::parse_url(&body)?;
        debug!(%url, "image uploaded");
        Ok(url)
    }

    async fn send_link(&self, payload: &LinkPayload) -> Result<(), SdkError> {
        self.app_key()?;
        let token = self.access_token.as_deref().ok_or_else(|| {
            SdkError::Send("no access token configured (set KAKAO_ACCESS_TOKEN)".to_string())
        })?;

        let template = payload.to_template_json()?;
        debug!(object_type = payload.object_type(), "sending link");

        let response = self
            .http
            .post(self.url(SEND_PATH))
            .bearer_auth(token)
            .form(&[("template_object", template)])
            .send()
            .await?;

        Self::check_status(response, SdkError::Send).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> KakaoApi {
        KakaoApi::new(&ShareConfig::default()).unwrap()
    }

    #[test]
    fn test_parse_upload_url() {
        let body = r#"{"infos":{"original":{"url":"http://k.kakaocdn.net/img.png","length":1024,"content_type":"image/png","width":10,"height":10}}}"#;
        assert_eq!(
            UploadResponse::parse_url(body).unwrap(),
            "http://k.kakaocdn.net/img.png"
        );
    }

    #[test]
    fn test_parse_upload_missing_url() {
        for body in [r#"{}"#, r#"{"infos":{}}"#, r#"{"infos":{"original":{"url":""}}}"#] {
            assert!(matches!(
                UploadResponse::parse_url(body),
                Err(SdkError::MalformedUploadResponse)
            ));
        }
    }

    #[test]
    fn test_parse_upload_not_json() {
        assert!(matches!(
            UploadResponse::parse_url("<html>"),
            Err(SdkError::Serialization(_))
        ));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let api = api();
        assert!(!api.is_initialized());
        assert_eq!(api.initialize("abc123").unwrap(), InitOutcome::Initialized);
        assert_eq!(
            api.initialize("abc123").unwrap(),
            InitOutcome::AlreadyInitialized
        );
        assert!(api.is_initialized());
    }

    #[test]
    fn test_initialize_rejects_bad_keys() {
        let api = api();
        assert!(matches!(api.initialize("  "), Err(SdkError::InvalidAppKey(_))));
        assert!(matches!(api.initialize("ab c"), Err(SdkError::InvalidAppKey(_))));
        assert!(!api.is_initialized());
    }

    #[tokio::test]
    async fn test_upload_before_initialize() {
        let api = api();
        let file = FileHandle::new("a.png", "image/png", vec![1u8]);
        assert!(matches!(
            api.upload_image(&file).await,
            Err(SdkError::NotInitialized)
        ));
    }

    #[tokio::test]
    async fn test_send_without_token() {
        let api = api();
        api.initialize("abc123").unwrap();
        let payload = LinkPayload::for_message("hello", None);
        assert!(matches!(api.send_link(&payload).await, Err(SdkError::Send(_))));
    }
}
