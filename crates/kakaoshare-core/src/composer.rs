//! Composer - draft state, validation and submission
//!
//! [`ComposerState`] holds everything the form shows and changes only through
//! the transition methods below. A submission is split in three so the async
//! part never holds the state:
//!
//! ```text
//! begin_submit()        Idle -> Submitting, snapshot of the draft
//! Submission::run(sdk)  upload (if any) then send, awaited in order
//! finish_submit(result) Submitting -> Idle, reset on success
//! ```
//!
//! [`Composer`] bundles the state with an injected SDK for callers that can
//! simply `await` the whole thing.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::draft::{Attachment, Draft, FileHandle};
use crate::error::{ComposerError, ComposerResult, ConfigError, SubmitError, ValidationError};
use crate::preview::{PreviewHandle, PreviewStore};
use crate::sdk::{InitOutcome, LinkPayload, SdkCapability};
use crate::validate;

/// Whether a submission is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// Snapshot of the draft taken when a submission starts.
#[derive(Debug, Clone)]
pub struct Submission {
    text: String,
    file: Option<FileHandle>,
}

impl Submission {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn file(&self) -> Option<&FileHandle> {
        self.file.as_ref()
    }

    /// Upload the attachment (if any), then send. Returns the payload that
    /// was sent.
    pub async fn run(&self, sdk: &dyn SdkCapability) -> Result<LinkPayload, SubmitError> {
        let image_url = match &self.file {
            Some(file) => Some(sdk.upload_image(file).await.map_err(SubmitError::upload)?),
            None => None,
        };

        let payload = LinkPayload::for_message(&self.text, image_url.as_deref());
        sdk.send_link(&payload).await.map_err(SubmitError::send)?;
        Ok(payload)
    }
}

/// Form state for one composer.
pub struct ComposerState {
    draft: Draft,
    error: Option<ComposerError>,
    submission: SubmissionState,
    config_error: Option<ConfigError>,
    previews: Arc<dyn PreviewStore>,
}

impl ComposerState {
    /// Empty draft, no error, idle.
    pub fn new(previews: Arc<dyn PreviewStore>) -> Self {
        Self {
            draft: Draft::new(),
            error: None,
            submission: SubmissionState::Idle,
            config_error: None,
            previews,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn error(&self) -> Option<&ComposerError> {
        self.error.as_ref()
    }

    /// The one message the user sees, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    /// False once configuration has failed.
    pub fn is_configured(&self) -> bool {
        self.config_error.is_none()
    }

    /// Whether the submit action should be enabled.
    pub fn can_submit(&self) -> bool {
        self.is_configured() && !self.is_submitting()
    }

    /// Initialize the SDK with the configured app key.
    ///
    /// A missing or rejected key is reported in the error slot and disables
    /// submission. An already initialized SDK is left alone.
    pub fn activate(
        &mut self,
        sdk: &dyn SdkCapability,
        app_key: Option<&str>,
    ) -> Result<InitOutcome, ConfigError> {
        let Some(key) = app_key.map(str::trim).filter(|k| !k.is_empty()) else {
            warn!("no messaging app key configured, submission disabled");
            return Err(self.fail_config(ConfigError::MissingAppKey));
        };

        match sdk.initialize(key) {
            Ok(outcome) => {
                debug!(?outcome, "SDK activation");
                self.config_error = None;
                if matches!(self.error, Some(ComposerError::Config(_))) {
                    self.error = None;
                }
                Ok(outcome)
            }
            Err(e) => {
                warn!(error = %e, "SDK rejected app key, submission disabled");
                Err(self.fail_config(ConfigError::InvalidAppKey(e.to_string())))
            }
        }
    }

    fn fail_config(&mut self, err: ConfigError) -> ConfigError {
        self.config_error = Some(err.clone());
        self.error = Some(err.clone().into());
        err
    }

    fn report<T>(&mut self, err: impl Into<ComposerError>) -> ComposerResult<T> {
        let err = err.into();
        debug!(error = %err, "input rejected");
        self.error = Some(err.clone());
        Err(err)
    }

    /// Clear the error slot. A configuration failure stays visible.
    fn clear_error(&mut self) {
        self.error = self.config_error.clone().map(Into::into);
    }

    fn ensure_idle(&self) -> ComposerResult<()> {
        if self.is_submitting() {
            return Err(ComposerError::Busy);
        }
        Ok(())
    }

    /// Replace the text if it fits the current limit.
    ///
    /// Over-long text is rejected, not truncated; the stored text is kept.
    /// Text already over the limit (an image attached after it was typed) can
    /// still be edited as long as the edit does not make it longer.
    pub fn set_text(&mut self, text: impl Into<String>) -> ComposerResult<()> {
        self.ensure_idle()?;
        let text = text.into();
        if let Err(e) = validate::validate_text(&text, self.draft.has_file()) {
            if validate::char_count(&text) > validate::char_count(&self.draft.text) {
                return self.report(e);
            }
        }
        self.draft.text = text;
        self.clear_error();
        Ok(())
    }

    /// Attach an image, replacing any current attachment.
    ///
    /// Non-images and files over 5 MB are rejected and leave the draft as it
    /// was.
    pub fn set_file(&mut self, file: FileHandle) -> ComposerResult<()> {
        self.ensure_idle()?;
        if let Err(e) = validate::validate_file(&file) {
            return self.report(e);
        }

        // old preview goes before the new one is allocated
        self.draft.detach();
        let preview = PreviewHandle::acquire(&self.previews, &file);
        debug!(file = %file.name(), size = file.size(), "file attached");
        self.draft.attach(Attachment::new(file, preview));
        self.clear_error();
        Ok(())
    }

    /// Report a file that could not even be loaded.
    pub fn reject_file(&mut self, err: ValidationError) -> ComposerResult<()> {
        self.ensure_idle()?;
        self.report(err)
    }

    /// Detach the image, keeping the text.
    pub fn clear_file(&mut self) -> ComposerResult<()> {
        self.ensure_idle()?;
        self.draft.detach();
        self.clear_error();
        Ok(())
    }

    /// Empty the draft and clear the error (a configuration failure stays).
    /// Idempotent.
    pub fn reset(&mut self) -> ComposerResult<()> {
        self.ensure_idle()?;
        self.draft.clear();
        self.clear_error();
        Ok(())
    }

    /// Start a submission.
    ///
    /// Refused while another submission is in flight, when configuration
    /// failed, when the text is blank, or when it is over the current limit.
    pub fn begin_submit(&mut self) -> ComposerResult<Submission> {
        self.ensure_idle()?;

        if let Some(err) = self.config_error.clone() {
            return self.report(err);
        }
        if self.draft.is_blank() {
            return self.report(ValidationError::MessageRequired);
        }
        if let Err(e) = validate::validate_text(&self.draft.text, self.draft.has_file()) {
            return self.report(e);
        }

        self.submission = SubmissionState::Submitting;
        self.error = None;
        debug!(has_file = self.draft.has_file(), "submission started");

        Ok(Submission {
            text: self.draft.text.clone(),
            file: self.draft.file().cloned(),
        })
    }

    /// Finish a submission started by `begin_submit`.
    ///
    /// Success resets the draft; failure keeps it and shows a retry message.
    pub fn finish_submit(
        &mut self,
        outcome: Result<LinkPayload, SubmitError>,
    ) -> ComposerResult<LinkPayload> {
        self.submission = SubmissionState::Idle;
        match outcome {
            Ok(payload) => {
                info!(object_type = payload.object_type(), "message sent");
                self.draft.clear();
                self.clear_error();
                Ok(payload)
            }
            Err(e) => {
                warn!(stage = ?e.stage, cause = %e.source, "submission failed");
                self.error = Some(e.clone().into());
                Err(e.into())
            }
        }
    }
}

impl std::fmt::Debug for ComposerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposerState")
            .field("draft", &self.draft)
            .field("error", &self.error)
            .field("submission", &self.submission)
            .field("config_error", &self.config_error)
            .finish()
    }
}

/// Composer state plus the SDK it submits through.
pub struct Composer {
    state: ComposerState,
    sdk: Arc<dyn SdkCapability>,
}

impl Composer {
    pub fn new(sdk: Arc<dyn SdkCapability>, previews: Arc<dyn PreviewStore>) -> Self {
        Self {
            state: ComposerState::new(previews),
            sdk,
        }
    }

    pub fn state(&self) -> &ComposerState {
        &self.state
    }

    pub fn sdk(&self) -> &Arc<dyn SdkCapability> {
        &self.sdk
    }

    pub fn activate(&mut self, app_key: Option<&str>) -> Result<InitOutcome, ConfigError> {
        self.state.activate(self.sdk.as_ref(), app_key)
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> ComposerResult<()> {
        self.state.set_text(text)
    }

    pub fn set_file(&mut self, file: FileHandle) -> ComposerResult<()> {
        self.state.set_file(file)
    }

    pub fn clear_file(&mut self) -> ComposerResult<()> {
        self.state.clear_file()
    }

    pub fn reset(&mut self) -> ComposerResult<()> {
        self.state.reset()
    }

    /// Upload (if a file is attached) and send the draft.
    pub async fn submit(&mut self) -> ComposerResult<LinkPayload> {
        let submission = self.state.begin_submit()?;
        let outcome = submission.run(self.sdk.as_ref()).await;
        self.state.finish_submit(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::DataUriPreviews;
    use crate::sdk::DryRunSdk;

    fn state() -> ComposerState {
        ComposerState::new(Arc::new(DataUriPreviews::new()))
    }

    fn png(name: &str) -> FileHandle {
        FileHandle::new(name, "image/png", vec![1u8, 2, 3])
    }

    #[test]
    fn test_initial_state() {
        let s = state();
        assert!(s.draft().is_empty());
        assert!(s.error().is_none());
        assert_eq!(s.submission(), SubmissionState::Idle);
        assert!(s.can_submit());
    }

    #[test]
    fn test_set_text_accepts_and_clears_error() {
        let mut s = state();
        assert!(s.set_text("a".repeat(201)).is_err());
        assert!(s.error().is_some());

        s.set_text("hello").unwrap();
        assert_eq!(s.draft().text(), "hello");
        assert!(s.error().is_none());
    }

    #[test]
    fn test_overlong_paste_is_reported_not_truncated() {
        let mut s = state();
        s.set_text("keep").unwrap();

        let err = s.set_text("가".repeat(250)).unwrap_err();
        assert_eq!(s.error_message(), Some(err.to_string()));
        assert_eq!(s.error_message().as_deref(), Some("message exceeds 200 characters"));
        assert_eq!(s.draft().text(), "keep");
    }

    #[test]
    fn test_limit_drops_to_100_with_file() {
        let mut s = state();
        s.set_file(png("a.png")).unwrap();

        let err = s.set_text("a".repeat(101)).unwrap_err();
        assert_eq!(err.to_string(), "message exceeds 100 characters");
        assert_eq!(s.draft().text(), "");
        assert_eq!(s.draft().counter(), "0/100");
    }

    #[test]
    fn test_rejected_file_leaves_draft() {
        let mut s = state();
        s.set_file(png("keep.png")).unwrap();
        let before = s.draft().preview_url().map(str::to_string);

        let err = s
            .set_file(FileHandle::new("doc.pdf", "application/pdf", vec![1u8]))
            .unwrap_err();
        assert!(matches!(
            err,
            ComposerError::Validation(ValidationError::NotAnImage { .. })
        ));
        assert_eq!(s.draft().file().map(FileHandle::name), Some("keep.png"));
        assert_eq!(s.draft().preview_url().map(str::to_string), before);
    }

    #[test]
    fn test_clear_file_keeps_text() {
        let mut s = state();
        s.set_text("hi").unwrap();
        s.set_file(png("a.png")).unwrap();
        s.clear_file().unwrap();
        assert_eq!(s.draft().text(), "hi");
        assert!(!s.draft().has_file());
        assert!(s.draft().preview_url().is_none());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut s = state();
        s.set_text("hi").unwrap();
        s.set_file(png("a.png")).unwrap();
        s.reset().unwrap();
        s.reset().unwrap();
        assert!(s.draft().is_empty());
        assert!(s.error().is_none());
    }

    #[test]
    fn test_blank_submit_is_refused() {
        let mut s = state();
        s.set_text("   \n\t").unwrap();
        let err = s.begin_submit().unwrap_err();
        assert_eq!(err.to_string(), "message required");
        assert_eq!(s.submission(), SubmissionState::Idle);
    }

    #[test]
    fn test_mutations_refused_while_submitting() {
        let mut s = state();
        s.set_text("hi").unwrap();
        let _submission = s.begin_submit().unwrap();

        assert_eq!(s.set_text("other"), Err(ComposerError::Busy));
        assert_eq!(s.set_file(png("a.png")), Err(ComposerError::Busy));
        assert_eq!(s.reset(), Err(ComposerError::Busy));
        assert!(matches!(s.begin_submit(), Err(ComposerError::Busy)));
        // busy is not shown to the user
        assert!(s.error().is_none());
        assert_eq!(s.draft().text(), "hi");
    }

    #[test]
    fn test_missing_app_key_disables_submit() {
        let mut s = state();
        let sdk = DryRunSdk::new();
        assert_eq!(s.activate(&sdk, None), Err(ConfigError::MissingAppKey));
        assert!(!s.can_submit());
        assert!(!sdk.is_initialized());

        s.set_text("hello").unwrap();
        let err = s.begin_submit().unwrap_err();
        assert_eq!(err, ComposerError::Config(ConfigError::MissingAppKey));
        assert_eq!(s.submission(), SubmissionState::Idle);
    }

    #[test]
    fn test_config_error_survives_edits() {
        let mut s = state();
        let sdk = DryRunSdk::new();
        let _ = s.activate(&sdk, None);
        let expected = Some(ComposerError::Config(ConfigError::MissingAppKey));

        s.set_text("h").unwrap();
        assert_eq!(s.error(), expected.as_ref());
        s.set_file(png("a.png")).unwrap();
        assert_eq!(s.error(), expected.as_ref());
        s.clear_file().unwrap();
        assert_eq!(s.error(), expected.as_ref());
        s.reset().unwrap();
        assert_eq!(s.error(), expected.as_ref());
        assert!(!s.can_submit());
    }

    #[test]
    fn test_long_text_with_file_can_shrink_but_not_submit() {
        let mut s = state();
        s.set_text("a".repeat(150)).unwrap();
        s.set_file(png("a.png")).unwrap();
        assert_eq!(s.draft().counter(), "150/100");

        let err = s.begin_submit().unwrap_err();
        assert_eq!(err.to_string(), "message exceeds 100 characters");
        assert_eq!(s.submission(), SubmissionState::Idle);

        // shrinking is allowed, growing is not
        s.set_text("a".repeat(149)).unwrap();
        assert!(s.set_text("a".repeat(151)).is_err());
        assert_eq!(s.draft().text().len(), 149);

        s.set_text("a".repeat(100)).unwrap();
        assert!(s.begin_submit().is_ok());
    }

    #[test]
    fn test_activate_twice_is_silent() {
        let mut s = state();
        let sdk = DryRunSdk::new();
        assert_eq!(s.activate(&sdk, Some("key")), Ok(InitOutcome::Initialized));
        assert_eq!(
            s.activate(&sdk, Some("key")),
            Ok(InitOutcome::AlreadyInitialized)
        );
        assert!(s.error().is_none());
        assert!(s.can_submit());
    }

    #[tokio::test]
    async fn test_composer_submit_with_dry_run() {
        let sdk = Arc::new(DryRunSdk::new());
        let mut composer = Composer::new(sdk.clone(), Arc::new(DataUriPreviews::new()));
        composer.activate(Some("key")).unwrap();
        composer.set_text("hello").unwrap();

        let payload = composer.submit().await.unwrap();
        assert_eq!(payload, LinkPayload::for_message("hello", None));
        assert_eq!(sdk.sent().len(), 1);
        assert!(composer.state().draft().is_empty());
    }
}
