//! Share context provider for KakaoShare.
//!
//! Carries the injected SDK capability and configuration to the components.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| crate::get_share_context().unwrap_or_else(ShareContext::offline));
//!
//! // In child components
//! let share = use_share();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use kakaoshare_core::{DryRunSdk, SdkCapability, ShareConfig};

/// SDK and configuration shared by the window.
#[derive(Clone)]
pub struct ShareContext {
    pub sdk: Arc<dyn SdkCapability>,
    pub config: Arc<ShareConfig>,
}

impl ShareContext {
    pub fn new(sdk: Arc<dyn SdkCapability>, config: ShareConfig) -> Self {
        Self {
            sdk,
            config: Arc::new(config),
        }
    }

    /// Dry-run SDK without an app key. Used if `main` did not set one up,
    /// so the composer shows a configuration error instead of panicking.
    pub fn offline() -> Self {
        Self::new(Arc::new(DryRunSdk::new()), ShareConfig::default())
    }

    pub fn app_key(&self) -> Option<&str> {
        self.config.app_key.as_deref()
    }
}

/// Hook to access the share context.
pub fn use_share() -> ShareContext {
    use_context::<ShareContext>()
}
