#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::sync::{Arc, OnceLock};

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use kakaoshare_core::{DryRunSdk, KakaoApi, SdkCapability, ShareConfig};
use tracing_subscriber::EnvFilter;

use crate::context::ShareContext;

/// Global share setup, built from command line and environment
static SHARE: OnceLock<ShareContext> = OnceLock::new();

/// Get the share setup (set in `main` before launch)
pub fn get_share_context() -> Option<ShareContext> {
    SHARE.get().cloned()
}

/// KakaoShare - send a message (and an image) through KakaoTalk
#[derive(Parser, Debug)]
#[command(name = "kakaoshare-desktop")]
#[command(about = "KakaoShare - compose and share a KakaoTalk message")]
struct Args {
    /// Kakao app key (overrides KAKAO_APP_KEY)
    #[arg(long, env = "KAKAO_APP_KEY", hide_env_values = true)]
    app_key: Option<String>,

    /// User access token for sending (overrides KAKAO_ACCESS_TOKEN)
    #[arg(long, env = "KAKAO_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// REST API base URL (overrides KAKAO_API_BASE)
    #[arg(long)]
    api_base: Option<String>,

    /// Log messages instead of sending them
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = ShareConfig::from_env()
        .unwrap_or_else(|e| {
            tracing::error!("Ignoring environment configuration: {}", e);
            ShareConfig::default()
        })
        .with_app_key(args.app_key)
        .with_access_token(args.access_token)
        .with_api_base(args.api_base);

    let sdk: Arc<dyn SdkCapability> = if args.dry_run {
        tracing::info!("Dry run: messages will be logged, not sent");
        Arc::new(DryRunSdk::new())
    } else {
        Arc::new(KakaoApi::new(&config)?)
    };

    tracing::info!(api_base = %config.api_base, "Starting KakaoShare");
    let _ = SHARE.set(ShareContext::new(sdk, config));

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("카카오톡 웹")
            .with_inner_size(dioxus::desktop::LogicalSize::new(520.0, 760.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
