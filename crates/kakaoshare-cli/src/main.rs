//! KakaoShare CLI
//!
//! Thin wrapper around the kakaoshare-core composer for command-line usage.
//! Input goes through the same validation as the desktop form.
//!
//! ## Usage
//!
//! ```bash
//! # Send a text message
//! kakaoshare send "hello"
//!
//! # Send an image with a caption (caption limited to 100 characters)
//! kakaoshare send "look at this" --image cat.png
//!
//! # Print the payload instead of sending it
//! kakaoshare --dry-run --app-key test send "hello"
//!
//! # Check whether a file can be attached
//! kakaoshare check cat.png
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use kakaoshare_core::{
    validate, Composer, DataUriPreviews, DryRunSdk, FileHandle, KakaoApi, SdkCapability,
    ShareConfig, MAX_FILE_SIZE,
};

/// KakaoShare - send a KakaoTalk message
#[derive(Parser)]
#[command(name = "kakaoshare")]
#[command(version = "0.1.0")]
#[command(about = "KakaoShare - send a KakaoTalk message with an optional image")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Kakao app key (overrides KAKAO_APP_KEY)
    #[arg(long, global = true)]
    app_key: Option<String>,

    /// User access token for sending (overrides KAKAO_ACCESS_TOKEN)
    #[arg(long, global = true)]
    access_token: Option<String>,

    /// REST API base URL (overrides KAKAO_API_BASE)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Print the payload instead of sending it
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a message
    Send {
        /// Message text (200 characters, 100 with an image)
        text: String,

        /// Image to attach
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Check whether a file can be attached
    Check {
        /// Image file
        path: PathBuf,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load_config(cli: &Cli) -> Result<ShareConfig> {
    Ok(ShareConfig::from_env()?
        .with_app_key(cli.app_key.clone())
        .with_access_token(cli.access_token.clone())
        .with_api_base(cli.api_base.clone()))
}

async fn send(cli: &Cli, text: &str, image: Option<&Path>) -> Result<()> {
    let config = load_config(cli)?;

    let dry_run = cli.dry_run.then(|| Arc::new(DryRunSdk::new()));
    let sdk: Arc<dyn SdkCapability> = match &dry_run {
        Some(sdk) => sdk.clone(),
        None => Arc::new(KakaoApi::new(&config)?),
    };

    let mut composer = Composer::new(sdk, Arc::new(DataUriPreviews::new()));
    composer.activate(config.app_key.as_deref())?;

    // Attach first so the 100 character limit applies to the text
    if let Some(path) = image {
        composer.set_file(FileHandle::from_path(path)?)?;
    }
    composer.set_text(text)?;

    let payload = composer.submit().await?;

    if let Some(sdk) = dry_run {
        for sent in sdk.sent() {
            println!("{}", sent.to_template_json()?);
        }
    }
    println!("Sent {} message.", payload.object_type());
    Ok(())
}

fn check(path: &Path) -> Result<()> {
    let file = FileHandle::from_path(path)?;

    println!("File: {}", file.name());
    println!("  Type: {}", file.mime());
    println!("  Size: {} bytes (limit {})", file.size(), MAX_FILE_SIZE);

    validate::validate_file(&file)?;
    println!("OK: can be attached.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match &cli.command {
        Commands::Send { text, image } => send(&cli, text, image.as_deref()).await?,
        Commands::Check { path } => check(path)?,
    }

    Ok(())
}
