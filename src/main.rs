use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use sealgen::{service, SealAssets};

#[derive(Parser)]
#[command(name = "sealgen")]
#[command(about = "Accessibility seal image generation service")]
#[command(version)]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8000")]
    listen: String,

    /// Path to the seal template image (RGBA PNG).
    #[arg(long, default_value = sealgen::assets::DEFAULT_TEMPLATE_PATH)]
    template: PathBuf,

    /// Path to the score typeface (TTF).
    #[arg(long, default_value = sealgen::assets::DEFAULT_FONT_PATH)]
    font: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // A missing or corrupt asset is a deployment error; fail before binding.
    let assets = SealAssets::load(&cli.template, &cli.font)?;
    tracing::info!(
        template = %cli.template.display(),
        width = assets.template.width(),
        height = assets.template.height(),
        "assets loaded"
    );

    let app = service::router(Arc::new(assets));
    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
