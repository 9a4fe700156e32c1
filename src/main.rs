#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use designcenter_core::{GalleryConfig, DEFAULT_ASSET_BASE, DEFAULT_PAGE_SIZE};
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Global gallery config, set from command line
static GALLERY_CONFIG: OnceLock<GalleryConfig> = OnceLock::new();

/// Get the gallery config (set from command line or default)
pub fn get_gallery_config() -> GalleryConfig {
    GALLERY_CONFIG.get().cloned().unwrap_or_default()
}

/// Design Center - Project Gallery
#[derive(Parser, Debug)]
#[command(name = "designcenter-desktop")]
#[command(about = "Design Center - interior design project gallery")]
struct Args {
    /// Base URL of the remote asset store (must end with '/')
    #[arg(long, default_value = DEFAULT_ASSET_BASE)]
    asset_base: String,

    /// Category cards per carousel page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match GalleryConfig::new(args.asset_base, args.page_size) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(2);
        }
    };

    tracing::info!(
        "Starting gallery with assets under {} ({} cards per page)",
        config.asset_base,
        config.page_size
    );

    // Store config globally
    let _ = GALLERY_CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Design Center")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
