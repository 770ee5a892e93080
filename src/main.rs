#![allow(non_snake_case)]

mod app;

use std::sync::OnceLock;

use anyhow::{anyhow, Context, Result};
use biglight_core::{Brand, TouchPolicy};
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Showcase settings, set once from the command line
static SHOWCASE: OnceLock<ShowcaseConfig> = OnceLock::new();

#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseConfig {
    pub brand: Brand,
    pub touch_policy: TouchPolicy,
    pub button_label: String,
    /// Heading of the login form; `None` keeps the default
    pub title: Option<String>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            brand: Brand::default(),
            touch_policy: TouchPolicy::default(),
            button_label: "Log in".to_string(),
            title: None,
        }
    }
}

/// Get the showcase settings (set from command line or default)
pub fn showcase_config() -> ShowcaseConfig {
    SHOWCASE.get().cloned().unwrap_or_default()
}

/// Biglight - multi-brand login drawer showcase
#[derive(Parser, Debug)]
#[command(name = "biglight-showcase")]
#[command(about = "Mounts the Biglight login drawer for one brand")]
struct Args {
    /// Brand to render (booker, venus)
    #[arg(short, long, default_value = "booker")]
    brand: Brand,

    /// When the email field counts as touched (any-blur, non-empty-blur)
    #[arg(short, long, default_value = "any-blur")]
    touch_policy: TouchPolicy,

    /// Label of the button that opens the drawer
    #[arg(long, default_value = "Log in")]
    button_label: String,

    /// Heading of the login form inside the drawer
    #[arg(long)]
    title: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info,biglight_core=debug,biglight_ui=debug")]
    log_level: String,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1024.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&args.log_level)
            .with_context(|| format!("invalid --log-level '{}'", args.log_level))?,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    SHOWCASE
        .set(ShowcaseConfig {
            brand: args.brand,
            touch_policy: args.touch_policy,
            button_label: args.button_label.clone(),
            title: args.title.clone(),
        })
        .map_err(|_| anyhow!("showcase config already set"))?;

    tracing::info!(
        brand = %args.brand,
        touch_policy = %args.touch_policy,
        "Starting Biglight showcase"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(format!("Biglight - {}", args.brand))
            .with_inner_size(LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
