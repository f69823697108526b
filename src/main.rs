#![allow(non_snake_case)]

mod app;
mod catalog;
mod components;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use designkit_core::config::default_data_dir;
use designkit_core::KitConfig;
use dioxus::desktop::{Config, WindowBuilder};

/// Startup settings, set once from the command line
static STARTUP: OnceLock<Startup> = OnceLock::new();

#[derive(Clone, Debug)]
pub struct Startup {
    pub config: KitConfig,
    pub ephemeral: bool,
}

/// Startup settings (command line values or defaults)
pub fn startup() -> Startup {
    STARTUP.get().cloned().unwrap_or_else(|| Startup {
        config: KitConfig::default(),
        ephemeral: false,
    })
}

/// designkit desktop - component kit showcase
#[derive(Parser, Debug)]
#[command(name = "designkit-desktop")]
#[command(about = "designkit desktop - permission-aware component kit showcase")]
struct Args {
    /// Data directory for the preference store
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Keep preferences in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Simulated login delay in milliseconds
    #[arg(long, default_value_t = 300)]
    login_delay_ms: u64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    designkit_core::logging::init(args.verbose);

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let config = KitConfig::default()
        .with_data_dir(&data_dir)
        .with_login_delay(std::time::Duration::from_millis(args.login_delay_ms));

    tracing::info!(
        data_dir = %data_dir.display(),
        ephemeral = args.ephemeral,
        "starting designkit desktop"
    );

    let _ = STARTUP.set(Startup {
        config,
        ephemeral: args.ephemeral,
    });

    let window_width = 960.0;
    let window_height = 760.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("designkit")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
