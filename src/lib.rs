//! # dlnotify
//!
//! A terminal download monitor that notifies you when a download finishes.
//!
//! dlnotify samples the host's receive counter on a fixed interval, runs a
//! thresholded state machine with hysteresis over the computed rate, and
//! fires a desktop notification exactly once per completed download. A small
//! TUI shows status, current speed, and a rolling speed graph.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dlnotify::cli::Args;
//! use dlnotify::run;
//!
//! let args = Args {
//!     refresh_interval: 3,
//!     threshold: 300_000,
//!     ..Default::default()
//! };
//!
//! run(args).expect("Failed to run dlnotify");
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod detect;
pub mod device;
pub mod error;
pub mod history;
pub mod input;
pub mod logger;
pub mod notify;
pub mod platform;
pub mod rate;
pub mod render;

use anyhow::Result;
use cli::Args;
use crossterm::{execute, terminal::*};
use notify::Notifier;

/// Main entry point for the dlnotify application.
///
/// Dispatches simple commands (list interfaces, manual notify), then loads
/// configuration, establishes the counter baseline, and runs the monitor
/// loop in the alternate screen.
pub fn run(args: Args) -> Result<()> {
    args.validate().map_err(|e| anyhow::anyhow!(e))?;

    if args.list {
        return list_interfaces();
    }

    let mut notifier = notify::DesktopNotifier;

    // Manual trigger bypasses sampling and detection entirely.
    if args.notify {
        notifier.notify();
        println!("dlnotify: notification sent");
        return Ok(());
    }

    let mut config = config::Config::load()?;
    config.apply_args(&args);
    config.validate()?;

    if args.save_config {
        config.save()?;
        println!("dlnotify: configuration saved");
        return Ok(());
    }

    let reader = platform::create_reader()?;
    if !reader.is_available() {
        anyhow::bail!("No network counter source available on this system");
    }

    if config.device != "all" {
        let available = reader.list_devices()?;
        if !available.contains(&config.device) {
            anyhow::bail!(
                "Interface '{}' not found. Available interfaces: {}",
                config.device,
                available.join(", ")
            );
        }
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let result = app::run_monitor(reader.as_ref(), &mut notifier, &config, args.log_file);

    let _ = disable_raw_mode();
    let _ = execute!(stdout, LeaveAlternateScreen);

    result
}

fn list_interfaces() -> Result<()> {
    let reader = platform::create_reader()?;
    let interfaces = reader.list_devices()?;

    for interface in interfaces {
        println!("{interface}");
    }

    Ok(())
}
