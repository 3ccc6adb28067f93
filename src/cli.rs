use clap::Parser;

#[derive(Parser, Default)]
#[command(name = "dlnotify", about = "A terminal download monitor that notifies you when a download finishes")]
#[command(version, long_about = None)]
pub struct Args {
    /// Network device to monitor (default: aggregate of all interfaces)
    pub device: Option<String>,

    /// List available network interfaces and exit
    #[arg(short, long)]
    pub list: bool,

    /// Refresh rate in seconds
    #[arg(short = 'r', long = "refresh", default_value = "3")]
    pub refresh_interval: u64,

    /// Download threshold in bytes per second
    #[arg(short = 't', long = "threshold", default_value = "300000")]
    pub threshold: u64,

    /// Fire the completion notification once and exit (bypasses monitoring)
    #[arg(short = 'n', long = "notify")]
    pub notify: bool,

    /// Log each tick's speed and status to a file ("-" for stdout)
    #[arg(short = 'f', long = "file")]
    pub log_file: Option<String>,

    /// Save the effective settings to ~/.dlnotify and exit
    #[arg(long = "save-config")]
    pub save_config: bool,
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if self.refresh_interval == 0 {
            return Err("refresh interval must be at least 1 second".to_string());
        }
        if self.threshold == 0 {
            return Err("download threshold must be positive".to_string());
        }
        if let Some(device) = &self.device {
            if device.is_empty() || device.len() > 16 {
                return Err(format!("invalid device name: {device:?}"));
            }
            if device.contains('/') || device.contains('\\') || device.contains("..") {
                return Err(format!("invalid characters in device name: {device:?}"));
            }
        }
        Ok(())
    }
}
