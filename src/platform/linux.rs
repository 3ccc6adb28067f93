use crate::{
    device::{CounterReader, CounterSnapshot},
    error::{DlnotifyError, Result},
};
use std::fs;

pub struct LinuxReader;

impl Default for LinuxReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LinuxReader {
    pub fn new() -> Self {
        Self
    }

    /// Sums the received-byte column of /proc/net/dev for the selected
    /// device, or for every physical interface when `device` is "all".
    fn parse_proc_net_dev(&self, content: &str, device: &str) -> Result<u64> {
        let mut total: u64 = 0;
        let mut matched = false;

        for line in content.lines().skip(2) {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let iface_name = parts[0].trim_end_matches(':');
            let wanted = if device == "all" {
                !is_virtual_interface(iface_name)
            } else {
                iface_name == device
            };
            if !wanted {
                continue;
            }

            let bytes_in: u64 = parts
                .get(1)
                .ok_or_else(|| DlnotifyError::Parse(format!("truncated line for {iface_name}")))?
                .parse()
                .map_err(|_| DlnotifyError::Parse(format!("bad byte count for {iface_name}")))?;

            total = total.saturating_add(bytes_in);
            matched = true;

            if device != "all" {
                break;
            }
        }

        if matched {
            Ok(total)
        } else {
            Err(DlnotifyError::DeviceNotFound(device.to_string()))
        }
    }
}

fn is_virtual_interface(name: &str) -> bool {
    name.starts_with("lo")
        || name.starts_with("docker")
        || name.starts_with("veth")
        || name.starts_with("br-")
}

impl CounterReader for LinuxReader {
    fn list_devices(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string("/proc/net/dev")?;
        let mut devices = Vec::new();

        for line in content.lines().skip(2) {
            if let Some(device_part) = line.split(':').next() {
                let device_name = device_part.trim().to_string();
                if !device_name.is_empty() && !is_virtual_interface(&device_name) {
                    devices.push(device_name);
                }
            }
        }

        Ok(devices)
    }

    fn read_total(&self, device: &str) -> Result<CounterSnapshot> {
        let content = fs::read_to_string("/proc/net/dev")?;
        let bytes = self.parse_proc_net_dev(&content, device)?;
        Ok(CounterSnapshot::new(bytes))
    }

    fn is_available(&self) -> bool {
        std::path::Path::new("/proc/net/dev").exists()
    }
}
