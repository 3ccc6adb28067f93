use crate::{
    device::{CounterReader, CounterSnapshot},
    error::{DlnotifyError, Result},
};
use std::process::Command;

pub struct MacOSReader;

impl Default for MacOSReader {
    fn default() -> Self {
        Self::new()
    }
}

impl MacOSReader {
    pub fn new() -> Self {
        Self
    }

    fn netstat_output(&self) -> Result<String> {
        let output = Command::new("netstat")
            .args(["-inb"])
            .output()
            .map_err(|e| DlnotifyError::Platform(format!("netstat failed: {e}")))?;

        if !output.status.success() {
            return Err(DlnotifyError::Platform(
                "netstat returned non-zero status".to_string(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Sums the Ibytes column of `netstat -inb` output.
    ///
    /// netstat lists one row per interface address; only the first row per
    /// interface carries the counters we want, so duplicates are skipped.
    fn parse_netstat(&self, content: &str, device: &str) -> Result<u64> {
        let mut total: u64 = 0;
        let mut matched = false;
        let mut seen: Vec<String> = Vec::new();

        for line in content.lines().skip(1) {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 7 {
                continue;
            }

            let iface_name = parts[0].trim_end_matches('*');
            if seen.iter().any(|s| s == iface_name) {
                continue;
            }

            let wanted = if device == "all" {
                !iface_name.starts_with("lo")
            } else {
                iface_name == device
            };
            if !wanted {
                continue;
            }

            // Column layout: Name Mtu Network Address Ipkts Ierrs Ibytes ...
            if let Ok(bytes_in) = parts[6].parse::<u64>() {
                total = total.saturating_add(bytes_in);
                matched = true;
                seen.push(iface_name.to_string());
            }
        }

        if matched {
            Ok(total)
        } else {
            Err(DlnotifyError::DeviceNotFound(device.to_string()))
        }
    }
}

impl CounterReader for MacOSReader {
    fn list_devices(&self) -> Result<Vec<String>> {
        let content = self.netstat_output()?;
        let mut devices = Vec::new();

        for line in content.lines().skip(1) {
            if let Some(name) = line.split_whitespace().next() {
                let name = name.trim_end_matches('*').to_string();
                if !name.is_empty() && !name.starts_with("lo") && !devices.contains(&name) {
                    devices.push(name);
                }
            }
        }

        Ok(devices)
    }

    fn read_total(&self, device: &str) -> Result<CounterSnapshot> {
        let content = self.netstat_output()?;
        let bytes = self.parse_netstat(&content, device)?;
        Ok(CounterSnapshot::new(bytes))
    }

    fn is_available(&self) -> bool {
        Command::new("netstat")
            .arg("-inb")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Name  Mtu   Network       Address            Ipkts Ierrs     Ibytes    Opkts Oerrs     Obytes  Coll
lo0   16384 <Link#1>                          100     0    1234567      100     0    1234567     0
en0   1500  <Link#4>      aa:bb:cc:dd:ee:ff  5000     0 9876543210     3000     0 1234567890     0
en0   1500  192.168.1     192.168.1.10       5000     0 9876543210     3000     0 1234567890     0
";

    #[test]
    fn counts_each_interface_once() {
        let reader = MacOSReader::new();
        let bytes = reader.parse_netstat(SAMPLE, "en0").unwrap();
        assert_eq!(bytes, 9876543210);
    }

    #[test]
    fn aggregate_skips_loopback() {
        let reader = MacOSReader::new();
        let bytes = reader.parse_netstat(SAMPLE, "all").unwrap();
        assert_eq!(bytes, 9876543210);
    }
}
