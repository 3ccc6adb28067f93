use crate::{detect::Status, rate::RateSample};
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;

/// Optional per-tick log of sampled rate and detection status.
/// A path of "-" logs to stdout instead of a file.
pub struct RateLogger {
    file: Option<std::fs::File>,
    use_stdout: bool,
}

impl RateLogger {
    pub fn new(path: Option<String>) -> anyhow::Result<Self> {
        let (file, use_stdout) = if let Some(path) = path {
            if path == "-" {
                (None, true)
            } else {
                let f = OpenOptions::new().create(true).append(true).open(path)?;
                (Some(f), false)
            }
        } else {
            (None, false)
        };

        let mut logger = Self { file, use_stdout };

        if let Some(ref f) = logger.file {
            if f.metadata()?.len() == 0 {
                logger.write_header()?;
            }
        } else if logger.use_stdout {
            logger.write_header()?;
        }

        Ok(logger)
    }

    fn write_header(&mut self) -> anyhow::Result<()> {
        self.write_line("Date Time SpeedKBs Status AutoDetect\n")
    }

    pub fn log_tick(
        &mut self,
        rate: RateSample,
        status: Status,
        auto_detect: bool,
    ) -> anyhow::Result<()> {
        let now = Local::now();
        let line = format!(
            "{} {} {:.1} {} {}\n",
            now.format("%Y-%m-%d"),
            now.format("%H:%M:%S"),
            rate.kb_per_sec(),
            status.as_str(),
            auto_detect
        );
        self.write_line(&line)
    }

    fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        match (&mut self.file, self.use_stdout) {
            (Some(f), _) => {
                f.write_all(line.as_bytes())?;
                f.flush()?;
            }
            (None, true) => print!("{line}"),
            _ => {} // logging disabled
        }
        Ok(())
    }
}
