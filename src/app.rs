use crate::{
    config::Config,
    detect::{DownloadDetector, Transition},
    device::{CounterReader, CounterSnapshot},
    error::Result,
    history::HistoryBuffer,
    input::InputEvent,
    logger::RateLogger,
    notify::Notifier,
    rate::{self, RateSample},
    render::{self, DisplayPayload, Theme},
};
use anyhow::Context;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::{Duration, Instant};

/// Input poll interval. Must stay strictly shorter than the shortest
/// refresh interval (1 s) so keys are picked up between render ticks.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Outcome of one render tick's pipeline.
pub struct TickOutcome {
    pub rate: RateSample,
    pub transition: Transition,
}

/// State owned by the monitor loop: the previous counter snapshot, the
/// rolling history, the detector, and the auto-detect flag. One tick is
/// one sample -> history -> detect pass; drawing and notifying stay with
/// the caller.
pub struct Monitor {
    previous: CounterSnapshot,
    history: HistoryBuffer,
    detector: DownloadDetector,
    auto_detect: bool,
    interval_secs: f64,
}

impl Monitor {
    pub fn new(baseline: CounterSnapshot, config: &Config, history_capacity: usize) -> Self {
        Self {
            previous: baseline,
            history: HistoryBuffer::new(history_capacity),
            detector: DownloadDetector::new(config.threshold_bytes),
            auto_detect: true,
            interval_secs: config.refresh_interval as f64,
        }
    }

    pub fn auto_detect(&self) -> bool {
        self.auto_detect
    }

    pub fn toggle_auto_detect(&mut self) {
        self.auto_detect = !self.auto_detect;
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Runs the full pipeline for one successfully captured snapshot.
    /// Callers skip the tick entirely when the snapshot read failed, so
    /// history and detector state only ever see real samples.
    pub fn tick(&mut self, snapshot: CounterSnapshot) -> Result<TickOutcome> {
        let rate = rate::sample(&self.previous, &snapshot, self.interval_secs)?;
        self.previous = snapshot;
        self.history.push(rate);
        let transition = self.detector.observe(rate, self.auto_detect);
        Ok(TickOutcome { rate, transition })
    }
}

/// The monitor loop. Two interleaved concerns on one thread: a short
/// input poll and an Instant-gated render tick. A render tick runs its
/// whole pipeline, including the (possibly blocking) notification,
/// before the next one can start.
pub fn run_monitor(
    reader: &dyn CounterReader,
    notifier: &mut dyn Notifier,
    config: &Config,
    log_file: Option<String>,
) -> anyhow::Result<()> {
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // No baseline, no monitor: this failure is fatal at startup.
    let baseline = reader
        .read_total(&config.device)
        .context("cannot read network counters")?;

    let mut monitor = Monitor::new(baseline, config, render::graph_capacity(render::UI_WIDTH));
    let mut logger = RateLogger::new(log_file)?;
    let theme = Theme::default();

    let refresh_interval = Duration::from_secs(config.refresh_interval);
    let mut last_update = Instant::now();

    let mut payload = DisplayPayload::loading(&theme);
    terminal.draw(|f| render::draw_ui(f, &payload, &theme))?;

    loop {
        if event::poll(INPUT_POLL)? {
            match event::read() {
                Ok(Event::Key(key_event)) => match InputEvent::from_key_event(key_event) {
                    InputEvent::Quit => break,
                    InputEvent::ToggleAutoDetect => {
                        monitor.toggle_auto_detect();
                        payload.auto_detect = monitor.auto_detect();
                        terminal.draw(|f| render::draw_ui(f, &payload, &theme))?;
                    }
                    InputEvent::Unknown => {}
                },
                // Errored or non-key events are discarded without effect.
                _ => {}
            }
        }

        if last_update.elapsed() >= refresh_interval {
            last_update = Instant::now();

            // A failed read skips this tick entirely; the next good one
            // resumes normal operation.
            let Ok(snapshot) = reader.read_total(&config.device) else {
                continue;
            };

            let outcome = monitor.tick(snapshot)?;
            payload = render::build_payload(
                outcome.transition.status,
                outcome.rate,
                monitor.history(),
                monitor.auto_detect(),
                &theme,
            );

            let _ = logger.log_tick(outcome.rate, outcome.transition.status, monitor.auto_detect());

            terminal.draw(|f| render::draw_ui(f, &payload, &theme))?;

            if outcome.transition.notify {
                notifier.notify();
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::Status;
    use crate::notify::test_support::RecordingNotifier;

    fn test_config() -> Config {
        Config {
            refresh_interval: 1,
            threshold_bytes: 300_000,
            device: "all".to_string(),
        }
    }

    fn drive(monitor: &mut Monitor, notifier: &mut RecordingNotifier, total_bytes: u64) -> Status {
        let outcome = monitor.tick(CounterSnapshot::new(total_bytes)).unwrap();
        if outcome.transition.notify {
            notifier.notify();
        }
        outcome.transition.status
    }

    #[test]
    fn download_cycle_end_to_end() {
        let config = test_config();
        let mut monitor = Monitor::new(CounterSnapshot::new(0), &config, 25);
        let mut notifier = RecordingNotifier::default();

        // Cumulative counter: deltas 0, 500000, 400000, 1000, 0.
        assert_eq!(drive(&mut monitor, &mut notifier, 0), Status::Idle);
        assert_eq!(drive(&mut monitor, &mut notifier, 500_000), Status::Active);
        assert_eq!(drive(&mut monitor, &mut notifier, 900_000), Status::Active);
        assert_eq!(drive(&mut monitor, &mut notifier, 901_000), Status::Finished);
        assert_eq!(drive(&mut monitor, &mut notifier, 901_000), Status::Idle);

        assert_eq!(notifier.calls, 1);
        assert_eq!(monitor.history().len(), 5);
    }

    #[test]
    fn toggle_mid_download_does_not_re_notify() {
        let config = test_config();
        let mut monitor = Monitor::new(CounterSnapshot::new(0), &config, 25);
        let mut notifier = RecordingNotifier::default();

        drive(&mut monitor, &mut notifier, 500_000);
        monitor.toggle_auto_detect();

        // Suspended: sampling and history continue, status frozen at Idle.
        assert_eq!(drive(&mut monitor, &mut notifier, 1_000_000), Status::Idle);
        assert_eq!(monitor.history().len(), 2);

        monitor.toggle_auto_detect();
        assert_eq!(drive(&mut monitor, &mut notifier, 1_000_000), Status::Finished);
        assert_eq!(drive(&mut monitor, &mut notifier, 1_000_000), Status::Idle);
        assert_eq!(notifier.calls, 1);
    }

    #[test]
    fn counter_reset_mid_run_reads_as_zero_rate() {
        let config = test_config();
        let mut monitor = Monitor::new(CounterSnapshot::new(5_000_000), &config, 25);

        let outcome = monitor.tick(CounterSnapshot::new(100)).unwrap();
        assert_eq!(outcome.rate.kb_per_sec(), 0.0);
        assert_eq!(outcome.transition.status, Status::Idle);
    }

    #[test]
    fn history_is_bounded_over_long_runs() {
        let config = test_config();
        let mut monitor = Monitor::new(CounterSnapshot::new(0), &config, 25);

        for i in 1..=100u64 {
            monitor.tick(CounterSnapshot::new(i * 10_000)).unwrap();
        }
        assert_eq!(monitor.history().len(), 25);
    }
}
