use std::io::Write;

const SUMMARY: &str = "dlnotify";
const BODY: &str = "Download finished";

/// Completion side effect, abstracted so the monitor loop can be driven
/// with a test double. The real implementation may block; callers accept
/// that the next render tick is delayed rather than overlapped.
pub trait Notifier: Send {
    fn notify(&mut self);
}

/// Desktop notification plus a terminal bell, best-effort on both counts.
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&mut self) {
        let _ = notify_rust::Notification::new()
            .summary(SUMMARY)
            .body(BODY)
            .appname(SUMMARY)
            .timeout(notify_rust::Timeout::Milliseconds(5000))
            .show();

        // BEL rings through even when no notification daemon is running.
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }
}

#[cfg(test)]
pub mod test_support {
    use super::Notifier;

    /// Counts invocations so tests can assert the one-shot guarantee.
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub calls: usize,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self) {
            self.calls += 1;
        }
    }
}
