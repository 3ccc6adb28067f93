use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,             // 'q', Esc, or Ctrl+C
    ToggleAutoDetect, // 's'
    Unknown,          // anything else, discarded without effect
}

impl InputEvent {
    pub fn from_key_event(key_event: KeyEvent) -> Self {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Self::Quit,
            (KeyCode::Char('q'), _) => Self::Quit,
            (KeyCode::Esc, _) => Self::Quit,
            (KeyCode::Char('s'), _) => Self::ToggleAutoDetect,
            _ => Self::Unknown,
        }
    }
}
