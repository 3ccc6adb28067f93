use crate::{detect::Status, history::HistoryBuffer, rate::RateSample};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Fixed width of the UI layout, in columns.
pub const UI_WIDTH: u16 = 35;

/// Rate at which the graph saturates to the tallest block.
pub const GRAPH_MAX_KB: f64 = 10000.0;

/// Block runes used for the speed graph, shortest to tallest.
const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Graph capacity for a given display width: the row budget left after
/// borders, the label, and brackets.
pub fn graph_capacity(width: u16) -> usize {
    (width as usize).saturating_sub(10)
}

/// Colors and emphasis for the UI. One immutable value passed by
/// reference into the renderer.
pub struct Theme {
    pub logo: Color,
    pub graph: Color,
    pub idle: Color,
    pub active: Color,
    pub finished: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            logo: Color::Cyan,
            graph: Color::Yellow,
            idle: Color::Yellow,
            active: Color::Green,
            finished: Color::Red,
        }
    }
}

impl Theme {
    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Idle => self.idle,
            Status::Active => self.active,
            Status::Finished => self.finished,
        }
    }
}

/// Everything the terminal needs to draw one frame: status word and
/// emphasis, clamped speed, graph glyphs, and the auto-detect flag. The
/// monitor loop computes values; presentation stays on this side of the
/// seam.
pub struct DisplayPayload {
    pub status_word: &'static str,
    pub status_color: Color,
    pub speed_kb: f64,
    pub graph: String,
    pub auto_detect: bool,
}

impl DisplayPayload {
    /// The frame shown before the first render tick has sampled anything.
    pub fn loading(theme: &Theme) -> Self {
        Self {
            status_word: "Loading...",
            status_color: theme.finished,
            speed_kb: 0.0,
            graph: String::new(),
            auto_detect: true,
        }
    }
}

/// Maps a speed to a graph block, saturating at the tallest rune.
fn speed_to_block(speed_kb: f64, max_kb: f64) -> char {
    let idx = ((speed_kb / max_kb) * (BLOCKS.len() - 1) as f64) as usize;
    BLOCKS[idx.min(BLOCKS.len() - 1)]
}

/// Builds the display payload for one frame. Pure; the displayed speed is
/// clamped here while detection upstream saw the raw value.
pub fn build_payload(
    status: Status,
    rate: RateSample,
    history: &HistoryBuffer,
    auto_detect: bool,
    theme: &Theme,
) -> DisplayPayload {
    let graph = history
        .samples()
        .map(|s| speed_to_block(s.kb_per_sec(), GRAPH_MAX_KB))
        .collect();

    DisplayPayload {
        status_word: status.as_str(),
        status_color: theme.status_color(status),
        speed_kb: rate.display_kb_per_sec(),
        graph,
        auto_detect,
    }
}

pub fn draw_ui(f: &mut Frame, payload: &DisplayPayload, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // logo
            Constraint::Length(5), // status
            Constraint::Length(3), // graph
            Constraint::Length(3), // controls
            Constraint::Min(0),
        ])
        .split(f.area());

    let logo_style = Style::default().fg(theme.logo);
    let logo = Paragraph::new(vec![
        Line::from(Span::styled("┳┓   •┏┓  ", logo_style)),
        Line::from(Span::styled("┃┃┏┓╋┓┃┓┏┓", logo_style)),
        Line::from(vec![
            Span::styled("┛┗┗┛┗┗┗┛┗┛", logo_style),
            Span::styled(
                format!(" dlnotify v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(logo, chunks[0]);

    let status_style = Style::default()
        .fg(payload.status_color)
        .add_modifier(Modifier::BOLD);
    let status = Paragraph::new(vec![
        Line::from(format!("AutoDetect: {}", payload.auto_detect)),
        Line::from(vec![
            Span::raw("Download:   "),
            Span::styled(payload.status_word, status_style),
        ]),
        Line::from(format!("Speed:      {:.0} KB/s", payload.speed_kb)),
    ])
    .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[1]);

    let graph = Paragraph::new(Line::from(Span::styled(
        payload.graph.clone(),
        Style::default().fg(theme.graph),
    )))
    .block(Block::default().borders(Borders::ALL).title("Graph"));
    f.render_widget(graph, chunks[2]);

    let controls = Paragraph::new(Line::from("[Q] Quit | [S] Toggle AutoDetect"))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(controls, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{device::CounterSnapshot, rate};

    fn kb(value: f64) -> RateSample {
        rate::sample(
            &CounterSnapshot::new(0),
            &CounterSnapshot::new((value * 1024.0) as u64),
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn block_scaling_saturates() {
        assert_eq!(speed_to_block(0.0, GRAPH_MAX_KB), '▁');
        assert_eq!(speed_to_block(GRAPH_MAX_KB, GRAPH_MAX_KB), '█');
        assert_eq!(speed_to_block(GRAPH_MAX_KB * 50.0, GRAPH_MAX_KB), '█');
    }

    #[test]
    fn payload_clamps_displayed_speed() {
        let history = HistoryBuffer::new(4);
        let theme = Theme::default();
        let payload = build_payload(Status::Active, kb(150_000.0), &history, true, &theme);
        assert_eq!(payload.speed_kb, rate::DISPLAY_CEILING_KB);
        assert_eq!(payload.status_word, "ACTIVE");
        assert_eq!(payload.status_color, theme.active);
    }

    #[test]
    fn graph_string_tracks_history_order() {
        let mut history = HistoryBuffer::new(3);
        history.push(kb(0.0));
        history.push(kb(GRAPH_MAX_KB));
        let payload = build_payload(Status::Idle, kb(0.0), &history, true, &Theme::default());
        assert_eq!(payload.graph, "▁█");
    }

    #[test]
    fn graph_capacity_leaves_room_for_chrome() {
        assert_eq!(graph_capacity(UI_WIDTH), 25);
        assert_eq!(graph_capacity(5), 0);
    }
}
