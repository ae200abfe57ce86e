//! Timer screen implementation
//!
//! Shows the elapsed time, the computed height and the control button.
//! The screen is the controller's output surface: it only stores the texts
//! it is handed and draws them.

use crate::app::input::HitAreas;
use crate::timer::Surface;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BUTTON_WIDTH: u16 = 24;

/// Stopwatch screen component
#[derive(Debug, Default)]
pub struct TimerScreen {
    time_text: String,
    height_text: String,
    control_text: String,
    hit_areas: HitAreas,
}

impl TimerScreen {
    /// Create an empty screen; the controller fills it on attach
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    pub fn height_text(&self) -> &str {
        &self.height_text
    }

    pub fn control_text(&self) -> &str {
        &self.control_text
    }

    /// Clickable areas from the last render
    pub fn hit_areas(&self) -> &HitAreas {
        &self.hit_areas
    }

    /// Render the timer screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title and subtitle
                Constraint::Length(5), // Elapsed time
                Constraint::Length(5), // Height
                Constraint::Length(3), // Control button
                Constraint::Min(0),
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_time(f, chunks[1]);
        self.render_height(f, chunks[2]);
        self.render_button(f, chunks[3]);
        self.render_help(f, chunks[5]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Main title
                Constraint::Length(2), // Subtitle
            ])
            .split(area);

        let title = Paragraph::new("CLIFF TIMER")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, title_chunks[0]);

        let subtitle = Paragraph::new("Drop it, time the fall, read the height")
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, title_chunks[1]);
    }

    fn render_time(&self, f: &mut Frame, area: Rect) {
        let time = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                self.time_text.as_str(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Elapsed")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        f.render_widget(time, area);
    }

    fn render_height(&mut self, f: &mut Frame, area: Rect) {
        let height = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                self.height_text.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Height (click or U for m/ft)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        f.render_widget(height, area);
        self.hit_areas.height = area;
    }

    fn render_button(&mut self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Min(0),
            ])
            .split(area);

        let button = Paragraph::new(self.control_text.as_str())
            .style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(button, columns[1]);
        self.hit_areas.control = columns[1];
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let help_text = vec![Line::from(vec![
            Span::styled("Space", key_style),
            Span::raw(" Start/Stop/Reset  "),
            Span::styled("U", key_style),
            Span::raw(" Toggle m/ft  "),
            Span::styled("Q", key_style),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );

        f.render_widget(help, area);
    }
}

impl Surface for TimerScreen {
    fn set_time_text(&mut self, text: &str) {
        self.time_text = text.to_string();
    }

    fn set_height_text(&mut self, text: &str) {
        self.height_text = text.to_string();
    }

    fn set_control_text(&mut self, text: &str) {
        self.control_text = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(screen: &mut TimerScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| screen.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_surface_stores_texts() {
        let mut screen = TimerScreen::new();
        screen.set_time_text("1.23 s");
        screen.set_height_text("19.62 m");
        screen.set_control_text("Reset");
        assert_eq!(screen.time_text(), "1.23 s");
        assert_eq!(screen.height_text(), "19.62 m");
        assert_eq!(screen.control_text(), "Reset");
    }

    #[test]
    fn test_render_shows_texts() {
        let mut screen = TimerScreen::new();
        screen.set_time_text("0.00 s");
        screen.set_height_text("-- m");
        screen.set_control_text("Start Timer");

        let text = rendered_text(&mut screen);
        assert!(text.contains("CLIFF TIMER"));
        assert!(text.contains("0.00 s"));
        assert!(text.contains("-- m"));
        assert!(text.contains("Start Timer"));
    }

    #[test]
    fn test_render_records_hit_areas() {
        let mut screen = TimerScreen::new();
        assert_eq!(*screen.hit_areas(), HitAreas::default());

        rendered_text(&mut screen);
        let areas = screen.hit_areas();
        assert_eq!(areas.control.width, BUTTON_WIDTH);
        assert_eq!(areas.control.height, 3);
        assert_eq!(areas.height.height, 5);
        assert!(areas.height.y < areas.control.y);
    }
}
