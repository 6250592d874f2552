//! TUI (Terminal User Interface) module for Wordle Board
//!
//! Draws the letter board, the availability keyboard, the board action panel
//! and the words still viable for the current board. All state lives in
//! [`App`]; this module only renders it and feeds it key presses.

use crate::actions::{PanelControl, Severity};
use crate::app::{App, AppAction};
use crate::board::{BoardState, Cell, CellMark};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const MAX_WORDS_DISPLAY: usize = 10;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;
const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const HINT_STYLE: Style = Style::new().fg(Color::Gray);
const INFORMATIONAL_BUTTON_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
const DESTRUCTIVE_BUTTON_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Red)
    .add_modifier(Modifier::BOLD);

fn mark_colors(mark: CellMark) -> (Color, Color) {
    match mark {
        CellMark::Unmarked => (Color::DarkGray, Color::White),
        CellMark::Correct => (Color::Green, Color::Black),
        CellMark::Present => (Color::Yellow, Color::Black),
        CellMark::Absent => (Color::Gray, Color::White),
    }
}

fn button_style(severity: Severity) -> Style {
    match severity {
        Severity::Informational => INFORMATIONAL_BUTTON_STYLE,
        Severity::Destructive => DESTRUCTIVE_BUTTON_STYLE,
    }
}

pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
}

impl TuiInterface {
    pub fn new(app: App) -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self { terminal, app })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    /// Draw and handle input until the user quits.
    pub fn run(&mut self) -> Result<(), io::Error> {
        loop {
            let app = &self.app;
            self.terminal.draw(|f| render(f, app))?;

            if let Some(AppAction::Quit) = self.handle_input()? {
                info_log!("run() - Quit requested");
                return Ok(());
            }
        }
    }

    fn handle_input(&mut self) -> Result<Option<AppAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to avoid double input
                if key.kind != KeyEventKind::Press {
                    return Ok(None);
                }

                // Garbage from escape sequences when alt-tabbing
                if let KeyCode::Char(c) = key.code
                    && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
                {
                    debug_log!("handle_input() - Ignoring invalid character: {:?}", c);
                    return Ok(None);
                }

                Ok(Some(self.app.handle_key(key)))
            }
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Board and side panels
            Constraint::Length(3), // Status line
            Constraint::Length(3), // Instructions
        ])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(6), // Action panel
            Constraint::Min(4),    // Viable words
        ])
        .split(columns[1]);

    render_title(f, chunks[0]);
    {
        let board = app.board();
        render_board(f, columns[0], &board);
        render_keyboard(f, side[0], &board);
    }
    render_actions(f, side[1], app);
    render_words(f, side[2], &app.viable_words());
    render_status(f, chunks[2], app.status(), app.error_message());
    render_instructions(f, chunks[3], app.focused());
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("WORDLE BOARD")
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn cell_span(cell: &Cell, under_cursor: bool) -> Span<'static> {
    let (bg, fg) = mark_colors(cell.mark);
    let mut style = Style::default().fg(fg).bg(bg);
    if under_cursor {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
    }
    Span::styled(format!(" {} ", cell.letter.unwrap_or(' ')), style)
}

fn render_board(f: &mut Frame, area: Rect, board: &BoardState) {
    let (cursor_row, cursor_col) = board.cursor();
    let mut lines = Vec::new();
    for (r, row) in board.rows().iter().enumerate() {
        let mut spans = vec![Span::raw("  ")];
        let cursor_cell = (r == cursor_row).then(|| cursor_col.min(row.len().saturating_sub(1)));
        for (c, cell) in row.iter().enumerate() {
            spans.push(cell_span(cell, cursor_cell == Some(c)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().title("Board").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, area: Rect, board: &BoardState) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| {
                    let style = if board.is_available(c) {
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT)
                    };
                    Span::styled(format!("{c} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title("Available Letters")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_actions(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    for control in app.controls() {
        let focused = app.focused() == Some(control);
        let mut style = button_style(control.severity());
        if focused {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let marker = if focused { "> " } else { "  " };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!(" {} ", control.label()), style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", control.description()),
            HINT_STYLE,
        )));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().title("Actions").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_words(f: &mut Frame, area: Rect, words: &[String]) {
    let mut lines = vec![Line::from(Span::styled(
        format!("Viable words ({}):", words.len()),
        INFO_STYLE,
    ))];
    for word in words.iter().take(MAX_WORDS_DISPLAY) {
        lines.push(Line::from(format!("  {word}")));
    }
    if words.len() > MAX_WORDS_DISPLAY {
        lines.push(Line::from(format!(
            "  ... and {} more",
            words.len() - MAX_WORDS_DISPLAY
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Information").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, status: &str, error_message: &str) {
    let line = if error_message.is_empty() {
        Line::from(Span::styled(status.to_string(), MESSAGE_STYLE))
    } else {
        Line::from(Span::styled(error_message.to_string(), ERROR_STYLE))
    };
    let paragraph =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect, focused: Option<PanelControl>) {
    let text = match focused {
        Some(control) => format!("ENTER: {} | TAB: Next control | ESC: Quit", control.label()),
        None => "Type letters | ENTER: Next row | SPACE: Cycle mark | ALT+letter: Toggle letter | TAB: Actions | CTRL+R: Reset | CTRL+X: Exclude all | ESC: Quit".to_string(),
    };

    let paragraph = Paragraph::new(text)
        .style(HINT_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::BoardSettings;
    use crate::wordbank::load_wordbank_from_str;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn draw(app: &App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(160, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
    }

    #[test]
    fn test_render_shows_both_controls() {
        let app = App::new(BoardSettings::default(), load_wordbank_from_str("crane\n"));
        let text = buffer_text(&draw(&app));
        assert!(text.contains("Reset Board"));
        assert!(text.contains("Exclude All"));
        assert!(text.contains("clear all letters from the board"));
        assert!(text.contains("set all letters unavailable"));
        assert!(text.contains("CRANE"));
    }

    #[test]
    fn test_exclude_all_is_styled_destructive() {
        assert_eq!(button_style(Severity::Destructive).bg, Some(Color::Red));
        assert_ne!(
            button_style(Severity::Informational),
            button_style(Severity::Destructive)
        );
    }
}
