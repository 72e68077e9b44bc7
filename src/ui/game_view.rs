use std::time::Duration;

use crate::game::{Board, Coord, Side};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget;

/// Everything the game screen draws, borrowed from the app.
pub struct ViewState<'a> {
    pub board: &'a Board,
    pub selector: Coord,
    pub picked: Option<Coord>,
    pub human: Side,
    pub my_turn: bool,
    pub winner: Option<Side>,
    pub elapsed: Duration,
    pub message: &'a Option<String>,
}

pub fn render(frame: &mut Frame, view: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    render_board(frame, view, chunks[1]);
    render_message(frame, view.message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn side_color(side: Side) -> Color {
    match side {
        Side::White => Color::White,
        Side::Black => Color::LightRed,
    }
}

fn render_header(frame: &mut Frame, view: &ViewState, area: Rect) {
    let turn = match view.winner {
        Some(winner) => format!("{} wins", winner.name()),
        None if view.my_turn => "Your turn".to_string(),
        None => "Robot's turn".to_string(),
    };
    let status = format!(
        "You: {}  |  {}  |  {}s",
        view.human.name(),
        turn,
        view.elapsed.as_secs()
    );

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(side_color(view.human))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Flank Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, view: &ViewState, area: Rect) {
    let selector = view.winner.is_none().then_some(view.selector);
    let lines = board_widget::board_lines(view.board, selector, view.picked);
    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::raw("Arrows: Move  |  "),
        Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": Pick / Slide  |  R: Restart  |  Q: Quit"),
    ]);

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_render_game_screen() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let board = Board::from_layout(&[2, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1]).unwrap();
        let message = Some("Your move".to_string());
        let view = ViewState {
            board: &board,
            selector: Coord::new(0, 3),
            picked: None,
            human: Side::White,
            my_turn: true,
            winner: None,
            elapsed: Duration::from_secs(3),
            message: &message,
        };
        terminal.draw(|f| render(f, &view)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(screen.contains("Flank Four"));
        assert!(screen.contains("Your turn"));
        assert!(screen.contains("Your move"));
    }
}
