use crate::game::{Board, Coord, PieceColor, COLS, ROWS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn piece_style(color: PieceColor) -> (&'static str, Color) {
    match color {
        PieceColor::Empty => (" . ", Color::DarkGray),
        PieceColor::White => (" \u{25cf} ", Color::White),
        PieceColor::Black => (" \u{25cf} ", Color::LightRed),
    }
}

/// Bordered board lines with column and row labels. The selected cell is
/// underlined, the picked piece gets a highlighted background.
pub fn board_lines(board: &Board, selector: Option<Coord>, picked: Option<Coord>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(ROWS + 3);

    let mut header = vec![Span::raw("   ")];
    for col in 0..COLS {
        let style = match selector {
            Some(sel) if sel.col == col as i32 => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            _ => Style::default(),
        };
        header.push(Span::styled(format!(" {col} "), style));
    }
    header.push(Span::raw("  "));
    lines.push(Line::from(header));

    let rule = "═".repeat(COLS * 3 + 2);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..ROWS {
        let mut spans = vec![Span::raw(format!("{row} ║ "))];
        for col in 0..COLS {
            let pos = Coord::new(col as i32, row as i32);
            let (symbol, color) = piece_style(board.color_at(pos));
            let mut style = Style::default().fg(color);
            if picked == Some(pos) {
                style = style.bg(Color::Blue).add_modifier(Modifier::BOLD);
            }
            if selector == Some(pos) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(symbol, style));
        }
        spans.push(Span::raw(" ║"));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));
    lines
}
