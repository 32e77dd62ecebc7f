use crate::game::{Cell, Marker, StandardBoard, COLS, ROWS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const DISC: &str = " \u{25cf} ";

pub fn marker_color(marker: Marker) -> Color {
    match marker {
        Marker::Red => Color::Red,
        Marker::Blue => Color::Blue,
        Marker::Green => Color::Green,
        Marker::Yellow => Color::Yellow,
    }
}

/// Marker name in its own color, bold.
pub fn marker_span(marker: Marker) -> Span<'static> {
    Span::styled(
        marker.name(),
        Style::default()
            .fg(marker_color(marker))
            .add_modifier(Modifier::BOLD),
    )
}

/// Lines drawing the framed board, with column numbers on top. `selected`
/// highlights a column and puts an arrow under it.
pub fn board_lines(board: &StandardBoard, selected: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(ROWS + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if Some(col) == selected {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(COLS * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in board.grid() {
        let mut row_spans = vec![Span::raw("  ║")];
        for cell in row {
            row_spans.push(match cell {
                Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Cell::Occupied(marker) => {
                    Span::styled(DISC, Style::default().fg(marker_color(*marker)))
                }
            });
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    if let Some(selected) = selected {
        let mut indicator_line = vec![Span::raw("   ")];
        for col in 0..COLS {
            if col == selected {
                indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
        indicator_line.push(Span::raw("  "));
        lines.push(Line::from(indicator_line));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_board_lines_shape() {
        let board = StandardBoard::new();
        let lines = board_lines(&board, Some(3));
        assert_eq!(lines.len(), ROWS + 4);
        // Frame and rows line up
        assert_eq!(text(&lines[1]).chars().count(), text(&lines[2]).chars().count());
        assert!(text(&lines[0]).contains(" 7 "));
        assert!(text(&lines[ROWS + 3]).contains('▲'));
        assert_eq!(board_lines(&board, None).len(), ROWS + 3);
    }

    #[test]
    fn test_disc_uses_marker_color() {
        let mut board = StandardBoard::new();
        board.apply_move(0, Marker::Green);
        let lines = board_lines(&board, None);
        let bottom = &lines[ROWS + 1];
        assert_eq!(bottom.spans[1].content, DISC);
        assert_eq!(bottom.spans[1].style.fg, Some(Color::Green));
        assert_eq!(bottom.spans[2].style.fg, Some(Color::DarkGray));
    }
}
