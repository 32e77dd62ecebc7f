use super::app::{Screen, Setup, SetupStep};
use super::board_widget::{board_lines, marker_color, marker_span};
use crate::game::{GameState, COLS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const RULES: [&str; 5] = [
    "* Two player game",
    "* Choose a column to put a disc",
    "* If a player gets a disc connected four, they win",
    "* Connected four can be in rows, columns or diagonals",
    "* If all columns get filled, then the game is a draw",
];

pub(super) fn render(
    frame: &mut Frame,
    screen: &Screen,
    input: &str,
    selected_column: usize,
    message: &Option<String>,
    max_name_length: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Body
            Constraint::Length(3), // Message
            Constraint::Length(4), // Prompt / controls
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    match screen {
        Screen::Setup(setup) => {
            render_setup(frame, setup, max_name_length, chunks[1]);
            render_input(frame, setup_prompt(setup, max_name_length), input, chunks[3]);
        }
        Screen::Playing(state) => {
            render_game(frame, state, selected_column, chunks[1]);
            render_controls(frame, state, chunks[3]);
        }
    }
    render_message(frame, message, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("C O N N E C T - F O U R")
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn setup_prompt(setup: &Setup, max_name_length: usize) -> String {
    match setup.step {
        SetupStep::Name => format!(
            "Enter player {} name (Max length: {})",
            setup.seat.number(),
            max_name_length
        ),
        SetupStep::Marker { .. } => format!(
            "Select player{} marker (Enter one option):",
            setup.seat.number()
        ),
    }
}

fn render_setup(frame: &mut Frame, setup: &Setup, max_name_length: usize, area: Rect) {
    let mut lines: Vec<Line> = RULES.iter().map(|rule| Line::from(*rule)).collect();
    lines.push(Line::from(""));

    if let Some(first) = &setup.first {
        lines.push(Line::from(vec![
            Span::raw(format!("Player 1: {} ", first.name)),
            marker_span(first.marker),
        ]));
    }

    match &setup.step {
        SetupStep::Name => {
            lines.push(Line::from(setup_prompt(setup, max_name_length)));
        }
        SetupStep::Marker { name } => {
            lines.push(Line::from(format!(
                "Player {}: {}",
                setup.seat.number(),
                name
            )));
            let mut options = Vec::new();
            for marker in setup.pool.available() {
                options.push(marker_span(*marker));
                options.push(Span::raw(" "));
            }
            lines.push(Line::from(options));
        }
    }

    let body = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Setup"));
    frame.render_widget(body, area);
}

fn render_game(frame: &mut Frame, state: &GameState, selected_column: usize, area: Rect) {
    let player = state.current_player();
    let status = if state.is_terminal() {
        Line::from("Game Over")
    } else {
        Line::from(vec![
            Span::styled(
                player.name.clone(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw("("),
            Span::styled(
                player.marker.name(),
                Style::default().fg(marker_color(player.marker)),
            ),
            Span::raw(")'s move"),
        ])
    };

    let selected = (!state.is_terminal()).then_some(selected_column);
    let mut lines = vec![status, Line::from("")];
    lines.extend(board_lines(state.board(), selected));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_input(frame: &mut Frame, prompt: String, input: &str, area: Rect) {
    let lines = vec![
        Line::from(prompt),
        Line::from(vec![
            Span::styled(": ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
            Span::raw(input.to_string()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Enter: Confirm  |  Esc: Quit"),
    );
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let color = if text.starts_with("Invalid") {
        Color::Red
    } else {
        Color::Yellow
    };
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, state: &GameState, area: Rect) {
    let lines = if state.is_terminal() {
        vec![
            Line::from("Play again? (y)"),
            Line::from("Any other key: Quit"),
        ]
    } else {
        vec![
            Line::from(format!("Enter a column number (1-{COLS})")),
            Line::from("←/→: Move  |  Enter: Drop  |  Q: Quit"),
        ]
    };

    let controls = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
