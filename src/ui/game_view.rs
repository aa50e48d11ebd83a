use crate::game::{Board, Cell, GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    game_mode: &str,
) {
    let board_height = game_state.board().rows() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, game_mode, chunks[0]);
    render_board(frame, game_state.board(), selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    game_mode: &str,
    area: ratatui::layout::Rect,
) {
    let current_player = game_state.current_player();
    let color = match current_player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    };

    let status = if game_state.is_terminal() {
        format!("Game Over  |  {}", game_mode)
    } else {
        format!("Current Player: {}  |  {}", current_player, game_mode)
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let cols = board.cols();
    let mut lines = Vec::new();

    // Column labels (1-based, last digit only for wide boards) with the
    // selection highlighted
    let mut col_line = vec![Span::raw("   ")]; // Padding to match "  ║"
    for col in 0..cols {
        let label = format!(" {} ", (col + 1) % 10);
        if col == selected_column {
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
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(cols * 3))));

    // Board rows
    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..cols {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Red => (" ● ", Color::Red),
                Cell::Yellow => (" ● ", Color::Yellow),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(cols * 3))));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
