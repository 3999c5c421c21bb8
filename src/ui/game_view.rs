use crate::engine::{Board, Cell, Phase, Player, Session};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame,
    session: &Session,
    names: (&str, &str),
    selected_column: usize,
    remaining: u64,
    winning_cells: &[(usize, usize)],
    message: &Option<String>,
    game_over: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, names, remaining, chunks[0]);
    render_board(frame, session.board(), selected_column, winning_cells, game_over, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, game_over, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(
    frame: &mut Frame,
    session: &Session,
    (player_name, opponent_name): (&str, &str),
    remaining: u64,
    area: ratatui::layout::Rect,
) {
    let (status, color) = match session.phase() {
        Phase::InProgress => {
            let current = session.current_player();
            let name = match current {
                Player::Red => player_name,
                Player::Yellow => opponent_name,
            };
            (
                format!("{name}'s turn  |  {remaining}s left"),
                player_color(current),
            )
        }
        Phase::WonBy(winner) => ("Game Over".to_string(), player_color(winner)),
        Phase::Draw => ("Game Over".to_string(), Color::DarkGray),
    };

    let title = format!("Four in a Row — {player_name} vs {opponent_name}");
    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    winning_cells: &[(usize, usize)],
    game_over: bool,
    area: ratatui::layout::Rect,
) {
    let cols = board.cols();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if col == selected_column && !game_over {
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
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(cols * 3 + 1))));

    // Board rows, top row first; row 0 of the board is the bottom.
    for row in (0..board.rows()).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..cols {
            let cell = board.get(row, col);
            let (symbol, color) = match cell {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Red => (" ● ", Color::Red),
                Cell::Yellow => (" ● ", Color::Yellow),
            };
            let mut style = Style::default().fg(color);
            if winning_cells.contains(&(row, col)) {
                style = Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(cols * 3 + 1))));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column && !game_over {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
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

fn render_controls(frame: &mut Frame, game_over: bool, area: ratatui::layout::Rect) {
    let text = if game_over {
        "P/Enter: Play again  |  H/Esc: Back to home"
    } else {
        "←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit"
    };

    let controls = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
