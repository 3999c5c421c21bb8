use crate::matchmaking::{OnlineStats, SearchStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_home(
    frame: &mut Frame,
    name_input: &str,
    stats: OnlineStats,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Online stats
            Constraint::Length(3), // Name input
            Constraint::Length(3), // Message
            Constraint::Min(3),    // Controls
        ])
        .split(frame.area());

    let title = Paragraph::new("Four in a Row")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let stats_line = Line::from(vec![
        Span::raw("Players online: "),
        Span::styled(
            stats.players_online.to_string(),
            Style::default().fg(Color::Green),
        ),
        Span::raw("   Active games: "),
        Span::styled(
            stats.games_active.to_string(),
            Style::default().fg(Color::Green),
        ),
    ]);
    let stats_widget = Paragraph::new(stats_line).alignment(Alignment::Center);
    frame.render_widget(stats_widget, chunks[1]);

    let input = Paragraph::new(format!("{name_input}_"))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Your name (min 2 characters)"),
        );
    frame.render_widget(input, chunks[2]);

    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(msg_widget, chunks[3]);

    let controls = Paragraph::new("Enter: Find a match  |  Esc: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[4]);
}

pub fn render_searching(frame: &mut Frame, status: Option<&SearchStatus>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Status
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let title = Paragraph::new("Finding an opponent")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let text = match status {
        Some(SearchStatus::Searching { elapsed_seconds }) => {
            let dots = ".".repeat((elapsed_seconds % 4) as usize);
            format!("Searching{dots}  ({elapsed_seconds}s)")
        }
        Some(SearchStatus::Found { opponent }) | Some(SearchStatus::Ready { opponent }) => {
            format!("Opponent found: {opponent}!  Starting…")
        }
        None => "Searching".to_string(),
    };
    let status_widget = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(status_widget, chunks[1]);

    let controls = Paragraph::new("Esc: Cancel")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[2]);
}
