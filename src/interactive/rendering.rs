//! TUI rendering with ratatui
//!
//! Visualizations for the Bulls and Cows game.

use super::app::{App, InputMode, MessageStyle};
use crate::engine::UNIVERSE_SIZE;
use crate::engine::entropy::{information_gained, uniform_entropy};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, BorderType, Borders, Chart, Dataset, Gauge, GraphType, List, ListItem,
        Paragraph,
    },
};

/// Candidates are listed individually below this count
const LIST_THRESHOLD: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐂 BULLS AND COWS 🐮 - Guess the 4-digit number")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_history(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, record)| {
            let score = record.score();
            let emoji_style = if score.is_win() {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Yellow)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    record.guess.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(format!("{:<10}", score.to_emoji()), emoji_style),
                Span::styled(
                    format!(" {:>5.2} bits", record.entropy),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!("  {} left", record.remaining)),
            ]))
        })
        .collect();

    let title = format!(" History ({} guesses) ", history.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session.candidates();
    let count = candidates.len();

    let mut lines = if app.session.is_won() {
        vec![Line::from(Span::styled(
            "Game completed!",
            Style::default().fg(Color::Green),
        ))]
    } else if count == 0 {
        vec![Line::from(Span::styled(
            "No consistent candidates remain",
            Style::default().fg(Color::Red),
        ))]
    } else if count <= LIST_THRESHOLD {
        let listed: Vec<String> = candidates.iter().map(ToString::to_string).collect();
        vec![
            Line::from(format!("{count} candidates remaining:")),
            Line::from(Span::styled(
                listed.join(" "),
                Style::default().fg(Color::Yellow),
            )),
        ]
    } else {
        vec![
            Line::from(format!("{count} candidates remaining")),
            Line::from(format!(
                "Information needed: {:.2} bits",
                uniform_entropy(count)
            )),
        ]
    };

    if app.show_secret {
        lines.push(Line::from(vec![
            Span::raw("Secret: "),
            Span::styled(
                app.session.reveal().to_string(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Entropy chart
            Constraint::Length(3), // Information gauge
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_entropy_chart(f, app, chunks[0]);
    render_information_gauge(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_entropy_chart(f: &mut Frame, app: &App, area: Rect) {
    let points = app.session.entropy_series();
    let max_bits = uniform_entropy(UNIVERSE_SIZE);
    let last_attempt = points.len().max(4);

    let datasets = vec![
        Dataset::default()
            .name("entropy")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&points),
    ];

    let x_labels = vec![Span::raw("1"), Span::raw(last_attempt.to_string())];
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{:.1}", max_bits / 2.0)),
        Span::raw(format!("{max_bits:.1}")),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Entropy over attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .x_axis(
            Axis::default()
                .title("attempt")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([1.0, last_attempt as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("bits")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_bits])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

fn render_information_gauge(f: &mut Frame, app: &App, area: Rect) {
    let total_bits = uniform_entropy(UNIVERSE_SIZE);
    let remaining = app.session.candidates().len();
    let gained = information_gained(UNIVERSE_SIZE, remaining).max(0.0);
    let ratio = (gained / total_bits).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Information Gained ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!(
            "{gained:.1}/{total_bits:.1} bits | {remaining} candidates remain"
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter your guess (4 distinct digits) ",
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let best = app
        .stats
        .best
        .map_or_else(|| "-".to_string(), |b| b.to_string());
    let stats_text = format!(
        "Games: {} | Won: {} | Best: {best}",
        app.stats.total_games, app.stats.games_won
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let rate_text = format!("Win Rate: {:.0}%", app.stats.win_rate());
    f.render_widget(
        Paragraph::new(rate_text).alignment(Alignment::Center),
        chunks[1],
    );

    let secret_text = if app.show_secret {
        format!("Secret: {}", app.session.reveal())
    } else {
        "Secret: ????".to_string()
    };
    f.render_widget(
        Paragraph::new(secret_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("q: Quit | n: New | r: Reveal | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
