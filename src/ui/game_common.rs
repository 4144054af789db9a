//! Shared UI pieces drawn outside the game canvas.

use crate::game::{Game, GameState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Render a standardized status bar (2 lines: status message + controls).
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - A 2-line area below the canvas
/// * `status_text` - The status message to display (line 1)
/// * `status_color` - Color for the status message
/// * `controls` - Slice of (key, action) pairs, e.g., `[("[Space]", "Flap"), ("[Q]", "Quit")]`
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    // Line 1: Status message (centered)
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    // Line 2: Controls (centered)
    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Status message, its color, and the key hints for the current state.
pub fn status_for(game: &Game) -> (String, Color, Vec<(&'static str, &'static str)>) {
    let common = [("[F11]", "Fullscreen"), ("[Q]", "Quit")];
    let (text, color, mut controls) = match game.state() {
        GameState::Menu { .. } => (
            "Choose a difficulty".to_string(),
            Color::Cyan,
            vec![("[Click/E/M/H]", "Play"), ("[C]", "Custom")],
        ),
        GameState::CustomSettings => (
            format!(
                "Custom: speed {}  gap {}  gravity {}",
                game.settings().custom().scroll_speed,
                game.settings().custom().gap_size,
                game.settings().display_value(crate::game::SettingField::Gravity),
            ),
            Color::Yellow,
            vec![("[1-6]", "Adjust"), ("[P]", "Play"), ("[B]", "Back")],
        ),
        GameState::Playing(session) => (
            format!("{}  Score: {}", session.difficulty.name(), session.score),
            Color::Green,
            vec![("[Space]", "Flap")],
        ),
        GameState::Falling(session) => (
            format!("Crashed! Score: {}", session.score),
            Color::Red,
            Vec::new(),
        ),
        GameState::GameOver(session) => (
            format!("Game over. Score: {}  Best: {}", session.score, game.best_score()),
            Color::Red,
            vec![("[Space/R]", "Restart"), ("[M]", "Menu")],
        ),
    };
    controls.extend(common);
    (text, color, controls)
}

/// Shown instead of the canvas when the terminal cannot fit it.
pub fn render_too_small(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
    let y = area.y + area.height / 2;
    let lines = vec![
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Enlarge the window or press F11",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        paragraph,
        Rect {
            y: y.saturating_sub(1).max(area.y),
            height: area.height.min(2),
            ..area
        },
    );
}
