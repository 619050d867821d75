use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::components;

const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[("Ctrl+C", "Quit"), ("/", "Command menu"), ("Esc", "Back/close")],
    ),
    (
        "Menu",
        &[
            ("↑ ↓", "Select dish"),
            ("Enter", "Open dish"),
            ("type", "Filter by name or category"),
            ("F5", "Reload dishes"),
        ],
    ),
    (
        "Dish",
        &[
            ("← →", "Previous / next dish"),
            ("c", "Add a comment"),
        ],
    ),
    (
        "Comment form",
        &[
            ("Tab", "Next field"),
            ("← →", "Change rating"),
            ("Enter", "Submit when valid"),
        ],
    ),
];

pub fn render_help_view(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    if let [header, body, footer] = &chunks[..] {
        components::render_view_header(f, *header, "Help");

        let mut lines = Vec::new();
        for (section, keys) in SHORTCUTS {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {}", section),
                Style::default().fg(Color::Cyan),
            )));
            for (key, action) in *keys {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<8}", key), Style::default().fg(Color::Yellow)),
                    Span::styled(*action, Style::default().fg(Color::White)),
                ]));
            }
        }

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Shortcuts ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
            *body,
        );
        components::render_navigation_footer(f, *footer, "HELP", &[("Esc", "back")]);
    }
}
