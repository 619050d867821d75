use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::dishes::{Comment, Dish};
use crate::ui::components;

/// Dish card, its comments, and the prev/next bar
pub fn render_detail_view(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Prev/next
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    if let [header, body, navigation, footer] = &chunks[..] {
        let title = app
            .detail
            .dish
            .as_ref()
            .map_or("Dish", |dish| dish.name.as_str());
        components::render_view_header(f, *header, title);
        if let Some(message) = app.status_toast_message() {
            let toast_area = Rect {
                x: header.x + 1,
                y: header.y + 1,
                width: header.width.saturating_sub(2),
                height: 1,
            };
            components::render_status_toast(f, toast_area, message);
        }
        render_body(f, app, *body);
        render_prev_next(f, app, *navigation);
        components::render_navigation_footer(
            f,
            *footer,
            "DISH",
            &[("←→", "prev/next"), ("c", "comment"), ("Esc", "menu"), ("/", "commands")],
        );
    }
}

fn render_body(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if let Some(error) = &app.detail.error {
        f.render_widget(
            Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!(" {}", error),
                    Style::default().fg(Color::Red),
                )),
            ])
            .wrap(Wrap { trim: true })
            .block(block),
            area,
        );
        return;
    }

    let Some(dish) = app.detail.dish.as_ref().filter(|_| !app.detail.loading) else {
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", components::spinner(app.loading_frame)),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled("Loading", Style::default().fg(Color::DarkGray)),
            ]))
            .block(block),
            area,
        );
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    if let [card, comments] = &columns[..] {
        render_dish_card(f, dish, *card);
        render_comments(f, app, dish, *comments);
    }
}

fn render_dish_card(f: &mut Frame, dish: &Dish, area: Rect) {
    let mut title = vec![Span::styled(
        dish.name.to_uppercase(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    if !dish.label.is_empty() {
        title.push(Span::styled(
            format!("  {}", dish.label),
            Style::default().fg(Color::Red),
        ));
    }

    let mut lines = vec![
        Line::from(""),
        Line::from(title),
        Line::from(vec![
            Span::styled(dish.category.as_str(), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("  ${}", dish.price), Style::default().fg(Color::Green)),
        ]),
    ];
    if let Some(average) = dish.average_rating() {
        lines.push(Line::from(Span::styled(
            format!("{:.1} / 5 from {} reviews", average, dish.comments.len()),
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        dish.description.as_str(),
        Style::default().fg(Color::White),
    )));

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Dish ")
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

fn comment_lines(comment: &Comment) -> Vec<Line<'_>> {
    vec![
        Line::from(Span::styled(
            components::stars(comment.rating),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            comment.comment.as_str(),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("-- {}, {}", comment.author, display_date(&comment.date)),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ]
}

/// Shows the calendar date of an ISO timestamp, or the raw text if it does not parse
fn display_date(date: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(date)
        .map_or_else(|_| date.to_string(), |parsed| parsed.format("%b %d, %Y").to_string())
}

fn render_comments(f: &mut Frame, app: &App, dish: &Dish, area: Rect) {
    let mut lines: Vec<Line> = dish.comments.iter().flat_map(comment_lines).collect();
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No comments yet",
            Style::default().fg(Color::DarkGray),
        )));
    }
    if app.detail.submitting {
        lines.push(Line::from(Span::styled(
            format!("{} posting comment", components::spinner(app.loading_frame)),
            Style::default().fg(Color::Magenta),
        )));
    }

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Comments ")
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

fn render_prev_next(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.detail.adjacent {
        Some(adjacent) => Line::from(vec![
            Span::styled(" ◀ ", Style::default().fg(Color::Cyan)),
            Span::styled(app.dish_name(&adjacent.prev), Style::default().fg(Color::White)),
            Span::styled("   |   ", Style::default().fg(Color::DarkGray)),
            Span::styled(app.dish_name(&adjacent.next), Style::default().fg(Color::White)),
            Span::styled(" ▶ ", Style::default().fg(Color::Cyan)),
        ]),
        None => Line::from(Span::styled(" ", Style::default())),
    };

    f.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}
