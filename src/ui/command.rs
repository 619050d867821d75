use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::app::App;
use crate::ui::components;

pub fn render_command_menu(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search
            Constraint::Min(0),    // List
        ])
        .split(area);

    if let [header_area, search_area, list_area] = &chunks[..] {
        components::render_view_header(frame, *header_area, "Commands");
        render_search_input(frame, app, *search_area);
        render_command_list(frame, app, *list_area);
    }
}

fn render_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let query = app.commands.input.as_str();
    let text = if query.is_empty() {
        Span::styled(
            "type to filter",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(query, Style::default().fg(Color::White))
    };
    let prompt = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        text,
        Span::styled(
            "█",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(prompt).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

fn render_command_list(frame: &mut Frame, app: &App, area: Rect) {
    let filtered_items = app.commands.filtered_items();
    if filtered_items.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No matching commands",
                Style::default().fg(Color::DarkGray),
            )),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = filtered_items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let is_selected = index == app.commands.selected;
            let prefix = if is_selected { " > " } else { "   " };
            ListItem::new(Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::DarkGray)),
                Span::styled(item.name.as_str(), components::selected_name_style(is_selected)),
                Span::styled("  —  ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    item.description.as_str(),
                    components::selected_secondary_style(
                        is_selected,
                        Style::default().fg(Color::DarkGray),
                    ),
                ),
            ]))
        })
        .collect();

    frame.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}
