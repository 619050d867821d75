use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::App;
use crate::dishes::Dish;
use crate::ui::components::{self, TextInputConfig};

const NAME_COLUMN_WIDTH: usize = 24;

/// Dish list with filter input
pub fn render_menu_view(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Filter
            Constraint::Min(0),    // Dishes
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    if let [header, filter, list, footer] = &chunks[..] {
        components::render_view_header(f, *header, "Menu");
        if let Some(message) = app.status_toast_message() {
            components::render_status_toast(f, inner_line(*header), message);
        }
        components::render_text_input(
            f,
            *filter,
            TextInputConfig::new(app.menu.filter.content(), "Filter")
                .with_focus(true)
                .with_cursor_position(app.menu.filter.cursor_position()),
        );
        render_dish_list(f, app, *list);
        components::render_navigation_footer(
            f,
            *footer,
            "MENU",
            &[("↑↓", "select"), ("Enter", "open"), ("/", "commands"), ("Ctrl+C", "quit")],
        );
    }
}

fn inner_line(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: 1,
    }
}

fn render_dish_list(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Dishes ")
        .border_style(Style::default().fg(Color::DarkGray));

    if app.menu.loading {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", components::spinner(app.loading_frame)),
                Style::default().fg(Color::Magenta),
            ),
            Span::styled("Loading dishes", Style::default().fg(Color::DarkGray)),
        ]);
        f.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    if let Some(error) = &app.menu.error {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", error),
                Style::default().fg(Color::Red),
            )))
            .wrap(Wrap { trim: true })
            .block(block),
            area,
        );
        return;
    }

    let dishes = app.menu.visible_dishes();
    if dishes.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " No matching dishes",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = dishes
        .iter()
        .enumerate()
        .map(|(index, dish)| dish_row(dish, index == app.menu.selected))
        .collect();

    let mut state = ListState::default().with_selected(Some(app.menu.selected));
    f.render_stateful_widget(List::new(items).block(block), area, &mut state);
}

fn dish_row(dish: &Dish, is_selected: bool) -> ListItem<'static> {
    let prefix = if is_selected { "> " } else { "  " };
    let secondary =
        components::selected_secondary_style(is_selected, Style::default().fg(Color::DarkGray));

    let mut spans = vec![
        Span::styled(format!(" {}", prefix), Style::default().fg(Color::DarkGray)),
        Span::styled(
            components::fit_to_width(&dish.name, NAME_COLUMN_WIDTH),
            components::selected_name_style(is_selected),
        ),
    ];
    if !dish.label.is_empty() {
        spans.push(Span::styled(
            format!(" [{}]", dish.label),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(format!("  {}", dish.category), secondary));
    spans.push(Span::styled(
        format!("  ${}", dish.price),
        Style::default().fg(Color::Green),
    ));
    ListItem::new(Line::from(spans))
}
