use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SEPARATOR: &str = "  ";
const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Configuration for text input rendering
pub struct TextInputConfig<'a> {
    pub content: &'a str,
    pub title: &'a str,
    pub focused: bool,
    pub cursor_position: usize,
    pub error: Option<&'a str>,
}

impl<'a> TextInputConfig<'a> {
    pub fn new(content: &'a str, title: &'a str) -> Self {
        Self {
            content,
            title,
            focused: false,
            cursor_position: content.chars().count(),
            error: None,
        }
    }

    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn with_cursor_position(mut self, cursor_position: usize) -> Self {
        self.cursor_position = cursor_position;
        self
    }

    pub fn with_error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }
}

/// Renders a bordered single-line input; the border turns red while the field has an error
pub fn render_text_input(frame: &mut Frame, area: Rect, config: TextInputConfig) {
    let inner_width = area.width.saturating_sub(4).max(1) as usize;
    let length = config.content.chars().count();
    let cursor = config.cursor_position.min(length);
    let start = cursor.saturating_sub(inner_width.saturating_sub(1));
    let before: String = config.content.chars().skip(start).take(cursor - start).collect();
    let after: String = config
        .content
        .chars()
        .skip(cursor)
        .take(inner_width.saturating_sub(cursor - start + 1))
        .collect();

    let prompt_color = if config.focused { Color::Cyan } else { Color::DarkGray };
    let mut spans = vec![
        Span::styled("> ", Style::default().fg(prompt_color)),
        Span::styled(before, Style::default().fg(Color::White)),
    ];
    if config.focused {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    spans.push(Span::styled(after, Style::default().fg(Color::White)));

    let border_color = match (config.error.is_some(), config.focused) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(Span::styled(
                    format!(" {} ", config.title),
                    Style::default().fg(prompt_color),
                )))
                .border_style(Style::default().fg(border_color)),
        ),
        area,
    );
}

/// Title bar shared by every view
pub fn render_view_header(frame: &mut Frame, area: Rect, title: &str) {
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "Ristorante con Fusion",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ", Style::default().fg(Color::DarkGray)),
            Span::styled(title.to_string(), Style::default().fg(Color::Cyan)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Left),
        area,
    );
}

pub fn selected_name_style(is_selected: bool) -> Style {
    if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

pub fn selected_secondary_style(is_selected: bool, base: Style) -> Style {
    if is_selected {
        base.fg(Color::Gray)
    } else {
        base
    }
}

/// Spinner glyph for the given animation frame
pub fn spinner(frame: u8) -> &'static str {
    SPINNER_FRAMES
        .get(usize::from(frame) % SPINNER_FRAMES.len())
        .copied()
        .unwrap_or("")
}

/// Rating drawn as filled and empty stars out of five
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Fits `text` into exactly `width` terminal columns, cutting with an ellipsis when too wide
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return format!("{}{}", text, " ".repeat(width - text.width()));
    }

    let mut fitted = String::new();
    let mut used = 0;
    for character in text.chars() {
        let char_width = character.width().unwrap_or(0);
        if used + char_width + 1 > width {
            break;
        }
        fitted.push(character);
        used += char_width;
    }
    if width > 0 {
        fitted.push('…');
        used += 1;
    }
    fitted.push_str(&" ".repeat(width.saturating_sub(used)));
    fitted
}

/// Renders a footer with mode indicator and keybindings
pub fn render_navigation_footer(
    f: &mut Frame,
    area: Rect,
    mode: &str,
    keybindings: &[(&str, &str)],
) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", mode),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    for &(key, desc) in keybindings {
        spans.push(Span::raw(SEPARATOR));
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

pub fn render_status_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast = Paragraph::new(Line::from(vec![Span::styled(
        format!(" {} ", message),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Right);

    frame.render_widget(toast, area);
}
