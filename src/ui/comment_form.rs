use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, CommentForm};
use crate::services::validation::FormField;
use crate::ui::components::{self, TextInputConfig};
use crate::ui::utils::centered_rect;

/// Comment form drawn over the dish detail view
pub fn render_comment_form(f: &mut Frame, app: &App) {
    let area = centered_rect(70, 80, f.area());
    f.render_widget(Clear, area);

    let form = &app.comment_form;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Add a comment ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Author
            Constraint::Length(1), // Author error
            Constraint::Length(3), // Rating
            Constraint::Length(3), // Comment
            Constraint::Length(1), // Comment error
            Constraint::Min(0),    // Preview
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    if let [author, author_error, rating, comment, comment_error, preview, hints] = &chunks[..] {
        render_field(f, form, FormField::Author, *author);
        render_error(f, form.error(FormField::Author), *author_error);
        render_rating(f, form, *rating);
        render_field(f, form, FormField::Comment, *comment);
        render_error(
            f,
            form.error(FormField::Comment).or(form.error(FormField::Rating)),
            *comment_error,
        );
        render_preview(f, form, *preview);
        render_hints(f, form, *hints);
    }
}

fn render_field(f: &mut Frame, form: &CommentForm, field: FormField, area: Rect) {
    let input = match field {
        FormField::Author => &form.author,
        FormField::Comment | FormField::Rating => &form.comment,
    };
    components::render_text_input(
        f,
        area,
        TextInputConfig::new(input.content(), field.label())
            .with_focus(form.focus == field)
            .with_cursor_position(input.cursor_position())
            .with_error(form.error(field)),
    );
}

fn render_error(f: &mut Frame, error: Option<&str>, area: Rect) {
    if let Some(error) = error {
        f.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", error),
                Style::default().fg(Color::Red),
            )),
            area,
        );
    }
}

fn render_rating(f: &mut Frame, form: &CommentForm, area: Rect) {
    let focused = form.focus == FormField::Rating;
    let color = if focused { Color::Cyan } else { Color::DarkGray };
    let rating = form.rating.unwrap_or_default();
    let line = Line::from(vec![
        Span::styled(if focused { " ◀ " } else { "   " }, Style::default().fg(color)),
        Span::styled(components::stars(rating), Style::default().fg(Color::Yellow)),
        Span::styled(if focused { " ▶ " } else { "   " }, Style::default().fg(color)),
        Span::styled(format!(" {}", rating), Style::default().fg(Color::White)),
    ]);
    f.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Rating ", Style::default().fg(color)))
                .border_style(Style::default().fg(color)),
        ),
        area,
    );
}

/// Shows the comment as it will appear once the form is valid
fn render_preview(f: &mut Frame, form: &CommentForm, area: Rect) {
    let Some(draft) = form.draft() else {
        return;
    };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            components::stars(draft.rating),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(draft.comment, Style::default().fg(Color::White))),
        Line::from(Span::styled(
            format!("-- {}", draft.author),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_hints(f: &mut Frame, form: &CommentForm, area: Rect) {
    let submit_style = if form.is_valid() {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", submit_style),
            Span::styled(" submit  ", Style::default().fg(Color::White)),
            Span::styled(" Tab ", Style::default().fg(Color::Black).bg(Color::Yellow)),
            Span::styled(" next field  ", Style::default().fg(Color::White)),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Yellow)),
            Span::styled(" cancel", Style::default().fg(Color::White)),
        ])),
        area,
    );
}
