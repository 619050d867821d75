use crate::app::{App, AppMode, DishEvent, TextInput};
use crate::services::comments::{CommentDraft, submit_comment};
use crate::services::validation::{CommentFields, FormField, validate};
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
pub const DEFAULT_RATING: u8 = 5;

/// State of the "add a comment" form
///
/// Error messages are recomputed after every edit and only kept for fields
/// the user has already changed.
#[derive(Debug, Clone)]
pub struct CommentForm {
    pub author: TextInput,
    pub comment: TextInput,
    pub rating: Option<u8>,
    pub focus: FormField,
    dirty: BTreeSet<FormField>,
    errors: BTreeMap<FormField, String>,
}

impl Default for CommentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentForm {
    pub fn new() -> Self {
        Self {
            author: TextInput::new(),
            comment: TextInput::new(),
            rating: Some(DEFAULT_RATING),
            focus: FormField::Author,
            dirty: BTreeSet::new(),
            errors: BTreeMap::new(),
        }
    }

    /// Back to an empty author and comment with the default rating
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn fields(&self) -> CommentFields<'_> {
        CommentFields {
            author: self.author.content(),
            comment: self.comment.content(),
            rating: self.rating,
        }
    }

    fn on_value_changed(&mut self, field: FormField) {
        self.dirty.insert(field);
        let mut errors = validate(&self.fields());
        errors.retain(|field, _| self.dirty.contains(field));
        self.errors = errors;
    }

    #[must_use]
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        validate(&self.fields()).is_empty()
    }

    /// Form values ready for submission, or `None` while the form is invalid
    #[must_use]
    pub fn draft(&self) -> Option<CommentDraft> {
        if !self.is_valid() {
            return None;
        }
        Some(CommentDraft {
            author: self.author.content().to_string(),
            comment: self.comment.content().to_string(),
            rating: self.rating?,
        })
    }

    fn focused_text(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FormField::Author => Some(&mut self.author),
            FormField::Comment => Some(&mut self.comment),
            FormField::Rating => None,
        }
    }

    pub fn insert_char(&mut self, character: char) {
        let focus = self.focus;
        if let Some(input) = self.focused_text() {
            input.insert(character);
            self.on_value_changed(focus);
        }
    }

    pub fn backspace(&mut self) {
        let focus = self.focus;
        if let Some(input) = self.focused_text() {
            input.backspace();
            self.on_value_changed(focus);
        }
    }

    pub fn delete(&mut self) {
        let focus = self.focus;
        if let Some(input) = self.focused_text() {
            input.delete();
            self.on_value_changed(focus);
        }
    }

    /// Left arrow: moves the text cursor, or lowers the rating on the slider
    pub fn left(&mut self) {
        match self.focused_text() {
            Some(input) => input.move_left(),
            None => self.set_rating(self.rating.map_or(MIN_RATING, |r| r.saturating_sub(1))),
        }
    }

    /// Right arrow: moves the text cursor, or raises the rating on the slider
    pub fn right(&mut self) {
        match self.focused_text() {
            Some(input) => input.move_right(),
            None => self.set_rating(self.rating.map_or(MAX_RATING, |r| r.saturating_add(1))),
        }
    }

    pub fn home(&mut self) {
        if let Some(input) = self.focused_text() {
            input.move_to_start();
        }
    }

    pub fn end(&mut self) {
        if let Some(input) = self.focused_text() {
            input.move_to_end();
        }
    }

    pub fn set_rating(&mut self, rating: u8) {
        self.rating = Some(rating.clamp(MIN_RATING, MAX_RATING));
        self.on_value_changed(FormField::Rating);
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Author => FormField::Comment,
            FormField::Comment => FormField::Rating,
            FormField::Rating => FormField::Author,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            FormField::Author => FormField::Rating,
            FormField::Comment => FormField::Author,
            FormField::Rating => FormField::Comment,
        };
    }
}

impl App {
    pub fn open_comment_form(&mut self) {
        if self.detail.dish_copy.is_none() || self.detail.submitting {
            return;
        }
        self.mode = AppMode::CommentForm;
    }

    pub fn close_comment_form(&mut self) {
        self.mode = AppMode::DishDetail;
    }

    /// Sends the comment with the working copy to the store and resets the form
    pub fn submit_comment_form(&mut self) {
        let Some(draft) = self.comment_form.draft() else {
            self.show_status_toast("FORM INVALID");
            return;
        };
        let Some(working_copy) = self.detail.dish_copy.clone() else {
            return;
        };

        self.detail.submitting = true;
        let request = self.detail.request;
        debug!(dish = %working_copy.id, request, "posting comment");
        self.spawn_request(move |service| DishEvent::DishUpdated {
            request,
            result: submit_comment(service, working_copy, draft, Utc::now()),
        });

        self.comment_form.reset();
        self.mode = AppMode::DishDetail;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{app_with, settle};
    use crate::dishes::memory::MemoryDishService;

    fn type_text(form: &mut CommentForm, text: &str) {
        text.chars().for_each(|c| form.insert_char(c));
    }

    fn filled_form() -> CommentForm {
        let mut form = CommentForm::new();
        type_text(&mut form, "Jo");
        form.focus_next();
        type_text(&mut form, "Great!");
        form.focus_next();
        form.set_rating(4);
        form
    }

    #[test]
    fn test_new_form_shows_no_errors_but_is_invalid() {
        let form = CommentForm::new();
        assert_eq!(form.error(FormField::Author), None);
        assert_eq!(form.error(FormField::Comment), None);
        assert!(!form.is_valid());
        assert_eq!(form.rating, Some(DEFAULT_RATING));
    }

    #[test]
    fn test_errors_only_for_touched_fields() {
        let mut form = CommentForm::new();
        form.insert_char('J');
        assert_eq!(
            form.error(FormField::Author),
            Some("Name must be at least 2 characters long.")
        );
        assert_eq!(form.error(FormField::Comment), None);

        form.backspace();
        assert_eq!(form.error(FormField::Author), Some("Name is required."));
    }

    #[test]
    fn test_rating_slider_is_clamped() {
        let mut form = CommentForm::new();
        form.focus_previous();
        assert_eq!(form.focus, FormField::Rating);
        form.right();
        assert_eq!(form.rating, Some(MAX_RATING));
        for _ in 0..10 {
            form.left();
        }
        assert_eq!(form.rating, Some(MIN_RATING));
    }

    #[test]
    fn test_draft_preserves_values() {
        let draft = filled_form().draft().unwrap();
        assert_eq!(draft.author, "Jo");
        assert_eq!(draft.comment, "Great!");
        assert_eq!(draft.rating, 4);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = filled_form();
        form.reset();
        assert!(form.author.is_empty());
        assert!(form.comment.is_empty());
        assert_eq!(form.rating, Some(DEFAULT_RATING));
        assert_eq!(form.focus, FormField::Author);
    }

    #[test]
    fn test_submit_appends_comment_to_dish() {
        let (mut app, service) = app_with(MemoryDishService::with_dishes(2));
        app.open_dish_detail("0");
        settle(&mut app, 2);
        app.open_comment_form();
        assert_eq!(app.mode, AppMode::CommentForm);
        app.comment_form = filled_form();

        app.submit_comment_form();
        assert!(app.detail.submitting);
        assert!(app.comment_form.author.is_empty());
        assert_eq!(app.mode, AppMode::DishDetail);
        settle(&mut app, 1);

        let dish = app.detail.dish.clone().unwrap();
        assert_eq!(dish.comments.len(), 1);
        let comment = &dish.comments[0];
        assert_eq!(
            (comment.author.as_str(), comment.comment.as_str(), comment.rating),
            ("Jo", "Great!", 4)
        );
        assert!(!comment.date.is_empty());
        assert_eq!(app.detail.dish_copy, app.detail.dish);
        assert_eq!(service.stored("0").unwrap().comments.len(), 1);
        assert_eq!(app.status_toast_message(), Some("COMMENT POSTED"));
    }

    #[test]
    fn test_invalid_form_is_not_submitted() {
        let (mut app, _) = app_with(MemoryDishService::with_dishes(1));
        app.open_dish_detail("0");
        settle(&mut app, 2);
        app.open_comment_form();

        app.submit_comment_form();

        assert!(!app.detail.submitting);
        assert_eq!(app.mode, AppMode::CommentForm);
        assert_eq!(app.status_toast_message(), Some("FORM INVALID"));
    }

    #[test]
    fn test_failed_submit_clears_dish_and_copy() {
        let (mut app, service) = app_with(MemoryDishService::with_dishes(1));
        app.open_dish_detail("0");
        settle(&mut app, 2);
        app.comment_form = filled_form();
        service.fail_with("500 - Internal Server Error");

        app.submit_comment_form();
        settle(&mut app, 1);

        assert_eq!(app.detail.dish, None);
        assert_eq!(app.detail.dish_copy, None);
        assert_eq!(app.detail.error.as_deref(), Some("500 - Internal Server Error"));
    }

    #[test]
    fn test_form_needs_a_loaded_dish() {
        let (mut app, _) = app_with(MemoryDishService::with_dishes(1));
        app.open_comment_form();
        assert_eq!(app.mode, AppMode::Menu);
    }
}
