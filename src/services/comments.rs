use crate::dishes::{Comment, Dish, DishService, RemoteError};
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

/// Comment form values captured at submission time
#[derive(Debug, Clone, PartialEq)]
pub struct CommentDraft {
    pub author: String,
    pub comment: String,
    pub rating: u8,
}

/// Formats `date` the way browsers print `Date.toISOString()`
#[must_use]
pub fn iso_timestamp(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Stamps the draft with `date` and appends it to the dish's comment list.
///
/// No validation happens here; callers gate submission on the form state.
pub fn append_comment(dish: &mut Dish, draft: CommentDraft, date: DateTime<Utc>) {
    dish.comments.push(Comment {
        rating: draft.rating,
        comment: draft.comment,
        author: draft.author,
        date: iso_timestamp(date),
    });
}

/// Appends the draft to a working copy and sends the copy back to the store
pub fn submit_comment(
    service: &dyn DishService,
    mut working_copy: Dish,
    draft: CommentDraft,
    date: DateTime<Utc>,
) -> Result<Dish, RemoteError> {
    append_comment(&mut working_copy, draft, date);
    info!(
        dish = %working_copy.id,
        comments = working_copy.comments.len(),
        "submitting comment"
    );
    service.update_dish(&working_copy)
}
