use std::collections::BTreeMap;

/// Input fields of the comment form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Author,
    Comment,
    Rating,
}

impl FormField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FormField::Author => "Name",
            FormField::Comment => "Comment",
            FormField::Rating => "Rating",
        }
    }
}

/// Current values of the comment form
#[derive(Debug, Clone, Copy)]
pub struct CommentFields<'a> {
    pub author: &'a str,
    pub comment: &'a str,
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
}

const RULES: &[(FormField, Rule, &str)] = &[
    (FormField::Author, Rule::Required, "Name is required."),
    (
        FormField::Author,
        Rule::MinLength(2),
        "Name must be at least 2 characters long.",
    ),
    (
        FormField::Author,
        Rule::MaxLength(25),
        "Name cannot be more than 25 characters long.",
    ),
    (FormField::Comment, Rule::Required, "Comment is required."),
    (FormField::Rating, Rule::Required, "Rating is required."),
];

impl Rule {
    /// Length rules only apply to non-empty values; emptiness is the job of `Required`.
    fn is_broken_by(self, value: Option<&str>) -> bool {
        let length = value.map_or(0, |text| text.chars().count());
        match self {
            Rule::Required => value.is_none_or(str::is_empty),
            Rule::MinLength(min) => length > 0 && length < min,
            Rule::MaxLength(max) => length > max,
        }
    }
}

/// Validates every field and returns the message for each invalid one.
///
/// A field breaking several rules gets their messages joined by a space.
#[must_use]
pub fn validate(fields: &CommentFields) -> BTreeMap<FormField, String> {
    let rating_text = fields.rating.map(|rating| rating.to_string());
    let mut errors: BTreeMap<FormField, String> = BTreeMap::new();

    for &(field, rule, message) in RULES {
        let value = match field {
            FormField::Author => Some(fields.author),
            FormField::Comment => Some(fields.comment),
            FormField::Rating => rating_text.as_deref(),
        };
        if rule.is_broken_by(value) {
            errors
                .entry(field)
                .and_modify(|existing| {
                    existing.push(' ');
                    existing.push_str(message);
                })
                .or_insert_with(|| message.to_string());
        }
    }

    errors
}
