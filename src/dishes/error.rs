use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a fetch or update against the dish API
///
/// The only thing callers do with it is show it, so it keeps just the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RemoteError {
    message: String,
}

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Builds the message for a non-success HTTP response as `"{status} - {reason} {body}"`
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let reason = status.canonical_reason().unwrap_or_default();
        let message = format!("{} - {} {}", status.as_u16(), reason, body.trim());
        Self::new(message.trim_end())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => Self::from_status(status, ""),
            None => Self::new(error.to_string()),
        }
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(format!("Malformed response: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_format() {
        let error = RemoteError::from_status(StatusCode::NOT_FOUND, "{}");
        assert_eq!(error.to_string(), "404 - Not Found {}");
    }

    #[test]
    fn test_status_message_without_body() {
        let error = RemoteError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "  ");
        assert_eq!(error.message(), "500 - Internal Server Error");
    }

    #[test]
    fn test_decode_error_is_wrapped() {
        let parse_error = serde_json::from_str::<u8>("nope").unwrap_err();
        let error = RemoteError::from(parse_error);
        assert!(error.message().starts_with("Malformed response:"));
    }
}
