//
// ──────────────────────────────────────────────────────────
// Shared title/message rules for create and update forms
// ──────────────────────────────────────────────────────────
//

pub const TITLE_MIN_LEN: usize = 5;
pub const TITLE_MAX_LEN: usize = 100;
pub const MESSAGE_MIN_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopicFormError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title too short")]
    TitleTooShort,

    #[error("Title too long")]
    TitleTooLong,

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Message too short")]
    MessageTooShort,

    #[error("Invalid course id")]
    InvalidCourseId,
}

pub(super) fn validate_title(title: &str) -> Result<String, TopicFormError> {
    let title = title.trim();

    if title.is_empty() {
        return Err(TopicFormError::EmptyTitle);
    }

    let len = title.chars().count();
    if len < TITLE_MIN_LEN {
        return Err(TopicFormError::TitleTooShort);
    }
    if len > TITLE_MAX_LEN {
        return Err(TopicFormError::TitleTooLong);
    }

    Ok(title.to_string())
}

pub(super) fn validate_message(message: &str) -> Result<String, TopicFormError> {
    let message = message.trim();

    if message.is_empty() {
        return Err(TopicFormError::EmptyMessage);
    }
    if message.chars().count() < MESSAGE_MIN_LEN {
        return Err(TopicFormError::MessageTooShort);
    }

    Ok(message.to_string())
}
