use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// One to-do entry. Identity is positional: a task has no id of its
/// own and its 1-based position shifts when earlier entries are
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    pub done: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
}

impl Task {
    pub fn new<D: Into<String>>(description: D) -> Self {
        Self {
            description: description.into(),
            done: false,
            created_at: OffsetDateTime::now_utc(),
            completed_at: None,
        }
    }
}

/// RFC 3339 rendering used by the verbose view. Formatting a valid
/// datetime only fails for out-of-range years, in which case the
/// Display form is close enough.
pub fn format_timestamp(value: &OffsetDateTime) -> String {
    value
        .format(&Rfc3339)
        .unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::{Task, format_timestamp};
    use time::macros::datetime;

    #[test]
    fn new_task_is_pending_and_unstamped() {
        let task = Task::new("demo");

        assert_eq!(task.description, "demo");
        assert!(!task.done);
        assert_eq!(task.completed_at, None);
    }

    #[test]
    fn format_timestamp_renders_rfc3339() {
        let value = datetime!(2025-12-20 00:00:00 UTC);
        assert_eq!(format_timestamp(&value), "2025-12-20T00:00:00Z");
    }
}
