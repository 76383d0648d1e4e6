use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct Course {
    pub course_id: String,
    pub title: Option<String>,
    pub classroom_id: Option<String>,
    pub start_date: Option<NaiveDate>,
}

/// One submission a student made for a course session. `session_label`
/// is absent for single-session courses.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub session_label: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Per-session deadline for a course. The upstream store keeps deadlines
/// as text, so the raw string is surfaced and parsed at evaluation time.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DeadlineEntry {
    pub session_label: String,
    pub deadline: Option<String>,
}
