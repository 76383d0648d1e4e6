use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

use crate::db::{DeadlineEntry, SubmissionRecord};

/// Label assumed for submissions that carry none (single-session courses).
pub const DEFAULT_SESSION_LABEL: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eligibility {
    pub completed: usize,
    pub eligible: bool,
    /// Most recent on-time submission; the certificate's period end.
    pub latest_completed_at: Option<DateTime<Utc>>,
}

impl Eligibility {
    fn ineligible() -> Self {
        Self {
            completed: 0,
            eligible: false,
            latest_completed_at: None,
        }
    }
}

/// Reconcile a student's submissions against the course's per-session
/// deadlines. A session counts once, no matter how many qualifying
/// submissions it has, and only if a submission landed at or before its
/// deadline. Sessions without a known deadline are never credited.
pub fn evaluate(
    submissions: &[SubmissionRecord],
    deadlines: &[DeadlineEntry],
    required: usize,
) -> Eligibility {
    // An empty history can never be eligible, whatever the required count.
    if submissions.is_empty() {
        return Eligibility::ineligible();
    }

    let mut due: HashMap<&str, DateTime<Utc>> = HashMap::new();
    for entry in deadlines {
        let Some(raw) = entry.deadline.as_deref() else {
            continue;
        };
        if raw.is_empty() {
            continue;
        }
        // Unparseable deadlines are skipped, which routes their sessions
        // into the never-credited branch below.
        if let Ok(deadline) = raw.parse::<DateTime<Utc>>() {
            due.insert(entry.session_label.as_str(), deadline);
        }
    }

    let mut completed: HashSet<&str> = HashSet::new();
    let mut latest: Option<DateTime<Utc>> = None;
    for submission in submissions {
        let label = submission
            .session_label
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_SESSION_LABEL);
        let Some(deadline) = due.get(label) else {
            continue;
        };
        // At the deadline instant still counts.
        if submission.submitted_at <= *deadline {
            completed.insert(label);
            if latest.map_or(true, |t| submission.submitted_at > t) {
                latest = Some(submission.submitted_at);
            }
        }
    }

    Eligibility {
        completed: completed.len(),
        eligible: completed.len() >= required,
        latest_completed_at: latest,
    }
}
