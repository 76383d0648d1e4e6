use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::db::{DeadlineEntry, SubmissionRecord};
use crate::pdf::{self, CertificateText};

use super::{eligibility, roster, IssueError};

#[derive(Debug)]
pub struct IssuedCertificate {
    pub filename: String,
    pub bytes: Vec<u8>,
}

fn generate_serial() -> String {
    format!(
        "{}_{}",
        Utc::now().format("%Y%m%d"),
        &Uuid::new_v4().to_string()[..8]
    )
}

/// Pure issuance core over already-fetched data: decides eligibility and,
/// on success, renders the certificate. Fetching and HTTP concerns stay in
/// the route handler.
pub fn issue(
    course_id: &str,
    classroom_id: &str,
    start_date: NaiveDate,
    submissions: &[SubmissionRecord],
    deadlines: &[DeadlineEntry],
) -> Result<IssuedCertificate, IssueError> {
    if submissions.is_empty() {
        return Err(IssueError::NoSubmissions);
    }

    let required = roster::required_session_count(classroom_id);
    let result = eligibility::evaluate(submissions, deadlines, required);
    tracing::info!(
        course_id,
        classroom_id,
        required,
        completed = result.completed,
        eligible = result.eligible,
        "eligibility evaluated"
    );
    if !result.eligible {
        return Err(IssueError::Ineligible);
    }
    let period_end = result.latest_completed_at.ok_or(IssueError::Ineligible)?;

    let period_start = start_date.format("%Y-%m-%d").to_string();
    let period_end = period_end.format("%Y-%m-%d").to_string();
    let issued_on = Utc::now().format("%Y-%m-%d").to_string();
    let serial = generate_serial();

    let bytes = pdf::generate_certificate(&CertificateText {
        period_start: &period_start,
        period_end: &period_end,
        issued_on: &issued_on,
        serial: &serial,
    });

    Ok(IssuedCertificate {
        filename: format!("certificate-{course_id}.pdf"),
        bytes,
    })
}
