use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::cert::{self, IssueError};
use crate::state::AppState;

impl IntoResponse for IssueError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

#[derive(Deserialize)]
pub struct CertificateQuery {
    course_id: Option<String>,
    student_id: Option<String>,
    classroom_id: Option<String>,
}

/// GET /certificates — validate parameters, gather course data, and stream
/// the certificate back as an attachment.
pub async fn issue_certificate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CertificateQuery>,
) -> Response {
    let (course_id, student_id, classroom_id) = match required_params(&query) {
        Ok(params) => params,
        Err(e) => return e.into_response(),
    };

    let start_date = match crate::db::get_course(state.pool.as_ref(), course_id).await {
        Ok(Some(course)) => match course.start_date {
            Some(d) => d,
            None => return IssueError::CourseUnavailable.into_response(),
        },
        Ok(None) => return IssueError::CourseUnavailable.into_response(),
        Err(e) => {
            tracing::error!("course fetch failed: {}", e);
            return IssueError::CourseUnavailable.into_response();
        }
    };

    let submissions =
        match crate::db::get_submissions(state.pool.as_ref(), course_id, student_id).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("submission fetch failed: {}", e);
                return IssueError::SubmissionsUnavailable.into_response();
            }
        };

    let deadlines = match crate::db::get_deadlines(state.pool.as_ref(), course_id).await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("deadline fetch failed: {}", e);
            return IssueError::DeadlinesUnavailable.into_response();
        }
    };

    match cert::issue(course_id, classroom_id, start_date, &submissions, &deadlines) {
        Ok(issued) => Response::builder()
            .header("Content-Type", "application/pdf")
            .header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", issued.filename),
            )
            .body(axum::body::Body::from(issued.bytes))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
            .into_response(),
        Err(e) => e.into_response(),
    }
}

fn required_params(query: &CertificateQuery) -> Result<(&str, &str, &str), IssueError> {
    fn nonempty(v: &Option<String>) -> Option<&str> {
        v.as_deref().filter(|s| !s.is_empty())
    }
    match (
        nonempty(&query.course_id),
        nonempty(&query.student_id),
        nonempty(&query.classroom_id),
    ) {
        (Some(c), Some(s), Some(cl)) => Ok((c, s, cl)),
        _ => Err(IssueError::MissingParameter),
    }
}
