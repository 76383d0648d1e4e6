pub mod eligibility;
pub mod issue;
pub mod roster;

pub use eligibility::{evaluate, Eligibility};
pub use issue::{issue, IssuedCertificate};
pub use roster::required_session_count;

use thiserror::Error;

/// Everything that can stop an issuance. All variants are terminal for the
/// request and map to a fixed user-facing message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IssueError {
    #[error("잘못된 요청입니다.")]
    MissingParameter,
    #[error("강의 정보를 불러오지 못했습니다.")]
    CourseUnavailable,
    #[error("제출 기록을 불러오지 못했습니다.")]
    SubmissionsUnavailable,
    #[error("마감일 정보를 불러오지 못했습니다.")]
    DeadlinesUnavailable,
    #[error("제출 기록이 없어 수료증을 발급할 수 없습니다.")]
    NoSubmissions,
    #[error("모든 세션을 완료해야 수료증을 발급할 수 있습니다.")]
    Ineligible,
}
