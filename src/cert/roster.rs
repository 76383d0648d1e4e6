use std::collections::HashMap;
use std::sync::OnceLock;

// Classroom -> required on-time session count. Some classrooms are keyed
// under both their Latin-script and Korean-script names.
static REQUIRED_SESSIONS: OnceLock<HashMap<&'static str, usize>> = OnceLock::new();

fn table() -> &'static HashMap<&'static str, usize> {
    REQUIRED_SESSIONS.get_or_init(|| {
        HashMap::from([
            ("candyma", 10),
            ("캔디마을", 10),
            ("moonstudy", 8),
            ("달빛스터디", 8),
        ])
    })
}

/// Required session count for a classroom: lowercased key first, then the
/// verbatim key, then the single-session default.
pub fn required_session_count(classroom_id: &str) -> usize {
    let map = table();
    map.get(classroom_id.to_lowercase().as_str())
        .or_else(|| map.get(classroom_id))
        .copied()
        .unwrap_or(1)
}
