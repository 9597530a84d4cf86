use crate::models::{Session, Timestamp};
use crate::text::slugify;

const UNKNOWN_DATE: &str = "unknown-date";
const UNKNOWN_FILE_TIME: &str = "00-00";
const UNKNOWN_TURN_TIME: &str = "??:??";

fn session_date(started_at: Option<&Timestamp>) -> String {
    started_at.map_or_else(|| UNKNOWN_DATE.to_string(), |ts| ts.format("%Y-%m-%d").to_string())
}

fn session_file_time(started_at: Option<&Timestamp>) -> String {
    started_at.map_or_else(|| UNKNOWN_FILE_TIME.to_string(), |ts| ts.format("%H-%M").to_string())
}

/// `session_<YYYY-MM-DD>_<HH-MM>_<slug>.txt`
pub fn output_filename(session: &Session) -> String {
    let started_at = session.started_at.as_ref();
    format!(
        "session_{}_{}_{}.txt",
        session_date(started_at),
        session_file_time(started_at),
        slugify(&session.title)
    )
}

/// Plain-text transcript: header block, then one block per turn
pub fn render_session(session: &Session) -> String {
    let started_at = session.started_at.as_ref();
    let mut lines: Vec<String> = Vec::with_capacity(6 + session.turns.len() * 3);

    lines.push(format!("=== Session: {} ===", session.title));
    lines.push(format!(
        "Date: {} {}",
        session_date(started_at),
        session_file_time(started_at).replace('-', ":")
    ));
    if let Some(project) = &session.project_path {
        lines.push(format!("Project: {}", project));
    }
    if let Some(id) = &session.id {
        lines.push(format!("Session ID: {}", id));
    }
    lines.push(format!("Messages: {}", session.turns.len()));
    lines.push("===\n".to_string());

    for turn in &session.turns {
        let time = turn
            .timestamp
            .map_or_else(|| UNKNOWN_TURN_TIME.to_string(), |ts| ts.format("%H:%M").to_string());
        lines.push(format!("[{}] {}:", time, turn.speaker()));
        lines.push(turn.text.clone());
        lines.push(String::new());
    }

    lines.join("\n")
}
