use std::collections::{HashMap, HashSet};

use super::{ConvertError, SessionHeader};
use crate::models::{CandidateTurn, Role, Session, Turn};
use crate::text::{derive_title, normalize};

/// Per-run assembly state
///
/// Tracks which session ids were already converted and the first-seen casing of
/// every agent name. One instance lives for one run and is dropped with it.
#[derive(Debug, Default)]
pub struct Assembler {
    processed_sessions: HashSet<String>,
    agent_names: HashMap<String, String>,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_processed(&self, session_id: &str) -> bool {
        self.processed_sessions.contains(session_id)
    }

    pub fn processed_count(&self) -> usize {
        self.processed_sessions.len()
    }

    /// Display name for a raw agent identifier
    ///
    /// Takes the last hyphen-delimited segment (`Planner-Sisyphus` → `Sisyphus`) and
    /// returns the casing it had the first time it was seen in this run.
    pub fn agent_display_name(&mut self, raw: &str) -> Option<String> {
        let base = raw.rsplit('-').next().unwrap_or(raw).trim();
        if base.is_empty() {
            return None;
        }

        let name = self.agent_names.entry(base.to_lowercase()).or_insert_with(|| base.to_string());
        Some(name.clone())
    }

    /// Turn filtered candidates into a session, or explain why not
    ///
    /// On success the session id is recorded, so a later session with the same id is
    /// rejected as [`ConvertError::Duplicate`].
    pub fn assemble(
        &mut self,
        header: SessionHeader,
        mut candidates: Vec<CandidateTurn>,
        sort_turns: bool,
    ) -> Result<Session, ConvertError> {
        if let Some(id) = &header.id
            && self.is_processed(id)
        {
            return Err(ConvertError::Duplicate(id.clone()));
        }
        if candidates.is_empty() {
            return Err(ConvertError::NoTurns);
        }

        if sort_turns {
            // Stable: equal timestamps keep their load order
            candidates.sort_by_key(|c| c.timestamp);
        }

        let turns: Vec<Turn> = candidates
            .into_iter()
            .map(|candidate| {
                let agent = match candidate.role {
                    Role::Assistant => {
                        candidate.agent.as_deref().and_then(|raw| self.agent_display_name(raw))
                    }
                    Role::User => None,
                };
                Turn {
                    role: candidate.role,
                    text: normalize(&candidate.text),
                    timestamp: candidate.timestamp,
                    agent,
                }
            })
            .collect();

        let first_user_text = turns.iter().find(|t| t.role == Role::User).map(|t| t.text.as_str());
        let title = derive_title(header.title.as_deref(), first_user_text);

        if let Some(id) = &header.id {
            self.processed_sessions.insert(id.clone());
        }

        Ok(Session {
            id: header.id,
            started_at: header.started_at,
            title,
            project_path: header.project_path,
            turns,
        })
    }
}
