use std::fmt;

use chrono::{DateTime, FixedOffset};

/// Point in time carried by a record, kept in the offset it was written with
pub type Timestamp = DateTime<FixedOffset>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Parse a raw role string; anything other than `user`/`assistant` is not conversational
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("User"),
            Role::Assistant => f.write_str("Assistant"),
        }
    }
}

/// Text extracted from a record that survived filtering but is not yet normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTurn {
    pub role: Role,
    pub text: String,
    pub timestamp: Option<Timestamp>,
    /// Raw agent identifier as recorded by the source (e.g. `Planner-Sisyphus`)
    pub agent: Option<String>,
}

/// One retained, normalized unit of dialogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    pub timestamp: Option<Timestamp>,
    /// Display name of the agent, already resolved to its first-seen casing
    pub agent: Option<String>,
}

impl Turn {
    /// Speaker label: `User`, `Assistant`, or `Assistant (<agent>)`
    pub fn speaker(&self) -> String {
        match (&self.role, &self.agent) {
            (Role::Assistant, Some(agent)) => format!("Assistant ({})", agent),
            (role, _) => role.to_string(),
        }
    }
}

/// A fully assembled session ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: Option<String>,
    pub started_at: Option<Timestamp>,
    pub title: String,
    pub project_path: Option<String>,
    pub turns: Vec<Turn>,
}
