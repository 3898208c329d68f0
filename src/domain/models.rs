use crate::domain::constants::{DEFAULT_DISPLAY_NAME, MAX_COMMENT_CHARS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// A stored comment. Immutable once created; field names follow the wire
/// contract (camelCase).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub person_key: String,
    pub name: String,
    pub text: String,
    pub timestamp: String,
}

/// A validated submission waiting for the store to assign its id.
#[derive(Debug, Clone)]
pub struct CommentDraft {
    pub person_key: String,
    pub name: String,
    pub text: String,
    pub timestamp: String,
}

/// Persisted board state: one ordered thread per person key, plus the
/// sequence counter backing id assignment.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct BoardState {
    #[serde(default)]
    pub next_seq: u64,
    #[serde(default)]
    pub threads: BTreeMap<String, Vec<Comment>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PolicyFile {
    #[serde(default)]
    pub general: PolicyGeneral,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolicyGeneral {
    #[serde(default = "default_max_comment_chars")]
    pub max_comment_chars: usize,
    #[serde(default)]
    pub blocked_phrases: Vec<String>,
    #[serde(default = "default_display_name")]
    pub default_name: String,
}

fn default_max_comment_chars() -> usize {
    MAX_COMMENT_CHARS
}

fn default_display_name() -> String {
    DEFAULT_DISPLAY_NAME.to_string()
}

impl Default for PolicyGeneral {
    fn default() -> Self {
        Self {
            max_comment_chars: default_max_comment_chars(),
            blocked_phrases: Vec::new(),
            default_name: default_display_name(),
        }
    }
}
