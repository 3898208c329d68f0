use crate::domain::models::{Comment, CommentDraft, PolicyGeneral};
use crate::filter;
use crate::services::storage::{unix_now, CommentStore};
use std::collections::BTreeMap;

#[derive(thiserror::Error, Debug)]
pub enum CommentError {
    #[error("comment rejected: {}", .violations.join(", "))]
    Validation { violations: Vec<String> },
    #[error("comment text is empty")]
    Empty,
    #[error("comment exceeds {max} characters (got {len})")]
    TooLong { len: usize, max: usize },
    #[error("comment store unavailable: {0}")]
    Unavailable(String),
}

impl CommentError {
    pub fn code(&self) -> &'static str {
        match self {
            CommentError::Validation { .. } | CommentError::TooLong { .. } => "VALIDATION",
            CommentError::Empty => "EMPTY_COMMENT",
            CommentError::Unavailable(_) => "UNAVAILABLE",
        }
    }

    pub fn violations(&self) -> &[String] {
        match self {
            CommentError::Validation { violations } => violations,
            _ => &[],
        }
    }
}

/// The authoritative gate in front of the store. Client-side screening is
/// advisory only; every submission is re-checked here with the same rules.
pub struct CommentBoard<S> {
    store: S,
    policy: PolicyGeneral,
}

impl<S: CommentStore> CommentBoard<S> {
    pub fn new(store: S) -> Self {
        Self::with_policy(store, PolicyGeneral::default())
    }

    pub fn with_policy(store: S, policy: PolicyGeneral) -> Self {
        Self { store, policy }
    }

    /// Validates and stores one comment. A rejected post has no side effect
    /// on the store.
    pub fn post(
        &self,
        person_key: &str,
        name: &str,
        text: &str,
        timestamp: Option<&str>,
    ) -> Result<Comment, CommentError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CommentError::Empty);
        }
        let len = text.chars().count();
        if len > self.policy.max_comment_chars {
            return Err(CommentError::TooLong {
                len,
                max: self.policy.max_comment_chars,
            });
        }

        let name = name.trim();
        let name = if name.is_empty() {
            self.policy.default_name.clone()
        } else {
            name.to_string()
        };

        let violations = self.collect_violations(&name, text);
        if !violations.is_empty() {
            return Err(CommentError::Validation { violations });
        }

        let timestamp = match timestamp {
            Some(t) => t.to_string(),
            None => unix_now(),
        };
        let draft = CommentDraft {
            person_key: person_key.to_string(),
            name,
            text: text.to_string(),
            timestamp,
        };
        self.store.append(draft).map_err(unavailable)
    }

    pub fn comments(&self, person_key: &str) -> Result<Vec<Comment>, CommentError> {
        self.store.list(person_key).map_err(unavailable)
    }

    pub fn all_comments(&self) -> Result<BTreeMap<String, Vec<Comment>>, CommentError> {
        self.store.list_all().map_err(unavailable)
    }

    pub fn comment_count(&self, person_key: &str) -> Result<usize, CommentError> {
        self.store.count(person_key).map_err(unavailable)
    }

    // Union of the name and text verdicts plus policy-configured phrases,
    // duplicates dropped, first-seen order kept.
    fn collect_violations(&self, name: &str, text: &str) -> Vec<String> {
        let mut violations = filter::check(name).violations;
        for label in filter::check(text).violations {
            if !violations.contains(&label) {
                violations.push(label);
            }
        }
        for phrase in &self.policy.blocked_phrases {
            if filter::contains_phrase(text, phrase) || filter::contains_phrase(name, phrase) {
                let label = format!("Suspicious phrase: \"{}\"", phrase);
                if !violations.contains(&label) {
                    violations.push(label);
                }
            }
        }
        violations
    }
}

fn unavailable(e: anyhow::Error) -> CommentError {
    CommentError::Unavailable(format!("{e:#}"))
}
