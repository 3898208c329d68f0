use crate::domain::models::{BoardState, Comment, CommentDraft};
use anyhow::Context;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Backing store for comment threads. Appends must be atomic: concurrent
/// posts under one key may not lose records or interleave partial writes.
pub trait CommentStore: Send + Sync {
    fn append(&self, draft: CommentDraft) -> anyhow::Result<Comment>;
    fn list(&self, person_key: &str) -> anyhow::Result<Vec<Comment>>;
    fn list_all(&self) -> anyhow::Result<BTreeMap<String, Vec<Comment>>>;
    fn count(&self, person_key: &str) -> anyhow::Result<usize>;
}

fn comment_id(seq: u64, draft: &CommentDraft) -> String {
    let mut hasher = Sha256::new();
    hasher.update(draft.person_key.as_bytes());
    hasher.update([0]);
    hasher.update(seq.to_be_bytes());
    hasher.update(draft.timestamp.as_bytes());
    hasher.update([0]);
    hasher.update(draft.text.as_bytes());
    hex::encode(hasher.finalize())[..12].to_string()
}

fn append_to_state(state: &mut BoardState, draft: CommentDraft) -> Comment {
    state.next_seq += 1;
    let comment = Comment {
        id: comment_id(state.next_seq, &draft),
        person_key: draft.person_key,
        name: draft.name,
        text: draft.text,
        timestamp: draft.timestamp,
    };
    state
        .threads
        .entry(comment.person_key.clone())
        .or_default()
        .push(comment.clone());
    comment
}

/// In-memory store: tests and embedding.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<BoardState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> anyhow::Result<std::sync::MutexGuard<'_, BoardState>> {
        self.inner
            .lock()
            .map_err(|_| anyhow::anyhow!("comment store lock poisoned"))
    }
}

impl CommentStore for MemoryStore {
    fn append(&self, draft: CommentDraft) -> anyhow::Result<Comment> {
        let mut state = self.locked()?;
        Ok(append_to_state(&mut state, draft))
    }

    fn list(&self, person_key: &str) -> anyhow::Result<Vec<Comment>> {
        let state = self.locked()?;
        Ok(state.threads.get(person_key).cloned().unwrap_or_default())
    }

    fn list_all(&self) -> anyhow::Result<BTreeMap<String, Vec<Comment>>> {
        let state = self.locked()?;
        Ok(state.threads.clone())
    }

    fn count(&self, person_key: &str) -> anyhow::Result<usize> {
        let state = self.locked()?;
        Ok(state.threads.get(person_key).map(Vec::len).unwrap_or(0))
    }
}

/// Durable store: one pretty-printed JSON file, reloaded per operation and
/// rewritten under the lock on every append.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }
}

impl CommentStore for JsonFileStore {
    fn append(&self, draft: CommentDraft) -> anyhow::Result<Comment> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| anyhow::anyhow!("comment store lock poisoned"))?;
        let mut state = load_board(&self.path)?;
        let comment = append_to_state(&mut state, draft);
        save_board(&self.path, &state)?;
        Ok(comment)
    }

    fn list(&self, person_key: &str) -> anyhow::Result<Vec<Comment>> {
        let state = load_board(&self.path)?;
        Ok(state.threads.get(person_key).cloned().unwrap_or_default())
    }

    fn list_all(&self) -> anyhow::Result<BTreeMap<String, Vec<Comment>>> {
        let state = load_board(&self.path)?;
        Ok(state.threads)
    }

    fn count(&self, person_key: &str) -> anyhow::Result<usize> {
        let state = load_board(&self.path)?;
        Ok(state.threads.get(person_key).map(Vec::len).unwrap_or(0))
    }
}

fn load_board(path: &Path) -> anyhow::Result<BoardState> {
    if !path.exists() {
        return Ok(BoardState::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read comment store {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parse comment store {}", path.display()))
}

fn save_board(path: &Path, state: &BoardState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(state)?)
        .with_context(|| format!("write comment store {}", path.display()))?;
    Ok(())
}

pub fn comments_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/soapbox/comments.json"))
}

pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/soapbox/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": unix_now(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

pub fn unix_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    ts.to_string()
}
