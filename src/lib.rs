//! Anonymous comment board backend: a deterministic PII/doxxing content
//! filter and the append-only comment service it gates.

pub mod cli;
pub mod commands;
pub mod domain;
pub mod filter;
pub mod services;

pub use cli::{Cli, Commands};
pub use commands::handle_board_commands;
pub use domain::models::{
    BoardState, Comment, CommentDraft, JsonOut, PolicyFile, PolicyGeneral,
};
pub use filter::Verdict;
pub use services::comments::{CommentBoard, CommentError};
pub use services::output::{print_one, print_out};
pub use services::policy::load_policy;
pub use services::storage::{
    audit, comments_path, unix_now, CommentStore, JsonFileStore, MemoryStore,
};
