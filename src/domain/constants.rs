/// Display name stored when a submitter leaves the name blank.
pub const DEFAULT_DISPLAY_NAME: &str = "Anonymous";

/// Upper bound on comment body length, in characters.
pub const MAX_COMMENT_CHARS: usize = 1000;
