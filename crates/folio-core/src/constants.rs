/// folio engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply for input that is empty after trimming.
pub const EMPTY_INPUT_REPLY: &str = "Please ask me something!";

/// Reply for any failure while handling a single message.
pub const ERROR_REPLY: &str = "Sorry, something went wrong. Please try again.";

/// Similarity a semantic match must strictly exceed.
pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.4;

/// Inputs with at most this many tokens try the keyword matcher first.
pub const KEYWORD_MAX_TOKENS: usize = 2;

/// Example patterns listed per intent by the introspection helper.
pub const EXAMPLE_PATTERN_LIMIT: usize = 3;
