// src/constants.rs

/// The name of the pack with special chaining semantics: when `--default` is
/// passed, this pack runs after the primary selection (unless it *is* the
/// primary selection).
pub const DEFAULT_PACK_NAME: &str = "default";

/// The configuration file looked up next to the executable when no `--file`
/// is given (or the given path does not exist).
pub const DEFAULT_CONFIG_FILENAME: &str = "config.json";

/// Terminal width used for separators when the real width cannot be detected
/// (e.g. output is not a TTY).
pub const FALLBACK_TERM_WIDTH: usize = 80;
