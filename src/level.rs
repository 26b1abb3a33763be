//! Log-level resolution from the process environment.

use std::env;

use tracing::level_filters::LevelFilter;

/// Environment variable holding the level name for emitted records.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Parse a case-insensitive level name (`trace`, `debug`, `info`, `warn`,
/// `error`, `off`).
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.parse::<LevelFilter>().ok()
}

/// Resolve the level threshold from `LOG_LEVEL`.
///
/// An absent, non-unicode, or unparseable value resolves to
/// [`LevelFilter::INFO`]. This never fails.
pub fn level_from_env() -> LevelFilter {
    match env::var(LOG_LEVEL_VAR) {
        Ok(raw) => parse_level(&raw).unwrap_or(LevelFilter::INFO),
        Err(_) => LevelFilter::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names_in_any_case() {
        assert_eq!(parse_level("trace"), Some(LevelFilter::TRACE));
        assert_eq!(parse_level("debug"), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level("INFO"), Some(LevelFilter::INFO));
        assert_eq!(parse_level("Warn"), Some(LevelFilter::WARN));
        assert_eq!(parse_level("eRrOr"), Some(LevelFilter::ERROR));
        assert_eq!(parse_level("off"), Some(LevelFilter::OFF));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(parse_level("not-a-valid-value"), None);
        assert_eq!(parse_level(""), None);
        assert_eq!(parse_level("warn "), None);
    }
}
