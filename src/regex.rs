//! Patterns used to validate names, compiled on first use and then kept
//! for the life of the process.

/// Yield a `&'static Regex` for a literal pattern. Each call site gets its
/// own cache slot, so the pattern is only ever compiled once.
#[macro_export]
macro_rules! compile {
    ($pattern:expr) => {{
        static PATTERN: std::sync::OnceLock<::regex::Regex> = std::sync::OnceLock::new();
        PATTERN.get_or_init(|| {
            tracing::trace!("Compiling pattern {}", $pattern);
            match ::regex::Regex::new($pattern) {
                Ok(regex) => regex,
                Err(error) => panic!("invalid built-in pattern: {}", error),
            }
        })
    }};
}
