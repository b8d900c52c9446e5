use tracing::Level;

pub(crate) const VERBOSE_QUERY_FLAG: &str = "auto_popup_debug=1";

/// Browser console method a log line is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConsoleLevel {
    Error,
    Warn,
    Log,
    Debug,
}

impl ConsoleLevel {
    pub(crate) fn from_tracing(level: Level) -> Self {
        match level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Log,
            Level::DEBUG | Level::TRACE => Self::Debug,
        }
    }
}

/// `true` when the page URL carries `auto_popup_debug=1`.
pub(crate) fn verbose_requested(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == VERBOSE_QUERY_FLAG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_levels_to_console_methods() {
        assert_eq!(ConsoleLevel::from_tracing(Level::ERROR), ConsoleLevel::Error);
        assert_eq!(ConsoleLevel::from_tracing(Level::WARN), ConsoleLevel::Warn);
        assert_eq!(ConsoleLevel::from_tracing(Level::INFO), ConsoleLevel::Log);
        assert_eq!(ConsoleLevel::from_tracing(Level::TRACE), ConsoleLevel::Debug);
    }

    #[test]
    fn verbose_flag_must_match_a_whole_pair() {
        assert!(verbose_requested("?auto_popup_debug=1"));
        assert!(verbose_requested("?utm_source=mail&auto_popup_debug=1"));
        assert!(!verbose_requested("?auto_popup_debug=10"));
        assert!(!verbose_requested(""));
    }
}
