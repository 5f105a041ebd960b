//! Field helpers for structured logging

use crate::aggregator::AggregatorError;

/// Stable label for an aggregator error, used as the `error_kind` log field.
pub fn error_kind(err: &AggregatorError) -> &'static str {
    match err {
        AggregatorError::NotFound(_) => "not_found",
        AggregatorError::InvalidInput(_) => "invalid_input",
    }
}

/// Clip free-text input (such as a submitted command) before logging it.
///
/// Cuts on a character boundary and appends `...` when shortened.
///
/// ```
/// use command_center::logging::truncate_for_log;
///
/// assert_eq!(truncate_for_log("restart", 100), "restart");
/// assert_eq!(truncate_for_log("abcdef", 3), "abc...");
/// ```
pub fn truncate_for_log(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_labels() {
        assert_eq!(error_kind(&AggregatorError::NotFound("x".into())), "not_found");
        assert_eq!(
            error_kind(&AggregatorError::InvalidInput("bad".into())),
            "invalid_input"
        );
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_for_log("héllo wörld", 4), "héll...");
        assert_eq!(truncate_for_log("", 10), "");
        assert_eq!(truncate_for_log("exact", 5), "exact");
    }
}
