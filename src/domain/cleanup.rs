//! Final cleanup of generated text before it is shown or written.

use std::sync::OnceLock;

use regex::Regex;

/// Lines removed from the output: a bare fence, a `go`-tagged fence, or a blank line.
const CLEANUP_PATTERN: &str = r"(?m)^```go$|^```$|^\s*$";

fn cleanup_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CLEANUP_PATTERN).expect("cleanup pattern must compile"))
}

/// Strip code fences and blank lines from generated text.
///
/// Matches are replaced in place; surrounding newlines are left untouched.
pub fn clean_result_text(text: &str) -> String {
    cleanup_regex().replace_all(text, "").into_owned()
}
