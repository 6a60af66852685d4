/// Shell escaping utilities for safe command construction
///
/// User-supplied filters and local paths are placed inside single quotes
/// before they are interpolated into a `/bin/sh -c` pipeline.

/// Escape a string for use in a single-quote context in shell commands.
///
/// In a single-quote context, the only character that needs escaping is the
/// single quote itself. This is done by closing the quote, escaping the quote,
/// and reopening the quote: '\''
///
/// # Example
/// ```
/// use rabbit::tools::shell_escape::escape_single_quote;
///
/// let filter = "it's";
/// assert_eq!(escape_single_quote(filter), "it'\\''s");
/// ```
pub fn escape_single_quote(s: &str) -> String {
    s.replace('\'', r"'\''")
}

/// Wrap a string in single quotes so the shell passes it through literally
///
/// # Example
/// ```
/// use rabbit::tools::shell_escape::quote;
///
/// assert_eq!(quote("Main; rm -rf ~"), "'Main; rm -rf ~'");
/// ```
pub fn quote(s: &str) -> String {
    format!("'{}'", escape_single_quote(s))
}
