/// Split command output into lines, treating `\r\n` like `\n`.
///
/// Unlike `str::lines`, a trailing newline yields a final empty line.
pub fn lines(s: &str) -> impl Iterator<Item = &str> {
    s.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Trimmed text after the first colon of `s`
pub fn after_colon(s: &str) -> Option<&str> {
    s.split_once(':').map(|(_, value)| value.trim())
}
