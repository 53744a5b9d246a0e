use regex::Regex;
use std::sync::LazyLock;

/// Every form of the fifth glyph that fails a check, lowercase first.
pub const FORBIDDEN_GLYPHS: [char; 20] = [
    'e', 'è', 'é', 'ê', 'ë', 'ě', 'ẽ', 'ē', 'ė', 'ę', //
    'E', 'È', 'É', 'Ê', 'Ë', 'Ě', 'Ẽ', 'Ē', 'Ė', 'Ę',
];

static FORBIDDEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let class: String = FORBIDDEN_GLYPHS.iter().collect();
    match Regex::new(&format!("[{class}]")) {
        Ok(regex) => regex,
        Err(err) => panic!("failed to compile FORBIDDEN_PATTERN: {err}"),
    }
});

/// Returns true if any character of `text` is a forbidden glyph.
pub fn contains_forbidden(text: &str) -> bool {
    FORBIDDEN_PATTERN.is_match(text)
}

/// The first forbidden glyph in `text`, if there is one.
pub fn first_forbidden(text: &str) -> Option<char> {
    FORBIDDEN_PATTERN
        .find(text)
        .and_then(|m| m.as_str().chars().next())
}
