//! Filename sanitizing

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Characters that may not appear in a filename, as a regex character class.
pub const ILLEGAL_FILENAME_PATTERN: &str = r#"[{/\\:*?"<>|}]"#;

/// Replacement used by [`to_legal_name`].
pub const DEFAULT_REPLACEMENT: &str = "_";

static ILLEGAL_FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ILLEGAL_FILENAME_PATTERN).expect("illegal filename pattern is valid")
});

/// Replace every illegal character in `name` with `_`.
///
/// ```
/// use filetree_fs::to_legal_name;
///
/// assert_eq!(to_legal_name("a:b*c"), "a_b_c");
/// assert_eq!(to_legal_name("clean.txt"), "clean.txt");
/// ```
pub fn to_legal_name(name: &str) -> String {
    to_legal_name_with(name, DEFAULT_REPLACEMENT)
}

/// Replace every illegal character in `name` with `replacement`.
///
/// `replacement` is inserted literally. Distinct names can map to the same
/// result (`a:b` and `a*b` both become `a_b`).
pub fn to_legal_name_with(name: &str, replacement: &str) -> String {
    ILLEGAL_FILENAME
        .replace_all(name, NoExpand(replacement))
        .into_owned()
}

/// Whether `name` contains none of the illegal characters.
pub fn is_legal_name(name: &str) -> bool {
    !ILLEGAL_FILENAME.is_match(name)
}
