//! Name search helpers.
//!
//! Search is a case-insensitive substring match on the name column. The
//! user's term is taken literally: `%`, `_` and `\` are escaped before the
//! term is embedded in an `ILIKE` pattern. An empty term matches every row.

/// Escape character used in generated `ILIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Build an `ILIKE` pattern matching names that contain `term`.
///
/// # Examples
///
/// ```
/// use fyyur_core::search::like_pattern;
/// assert_eq!(like_pattern("band"), "%band%");
/// assert_eq!(like_pattern("100%"), "%100\\%%");
/// assert_eq!(like_pattern(""), "%%");
/// ```
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
