//! URL slugs: ASCII, lowercase, hyphen separated.

/// Slugify `input` for use in a URL path.
///
/// - Transliterates to ASCII (`café` becomes `cafe`)
/// - Lowercases
/// - Drops apostrophes and quotes
/// - Collapses every other run of non-alphanumeric characters into one `-`
/// - Trims leading and trailing hyphens
pub fn slugify(input: &str) -> String {
    let ascii = deunicode::deunicode(input);

    let mut out = String::with_capacity(ascii.len());
    let mut pending_hyphen = false;

    for c in ascii.chars() {
        if c == '\'' || c == '"' || c == '`' {
            continue;
        }
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    out
}
