//! Filename escaping for the optional trailing path segment.

use super::slug::slugify;

/// Split off a trailing extension matching `\.[0-9A-Za-z_-]+$`.
fn split_extension(name: &str) -> (&str, Option<&str>) {
    if let Some(dot) = name.rfind('.') {
        let ext = &name[dot + 1..];
        if !ext.is_empty()
            && ext
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        {
            return (&name[..dot], Some(&name[dot..]));
        }
    }
    (name, None)
}

/// Make a filename safe to append to a darkroom URL.
///
/// The part before a recognised extension is slugified; the extension itself
/// (including its dot) is kept as given. Absent or empty names escape to an
/// empty string.
///
/// # Examples
///
/// - `escape_filename("pathy/pathy.jpg")` → `"pathy-pathy.jpg"`
/// - `escape_filename("?query.png")` → `"query.png"`
/// - `escape_filename(None::<&str>)` → `""`
pub fn escape_filename<'a>(name: impl Into<Option<&'a str>>) -> String {
    let name = match name.into() {
        Some(n) if !n.is_empty() => n,
        _ => return String::new(),
    };

    match split_extension(name) {
        (stem, Some(ext)) => {
            let mut out = slugify(stem);
            out.push_str(ext);
            out
        }
        (whole, None) => slugify(whole),
    }
}
