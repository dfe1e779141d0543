//! Action hash: the signature the darkroom service recomputes to authorize a
//! transform request.
//!
//! The digest input is the canonical action path `"/" + segments.join("/") + "/"`,
//! immediately followed by the resource URI and then the salt, with no
//! separators. The result is the MD5 of those UTF-8 bytes as 32 lowercase hex
//! characters. Any change to this rule breaks compatibility with deployed
//! darkroom services.

use std::fmt::{self, Write as _};

/// Length in characters of every hash returned by [`action_hash`].
pub const HASH_LEN: usize = 32;

/// Join path segments with `/`.
pub(crate) fn join_segments<S: fmt::Display>(segments: &[S]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push('/');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{segment}");
    }
    out
}

/// Compute the action hash for `segments` applied to `resource_uri`.
pub fn action_hash<S: fmt::Display>(salt: &str, segments: &[S], resource_uri: &str) -> String {
    let path = join_segments(segments);
    let mut input = String::with_capacity(path.len() + resource_uri.len() + salt.len() + 2);
    input.push('/');
    input.push_str(&path);
    input.push('/');
    input.push_str(resource_uri);
    input.push_str(salt);
    format!("{:x}", md5::compute(input.as_bytes()))
}
