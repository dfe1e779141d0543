//! URL construction for darkroom transforms.
//!
//! A darkroom URL has the shape
//! `<host>/<action segments>/<resource>:<hash>[/<escaped filename>][.<format>]`.

mod escape;
mod slug;

use std::fmt;

pub use escape::escape_filename;
pub use slug::slugify;

use crate::action::Action;
use crate::hash::{action_hash, join_segments};

/// Build a signed darkroom URL from raw action segments.
///
/// A single-keyword action such as `info` is a one-element slice. The hash
/// is computed over the same segments that are placed in the path.
pub fn construct_url<S: fmt::Display>(
    host: &str,
    salt: &str,
    segments: &[S],
    resource_uri: &str,
    filename: Option<&str>,
    format: Option<&str>,
) -> String {
    let hash = action_hash(salt, segments, resource_uri);

    let mut url = [
        host.to_string(),
        join_segments(segments),
        format!("{resource_uri}:{hash}"),
    ]
    .join("/");

    if let Some(name) = filename.filter(|n| !n.is_empty()) {
        let escaped = escape_filename(name);
        if !escaped.is_empty() {
            url.push('/');
            url.push_str(&escaped);
        }
    }

    if let Some(ext) = format.filter(|f| !f.is_empty()) {
        url.push('.');
        url.push_str(ext);
    }

    url
}

/// [`construct_url`] for a typed [`Action`].
pub fn construct_action_url(
    host: &str,
    salt: &str,
    action: &Action,
    resource_uri: &str,
    filename: Option<&str>,
    format: Option<&str>,
) -> String {
    construct_url(host, salt, &action.segments(), resource_uri, filename, format)
}
