//! `darkroom-url hash <resource> [--action a/b/c]`

use anyhow::{bail, Result};
use darkroom_core::hash::action_hash;

/// Split a raw action path such as `/100/200/fit/` into segments.
pub(crate) fn action_segments(action: &str) -> Result<Vec<&str>> {
    let trimmed = action.trim().trim_matches('/');
    if trimmed.is_empty() {
        bail!("action path is empty");
    }
    Ok(trimmed.split('/').collect())
}

pub fn run_hash(salt: &str, resource: &str, action: &str) -> Result<()> {
    let segments = action_segments(action)?;
    println!("{}", action_hash(salt, &segments, resource));
    Ok(())
}
