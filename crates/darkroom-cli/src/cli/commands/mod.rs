//! CLI command handlers, one per file.

mod config_path;
mod hash;
mod info;
mod url;

pub use config_path::run_config_path;
pub use hash::run_hash;
pub use info::run_info;
pub use url::{run_url, TransformArgs};
