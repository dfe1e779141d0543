//! `darkroom-url url <resource>... [transform options]`

use anyhow::Result;
use clap::Args;
use darkroom_core::{Dimension, UrlBuilderFactory};

/// Transform parameters shared by every resource of one invocation.
#[derive(Debug, Clone, Default, Args)]
pub struct TransformArgs {
    /// Target width in pixels.
    #[arg(long)]
    pub width: Option<Dimension>,

    /// Target height in pixels.
    #[arg(long)]
    pub height: Option<Dimension>,

    /// Fit mode (fit, cover, stretch, ...); needs both --width and --height.
    #[arg(long)]
    pub mode: Option<String>,

    /// Download filename appended to the URL (escaped).
    #[arg(long)]
    pub filename: Option<String>,

    /// Output format suffix, e.g. webp.
    #[arg(long)]
    pub format: Option<String>,
}

/// Build the URL for one resource with a fresh builder from `factory`.
pub(crate) fn build_url(
    factory: &UrlBuilderFactory,
    resource: &str,
    transform: &TransformArgs,
) -> Result<String> {
    let mut builder = factory.builder();
    builder.resource(resource);
    if let Some(w) = transform.width {
        builder.width(w.get())?;
    }
    if let Some(h) = transform.height {
        builder.height(h.get())?;
    }
    if let Some(mode) = &transform.mode {
        builder.mode(mode.as_str());
    }
    if let Some(name) = &transform.filename {
        builder.filename(name.as_str());
    }
    if let Some(format) = &transform.format {
        builder.format(format.as_str());
    }
    tracing::debug!(host = builder.host(), action = %builder.action(), "building url");
    Ok(builder.url()?)
}

pub fn run_url(
    factory: &UrlBuilderFactory,
    resources: &[String],
    transform: &TransformArgs,
) -> Result<()> {
    for resource in resources {
        println!("{}", build_url(factory, resource, transform)?);
    }
    Ok(())
}
