//! `darkroom-url info <resource>`

use anyhow::Result;
use darkroom_core::UrlBuilderFactory;

pub fn run_info(factory: &UrlBuilderFactory, resource: &str) -> Result<()> {
    let url = factory.builder().resource(resource).info()?;
    println!("{url}");
    Ok(())
}
