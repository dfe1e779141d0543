//! Fluent transform builder.
//!
//! A [`UrlBuilder`] is obtained from a [`UrlBuilderFactory`], configured with
//! setters that chain through `&mut Self`, and rendered with
//! [`UrlBuilder::url`] or [`UrlBuilder::info`]. Rendering does not consume
//! the builder: calling a setter again and re-rendering yields a URL for the
//! updated state.

mod factory;
mod hosts;

use std::fmt;
use std::sync::Arc;

pub use factory::UrlBuilderFactory;
pub use hosts::HostList;

use crate::action::{Action, Dimension};
use crate::error::{DarkroomError, Result};
use crate::url_model::construct_action_url;

/// Transform request for a single darkroom URL.
#[derive(Clone)]
pub struct UrlBuilder {
    host: Arc<str>,
    salt: Arc<str>,
    resource: Option<String>,
    width: Option<Dimension>,
    height: Option<Dimension>,
    mode: Option<String>,
    filename: Option<String>,
    format: Option<String>,
}

impl UrlBuilder {
    pub(crate) fn new(host: Arc<str>, salt: Arc<str>) -> Self {
        Self {
            host,
            salt,
            resource: None,
            width: None,
            height: None,
            mode: None,
            filename: None,
            format: None,
        }
    }

    /// The darkroom host this builder was bound to by its factory.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Resource identifier on the darkroom service. Not validated.
    pub fn resource(&mut self, id: impl Into<String>) -> &mut Self {
        self.resource = Some(id.into());
        self
    }

    /// Target width. NaN is rejected and leaves the builder unchanged.
    pub fn width(&mut self, width: impl Into<f64>) -> Result<&mut Self> {
        self.width = Some(Dimension::checked("width", width.into())?);
        Ok(self)
    }

    /// Target height. NaN is rejected and leaves the builder unchanged.
    pub fn height(&mut self, height: impl Into<f64>) -> Result<&mut Self> {
        self.height = Some(Dimension::checked("height", height.into())?);
        Ok(self)
    }

    /// Fit mode such as `fit`, `cover` or `stretch`. Passed through as is and
    /// only used when both width and height are set.
    pub fn mode(&mut self, mode: impl Into<String>) -> &mut Self {
        self.mode = Some(mode.into());
        self
    }

    /// Download filename. Escaped when the URL is built.
    pub fn filename(&mut self, name: impl Into<String>) -> &mut Self {
        self.filename = Some(name.into());
        self
    }

    /// Output format suffix, e.g. `webp`.
    pub fn format(&mut self, format: impl Into<String>) -> &mut Self {
        self.format = Some(format.into());
        self
    }

    /// The action [`url`](Self::url) would request for the current state.
    pub fn action(&self) -> Action {
        Action::resolve(self.width, self.height, self.mode.as_deref())
    }

    fn require_resource(&self) -> Result<&str> {
        self.resource.as_deref().ok_or(DarkroomError::MissingResource)
    }

    /// URL of the metadata endpoint for the resource. Ignores every transform
    /// parameter and the filename.
    pub fn info(&self) -> Result<String> {
        let resource = self.require_resource()?;
        Ok(construct_action_url(
            &self.host,
            &self.salt,
            &Action::Info,
            resource,
            None,
            None,
        ))
    }

    /// Signed URL for the configured transform.
    pub fn url(&self) -> Result<String> {
        let resource = self.require_resource()?;
        let action = self.action();
        tracing::trace!(host = %self.host, action = %action, "building darkroom url");
        Ok(construct_action_url(
            &self.host,
            &self.salt,
            &action,
            resource,
            self.filename.as_deref(),
            self.format.as_deref(),
        ))
    }
}

impl fmt::Debug for UrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlBuilder")
            .field("host", &self.host)
            .field("salt", &"<redacted>")
            .field("resource", &self.resource)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("mode", &self.mode)
            .field("filename", &self.filename)
            .field("format", &self.format)
            .finish()
    }
}

#[cfg(test)]
mod tests;
