//! Typed transform actions and the numeric dimensions they carry.

use std::fmt;
use std::str::FromStr;

use crate::error::{DarkroomError, Result};
use crate::hash;

/// A width or height as sent to darkroom.
///
/// Any number except NaN is accepted; zero and negative values are passed
/// through untouched because the service is authoritative on their meaning.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dimension(f64);

impl Dimension {
    pub fn new(value: f64) -> Result<Self> {
        Self::checked("dimension", value)
    }

    pub(crate) fn checked(name: &'static str, value: f64) -> Result<Self> {
        if value.is_nan() {
            return Err(DarkroomError::invalid(name, "value is NaN"));
        }
        Ok(Dimension(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Dimension {
    type Error = DarkroomError;

    fn try_from(value: f64) -> Result<Self> {
        Dimension::new(value)
    }
}

impl From<u32> for Dimension {
    fn from(value: u32) -> Self {
        Dimension(f64::from(value))
    }
}

impl From<i32> for Dimension {
    fn from(value: i32) -> Self {
        Dimension(f64::from(value))
    }
}

/// Parses untyped text (config values, CLI arguments). Only numerals are
/// accepted; `NaN` is rejected like any other non-number.
impl FromStr for Dimension {
    type Err = DarkroomError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| DarkroomError::invalid("dimension", format!("`{s}` is not a number")))?;
        Dimension::new(value)
    }
}

/// Renders the way darkroom expects numbers in a path: `100`, `0.5`,
/// `Infinity`. Negative zero renders as `0`.
impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_infinite() {
            f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
        } else if v == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{v}")
        }
    }
}

/// The transform requested from darkroom, rendered as path segments.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// `original`: serve the image without resizing.
    Original,
    /// `info`: metadata only.
    Info,
    /// `<width>`: height chosen by the service.
    Width(Dimension),
    /// `0/<height>`
    HeightOnly(Dimension),
    /// `<width>/<height>`
    Dimensions(Dimension, Dimension),
    /// `<width>/<height>/<mode>`; mode is passed through unvalidated.
    DimensionsWithMode(Dimension, Dimension, String),
}

impl Action {
    /// Pick the action for the given transform parameters.
    ///
    /// A mode only takes effect when both width and height are present.
    pub fn resolve(width: Option<Dimension>, height: Option<Dimension>, mode: Option<&str>) -> Self {
        match (width, height, mode) {
            (Some(w), Some(h), Some(m)) => Action::DimensionsWithMode(w, h, m.to_string()),
            (Some(w), Some(h), None) => Action::Dimensions(w, h),
            (None, Some(h), _) => Action::HeightOnly(h),
            (Some(w), None, _) => Action::Width(w),
            (None, None, _) => Action::Original,
        }
    }

    pub fn segments(&self) -> Vec<String> {
        match self {
            Action::Original => vec!["original".to_string()],
            Action::Info => vec!["info".to_string()],
            Action::Width(w) => vec![w.to_string()],
            Action::HeightOnly(h) => vec!["0".to_string(), h.to_string()],
            Action::Dimensions(w, h) => vec![w.to_string(), h.to_string()],
            Action::DimensionsWithMode(w, h, mode) => {
                vec![w.to_string(), h.to_string(), mode.clone()]
            }
        }
    }

    /// Segments joined with `/`, without leading or trailing slash.
    pub fn path(&self) -> String {
        hash::join_segments(&self.segments())
    }

    /// Action hash of this action applied to `resource_uri`.
    pub fn hash(&self, salt: &str, resource_uri: &str) -> String {
        hash::action_hash(salt, &self.segments(), resource_uri)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
