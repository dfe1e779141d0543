//! Error type shared by the builder, factory and dimension parsing.

use thiserror::Error;

pub type Result<T, E = DarkroomError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DarkroomError {
    /// The factory was given no usable host or no salt.
    #[error("invalid darkroom configuration: {0}")]
    Configuration(String),

    /// A setter or parser rejected its input. The receiver is left unchanged.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// `url()` or `info()` was called before `resource()`.
    #[error("cannot build a url without a valid resource")]
    MissingResource,
}

impl DarkroomError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        DarkroomError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            DarkroomError::MissingResource.to_string(),
            "cannot build a url without a valid resource"
        );
        assert_eq!(
            DarkroomError::invalid("width", "value is NaN").to_string(),
            "invalid argument `width`: value is NaN"
        );
        assert_eq!(
            DarkroomError::Configuration("salt is required".into()).to_string(),
            "invalid darkroom configuration: salt is required"
        );
    }
}
