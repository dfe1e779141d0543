//! Ordered list of darkroom base URLs.

use std::sync::Arc;

use crate::error::{DarkroomError, Result};

/// Non-empty, ordered list of darkroom hosts (`scheme://host[:port]`).
///
/// Entries are trimmed of whitespace and trailing `/` so that joining with
/// the action path never produces `//`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostList(Vec<Arc<str>>);

impl HostList {
    pub fn new<I, S>(hosts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Vec::new();
        for (i, host) in hosts.into_iter().enumerate() {
            let host = host.as_ref().trim().trim_end_matches('/');
            if host.is_empty() {
                return Err(DarkroomError::Configuration(format!(
                    "darkroom host #{} is empty",
                    i + 1
                )));
            }
            out.push(Arc::from(host));
        }
        if out.is_empty() {
            return Err(DarkroomError::Configuration(
                "at least one darkroom host is required".to_string(),
            ));
        }
        Ok(HostList(out))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|h| &**h)
    }

    /// Host at `index`, wrapping around the end of the list.
    pub(crate) fn pick(&self, index: usize) -> Arc<str> {
        Arc::clone(&self.0[index % self.0.len()])
    }
}

impl TryFrom<&str> for HostList {
    type Error = DarkroomError;

    fn try_from(host: &str) -> Result<Self> {
        HostList::new([host])
    }
}

impl TryFrom<String> for HostList {
    type Error = DarkroomError;

    fn try_from(host: String) -> Result<Self> {
        HostList::new([host])
    }
}

impl<S: AsRef<str>> TryFrom<Vec<S>> for HostList {
    type Error = DarkroomError;

    fn try_from(hosts: Vec<S>) -> Result<Self> {
        HostList::new(hosts)
    }
}

impl<S: AsRef<str>> TryFrom<&[S]> for HostList {
    type Error = DarkroomError;

    fn try_from(hosts: &[S]) -> Result<Self> {
        HostList::new(hosts)
    }
}

impl<S: AsRef<str>, const N: usize> TryFrom<[S; N]> for HostList {
    type Error = DarkroomError;

    fn try_from(hosts: [S; N]) -> Result<Self> {
        HostList::new(hosts)
    }
}
