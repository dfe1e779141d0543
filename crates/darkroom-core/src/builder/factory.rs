//! Factory that owns the salt and the host rotation cursor.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::{DarkroomError, Result};

use super::{HostList, UrlBuilder};

/// Creates [`UrlBuilder`]s bound to darkroom hosts in round-robin order.
///
/// The factory is `Send + Sync`. Concurrent calls to [`builder`](Self::builder)
/// each take a distinct position of the cursor, so hosts are handed out
/// evenly no matter how calls interleave.
pub struct UrlBuilderFactory {
    hosts: HostList,
    salt: Arc<str>,
    cursor: AtomicUsize,
}

impl UrlBuilderFactory {
    /// Create a factory for one host or many.
    ///
    /// Fails with [`DarkroomError::Configuration`] when no usable host is
    /// given or the salt is empty.
    pub fn new<H>(hosts: H, salt: impl Into<String>) -> Result<Self>
    where
        H: TryInto<HostList, Error = DarkroomError>,
    {
        Self::with_hosts(hosts.try_into()?, salt)
    }

    pub fn with_hosts(hosts: HostList, salt: impl Into<String>) -> Result<Self> {
        let salt = salt.into();
        if salt.is_empty() {
            return Err(DarkroomError::Configuration("salt is required".to_string()));
        }
        tracing::debug!(hosts = hosts.len(), "created darkroom url builder factory");
        Ok(Self {
            hosts,
            salt: Arc::from(salt),
            cursor: AtomicUsize::new(0),
        })
    }

    pub fn hosts(&self) -> &HostList {
        &self.hosts
    }

    /// Hand out a builder bound to the next host.
    ///
    /// The first call binds the first host; after the last host the rotation
    /// wraps to the first again.
    pub fn builder(&self) -> UrlBuilder {
        let len = self.hosts.len();
        let index = self
            .cursor
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |i| Some((i + 1) % len))
            .unwrap_or_else(|i| i);
        let host = self.hosts.pick(index);
        tracing::trace!(host = %host, index, "bound url builder to darkroom host");
        UrlBuilder::new(host, Arc::clone(&self.salt))
    }
}

impl fmt::Debug for UrlBuilderFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlBuilderFactory")
            .field("hosts", &self.hosts)
            .field("salt", &"<redacted>")
            .field("cursor", &self.cursor.load(Ordering::Relaxed))
            .finish()
    }
}
