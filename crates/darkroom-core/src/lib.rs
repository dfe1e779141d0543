//! Signed URL construction for the darkroom image-processing service.
//!
//! A [`UrlBuilderFactory`] holds the shared salt and the list of darkroom
//! hosts. Each call to [`UrlBuilderFactory::builder`] hands out a
//! [`UrlBuilder`] bound to the next host in round-robin order; the builder
//! collects transform parameters and renders a URL whose resource segment is
//! signed with [`hash::action_hash`].
//!
//! ```
//! use darkroom_core::UrlBuilderFactory;
//!
//! let factory = UrlBuilderFactory::new("http://darkroom.io", "test salt")?;
//! let url = factory
//!     .builder()
//!     .resource("012ef7ed27c17ea9524f5f5fb3a86921")
//!     .width(100)?
//!     .filename("jim.jpeg")
//!     .url()?;
//! assert!(url.starts_with("http://darkroom.io/100/012ef7ed27c17ea9524f5f5fb3a86921:"));
//! # Ok::<(), darkroom_core::DarkroomError>(())
//! ```

pub mod action;
pub mod builder;
pub mod error;
pub mod hash;
pub mod url_model;

pub use action::{Action, Dimension};
pub use builder::{HostList, UrlBuilder, UrlBuilderFactory};
pub use error::{DarkroomError, Result};
