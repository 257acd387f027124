//! Error types and handling for toolmap-core operations.
//!
//! Most of toolmap-core is pure computation over a static registry, so the
//! error surface is small:
//!
//! - **Registry errors**: a tool table that fails validation at construction
//!   time (unknown placeholders, missing sample values, duplicate ids)
//! - **Configuration errors**: unreadable or malformed config files
//! - **Sitemap errors**: XML that cannot be written or parsed, remote sitemaps
//!   that cannot be fetched
//!
//! Looking up an unknown tool is *not* an error: enumeration for a missing id
//! yields an empty list so that sitemap assembly never fails over a renamed
//! tool.
//!
//! ```rust
//! use toolmap_core::{Error, ToolRegistry};
//!
//! match ToolRegistry::new(Vec::new()) {
//!     Ok(registry) => assert!(registry.all_configs().is_empty()),
//!     Err(e) => eprintln!("{} error: {e}", e.category()),
//! }
//! # let _ = Error::Other(String::new());
//! ```

use thiserror::Error;

/// The main error type for toolmap-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers reading config files and writing sitemap files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network operation failed while fetching a remote sitemap.
    ///
    /// ## Recoverability
    ///
    /// Connection and timeout errors are recoverable, everything else
    /// (TLS, invalid response) is permanent.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Parsing operation failed.
    ///
    /// Occurs when sitemap XML is malformed or a change frequency value is not
    /// one of the protocol's keywords.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A tool's URL templates do not agree with its parameters or sample values.
    ///
    /// Raised by registry validation so a placeholder such as `[height]` can
    /// never leak into a generated URL.
    #[error("Invalid template for tool '{tool}': {reason}")]
    InvalidTemplate {
        /// Identifier of the offending tool.
        tool: String,
        /// What is wrong with the template set.
        reason: String,
    },

    /// Two registry entries share an identifier.
    #[error("Duplicate tool id: {0}")]
    DuplicateTool(String),

    /// URL is malformed or uses an unsupported scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Resource limit was exceeded.
    ///
    /// Used for sitemap index recursion and per-file URL caps.
    #[error("Resource limited: {0}")]
    ResourceLimited(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error for uncategorized failures.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Self::Parse(format!("XML error: {err}"))
    }
}

impl Error {
    /// Check if the error might be recoverable through retry logic.
    ///
    /// ```rust
    /// use toolmap_core::Error;
    /// use std::io;
    ///
    /// assert!(Error::Io(io::Error::new(io::ErrorKind::TimedOut, "timeout")).is_recoverable());
    /// assert!(!Error::Config("bad base_url".to_string()).is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a string identifier.
    ///
    /// Useful as a structured logging field:
    ///
    /// ```rust
    /// use toolmap_core::Error;
    ///
    /// let err = Error::DuplicateTool("bmi-calculator".to_string());
    /// tracing::error!(category = err.category(), "{err}");
    /// assert_eq!(err.category(), "registry");
    /// ```
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Network(_) => "network",
            Self::Parse(_) => "parse",
            Self::Config(_) => "config",
            Self::InvalidTemplate { .. } | Self::DuplicateTool(_) => "registry",
            Self::InvalidUrl(_) => "invalid_url",
            Self::ResourceLimited(_) => "resource_limited",
            Self::Serialization(_) => "serialization",
            Self::Other(_) => "other",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
