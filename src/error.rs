//! Error types for folio-deck.
//!
//! Carousel and navigation operations are total and never fail; errors only
//! arise at the edges: reading portfolio content, launching the browser and
//! talking to the form relay.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FolioError {
    /// The content file could not be read.
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content file is not valid portfolio TOML.
    #[error("Invalid portfolio content in {path:?}: {source}")]
    ContentParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A project link was refused before launching the browser.
    #[error("Refusing to open link {0:?}")]
    UnsafeLink(String),

    /// The platform opener could not be started.
    #[error("Could not open {url}: {source}")]
    OpenLink {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// Form submission failed.
    #[error("Form relay: {0}")]
    Relay(#[from] RelayError),
}

/// Why a contact form submission did not go through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// The endpoint is empty or still the placeholder.
    #[error("form endpoint not configured")]
    EndpointNotConfigured,

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The relay answered with a non-success status.  `message` is the
    /// relay's own first error message, when it sent one.
    #[error("rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
}

/// Convenience alias used across the library.
pub type Result<T> = std::result::Result<T, FolioError>;
