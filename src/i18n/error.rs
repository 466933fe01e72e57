// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for catalog loading and message creation.

use std::path::PathBuf;
use thiserror::Error;

use super::format::FormatError;

/// Failures while locating or reading catalogs.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Neither the requested locale, the fallback locale, nor the root bundle
    /// could be loaded. Nothing further is attempted.
    #[error("Could not load any resource bundles. (base: {base})")]
    NoBundles { base: String },

    #[error("invalid locale: {0:?}")]
    InvalidLocale(String),

    #[error("reading catalog file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing catalog file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Failures surfaced by the strict message-creation path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessageError {
    #[error("no message for key {key:?} in bundle {bundle}")]
    UnknownKey { key: String, bundle: String },

    #[error("formatting {key:?}: {source}")]
    Format {
        key: String,
        #[source]
        source: FormatError,
    },
}
