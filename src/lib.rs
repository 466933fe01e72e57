// SPDX-License-Identifier: PMPL-1.0-or-later

//! xslt-messages: localized error and warning catalogs for an XSLT processor.
//!
//! The crate is the externalized-string layer such a processor consumes:
//! a per-locale table mapping stable message keys (`ER_NO_CURLYBRACE`,
//! `WG_FOUND_CURLYBRACE`, `optionXSLTC`, ...) to templates with positional
//! `{n}` placeholders, plus the loader that picks the right table for a
//! locale and falls back to the English root bundle.
//!
//! COMPONENTS:
//! 1. **i18n**: catalogs, locale handling, the bundle loader, and the
//!    `MessageFormat`-compatible formatter.
//! 2. **audit**: cross-locale consistency checks (key parity, placeholder
//!    drift, placeholders swallowed by stray quotes).
//! 3. **usage**: the localized command-line option summary.
//! 4. **config** / **diagnostics** / **report**: the ambient pieces the CLI
//!    is built from.

pub mod audit;
pub mod config;
pub mod diagnostics;
pub mod i18n;
pub mod report;
pub mod usage;

pub use i18n::{
    active_catalog, derive_suffix, keys, BuiltinCatalogs, CatalogError, CatalogLoader,
    CatalogSource, Locale, MessageCatalog, XSLT_ERROR_RESOURCES,
};
