// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localized message catalogs for the XSLT error subsystem.
//!
//! ## Built-in catalogs
//!
//! | Bundle                       | Language            | Native name |
//! |------------------------------|---------------------|-------------|
//! | `XSLTErrorResources`         | English (root)      | English     |
//! | `XSLTErrorResources_ja`      | Japanese            | 日本語       |
//! | `XSLTErrorResources_ko`      | Korean              | 한국어       |
//! | `XSLTErrorResources_zh_CN`   | Simplified Chinese  | 中文         |
//! | `XSLTErrorResources_zh_TW`   | Traditional Chinese | 中文         |
//! | `XSLTErrorResources_fr`      | French              | Français    |
//! | `XSLTErrorResources_it`      | Italian             | Italiano    |
//!
//! ## Design
//!
//! Keys are flat strings (`ER_*` errors, `WG_*` warnings, `INVALID_*`
//! attribute-value errors, plus UI and option keys). Every catalog carries the
//! same key set; the root English catalog is the reference.
//!
//! Bundle selection follows the suffix convention `base + "_" + language`,
//! with the country appended only for Chinese. The loader tries the exact
//! bundle, then the language-only bundle, then the fallback locale, then the
//! root bundle, and only then gives up with [`CatalogError::NoBundles`].
//!
//! Tables are embedded at compile time and turned into lookup maps on first
//! use. Nothing is mutated afterwards, so catalogs are shared freely across
//! threads.

mod catalog;
mod error;
mod format;
mod iso639;
pub mod keys;
mod loader;
mod locale;
mod messages;
mod source;
mod tables;

pub use catalog::{builtin_catalogs, Headers, MessageCatalog, XSLT_ERROR_RESOURCES};
pub use error::{CatalogError, MessageError};
pub use format::{format_template, placeholders, FormatError};
pub use iso639::{is_valid_iso639_1, language_name, locale_display_name, native_name};
pub use loader::{active_catalog, CatalogLoader, Resolution, ResolutionStep};
pub use locale::{derive_suffix, Locale};
pub use messages::{Origin, Severity};
pub use source::{BuiltinCatalogs, CatalogFile, CatalogSource, DirectorySource, SourceChain};
