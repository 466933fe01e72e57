// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message catalogs.
//!
//! A [`MessageCatalog`] is an immutable key to template map for one bundle,
//! plus the header strings used to decorate errors and warnings. The
//! embedded tables are built into catalogs lazily, once per bundle, and the
//! resulting `&'static` references are shared by every caller.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

use super::keys;
use super::locale::Locale;
use super::tables::{TableHeaders, TABLES, TABLE_COUNT};

/// Base name shared by every XSLT error bundle.
pub const XSLT_ERROR_RESOURCES: &str = "XSLTErrorResources";

/// Text used when a catalog has no `BAD_CODE` entry of its own.
const BAD_CODE_FALLBACK: &str = "BAD_CODE";
const FORMAT_FAILED_FALLBACK: &str = "FORMAT_FAILED";

/// Header strings prepended to formatted messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Headers {
    pub error: String,
    pub warning: String,
    pub xsl: String,
    pub xml: String,
    pub query: String,
    pub error_string: String,
}

impl Default for Headers {
    fn default() -> Self {
        Self {
            error: "Error: ".to_string(),
            warning: "Warning: ".to_string(),
            xsl: "XSLT ".to_string(),
            xml: "XML ".to_string(),
            query: "PATTERN ".to_string(),
            error_string: "#error".to_string(),
        }
    }
}

impl From<TableHeaders> for Headers {
    fn from(h: TableHeaders) -> Self {
        Self {
            error: h.error.to_string(),
            warning: h.warning.to_string(),
            xsl: h.xsl.to_string(),
            xml: h.xml.to_string(),
            query: h.query.to_string(),
            error_string: h.error_string.to_string(),
        }
    }
}

/// An immutable message catalog for one bundle.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    bundle: String,
    locale: Locale,
    headers: Headers,
    messages: HashMap<String, String>,
    /// Keys in the order they were first supplied.
    keys: Vec<String>,
}

impl MessageCatalog {
    /// Build a catalog from `(key, template)` pairs. A repeated key keeps the
    /// template supplied last but its original position.
    pub fn from_entries<I, K, V>(bundle: impl Into<String>, locale: Locale, headers: Headers, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut messages = HashMap::new();
        let mut order = Vec::new();
        for (key, value) in entries {
            let key = key.into();
            if messages.insert(key.clone(), value.into()).is_none() {
                order.push(key);
            }
        }
        Self {
            bundle: bundle.into(),
            locale,
            headers,
            messages,
            keys: order,
        }
    }

    /// Full bundle name, e.g. `XSLTErrorResources_ja`.
    pub fn bundle(&self) -> &str {
        &self.bundle
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Template for `key`, if present.
    pub fn try_get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Template for `key`, or the catalog's out-of-bounds text when the key
    /// is unknown.
    pub fn get(&self, key: &str) -> &str {
        self.try_get(key).unwrap_or_else(|| self.bad_code())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Keys in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// `(key, template)` pairs in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys
            .iter()
            .filter_map(|k| self.messages.get(k).map(|v| (k.as_str(), v.as_str())))
    }

    /// Text reported when a caller asks for a key the catalog lacks.
    pub fn bad_code(&self) -> &str {
        self.try_get(keys::BAD_CODE).unwrap_or(BAD_CODE_FALLBACK)
    }

    /// Text reported when a template cannot be formatted.
    pub fn format_failed(&self) -> &str {
        self.try_get(keys::FORMAT_FAILED).unwrap_or(FORMAT_FAILED_FALLBACK)
    }
}

static SLOTS: [OnceLock<MessageCatalog>; TABLE_COUNT] = [const { OnceLock::new() }; TABLE_COUNT];

fn table_catalog(index: usize) -> &'static MessageCatalog {
    SLOTS[index].get_or_init(|| {
        let table = &TABLES[index];
        let bundle = format!("{}{}", XSLT_ERROR_RESOURCES, table.suffix);
        tracing::debug!(bundle = %bundle, keys = table.messages.len(), "building embedded catalog");
        MessageCatalog::from_entries(
            bundle,
            Locale::new(table.language, table.country),
            table.headers.into(),
            table.messages.iter().copied(),
        )
    })
}

/// Embedded catalog for a full bundle name, e.g. `XSLTErrorResources_zh_TW`.
pub(crate) fn builtin(bundle: &str) -> Option<&'static MessageCatalog> {
    let suffix = bundle.strip_prefix(XSLT_ERROR_RESOURCES)?;
    TABLES
        .iter()
        .position(|t| t.suffix == suffix)
        .map(table_catalog)
}

/// Every embedded catalog, root first.
pub fn builtin_catalogs() -> Vec<&'static MessageCatalog> {
    (0..TABLE_COUNT).map(table_catalog).collect()
}

/// Full names of the embedded bundles, root first.
pub(crate) fn builtin_bundle_names() -> Vec<String> {
    TABLES
        .iter()
        .map(|t| format!("{}{}", XSLT_ERROR_RESOURCES, t.suffix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::keys;

    fn root() -> &'static MessageCatalog {
        builtin(XSLT_ERROR_RESOURCES).expect("root bundle is embedded")
    }

    #[test]
    fn root_keys_all_resolve() {
        let catalog = root();
        for key in keys::ALL {
            let value = catalog.try_get(key);
            assert!(value.is_some(), "root key '{}' should resolve", key);
        }
    }

    #[test]
    fn japanese_lookups() {
        let ja = builtin("XSLTErrorResources_ja").expect("ja bundle");
        assert_eq!(ja.get(keys::ER_NO_CURLYBRACE), "エラー: 式内では '{' を使用できません。");
        assert_eq!(ja.headers().error, "エラー: ");
        assert_eq!(ja.locale(), &Locale::new("ja", ""));
    }

    #[test]
    fn chinese_bundles_carry_country() {
        let cn = builtin("XSLTErrorResources_zh_CN").expect("zh_CN bundle");
        let tw = builtin("XSLTErrorResources_zh_TW").expect("zh_TW bundle");
        assert_eq!(cn.locale().country(), "CN");
        assert_eq!(tw.locale().country(), "TW");
        assert_ne!(cn.get(keys::ER_NO_CURLYBRACE), tw.get(keys::ER_NO_CURLYBRACE));
    }

    #[test]
    fn unknown_bundles_are_absent() {
        assert!(builtin("XSLTErrorResources_de").is_none());
        assert!(builtin("XSLTErrorResources_zh").is_none());
        assert!(builtin("OtherResources_ja").is_none());
    }

    #[test]
    fn unknown_key_returns_bad_code_text() {
        assert_eq!(root().get("NO_SUCH_KEY"), "Parameter to createMessage was out of bounds");
        assert!(root().try_get("NO_SUCH_KEY").is_none());
    }

    #[test]
    fn catalog_without_bad_code_uses_literal() {
        let catalog = MessageCatalog::from_entries("Tiny", Locale::default(), Headers::default(), [("A", "a")]);
        assert_eq!(catalog.get("B"), "BAD_CODE");
        assert_eq!(catalog.format_failed(), "FORMAT_FAILED");
    }

    #[test]
    fn from_entries_keeps_last_value_and_first_position() {
        let catalog = MessageCatalog::from_entries(
            "Tiny",
            Locale::default(),
            Headers::default(),
            [("A", "first"), ("B", "b"), ("A", "second")],
        );
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("A"), "second");
        assert_eq!(catalog.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn builtin_catalogs_are_shared() {
        let a = builtin("XSLTErrorResources_ko").expect("ko bundle");
        let b = builtin("XSLTErrorResources_ko").expect("ko bundle");
        assert!(std::ptr::eq(a, b));
        assert_eq!(builtin_catalogs().len(), TABLE_COUNT);
        assert_eq!(builtin_catalogs()[0].bundle(), XSLT_ERROR_RESOURCES);
    }

    #[test]
    fn all_catalogs_same_key_count_as_root() {
        let root_count = root().len();
        for catalog in builtin_catalogs() {
            assert_eq!(catalog.len(), root_count, "{} key count mismatch", catalog.bundle());
        }
    }

    #[test]
    fn bundle_names_match_catalogs() {
        let names = builtin_bundle_names();
        let from_catalogs: Vec<String> = builtin_catalogs().iter().map(|c| c.bundle().to_string()).collect();
        assert_eq!(names, from_catalogs);
    }
}
