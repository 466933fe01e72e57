// SPDX-License-Identifier: PMPL-1.0-or-later

//! Compile-time message tables, one module per bundle.
//!
//! ## Adding a new language
//!
//! 1. Create `xx.rs` with `HEADERS` and `MESSAGES` covering every key in
//!    [`crate::i18n::keys::ALL`]
//! 2. Declare the module below and add a [`Table`] entry to [`TABLES`]
//! 3. Run the test suite; the parity tests name any key you missed

mod en;
mod fr;
mod it;
mod ja;
mod ko;
mod zh_cn;
mod zh_tw;

/// Header strings as they appear in a table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TableHeaders {
    pub error: &'static str,
    pub warning: &'static str,
    pub xsl: &'static str,
    pub xml: &'static str,
    pub query: &'static str,
    pub error_string: &'static str,
}

/// One embedded bundle.
pub(crate) struct Table {
    /// Bundle suffix; empty for the root bundle.
    pub suffix: &'static str,
    pub language: &'static str,
    pub country: &'static str,
    pub headers: TableHeaders,
    pub messages: &'static [(&'static str, &'static str)],
}

pub(crate) const TABLES: &[Table] = &[
    Table {
        suffix: "",
        language: "en",
        country: "",
        headers: en::HEADERS,
        messages: en::MESSAGES,
    },
    Table {
        suffix: "_ja",
        language: "ja",
        country: "",
        headers: ja::HEADERS,
        messages: ja::MESSAGES,
    },
    Table {
        suffix: "_ko",
        language: "ko",
        country: "",
        headers: ko::HEADERS,
        messages: ko::MESSAGES,
    },
    Table {
        suffix: "_zh_CN",
        language: "zh",
        country: "CN",
        headers: zh_cn::HEADERS,
        messages: zh_cn::MESSAGES,
    },
    Table {
        suffix: "_zh_TW",
        language: "zh",
        country: "TW",
        headers: zh_tw::HEADERS,
        messages: zh_tw::MESSAGES,
    },
    Table {
        suffix: "_fr",
        language: "fr",
        country: "",
        headers: fr::HEADERS,
        messages: fr::MESSAGES,
    },
    Table {
        suffix: "_it",
        language: "it",
        country: "",
        headers: it::HEADERS,
        messages: it::MESSAGES,
    },
];

/// Number of embedded bundles.
pub(crate) const TABLE_COUNT: usize = TABLES.len();

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::keys;
    use std::collections::HashSet;

    #[test]
    fn tables_have_no_duplicate_keys() {
        for table in TABLES {
            let mut seen = HashSet::new();
            for &(key, _) in table.messages {
                assert!(
                    seen.insert(key),
                    "duplicate key '{}' in bundle suffix '{}'",
                    key,
                    table.suffix
                );
            }
        }
    }

    #[test]
    fn all_tables_same_key_count_as_root() {
        let root = TABLES[0].messages.len();
        assert_eq!(root, keys::ALL.len());
        for table in TABLES {
            assert_eq!(
                table.messages.len(),
                root,
                "{} table key count mismatch",
                table.suffix
            );
        }
    }

    #[test]
    fn tables_follow_key_order() {
        for table in TABLES {
            let order: Vec<&str> = table.messages.iter().map(|&(key, _)| key).collect();
            assert_eq!(order, keys::ALL, "{} is out of order", table.suffix);
        }
    }

    #[test]
    fn suffixes_are_unique() {
        let suffixes: HashSet<&str> = TABLES.iter().map(|t| t.suffix).collect();
        assert_eq!(suffixes.len(), TABLE_COUNT);
    }
}
