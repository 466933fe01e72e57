// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localized option summary for the command-line `Process` class.
//!
//! Every line comes from the catalog, so the summary is printed in the
//! catalog's language. Option texts carry their own indentation.

use crate::i18n::keys;
use crate::i18n::MessageCatalog;

/// A titled group of option lines.
#[derive(Debug, Clone, Copy)]
pub struct UsageSection {
    pub title_key: &'static str,
    pub option_keys: &'static [&'static str],
}

pub const COMMON_OPTIONS: UsageSection = UsageSection {
    title_key: keys::XSL_PROC_COMMON_OPTIONS,
    option_keys: &[
        keys::OPTION_XSLTC,
        keys::OPTION_IN,
        keys::OPTION_XSL,
        keys::OPTION_OUT,
        keys::OPTION_E,
        keys::OPTION_EDUMP,
        keys::OPTION_XML,
        keys::OPTION_TEXT,
        keys::OPTION_HTML,
        keys::OPTION_PARAM,
        keys::OPTION_MEDIA,
        keys::OPTION_FLAVOR,
        keys::OPTION_DIAG,
        keys::OPTION_URIRESOLVER,
        keys::OPTION_ENTITYRESOLVER,
        keys::OPTION_CONTENTHANDLER,
    ],
};

pub const XALAN_OPTIONS: UsageSection = UsageSection {
    title_key: keys::XSL_PROC_XALAN_OPTIONS,
    option_keys: &[
        keys::OPTION_QC,
        keys::OPTION_Q,
        keys::OPTION_LF,
        keys::OPTION_CR,
        keys::OPTION_ESCAPE,
        keys::OPTION_INDENT,
        keys::OPTION_VALIDATE,
        keys::OPTION_TT,
        keys::OPTION_TG,
        keys::OPTION_TS,
        keys::OPTION_TTC,
        keys::OPTION_TCLASS,
        keys::OPTION_LINENUMBERS,
        keys::OPTION_INCREMENTAL,
        keys::OPTION_NOOPTIMIMIZE,
        keys::OPTION_RL,
    ],
};

pub const XSLTC_OPTIONS: UsageSection = UsageSection {
    title_key: keys::XSL_PROC_XSLTC_OPTIONS,
    option_keys: &[
        keys::OPTION_XO,
        keys::OPTION_XD,
        keys::OPTION_XJ,
        keys::OPTION_XP,
        keys::OPTION_XN,
        keys::OPTION_XX,
        keys::OPTION_XT,
    ],
};

pub const SECTIONS: &[UsageSection] = &[COMMON_OPTIONS, XALAN_OPTIONS, XSLTC_OPTIONS];

/// Render the full option summary from `catalog`.
pub fn render_usage(catalog: &MessageCatalog) -> String {
    let mut lines = vec![catalog.get(keys::XSL_PROC_OPTION).to_string()];
    for section in SECTIONS {
        lines.push(String::new());
        lines.push(format!("\t\t\t{}", catalog.get(section.title_key)));
        lines.push(String::new());
        lines.extend(section.option_keys.iter().map(|key| catalog.get(key).to_string()));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{BuiltinCatalogs, CatalogLoader, Locale, XSLT_ERROR_RESOURCES};
    use std::collections::HashSet;

    fn catalog(language: &str, country: &str) -> &'static MessageCatalog {
        static LOADER: std::sync::LazyLock<CatalogLoader<BuiltinCatalogs>> =
            std::sync::LazyLock::new(|| CatalogLoader::new(BuiltinCatalogs));
        LOADER
            .load(XSLT_ERROR_RESOURCES, &Locale::new(language, country))
            .expect("builtin catalog")
    }

    #[test]
    fn every_usage_key_exists() {
        for section in SECTIONS {
            assert!(keys::ALL.contains(&section.title_key));
            for key in section.option_keys {
                assert!(keys::ALL.contains(key), "{} is not a catalog key", key);
            }
        }
    }

    #[test]
    fn no_option_listed_twice() {
        let mut seen = HashSet::new();
        for key in SECTIONS.iter().flat_map(|s| s.option_keys.iter()) {
            assert!(seen.insert(*key), "{} listed twice", key);
        }
    }

    #[test]
    fn english_usage_layout() {
        let text = render_usage(catalog("en", "US"));
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Xalan-J command line Process class options:"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("\t\t\t-Common Options-"));
        assert!(text.contains("   [-XSLTC (use XSLTC for transformation)]"));
        assert!(text.contains("\t\t\t-Options for XSLTC-"));
        assert!(text.ends_with("   [-XT (use translet to transform if possible)]\n"));
    }

    #[test]
    fn usage_is_localized() {
        let ja = catalog("ja", "JP");
        let text = render_usage(ja);
        assert!(text.starts_with("Xalan-J コマンド行 Process クラス・オプション:"));
        assert!(!text.contains(ja.bad_code()));
    }
}
