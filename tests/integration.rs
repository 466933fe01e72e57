// SPDX-License-Identifier: PMPL-1.0-or-later

//! Integration tests for catalog loading and message creation

use std::collections::BTreeSet;
use xslt_messages::i18n::{builtin_catalogs, placeholders};
use xslt_messages::{
    active_catalog, derive_suffix, keys, BuiltinCatalogs, CatalogError, CatalogLoader, Locale,
    MessageCatalog, XSLT_ERROR_RESOURCES,
};

fn load(tag: &str) -> &'static MessageCatalog {
    static LOADER: std::sync::LazyLock<CatalogLoader<BuiltinCatalogs>> =
        std::sync::LazyLock::new(|| CatalogLoader::new(BuiltinCatalogs));
    let locale = Locale::parse(tag).expect("valid locale tag");
    LOADER
        .load(XSLT_ERROR_RESOURCES, &locale)
        .expect("built-in catalogs always resolve")
}

#[test]
fn test_suffix_derivation() {
    assert_eq!(derive_suffix("zh", "CN"), "_zh_CN");
    assert_eq!(derive_suffix("zh", "TW"), "_zh_TW");
    assert_eq!(derive_suffix("ja", "JP"), "_ja");
    assert_eq!(derive_suffix("ko", "KR"), "_ko");
}

#[test]
fn test_each_locale_selects_its_bundle() {
    assert_eq!(load("ja_JP").bundle(), "XSLTErrorResources_ja");
    assert_eq!(load("ko_KR.UTF-8").bundle(), "XSLTErrorResources_ko");
    assert_eq!(load("zh_CN").bundle(), "XSLTErrorResources_zh_CN");
    assert_eq!(load("zh-TW").bundle(), "XSLTErrorResources_zh_TW");
    assert_eq!(load("fr_FR").bundle(), "XSLTErrorResources_fr");
    assert_eq!(load("it").bundle(), "XSLTErrorResources_it");
}

#[test]
fn test_locale_without_catalog_gets_default() {
    for tag in ["de_DE", "pt_BR", "zh_HK", "zh", "en_GB"] {
        assert_eq!(
            load(tag).bundle(),
            XSLT_ERROR_RESOURCES,
            "{} should fall back to the root bundle",
            tag
        );
    }
}

#[test]
fn test_missing_default_is_fatal() {
    let loader = CatalogLoader::new(xslt_messages::i18n::SourceChain::new());
    let err = loader
        .load(XSLT_ERROR_RESOURCES, &Locale::new("ja", "JP"))
        .expect_err("nothing can load");
    match err {
        CatalogError::NoBundles { base } => assert_eq!(base, XSLT_ERROR_RESOURCES),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_every_key_resolves_non_empty_everywhere() {
    for catalog in xslt_messages::i18n::builtin_catalogs() {
        for key in keys::ALL {
            let value = catalog.try_get(key);
            assert!(
                value.is_some_and(|v| !v.is_empty()),
                "{} has no text for {}",
                catalog.bundle(),
                key
            );
        }
    }
}

#[test]
fn test_unknown_key_is_bad_code_not_panic() {
    for tag in ["en", "ja", "ko", "zh_CN", "zh_TW"] {
        let catalog = load(tag);
        assert_eq!(catalog.get("ER_DOES_NOT_EXIST"), catalog.get(keys::BAD_CODE));
        assert!(!catalog.get("ER_DOES_NOT_EXIST").is_empty());
    }
}

#[test]
fn test_ja_keys_match_asian_catalogs_with_same_placeholders() {
    let ja = load("ja");
    for other in [load("ko"), load("zh_CN"), load("zh_TW")] {
        for (key, template) in ja.entries() {
            let theirs = other
                .try_get(key)
                .unwrap_or_else(|| panic!("{} missing {}", other.bundle(), key));
            let ours: BTreeSet<usize> = placeholders(template);
            assert_eq!(
                placeholders(theirs),
                ours,
                "{} placeholders differ for {}",
                other.bundle(),
                key
            );
        }
        assert_eq!(other.len(), ja.len());
    }
}

#[test]
fn test_headers_are_localized() {
    assert_eq!(load("en").headers().error, "Error: ");
    assert_eq!(load("ko").headers().warning, "경고: ");
    assert_eq!(load("zh_CN").headers().error, "错误:");
    assert_eq!(load("it").headers().query, "MODELLO ");
    assert_eq!(load("ja").headers().xsl, "XSLT ");
}

#[test]
fn test_create_error_end_to_end() {
    let zh = load("zh_TW");
    let text = zh.create_error(keys::ER_ILLEGAL_ATTRIBUTE_VALUE, &["select", "@@"]);
    assert!(text.starts_with("錯誤："));
    assert!(text.contains("select"));
    assert!(text.contains("@@"));
}

#[test]
fn test_concurrent_first_use_sees_one_catalog() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let catalog = load("ko") as *const MessageCatalog;
                catalog as usize
            })
        })
        .collect();
    let addresses: BTreeSet<usize> = handles
        .into_iter()
        .map(|h| h.join().expect("thread finished"))
        .collect();
    assert_eq!(addresses.len(), 1);
}

fn is_builtin(catalog: &MessageCatalog) -> bool {
    builtin_catalogs()
        .into_iter()
        .any(|builtin| std::ptr::eq(builtin, catalog))
}

#[test]
fn test_active_catalog_is_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let catalog = active_catalog().expect("built-in root always resolves");
                catalog as *const MessageCatalog as usize
            })
        })
        .collect();
    let addresses: BTreeSet<usize> = handles
        .into_iter()
        .map(|h| h.join().expect("thread finished"))
        .collect();
    assert_eq!(addresses.len(), 1);

    let again = active_catalog().expect("cached catalog");
    assert!(addresses.contains(&(again as *const MessageCatalog as usize)));
}

#[test]
fn test_active_catalog_is_a_builtin_bundle() {
    let catalog = active_catalog().expect("built-in root always resolves");
    assert!(is_builtin(catalog), "{} is not built in", catalog.bundle());
    assert!(catalog.bundle().starts_with(XSLT_ERROR_RESOURCES));
}

#[test]
fn test_load_for_env_resolves_whatever_the_host_locale() {
    let loader = CatalogLoader::new(BuiltinCatalogs);
    let catalog = loader
        .load_for_env(XSLT_ERROR_RESOURCES)
        .expect("fallback reaches the root bundle");
    assert!(is_builtin(catalog));
}
