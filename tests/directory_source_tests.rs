// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for file-backed catalogs layered over the built-in ones

use std::fs;
use tempfile::TempDir;
use xslt_messages::audit::audit_source;
use xslt_messages::i18n::{DirectorySource, ResolutionStep, SourceChain};
use xslt_messages::{keys, BuiltinCatalogs, CatalogLoader, CatalogSource, Locale, XSLT_ERROR_RESOURCES};

fn german_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("XSLTErrorResources_de.yaml"),
        concat!(
            "headers:\n",
            "  error: \"Fehler: \"\n",
            "  warning: \"Warnung: \"\n",
            "messages:\n",
            "  ER_NO_NAME_ATTRIB: \"{0} muss ein name-Attribut haben.\"\n",
            "  ER_ILLEGAL_ATTRIBUTE_VALUE: \"Attribut {0} hat einen unzulässigen Wert: {1}\"\n",
        ),
    )
    .unwrap();
    dir
}

fn chain(dir: &TempDir) -> SourceChain {
    SourceChain::new()
        .with(DirectorySource::open(dir.path()).expect("open catalog dir"))
        .with(BuiltinCatalogs)
}

#[test]
fn test_directory_catalog_is_selected_for_its_locale() {
    let dir = german_dir();
    let loader = CatalogLoader::new(chain(&dir));
    let res = loader
        .resolve(XSLT_ERROR_RESOURCES, &Locale::new("de", "AT"))
        .expect("resolves");
    assert_eq!(res.catalog.bundle(), "XSLTErrorResources_de");
    assert_eq!(res.step, ResolutionStep::Exact);

    let text = res
        .catalog
        .create_error(keys::ER_NO_NAME_ATTRIB, &["xsl:param"]);
    assert_eq!(text, "Fehler: xsl:param muss ein name-Attribut haben.");
}

#[test]
fn test_builtins_still_served_behind_directory() {
    let dir = german_dir();
    let loader = CatalogLoader::new(chain(&dir));
    let ja = loader
        .load(XSLT_ERROR_RESOURCES, &Locale::new("ja", "JP"))
        .expect("ja");
    assert_eq!(ja.bundle(), "XSLTErrorResources_ja");
}

#[test]
fn test_directory_root_overrides_builtin_root() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("XSLTErrorResources.json"),
        r#"{"messages": {"BAD_CODE": "custom out of bounds"}}"#,
    )
    .unwrap();
    let loader = CatalogLoader::new(chain(&dir));
    let root = loader
        .load(XSLT_ERROR_RESOURCES, &Locale::new("sv", "SE"))
        .expect("root");
    assert_eq!(root.get("NOT_A_KEY"), "custom out of bounds");
}

#[test]
fn test_partial_catalog_is_flagged_by_audit() {
    let dir = german_dir();
    let report = audit_source(&chain(&dir), XSLT_ERROR_RESOURCES).expect("audit");
    let de = report.bundle("XSLTErrorResources_de").expect("de audited");
    assert_eq!(de.extra.len(), 0);
    assert_eq!(de.missing.len(), keys::ALL.len() - 2);
    assert!(de.findings.is_empty());
    assert!(!report.is_clean());
}

#[test]
fn test_directory_only_source_without_root_is_fatal_for_others() {
    let dir = german_dir();
    let source = DirectorySource::open(dir.path()).unwrap();
    assert_eq!(source.bundles(), vec!["XSLTErrorResources_de".to_string()]);
    let loader = CatalogLoader::new(source);
    assert!(loader
        .load(XSLT_ERROR_RESOURCES, &Locale::new("ko", "KR"))
        .is_err());
}
