// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the catalog audit over the built-in bundles

use xslt_messages::audit::{audit_source, AuditReport, FindingKind};
use xslt_messages::{BuiltinCatalogs, XSLT_ERROR_RESOURCES};

fn builtin_report() -> AuditReport {
    audit_source(&BuiltinCatalogs, XSLT_ERROR_RESOURCES).expect("audit should succeed")
}

#[test]
fn test_audit_covers_every_builtin_bundle() {
    let report = builtin_report();
    let names: Vec<&str> = report.bundles.iter().map(|b| b.bundle.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "XSLTErrorResources",
            "XSLTErrorResources_ja",
            "XSLTErrorResources_ko",
            "XSLTErrorResources_zh_CN",
            "XSLTErrorResources_zh_TW",
            "XSLTErrorResources_fr",
            "XSLTErrorResources_it",
        ]
    );
    assert_eq!(report.reference_bundle, XSLT_ERROR_RESOURCES);
    assert!(report.reference_keys > 300);
}

#[test]
fn test_asian_catalogs_are_clean() {
    let report = builtin_report();
    for bundle in [
        "XSLTErrorResources",
        "XSLTErrorResources_ja",
        "XSLTErrorResources_ko",
        "XSLTErrorResources_zh_CN",
        "XSLTErrorResources_zh_TW",
    ] {
        let audit = report.bundle(bundle).expect("bundle audited");
        assert!(audit.is_clean(), "{} has issues: {:?}", bundle, audit);
    }
}

#[test]
fn test_key_parity_holds_for_all_bundles() {
    for audit in builtin_report().bundles {
        assert!(audit.missing.is_empty(), "{} missing {:?}", audit.bundle, audit.missing);
        assert!(audit.extra.is_empty(), "{} extra {:?}", audit.bundle, audit.extra);
    }
}

#[test]
fn test_french_stray_quote_is_reported() {
    let report = builtin_report();
    let fr = report.bundle("XSLTErrorResources_fr").expect("fr audited");
    assert_eq!(fr.findings.len(), 1);
    assert_eq!(fr.findings[0].key, "ER_CALL_TO_EXT_FAILED");
    assert_eq!(fr.findings[0].kind, FindingKind::SwallowedPlaceholder { index: 0 });
}

#[test]
fn test_italian_stray_quotes_are_reported() {
    let report = builtin_report();
    let it = report.bundle("XSLTErrorResources_it").expect("it audited");
    let mut got: Vec<(String, FindingKind)> = it
        .findings
        .iter()
        .map(|f| (f.key.clone(), f.kind.clone()))
        .collect();
    got.sort_by(|a, b| a.0.cmp(&b.0).then(format!("{:?}", a.1).cmp(&format!("{:?}", b.1))));

    let swallowed = |key: &str, index| (key.to_string(), FindingKind::SwallowedPlaceholder { index });
    assert_eq!(
        got,
        vec![
            swallowed("ER_CLASS_NOT_FOUND_FOR_OPTION", 0),
            swallowed("ER_ILLEGAL_ATTRIBUTE_VALUE", 0),
            swallowed("ER_ILLEGAL_ATTRIBUTE_VALUE", 1),
            swallowed("WG_COUNT_ATTRIB_MATCHES_NO_ANCESTOR", 0),
            swallowed("WG_FUNCTIONS_SHOULD_USE_URL", 0),
            swallowed("WG_PROCESSINGINSTRUCTION_NOTVALID_NCNAME", 0),
        ]
    );
}

#[test]
fn test_report_is_not_clean_overall() {
    let report = builtin_report();
    assert!(!report.is_clean());
    assert_eq!(report.issue_count(), 7);
}

#[test]
fn test_report_timestamp_is_rfc3339() {
    let report = builtin_report();
    assert!(chrono::DateTime::parse_from_rfc3339(&report.generated_at).is_ok());
}
