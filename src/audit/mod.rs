// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog consistency audit.
//!
//! Every bundle of a source is compared against the root bundle:
//!
//! - keys the root has and the bundle lacks, and the reverse
//! - templates whose raw `{n}` indices differ from the root template
//! - placeholders written in the template that vanish when it is formatted,
//!   which happens when a lone apostrophe quotes them out
//! - templates with placeholders that cannot be formatted at all
//!
//! Templates without placeholders are never formatted by message creation,
//! so they are only checked for key parity.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::i18n::{format_template, placeholders, CatalogError, CatalogSource, MessageCatalog};

/// Markers around each substituted argument; private-use code points never
/// appear in catalog text.
const ARG_OPEN: char = '\u{E000}';
const ARG_CLOSE: char = '\u{E001}';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FindingKind {
    PlaceholderMismatch { expected: Vec<usize>, found: Vec<usize> },
    SwallowedPlaceholder { index: usize },
    Unformattable { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub key: String,
    #[serde(flatten)]
    pub kind: FindingKind,
}

impl Finding {
    pub fn describe(&self) -> String {
        match &self.kind {
            FindingKind::PlaceholderMismatch { expected, found } => {
                format!("{}: placeholders {:?}, root has {:?}", self.key, found, expected)
            }
            FindingKind::SwallowedPlaceholder { index } => {
                format!("{}: {{{}}} is quoted out and never substituted", self.key, index)
            }
            FindingKind::Unformattable { error } => format!("{}: {}", self.key, error),
        }
    }
}

/// Audit result for one bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleAudit {
    pub bundle: String,
    pub locale: String,
    pub key_count: usize,
    pub missing: Vec<String>,
    pub extra: Vec<String>,
    pub findings: Vec<Finding>,
}

impl LocaleAudit {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty() && self.findings.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.missing.len() + self.extra.len() + self.findings.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub generated_at: String,
    pub base: String,
    pub reference_bundle: String,
    pub reference_keys: usize,
    pub bundles: Vec<LocaleAudit>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.bundles.iter().all(LocaleAudit::is_clean)
    }

    pub fn issue_count(&self) -> usize {
        self.bundles.iter().map(LocaleAudit::issue_count).sum()
    }

    pub fn bundle(&self, name: &str) -> Option<&LocaleAudit> {
        self.bundles.iter().find(|b| b.bundle == name)
    }
}

/// Audit every bundle of `source` named `base` or `base_*`.
pub fn audit_source<S>(source: &S, base: &str) -> Result<AuditReport, CatalogError>
where
    S: CatalogSource + ?Sized,
{
    let reference = source.try_load(base).ok_or_else(|| CatalogError::NoBundles {
        base: base.to_string(),
    })?;
    let prefix = format!("{}_", base);

    let mut bundles = vec![audit_catalog(reference, reference)];
    for name in source.bundles() {
        if !name.starts_with(&prefix) {
            continue;
        }
        if let Some(catalog) = source.try_load(&name) {
            bundles.push(audit_catalog(reference, catalog));
        }
    }

    let report = AuditReport {
        generated_at: Utc::now().to_rfc3339(),
        base: base.to_string(),
        reference_bundle: reference.bundle().to_string(),
        reference_keys: reference.len(),
        bundles,
    };
    tracing::debug!(
        base,
        bundles = report.bundles.len(),
        issues = report.issue_count(),
        "catalog audit finished"
    );
    Ok(report)
}

/// Compare one catalog against the reference catalog.
pub fn audit_catalog(reference: &MessageCatalog, catalog: &MessageCatalog) -> LocaleAudit {
    let missing = reference
        .keys()
        .filter(|key| !catalog.contains(key))
        .map(str::to_string)
        .collect();
    let extra = catalog
        .keys()
        .filter(|key| !reference.contains(key))
        .map(str::to_string)
        .collect();

    let mut findings = Vec::new();
    for (key, template) in catalog.entries() {
        let found = placeholders(template);
        if let Some(expected_template) = reference.try_get(key) {
            let expected = placeholders(expected_template);
            if expected != found {
                findings.push(Finding {
                    key: key.to_string(),
                    kind: FindingKind::PlaceholderMismatch {
                        expected: expected.into_iter().collect(),
                        found: found.iter().copied().collect(),
                    },
                });
            }
        }
        findings.extend(
            check_formatting(template, &found)
                .into_iter()
                .map(|kind| Finding {
                    key: key.to_string(),
                    kind,
                }),
        );
    }

    LocaleAudit {
        bundle: catalog.bundle().to_string(),
        locale: catalog.locale().tag(),
        key_count: catalog.len(),
        missing,
        extra,
        findings,
    }
}

fn check_formatting(template: &str, indices: &BTreeSet<usize>) -> Vec<FindingKind> {
    let Some(&max) = indices.last() else {
        return Vec::new();
    };
    let args: Vec<String> = (0..=max)
        .map(|i| format!("{}{}{}", ARG_OPEN, i, ARG_CLOSE))
        .collect();

    match format_template(template, &args) {
        Ok(out) => indices
            .iter()
            .filter(|&&i| !out.contains(args[i].as_str()))
            .map(|&index| FindingKind::SwallowedPlaceholder { index })
            .collect(),
        Err(err) => vec![FindingKind::Unformattable {
            error: err.to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Headers, Locale};

    fn catalog(bundle: &str, entries: &[(&str, &str)]) -> MessageCatalog {
        MessageCatalog::from_entries(bundle, Locale::default(), Headers::default(), entries.iter().copied())
    }

    #[test]
    fn identical_catalogs_are_clean() {
        let a = catalog("R", &[("A", "x {0}"), ("B", "y")]);
        let audit = audit_catalog(&a, &a);
        assert!(audit.is_clean());
        assert_eq!(audit.key_count, 2);
    }

    #[test]
    fn reports_missing_and_extra_keys() {
        let reference = catalog("R", &[("A", "a"), ("B", "b")]);
        let other = catalog("R_xx", &[("A", "a"), ("C", "c")]);
        let audit = audit_catalog(&reference, &other);
        assert_eq!(audit.missing, vec!["B"]);
        assert_eq!(audit.extra, vec!["C"]);
        assert_eq!(audit.issue_count(), 2);
    }

    #[test]
    fn reports_placeholder_mismatch() {
        let reference = catalog("R", &[("A", "{0} and {1}")]);
        let other = catalog("R_xx", &[("A", "{0} only")]);
        let audit = audit_catalog(&reference, &other);
        assert_eq!(
            audit.findings,
            vec![Finding {
                key: "A".to_string(),
                kind: FindingKind::PlaceholderMismatch {
                    expected: vec![0, 1],
                    found: vec![0],
                },
            }]
        );
    }

    #[test]
    fn reports_swallowed_placeholder() {
        let reference = catalog("R", &[("A", "call failed: {0}")]);
        let other = catalog("R_fr", &[("A", "l'appel a échoué : {0}")]);
        let audit = audit_catalog(&reference, &other);
        assert_eq!(audit.findings.len(), 1);
        assert_eq!(audit.findings[0].kind, FindingKind::SwallowedPlaceholder { index: 0 });
    }

    #[test]
    fn escaped_quotes_do_not_swallow() {
        let reference = catalog("R", &[("A", "call failed: {0}")]);
        let other = catalog("R_fr", &[("A", "l''appel a échoué : {0}")]);
        assert!(audit_catalog(&reference, &other).is_clean());
    }

    #[test]
    fn reports_unformattable_template() {
        let reference = catalog("R", &[("A", "{0} x")]);
        let other = catalog("R_xx", &[("A", "{0} {x")]);
        let audit = audit_catalog(&reference, &other);
        assert!(matches!(
            audit.findings.as_slice(),
            [Finding { kind: FindingKind::Unformattable { .. }, .. }]
        ));
    }

    #[test]
    fn templates_without_placeholders_are_not_formatted() {
        let reference = catalog("R", &[("LF", "[-LF {default is CR/LF}]")]);
        assert!(audit_catalog(&reference, &reference).is_clean());
    }

    #[test]
    fn finding_serializes_with_kind_tag() {
        let finding = Finding {
            key: "ER_X".to_string(),
            kind: FindingKind::SwallowedPlaceholder { index: 2 },
        };
        let json = serde_json::to_value(&finding).expect("serialize finding");
        assert_eq!(json["key"], "ER_X");
        assert_eq!(json["kind"], "swallowed-placeholder");
        assert_eq!(json["index"], 2);
    }
}
