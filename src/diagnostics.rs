// SPDX-License-Identifier: PMPL-1.0-or-later

//! `doctor` self-checks.

use crate::audit::{audit_source, AuditReport};
use crate::config::Settings;
use crate::i18n::{
    builtin_catalogs, BuiltinCatalogs, CatalogError, CatalogLoader, DirectorySource, Locale,
    XSLT_ERROR_RESOURCES,
};
use anyhow::{anyhow, Result};

pub fn run_self_diagnostics(settings: &Settings) -> Result<()> {
    println!("xslt-messages self-diagnostics");

    let checks = collect(settings, Locale::from_env());

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

fn collect(settings: &Settings, env_locale: Option<Locale>) -> Vec<Diagnostic> {
    let audit = audit_source(&BuiltinCatalogs, XSLT_ERROR_RESOURCES);
    vec![
        Diagnostic::ok("version", format!("xslt-messages {}", env!("CARGO_PKG_VERSION"))),
        check_builtins(),
        check_parity(&audit),
        check_placeholders(&audit),
        check_config(settings),
        check_catalog_dir(settings),
        check_locale(settings, env_locale),
    ]
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

struct Diagnostic {
    label: &'static str,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

fn check_builtins() -> Diagnostic {
    let catalogs = builtin_catalogs();
    let empty: Vec<&str> = catalogs
        .iter()
        .filter(|c| c.is_empty())
        .map(|c| c.bundle())
        .collect();
    if empty.is_empty() {
        Diagnostic::ok("built-in catalogs", format!("{} bundles loaded", catalogs.len()))
    } else {
        Diagnostic::error("built-in catalogs", format!("empty bundles: {}", empty.join(", ")))
    }
}

fn check_parity(audit: &Result<AuditReport, CatalogError>) -> Diagnostic {
    match audit {
        Ok(report) => {
            let drifted: Vec<String> = report
                .bundles
                .iter()
                .filter(|b| !b.missing.is_empty() || !b.extra.is_empty())
                .map(|b| format!("{} (-{} +{})", b.bundle, b.missing.len(), b.extra.len()))
                .collect();
            if drifted.is_empty() {
                Diagnostic::ok(
                    "key parity",
                    format!("{} keys in every bundle", report.reference_keys),
                )
            } else {
                Diagnostic::error("key parity", drifted.join(", "))
            }
        }
        Err(err) => Diagnostic::error("key parity", err.to_string()),
    }
}

fn check_placeholders(audit: &Result<AuditReport, CatalogError>) -> Diagnostic {
    match audit {
        Ok(report) => {
            let noisy: Vec<String> = report
                .bundles
                .iter()
                .filter(|b| !b.findings.is_empty())
                .map(|b| format!("{} ({})", b.bundle, b.findings.len()))
                .collect();
            if noisy.is_empty() {
                Diagnostic::ok("placeholders", "all templates format cleanly".to_string())
            } else {
                Diagnostic::warning(
                    "placeholders",
                    format!("findings in {} (run `audit`)", noisy.join(", ")),
                )
            }
        }
        Err(err) => Diagnostic::error("placeholders", err.to_string()),
    }
}

fn check_config(settings: &Settings) -> Diagnostic {
    let Some(path) = &settings.source else {
        return Diagnostic::ok("config", "no config file, using defaults".to_string());
    };
    if let Err(err) = settings.fallback() {
        return Diagnostic::error("config", format!("{}: {:#}", path.display(), err));
    }
    if let Err(err) = settings.locale() {
        return Diagnostic::error("config", format!("{}: {:#}", path.display(), err));
    }
    Diagnostic::ok("config", format!("{} parsed", path.display()))
}

fn check_catalog_dir(settings: &Settings) -> Diagnostic {
    let Some(dir) = &settings.catalog_dir else {
        return Diagnostic::ok("catalog directory", "not configured".to_string());
    };
    match DirectorySource::open(dir) {
        Ok(source) if source.is_empty() => Diagnostic::warning(
            "catalog directory",
            format!("{} contains no catalog files", dir.display()),
        ),
        Ok(source) => Diagnostic::ok(
            "catalog directory",
            format!("{} bundles in {}", source.len(), dir.display()),
        ),
        Err(err) => Diagnostic::error("catalog directory", err.to_string()),
    }
}

fn check_locale(settings: &Settings, env_locale: Option<Locale>) -> Diagnostic {
    let fallback = match settings.fallback() {
        Ok(locale) => locale,
        Err(err) => return Diagnostic::error("active locale", format!("{:#}", err)),
    };
    let requested = match settings.locale() {
        Ok(Some(locale)) => locale,
        Ok(None) => env_locale.unwrap_or_else(|| fallback.clone()),
        Err(err) => return Diagnostic::error("active locale", format!("{:#}", err)),
    };

    if !requested.has_known_language() {
        return Diagnostic::warning(
            "active locale",
            format!("{} is not an ISO 639-1 language code", requested.language()),
        );
    }

    let loader = CatalogLoader::new(BuiltinCatalogs).with_fallback(fallback);
    match loader.resolve(XSLT_ERROR_RESOURCES, &requested) {
        Ok(res) if res.step.is_fallback() && res.catalog.locale().language() != requested.language() => {
            Diagnostic::warning(
                "active locale",
                format!("{} has no catalog, using {}", requested, res.catalog.bundle()),
            )
        }
        Ok(res) => Diagnostic::ok(
            "active locale",
            format!("{} -> {}", requested, res.catalog.bundle()),
        ),
        Err(err) => Diagnostic::error("active locale", err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn find<'a>(checks: &'a [Diagnostic], label: &str) -> &'a Diagnostic {
        checks
            .iter()
            .find(|d| d.label == label)
            .unwrap_or_else(|| panic!("missing check {}", label))
    }

    #[test]
    fn default_settings_have_no_errors() {
        let checks = collect(&Settings::default(), Some(Locale::new("ja", "JP")));
        assert!(checks.iter().all(|d| d.level != Level::Error));
        assert_eq!(find(&checks, "key parity").level, Level::Ok);
        assert_eq!(find(&checks, "active locale").detail, "ja_JP -> XSLTErrorResources_ja");
    }

    #[test]
    fn known_quote_problems_are_warnings() {
        let checks = collect(&Settings::default(), None);
        let placeholders = find(&checks, "placeholders");
        assert_eq!(placeholders.level, Level::Warn);
        assert!(placeholders.detail.contains("XSLTErrorResources_it (6)"));
    }

    #[test]
    fn unsupported_locale_warns() {
        let checks = collect(&Settings::default(), Some(Locale::new("de", "DE")));
        assert_eq!(find(&checks, "active locale").level, Level::Warn);
    }

    #[test]
    fn unknown_language_code_warns() {
        let checks = collect(&Settings::default(), Some(Locale::new("xq", "ZZ")));
        let locale = find(&checks, "active locale");
        assert_eq!(locale.level, Level::Warn);
        assert!(locale.detail.contains("xq is not an ISO 639-1 language code"));
    }

    #[test]
    fn unreadable_catalog_dir_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("Broken.yaml"), "messages: [").expect("write");
        let settings = Settings {
            catalog_dir: Some(dir.path().to_path_buf()),
            ..Settings::default()
        };
        let checks = collect(&settings, None);
        assert_eq!(find(&checks, "catalog directory").level, Level::Error);
    }
}
