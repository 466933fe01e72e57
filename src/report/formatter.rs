// SPDX-License-Identifier: PMPL-1.0-or-later

//! Human-readable audit output

use crate::audit::{AuditReport, LocaleAudit};
use anyhow::{Context, Result};
use colored::*;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use super::output::ReportOutputFormat;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, report: &AuditReport) {
        println!("\n{}", "=== XSLT MESSAGE CATALOG AUDIT ===".bold().cyan());
        println!("  Base: {}", report.base);
        println!(
            "  Reference: {} ({} keys)",
            report.reference_bundle, report.reference_keys
        );
        println!("  Generated: {}", report.generated_at.dimmed());
        println!();

        for bundle in &report.bundles {
            self.print_bundle(bundle);
        }

        println!();
        if report.is_clean() {
            println!("{}", "All catalogs consistent".green().bold());
        } else {
            println!(
                "{}",
                format!("{} issue(s) found", report.issue_count()).red().bold()
            );
        }
    }

    fn print_bundle(&self, bundle: &LocaleAudit) {
        let status = if bundle.is_clean() {
            "OK".green()
        } else {
            "ISSUES".red()
        };
        println!(
            "  {:28} {:8} {:>4} keys  [{}]",
            bundle.bundle.bold(),
            bundle.locale,
            bundle.key_count,
            status
        );
        for key in &bundle.missing {
            println!("    - missing {}", key.yellow());
        }
        for key in &bundle.extra {
            println!("    - extra   {}", key.yellow());
        }
        for finding in &bundle.findings {
            println!("    - {}", finding.describe());
        }
    }

    /// Plain-text rendering, no colour codes.
    pub fn render(&self, report: &AuditReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "XSLT message catalog audit");
        let _ = writeln!(out, "base: {}", report.base);
        let _ = writeln!(
            out,
            "reference: {} ({} keys)",
            report.reference_bundle, report.reference_keys
        );
        let _ = writeln!(out, "generated: {}", report.generated_at);
        for bundle in &report.bundles {
            let status = if bundle.is_clean() { "ok" } else { "issues" };
            let _ = writeln!(
                out,
                "{} [{}] {} keys: {}",
                bundle.bundle, bundle.locale, bundle.key_count, status
            );
            for key in &bundle.missing {
                let _ = writeln!(out, "  missing {}", key);
            }
            for key in &bundle.extra {
                let _ = writeln!(out, "  extra {}", key);
            }
            for finding in &bundle.findings {
                let _ = writeln!(out, "  {}", finding.describe());
            }
        }
        let _ = writeln!(out, "issues: {}", report.issue_count());
        out
    }

    /// Write the report to `path`. A path without an extension gets the
    /// format's extension appended; the written path is returned.
    pub fn save<P: AsRef<Path>>(
        &self,
        report: &AuditReport,
        path: P,
        format: ReportOutputFormat,
    ) -> Result<PathBuf> {
        let path = path.as_ref();
        let path = if path.extension().is_none() {
            path.with_extension(format.extension())
        } else {
            path.to_path_buf()
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("creating report parent directory {}", parent.display())
            })?;
        }
        let body = format.serialize(report)?;
        fs::write(&path, body).with_context(|| format!("writing report {}", path.display()))?;
        println!("Report saved to: {}", path.display());
        Ok(path)
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::audit_source;
    use crate::i18n::{BuiltinCatalogs, XSLT_ERROR_RESOURCES};
    use tempfile::TempDir;

    fn report() -> AuditReport {
        audit_source(&BuiltinCatalogs, XSLT_ERROR_RESOURCES).expect("audit builtins")
    }

    #[test]
    fn save_appends_extension_for_bare_path() {
        let dir = TempDir::new().expect("tempdir");
        let written = ReportFormatter::new()
            .save(&report(), dir.path().join("nested/audit"), ReportOutputFormat::Json)
            .expect("save report");
        assert_eq!(written, dir.path().join("nested/audit.json"));
        let body = fs::read_to_string(&written).expect("read report");
        assert!(body.contains("\"reference_bundle\""));
    }

    #[test]
    fn save_keeps_explicit_extension() {
        let dir = TempDir::new().expect("tempdir");
        let target = dir.path().join("audit.out");
        let written = ReportFormatter::new()
            .save(&report(), &target, ReportOutputFormat::Text)
            .expect("save report");
        assert_eq!(written, target);
        let body = fs::read_to_string(&written).expect("read report");
        assert!(body.starts_with("XSLT message catalog audit"));
    }
}
