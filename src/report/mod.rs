// SPDX-License-Identifier: PMPL-1.0-or-later

//! Audit report output

pub mod formatter;
pub mod output;

use crate::audit::AuditReport;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub use formatter::ReportFormatter;
pub use output::ReportOutputFormat;

/// Save report to file, returning the path written
pub fn save_report<P: AsRef<Path>>(
    report: &AuditReport,
    path: P,
    format: ReportOutputFormat,
) -> Result<PathBuf> {
    ReportFormatter::new().save(report, path, format)
}

/// Print report to console
pub fn print_report(report: &AuditReport) {
    ReportFormatter::new().print(report);
}
