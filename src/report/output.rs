// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported audit reports

use crate::audit::AuditReport;
use anyhow::Result;
use clap::ValueEnum;

use super::formatter::ReportFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportOutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl ReportOutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(ReportOutputFormat::Text),
            "json" => Some(ReportOutputFormat::Json),
            "yaml" | "yml" => Some(ReportOutputFormat::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportOutputFormat::Text => "txt",
            ReportOutputFormat::Json => "json",
            ReportOutputFormat::Yaml => "yaml",
        }
    }

    /// Pick a format from an output path's extension.
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }

    pub fn serialize(&self, report: &AuditReport) -> Result<String> {
        match self {
            ReportOutputFormat::Text => Ok(ReportFormatter::new().render(report)),
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::audit_source;
    use crate::i18n::{BuiltinCatalogs, XSLT_ERROR_RESOURCES};
    use std::path::Path;

    fn report() -> AuditReport {
        audit_source(&BuiltinCatalogs, XSLT_ERROR_RESOURCES).expect("audit builtins")
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(ReportOutputFormat::parse("YML"), Some(ReportOutputFormat::Yaml));
        assert_eq!(ReportOutputFormat::parse("txt"), Some(ReportOutputFormat::Text));
        assert_eq!(ReportOutputFormat::parse("ncl"), None);
    }

    #[test]
    fn format_from_path_extension() {
        assert_eq!(
            ReportOutputFormat::from_path(Path::new("out/audit.json")),
            Some(ReportOutputFormat::Json)
        );
        assert_eq!(ReportOutputFormat::from_path(Path::new("audit")), None);
    }

    #[test]
    fn json_output_round_trips() {
        let report = report();
        let json = ReportOutputFormat::Json.serialize(&report).expect("json");
        let back: AuditReport = serde_json::from_str(&json).expect("parse json");
        assert_eq!(back.bundles, report.bundles);
    }

    #[test]
    fn yaml_output_names_bundles() {
        let yaml = ReportOutputFormat::Yaml.serialize(&report()).expect("yaml");
        assert!(yaml.contains("XSLTErrorResources_zh_TW"));
        assert!(yaml.contains("swallowed-placeholder"));
    }

    #[test]
    fn text_output_lists_findings() {
        let text = ReportOutputFormat::Text.serialize(&report()).expect("text");
        assert!(text.contains("XSLTErrorResources_fr"));
        assert!(text.contains("ER_CALL_TO_EXT_FAILED: {0} is quoted out"));
        assert!(!text.contains('\u{1b}'));
    }
}
