// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime settings.
//!
//! Precedence, lowest first: built-in defaults, the YAML config file,
//! `XSLT_MESSAGES_*` environment variables, command-line flags. The file is
//! read from `--config` or `XSLT_MESSAGES_CONFIG`; with neither set the
//! defaults are used as they are.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::Locale;

pub const CONFIG_ENV: &str = "XSLT_MESSAGES_CONFIG";
pub const LOCALE_ENV: &str = "XSLT_MESSAGES_LOCALE";
pub const FALLBACK_ENV: &str = "XSLT_MESSAGES_FALLBACK";
pub const CATALOG_DIR_ENV: &str = "XSLT_MESSAGES_CATALOG_DIR";

const DEFAULT_FALLBACK: &str = "en_US";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Locale to load; the process locale when unset.
    pub locale: Option<String>,
    pub fallback_locale: String,
    /// Directory of YAML/JSON catalogs consulted before the built-in ones.
    pub catalog_dir: Option<PathBuf>,
    /// Where the settings were read from, if anywhere.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: None,
            fallback_locale: DEFAULT_FALLBACK.to_string(),
            catalog_dir: None,
            source: None,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        let mut settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing yaml config {}", path.display()))?;
        settings.source = Some(path.to_path_buf());
        Ok(settings)
    }

    /// Settings from `explicit`, else `XSLT_MESSAGES_CONFIG`, with environment
    /// overrides applied.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        Self::discover_with(explicit, |name| std::env::var(name).ok())
    }

    pub fn discover_with<F>(explicit: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| non_empty(lookup(CONFIG_ENV)).map(PathBuf::from));
        let settings = match path {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };
        Ok(settings.with_env_overrides(lookup))
    }

    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = non_empty(lookup(LOCALE_ENV)) {
            self.locale = Some(locale);
        }
        if let Some(fallback) = non_empty(lookup(FALLBACK_ENV)) {
            self.fallback_locale = fallback;
        }
        if let Some(dir) = non_empty(lookup(CATALOG_DIR_ENV)) {
            self.catalog_dir = Some(PathBuf::from(dir));
        }
        self
    }

    /// The configured locale, if any.
    pub fn locale(&self) -> Result<Option<Locale>> {
        self.locale
            .as_deref()
            .map(|tag| {
                tag.parse::<Locale>()
                    .with_context(|| format!("locale setting '{}'", tag))
            })
            .transpose()
    }

    pub fn fallback(&self) -> Result<Locale> {
        self.fallback_locale
            .parse::<Locale>()
            .with_context(|| format!("fallback_locale setting '{}'", self.fallback_locale))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_without_file_or_env() {
        let settings = Settings::discover_with(None, env(&[])).expect("defaults");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.fallback().expect("fallback"), Locale::new("en", "US"));
        assert_eq!(settings.locale().expect("locale"), None);
    }

    #[test]
    fn file_values_are_read() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("xslt-messages.yaml");
        fs::write(&path, "locale: zh_TW\ncatalog_dir: /opt/catalogs\n").expect("write config");

        let settings = Settings::discover_with(Some(path.as_path()), env(&[])).expect("load");
        assert_eq!(settings.locale().expect("locale"), Some(Locale::new("zh", "TW")));
        assert_eq!(settings.fallback_locale, "en_US");
        assert_eq!(settings.catalog_dir, Some(PathBuf::from("/opt/catalogs")));
        assert_eq!(settings.source.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn config_env_names_the_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("settings.yml");
        fs::write(&path, "fallback_locale: ja_JP\n").expect("write config");
        let path_str = path.to_string_lossy().to_string();

        let settings =
            Settings::discover_with(None, env(&[(CONFIG_ENV, path_str.as_str())])).expect("load");
        assert_eq!(settings.fallback().expect("fallback"), Locale::new("ja", "JP"));
    }

    #[test]
    fn env_overrides_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("c.yaml");
        fs::write(&path, "locale: ko\nfallback_locale: fr\n").expect("write config");

        let settings = Settings::discover_with(
            Some(path.as_path()),
            env(&[(LOCALE_ENV, "it_IT"), (FALLBACK_ENV, ""), (CATALOG_DIR_ENV, "cat")]),
        )
        .expect("load");
        assert_eq!(settings.locale.as_deref(), Some("it_IT"));
        assert_eq!(settings.fallback_locale, "fr");
        assert_eq!(settings.catalog_dir, Some(PathBuf::from("cat")));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        let err = Settings::discover_with(Some(dir.path().join("nope.yaml").as_path()), env(&[])).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }

    #[test]
    fn bad_locale_setting_is_reported() {
        let settings = Settings {
            locale: Some("not a locale".to_string()),
            ..Settings::default()
        };
        let err = settings.locale().unwrap_err();
        assert!(err.to_string().contains("locale setting"));
    }
}
