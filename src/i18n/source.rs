// SPDX-License-Identifier: PMPL-1.0-or-later

//! Where catalogs come from.
//!
//! The loader never touches tables or files directly; it asks a
//! [`CatalogSource`] for a bundle by full name and treats `None` as "not
//! here". Three sources are provided: the embedded tables, a directory of
//! YAML/JSON catalog files, and a chain that tries several sources in order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::catalog::{self, Headers, MessageCatalog};
use super::error::CatalogError;
use super::locale::Locale;

/// A provider of catalogs keyed by full bundle name.
pub trait CatalogSource {
    /// The catalog for `bundle` (e.g. `XSLTErrorResources_ko`), if this
    /// source has one.
    fn try_load(&self, bundle: &str) -> Option<&MessageCatalog>;

    /// Bundle names this source can serve.
    fn bundles(&self) -> Vec<String>;
}

/// The catalogs compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogs;

impl CatalogSource for BuiltinCatalogs {
    fn try_load(&self, bundle: &str) -> Option<&MessageCatalog> {
        catalog::builtin(bundle)
    }

    fn bundles(&self) -> Vec<String> {
        catalog::builtin_bundle_names()
    }
}

/// On-disk catalog file layout.
///
/// ```yaml
/// locale: de_DE
/// headers:
///   error: "Fehler: "
/// messages:
///   ER_NO_CURLYBRACE: "Fehler: '{' ist in einem Ausdruck nicht zulässig"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Locale tag; derived from the file name when absent.
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub headers: Headers,
    #[serde(default)]
    pub messages: BTreeMap<String, String>,
}

impl CatalogFile {
    /// Read a `.yaml`, `.yml` or `.json` catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parse_err = |message: String| CatalogError::Parse {
            path: path.to_path_buf(),
            message,
        };
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|e| parse_err(e.to_string())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| parse_err(e.to_string())),
            _ => Err(parse_err("catalog files must be json/yaml/yml".to_string())),
        }
    }

    /// Turn the file into a catalog named `bundle`.
    pub fn into_catalog(self, bundle: &str) -> Result<MessageCatalog, CatalogError> {
        let locale = match &self.locale {
            Some(tag) => tag.parse::<Locale>()?,
            None => locale_from_bundle_name(bundle),
        };
        Ok(MessageCatalog::from_entries(bundle, locale, self.headers, self.messages))
    }
}

/// `XSLTErrorResources_zh_TW` names `zh_TW` and `My_Res_de` names `de`; a
/// name without a locale suffix is treated as an English root bundle.
///
/// Suffixes follow the bundle naming convention: a lowercase language,
/// optionally followed by an uppercase (or numeric) country.
fn locale_from_bundle_name(bundle: &str) -> Locale {
    let mut segments = bundle.rsplit('_');
    let last = segments.next().unwrap_or_default();
    let suffix = match (segments.next(), segments.next()) {
        (Some(language), Some(_)) if is_country_segment(last) && is_language_segment(language) => {
            Some(format!("_{}_{}", language, last))
        }
        (Some(_), _) if is_language_segment(last) => Some(format!("_{}", last)),
        _ => None,
    };
    suffix
        .and_then(|suffix| Locale::from_suffix(&suffix))
        .unwrap_or_else(|| Locale::new("en", ""))
}

fn is_language_segment(segment: &str) -> bool {
    (2..=3).contains(&segment.len()) && segment.bytes().all(|b| b.is_ascii_lowercase())
}

fn is_country_segment(segment: &str) -> bool {
    (segment.len() == 2 && segment.bytes().all(|b| b.is_ascii_uppercase()))
        || (segment.len() == 3 && segment.bytes().all(|b| b.is_ascii_digit()))
}

fn is_catalog_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("json") | Some("yaml") | Some("yml")
    )
}

/// Catalogs read from a directory, one file per bundle.
///
/// The file stem is the bundle name, so `XSLTErrorResources_de.yaml` serves
/// `XSLTErrorResources_de`. Files are read once, when the source is opened.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    catalogs: BTreeMap<String, MessageCatalog>,
}

impl DirectorySource {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let root = dir.as_ref().to_path_buf();
        let io_err = |source: std::io::Error| CatalogError::Io {
            path: root.clone(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(&root).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && is_catalog_file(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut catalogs = BTreeMap::new();
        for path in paths {
            let Some(bundle) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
                continue;
            };
            if catalogs.contains_key(&bundle) {
                tracing::warn!(path = %path.display(), bundle = %bundle, "duplicate catalog file ignored");
                continue;
            }
            let catalog = CatalogFile::load(&path)?.into_catalog(&bundle)?;
            tracing::debug!(path = %path.display(), bundle = %bundle, keys = catalog.len(), "loaded catalog file");
            catalogs.insert(bundle, catalog);
        }

        Ok(Self { root, catalogs })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}

impl CatalogSource for DirectorySource {
    fn try_load(&self, bundle: &str) -> Option<&MessageCatalog> {
        self.catalogs.get(bundle)
    }

    fn bundles(&self) -> Vec<String> {
        self.catalogs.keys().cloned().collect()
    }
}

/// Sources tried in order; the first one holding a bundle wins.
#[derive(Default)]
pub struct SourceChain {
    sources: Vec<Box<dyn CatalogSource + Send + Sync>>,
}

impl SourceChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl CatalogSource + Send + Sync + 'static) -> Self {
        self.push(source);
        self
    }

    pub fn push(&mut self, source: impl CatalogSource + Send + Sync + 'static) {
        self.sources.push(Box::new(source));
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl CatalogSource for SourceChain {
    fn try_load(&self, bundle: &str) -> Option<&MessageCatalog> {
        self.sources.iter().find_map(|s| s.try_load(bundle))
    }

    fn bundles(&self) -> Vec<String> {
        let mut names = Vec::new();
        for source in &self.sources {
            for name in source.bundles() {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }
}

impl<S: CatalogSource + ?Sized> CatalogSource for &S {
    fn try_load(&self, bundle: &str) -> Option<&MessageCatalog> {
        (**self).try_load(bundle)
    }

    fn bundles(&self) -> Vec<String> {
        (**self).bundles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::keys;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).expect("write catalog file");
    }

    #[test]
    fn bundle_name_suffix_gives_locale() {
        assert_eq!(locale_from_bundle_name("XSLTErrorResources_zh_TW"), Locale::new("zh", "TW"));
        assert_eq!(locale_from_bundle_name("XSLTErrorResources_de"), Locale::new("de", ""));
        assert_eq!(locale_from_bundle_name("My_Res_de"), Locale::new("de", ""));
        assert_eq!(locale_from_bundle_name("My_Res_pt_BR"), Locale::new("pt", "BR"));
        assert_eq!(locale_from_bundle_name("XSLTErrorResources"), Locale::new("en", ""));
        assert_eq!(locale_from_bundle_name("Custom_Bundle"), Locale::new("en", ""));
    }

    #[test]
    fn builtin_source_lists_root_first() {
        let names = BuiltinCatalogs.bundles();
        assert_eq!(names[0], "XSLTErrorResources");
        assert!(names.contains(&"XSLTErrorResources_zh_TW".to_string()));
        assert!(BuiltinCatalogs.try_load("XSLTErrorResources_ja").is_some());
        assert!(BuiltinCatalogs.try_load("XSLTErrorResources_de").is_none());
    }

    #[test]
    fn directory_source_reads_yaml_and_json() {
        let dir = TempDir::new().expect("tempdir");
        write(
            dir.path(),
            "XSLTErrorResources_de.yaml",
            "headers:\n  error: \"Fehler: \"\nmessages:\n  ER_NO_CURLYBRACE: \"Fehler: '{' ist hier nicht zulässig\"\n",
        );
        write(
            dir.path(),
            "XSLTErrorResources_es.json",
            r#"{"messages": {"ER_NO_CURLYBRACE": "Error: no se permite '{'"}}"#,
        );
        write(dir.path(), "README.txt", "ignored");

        let source = DirectorySource::open(dir.path()).expect("open directory");
        assert_eq!(source.len(), 2);
        assert_eq!(
            source.bundles(),
            vec!["XSLTErrorResources_de".to_string(), "XSLTErrorResources_es".to_string()]
        );

        let de = source.try_load("XSLTErrorResources_de").expect("de catalog");
        assert_eq!(de.headers().error, "Fehler: ");
        assert_eq!(de.headers().warning, "Warning: ");
        assert_eq!(de.locale(), &Locale::new("de", ""));
        assert_eq!(de.get(keys::ER_NO_CURLYBRACE), "Fehler: '{' ist hier nicht zulässig");

        let es = source.try_load("XSLTErrorResources_es").expect("es catalog");
        assert_eq!(es.headers(), &Headers::default());
    }

    #[test]
    fn explicit_locale_overrides_file_name() {
        let dir = TempDir::new().expect("tempdir");
        write(dir.path(), "Custom.yml", "locale: pt_BR\nmessages:\n  A: a\n");
        let source = DirectorySource::open(dir.path()).expect("open directory");
        let catalog = source.try_load("Custom").expect("custom catalog");
        assert_eq!(catalog.locale(), &Locale::new("pt", "BR"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().expect("tempdir");
        write(dir.path(), "Broken.json", "{ not json");
        let err = DirectorySource::open(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { ref path, .. } if path.ends_with("Broken.json")));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = TempDir::new().expect("tempdir");
        let err = DirectorySource::open(dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn chain_prefers_earlier_sources() {
        let dir = TempDir::new().expect("tempdir");
        write(
            dir.path(),
            "XSLTErrorResources_ja.yaml",
            "messages:\n  ER_NO_CURLYBRACE: overridden\n",
        );
        let chain = SourceChain::new()
            .with(DirectorySource::open(dir.path()).expect("open directory"))
            .with(BuiltinCatalogs);

        let ja = chain.try_load("XSLTErrorResources_ja").expect("ja");
        assert_eq!(ja.get(keys::ER_NO_CURLYBRACE), "overridden");
        assert!(chain.try_load("XSLTErrorResources_ko").is_some());

        let names = chain.bundles();
        assert_eq!(
            names.iter().filter(|n| n.as_str() == "XSLTErrorResources_ja").count(),
            1
        );
    }

    #[test]
    fn empty_chain_has_nothing() {
        let chain = SourceChain::new();
        assert!(chain.is_empty());
        assert!(chain.try_load("XSLTErrorResources").is_none());
        assert!(chain.bundles().is_empty());
    }
}
