// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bundle selection with locale fallback.
//!
//! For a base name and a requested locale the loader tries, in order:
//!
//! 1. `base + suffix(requested)`, e.g. `XSLTErrorResources_zh_TW`
//! 2. `base + "_" + language` when the requested locale has a country
//! 3. `base + suffix(fallback)`, the fallback locale being `en_US` by default
//! 4. `base`, the root bundle
//!
//! Repeated names are tried once. When all of them are absent the result is
//! [`CatalogError::NoBundles`]; there is no retry.

use serde::Serialize;
use std::fmt;
use std::sync::{LazyLock, OnceLock};

use super::catalog::{MessageCatalog, XSLT_ERROR_RESOURCES};
use super::error::CatalogError;
use super::locale::Locale;
use super::source::{BuiltinCatalogs, CatalogSource};

/// Which candidate satisfied a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionStep {
    Exact,
    LanguageOnly,
    Fallback,
    Root,
}

impl ResolutionStep {
    /// Whether the loaded bundle belongs to a locale other than the one asked for.
    pub fn is_fallback(self) -> bool {
        matches!(self, ResolutionStep::Fallback | ResolutionStep::Root)
    }
}

impl fmt::Display for ResolutionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResolutionStep::Exact => "exact",
            ResolutionStep::LanguageOnly => "language-only",
            ResolutionStep::Fallback => "fallback",
            ResolutionStep::Root => "root",
        };
        write!(f, "{}", label)
    }
}

/// Outcome of [`CatalogLoader::resolve`].
#[derive(Debug, Clone)]
pub struct Resolution<'a> {
    pub catalog: &'a MessageCatalog,
    pub requested: Locale,
    /// Bundle name for the exact requested locale.
    pub requested_bundle: String,
    pub step: ResolutionStep,
    /// Every bundle name tried, in order, including the one that loaded.
    pub attempts: Vec<String>,
}

/// Selects catalogs from a [`CatalogSource`].
#[derive(Debug, Clone)]
pub struct CatalogLoader<S> {
    source: S,
    fallback: Locale,
}

impl<S: CatalogSource> CatalogLoader<S> {
    /// Loader with the default `en_US` fallback.
    pub fn new(source: S) -> Self {
        Self {
            source,
            fallback: Locale::default(),
        }
    }

    pub fn with_fallback(mut self, fallback: Locale) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn fallback(&self) -> &Locale {
        &self.fallback
    }

    /// Bundle names to try for `locale`, in order, each tagged with the step
    /// it represents.
    pub fn candidates(&self, base: &str, locale: &Locale) -> Vec<(String, ResolutionStep)> {
        let mut out: Vec<(String, ResolutionStep)> = Vec::with_capacity(4);
        let mut push = |name: String, step| {
            if !out.iter().any(|(n, _)| *n == name) {
                out.push((name, step));
            }
        };

        push(format!("{}{}", base, locale.suffix()), ResolutionStep::Exact);
        if !locale.country().is_empty() {
            push(format!("{}{}", base, locale.language_suffix()), ResolutionStep::LanguageOnly);
        }
        push(format!("{}{}", base, self.fallback.suffix()), ResolutionStep::Fallback);
        push(base.to_string(), ResolutionStep::Root);
        out
    }

    /// Find the best catalog for `locale`, reporting how it was chosen.
    pub fn resolve(&self, base: &str, locale: &Locale) -> Result<Resolution<'_>, CatalogError> {
        let candidates = self.candidates(base, locale);
        let requested_bundle = candidates
            .first()
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| base.to_string());
        let mut attempts = Vec::with_capacity(candidates.len());

        for (name, step) in candidates {
            attempts.push(name.clone());
            let Some(catalog) = self.source.try_load(&name) else {
                tracing::debug!(bundle = %name, step = %step, "bundle not available");
                continue;
            };

            if !step.is_fallback() {
                tracing::debug!(bundle = %name, locale = %locale, step = %step, "catalog loaded");
            } else if catalog.locale().language() == locale.language() {
                tracing::debug!(
                    requested = %requested_bundle,
                    loaded = %name,
                    "no bundle for requested locale; fallback has the same language"
                );
            } else {
                tracing::warn!(
                    requested = %requested_bundle,
                    loaded = %name,
                    fallback = %self.fallback,
                    "no bundle for requested locale, using fallback"
                );
            }

            return Ok(Resolution {
                catalog,
                requested: locale.clone(),
                requested_bundle,
                step,
                attempts,
            });
        }

        Err(CatalogError::NoBundles {
            base: base.to_string(),
        })
    }

    /// The best catalog for `locale`.
    pub fn load(&self, base: &str, locale: &Locale) -> Result<&MessageCatalog, CatalogError> {
        self.resolve(base, locale).map(|r| r.catalog)
    }

    /// The best catalog for the process locale, or the fallback locale when
    /// the environment names none.
    pub fn load_for_env(&self, base: &str) -> Result<&MessageCatalog, CatalogError> {
        let locale = Locale::from_env().unwrap_or_else(|| self.fallback.clone());
        self.load(base, &locale)
    }
}

impl Default for CatalogLoader<BuiltinCatalogs> {
    fn default() -> Self {
        Self::new(BuiltinCatalogs)
    }
}

static BUILTIN_LOADER: LazyLock<CatalogLoader<BuiltinCatalogs>> =
    LazyLock::new(|| CatalogLoader::new(BuiltinCatalogs));
static ACTIVE: OnceLock<&'static MessageCatalog> = OnceLock::new();

/// The embedded `XSLTErrorResources` catalog for the process locale.
///
/// Resolved on the first successful call and reused afterwards; later
/// changes to the environment have no effect.
pub fn active_catalog() -> Result<&'static MessageCatalog, CatalogError> {
    if let Some(catalog) = ACTIVE.get() {
        return Ok(*catalog);
    }
    let catalog = BUILTIN_LOADER.load_for_env(XSLT_ERROR_RESOURCES)?;
    Ok(*ACTIVE.get_or_init(|| catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::catalog::Headers;
    use crate::i18n::source::SourceChain;

    fn loader() -> CatalogLoader<BuiltinCatalogs> {
        CatalogLoader::default()
    }

    fn names(candidates: Vec<(String, ResolutionStep)>) -> Vec<String> {
        candidates.into_iter().map(|(n, _)| n).collect()
    }

    #[test]
    fn candidates_for_chinese_region() {
        let got = names(loader().candidates("XSLTErrorResources", &Locale::new("zh", "TW")));
        assert_eq!(
            got,
            vec![
                "XSLTErrorResources_zh_TW",
                "XSLTErrorResources_zh",
                "XSLTErrorResources_en",
                "XSLTErrorResources",
            ]
        );
    }

    #[test]
    fn candidates_skip_repeats() {
        let got = names(loader().candidates("XSLTErrorResources", &Locale::new("ja", "JP")));
        assert_eq!(
            got,
            vec!["XSLTErrorResources_ja", "XSLTErrorResources_en", "XSLTErrorResources"]
        );

        let got = names(loader().candidates("XSLTErrorResources", &Locale::new("en", "GB")));
        assert_eq!(got, vec!["XSLTErrorResources_en", "XSLTErrorResources"]);
    }

    #[test]
    fn exact_match_wins() {
        let ldr = loader();
        let res = ldr
            .resolve("XSLTErrorResources", &Locale::new("ko", "KR"))
            .expect("ko resolves");
        assert_eq!(res.catalog.bundle(), "XSLTErrorResources_ko");
        assert_eq!(res.step, ResolutionStep::Exact);
        assert_eq!(res.attempts, vec!["XSLTErrorResources_ko"]);
    }

    #[test]
    fn chinese_regions_select_distinct_catalogs() {
        let l = loader();
        let cn = l.load("XSLTErrorResources", &Locale::new("zh", "CN")).expect("zh_CN");
        let tw = l.load("XSLTErrorResources", &Locale::new("zh", "TW")).expect("zh_TW");
        assert_eq!(cn.bundle(), "XSLTErrorResources_zh_CN");
        assert_eq!(tw.bundle(), "XSLTErrorResources_zh_TW");
    }

    #[test]
    fn unsupported_chinese_region_falls_back_to_root() {
        let ldr = loader();
        let res = ldr
            .resolve("XSLTErrorResources", &Locale::new("zh", "HK"))
            .expect("fallback");
        assert_eq!(res.catalog.bundle(), "XSLTErrorResources");
        assert_eq!(res.step, ResolutionStep::Root);
        assert_eq!(res.requested_bundle, "XSLTErrorResources_zh_HK");
        assert!(res.step.is_fallback());
    }

    #[test]
    fn unsupported_language_falls_back() {
        let ldr = loader();
        let catalog = ldr
            .load("XSLTErrorResources", &Locale::new("de", "DE"))
            .expect("fallback");
        assert_eq!(catalog.bundle(), "XSLTErrorResources");
    }

    #[test]
    fn configured_fallback_is_used() {
        let l = loader().with_fallback(Locale::new("ja", "JP"));
        let res = l.resolve("XSLTErrorResources", &Locale::new("de", "")).expect("fallback");
        assert_eq!(res.catalog.bundle(), "XSLTErrorResources_ja");
        assert_eq!(res.step, ResolutionStep::Fallback);
    }

    #[test]
    fn language_only_bundle_from_custom_source() {
        struct One(MessageCatalog);
        impl CatalogSource for One {
            fn try_load(&self, bundle: &str) -> Option<&MessageCatalog> {
                (bundle == self.0.bundle()).then_some(&self.0)
            }
            fn bundles(&self) -> Vec<String> {
                vec![self.0.bundle().to_string()]
            }
        }

        let pt = MessageCatalog::from_entries("Res_pt", Locale::new("pt", ""), Headers::default(), [("A", "a")]);
        let l = CatalogLoader::new(One(pt));
        let res = l.resolve("Res", &Locale::new("pt", "BR")).expect("language-only");
        assert_eq!(res.step, ResolutionStep::LanguageOnly);
        assert_eq!(res.catalog.bundle(), "Res_pt");
    }

    #[test]
    fn nothing_loadable_is_fatal() {
        let l = CatalogLoader::new(SourceChain::new());
        let err = l.load("XSLTErrorResources", &Locale::new("ja", "JP")).unwrap_err();
        assert!(matches!(err, CatalogError::NoBundles { ref base } if base == "XSLTErrorResources"));
        assert!(err.to_string().starts_with("Could not load any resource bundles."));
    }

    #[test]
    fn unknown_base_name_is_fatal() {
        let err = loader().load("OtherResources", &Locale::new("ja", "")).unwrap_err();
        assert!(matches!(err, CatalogError::NoBundles { .. }));
    }

    #[test]
    fn step_labels() {
        assert_eq!(ResolutionStep::LanguageOnly.to_string(), "language-only");
        assert!(!ResolutionStep::Exact.is_fallback());
    }
}
