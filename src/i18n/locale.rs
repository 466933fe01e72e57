// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale identifiers and bundle suffix derivation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::CatalogError;
use super::iso639::is_valid_iso639_1;

/// Languages whose catalogs are split by country as well as language.
const REGIONAL_LANGUAGES: &[&str] = &["zh"];

/// Environment variables consulted for the active locale, highest priority first.
const LOCALE_ENV_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// A `(language, country)` pair.
///
/// Language codes are stored lowercase and country codes uppercase, so
/// `ZH_tw` and `zh_TW` name the same locale. The country may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    language: String,
    country: String,
}

impl Locale {
    pub fn new(language: &str, country: &str) -> Self {
        Self {
            language: language.trim().to_ascii_lowercase(),
            country: country.trim().to_ascii_uppercase(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Parse a POSIX or BCP 47 style tag.
    ///
    /// Accepts `ja`, `ja_JP`, `zh-TW`, `ja_JP.UTF-8` and `de_DE@euro`.
    /// Codeset and modifier are dropped, as are any subtags after the
    /// country. Returns `None` for `C`, `POSIX`, empty input and anything
    /// whose language is not two or three ASCII letters.
    ///
    /// ```
    /// use xslt_messages::Locale;
    /// let locale = Locale::parse("zh_TW.UTF-8").unwrap();
    /// assert_eq!((locale.language(), locale.country()), ("zh", "TW"));
    /// assert!(Locale::parse("C").is_none());
    /// ```
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        if tag.is_empty() || tag.eq_ignore_ascii_case("C") || tag.eq_ignore_ascii_case("POSIX") {
            return None;
        }

        let mut parts = tag.split(['_', '-']);
        let language = parts.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }

        let country = match parts.next() {
            None => "",
            Some(c) if c.len() == 2 && c.bytes().all(|b| b.is_ascii_alphabetic()) => c,
            Some(c) if c.len() == 3 && c.bytes().all(|b| b.is_ascii_digit()) => c,
            Some(_) => return None,
        };

        Some(Self::new(language, country))
    }

    /// The first of `LC_ALL`, `LC_MESSAGES`, `LANG` that names a locale.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Locale::from_env`] with the variable lookup supplied by the
    /// caller.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find_map(|value| Self::parse(&value))
    }

    /// Recover the locale encoded in a bundle suffix such as `_zh_TW`.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::parse(suffix.strip_prefix('_')?)
    }

    /// Bundle suffix for this locale; see [`derive_suffix`].
    pub fn suffix(&self) -> String {
        derive_suffix(&self.language, &self.country)
    }

    /// Suffix of the language-only bundle, e.g. `_zh` for `zh_TW`.
    pub fn language_suffix(&self) -> String {
        format!("_{}", self.language)
    }

    /// Whether the language is a known ISO 639-1 code. Parsing accepts any
    /// two or three letter language, so callers use this to flag typos.
    pub fn has_known_language(&self) -> bool {
        is_valid_iso639_1(&self.language)
    }

    /// `language` or `language_COUNTRY`.
    pub fn tag(&self) -> String {
        if self.country.is_empty() {
            self.language.clone()
        } else {
            format!("{}_{}", self.language, self.country)
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en", "US")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Locale {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CatalogError::InvalidLocale(s.to_string()))
    }
}

/// Bundle suffix for a language and country.
///
/// Most catalogs are keyed by language alone; Chinese is additionally split
/// by country so that `zh_CN` and `zh_TW` select different scripts.
///
/// Any Chinese country is appended, not only `TW`: `zh_CN` asks for
/// `_zh_CN` rather than `_zh`, and `zh_HK` asks for `_zh_HK` (which no
/// built-in bundle provides, so the loader moves on to `_zh` and then the
/// fallback). A country is never appended for other languages, `TW`
/// included.
///
/// ```
/// use xslt_messages::derive_suffix;
/// assert_eq!(derive_suffix("zh", "CN"), "_zh_CN");
/// assert_eq!(derive_suffix("zh", "TW"), "_zh_TW");
/// assert_eq!(derive_suffix("ja", "JP"), "_ja");
/// ```
pub fn derive_suffix(language: &str, country: &str) -> String {
    let language = language.to_ascii_lowercase();
    let country = country.to_ascii_uppercase();
    if REGIONAL_LANGUAGES.contains(&language.as_str()) && !country.is_empty() {
        format!("_{}_{}", language, country)
    } else {
        format!("_{}", language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn suffix_distinguishes_chinese_regions_only() {
        assert_eq!(derive_suffix("zh", "CN"), "_zh_CN");
        assert_eq!(derive_suffix("zh", "TW"), "_zh_TW");
        assert_eq!(derive_suffix("ja", "JP"), "_ja");
        assert_eq!(derive_suffix("ko", "KR"), "_ko");
        assert_eq!(derive_suffix("fr", "CA"), "_fr");
        assert_eq!(derive_suffix("zh", ""), "_zh");
    }

    #[test]
    fn any_chinese_country_is_appended_and_only_for_chinese() {
        assert_eq!(derive_suffix("zh", "HK"), "_zh_HK");
        assert_eq!(derive_suffix("zh", "sg"), "_zh_SG");
        assert_eq!(derive_suffix("en", "TW"), "_en");
    }

    #[test]
    fn parse_accepts_codes_outside_iso639() {
        let locale = Locale::parse("xq_ZZ").expect("shape is valid");
        assert!(!locale.has_known_language());
        assert!(Locale::new("zh", "TW").has_known_language());
    }

    #[test]
    fn suffix_normalizes_case() {
        assert_eq!(derive_suffix("ZH", "tw"), "_zh_TW");
        assert_eq!(Locale::new("Zh", "cn").suffix(), "_zh_CN");
    }

    #[test]
    fn parse_accepts_posix_and_bcp47_forms() {
        assert_eq!(Locale::parse("ja"), Some(Locale::new("ja", "")));
        assert_eq!(Locale::parse("ja_JP"), Some(Locale::new("ja", "JP")));
        assert_eq!(Locale::parse("zh-TW"), Some(Locale::new("zh", "TW")));
        assert_eq!(Locale::parse("ko_KR.UTF-8"), Some(Locale::new("ko", "KR")));
        assert_eq!(Locale::parse("de_DE@euro"), Some(Locale::new("de", "DE")));
        assert_eq!(Locale::parse("es_419"), Some(Locale::new("es", "419")));
        assert_eq!(Locale::parse("fil_PH"), Some(Locale::new("fil", "PH")));
    }

    #[test]
    fn parse_rejects_non_locales() {
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse("C"), None);
        assert_eq!(Locale::parse("C.UTF-8"), None);
        assert_eq!(Locale::parse("POSIX"), None);
        assert_eq!(Locale::parse("j"), None);
        assert_eq!(Locale::parse("english"), None);
        assert_eq!(Locale::parse("ja_JAPAN"), None);
        assert_eq!(Locale::parse("12"), None);
    }

    #[test]
    fn env_lookup_respects_priority() {
        let vars: HashMap<&str, &str> =
            [("LC_ALL", ""), ("LC_MESSAGES", "zh_TW.UTF-8"), ("LANG", "ja_JP.UTF-8")]
                .into_iter()
                .collect();
        let locale = Locale::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(locale, Some(Locale::new("zh", "TW")));
    }

    #[test]
    fn env_lookup_with_c_locale_yields_none() {
        let locale = Locale::from_lookup(|name| (name == "LANG").then(|| "C".to_string()));
        assert_eq!(locale, None);
    }

    #[test]
    fn env_lookup_skips_unparseable_values() {
        let locale = Locale::from_lookup(|name| match name {
            "LC_ALL" => Some("C".to_string()),
            "LANG" => Some("ko_KR.UTF-8".to_string()),
            _ => None,
        });
        assert_eq!(locale, Some(Locale::new("ko", "KR")));
    }

    #[test]
    fn from_suffix_round_trips_builtin_suffixes() {
        for suffix in ["_ja", "_ko", "_zh_CN", "_zh_TW", "_fr", "_it"] {
            let locale = Locale::from_suffix(suffix).expect("suffix should parse");
            assert_eq!(locale.suffix(), suffix);
        }
        assert_eq!(Locale::from_suffix(""), None);
    }

    #[test]
    fn from_str_reports_invalid_input() {
        assert!("ko_KR".parse::<Locale>().is_ok());
        let err = "not a locale".parse::<Locale>().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidLocale(ref s) if s == "not a locale"));
    }

    #[test]
    fn default_is_en_us() {
        let locale = Locale::default();
        assert_eq!(locale.tag(), "en_US");
        assert_eq!(locale.suffix(), "_en");
        assert!(locale.has_known_language());
    }
}
