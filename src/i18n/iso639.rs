// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language codes and display names for locales.
//!
//! Used to tell a merely unsupported locale (`de_DE`, which falls back)
//! from a malformed one, and to label catalogs in `locales` and `doctor`
//! output.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Whether `code` is an ISO 639-1 two-letter language code.
///
/// Codes are lowercase; callers normalize through [`crate::Locale`].
///
/// # Examples
/// ```
/// assert!(xslt_messages::i18n::is_valid_iso639_1("ko"));
/// assert!(xslt_messages::i18n::is_valid_iso639_1("zh"));
/// assert!(!xslt_messages::i18n::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    matches!(
        code,
        "aa" | "ab" | "af" | "ak" | "am" | "an" | "ar" | "as" | "av" | "ay" | "az"
            | "ba" | "be" | "bg" | "bh" | "bi" | "bm" | "bn" | "bo" | "br" | "bs"
            | "ca" | "ce" | "ch" | "co" | "cr" | "cs" | "cu" | "cv" | "cy"
            | "da" | "de" | "dv" | "dz"
            | "ee" | "el" | "en" | "eo" | "es" | "et" | "eu"
            | "fa" | "ff" | "fi" | "fj" | "fo" | "fr" | "fy"
            | "ga" | "gd" | "gl" | "gn" | "gu" | "gv"
            | "ha" | "he" | "hi" | "ho" | "hr" | "ht" | "hu" | "hy" | "hz"
            | "ia" | "id" | "ie" | "ig" | "ii" | "ik" | "io" | "is" | "it" | "iu"
            | "ja" | "jv"
            | "ka" | "kg" | "ki" | "kj" | "kk" | "kl" | "km" | "kn" | "ko" | "kr" | "ks" | "ku" | "kv" | "kw" | "ky"
            | "la" | "lb" | "lg" | "li" | "ln" | "lo" | "lt" | "lu" | "lv"
            | "mg" | "mh" | "mi" | "mk" | "ml" | "mn" | "mr" | "ms" | "mt" | "my"
            | "na" | "nb" | "nd" | "ne" | "ng" | "nl" | "nn" | "no" | "nr" | "nv" | "ny"
            | "oc" | "oj" | "om" | "or" | "os"
            | "pa" | "pi" | "pl" | "ps" | "pt"
            | "qu"
            | "rm" | "rn" | "ro" | "ru" | "rw"
            | "sa" | "sc" | "sd" | "se" | "sg" | "si" | "sk" | "sl" | "sm" | "sn" | "so" | "sq" | "sr" | "ss" | "st" | "su" | "sv" | "sw"
            | "ta" | "te" | "tg" | "th" | "ti" | "tk" | "tl" | "tn" | "to" | "tr" | "ts" | "tt" | "tw" | "ty"
            | "ug" | "uk" | "ur" | "uz"
            | "ve" | "vi" | "vo"
            | "wa" | "wo"
            | "xh"
            | "yi" | "yo"
            | "za" | "zh" | "zu"
    )
}

/// English name of a language code, `None` when not listed.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "es" => Some("Spanish"),
        "fr" => Some("French"),
        "de" => Some("German"),
        "ja" => Some("Japanese"),
        "pt" => Some("Portuguese"),
        "zh" => Some("Chinese"),
        "ko" => Some("Korean"),
        "it" => Some("Italian"),
        "ru" => Some("Russian"),
        "ar" => Some("Arabic"),
        "hi" => Some("Hindi"),
        "nl" => Some("Dutch"),
        "sv" => Some("Swedish"),
        "pl" => Some("Polish"),
        "tr" => Some("Turkish"),
        "vi" => Some("Vietnamese"),
        "th" => Some("Thai"),
        "uk" => Some("Ukrainian"),
        "cs" => Some("Czech"),
        "el" => Some("Greek"),
        "he" => Some("Hebrew"),
        "da" => Some("Danish"),
        "fi" => Some("Finnish"),
        "no" | "nb" => Some("Norwegian"),
        "hu" => Some("Hungarian"),
        "ro" => Some("Romanian"),
        "id" => Some("Indonesian"),
        "ms" => Some("Malay"),
        _ => None,
    }
}

/// Name of a language written in that language.
pub fn native_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "es" => Some("Español"),
        "fr" => Some("Français"),
        "de" => Some("Deutsch"),
        "ja" => Some("日本語"),
        "pt" => Some("Português"),
        "zh" => Some("中文"),
        "ko" => Some("한국어"),
        "it" => Some("Italiano"),
        "ru" => Some("Русский"),
        "sv" => Some("Svenska"),
        _ => None,
    }
}

/// English display name for a locale, distinguishing the Chinese scripts.
///
/// ```
/// use xslt_messages::i18n::locale_display_name;
/// assert_eq!(locale_display_name("zh", "TW"), "Traditional Chinese");
/// assert_eq!(locale_display_name("ko", "KR"), "Korean");
/// assert_eq!(locale_display_name("", ""), "English (root)");
/// ```
pub fn locale_display_name(language: &str, country: &str) -> String {
    match (language, country) {
        ("", _) => "English (root)".to_string(),
        ("zh", "CN" | "SG") => "Simplified Chinese".to_string(),
        ("zh", "TW" | "HK" | "MO") => "Traditional Chinese".to_string(),
        (lang, _) => language_name(lang).map(str::to_string).unwrap_or_else(|| lang.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_languages_accepted() {
        for code in ["en", "ja", "ko", "zh", "fr", "it"] {
            assert!(is_valid_iso639_1(code), "{} should be valid", code);
        }
    }

    #[test]
    fn invalid_codes_rejected() {
        assert!(!is_valid_iso639_1("xx"));
        assert!(!is_valid_iso639_1(""));
        assert!(!is_valid_iso639_1("eng"));
        assert!(!is_valid_iso639_1("EN"));
    }

    #[test]
    fn language_names_resolve() {
        assert_eq!(language_name("en"), Some("English"));
        assert_eq!(language_name("ko"), Some("Korean"));
        assert_eq!(language_name("xx"), None);
    }

    #[test]
    fn native_names_resolve() {
        assert_eq!(native_name("ja"), Some("日本語"));
        assert_eq!(native_name("ko"), Some("한국어"));
        assert_eq!(native_name("xx"), None);
    }

    #[test]
    fn display_names_split_chinese_by_region() {
        assert_eq!(locale_display_name("zh", "CN"), "Simplified Chinese");
        assert_eq!(locale_display_name("zh", "TW"), "Traditional Chinese");
        assert_eq!(locale_display_name("zh", ""), "Chinese");
        assert_eq!(locale_display_name("it", ""), "Italian");
        assert_eq!(locale_display_name("xq", ""), "xq");
    }
}
