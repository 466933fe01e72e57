// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message creation on top of a catalog.
//!
//! These are the calls an XSLT processor makes when it reports a problem:
//! look up the template, substitute arguments, and prefix the localized
//! headers. The lenient calls never fail. A missing key yields the catalog's
//! `BAD_CODE` text and a template that cannot be formatted yields the
//! `FORMAT_FAILED` text followed by the raw template.

use serde::{Deserialize, Serialize};

use super::catalog::MessageCatalog;
use super::error::MessageError;
use super::format::format_template;

/// Subsystem a message is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Xslt,
    Xml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl MessageCatalog {
    /// Formatted message for `key`.
    ///
    /// With no arguments the template is returned as written, quotes and
    /// all.
    ///
    /// ```
    /// use xslt_messages::{keys, BuiltinCatalogs, CatalogLoader, Locale, XSLT_ERROR_RESOURCES};
    /// let loader = CatalogLoader::new(BuiltinCatalogs);
    /// let ko = loader.load(XSLT_ERROR_RESOURCES, &Locale::new("ko", "KR")).unwrap();
    /// let msg = ko.create_message(keys::ER_NO_NAME_ATTRIB, &["xsl:param"]);
    /// assert!(msg.starts_with("xsl:param"));
    /// ```
    pub fn create_message<S: AsRef<str>>(&self, key: &str, args: &[S]) -> String {
        let Some(template) = self.try_get(key) else {
            tracing::warn!(key, bundle = self.bundle(), "message key not found");
            return self.bad_code().to_string();
        };
        if args.is_empty() {
            return template.to_string();
        }
        match format_template(template, args) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(key, bundle = self.bundle(), error = %err, "message template failed to format");
                format!("{} {}", self.format_failed(), template)
            }
        }
    }

    /// Strict form of [`MessageCatalog::create_message`].
    pub fn try_create_message<S: AsRef<str>>(&self, key: &str, args: &[S]) -> Result<String, MessageError> {
        let template = self.try_get(key).ok_or_else(|| MessageError::UnknownKey {
            key: key.to_string(),
            bundle: self.bundle().to_string(),
        })?;
        if args.is_empty() {
            return Ok(template.to_string());
        }
        format_template(template, args).map_err(|source| MessageError::Format {
            key: key.to_string(),
            source,
        })
    }

    /// Warning header followed by the formatted message.
    pub fn create_warning<S: AsRef<str>>(&self, key: &str, args: &[S]) -> String {
        format!("{}{}", self.headers().warning, self.create_message(key, args))
    }

    /// Error header followed by the formatted message.
    pub fn create_error<S: AsRef<str>>(&self, key: &str, args: &[S]) -> String {
        format!("{}{}", self.headers().error, self.create_message(key, args))
    }

    /// Prefix `text` with the origin and severity headers, e.g.
    /// `"XSLT Error: ..."`.
    pub fn decorate(&self, origin: Origin, severity: Severity, text: &str) -> String {
        let headers = self.headers();
        let origin = match origin {
            Origin::Xslt => &headers.xsl,
            Origin::Xml => &headers.xml,
        };
        let severity = match severity {
            Severity::Error => &headers.error,
            Severity::Warning => &headers.warning,
        };
        format!("{}{}{}", origin, severity, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::catalog::Headers;
    use crate::i18n::keys;
    use crate::i18n::locale::Locale;
    use crate::i18n::{CatalogLoader, XSLT_ERROR_RESOURCES};

    const NO_ARGS: &[&str] = &[];

    fn load(language: &str, country: &str) -> &'static MessageCatalog {
        crate::i18n::catalog::builtin(&format!(
            "{}{}",
            XSLT_ERROR_RESOURCES,
            Locale::new(language, country).suffix()
        ))
        .expect("embedded bundle")
    }

    fn root() -> &'static MessageCatalog {
        crate::i18n::catalog::builtin(XSLT_ERROR_RESOURCES).expect("root bundle")
    }

    #[test]
    fn substitutes_arguments() {
        let msg = root().create_message(keys::ER_ILLEGAL_ATTRIBUTE_VALUE, &["select", "@@"]);
        assert_eq!(msg, "Attribute: select has an illegal value: @@");
    }

    #[test]
    fn no_arguments_returns_raw_template() {
        let msg = root().create_message(keys::ER_NO_CURLYBRACE, NO_ARGS);
        assert_eq!(msg, "Error: Can not have '{' within expression");
    }

    #[test]
    fn unknown_key_yields_bad_code() {
        let ja = load("ja", "JP");
        assert_eq!(ja.create_message("NOPE", &["x"]), ja.get(keys::BAD_CODE));
        assert!(matches!(
            ja.try_create_message("NOPE", &["x"]),
            Err(MessageError::UnknownKey { .. })
        ));
    }

    #[test]
    fn format_failure_yields_format_failed_and_template() {
        let catalog = MessageCatalog::from_entries(
            "Broken",
            Locale::default(),
            Headers::default(),
            [("K", "value {oops}"), ("FORMAT_FAILED", "could not format")],
        );
        assert_eq!(catalog.create_message("K", &["x"]), "could not format value {oops}");
        assert!(matches!(
            catalog.try_create_message("K", &["x"]),
            Err(MessageError::Format { ref key, .. }) if key == "K"
        ));
        assert_eq!(catalog.create_message("K", NO_ARGS), "value {oops}");
    }

    #[test]
    fn warning_and_error_headers_are_localized() {
        let ja = load("ja", "");
        let warning = ja.create_warning(keys::WG_FOUND_CURLYBRACE, NO_ARGS);
        assert!(warning.starts_with("警告: "));
        let error = ja.create_error(keys::ER_NO_CURLYBRACE, NO_ARGS);
        assert!(error.starts_with("エラー: "));

        let tw = load("zh", "TW");
        assert!(tw.create_error(keys::ER_NO_CURLYBRACE, NO_ARGS).starts_with("錯誤："));
    }

    #[test]
    fn decorate_combines_origin_and_severity() {
        let r = root();
        assert_eq!(r.decorate(Origin::Xslt, Severity::Error, "boom"), "XSLT Error: boom");
        assert_eq!(r.decorate(Origin::Xml, Severity::Warning, "hm"), "XML Warning: hm");
    }

    #[test]
    fn doubled_quotes_collapse_when_formatting() {
        let fr = load("fr", "");
        let msg = fr.create_message(keys::ER_ILLEGAL_ATTRIBUTE_VALUE, &["a", "b"]);
        assert_eq!(msg, "L'attribut : a possède une valeur non valide : b");
    }

    #[test]
    fn localized_messages_through_loader() {
        let loader = CatalogLoader::new(crate::i18n::BuiltinCatalogs);
        let ko = loader
            .load(XSLT_ERROR_RESOURCES, &Locale::new("ko", "KR"))
            .expect("ko");
        let msg = ko.create_message(keys::ER_ILLEGAL_ATTRIBUTE_VALUE, &["a", "b"]);
        assert!(msg.contains('a') && msg.contains('b'));
        assert!(!msg.contains("{0}"));
    }
}
