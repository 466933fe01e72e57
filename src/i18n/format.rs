// SPDX-License-Identifier: PMPL-1.0-or-later

//! Positional message formatting.
//!
//! Templates use the `java.text.MessageFormat` conventions the catalogs were
//! written against:
//!
//! - `{n}` is replaced by argument `n`; `{n,type,style}` also substitutes
//!   argument `n`, the type and style are accepted and ignored
//! - a single quote opens or closes a literal section, `''` is one quote
//! - braces inside a literal section are plain text
//! - `{n}` with no matching argument is written back unchanged
//!
//! A stray apostrophe therefore quotes out everything up to the next one,
//! placeholders included. The audit reports templates where that happens.

use regex::Regex;
use std::collections::BTreeSet;
use std::iter::Peekable;
use std::str::CharIndices;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unmatched braces in the pattern (opened at byte {offset})")]
    UnmatchedBraces { offset: usize },

    #[error("can't parse argument number: {text:?}")]
    BadArgumentIndex { text: String },
}

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)[,}]").expect("placeholder pattern compiles"));

/// Substitute `args` into `template`.
///
/// ```
/// use xslt_messages::i18n::format_template;
/// assert_eq!(
///     format_template("Can not add {0} to {1}", &["a", "b"]).unwrap(),
///     "Can not add a to b"
/// );
/// assert_eq!(
///     format_template("{0} must have a ''test'' attribute.", &["xsl:if"]).unwrap(),
///     "xsl:if must have a 'test' attribute."
/// );
/// ```
pub fn format_template<S: AsRef<str>>(template: &str, args: &[S]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.char_indices().peekable();
    let mut quoted = false;

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '\'' => {
                if matches!(chars.peek(), Some(&(_, '\''))) {
                    chars.next();
                    out.push('\'');
                } else {
                    quoted = !quoted;
                }
            }
            '{' if !quoted => {
                let body = read_argument(&mut chars, offset)?;
                let index_text = body.split(',').next().unwrap_or_default();
                let index = parse_index(index_text)?;
                match args.get(index) {
                    Some(arg) => out.push_str(arg.as_ref()),
                    None => {
                        out.push('{');
                        out.push_str(&index.to_string());
                        out.push('}');
                    }
                }
            }
            _ => out.push(ch),
        }
    }

    Ok(out)
}

/// Distinct argument indices written in the raw template text.
///
/// Quoting is not interpreted, so an index that formatting would treat as
/// literal text is still listed.
pub fn placeholders(template: &str) -> BTreeSet<usize> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Collect an argument body up to its closing brace. Nested braces and
/// quoted sections inside the body are kept as written.
fn read_argument(chars: &mut Peekable<CharIndices<'_>>, offset: usize) -> Result<String, FormatError> {
    let mut body = String::new();
    let mut depth = 0usize;
    let mut quoted = false;

    for (_, ch) in chars.by_ref() {
        if quoted {
            body.push(ch);
            if ch == '\'' {
                quoted = false;
            }
            continue;
        }
        match ch {
            '}' if depth == 0 => return Ok(body),
            '}' => {
                depth -= 1;
                body.push(ch);
            }
            '{' => {
                depth += 1;
                body.push(ch);
            }
            '\'' => {
                quoted = true;
                body.push(ch);
            }
            _ => body.push(ch),
        }
    }

    Err(FormatError::UnmatchedBraces { offset })
}

fn parse_index(text: &str) -> Result<usize, FormatError> {
    let bad = || FormatError::BadArgumentIndex {
        text: text.to_string(),
    };
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    text.parse().map_err(|_| bad())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_ARGS: &[&str] = &[];

    #[test]
    fn substitutes_positional_arguments() {
        let out = format_template("{0} has an illegal attribute: {1}", &["xsl:foo", "bar"]).unwrap();
        assert_eq!(out, "xsl:foo has an illegal attribute: bar");
    }

    #[test]
    fn arguments_may_repeat_and_reorder() {
        let out = format_template("{1}/{0}/{1}", &["a", "b"]).unwrap();
        assert_eq!(out, "b/a/b");
    }

    #[test]
    fn doubled_quote_is_literal() {
        let out = format_template("Can''t transform a Source of type {0}", &["X"]).unwrap();
        assert_eq!(out, "Can't transform a Source of type X");
    }

    #[test]
    fn quoted_brace_is_literal() {
        let out = format_template("Error: Can not have '{' within expression", &["x"]).unwrap();
        assert_eq!(out, "Error: Can not have { within expression");
    }

    #[test]
    fn stray_quote_swallows_placeholder() {
        let out = format_template("Echec de l''appel de l''élément d'extension : {0}", &["X"]).unwrap();
        assert_eq!(out, "Echec de l'appel de l'élément dextension : {0}");
    }

    #[test]
    fn missing_argument_is_written_back() {
        let out = format_template("{0} and {3}", &["a"]).unwrap();
        assert_eq!(out, "a and {3}");
    }

    #[test]
    fn type_and_style_are_ignored() {
        let out = format_template("took {2,number,integer} ms", &["a", "b", "42"]).unwrap();
        assert_eq!(out, "took 42 ms");
    }

    #[test]
    fn closing_brace_outside_argument_is_literal() {
        let out = format_template("Found '}' but no attribute template open!", NO_ARGS).unwrap();
        assert_eq!(out, "Found } but no attribute template open!");
        assert_eq!(format_template("a } b", NO_ARGS).unwrap(), "a } b");
    }

    #[test]
    fn unclosed_brace_is_an_error() {
        let err = format_template("abc {0", &["x"]).unwrap_err();
        assert_eq!(err, FormatError::UnmatchedBraces { offset: 4 });
    }

    #[test]
    fn non_numeric_index_is_an_error() {
        let err = format_template("[-LF {default is CR/LF}]", &["x"]).unwrap_err();
        assert_eq!(
            err,
            FormatError::BadArgumentIndex {
                text: "default is CR/LF".to_string()
            }
        );
        assert!(format_template("{ 0}", &["x"]).is_err());
        assert!(format_template("{}", &["x"]).is_err());
    }

    #[test]
    fn multibyte_text_survives() {
        let out = format_template("{0} に正しくない属性があります: {1}", &["a", "b"]).unwrap();
        assert_eq!(out, "a に正しくない属性があります: b");
    }

    #[test]
    fn placeholders_lists_distinct_indices() {
        let found: Vec<usize> = placeholders("{1} x {0} y {1} z {2,number}").into_iter().collect();
        assert_eq!(found, vec![0, 1, 2]);
        assert!(placeholders("Error: Can not have '{' within expression").is_empty());
        assert!(placeholders("{default is 0}").is_empty());
    }
}
