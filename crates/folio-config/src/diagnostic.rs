// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with typo suggestions.
//!
//! Every figment error becomes a [`ConfigError`] that miette can render with
//! the offending line highlighted. Unknown keys carry a "did you mean"
//! suggestion based on Jaro-Winkler similarity.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use figment::error::Kind;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum Jaro-Winkler similarity for a suggestion to be offered.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration problem, renderable as a miette diagnostic.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("unknown configuration key `{key}` in {}", section_label(.section))]
    #[diagnostic(
        code(folio::config::unknown_key),
        help("{}", unknown_key_help(suggestion.as_deref(), known))
    )]
    UnknownKey {
        key: String,
        /// Table the key appeared in, `None` at the top level.
        section: Option<String>,
        suggestion: Option<String>,
        /// Comma-separated keys accepted in that table.
        known: String,
        #[label("not recognized here")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("invalid value for `{key}`: found {found}")]
    #[diagnostic(code(folio::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        /// Dotted path of the key, e.g. `server.port`.
        key: String,
        found: String,
        expected: String,
        #[label("invalid value")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(folio::config::missing_key),
        help("add `{key} = <value>` to folio.toml")
    )]
    MissingKey { key: String },

    /// A value parsed fine but is not acceptable.
    #[error("validation error: {message}")]
    #[diagnostic(code(folio::config::validation))]
    Validation { message: String },

    #[error("configuration error: {0}")]
    #[diagnostic(code(folio::config::other))]
    Other(String),
}

fn section_label(section: &Option<String>) -> String {
    match section {
        Some(s) => format!("[{s}]"),
        None => "the top level".to_string(),
    }
}

fn unknown_key_help(suggestion: Option<&str>, known: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid keys: {known}"),
        None => format!("valid keys: {known}"),
    }
}

impl ConfigError {
    /// Convert every error carried by `err` into a diagnostic.
    ///
    /// `sources` pairs a file path with its contents and is used to attach
    /// source spans. When exactly one source is given it is used for every
    /// error regardless of where figment says the value came from.
    pub fn from_figment(err: figment::Error, sources: &[(String, String)]) -> Vec<Self> {
        err.into_iter()
            .map(|error| {
                let path = error.path.clone();
                match &error.kind {
                    Kind::UnknownField(field, expected) => {
                        let section = path.first().cloned();
                        let (span, src) = locate(&error, sources, section.as_deref(), field);
                        ConfigError::UnknownKey {
                            key: field.clone(),
                            suggestion: suggest_key(field, expected),
                            known: expected.join(", "),
                            section,
                            span,
                            src,
                        }
                    }
                    Kind::InvalidType(found, expected) => {
                        let (section, field) = match path.split_last() {
                            Some((field, parents)) => (parents.first().cloned(), field.clone()),
                            None => (None, String::new()),
                        };
                        let (span, src) = locate(&error, sources, section.as_deref(), &field);
                        ConfigError::InvalidType {
                            key: path.join("."),
                            found: found.to_string(),
                            expected: expected.clone(),
                            span,
                            src,
                        }
                    }
                    Kind::MissingField(field) if path.is_empty() => ConfigError::MissingKey {
                        key: field.to_string(),
                    },
                    Kind::MissingField(field) => ConfigError::MissingKey {
                        key: format!("{}.{field}", path.join(".")),
                    },
                    _ => ConfigError::Other(error.to_string()),
                }
            })
            .collect()
    }
}

/// Resolve the source file an error came from and the span of `field` in it.
fn locate(
    error: &figment::Error,
    sources: &[(String, String)],
    section: Option<&str>,
    field: &str,
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    let origin = error
        .metadata
        .as_ref()
        .and_then(|m| m.source.as_ref())
        .and_then(|s| match s {
            figment::Source::File(path) => Some(path.display().to_string()),
            _ => None,
        });

    let source = match (origin, sources) {
        (Some(origin), _) => sources.iter().find(|(path, _)| *path == origin),
        (None, [only]) => Some(only),
        (None, _) => None,
    };

    let Some((path, content)) = source else {
        return (None, None);
    };
    match locate_key(content, section, field) {
        Some(offset) => (
            Some(SourceSpan::new(offset.into(), field.len())),
            Some(NamedSource::new(path, content.clone())),
        ),
        None => (None, None),
    }
}

/// Byte offset of `field` inside the TOML table `section`.
///
/// `None` for `section` means the top level, before any table header. A
/// top-level field that is itself a table is found by its `[field]` header.
pub fn locate_key(content: &str, section: Option<&str>, field: &str) -> Option<usize> {
    let mut current: Option<&str> = None;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        let trimmed = line.trim();

        if let Some(header) = trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            let header = header.trim();
            if section.is_none() && header == field {
                return Some(offset + indent + 1);
            }
            current = Some(header);
        } else if current == section {
            let key = trimmed.split_once('=').map(|(k, _)| k.trim());
            if key == Some(field) {
                return Some(offset + indent);
            }
        }

        offset += line.len();
    }

    None
}

/// The closest candidate to `unknown`, if any is similar enough.
pub fn suggest_key(unknown: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|c| (strsim::jaro_winkler(unknown, c), *c))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, c)| c.to_string())
}

/// Print each error to stderr with miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    let handler = miette::GraphicalReportHandler::new();
    for error in errors {
        let mut out = String::new();
        match handler.render_report(&mut out, error as &dyn Diagnostic) {
            Ok(()) => eprint!("{out}"),
            Err(_) => eprintln!("Error: {error}"),
        }
    }
}
