//! Error handling for fastgen.
//!
//! The error system is designed around two principles:
//! 1. **Strongly-typed errors** ([`FastgenError`]) for precise handling in code
//! 2. **User-friendly messages** ([`ErrorContext`]) with actionable suggestions
//!    for CLI users
//!
//! Every failure in the resolver, tree builder, template engine, or archive
//! writer aborts the whole generation run; no partial archive is ever
//! produced. Generation is a pure, deterministic, in-memory computation, so
//! retries are never meaningful - a retry without an input change reproduces
//! the same failure.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fastgen_cli::core::{FastgenError, ErrorContext};
//!
//! let error = FastgenError::TemplateNotFound { template_id: "simple/main_py".into() };
//! let context = ErrorContext::new(error)
//!     .with_suggestion("This indicates a packaging defect; reinstall fastgen");
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for fastgen operations.
///
/// Each variant represents a specific failure mode with enough context to
/// produce an actionable message. Variants marked as builder defects must
/// never occur for valid configurations; hitting one is a bug in the tree
/// builder, not in user input.
#[derive(Error, Debug)]
pub enum FastgenError {
    /// A template id was requested that is not present in the embedded
    /// template registry. Fatal; aborts the run.
    #[error("template '{template_id}' is not registered")]
    TemplateNotFound {
        /// The unregistered template id.
        template_id: String,
    },

    /// The template engine failed to render a registered template.
    #[error("failed to render template '{template_id}'")]
    TemplateRender {
        /// The template that failed to render.
        template_id: String,
        /// The underlying engine error.
        #[source]
        source: tera::Error,
    },

    /// Two generated files resolved to the same archive path.
    ///
    /// This is a tree-builder defect: valid configurations never produce
    /// colliding paths.
    #[error("duplicate generated file path: {path}")]
    DuplicateFile {
        /// The colliding path, relative to the project root.
        path: String,
    },

    /// The underlying zip library failed while assembling the archive.
    #[error("failed to serialize project archive")]
    ArchiveSerialization {
        /// The original cause from the zip library.
        #[source]
        source: zip::result::ZipError,
    },

    /// A manually picked dependency id is not in the catalog.
    #[error("unknown dependency id '{id}'")]
    UnknownDependency {
        /// The id that failed to resolve against the catalog.
        id: String,
        /// Closest catalog id by edit distance, if any is close enough.
        suggestion: Option<String>,
    },

    /// The project configuration is invalid (empty name, duplicate picks, ...).
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Why the configuration was rejected.
        reason: String,
    },

    /// A `fastgen.toml` config file failed to parse.
    ///
    /// Unknown enum values (an out-of-catalog `database`, `packaging`,
    /// `structure`, or `python` value) surface here: the config enums are
    /// closed, so the parse boundary rejects anything outside them instead
    /// of silently ignoring it.
    #[error("invalid config file syntax in {file}")]
    ConfigParse {
        /// Path to the config file that failed to parse.
        file: String,
        /// Specific reason for the parse failure.
        reason: String,
    },

    /// I/O error reading configuration or writing the archive to disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error context wrapper that adds user-friendly messaging.
///
/// Wraps a [`FastgenError`] with an optional suggestion (actionable next
/// step, shown green) and optional details (background, shown yellow).
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error.
    pub error: FastgenError,
    /// Optional suggestion for resolving the error.
    pub suggestion: Option<String>,
    /// Optional additional details about the error.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: FastgenError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add background details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error to stderr with terminal colors.
    ///
    /// Error message in red, details in yellow, suggestion in green. This is
    /// the primary way fastgen presents errors to CLI users.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// Downcasts to [`FastgenError`] where possible and attaches tailored
/// suggestions; other errors get their full cause chain appended so nothing
/// is lost between the library and the terminal.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    match error.downcast::<FastgenError>() {
        Ok(err) => create_error_context(err),
        Err(error) => {
            // Generic error - include the full chain for better diagnostics
            let mut message = error.to_string();
            let chain: Vec<String> =
                error.chain().skip(1).map(std::string::ToString::to_string).collect();

            if !chain.is_empty() {
                message.push_str("\n\nCaused by:");
                for (i, cause) in chain.iter().enumerate() {
                    message.push_str(&format!("\n  {}: {}", i + 1, cause));
                }
            }

            ErrorContext::new(FastgenError::InvalidConfig {
                reason: message,
            })
        }
    }
}

/// Map each [`FastgenError`] variant to a context with tailored suggestions.
fn create_error_context(error: FastgenError) -> ErrorContext {
    let suggestion: Option<String> = match &error {
        FastgenError::TemplateNotFound { .. } | FastgenError::TemplateRender { .. } => Some(
            "This indicates a defect in fastgen itself rather than in your input; \
             please report it with the full command line"
                .to_string(),
        ),
        FastgenError::DuplicateFile { .. } => Some(
            "This is a tree-builder defect; please report the configuration that triggered it"
                .to_string(),
        ),
        FastgenError::ArchiveSerialization { .. } => {
            Some("Check available disk space and retry; the underlying cause is attached".to_string())
        }
        FastgenError::UnknownDependency { suggestion, .. } => Some(match suggestion {
            Some(s) => format!("Did you mean '{s}'? Run 'fastgen catalog' to list all ids"),
            None => "Run 'fastgen catalog' to list all available dependency ids".to_string(),
        }),
        FastgenError::InvalidConfig { .. } => {
            Some("Run 'fastgen new --help' for the accepted configuration values".to_string())
        }
        FastgenError::ConfigParse { file, .. } => Some(format!(
            "Check the TOML syntax and field values in {file}; \
             'fastgen init' writes a known-good starting point"
        )),
        FastgenError::Io(_) => None,
    };

    let details: Option<String> = match &error {
        FastgenError::ConfigParse { .. } => Some(
            "Enum-valued fields (python, packaging, structure, database) reject \
             values outside their documented sets"
                .to_string(),
        ),
        _ => None,
    };

    let mut ctx = ErrorContext::new(error);
    if let Some(s) = suggestion {
        ctx = ctx.with_suggestion(s);
    }
    if let Some(d) = details {
        ctx = ctx.with_details(d);
    }
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = FastgenError::TemplateNotFound {
            template_id: "simple/main_py".to_string(),
        };
        assert_eq!(err.to_string(), "template 'simple/main_py' is not registered");

        let err = FastgenError::DuplicateFile {
            path: "src/main.py".to_string(),
        };
        assert!(err.to_string().contains("duplicate generated file path"));
    }

    #[test]
    fn test_unknown_dependency_suggestion_in_context() {
        let err = FastgenError::UnknownDependency {
            id: "sqlalchemyy".to_string(),
            suggestion: Some("sqlalchemy".to_string()),
        };
        let ctx = user_friendly_error(anyhow::Error::new(err));
        assert!(ctx.suggestion.as_deref().unwrap().contains("sqlalchemy"));
    }

    #[test]
    fn test_generic_error_keeps_chain() {
        let root = anyhow::anyhow!("root cause").context("outer failure");
        let ctx = user_friendly_error(root);
        let rendered = ctx.to_string();
        assert!(rendered.contains("outer failure"));
        assert!(rendered.contains("root cause"));
    }

    #[test]
    fn test_context_display_format() {
        let ctx = ErrorContext::new(FastgenError::InvalidConfig {
            reason: "project name must not be empty".to_string(),
        })
        .with_suggestion("Pass --name");

        let rendered = format!("{ctx}");
        assert!(rendered.contains("project name must not be empty"));
        assert!(rendered.contains("Suggestion: Pass --name"));
    }
}
