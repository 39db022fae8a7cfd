//! Unified error types for nanodiff.
//!
//! The diff engine itself only fails when an underlying stream fails; the
//! remaining variants belong to input provisioning, configuration and
//! report output.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for nanodiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NanodiffError {
    /// Missing or surplus positional arguments
    #[error("Invalid arguments: {0}")]
    Argument(String),

    /// An input path does not exist
    #[error("'{}': File not found", path.display())]
    PathNotFound { path: PathBuf },

    /// An input path exists but is not a regular file
    #[error("'{}': Not a file", path.display())]
    NotRegularFile { path: PathBuf },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Report serialization errors
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for nanodiff operations
pub type Result<T> = std::result::Result<T, NanodiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl NanodiffError {
    /// Create an argument error
    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument(message.into())
    }

    /// Create a not-found error for an input path
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Create a not-a-regular-file error for an input path
    pub fn not_regular_file(path: impl Into<PathBuf>) -> Self {
        Self::NotRegularFile { path: path.into() }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for NanodiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for NanodiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::Report {
            context: "JSON serialization".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to the error's existing context, so a chain
/// like `"reading actual output: unexpected EOF"` shows the path through the
/// code. Path errors are user-facing as-is and keep their message.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<NanodiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: NanodiffError, new_ctx: &str) -> NanodiffError {
    match err {
        NanodiffError::Io {
            path,
            message,
            source,
        } => NanodiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        NanodiffError::Report {
            context: existing,
            source,
        } => NanodiffError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        NanodiffError::Argument(msg) => NanodiffError::Argument(chain_context(new_ctx, &msg)),
        NanodiffError::Config(msg) => NanodiffError::Config(chain_context(new_ctx, &msg)),
        other @ (NanodiffError::PathNotFound { .. } | NanodiffError::NotRegularFile { .. }) => {
            other
        }
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an argument error with the given message.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| NanodiffError::Argument(context.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_error_display() {
        let err = NanodiffError::path_not_found("missing.txt");
        assert_eq!(err.to_string(), "'missing.txt': File not found");

        let err = NanodiffError::not_regular_file("/tmp");
        assert_eq!(err.to_string(), "'/tmp': Not a file");
    }

    #[test]
    fn test_io_error_mentions_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = NanodiffError::io("/path/to/expected.txt", io_err);

        assert!(err.to_string().contains("/path/to/expected.txt"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof").into())
        }

        fn outer() -> Result<()> {
            inner().context("reading line").context("actual output")
        }

        match outer() {
            Err(NanodiffError::Io { message, .. }) => {
                assert_eq!(message, "actual output: reading line: eof");
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_context_keeps_path_errors() {
        let result: Result<()> = Err(NanodiffError::path_not_found("a.txt"));
        let err = result.context("expected output").unwrap_err();
        assert_eq!(err.to_string(), "'a.txt': File not found");
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(NanodiffError::config("bad"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_option_context() {
        let result = None::<PathBuf>.context_none("Missing argument for path to expected output");
        match result {
            Err(NanodiffError::Argument(msg)) => {
                assert_eq!(msg, "Missing argument for path to expected output");
            }
            _ => panic!("Expected Argument error"),
        }
        assert_eq!(Some(3).context_none("unused").unwrap(), 3);
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("outer", "middle: inner"), "outer: middle: inner");
    }
}
