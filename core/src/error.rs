//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Note: String errors default to `General`; the other string-carrying variants
/// must be constructed explicitly.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The input document could not be parsed into the OpenAPI model.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// Invalid generator configuration.
    #[from(ignore)]
    #[display("Config Error: {_0}")]
    Config(String),

    /// The endpoint renderer rejected a descriptor or module body.
    #[from(ignore)]
    #[display("Render Error: {_0}")]
    Render(String),

    /// The formatting pass failed.
    #[from(ignore)]
    #[display("Format Error: {_0}")]
    Format(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let app_err: AppError = Error::new(ErrorKind::NotFound, "openapi.yaml").into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert_eq!(app_err.to_string(), "IO Error: openapi.yaml");
    }

    #[test]
    fn test_string_conversion() {
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_render_display() {
        let app_err = AppError::Render("missing variable".into());
        assert_eq!(format!("{}", app_err), "Render Error: missing variable");
    }
}
