//! CLI error handling

use std::fmt;

use sumcheck_errors::UserFacingError;

/// CLI-specific error type
#[derive(Debug)]
pub enum CliError {
    /// Configuration file or environment error
    Config(sumcheck_errors::Error),
    /// Verification could not start
    Verify(sumcheck_errors::Error),
    /// I/O error
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => {
                write!(f, "Configuration error: ")?;
                write_user_error(f, e)
            }
            CliError::Verify(e) => write_user_error(f, e),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

fn write_user_error(f: &mut fmt::Formatter<'_>, e: &sumcheck_errors::Error) -> fmt::Result {
    write!(f, "{}", e.user_message())?;
    if let Some(code) = e.user_code() {
        write!(f, "\n  Code: {code}")?;
    }
    if let Some(hint) = e.user_hint() {
        write!(f, "\n  Hint: {hint}")?;
    }
    Ok(())
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) | CliError::Verify(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<sumcheck_errors::Error> for CliError {
    fn from(e: sumcheck_errors::Error) -> Self {
        CliError::Verify(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
