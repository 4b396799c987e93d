//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Usage(String),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidInput(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Io(_) => crate::exitcode::IOERR,
            CliError::Infra(e) => match e {
                InfraError::StoreMissing { .. } => crate::exitcode::CANTCREAT,
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(app) => match app {
                    ApplicationError::StoreRead { .. } | ApplicationError::StoreWrite { .. } => {
                        crate::exitcode::IOERR
                    }
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::Domain(_) => crate::exitcode::SOFTWARE,
                },
            },
        }
    }

    /// Full message including the chain of underlying causes.
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !message.contains(&cause_text) {
                message.push_str(": ");
                message.push_str(&cause_text);
            }
            source = std::error::Error::source(cause);
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn given_store_missing_when_exit_code_then_cantcreat() {
        let err = CliError::from(InfraError::StoreMissing {
            path: PathBuf::from("/nope/words.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(err.exit_code(), crate::exitcode::CANTCREAT);
        assert!(err.report().contains("denied"));
    }

    #[test]
    fn given_store_write_failure_when_reported_then_includes_word_and_cause() {
        let err = CliError::from(ApplicationError::StoreWrite {
            word: "apple".into(),
            action: "append",
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        });
        assert_eq!(err.exit_code(), crate::exitcode::IOERR);
        let report = err.report();
        assert!(report.contains("\"apple\""));
        assert!(report.contains("disk full"));
    }

    #[test]
    fn given_invalid_input_when_exit_code_then_usage() {
        assert_eq!(
            CliError::InvalidInput("x".into()).exit_code(),
            crate::exitcode::USAGE
        );
    }
}
