use crate::domain::model::Operand;
use thiserror::Error;

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter numbers only.";
pub const NO_INPUT_MESSAGE: &str = "No input received. Exiting.";

#[derive(Error, Debug)]
pub enum SumError {
    #[error("Invalid {operand} operand: {value:?}")]
    InvalidInput { operand: Operand, value: String },

    #[error("Input ended before the {operand} operand was supplied")]
    NoInput { operand: Operand },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad or missing user input, handled inside the shell.
    Input,
    /// The terminal itself failed.
    System,
}

impl SumError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SumError::InvalidInput { .. } | SumError::NoInput { .. } => ErrorCategory::Input,
            SumError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    /// The line shown to the user for this error.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SumError::InvalidInput { .. } => INVALID_INPUT_MESSAGE.to_string(),
            SumError::NoInput { .. } => NO_INPUT_MESSAGE.to_string(),
            SumError::IoError(e) => format!("Could not talk to the terminal: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, SumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_recoverable() {
        let invalid = SumError::InvalidInput {
            operand: Operand::First,
            value: "abc".to_string(),
        };
        let missing = SumError::NoInput {
            operand: Operand::Second,
        };

        assert!(invalid.is_recoverable());
        assert!(missing.is_recoverable());
        assert_eq!(invalid.user_friendly_message(), INVALID_INPUT_MESSAGE);
        assert_eq!(missing.user_friendly_message(), NO_INPUT_MESSAGE);
    }

    #[test]
    fn test_io_error_is_system_error() {
        let err = SumError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));

        assert_eq!(err.category(), ErrorCategory::System);
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_display_names_operand() {
        let err = SumError::InvalidInput {
            operand: Operand::Second,
            value: "xyz".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid second operand: \"xyz\"");
    }
}
