use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A syntax error together with the source position it was raised at.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::ArgumentListSeparator { .. } => "ArgumentListSeparator",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unknown token `{}` when expecting an expression",
                token
            )),
            ErrorImpl::ExpectedToken {
                expected,
                context,
                token,
            } => ErrorTip::Suggestion(format!(
                "Expected {} {}, found `{}`",
                expected, context, token
            )),
            ErrorImpl::ArgumentListSeparator { token } => ErrorTip::Suggestion(format!(
                "Expected `)` or `,` in argument list, found `{}`",
                token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unknown token when expecting an expression: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected {expected} {context}, found {token:?}")]
    ExpectedToken {
        expected: String,
        context: String,
        token: String,
    },
    #[error("expected ')' or ',' in argument list, found {token:?}")]
    ArgumentListSeparator { token: String },
}
