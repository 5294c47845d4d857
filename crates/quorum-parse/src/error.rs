use quorum_ast::span::Span;
use std::fmt;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone)]
pub enum ParseError {
    /// Input does not match the anchored call-expression shape.
    Malformed { msg: String, span: Span },
    /// A numeric fragment could not be parsed as its classified kind.
    BadNumber {
        literal: String,
        target: &'static str,
        span: Span,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Malformed { msg, span } => {
                write!(
                    f,
                    "malformed expression at {}..{}: {}",
                    span.start, span.end, msg
                )
            }
            ParseError::BadNumber {
                literal,
                target,
                span,
            } => {
                write!(
                    f,
                    "invalid {} literal `{}` at {}..{}",
                    target, literal, span.start, span.end
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}
