use crate::value::Kind;
use quorum_parse::ParseError;
use std::fmt;

pub type ResolveResult<T> = Result<T, ResolveError>;

/// Everything that can go wrong between a raw configuration string and a
/// constructed policy. One variant per failure kind; nothing is swallowed
/// and nothing is retried.
#[derive(Debug, Clone)]
pub enum ResolveError {
    /// The input string could not be parsed as a call expression.
    Parse(ParseError),
    /// No implementation is registered under the qualified name.
    UnknownPolicy { name: String },
    /// The implementation exists but no constructor takes this signature.
    NoMatchingConstructor { name: String, signature: Vec<Kind> },
    /// The type is known but exposes no shared instance.
    MissingSingleton { name: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Parse(e) => write!(f, "{}", e),
            ResolveError::UnknownPolicy { name } => write!(f, "unknown policy `{}`", name),
            ResolveError::NoMatchingConstructor { name, signature } => {
                let sig: Vec<String> = signature.iter().map(|k| k.to_string()).collect();
                write!(
                    f,
                    "no constructor on `{}` matches ({})",
                    name,
                    sig.join(", ")
                )
            }
            ResolveError::MissingSingleton { name } => {
                write!(f, "policy `{}` does not expose a shared instance", name)
            }
        }
    }
}

impl std::error::Error for ResolveError {}

impl From<ParseError> for ResolveError {
    fn from(e: ParseError) -> Self {
        ResolveError::Parse(e)
    }
}
