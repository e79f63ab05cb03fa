use crate::parser;

/// Crate Error type
#[derive(Debug)]
pub enum Error {
    /// Structural grammar violation in the dice string
    Pest(Box<pest::error::Error<parser::Rule>>),
    /// Numeric literal outside the signed 64-bit range
    Overflow(String),
    /// Structurally valid dice string with an invalid combination of values
    Invalid(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pest(e) => write!(f, "{e}"),
            Self::Overflow(n) => write!(f, "number `{n}` out of range"),
            Self::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<pest::error::Error<parser::Rule>> for Error {
    fn from(value: pest::error::Error<parser::Rule>) -> Self {
        Self::Pest(Box::new(value))
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Invalid(value.to_string())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Invalid(value)
    }
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
