use std::char::ParseCharError;
use std::error::Error as StdError;
use std::fmt;
use std::net::AddrParseError;
use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;

/// Boxed error returned by a [`Transform`](crate::Transform).
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Malformed input given while building an option, before any arguments are looked at.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Option names cannot be empty")]
    EmptyName,
    #[error("An option needs at least one name")]
    NoNames,
    #[error("The number of values must be greedy or greater than 0")]
    ZeroCount,
}

/// An option was found, but too few values followed it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Expected {expected} argument{} for option '{option}', but found {}",
    plural(.expected),
    summary(.found)
)]
pub struct ArgsError {
    pub option: String,
    pub expected: usize,
    /// The values that did follow the option.
    pub found: Vec<String>,
}

fn plural(n: &usize) -> &'static str {
    if *n == 1 {
        ""
    } else {
        "s"
    }
}

fn summary(found: &[String]) -> String {
    if found.is_empty() {
        return "none".to_string();
    }
    let quoted: Vec<String> = found.iter().map(|s| format!("'{}'", s)).collect();
    format!("{} ({})", found.len(), quoted.join(", "))
}

/// A required option was not in the arguments at all.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing required option '{option}'")]
pub struct MissingOption {
    pub option: String,
}

impl MissingOption {
    pub fn of(option: &impl fmt::Display) -> Self {
        Self {
            option: option.to_string(),
        }
    }
}

/// The kind of failure behind a [`TransformError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CauseKind {
    ParseInt,
    ParseFloat,
    ParseBool,
    ParseChar,
    AddrParse,
    Other,
}

impl CauseKind {
    fn of(err: &(dyn StdError + Send + Sync + 'static)) -> Self {
        if err.is::<ParseIntError>() {
            Self::ParseInt
        } else if err.is::<ParseFloatError>() {
            Self::ParseFloat
        } else if err.is::<ParseBoolError>() {
            Self::ParseBool
        } else if err.is::<ParseCharError>() {
            Self::ParseChar
        } else if err.is::<AddrParseError>() {
            Self::AddrParse
        } else {
            Self::Other
        }
    }
}

/// Converting one of an option's values failed.
///
/// The original failure is kept as the [`source`](StdError::source) of this error.
/// Match on [`kind`](Self::kind) for the common cases, or use [`cause`](Self::cause)
/// to get at the concrete error type.
#[derive(thiserror::Error, Debug)]
#[error("Option '{option}' received an invalid value: '{value}'")]
pub struct TransformError {
    option: String,
    value: String,
    kind: CauseKind,
    #[source]
    source: BoxError,
}

impl TransformError {
    pub fn new(option: &impl fmt::Display, value: impl Into<String>, source: BoxError) -> Self {
        Self {
            option: option.to_string(),
            value: value.into(),
            kind: CauseKind::of(&*source),
            source,
        }
    }

    /// The rendered option that received the value.
    pub fn option(&self) -> &str {
        &self.option
    }
    /// The raw value that couldn't be converted.
    pub fn value(&self) -> &str {
        &self.value
    }
    pub fn kind(&self) -> CauseKind {
        self.kind
    }

    /// The original failure, if it is an `E`.
    pub fn cause<E: StdError + 'static>(&self) -> Option<&E> {
        self.source.downcast_ref::<E>()
    }
    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.source.is::<E>()
    }
    pub fn into_cause(self) -> BoxError {
        self.source
    }
}
