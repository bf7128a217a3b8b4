//! Declarative option extraction.
//!
//! Describe an option, then [`take`] it out of a list of arguments:
//!
//! ```
//! use lethargy::{take_flag, take_one, take_all, Transform};
//!
//! let mut args: Vec<String> = ["build", "-v", "--jobs", "4", "--features", "a", "b"]
//!     .iter().map(|s| s.to_string()).collect();
//!
//! let verbose = take_flag(["v", "verbose"], &mut args, true)?;
//! let jobs = take_one("jobs", Transform::<u32>::parse(), &mut args, true, false)?;
//! let features = take_all("features", Transform::identity(), &mut args, true)?;
//!
//! assert!(verbose);
//! assert_eq!(jobs, Some(4));
//! assert_eq!(features, ["a", "b"]);
//! assert_eq!(args, ["build"]);
//! # Ok::<(), lethargy::Error>(())
//! ```
//!
//! Options that aren't present give a default (`false`, `None`, placeholders or an
//! empty list) and leave the arguments untouched. Everything else that can go wrong
//! is an [`Error`].

#[cfg(feature = "derive")]
pub use lethargy_derive::Options;

mod error;
mod name;
mod option;
mod take;
mod transform;
pub mod util;
mod value;

pub use error::{ArgsError, BoxError, CauseKind, MissingOption, TransformError, ValidationError};
pub use name::{dashed, is_long, is_short, kebabcase, normalize, skewer, IntoNames, Names};
pub use option::{AnyOption, Arity, Explicit, Flag, Opt, Span, Variadic};
pub use take::{take, take_all, take_debug, take_flag, take_one, take_opt, take_some, take_verbose};
pub use transform::Transform;
pub use value::{FalsyList, Outcome, Taken, Truthy};

/// A struct whose fields are taken from a list of arguments, one option per field.
///
/// Usually derived with `#[derive(Options)]`.
pub trait Options: Sized {
    /// Take every field's option from `args`, in declaration order.
    fn take_from(args: &mut Vec<String>) -> Result<Self, Error>;
    /// One rendered option per field, separated by spaces.
    fn usage() -> String;
}

#[derive(thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Args(#[from] ArgsError),
    #[error(transparent)]
    Missing(#[from] MissingOption),
    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl Error {
    /// Whether the arguments themselves were at fault: too few values, or a missing option.
    pub fn is_option_error(&self) -> bool {
        matches!(self, Self::Args(_) | Self::Missing(_))
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
