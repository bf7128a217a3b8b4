use std::{fmt, ops::Range};

use super::{
    ArgsError, Error, FalsyList, IntoNames, MissingOption, Names, Outcome, Taken, Transform,
    ValidationError,
};

/// Where an option and its values sit in a list of arguments: `[start, end)`.
pub type Span = Range<usize>;

/// An option that knows how to find itself in a list of arguments.
///
/// [`take`](crate::take) drives these methods. `locate` returns `Ok(None)` when the
/// option simply isn't there, in which case `absent` is the result.
pub trait Opt: fmt::Display {
    type Output;

    fn names(&self) -> &Names;

    /// Find the option's name and values in `args`.
    fn locate(&self, args: &[String]) -> Result<Option<Span>, Error>;

    /// Convert the located span (name first, then values) into the output.
    fn extract(&self, span: &[String]) -> Result<Self::Output, Error>;

    /// The output when the option isn't in the arguments.
    fn absent(&self) -> Self::Output;
}

/// An option that takes no values. Its presence is its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    names: Names,
}

impl Flag {
    pub fn new(names: impl IntoNames) -> Result<Self, ValidationError> {
        Ok(Self {
            names: names.into_names()?,
        })
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names)
    }
}

impl Opt for Flag {
    type Output = bool;

    fn names(&self) -> &Names {
        &self.names
    }
    fn locate(&self, args: &[String]) -> Result<Option<Span>, Error> {
        Ok(self.names.index_in(args).map(|idx| idx..idx + 1))
    }
    fn extract(&self, _: &[String]) -> Result<bool, Error> {
        Ok(true)
    }
    fn absent(&self) -> bool {
        false
    }
}

/// An option followed by exactly `count` values.
#[derive(Debug)]
pub struct Explicit<T> {
    names: Names,
    count: usize,
    transform: Transform<T>,
    required: bool,
}

impl<T> Explicit<T> {
    pub fn new(
        names: impl IntoNames,
        count: usize,
        transform: Transform<T>,
    ) -> Result<Self, ValidationError> {
        if count < 1 {
            return Err(ValidationError::ZeroCount);
        }
        Ok(Self {
            names: names.into_names()?,
            count,
            transform,
            required: false,
        })
    }

    /// Fail with [`MissingOption`] instead of returning placeholders when not found.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }
    pub fn is_required(&self) -> bool {
        self.required
    }
}

impl<T> fmt::Display for Explicit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names)?;
        for _ in 0..self.count {
            write!(f, " <{}>", self.transform.metavar())?;
        }
        Ok(())
    }
}

impl<T> Opt for Explicit<T> {
    type Output = Taken<T>;

    fn names(&self) -> &Names {
        &self.names
    }

    fn locate(&self, args: &[String]) -> Result<Option<Span>, Error> {
        let start = match self.names.index_in(args) {
            Some(idx) => idx,
            None if self.required => return Err(MissingOption::of(self).into()),
            None => return Ok(None),
        };
        if args.len() - start - 1 < self.count {
            return Err(ArgsError {
                option: self.to_string(),
                expected: self.count,
                found: args[start + 1..].to_vec(),
            }
            .into());
        }
        Ok(Some(start..start + self.count + 1))
    }

    fn extract(&self, span: &[String]) -> Result<Taken<T>, Error> {
        let mut values = span.iter().skip(1).map(|val| self.transform.convert(self, val));
        if self.count == 1 {
            let val = values.next().transpose()?;
            Ok(Taken::One(val))
        } else {
            let vals = values.collect::<Result<_, _>>()?;
            Ok(Taken::Many(vals))
        }
    }

    fn absent(&self) -> Taken<T> {
        if self.count == 1 {
            Taken::One(None)
        } else {
            Taken::Missing(FalsyList::placeholders(self.count))
        }
    }
}

/// An option that takes every argument after it.
#[derive(Debug)]
pub struct Variadic<T> {
    names: Names,
    transform: Transform<T>,
    required: bool,
}

impl<T> Variadic<T> {
    pub fn new(names: impl IntoNames, transform: Transform<T>) -> Result<Self, ValidationError> {
        Ok(Self {
            names: names.into_names()?,
            transform,
            required: false,
        })
    }

    /// Fail with [`MissingOption`] instead of returning an empty list when not found.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

impl<T> fmt::Display for Variadic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]...", self.names, self.transform.metavar())
    }
}

impl<T> Opt for Variadic<T> {
    type Output = Vec<T>;

    fn names(&self) -> &Names {
        &self.names
    }

    fn locate(&self, args: &[String]) -> Result<Option<Span>, Error> {
        match self.names.index_in(args) {
            Some(start) => Ok(Some(start..args.len())),
            None if self.required => Err(MissingOption::of(self).into()),
            None => Ok(None),
        }
    }

    fn extract(&self, span: &[String]) -> Result<Vec<T>, Error> {
        span.iter()
            .skip(1)
            .map(|val| self.transform.convert(self, val).map_err(Error::from))
            .collect()
    }

    fn absent(&self) -> Vec<T> {
        Vec::new()
    }
}

/// How many values an option takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Flag,
    Exactly(usize),
    /// Everything after the option.
    Greedy,
}

impl From<usize> for Arity {
    fn from(n: usize) -> Self {
        if n == 0 {
            Self::Flag
        } else {
            Self::Exactly(n)
        }
    }
}

/// Any one of the option shapes, picked at runtime from an [`Arity`].
#[derive(Debug)]
pub enum AnyOption<T> {
    Flag(Flag),
    Explicit(Explicit<T>),
    Variadic(Variadic<T>),
}

impl<T> AnyOption<T> {
    /// `Exactly(0)` is treated as a flag. Flags ignore `transform` and `required`.
    pub fn new(
        names: impl IntoNames,
        arity: Arity,
        transform: Transform<T>,
        required: bool,
    ) -> Result<Self, ValidationError> {
        Ok(match arity {
            Arity::Flag | Arity::Exactly(0) => Self::Flag(Flag::new(names)?),
            Arity::Exactly(n) => {
                Self::Explicit(Explicit::new(names, n, transform)?.required(required))
            }
            Arity::Greedy => Self::Variadic(Variadic::new(names, transform)?.required(required)),
        })
    }
}

impl<T> fmt::Display for AnyOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(opt) => fmt::Display::fmt(opt, f),
            Self::Explicit(opt) => fmt::Display::fmt(opt, f),
            Self::Variadic(opt) => fmt::Display::fmt(opt, f),
        }
    }
}

impl<T> Opt for AnyOption<T> {
    type Output = Outcome<T>;

    fn names(&self) -> &Names {
        match self {
            Self::Flag(opt) => opt.names(),
            Self::Explicit(opt) => opt.names(),
            Self::Variadic(opt) => opt.names(),
        }
    }
    fn locate(&self, args: &[String]) -> Result<Option<Span>, Error> {
        match self {
            Self::Flag(opt) => opt.locate(args),
            Self::Explicit(opt) => opt.locate(args),
            Self::Variadic(opt) => opt.locate(args),
        }
    }
    fn extract(&self, span: &[String]) -> Result<Outcome<T>, Error> {
        Ok(match self {
            Self::Flag(opt) => Outcome::Flag(opt.extract(span)?),
            Self::Explicit(opt) => Outcome::Taken(opt.extract(span)?),
            Self::Variadic(opt) => Outcome::All(opt.extract(span)?),
        })
    }
    fn absent(&self) -> Outcome<T> {
        match self {
            Self::Flag(opt) => Outcome::Flag(opt.absent()),
            Self::Explicit(opt) => Outcome::Taken(opt.absent()),
            Self::Variadic(opt) => Outcome::All(opt.absent()),
        }
    }
}
