use std::ops::Deref;

/// Whether a result counts as "something was taken".
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

/// A list that is never truthy, however long it is.
///
/// Returned in place of an option's values when the option wasn't found,
/// so it can still be indexed or destructured into the expected number of slots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FalsyList<T>(Vec<T>);

impl<T> FalsyList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self(items)
    }
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> FalsyList<Option<T>> {
    /// `len` empty slots.
    pub fn placeholders(len: usize) -> Self {
        Self(std::iter::repeat_with(|| None).take(len).collect())
    }
}

impl<T> Truthy for FalsyList<T> {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T> Deref for FalsyList<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> IntoIterator for FalsyList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// The values of an option that takes a fixed number of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Taken<T> {
    /// The option takes exactly one value.
    One(Option<T>),
    /// The option takes several values, and was found.
    Many(Vec<T>),
    /// The option takes several values, and wasn't found.
    Missing(FalsyList<Option<T>>),
}

impl<T> Taken<T> {
    /// The first value, if there is one.
    pub fn into_one(self) -> Option<T> {
        match self {
            Self::One(val) => val,
            Self::Many(vals) => vals.into_iter().next(),
            Self::Missing(_) => None,
        }
    }

    /// Every value, or `None` if the option wasn't found.
    pub fn into_vec(self) -> Option<Vec<T>> {
        match self {
            Self::One(val) => val.map(|v| vec![v]),
            Self::Many(vals) => Some(vals),
            Self::Missing(_) => None,
        }
    }
}

impl<T> Truthy for Taken<T> {
    fn is_truthy(&self) -> bool {
        match self {
            Self::One(val) => val.is_truthy(),
            Self::Many(vals) => vals.is_truthy(),
            Self::Missing(vals) => vals.is_truthy(),
        }
    }
}

/// The result of taking an option of any shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Flag(bool),
    Taken(Taken<T>),
    All(Vec<T>),
}

impl<T> Truthy for Outcome<T> {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(b) => b.is_truthy(),
            Self::Taken(taken) => taken.is_truthy(),
            Self::All(vals) => vals.is_truthy(),
        }
    }
}
