use std::collections::BTreeSet;
use std::fmt;

use super::ValidationError;

/// Turn a bare word into a CLI-style option name.
///
/// Surrounding whitespace is trimmed and inner runs of whitespace become
/// single hyphens. One character gets a single dash, anything longer gets two.
/// A name that doesn't start with a letter or digit (`-x`, `/FLAG`) is assumed
/// to be formatted already and comes back as-is.
///
/// ```
/// assert_eq!(lethargy::normalize("x").unwrap(), "-x");
/// assert_eq!(lethargy::normalize("  dry  run ").unwrap(), "--dry-run");
/// assert_eq!(lethargy::normalize("/FLAG").unwrap(), "/FLAG");
/// ```
pub fn normalize(text: &str) -> Result<String, ValidationError> {
    let text = text.trim();
    let first = text.chars().next().ok_or(ValidationError::EmptyName)?;
    if !first.is_alphanumeric() {
        return Ok(text.to_string());
    }
    Ok(skewer(text))
}

/// Prefix `text` with one dash if it is a single character, or two otherwise.
/// Blank text has nothing to prefix and becomes an empty string.
pub fn dashed(text: &str) -> String {
    if text.trim().is_empty() {
        String::new()
    } else if text.chars().count() == 1 {
        format!("-{}", text)
    } else {
        format!("--{}", text)
    }
}

/// Join the words of `text` with hyphens.
pub fn kebabcase(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join("-")
}

/// [`kebabcase`] followed by [`dashed`].
pub fn skewer(text: &str) -> String {
    dashed(&kebabcase(text))
}

/// Whether `text` looks like `-x`.
pub fn is_short(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next() == Some('-')
        && matches!(chars.next(), Some(ch) if ch != '-')
        && chars.next().is_none()
}

/// Whether `text` looks like `--xyz`.
pub fn is_long(text: &str) -> bool {
    text.strip_prefix("--")
        .map_or(false, |rest| rest.chars().count() > 1)
}

/// The deduplicated set of names an option answers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Names(BTreeSet<String>);

impl Names {
    /// Normalize each of `names` into a set.
    pub fn new<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = names
            .into_iter()
            .map(|name| normalize(name.as_ref()))
            .collect::<Result<BTreeSet<_>, _>>()?;
        if set.is_empty() {
            return Err(ValidationError::NoNames);
        }
        Ok(Self(set))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the first token in `args` that is one of these names.
    pub fn index_in(&self, args: &[String]) -> Option<usize> {
        args.iter().position(|arg| self.contains(arg))
    }

    /// Names joined by `|`, shortest first, then alphabetically.
    pub fn pretty(&self) -> String {
        // The set is already alphabetical, and the sort is stable.
        let mut names: Vec<&str> = self.iter().collect();
        names.sort_by_key(|name| name.chars().count());
        names.join("|")
    }
}

impl fmt::Display for Names {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}

/// Anything that can be turned into a set of option names:
/// a single word, or a list of aliases.
pub trait IntoNames {
    fn into_names(self) -> Result<Names, ValidationError>;
}

impl IntoNames for Names {
    fn into_names(self) -> Result<Names, ValidationError> {
        Ok(self)
    }
}

impl IntoNames for &Names {
    fn into_names(self) -> Result<Names, ValidationError> {
        Ok(self.clone())
    }
}

impl IntoNames for &str {
    fn into_names(self) -> Result<Names, ValidationError> {
        Names::new(std::iter::once(self))
    }
}

impl IntoNames for String {
    fn into_names(self) -> Result<Names, ValidationError> {
        Names::new(std::iter::once(self))
    }
}

impl<S: AsRef<str>> IntoNames for &[S] {
    fn into_names(self) -> Result<Names, ValidationError> {
        Names::new(self)
    }
}

impl<S: AsRef<str>> IntoNames for Vec<S> {
    fn into_names(self) -> Result<Names, ValidationError> {
        Names::new(self)
    }
}

impl<S: AsRef<str>, const N: usize> IntoNames for [S; N] {
    fn into_names(self) -> Result<Names, ValidationError> {
        Names::new(self.iter())
    }
}
