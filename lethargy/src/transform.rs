use std::{error::Error as StdError, fmt, str::FromStr};

use super::{BoxError, TransformError};

/// Converts the raw text of an option's values into `T`.
///
/// The metavar is the placeholder shown for each value when an option is rendered,
/// e.g. the `<i32>` in `--count <i32>`.
pub struct Transform<T> {
    func: Box<dyn Fn(&str) -> Result<T, BoxError>>,
    metavar: Option<String>,
}

impl Transform<String> {
    /// Keep values as they are.
    pub fn identity() -> Self {
        Self {
            func: Box::new(|s| Ok(s.to_string())),
            metavar: None,
        }
    }
}

impl Default for Transform<String> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Transform<T> {
    /// Convert values with `func`. The metavar is `value` unless set with [`named`](Self::named).
    pub fn with<F, E>(func: F) -> Self
    where
        F: Fn(&str) -> Result<T, E> + 'static,
        E: Into<BoxError>,
    {
        Self {
            func: Box::new(move |s| func(s).map_err(Into::into)),
            metavar: None,
        }
    }

    /// Convert values with `T`'s [`FromStr`] implementation.
    /// The metavar is the lowercase name of `T`.
    pub fn parse() -> Self
    where
        T: FromStr + 'static,
        <T as FromStr>::Err: StdError + Send + Sync + 'static,
    {
        Self {
            func: Box::new(|s| T::from_str(s).map_err(Into::into)),
            metavar: Some(type_metavar::<T>()),
        }
    }

    pub fn named(mut self, metavar: impl Into<String>) -> Self {
        self.metavar = Some(metavar.into());
        self
    }

    pub fn metavar(&self) -> &str {
        self.metavar.as_deref().unwrap_or("value")
    }

    pub fn apply(&self, value: &str) -> Result<T, BoxError> {
        (self.func)(value)
    }

    /// Apply the transform on behalf of `option`, blaming it if the value is bad.
    pub(crate) fn convert(
        &self,
        option: &impl fmt::Display,
        value: &str,
    ) -> Result<T, TransformError> {
        self.apply(value).map_err(|e| TransformError::new(option, value, e))
    }
}

impl<T> fmt::Debug for Transform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("metavar", &self.metavar())
            .finish()
    }
}

/// `alloc::string::String` -> `string`, `core::option::Option<i32>` -> `option`.
fn type_metavar<T>() -> String {
    let name = std::any::type_name::<T>();
    let name = name.split('<').next().unwrap_or(name);
    let name = name.rsplit("::").next().unwrap_or(name);
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::ParseIntError;
    use std::path::PathBuf;

    #[test]
    fn identity() {
        let tfm = Transform::identity();
        assert_eq!(tfm.metavar(), "value");
        assert_eq!(tfm.apply("abc").unwrap(), "abc");
    }

    #[test]
    fn metavar_of_types() {
        assert_eq!(Transform::<i32>::parse().metavar(), "i32");
        assert_eq!(Transform::<f64>::parse().metavar(), "f64");
        assert_eq!(Transform::<String>::parse().metavar(), "string");
        assert_eq!(Transform::<PathBuf>::parse().metavar(), "pathbuf");
    }
    #[test]
    fn metavar_of_closure() {
        let tfm = Transform::with(|s: &str| s.parse::<u8>());
        assert_eq!(tfm.metavar(), "value");
        assert_eq!(tfm.named("byte").metavar(), "byte");
    }

    #[test]
    fn parse_values() {
        let tfm = Transform::<i32>::parse();
        assert_eq!(tfm.apply("12").unwrap(), 12);
        assert!(tfm.apply("twelve").unwrap_err().is::<ParseIntError>());
    }

    #[test]
    fn closure_errors() {
        let tfm = Transform::with(|s: &str| {
            if s.is_empty() {
                Err("empty")
            } else {
                Ok(s.len())
            }
        });
        assert_eq!(tfm.apply("four").unwrap(), 4);
        assert_eq!(tfm.apply("").unwrap_err().to_string(), "empty");
    }

    #[test]
    fn convert_blames_option() {
        let tfm = Transform::<u32>::parse();
        let err = tfm.convert(&"--count <u32>", "-1").unwrap_err();
        assert_eq!(err.option(), "--count <u32>");
        assert_eq!(err.value(), "-1");
        assert!(err.is::<ParseIntError>());
    }
}
