use super::{
    AnyOption, Arity, Error, Explicit, Flag, IntoNames, Opt, Outcome, Taken, Transform, Variadic,
};

/// Take `option` from `args`.
///
/// If the option isn't there, its [`absent`](Opt::absent) value is returned and `args`
/// is left alone. Otherwise the option's name and values are converted and,
/// if `mutate` is set, removed from `args`. On any error `args` is left alone.
pub fn take<O>(option: &O, args: &mut Vec<String>, mutate: bool) -> Result<O::Output, Error>
where
    O: Opt + ?Sized,
{
    let span = match option.locate(args)? {
        Some(span) => span,
        None => {
            tracing::trace!(option = %option, "option not found");
            return Ok(option.absent());
        }
    };
    tracing::trace!(option = %option, start = span.start, end = span.end, "option located");

    let taken = option.extract(&args[span.clone()])?;
    if mutate {
        tracing::trace!(option = %option, start = span.start, end = span.end, "span removed");
        args.drain(span);
    }
    Ok(taken)
}

/// Whether a flag is in `args`.
///
/// ```
/// let mut args: Vec<String> = vec!["run".into(), "--dry-run".into()];
/// assert!(lethargy::take_flag("dry run", &mut args, true).unwrap());
/// assert_eq!(args, vec!["run"]);
/// ```
pub fn take_flag(
    names: impl IntoNames,
    args: &mut Vec<String>,
    mutate: bool,
) -> Result<bool, Error> {
    take(&Flag::new(names)?, args, mutate)
}

/// Take an option followed by `count` values.
///
/// A `count` of one gives [`Taken::One`], anything more gives [`Taken::Many`], or
/// [`Taken::Missing`] placeholders if the option isn't there and isn't `required`.
pub fn take_some<T>(
    names: impl IntoNames,
    count: usize,
    transform: Transform<T>,
    args: &mut Vec<String>,
    mutate: bool,
    required: bool,
) -> Result<Taken<T>, Error> {
    let option = Explicit::new(names, count, transform)?.required(required);
    take(&option, args, mutate)
}

/// Take an option followed by a single value.
pub fn take_one<T>(
    names: impl IntoNames,
    transform: Transform<T>,
    args: &mut Vec<String>,
    mutate: bool,
    required: bool,
) -> Result<Option<T>, Error> {
    take_some(names, 1, transform, args, mutate, required).map(Taken::into_one)
}

/// Take an option and every argument after it.
pub fn take_all<T>(
    names: impl IntoNames,
    transform: Transform<T>,
    args: &mut Vec<String>,
    mutate: bool,
) -> Result<Vec<T>, Error> {
    take(&Variadic::new(names, transform)?, args, mutate)
}

/// Take an option of whatever shape `arity` describes.
pub fn take_opt<T>(
    names: impl IntoNames,
    arity: impl Into<Arity>,
    transform: Transform<T>,
    args: &mut Vec<String>,
    mutate: bool,
    required: bool,
) -> Result<Outcome<T>, Error> {
    let option = AnyOption::new(names, arity.into(), transform, required)?;
    take(&option, args, mutate)
}

/// `--debug`
pub fn take_debug(args: &mut Vec<String>) -> Result<bool, Error> {
    take_flag("debug", args, true)
}

/// `-v` or `--verbose`
pub fn take_verbose(args: &mut Vec<String>) -> Result<bool, Error> {
    take_flag(["v", "verbose"], args, true)
}
