use lethargy::{util, Options};

#[derive(Options)]
struct Grep {
    #[flag(short = "v")]
    invert_match: bool,

    #[named(short = "m")]
    #[optional]
    max_count: Option<usize>,

    #[variadic]
    files: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = util::argv();
    let Grep { invert_match, max_count, files } = util::show_errors(Grep::take_from(&mut args));

    let pattern = match args.get(1) {
        Some(pattern) => pattern,
        None => util::fail(Some(&format!("usage: grep <pattern> {}", Grep::usage()))),
    };

    let what = if invert_match {
        format!("anything but `{}`", pattern)
    } else {
        format!("`{}`", pattern)
    };
    match max_count {
        Some(n) => eprint!("Searching for at most {} lines matching {} in ", n, what),
        None => eprint!("Searching for {} in ", what),
    }
    if files.is_empty() {
        eprintln!("stdin");
    } else {
        eprintln!("{}", files.join(", "));
    }
}
