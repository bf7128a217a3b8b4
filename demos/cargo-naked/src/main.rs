use lethargy::{take_flag, take_one, take_some, take_verbose, util, Taken, Transform};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = util::argv();

    let verbose = util::show_errors(take_verbose(&mut args));
    let release = util::show_errors(take_flag("release", &mut args, true));
    let target = util::show_errors(take_one(
        ["target", "t"],
        Transform::identity(),
        &mut args,
        true,
        false,
    ));
    let jobs = util::expect(
        take_one(["jobs", "j"], Transform::<u32>::parse(), &mut args, true, false),
        "--jobs takes a number",
    );
    let pin = util::show_errors(take_some("pin", 2, Transform::identity(), &mut args, true, false));

    let say = util::print_if(verbose);

    match args.get(1).map(String::as_str) {
        Some("new") => match args.get(2) {
            Some(name) => eprintln!("Creating new crate `{}`", name),
            None => util::fail(Some(&"`new` needs a crate name")),
        },
        Some("build") => {
            let target = target.as_deref().unwrap_or("native");
            say(&format!("using {} jobs", jobs.unwrap_or(1)));
            if let Taken::Many(pin) = pin {
                say(&format!("pinning {} to {}", pin[0], pin[1]));
            }
            if release {
                eprintln!("Building for {} in release", target);
            } else {
                eprintln!("Building for {}", target);
            }
        }
        Some(other) => util::fail(Some(&format!("Unknown subcommand `{}`", other))),
        None => util::fail(None),
    }
}
