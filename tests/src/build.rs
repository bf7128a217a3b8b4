#[derive(PartialEq, Eq, Debug, lethargy::Options)]
pub struct Build {
    #[named(short = "t")]
    #[optional]
    target: Option<String>,

    #[flag]
    release: bool,

    #[named(short = "j")]
    jobs: u32,

    #[named(count = 2)]
    #[optional]
    size: Option<Vec<u16>>,
}

#[derive(PartialEq, Eq, Debug, lethargy::Options)]
pub struct Resize {
    #[named(count = 2)]
    size: Vec<u16>,
    #[flag(short = "q")]
    quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use lethargy::{Error, Options};

    #[test]
    fn build() {
        let (taken, rest) = take_from!(Build, "app" "--release" "-j" "8" "--target" "wasm32" "src");
        assert_eq!(
            taken.unwrap(),
            Build {
                target: Some("wasm32".to_string()),
                release: true,
                jobs: 8,
                size: None,
            }
        );
        assert_eq!(rest, args!("app" "src"));
    }
    #[test]
    fn build_defaults() {
        let (taken, rest) = take_from!(Build, "--jobs" "2");
        assert_eq!(
            taken.unwrap(),
            Build {
                target: None,
                release: false,
                jobs: 2,
                size: None,
            }
        );
        assert!(rest.is_empty());
    }
    #[test]
    fn build_size() {
        let (taken, _) = take_from!(Build, "--size" "640" "480" "-j" "1");
        assert_eq!(taken.unwrap().size, Some(vec![640, 480]));
    }
    #[test]
    #[should_panic(expected = "Missing required option '-j|--jobs <u32>'")]
    fn build_no_jobs() {
        take_from!(Build, "--release").0.unwrap();
    }
    #[test]
    #[should_panic(expected = "Option '-j|--jobs <u32>' received an invalid value: 'many'")]
    fn build_bad_jobs() {
        take_from!(Build, "-j" "many").0.unwrap();
    }
    #[test]
    fn build_bad_jobs_leaves_args() {
        let (taken, rest) = take_from!(Build, "--release" "-j" "many");
        assert!(matches!(taken, Err(Error::Transform(_))));
        // Options before the failure have already been taken.
        assert_eq!(rest, args!("-j" "many"));
    }
    #[test]
    fn build_usage() {
        assert_eq!(
            Build::usage(),
            "-t|--target <string> --release -j|--jobs <u32> --size <u16> <u16>"
        );
    }

    #[test]
    fn resize() {
        let (taken, rest) = take_from!(Resize, "img.png" "--size" "3" "4" "-q");
        assert_eq!(
            taken.unwrap(),
            Resize {
                size: vec![3, 4],
                quiet: true,
            }
        );
        assert_eq!(rest, args!("img.png"));
    }
    #[test]
    #[should_panic(
        expected = "Expected 2 arguments for option '--size <u16> <u16>', but found 1 ('3')"
    )]
    fn resize_too_few() {
        take_from!(Resize, "--size" "3").0.unwrap();
    }
}
