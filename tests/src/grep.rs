#[derive(PartialEq, Eq, Debug, lethargy::Options)]
pub struct Grep {
    #[flag(short = "v")]
    invert_match: bool,

    #[named(short = "m")]
    #[optional]
    max_count: Option<usize>,

    #[variadic]
    files: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use lethargy::Options;

    #[test]
    fn grep() {
        let (taken, rest) =
            take_from!(Grep, "pattern" "-v" "--max-count" "3" "--files" "a.txt" "b.txt");
        assert_eq!(
            taken.unwrap(),
            Grep {
                invert_match: true,
                max_count: Some(3),
                files: vec!["a.txt".to_string(), "b.txt".to_string()],
            }
        );
        assert_eq!(rest, args!("pattern"));
    }
    #[test]
    fn grep_nothing() {
        let (taken, rest) = take_from!(Grep, "pattern");
        assert_eq!(
            taken.unwrap(),
            Grep {
                invert_match: false,
                max_count: None,
                files: Vec::new(),
            }
        );
        assert_eq!(rest, args!("pattern"));
    }
    #[test]
    fn grep_files_take_the_rest() {
        let (taken, rest) = take_from!(Grep, "pattern" "--files" "a" "-v");
        let grep = taken.unwrap();
        assert!(grep.invert_match);
        assert_eq!(grep.files, vec!["a".to_string()]);
        assert_eq!(rest, args!("pattern"));
    }
    #[test]
    fn grep_usage() {
        assert_eq!(
            Grep::usage(),
            "-v|--invert-match -m|--max-count <usize> --files [string]..."
        );
    }
}
