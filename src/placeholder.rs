// Copyright (C) Brian G. Milnes 2025

//! Placeholder tokens recognized inside argument templates

pub mod placeholder {

    /// Reserved tokens substituted with contextual values at expansion time.
    /// The spellings match existing annotated sources and must not change.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Placeholder {
        /// Run-wide counter, advanced on every substitution
        Index,
        /// Base file name, single-quoted
        File,
        /// Path as enumerated by the batch, single-quoted
        FilePath,
        /// 1-based line number
        Line,
        /// Nth actual argument (0..=3), single-quoted
        Arg(usize),
    }

    impl Placeholder {
        pub const ALL: [Placeholder; 8] = [
            Placeholder::Index,
            Placeholder::File,
            Placeholder::FilePath,
            Placeholder::Line,
            Placeholder::Arg(0),
            Placeholder::Arg(1),
            Placeholder::Arg(2),
            Placeholder::Arg(3),
        ];

        pub fn token(self) -> &'static str {
            match self {
                Placeholder::Index => "__INDEX__",
                Placeholder::File => "__FILE__",
                Placeholder::FilePath => "__FILEPATH__",
                Placeholder::Line => "__LINE__",
                Placeholder::Arg(0) => "__ARG0__",
                Placeholder::Arg(1) => "__ARG1__",
                Placeholder::Arg(2) => "__ARG2__",
                Placeholder::Arg(3) => "__ARG3__",
                Placeholder::Arg(n) => {
                    debug_assert!(n <= 3, "no placeholder token for argument {n}");
                    "__ARG3__"
                }
            }
        }

        /// Longest placeholder token that `text` starts with
        pub fn match_at(text: &str) -> Option<Placeholder> {
            Self::ALL
                .iter()
                .copied()
                .filter(|p| text.starts_with(p.token()))
                .max_by_key(|p| p.token().len())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_match_at_prefers_exact_token() {
            assert_eq!(Placeholder::match_at("__FILE__,x"), Some(Placeholder::File));
            assert_eq!(Placeholder::match_at("__FILEPATH__"), Some(Placeholder::FilePath));
            assert_eq!(Placeholder::match_at("__ARG2__)"), Some(Placeholder::Arg(2)));
            assert_eq!(Placeholder::match_at("__FILE"), None);
            assert_eq!(Placeholder::match_at("x__LINE__"), None);
        }

        #[test]
        fn test_argument_tokens() {
            assert_eq!(Placeholder::Arg(0).token(), "__ARG0__");
            assert_eq!(Placeholder::Arg(3).token(), "__ARG3__");
        }

        #[test]
        #[cfg(debug_assertions)]
        #[should_panic(expected = "no placeholder token for argument 4")]
        fn test_argument_token_out_of_range() {
            Placeholder::Arg(4).token();
        }

        #[test]
        fn test_tokens_are_distinct() {
            let mut tokens: Vec<_> = Placeholder::ALL.iter().map(|p| p.token()).collect();
            tokens.sort();
            tokens.dedup();
            assert_eq!(tokens.len(), Placeholder::ALL.len());
        }
    }
}
