// Copyright (C) Brian G. Milnes 2025

//! Locating standalone macro invocations within a line
//!
//! A name is standalone when neither neighbour is an identifier
//! character. `myLOG`, `LOG_2` and `LOG9` never match `LOG`.

pub mod scanner {

    pub const DEFAULT_COMMENT_PREFIX: &str = "//";

    /// Comment conventions of the files being processed
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CommentSyntax {
        pub comment_prefix: String,
    }

    impl CommentSyntax {
        pub fn new(comment_prefix: &str) -> Self {
            CommentSyntax {
                comment_prefix: comment_prefix.to_string(),
            }
        }

        /// `//#DEFINE` for the default prefix
        pub fn definition_marker(&self) -> String {
            format!("{}#DEFINE", self.comment_prefix)
        }
    }

    impl Default for CommentSyntax {
        fn default() -> Self {
            CommentSyntax::new(DEFAULT_COMMENT_PREFIX)
        }
    }

    fn is_identifier_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }

    pub fn is_comment_line(line: &str, syntax: &CommentSyntax) -> bool {
        line.trim_start().starts_with(syntax.comment_prefix.as_str())
    }

    /// Byte offset of the first standalone occurrence of `name` in `line`.
    ///
    /// Comment lines never match. Both ends of the line count as a space.
    pub fn find_standalone(line: &str, name: &str, syntax: &CommentSyntax) -> Option<usize> {
        if name.is_empty() || is_comment_line(line, syntax) {
            return None;
        }

        line.match_indices(name)
            .map(|(at, _)| at)
            .find(|&at| {
                let before = line[..at].chars().next_back().unwrap_or(' ');
                let after = line[at + name.len()..].chars().next().unwrap_or(' ');
                !is_identifier_char(before) && !is_identifier_char(after)
            })
    }
}
