// Copyright (C) Brian G. Milnes 2025

//! Rewriting a macro invocation into its expansion
//!
//! For `//#DEFINE ASSERT(cond) check(cond,__INDEX__,__FILE__,__LINE__)`
//! the line `ASSERT(x > 0);` on line 12 of `src/a.js` becomes
//! `check(x > 0,0,'a.js',12);`. Actual arguments pass through verbatim
//! into the leading slots; every remaining slot has its template evaluated.
//!
//! The argument list opens at the first `(` after the macro name, not the
//! first `(` on the line, so `if (x) LOG(y);` keeps its `if (x) ` prefix.

pub mod rewriter {
    use std::path::Path;
    use crate::counter::counter::RunCounter;
    use crate::error::error::ExpandError;
    use crate::placeholder::placeholder::Placeholder;
    use crate::symbol::symbol::SymbolDefinition;

    /// A call site split into the text around it and its actual arguments
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Invocation<'a> {
        pub macro_name: &'a str,
        pub actual_arguments: Vec<&'a str>,
        prefix: &'a str,
        suffix: &'a str,
    }

    impl<'a> Invocation<'a> {
        /// Parse the call starting at byte offset `at` of `line`.
        ///
        /// The argument list runs from the first `(` after the macro name to
        /// the last `)` on the line and is split on `,` without any quoting
        /// rules. An empty list means no actual arguments.
        pub fn parse(line: &'a str, at: usize, macro_name: &'a str) -> Result<Self, ExpandError> {
            let after_name = at + macro_name.len();
            let open = line[after_name..]
                .find('(')
                .map(|i| after_name + i)
                .ok_or_else(|| ExpandError::Syntax(line.to_string()))?;
            let close = line
                .rfind(')')
                .filter(|&close| close > open)
                .ok_or_else(|| ExpandError::Syntax(line.to_string()))?;

            let argument_list = &line[open + 1..close];
            let actual_arguments = if argument_list.trim().is_empty() {
                Vec::new()
            } else {
                argument_list.split(',').collect()
            };

            Ok(Invocation {
                macro_name,
                actual_arguments,
                prefix: &line[..at],
                suffix: &line[close..],
            })
        }
    }

    /// Position of the call site, used by `__LINE__`, `__FILE__` and `__FILEPATH__`
    #[derive(Debug, Clone, Copy)]
    pub struct ExpansionContext<'a> {
        pub line_number: usize,
        pub file_path: &'a Path,
    }

    /// Build the replacement line for `invocation`.
    ///
    /// Fails with `Arity` when the call has more arguments than the
    /// definition declares.
    pub fn expand_invocation(
        invocation: &Invocation<'_>,
        definition: &SymbolDefinition,
        context: &ExpansionContext<'_>,
        counter: &mut RunCounter,
    ) -> Result<String, ExpandError> {
        let actual = &invocation.actual_arguments;
        if actual.len() > definition.arity() {
            return Err(ExpandError::Arity {
                symbol: invocation.macro_name.to_string(),
                actual: actual.len(),
                declared: definition.arity(),
            });
        }

        let mut arguments: Vec<String> = actual.iter().map(|a| a.to_string()).collect();
        for template in &definition.argument_templates()[actual.len()..] {
            arguments.push(substitute(template, actual, context, counter));
        }

        Ok(format!(
            "{}{}({}{}",
            invocation.prefix,
            definition.name(),
            arguments.join(","),
            invocation.suffix
        ))
    }

    /// Parse and expand in one step, wrapping failures with the line and file
    pub fn rewrite_line(
        line: &str,
        at: usize,
        macro_name: &str,
        definition: &SymbolDefinition,
        context: &ExpansionContext<'_>,
        counter: &mut RunCounter,
    ) -> Result<String, ExpandError> {
        Invocation::parse(line, at, macro_name)
            .and_then(|invocation| expand_invocation(&invocation, definition, context, counter))
            .map_err(|e| ExpandError::InLine {
                line: line.to_string(),
                file: context.file_path.to_path_buf(),
                source: Box::new(e),
            })
    }

    /// Replace placeholder tokens in one left-to-right pass.
    ///
    /// Substituted text is never rescanned. `__ARGn__` without an nth actual
    /// argument stays as literal text.
    fn substitute(
        template: &str,
        actual: &[&str],
        context: &ExpansionContext<'_>,
        counter: &mut RunCounter,
    ) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(ch) = rest.chars().next() {
            let Some(placeholder) = Placeholder::match_at(rest) else {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
                continue;
            };

            match placeholder {
                Placeholder::Index => out.push_str(&counter.next_value().to_string()),
                Placeholder::File => {
                    let name = context
                        .file_path
                        .file_name()
                        .map(|n| n.to_string_lossy())
                        .unwrap_or_default();
                    out.push_str(&format!("'{name}'"));
                }
                Placeholder::FilePath => {
                    out.push_str(&format!("'{}'", context.file_path.display()));
                }
                Placeholder::Line => out.push_str(&context.line_number.to_string()),
                Placeholder::Arg(n) => match actual.get(n) {
                    Some(arg) => out.push_str(&format!("'{arg}'")),
                    None => out.push_str(placeholder.token()),
                },
            }
            rest = &rest[placeholder.token().len()..];
        }

        out
    }
}
