// Copyright (C) Brian G. Milnes 2025

//! Parsing of the right-hand side of a `#DEFINE` line
//!
//! `doLog(__LINE__,__FILE__,__ARG0__)` becomes a definition named `doLog`
//! with three positional argument templates. Arguments are split strictly
//! on `,`; a comma cannot appear inside a template.

pub mod symbol {
    use std::fmt;
    use crate::error::error::ExpandError;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SymbolDefinition {
        name: String,
        argument_templates: Vec<String>,
    }

    impl SymbolDefinition {
        /// Parse `name(arg1,arg2,...)`.
        ///
        /// The closing parenthesis is the last `)` in `expr`; anything after
        /// it is ignored. Templates are kept verbatim. An empty list `name()`
        /// declares no arguments.
        pub fn parse(expr: &str) -> Result<Self, ExpandError> {
            let open = expr.find('(').ok_or_else(|| {
                ExpandError::DefinitionParse("Opening parenthesis was not found".to_string())
            })?;
            let close = expr.rfind(')').filter(|&close| close > open).ok_or_else(|| {
                ExpandError::DefinitionParse("Closing parenthesis was not found".to_string())
            })?;

            let name = &expr[..open];
            if name.is_empty() {
                return Err(ExpandError::DefinitionParse(
                    "Symbol name before '(' is empty".to_string(),
                ));
            }

            let argument_list = &expr[open + 1..close];
            let argument_templates = if argument_list.trim().is_empty() {
                Vec::new()
            } else {
                argument_list.split(',').map(str::to_string).collect()
            };

            Ok(SymbolDefinition {
                name: name.to_string(),
                argument_templates,
            })
        }

        pub fn name(&self) -> &str {
            &self.name
        }

        pub fn argument_templates(&self) -> &[String] {
            &self.argument_templates
        }

        pub fn arity(&self) -> usize {
            self.argument_templates.len()
        }
    }

    impl fmt::Display for SymbolDefinition {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}({})", self.name, self.argument_templates.join(","))
        }
    }
}
