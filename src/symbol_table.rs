// Copyright (C) Brian G. Milnes 2025

//! Per-file table of `#DEFINE` symbols
//!
//! Definition lines have the shape
//! ```text
//! //#DEFINE LOG(msg) doLog(__LINE__,__FILE__,__ARG0__)
//! ```
//! The second token names the macro searched for in the file, the third is
//! the expansion parsed by `SymbolDefinition`. Lines with fewer than three
//! tokens are not definitions. A table is built fresh for every file and
//! nothing is shared across files.

pub mod symbol_table {
    use std::collections::HashMap;
    use std::path::Path;
    use crate::error::error::ExpandError;
    use crate::scanner::scanner::CommentSyntax;
    use crate::symbol::symbol::SymbolDefinition;

    #[derive(Debug, Default)]
    pub struct SymbolTable {
        entries: Vec<(String, SymbolDefinition)>,
        index: HashMap<String, usize>,
    }

    impl SymbolTable {
        /// Collect every definition in `lines`, in file order.
        ///
        /// A malformed or duplicate definition fails the whole file; the
        /// error carries the raw line and `file`.
        pub fn build<S: AsRef<str>>(
            lines: &[S],
            file: &Path,
            syntax: &CommentSyntax,
        ) -> Result<Self, ExpandError> {
            let marker = syntax.definition_marker();
            let mut table = SymbolTable::default();

            for line in lines {
                let trimmed = line.as_ref().trim();
                let Some(rest) = trimmed.strip_prefix(marker.as_str()) else {
                    continue;
                };
                if !rest.starts_with(char::is_whitespace) {
                    continue;
                }

                let tokens: Vec<&str> = trimmed.split_whitespace().collect();
                if tokens.len() < 3 {
                    continue;
                }

                table
                    .add_definition(tokens[1], tokens[2])
                    .map_err(|e| ExpandError::InDefinition {
                        definition: trimmed.to_string(),
                        file: file.to_path_buf(),
                        source: Box::new(e),
                    })?;
            }

            Ok(table)
        }

        fn add_definition(&mut self, signature: &str, expansion: &str) -> Result<(), ExpandError> {
            let name = macro_name(signature)?;
            if self.index.contains_key(name) {
                return Err(ExpandError::DefinitionParse(format!(
                    "Symbol '{name}' is already defined"
                )));
            }
            let definition = SymbolDefinition::parse(expansion)?;

            self.index.insert(name.to_string(), self.entries.len());
            self.entries.push((name.to_string(), definition));
            Ok(())
        }

        pub fn get(&self, name: &str) -> Option<&SymbolDefinition> {
            self.index.get(name).map(|&i| &self.entries[i].1)
        }

        /// Macro names with their definitions, in definition order
        pub fn iter(&self) -> impl Iterator<Item = (&str, &SymbolDefinition)> {
            self.entries.iter().map(|(name, def)| (name.as_str(), def))
        }

        pub fn len(&self) -> usize {
            self.entries.len()
        }

        pub fn is_empty(&self) -> bool {
            self.entries.is_empty()
        }
    }

    /// `LOG(msg)` -> `LOG`: the text before `(` within the prefix ending at the first `)`
    fn macro_name(signature: &str) -> Result<&str, ExpandError> {
        let close = signature.find(')').ok_or_else(|| {
            ExpandError::DefinitionParse("Closing parenthesis in symbol not found".to_string())
        })?;
        let open = signature[..close].find('(').ok_or_else(|| {
            ExpandError::DefinitionParse("Opening parenthesis in symbol not found".to_string())
        })?;
        let name = &signature[..open];
        if name.is_empty() {
            return Err(ExpandError::DefinitionParse(
                "Symbol name before '(' is empty".to_string(),
            ));
        }
        Ok(name)
    }
}
