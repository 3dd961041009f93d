//! Generator context shared by every target.

use super::helpers::{DefinitionKind, Definitions, Template};
use super::language::{Fragment, Language};
use super::names::{NameCategory, NameDatabase};
use super::utils::tidy;
use blockgen_core::{Block, BlockGraph, Error, Result};
use std::marker::PhantomData;
use tracing::{debug, info};

/// Settings that shape generated text without changing its meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Indentation added to statement inputs.
    pub indent: String,
    /// Text inserted at the top of every loop and procedure body, with each
    /// `%1` replaced by the quoted block id.
    pub loop_trap: Option<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            loop_trap: None,
        }
    }
}

/// All state of one generation run over one block graph.
///
/// The name database and definition registry are reset at the start of
/// every [`generate`](Self::generate) call, so a generator can be reused but
/// never leaks names or helpers between runs.
pub struct Generator<'g, L: Language> {
    pub(super) graph: &'g BlockGraph,
    pub(super) options: GeneratorOptions,
    names: NameDatabase,
    definitions: Definitions,
    language: PhantomData<L>,
}

impl<'g, L: Language> Generator<'g, L> {
    /// Creates a generator for `graph`.
    pub fn new(graph: &'g BlockGraph, options: GeneratorOptions) -> Self {
        Self {
            graph,
            options,
            names: NameDatabase::new(L::RESERVED_WORDS.iter().copied()),
            definitions: Definitions::default(),
            language: PhantomData,
        }
    }

    /// The graph being generated.
    #[must_use]
    pub const fn graph(&self) -> &'g BlockGraph {
        self.graph
    }

    /// Clears all run-scoped state.
    pub fn reset(&mut self) {
        self.names.reset();
        self.definitions.clear();
    }

    /// Generates the whole workspace.
    ///
    /// # Errors
    /// Returns the first error any emitter reports; no partial output is
    /// produced.
    pub fn generate(&mut self) -> Result<String> {
        self.reset();
        info!(language = L::NAME, blocks = self.graph.len(), "generating code");

        self.declare_variables()?;

        let graph = self.graph;
        let mut lines = Vec::new();
        for root in graph.roots() {
            let line = match self.block_to_code(root.id)? {
                Fragment::Value { code, .. } if !code.is_empty() => L::scrub_naked_value(&code),
                Fragment::Value { .. } | Fragment::Managed => String::new(),
                Fragment::Statement(code) => code,
            };
            if !line.is_empty() {
                lines.push(line);
            }
        }

        let code = self.finish(&lines.join("\n"));
        debug!(
            language = L::NAME,
            definitions = self.definitions.len(),
            "generation finished"
        );
        Ok(tidy(&code))
    }

    fn declare_variables(&mut self) -> Result<()> {
        let variables = self.graph.all_variables(None)?;
        let names: Vec<String> = variables
            .iter()
            .map(|name| self.names.get_name(name, NameCategory::Variable))
            .collect();
        if let Some(text) = L::declare_variables(&names) {
            self.definitions
                .insert(DefinitionKind::Declaration, "variables", text);
        }
        Ok(())
    }

    /// Prepends the accumulated preamble to `code`.
    #[must_use]
    pub fn finish(&self, code: &str) -> String {
        let mut out = self.definitions.render();
        out.push_str(code);
        out
    }

    /// Indentation for statement inputs and generated bodies.
    #[must_use]
    pub fn indent(&self) -> &str {
        &self.options.indent
    }

    /// Reads a required field.
    ///
    /// # Errors
    /// Returns [`Error::MissingField`] if the field is absent.
    pub fn field<'b>(&self, block: &'b Block, name: &str) -> Result<&'b str> {
        block.field(name).ok_or_else(|| Error::MissingField {
            kind: block.kind.tag(),
            field: name.to_string(),
        })
    }

    /// Looks a dropdown field up in `table`.
    ///
    /// # Errors
    /// Returns [`Error::MissingField`] if the field is absent and
    /// [`Error::UnknownOperator`] if its value is not in the table.
    pub fn choice<T: Copy>(&self, block: &Block, name: &str, table: &[(&str, T)]) -> Result<T> {
        let value = self.field(block, name)?;
        lookup(block, name, value, table)
    }

    /// Like [`choice`](Self::choice), but an absent field yields `default`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownOperator`] if the value is not in the table.
    pub fn choice_or<T: Copy>(
        &self,
        block: &Block,
        name: &str,
        table: &[(&str, T)],
        default: T,
    ) -> Result<T> {
        match block.field(name) {
            Some(value) => lookup(block, name, value, table),
            None => Ok(default),
        }
    }

    /// Target identifier for a user variable.
    pub fn variable_name(&mut self, name: &str) -> String {
        self.names.get_name(name, NameCategory::Variable)
    }

    /// Target identifier for a user procedure.
    pub fn procedure_name(&mut self, name: &str) -> String {
        self.names.get_name(name, NameCategory::Procedure)
    }

    /// A fresh identifier for a generated temporary.
    pub fn distinct_variable(&mut self, desired: &str) -> String {
        self.names
            .get_distinct_name(desired, NameCategory::Variable)
    }

    /// Registers a helper function under `key` and returns its name.
    ///
    /// The first call issues a name and renders `template` with it; later
    /// calls with the same key return that name and ignore `template`.
    pub fn provide_function(&mut self, key: &str, template: &Template) -> String {
        if let Some(name) = self.definitions.helper_name(key) {
            return name.to_string();
        }
        let name = self.names.get_distinct_name(key, NameCategory::Helper);
        debug!(helper = key, name = %name, "registered helper function");
        self.definitions
            .insert_helper(key, name.clone(), template.render(&name));
        name
    }

    /// Adds an import line to the preamble once.
    pub fn add_import(&mut self, key: &str, line: &str) {
        if !self.definitions.contains(DefinitionKind::Import, key) {
            self.definitions
                .insert(DefinitionKind::Import, key, line.to_string());
        }
    }

    /// Stores a procedure definition, replacing any earlier one of the same
    /// name.
    pub fn define_procedure(&mut self, name: &str, code: String) {
        self.definitions
            .insert(DefinitionKind::Procedure, name, code);
    }

    /// Loop-trap text for `block`, or an empty string when none is
    /// configured.
    #[must_use]
    pub fn loop_trap(&self, block: &Block) -> String {
        self.options
            .loop_trap
            .as_deref()
            .map(|trap| Template::with_marker(trap, "%1").render(&L::quote(&block.id.to_string())))
            .unwrap_or_default()
    }

    /// Error for a combination of field values with no generation rule.
    #[must_use]
    pub fn unhandled(block: &Block, detail: impl Into<String>) -> Error {
        Error::UnhandledCombination {
            kind: block.kind.tag(),
            detail: detail.into(),
        }
    }
}

fn lookup<T: Copy>(block: &Block, name: &str, value: &str, table: &[(&str, T)]) -> Result<T> {
    table
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, item)| *item)
        .ok_or_else(|| Error::UnknownOperator {
            kind: block.kind.tag(),
            field: name.to_string(),
            value: value.to_string(),
        })
}
