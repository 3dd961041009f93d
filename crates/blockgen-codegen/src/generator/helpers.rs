//! Helper-function templates and the definition registry.

use super::utils::collapse_blank_lines;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot,
}

/// Source text with holes for a single substituted value.
///
/// Helper functions use the slot for their own name, which is only known once
/// the name database has issued it. The loop trap uses it for a block id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends literal text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Text(text.into()));
        self
    }

    /// Appends a substitution point.
    #[must_use]
    pub fn slot(mut self) -> Self {
        self.segments.push(Segment::Slot);
        self
    }

    /// A function definition whose first line is `head`, the function name,
    /// then `tail`, followed by `body` one line each.
    #[must_use]
    pub fn function(head: &str, tail: &str, body: &[&str]) -> Self {
        let mut rest = String::from(tail);
        for line in body {
            rest.push('\n');
            rest.push_str(line);
        }
        Self::new().text(head).slot().text(rest)
    }

    /// Splits user-supplied text on every occurrence of `marker`.
    #[must_use]
    pub fn with_marker(text: &str, marker: &str) -> Self {
        let mut template = Self::new();
        for (n, part) in text.split(marker).enumerate() {
            if n > 0 {
                template = template.slot();
            }
            if !part.is_empty() {
                template = template.text(part);
            }
        }
        template
    }

    /// Renders the template with every slot replaced by `value`.
    #[must_use]
    pub fn render(&self, value: &str) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => text.as_str(),
                Segment::Slot => value,
            })
            .collect()
    }
}

/// What a preamble entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    /// An import line, emitted before everything else.
    Import,
    /// The variable declaration block.
    Declaration,
    /// A generated helper function.
    Helper,
    /// A user procedure.
    Procedure,
}

#[derive(Debug, Clone)]
struct Definition {
    kind: DefinitionKind,
    text: String,
}

/// Everything that goes in front of the program body, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Definitions {
    entries: Vec<Definition>,
    index: HashMap<(DefinitionKind, String), usize>,
    helper_names: HashMap<String, String>,
}

impl Definitions {
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.helper_names.clear();
    }

    /// Stores `text` under `(kind, key)`. A later insert with the same key
    /// replaces the text but keeps the original position.
    pub fn insert(&mut self, kind: DefinitionKind, key: &str, text: String) {
        match self.index.get(&(kind, key.to_string())) {
            Some(&slot) => self.entries[slot].text = text,
            None => {
                self.index.insert((kind, key.to_string()), self.entries.len());
                self.entries.push(Definition { kind, text });
            }
        }
    }

    #[must_use]
    pub fn contains(&self, kind: DefinitionKind, key: &str) -> bool {
        self.index.contains_key(&(kind, key.to_string()))
    }

    /// Name issued for the helper registered under `key`, if any.
    #[must_use]
    pub fn helper_name(&self, key: &str) -> Option<&str> {
        self.helper_names.get(key).map(String::as_str)
    }

    /// Registers a helper function.
    pub fn insert_helper(&mut self, key: &str, name: String, text: String) {
        self.insert(DefinitionKind::Helper, key, text);
        self.helper_names.insert(key.to_string(), name);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the preamble: imports one per line, a blank line, then every
    /// other definition separated by blank lines. The result always ends in
    /// two blank lines.
    #[must_use]
    pub fn render(&self) -> String {
        let imports: Vec<&str> = self
            .entries
            .iter()
            .filter(|entry| entry.kind == DefinitionKind::Import)
            .map(|entry| entry.text.as_str())
            .collect();
        let others: Vec<&str> = self
            .entries
            .iter()
            .filter(|entry| entry.kind != DefinitionKind::Import)
            .map(|entry| entry.text.as_str())
            .collect();

        let all = format!("{}\n\n{}", imports.join("\n"), others.join("\n\n"));
        let mut preamble = collapse_blank_lines(&all);
        let trimmed = preamble.trim_end_matches('\n').len();
        preamble.truncate(trimmed);
        preamble.push_str("\n\n\n");
        preamble
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_template() {
        let template = Template::function("def ", "(x):", &["  return x"]);
        assert_eq!(template.render("identity"), "def identity(x):\n  return x");
    }

    #[test]
    fn test_marker_template() {
        let template = Template::with_marker("check(%1, %1)\n", "%1");
        assert_eq!(template.render("'b3'"), "check('b3', 'b3')\n");
        assert_eq!(Template::with_marker("%1", "%1").render("x"), "x");
    }

    #[test]
    fn test_placeholder_text_is_left_alone() {
        let template = Template::new().text("{{{}}} ").slot();
        assert_eq!(template.render("f"), "{{{}}} f");
    }

    #[test]
    fn test_render_groups_imports_first() {
        let mut defs = Definitions::default();
        defs.insert(DefinitionKind::Declaration, "variables", "x = None".into());
        defs.insert(DefinitionKind::Import, "random", "import random".into());
        defs.insert_helper("f", "f".into(), "def f():\n  pass".into());
        defs.insert(DefinitionKind::Import, "math", "import math".into());
        defs.insert(DefinitionKind::Import, "random", "import random".into());

        assert_eq!(
            defs.render(),
            "import random\nimport math\n\nx = None\n\ndef f():\n  pass\n\n\n"
        );
        assert_eq!(defs.helper_name("f"), Some("f"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(Definitions::default().render(), "\n\n\n");
    }
}
