//! Identifier allocation for one generation run.

use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;
use tracing::trace;

/// Disambiguation category of a requested name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameCategory {
    Variable,
    Procedure,
    Helper,
}

/// Hands out target-language identifiers.
///
/// Every issued name is unique across all categories and never equal to a
/// reserved word. Asking again for the same desired name in the same category
/// returns the same identifier; the lookup ignores case, like the editor's
/// variable names.
#[derive(Debug, Clone)]
pub struct NameDatabase {
    reserved: HashSet<String>,
    issued: HashMap<(String, NameCategory), String>,
    taken: HashSet<String>,
}

impl NameDatabase {
    /// Creates a database that never issues any of `reserved`.
    pub fn new<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reserved: reserved.into_iter().map(Into::into).collect(),
            issued: HashMap::new(),
            taken: HashSet::new(),
        }
    }

    /// Forgets every issued name. Reserved words stay reserved.
    pub fn reset(&mut self) {
        self.issued.clear();
        self.taken.clear();
    }

    /// Returns the identifier for `desired` in `category`, allocating it on
    /// first use.
    pub fn get_name(&mut self, desired: &str, category: NameCategory) -> String {
        let key = (desired.to_lowercase(), category);
        if let Some(name) = self.issued.get(&key) {
            return name.clone();
        }
        let name = self.get_distinct_name(desired, category);
        self.issued.insert(key, name.clone());
        name
    }

    /// Always allocates a fresh identifier based on `desired`.
    pub fn get_distinct_name(&mut self, desired: &str, category: NameCategory) -> String {
        let base = safe_name(desired);
        let mut candidate = base.clone();
        let mut suffix = 1;
        while self.taken.contains(&candidate) || self.reserved.contains(&candidate) {
            suffix += 1;
            candidate = format!("{base}{suffix}");
        }
        if suffix > 1 {
            trace!(desired, actual = %candidate, ?category, "name collision resolved");
        }
        self.taken.insert(candidate.clone());
        candidate
    }

    /// Returns true if `name` is a reserved word of the target.
    #[must_use]
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }
}

/// Turns arbitrary text into a legal identifier.
///
/// Spaces and ASCII punctuation become `_`, each UTF-8 byte of a non-ASCII
/// character becomes `_XX`, a leading digit gets a `my_` prefix, and an empty
/// name becomes `unnamed`.
#[must_use]
pub fn safe_name(name: &str) -> String {
    if name.is_empty() {
        return "unnamed".to_string();
    }

    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch);
        } else if ch.is_ascii() {
            out.push('_');
        } else {
            let mut buf = [0; 4];
            for byte in ch.encode_utf8(&mut buf).bytes() {
                let _ = write!(out, "_{byte:02X}");
            }
        }
    }

    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert_str(0, "my_");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_name() {
        assert_eq!(safe_name(""), "unnamed");
        assert_eq!(safe_name("my var"), "my_var");
        assert_eq!(safe_name("a-b"), "a_b");
        assert_eq!(safe_name("2nd"), "my_2nd");
        assert_eq!(safe_name("é"), "_C3_A9");
    }

    #[test]
    fn test_suffixing() {
        let mut db = NameDatabase::new(["for"]);
        assert_eq!(db.get_name("for", NameCategory::Variable), "for2");
        assert_eq!(db.get_distinct_name("x", NameCategory::Variable), "x");
        assert_eq!(db.get_distinct_name("x", NameCategory::Variable), "x2");
        assert_eq!(db.get_distinct_name("x", NameCategory::Helper), "x3");
    }

    #[test]
    fn test_stable_and_case_insensitive() {
        let mut db = NameDatabase::new(Vec::<String>::new());
        let first = db.get_name("Count", NameCategory::Variable);
        assert_eq!(db.get_name("count", NameCategory::Variable), first);
        assert_eq!(first, "Count");
        assert_eq!(db.get_name("count", NameCategory::Procedure), "count2");
    }

    #[test]
    fn test_reset() {
        let mut db = NameDatabase::new(["if"]);
        db.get_name("x", NameCategory::Variable);
        db.reset();
        assert_eq!(db.get_distinct_name("x", NameCategory::Variable), "x");
        assert!(db.is_reserved("if"));
    }
}
