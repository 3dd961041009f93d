use super::{Output, Python};
use crate::generator::{Fragment, Generator, Language, Position, PythonOrder, Template};
use blockgen_core::Block;

const CASES: &[(&str, &str)] = &[
    ("UPPERCASE", ".upper()"),
    ("LOWERCASE", ".lower()"),
    ("TITLECASE", ".title()"),
];

const TRIMS: &[(&str, &str)] = &[
    ("LEFT", ".lstrip()"),
    ("RIGHT", ".rstrip()"),
    ("BOTH", ".strip()"),
];

impl Generator<'_, Python> {
    pub(super) fn text(&mut self, block: &Block) -> Output {
        let text = self.field(block, "TEXT")?;
        Ok(Fragment::value(Python::quote(text), PythonOrder::Atomic))
    }

    pub(super) fn text_join(&mut self, block: &Block) -> Output {
        let mut items = Vec::new();
        for n in 0..block.item_count() {
            items.push(self.value_or(block, &format!("ADD{n}"), PythonOrder::None, "''")?);
        }
        Ok(match items.as_slice() {
            [] => Fragment::value("''", PythonOrder::Atomic),
            [only] => Fragment::value(format!("str({only})"), PythonOrder::FUNCTION_CALL),
            [a, b] => Fragment::value(format!("str({a}) + str({b})"), PythonOrder::Additive),
            _ => {
                let temp = self.distinct_variable("temp_value");
                Fragment::value(
                    format!("''.join([str({temp}) for {temp} in [{}]])", items.join(", ")),
                    PythonOrder::FUNCTION_CALL,
                )
            }
        })
    }

    pub(super) fn text_append(&mut self, block: &Block) -> Output {
        let variable = self.variable_name(self.field(block, "VAR")?);
        let text = self.value_or(block, "TEXT", PythonOrder::None, "''")?;
        Ok(Fragment::statement(format!(
            "{variable} = str({variable}) + str({text})\n"
        )))
    }

    pub(super) fn text_length(&mut self, block: &Block) -> Output {
        let text = self.value_or(block, "VALUE", PythonOrder::None, "''")?;
        Ok(Fragment::value(format!("len({text})"), PythonOrder::FUNCTION_CALL))
    }

    pub(super) fn text_is_empty(&mut self, block: &Block) -> Output {
        let text = self.value_or(block, "VALUE", PythonOrder::None, "''")?;
        Ok(Fragment::value(format!("not len({text})"), PythonOrder::LogicalNot))
    }

    pub(super) fn text_index_of(&mut self, block: &Block) -> Output {
        let method = self.choice(block, "END", &[("FIRST", "find"), ("LAST", "rfind")])?;
        let find = self.value_or(block, "FIND", PythonOrder::None, "''")?;
        let text = self.value_or(block, "VALUE", PythonOrder::Member, "''")?;
        Ok(Fragment::value(
            format!("{text}.{method}({find}) + 1"),
            PythonOrder::Additive,
        ))
    }

    pub(super) fn text_char_at(&mut self, block: &Block) -> Output {
        let position = self.choice_or(block, "WHERE", Position::CHOICES, Position::FromStart)?;
        let at = self.value_or(block, "AT", PythonOrder::UnarySign, "1")?;
        let text = self.value_or(block, "VALUE", PythonOrder::Member, "''")?;
        let member = |index: String| Fragment::value(format!("{text}[{index}]"), PythonOrder::Member);
        Ok(match position {
            Position::First => member("0".to_string()),
            Position::Last => member("-1".to_string()),
            Position::FromStart => member(Self::zero_based(&at)),
            Position::FromEnd => member(format!("-{at}")),
            Position::Random => {
                self.import_random();
                let name = self.provide_function(
                    "text_random_letter",
                    &Template::function(
                        "def ",
                        "(text):",
                        &["  x = int(random.random() * len(text))", "  return text[x]"],
                    ),
                );
                Fragment::value(format!("{name}({text})"), PythonOrder::FUNCTION_CALL)
            }
        })
    }

    pub(super) fn text_get_substring(&mut self, block: &Block) -> Output {
        let text = self.value_or(block, "STRING", PythonOrder::Member, "''")?;
        self.slice(block, &text)
    }

    pub(super) fn text_change_case(&mut self, block: &Block) -> Output {
        let method = self.choice(block, "CASE", CASES)?;
        let text = self.value_or(block, "TEXT", PythonOrder::Member, "''")?;
        Ok(Fragment::value(format!("{text}{method}"), PythonOrder::Member))
    }

    pub(super) fn text_trim(&mut self, block: &Block) -> Output {
        let method = self.choice(block, "MODE", TRIMS)?;
        let text = self.value_or(block, "TEXT", PythonOrder::Member, "''")?;
        Ok(Fragment::value(format!("{text}{method}"), PythonOrder::Member))
    }

    pub(super) fn text_print(&mut self, block: &Block) -> Output {
        let text = self.value_or(block, "TEXT", PythonOrder::None, "''")?;
        Ok(Fragment::statement(format!("print({text})\n")))
    }

    pub(super) fn text_prompt(&mut self, block: &Block) -> Output {
        let message = Python::quote(block.field("TEXT").unwrap_or_default());
        let number = self.choice_or(block, "TYPE", &[("TEXT", false), ("NUMBER", true)], false)?;
        let code = if number {
            format!("float(input({message}))")
        } else {
            format!("input({message})")
        };
        Ok(Fragment::value(code, PythonOrder::FUNCTION_CALL))
    }
}
