use super::{JavaScript, Output, sublist_template};
use crate::generator::{Fragment, Generator, JsOrder, Language, Position, Template};
use blockgen_core::Block;

const TRIMS: &[(&str, &str)] = &[
    ("LEFT", ".replace(/^[\\s\\xa0]+/, '')"),
    ("RIGHT", ".replace(/[\\s\\xa0]+$/, '')"),
    ("BOTH", ".trim()"),
];

#[derive(Clone, Copy)]
enum Case {
    Upper,
    Lower,
    Title,
}

const CASES: &[(&str, Case)] = &[
    ("UPPERCASE", Case::Upper),
    ("LOWERCASE", Case::Lower),
    ("TITLECASE", Case::Title),
];

impl Generator<'_, JavaScript> {
    pub(super) fn text(&mut self, block: &Block) -> Output {
        let text = self.field(block, "TEXT")?;
        Ok(Fragment::value(JavaScript::quote(text), JsOrder::Atomic))
    }

    pub(super) fn text_join(&mut self, block: &Block) -> Output {
        let count = block.item_count();
        Ok(match count {
            0 => Fragment::value("''", JsOrder::Atomic),
            1 => {
                let only = self.value_or(block, "ADD0", JsOrder::None, "''")?;
                Fragment::value(format!("String({only})"), JsOrder::FunctionCall)
            }
            2 => {
                let a = self.value_or(block, "ADD0", JsOrder::None, "''")?;
                let b = self.value_or(block, "ADD1", JsOrder::None, "''")?;
                Fragment::value(format!("String({a}) + String({b})"), JsOrder::Additive)
            }
            _ => {
                let mut items = Vec::with_capacity(count);
                for n in 0..count {
                    items.push(self.value_or(block, &format!("ADD{n}"), JsOrder::Comma, "''")?);
                }
                Fragment::value(format!("[{}].join('')", items.join(",")), JsOrder::FunctionCall)
            }
        })
    }

    pub(super) fn text_append(&mut self, block: &Block) -> Output {
        let variable = self.variable_name(self.field(block, "VAR")?);
        let text = self.value_or(block, "TEXT", JsOrder::None, "''")?;
        Ok(Fragment::statement(format!(
            "{variable} = String({variable}) + String({text});\n"
        )))
    }

    pub(super) fn text_length(&mut self, block: &Block) -> Output {
        let text = self.value_or(block, "VALUE", JsOrder::FunctionCall, "''")?;
        Ok(Fragment::value(format!("{text}.length"), JsOrder::Member))
    }

    pub(super) fn text_is_empty(&mut self, block: &Block) -> Output {
        let text = self.value_or(block, "VALUE", JsOrder::Member, "''")?;
        Ok(Fragment::value(format!("!{text}.length"), JsOrder::LOGICAL_NOT))
    }

    pub(super) fn text_index_of(&mut self, block: &Block) -> Output {
        let method = self.choice(block, "END", &[("FIRST", "indexOf"), ("LAST", "lastIndexOf")])?;
        let find = self.value_or(block, "FIND", JsOrder::None, "''")?;
        let text = self.value_or(block, "VALUE", JsOrder::Member, "''")?;
        Ok(Fragment::value(
            format!("{text}.{method}({find}) + 1"),
            JsOrder::Additive,
        ))
    }

    pub(super) fn text_char_at(&mut self, block: &Block) -> Output {
        let position = self.choice_or(block, "WHERE", Position::CHOICES, Position::FromStart)?;
        let text = self.value_or(block, "VALUE", JsOrder::Member, "''")?;
        let call = |code: String| Fragment::value(code, JsOrder::FunctionCall);
        Ok(match position {
            Position::First => call(format!("{text}.charAt(0)")),
            Position::Last => call(format!("{text}.slice(-1)")),
            Position::FromStart => {
                let at = self.value_or(block, "AT", JsOrder::Additive, "1")?;
                call(format!("{text}.charAt({})", Self::zero_based(&at)))
            }
            Position::FromEnd => {
                let at = self.value_or(block, "AT", JsOrder::Unary, "1")?;
                call(format!("{text}.slice(-{at}).charAt(0)"))
            }
            Position::Random => {
                let name = self.provide_function(
                    "text_random_letter",
                    &Template::function(
                        "function ",
                        "(text) {",
                        &[
                            "  var x = Math.floor(Math.random() * text.length);",
                            "  return text[x];",
                            "}",
                        ],
                    ),
                );
                call(format!("{name}({text})"))
            }
        })
    }

    pub(super) fn text_get_substring(&mut self, block: &Block) -> Output {
        let text = self.value_or(block, "STRING", JsOrder::Member, "''")?;
        let where1 = self.choice(block, "WHERE1", Position::CHOICES)?;
        let where2 = self.choice(block, "WHERE2", Position::CHOICES)?;
        if where1 == Position::First && where2 == Position::Last {
            return Ok(Fragment::value(text, JsOrder::Member));
        }
        if where1 == Position::Random || where2 == Position::Random {
            return Err(Self::unhandled(block, "random substring positions"));
        }
        let name = self.provide_function(
            "text_get_substring",
            &sublist_template("text", "text_getSubstring"),
        );
        let at1 = self.value_or(block, "AT1", JsOrder::Comma, "1")?;
        let at2 = self.value_or(block, "AT2", JsOrder::Comma, "1")?;
        Ok(Fragment::value(
            format!(
                "{name}({text}, {}, {at1}, {}, {at2})",
                JavaScript::quote(where1.as_str()),
                JavaScript::quote(where2.as_str()),
            ),
            JsOrder::FunctionCall,
        ))
    }

    pub(super) fn text_change_case(&mut self, block: &Block) -> Output {
        let case = self.choice(block, "CASE", CASES)?;
        let code = match case {
            Case::Upper => {
                let text = self.value_or(block, "TEXT", JsOrder::Member, "''")?;
                format!("{text}.toUpperCase()")
            }
            Case::Lower => {
                let text = self.value_or(block, "TEXT", JsOrder::Member, "''")?;
                format!("{text}.toLowerCase()")
            }
            Case::Title => {
                let name = self.provide_function(
                    "text_toTitleCase",
                    &Template::function(
                        "function ",
                        "(str) {",
                        &[
                            "  return str.replace(/\\S+/g,",
                            "      function(txt) {return txt[0].toUpperCase() + txt.substring(1).toLowerCase();});",
                            "}",
                        ],
                    ),
                );
                let text = self.value_or(block, "TEXT", JsOrder::None, "''")?;
                format!("{name}({text})")
            }
        };
        Ok(Fragment::value(code, JsOrder::FunctionCall))
    }

    pub(super) fn text_trim(&mut self, block: &Block) -> Output {
        let method = self.choice(block, "MODE", TRIMS)?;
        let text = self.value_or(block, "TEXT", JsOrder::Member, "''")?;
        Ok(Fragment::value(format!("{text}{method}"), JsOrder::FunctionCall))
    }

    pub(super) fn text_print(&mut self, block: &Block) -> Output {
        let text = self.value_or(block, "TEXT", JsOrder::None, "''")?;
        Ok(Fragment::statement(format!("window.alert({text});\n")))
    }

    pub(super) fn text_prompt(&mut self, block: &Block) -> Output {
        let message = JavaScript::quote(block.field("TEXT").unwrap_or_default());
        let number = self.choice_or(block, "TYPE", &[("TEXT", false), ("NUMBER", true)], false)?;
        let code = if number {
            format!("window.parseFloat(window.prompt({message}))")
        } else {
            format!("window.prompt({message})")
        };
        Ok(Fragment::value(code, JsOrder::FunctionCall))
    }
}
