use super::{JavaScript, Output, sublist_template};
use crate::generator::{AccessMode, Fragment, Generator, JsOrder, Language, Position, Template, is_identifier};
use blockgen_core::Block;

impl Generator<'_, JavaScript> {
    pub(super) fn lists_create_with(&mut self, block: &Block) -> Output {
        let mut items = Vec::new();
        for n in 0..block.item_count() {
            items.push(self.value_or(block, &format!("ADD{n}"), JsOrder::Comma, "null")?);
        }
        Ok(Fragment::value(format!("[{}]", items.join(", ")), JsOrder::Atomic))
    }

    pub(super) fn lists_repeat(&mut self, block: &Block) -> Output {
        let name = self.provide_function(
            "lists_repeat",
            &Template::function(
                "function ",
                "(value, n) {",
                &[
                    "  var array = [];",
                    "  for (var i = 0; i < n; i++) {",
                    "    array[i] = value;",
                    "  }",
                    "  return array;",
                    "}",
                ],
            ),
        );
        let item = self.value_or(block, "ITEM", JsOrder::Comma, "null")?;
        let times = self.value_or(block, "NUM", JsOrder::Comma, "0")?;
        Ok(Fragment::value(format!("{name}({item}, {times})"), JsOrder::FunctionCall))
    }

    pub(super) fn lists_length(&mut self, block: &Block) -> Output {
        let list = self.value_or(block, "VALUE", JsOrder::FunctionCall, "[]")?;
        Ok(Fragment::value(format!("{list}.length"), JsOrder::Member))
    }

    pub(super) fn lists_is_empty(&mut self, block: &Block) -> Output {
        let list = self.value_or(block, "VALUE", JsOrder::Member, "[]")?;
        Ok(Fragment::value(format!("!{list}.length"), JsOrder::LOGICAL_NOT))
    }

    pub(super) fn lists_index_of(&mut self, block: &Block) -> Output {
        let method = self.choice(block, "END", &[("FIRST", "indexOf"), ("LAST", "lastIndexOf")])?;
        let item = self.value_or(block, "FIND", JsOrder::None, "''")?;
        let list = self.value_or(block, "VALUE", JsOrder::Member, "[]")?;
        Ok(Fragment::value(
            format!("{list}.{method}({item}) + 1"),
            JsOrder::Additive,
        ))
    }

    pub(super) fn lists_get_index(&mut self, block: &Block) -> Output {
        let mode = self.choice_or(block, "MODE", AccessMode::CHOICES, AccessMode::Get)?;
        let position = self.choice_or(block, "WHERE", Position::CHOICES, Position::FromStart)?;
        let list = self.value_or(block, "VALUE", JsOrder::Member, "[]")?;

        if matches!(mode, AccessMode::Set | AccessMode::Insert) {
            return Err(Self::unhandled(
                block,
                format!("MODE = {} is not a read", mode.as_str()),
            ));
        }

        // (plain read, read and remove)
        let (get, take) = match position {
            Position::First => (format!("{list}[0]"), format!("{list}.shift()")),
            Position::Last => (format!("{list}.slice(-1)[0]"), format!("{list}.pop()")),
            Position::FromStart => {
                let at = self.value_or(block, "AT", JsOrder::Additive, "1")?;
                let index = Self::zero_based(&at);
                (format!("{list}[{index}]"), format!("{list}.splice({index}, 1)[0]"))
            }
            Position::FromEnd => {
                let at = self.value_or(block, "AT", JsOrder::Unary, "1")?;
                let name = self.provide_function(
                    "lists_remove_from_end",
                    &Template::function(
                        "function ",
                        "(list, x) {",
                        &[
                            "  x = list.length - x;",
                            "  return list.splice(x, 1)[0];",
                            "}",
                        ],
                    ),
                );
                (
                    format!("{list}.slice(-{at})[0]"),
                    format!("{name}({list}, {at})"),
                )
            }
            Position::Random => {
                let name = self.random_item_helper();
                let remove = if mode == AccessMode::Get { "false" } else { "true" };
                let code = format!("{name}({list}, {remove})");
                (code.clone(), code)
            }
        };

        Ok(match mode {
            AccessMode::Get if matches!(position, Position::First | Position::FromStart) => {
                Fragment::value(get, JsOrder::Member)
            }
            AccessMode::Get => Fragment::value(get, JsOrder::FunctionCall),
            AccessMode::GetRemove => Fragment::value(take, JsOrder::FunctionCall),
            _ => Fragment::statement(format!("{take};\n")),
        })
    }

    /// Picks a uniformly random element at call time, optionally removing it.
    fn random_item_helper(&mut self) -> String {
        self.provide_function(
            "lists_get_random_item",
            &Template::function(
                "function ",
                "(list, remove) {",
                &[
                    "  var x = Math.floor(Math.random() * list.length);",
                    "  if (remove) {",
                    "    return list.splice(x, 1)[0];",
                    "  } else {",
                    "    return list[x];",
                    "  }",
                    "}",
                ],
            ),
        )
    }

    pub(super) fn lists_set_index(&mut self, block: &Block) -> Output {
        let mut list = self.value_or(block, "LIST", JsOrder::Member, "[]")?;
        let mode = self.choice_or(block, "MODE", AccessMode::CHOICES, AccessMode::Set)?;
        let position = self.choice_or(block, "WHERE", Position::CHOICES, Position::FromStart)?;
        let value = self.value_or(block, "TO", JsOrder::Assignment, "null")?;

        let insert = match mode {
            AccessMode::Set => false,
            AccessMode::Insert => true,
            _ => {
                return Err(Self::unhandled(
                    block,
                    format!("MODE = {} is not a write", mode.as_str()),
                ));
            }
        };

        let mut code = String::new();
        let index = match position {
            Position::First if insert => {
                return Ok(Fragment::statement(format!("{list}.unshift({value});\n")));
            }
            Position::Last if insert => {
                return Ok(Fragment::statement(format!("{list}.push({value});\n")));
            }
            Position::First => "0".to_string(),
            Position::Last => {
                list = self.cache_list(&mut code, list);
                format!("{list}.length - 1")
            }
            Position::FromStart => {
                let at = self.value_or(block, "AT", JsOrder::Additive, "1")?;
                Self::zero_based(&at)
            }
            Position::FromEnd => {
                let at = self.value_or(block, "AT", JsOrder::Additive, "1")?;
                list = self.cache_list(&mut code, list);
                format!("{list}.length - {at}")
            }
            Position::Random => {
                list = self.cache_list(&mut code, list);
                let x = self.distinct_variable("tmp_x");
                code.push_str(&format!(
                    "var {x} = Math.floor(Math.random() * {list}.length);\n"
                ));
                x
            }
        };

        if insert {
            code.push_str(&format!("{list}.splice({index}, 0, {value});\n"));
        } else {
            code.push_str(&format!("{list}[{index}] = {value};\n"));
        }
        Ok(Fragment::statement(code))
    }

    /// Binds a non-identifier list to a temporary so it is evaluated once.
    fn cache_list(&mut self, code: &mut String, list: String) -> String {
        if is_identifier(&list) {
            return list;
        }
        let temp = self.distinct_variable("tmp_list");
        code.push_str(&format!("var {temp} = {list};\n"));
        temp
    }

    pub(super) fn lists_get_sublist(&mut self, block: &Block) -> Output {
        let list = self.value_or(block, "LIST", JsOrder::Member, "[]")?;
        let where1 = self.choice(block, "WHERE1", Position::CHOICES)?;
        let where2 = self.choice(block, "WHERE2", Position::CHOICES)?;
        if where1 == Position::First && where2 == Position::Last {
            return Ok(Fragment::value(format!("{list}.concat()"), JsOrder::FunctionCall));
        }
        if where1 == Position::Random || where2 == Position::Random {
            return Err(Self::unhandled(block, "random sublist positions"));
        }
        let name = self.provide_function(
            "lists_get_sublist",
            &sublist_template("list", "lists_getSublist"),
        );
        let at1 = self.value_or(block, "AT1", JsOrder::Comma, "1")?;
        let at2 = self.value_or(block, "AT2", JsOrder::Comma, "1")?;
        Ok(Fragment::value(
            format!(
                "{name}({list}, {}, {at1}, {}, {at2})",
                JavaScript::quote(where1.as_str()),
                JavaScript::quote(where2.as_str()),
            ),
            JsOrder::FunctionCall,
        ))
    }

    /// Reads `NUM` values into a list that keeps a padding `0` at index 0.
    pub(super) fn lists_input_n(&mut self, block: &Block) -> Output {
        let list = self.value_or(block, "LIST", JsOrder::Member, "[]")?;
        let count = self.value_or(block, "NUM", JsOrder::Relational, "1")?;
        let index = self.distinct_variable("index");
        let prompt = JavaScript::quote(&format!("Enter element {list}["));
        Ok(Fragment::statement(format!(
            "{list} = [0];\nfor (var {index} = 1; {index} <= {count}; {index}++) {{\n{indent}{list}.push(window.parseInt(window.prompt({prompt} + {index} + ']: ')));\n}}\n",
            indent = self.indent()
        )))
    }

    /// Alerts every element after the padding slot.
    pub(super) fn lists_output_n(&mut self, block: &Block) -> Output {
        let list = self.value_or(block, "LIST", JsOrder::Member, "[]")?;
        Ok(Fragment::statement(format!(
            "window.alert({list}.join(', ').substr(3));\n"
        )))
    }

    pub(super) fn lists_get_element(&mut self, block: &Block) -> Output {
        let at = self.value_or(block, "NUM", JsOrder::UNARY_NEGATION, "1")?;
        let list = self.value_or(block, "LIST", JsOrder::Member, "[]")?;
        Ok(Fragment::value(format!("{list}[{at}]"), JsOrder::Member))
    }

    pub(super) fn lists_set_element(&mut self, block: &Block) -> Output {
        let at = self.value_or(block, "NUM", JsOrder::UNARY_NEGATION, "1")?;
        let value = self.value_or(block, "TO", JsOrder::UNARY_NEGATION, "0")?;
        let list = self.value_or(block, "LIST", JsOrder::Member, "[]")?;
        Ok(Fragment::statement(format!("{list}[{at}] = {value};\n")))
    }
}
