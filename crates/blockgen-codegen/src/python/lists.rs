use super::{Output, Python};
use crate::generator::{
    AccessMode, Fragment, Generator, Language, Position, PythonOrder, Template, is_identifier,
    parse_int,
};
use blockgen_core::Block;

impl Generator<'_, Python> {
    pub(super) fn lists_create_with(&mut self, block: &Block) -> Output {
        let mut items = Vec::new();
        for n in 0..block.item_count() {
            items.push(self.value_or(block, &format!("ADD{n}"), PythonOrder::None, "None")?);
        }
        Ok(Fragment::value(
            format!("[{}]", items.join(", ")),
            PythonOrder::Atomic,
        ))
    }

    pub(super) fn lists_repeat(&mut self, block: &Block) -> Output {
        let item = self.value_or(block, "ITEM", PythonOrder::None, "None")?;
        let times = self.value_or(block, "NUM", PythonOrder::Multiplicative, "0")?;
        Ok(Fragment::value(
            format!("[{item}] * {times}"),
            PythonOrder::Multiplicative,
        ))
    }

    pub(super) fn lists_length(&mut self, block: &Block) -> Output {
        let list = self.value_or(block, "VALUE", PythonOrder::None, "[]")?;
        Ok(Fragment::value(format!("len({list})"), PythonOrder::FUNCTION_CALL))
    }

    pub(super) fn lists_is_empty(&mut self, block: &Block) -> Output {
        let list = self.value_or(block, "VALUE", PythonOrder::None, "[]")?;
        Ok(Fragment::value(format!("not len({list})"), PythonOrder::LogicalNot))
    }

    pub(super) fn lists_index_of(&mut self, block: &Block) -> Output {
        let last = self.choice(block, "END", &[("FIRST", false), ("LAST", true)])?;
        let item = self.value_or(block, "FIND", PythonOrder::None, "''")?;
        let list = self.value_or(block, "VALUE", PythonOrder::None, "[]")?;
        let name = if last {
            self.provide_function(
                "last_index",
                &Template::function(
                    "def ",
                    "(myList, elem):",
                    &[
                        "  try: theIndex = len(myList) - myList[::-1].index(elem)",
                        "  except: theIndex = 0",
                        "  return theIndex",
                    ],
                ),
            )
        } else {
            self.provide_function(
                "first_index",
                &Template::function(
                    "def ",
                    "(myList, elem):",
                    &[
                        "  try: theIndex = myList.index(elem) + 1",
                        "  except: theIndex = 0",
                        "  return theIndex",
                    ],
                ),
            )
        };
        Ok(Fragment::value(
            format!("{name}({list}, {item})"),
            PythonOrder::FUNCTION_CALL,
        ))
    }

    pub(super) fn lists_get_index(&mut self, block: &Block) -> Output {
        let mode = self.choice_or(block, "MODE", AccessMode::CHOICES, AccessMode::Get)?;
        let position = self.choice_or(block, "WHERE", Position::CHOICES, Position::FromStart)?;
        let at = self.value_or(block, "AT", PythonOrder::UnarySign, "1")?;
        let list = self.value_or(block, "VALUE", PythonOrder::Member, "[]")?;

        if matches!(mode, AccessMode::Set | AccessMode::Insert) {
            return Err(Self::unhandled(
                block,
                format!("MODE = {} is not a read", mode.as_str()),
            ));
        }

        let (index, pop) = match position {
            Position::First => ("0".to_string(), "0".to_string()),
            Position::Last => ("-1".to_string(), String::new()),
            Position::FromStart => {
                let index = Self::zero_based(&at);
                (index.clone(), index)
            }
            Position::FromEnd => (format!("-{at}"), format!("-{at}")),
            Position::Random => {
                self.import_random();
                let name = self.random_item_helper();
                let remove = if mode == AccessMode::Get { "False" } else { "True" };
                let code = format!("{name}({list}, {remove})");
                return Ok(match mode {
                    AccessMode::Remove => Fragment::statement(format!("{code}\n")),
                    _ => Fragment::value(code, PythonOrder::FUNCTION_CALL),
                });
            }
        };

        Ok(match mode {
            AccessMode::Get => Fragment::value(format!("{list}[{index}]"), PythonOrder::Member),
            AccessMode::GetRemove => {
                Fragment::value(format!("{list}.pop({pop})"), PythonOrder::FUNCTION_CALL)
            }
            _ => Fragment::statement(format!("{list}.pop({pop})\n")),
        })
    }

    /// Picks a uniformly random element at call time, optionally removing it.
    fn random_item_helper(&mut self) -> String {
        self.provide_function(
            "lists_get_random_item",
            &Template::function(
                "def ",
                "(myList, remove):",
                &[
                    "  x = int(random.random() * len(myList))",
                    "  if remove:",
                    "    return myList.pop(x)",
                    "  else:",
                    "    return myList[x]",
                ],
            ),
        )
    }

    pub(super) fn lists_set_index(&mut self, block: &Block) -> Output {
        let mut list = self.value_or(block, "LIST", PythonOrder::Member, "[]")?;
        let mode = self.choice_or(block, "MODE", AccessMode::CHOICES, AccessMode::Set)?;
        let position = self.choice_or(block, "WHERE", Position::CHOICES, Position::FromStart)?;
        let at = self.value_or(block, "AT", PythonOrder::UnarySign, "1")?;
        let value = self.value_or(block, "TO", PythonOrder::None, "None")?;

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
            Position::First if insert => return Ok(Fragment::statement(format!("{list}.insert(0, {value})\n"))),
            Position::Last if insert => return Ok(Fragment::statement(format!("{list}.append({value})\n"))),
            Position::First => "0".to_string(),
            Position::Last => "-1".to_string(),
            Position::FromStart => Self::zero_based(&at),
            Position::FromEnd => format!("-{at}"),
            Position::Random => {
                self.import_random();
                if !is_identifier(&list) {
                    let temp = self.distinct_variable("tmp_list");
                    code.push_str(&format!("{temp} = {list}\n"));
                    list = temp;
                }
                let x = self.distinct_variable("tmp_x");
                code.push_str(&format!("{x} = int(random.random() * len({list}))\n"));
                x
            }
        };

        if insert {
            code.push_str(&format!("{list}.insert({index}, {value})\n"));
        } else {
            code.push_str(&format!("{list}[{index}] = {value}\n"));
        }
        Ok(Fragment::statement(code))
    }

    pub(super) fn lists_get_sublist(&mut self, block: &Block) -> Output {
        let list = self.value_or(block, "LIST", PythonOrder::Member, "[]")?;
        self.slice(block, &list)
    }

    /// Reads `NUM` values into a list that keeps a padding `0` at index 0.
    pub(super) fn lists_input_n(&mut self, block: &Block) -> Output {
        let list = self.value_or(block, "LIST", PythonOrder::Member, "[]")?;
        let count = self.value_or(block, "NUM", PythonOrder::None, "1")?;
        let count = match parse_int(&count) {
            Some(n) => n.to_string(),
            None => format!("int({count})"),
        };
        let index = self.distinct_variable("index");
        let prompt = Python::quote(&format!("Enter element {list}["));
        Ok(Fragment::statement(format!(
            "{list} = [0]\nfor {index} in range(1, {count} + 1):\n{indent}{list}.append(int(input({prompt} + str({index}) + ']: ')))\n",
            indent = self.indent()
        )))
    }

    pub(super) fn lists_output_n(&mut self, block: &Block) -> Output {
        let list = self.value_or(block, "LIST", PythonOrder::Member, "[]")?;
        Ok(Fragment::statement(format!(
            "print(', '.join(map(str, {list}[1:])))\n"
        )))
    }

    pub(super) fn lists_get_element(&mut self, block: &Block) -> Output {
        let at = self.value_or(block, "NUM", PythonOrder::None, "1")?;
        let list = self.value_or(block, "LIST", PythonOrder::Member, "[]")?;
        Ok(Fragment::value(format!("{list}[{at}]"), PythonOrder::Member))
    }

    pub(super) fn lists_set_element(&mut self, block: &Block) -> Output {
        let at = self.value_or(block, "NUM", PythonOrder::None, "1")?;
        let value = self.value_or(block, "TO", PythonOrder::None, "0")?;
        let list = self.value_or(block, "LIST", PythonOrder::Member, "[]")?;
        Ok(Fragment::statement(format!("{list}[{at}] = {value}\n")))
    }
}
