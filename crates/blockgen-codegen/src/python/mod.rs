//! Python 3 target.

mod colour;
mod lists;
mod logic;
mod loops;
mod math;
mod procedures;
mod text;
mod variables;

use crate::generator::{Fragment, Generator, Language, Position, PythonOrder, parse_int, quote_single};
use blockgen_core::{Block, BlockKind, Result};

/// The Python 3 target profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct Python;

type Output = Result<Fragment<PythonOrder>>;

const RESERVED_WORDS: &[&str] = &[
    // keywords
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "exec", "finally", "for", "from", "global", "if", "import", "in", "is",
    "lambda", "nonlocal", "not", "or", "pass", "print", "raise", "return", "try", "while",
    "with", "yield",
    // constants
    "True", "False", "None", "NotImplemented", "Ellipsis", "__debug__", "quit", "exit",
    "copyright", "license", "credits",
    // built-in functions
    "abs", "divmod", "input", "open", "staticmethod", "all", "enumerate", "int", "ord", "str",
    "any", "eval", "isinstance", "pow", "sum", "basestring", "execfile", "issubclass", "super",
    "bin", "file", "iter", "property", "tuple", "bool", "filter", "len", "range", "type",
    "bytearray", "float", "list", "raw_input", "unichr", "callable", "format", "locals",
    "reduce", "unicode", "chr", "frozenset", "long", "reload", "vars", "classmethod", "getattr",
    "map", "repr", "xrange", "cmp", "globals", "max", "reversed", "zip", "compile", "hasattr",
    "memoryview", "round", "__import__", "complex", "hash", "min", "set", "apply", "delattr",
    "help", "next", "setattr", "buffer", "dict", "hex", "object", "slice", "coerce", "dir", "id",
    "oct", "sorted", "intern",
    // modules imported by generated code
    "math", "random", "sys",
];

impl Language for Python {
    type Order = PythonOrder;

    const NAME: &'static str = "python";
    const RESERVED_WORDS: &'static [&'static str] = RESERVED_WORDS;
    const COMMENT_PREFIX: &'static str = "# ";

    fn quote(text: &str) -> String {
        quote_single(text)
    }

    fn scrub_naked_value(line: &str) -> String {
        format!("{line}\n")
    }

    fn declare_variables(names: &[String]) -> Option<String> {
        if names.is_empty() {
            return None;
        }
        let lines: Vec<String> = names.iter().map(|name| format!("{name} = None")).collect();
        Some(lines.join("\n"))
    }

    fn emit(generator: &mut Generator<'_, Self>, block: &Block) -> Output {
        match block.kind {
            BlockKind::ControlsIf => generator.controls_if(block),
            BlockKind::LogicCompare => generator.logic_compare(block),
            BlockKind::LogicOperation => generator.logic_operation(block),
            BlockKind::LogicNegate => generator.logic_negate(block),
            BlockKind::LogicBoolean => generator.logic_boolean(block),
            BlockKind::LogicNull => Ok(Fragment::value("None", PythonOrder::Atomic)),
            BlockKind::LogicTernary => generator.logic_ternary(block),

            BlockKind::ControlsRepeat => generator.controls_repeat(block),
            BlockKind::ControlsRepeatExt => generator.controls_repeat_ext(block),
            BlockKind::ControlsWhileUntil => generator.controls_while_until(block),
            BlockKind::ControlsFor => generator.controls_for(block),
            BlockKind::ControlsForEach => generator.controls_for_each(block),
            BlockKind::ControlsFlowStatements => generator.controls_flow_statements(block),

            BlockKind::MathNumber => generator.math_number(block),
            BlockKind::MathArithmetic => generator.math_arithmetic(block),
            BlockKind::MathSingle | BlockKind::MathRound | BlockKind::MathTrig => {
                generator.math_single(block)
            }
            BlockKind::MathConstant => generator.math_constant(block),
            BlockKind::MathNumberProperty => generator.math_number_property(block),
            BlockKind::MathChange => generator.math_change(block),
            BlockKind::MathOnList => generator.math_on_list(block),
            BlockKind::MathModulo => generator.math_modulo(block),
            BlockKind::MathConstrain => generator.math_constrain(block),
            BlockKind::MathRandomInt => generator.math_random_int(block),
            BlockKind::MathRandomFloat => generator.math_random_float(),

            BlockKind::Text => generator.text(block),
            BlockKind::TextJoin => generator.text_join(block),
            BlockKind::TextAppend => generator.text_append(block),
            BlockKind::TextLength => generator.text_length(block),
            BlockKind::TextIsEmpty => generator.text_is_empty(block),
            BlockKind::TextIndexOf => generator.text_index_of(block),
            BlockKind::TextCharAt => generator.text_char_at(block),
            BlockKind::TextGetSubstring => generator.text_get_substring(block),
            BlockKind::TextChangeCase => generator.text_change_case(block),
            BlockKind::TextTrim => generator.text_trim(block),
            BlockKind::TextPrint => generator.text_print(block),
            BlockKind::TextPrompt => generator.text_prompt(block),

            BlockKind::ListsCreateEmpty => Ok(Fragment::value("[]", PythonOrder::Atomic)),
            BlockKind::ListsCreateWith => generator.lists_create_with(block),
            BlockKind::ListsRepeat => generator.lists_repeat(block),
            BlockKind::ListsLength => generator.lists_length(block),
            BlockKind::ListsIsEmpty => generator.lists_is_empty(block),
            BlockKind::ListsIndexOf => generator.lists_index_of(block),
            BlockKind::ListsGetIndex => generator.lists_get_index(block),
            BlockKind::ListsSetIndex => generator.lists_set_index(block),
            BlockKind::ListsGetSublist => generator.lists_get_sublist(block),
            BlockKind::ListsInputN => generator.lists_input_n(block),
            BlockKind::ListsOutputN => generator.lists_output_n(block),
            BlockKind::ListsGetElement => generator.lists_get_element(block),
            BlockKind::ListsSetElement => generator.lists_set_element(block),

            BlockKind::ColourPicker => generator.colour_picker(block),
            BlockKind::ColourRandom => generator.colour_random(),
            BlockKind::ColourRgb => generator.colour_rgb(block),
            BlockKind::ColourBlend => generator.colour_blend(block),

            BlockKind::ProceduresDefReturn | BlockKind::ProceduresDefNoReturn => {
                generator.procedures_def(block)
            }
            BlockKind::ProceduresCallReturn => generator.procedures_call_return(block),
            BlockKind::ProceduresCallNoReturn => generator.procedures_call_no_return(block),
            BlockKind::ProceduresIfReturn => generator.procedures_if_return(block),

            BlockKind::VariablesGet => generator.variables_get(block),
            BlockKind::VariablesSet => generator.variables_set(block),
            BlockKind::VariablesInputValue => generator.variables_input_value(block),
            BlockKind::VariablesOutputValue => generator.variables_output_value(block),
        }
    }
}

impl Generator<'_, Python> {
    /// Indented statement input, or `pass` when it is empty.
    fn branch(&mut self, block: &Block, slot: &str) -> Result<String> {
        let code = self.statement(block, slot)?;
        if code.is_empty() {
            Ok(format!("{}pass\n", self.indent()))
        } else {
            Ok(code)
        }
    }

    /// Loop body: the loop trap followed by the branch.
    fn loop_body(&mut self, block: &Block, slot: &str) -> Result<String> {
        let branch = self.branch(block, slot)?;
        Ok(format!("{}{branch}", self.loop_trap(block)))
    }

    /// Random number support for generated code.
    fn import_random(&mut self) {
        self.add_import("random", "import random");
    }

    fn import_math(&mut self) {
        self.add_import("math", "import math");
    }

    /// Translates a one-based index to a zero-based one, folding literal
    /// numerals.
    fn zero_based(index: &str) -> String {
        match parse_int(index) {
            Some(n) => (n - 1).to_string(),
            None => format!("int({index} - 1)"),
        }
    }

    /// Builds a `[start : end]` slice of `sequence` for the sublist and
    /// substring blocks.
    fn slice(&mut self, block: &Block, sequence: &str) -> Output {
        let where1 = self.choice(block, "WHERE1", Position::CHOICES)?;
        let where2 = self.choice(block, "WHERE2", Position::CHOICES)?;
        let at1 = self.value_or(block, "AT1", PythonOrder::Additive, "1")?;
        let at2 = self.value_or(block, "AT2", PythonOrder::Additive, "1")?;

        let start = match where1 {
            Position::First => String::new(),
            Position::FromStart if at1 == "1" => String::new(),
            Position::FromStart => Self::zero_based(&at1),
            Position::FromEnd => match parse_int(&at1) {
                Some(n) => (-n).to_string(),
                None => format!("-int({at1})"),
            },
            Position::Last | Position::Random => {
                return Err(Self::unhandled(block, format!("WHERE1 = {}", where1.as_str())));
            }
        };

        let end = match where2 {
            Position::Last => String::new(),
            Position::FromEnd if at2 == "1" => String::new(),
            Position::FromStart => match parse_int(&at2) {
                Some(n) => n.to_string(),
                None => format!("int({at2})"),
            },
            Position::FromEnd => match parse_int(&at2) {
                Some(n) if 1 - n == 0 => String::new(),
                Some(n) => (1 - n).to_string(),
                None => {
                    self.add_import("sys", "import sys");
                    format!("int(1 - {at2}) or sys.maxsize")
                }
            },
            Position::First | Position::Random => {
                return Err(Self::unhandled(block, format!("WHERE2 = {}", where2.as_str())));
            }
        };

        Ok(Fragment::value(
            format!("{sequence}[{start} : {end}]"),
            PythonOrder::Member,
        ))
    }
}
