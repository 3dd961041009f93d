//! JavaScript target.

mod colour;
mod lists;
mod logic;
mod loops;
mod math;
mod procedures;
mod text;
mod variables;

use crate::generator::{
    Fragment, Generator, JsOrder, Language, Template, format_number, parse_number, quote_single,
};
use blockgen_core::{Block, BlockKind, Result};

/// The JavaScript target profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScript;

type Output = Result<Fragment<JsOrder>>;

const RESERVED_WORDS: &[&str] = &[
    // keywords
    "break", "case", "catch", "continue", "debugger", "default", "delete", "do", "else",
    "finally", "for", "function", "if", "in", "instanceof", "new", "return", "switch", "this",
    "throw", "try", "typeof", "var", "void", "while", "with",
    // future reserved words
    "class", "enum", "export", "extends", "import", "super", "implements", "interface", "let",
    "package", "private", "protected", "public", "static", "yield",
    // literals
    "const", "null", "true", "false",
    // global objects
    "Array", "ArrayBuffer", "Boolean", "Date", "decodeURI", "decodeURIComponent", "encodeURI",
    "encodeURIComponent", "Error", "eval", "EvalError", "Float32Array", "Float64Array",
    "Function", "Infinity", "Int16Array", "Int32Array", "Int8Array", "isFinite", "isNaN",
    "Iterator", "JSON", "Math", "NaN", "Number", "Object", "parseFloat", "parseInt",
    "RangeError", "ReferenceError", "RegExp", "StopIteration", "String", "SyntaxError",
    "TypeError", "Uint16Array", "Uint32Array", "Uint8Array", "Uint8ClampedArray", "undefined",
    "uneval", "URIError",
    // browser globals
    "alert", "arguments", "document", "history", "length", "location", "name", "navigator",
    "parent", "prompt", "screen", "self", "top", "window",
];

impl Language for JavaScript {
    type Order = JsOrder;

    const NAME: &'static str = "javascript";
    const RESERVED_WORDS: &'static [&'static str] = RESERVED_WORDS;
    const COMMENT_PREFIX: &'static str = "// ";

    fn quote(text: &str) -> String {
        quote_single(text)
    }

    fn scrub_naked_value(line: &str) -> String {
        format!("{line};\n")
    }

    fn declare_variables(names: &[String]) -> Option<String> {
        if names.is_empty() {
            None
        } else {
            Some(format!("var {};", names.join(", ")))
        }
    }

    fn emit(generator: &mut Generator<'_, Self>, block: &Block) -> Output {
        match block.kind {
            BlockKind::ControlsIf => generator.controls_if(block),
            BlockKind::LogicCompare => generator.logic_compare(block),
            BlockKind::LogicOperation => generator.logic_operation(block),
            BlockKind::LogicNegate => generator.logic_negate(block),
            BlockKind::LogicBoolean => generator.logic_boolean(block),
            BlockKind::LogicNull => Ok(Fragment::value("null", JsOrder::Atomic)),
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
            BlockKind::MathRandomFloat => Ok(Fragment::value("Math.random()", JsOrder::FunctionCall)),

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

            BlockKind::ListsCreateEmpty => Ok(Fragment::value("[]", JsOrder::Atomic)),
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

impl Generator<'_, JavaScript> {
    /// Loop body: the loop trap followed by the indented statement input.
    fn loop_body(&mut self, block: &Block, slot: &str) -> Result<String> {
        let branch = self.statement(block, slot)?;
        Ok(format!("{}{branch}", self.loop_trap(block)))
    }

    /// Translates a one-based index to a zero-based one, folding literal
    /// numerals. Dynamic indices must already bind at least as tightly as
    /// [`JsOrder::Additive`].
    fn zero_based(index: &str) -> String {
        match parse_number(index) {
            Some(n) => format_number(n - 1.0),
            None => format!("{index} - 1"),
        }
    }
}

/// `(sequence, where1, at1, where2, at2)` slicing helper shared by the
/// sublist and substring blocks. `param` names the sequence argument.
fn sublist_template(param: &str, kind: &str) -> Template {
    let tail = format!("({param}, where1, at1, where2, at2) {{");
    let from_end = format!("      at = {param}.length - at;");
    let last = format!("      at = {param}.length - 1;");
    let unhandled = format!("      throw 'Unhandled option ({kind}).';");
    let slice = format!("  return {param}.slice(at1, at2);");
    Template::function(
        "function ",
        &tail,
        &[
            "  function getAt(where, at) {",
            "    if (where == 'FROM_START') {",
            "      at--;",
            "    } else if (where == 'FROM_END') {",
            from_end.as_str(),
            "    } else if (where == 'FIRST') {",
            "      at = 0;",
            "    } else if (where == 'LAST') {",
            last.as_str(),
            "    } else {",
            unhandled.as_str(),
            "    }",
            "    return at;",
            "  }",
            "  at1 = getAt(where1, at1);",
            "  at2 = getAt(where2, at2) + 1;",
            slice.as_str(),
            "}",
        ],
    )
}
