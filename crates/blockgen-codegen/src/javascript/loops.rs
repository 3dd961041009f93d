use super::{JavaScript, Output};
use crate::generator::{Fragment, Generator, JsOrder, format_number, is_identifier, is_number, parse_number};
use blockgen_core::{Block, Error};

const FLOWS: &[(&str, &str)] = &[("BREAK", "break;\n"), ("CONTINUE", "continue;\n")];

/// True for code that can be read repeatedly without caching.
fn is_simple(code: &str) -> bool {
    is_identifier(code) || is_number(code)
}

impl Generator<'_, JavaScript> {
    pub(super) fn controls_repeat(&mut self, block: &Block) -> Output {
        let raw = self.field(block, "TIMES")?;
        let times = parse_number(raw).ok_or_else(|| Error::InvalidField {
            kind: block.kind.tag(),
            field: "TIMES".to_string(),
            value: raw.to_string(),
        })?;
        let branch = self.loop_body(block, "DO")?;
        let counter = self.distinct_variable("count");
        Ok(Fragment::statement(format!(
            "for (var {counter} = 0; {counter} < {}; {counter}++) {{\n{branch}}}\n",
            format_number(times)
        )))
    }

    pub(super) fn controls_repeat_ext(&mut self, block: &Block) -> Output {
        let times = self.value_or(block, "TIMES", JsOrder::Assignment, "0")?;
        let branch = self.loop_body(block, "DO")?;
        let mut code = String::new();
        let counter = self.distinct_variable("count");
        let end = if is_simple(&times) {
            times
        } else {
            let end = self.distinct_variable("repeat_end");
            code.push_str(&format!("var {end} = {times};\n"));
            end
        };
        code.push_str(&format!(
            "for (var {counter} = 0; {counter} < {end}; {counter}++) {{\n{branch}}}\n"
        ));
        Ok(Fragment::statement(code))
    }

    pub(super) fn controls_while_until(&mut self, block: &Block) -> Output {
        let until = self.choice_or(block, "MODE", &[("WHILE", false), ("UNTIL", true)], false)?;
        let condition = if until {
            let condition = self.value_or(block, "BOOL", JsOrder::LOGICAL_NOT, "false")?;
            format!("!{condition}")
        } else {
            self.value_or(block, "BOOL", JsOrder::None, "false")?
        };
        let branch = self.loop_body(block, "DO")?;
        Ok(Fragment::statement(format!(
            "while ({condition}) {{\n{branch}}}\n"
        )))
    }

    pub(super) fn controls_for(&mut self, block: &Block) -> Output {
        let variable = self.variable_name(self.field(block, "VAR")?);
        let from = self.value_or(block, "FROM", JsOrder::Assignment, "0")?;
        let to = self.value_or(block, "TO", JsOrder::Assignment, "0")?;
        let by = self.value_or(block, "BY", JsOrder::Assignment, "1")?;
        let branch = self.loop_body(block, "DO")?;

        if let (Some(start), Some(end), Some(step)) =
            (parse_number(&from), parse_number(&to), parse_number(&by))
        {
            let up = start <= end;
            let comparison = if up { "<=" } else { ">=" };
            let step = step.abs();
            let advance = match (up, step == 1.0) {
                (true, true) => "++".to_string(),
                (false, true) => "--".to_string(),
                (true, false) => format!(" += {}", format_number(step)),
                (false, false) => format!(" -= {}", format_number(step)),
            };
            return Ok(Fragment::statement(format!(
                "for ({variable} = {from}; {variable} {comparison} {to}; {variable}{advance}) {{\n{branch}}}\n"
            )));
        }

        let mut code = String::new();
        let start = self.cache(&mut code, &variable, "_start", from);
        let end = self.cache(&mut code, &variable, "_end", to);
        let inc = self.distinct_variable(&format!("{variable}_inc"));
        match parse_number(&by) {
            Some(step) => code.push_str(&format!("var {inc} = {};\n", format_number(step.abs()))),
            None => code.push_str(&format!("var {inc} = Math.abs({by});\n")),
        }
        code.push_str(&format!(
            "if ({start} > {end}) {{\n{indent}{inc} = -{inc};\n}}\n",
            indent = self.indent()
        ));
        code.push_str(&format!(
            "for ({variable} = {start};\n     {inc} >= 0 ? {variable} <= {end} : {variable} >= {end};\n     {variable} += {inc}) {{\n{branch}}}\n"
        ));
        Ok(Fragment::statement(code))
    }

    /// Binds `value` to a fresh `var` unless it is already simple.
    fn cache(&mut self, code: &mut String, variable: &str, suffix: &str, value: String) -> String {
        if is_simple(&value) {
            return value;
        }
        let name = self.distinct_variable(&format!("{variable}{suffix}"));
        code.push_str(&format!("var {name} = {value};\n"));
        name
    }

    pub(super) fn controls_for_each(&mut self, block: &Block) -> Output {
        let variable = self.variable_name(self.field(block, "VAR")?);
        let list = self.value_or(block, "LIST", JsOrder::Assignment, "[]")?;
        let branch = self.loop_body(block, "DO")?;

        let mut code = String::new();
        let list = if is_identifier(&list) {
            list
        } else {
            let name = self.distinct_variable(&format!("{variable}_list"));
            code.push_str(&format!("var {name} = {list};\n"));
            name
        };
        let index = self.distinct_variable(&format!("{variable}_index"));
        code.push_str(&format!(
            "for (var {index} = 0; {index} < {list}.length; {index}++) {{\n{indent}{variable} = {list}[{index}];\n{branch}}}\n",
            indent = self.indent()
        ));
        Ok(Fragment::statement(code))
    }

    pub(super) fn controls_flow_statements(&mut self, block: &Block) -> Output {
        let code = self.choice(block, "FLOW", FLOWS)?;
        Ok(Fragment::statement(code))
    }
}
