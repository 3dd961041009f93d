use super::{JavaScript, Output};
use crate::generator::{Fragment, Generator, JsOrder};
use blockgen_core::{Block, Result};

impl Generator<'_, JavaScript> {
    pub(super) fn procedures_def(&mut self, block: &Block) -> Output {
        let name = self.procedure_name(self.field(block, "NAME")?);
        let mut branch = self.statement(block, "STACK")?;
        branch.insert_str(0, &self.loop_trap(block));
        let returns = match self.value(block, "RETURN", JsOrder::None)? {
            Some(value) => format!("{}return {value};\n", self.indent()),
            None => String::new(),
        };
        let parameters: Vec<String> = block
            .arguments()
            .iter()
            .map(|argument| self.variable_name(argument))
            .collect();

        let code = format!(
            "function {name}({}) {{\n{branch}{returns}}}",
            parameters.join(", ")
        );
        let code = self.scrub(block, &code)?;
        self.define_procedure(&name, code);
        Ok(Fragment::Managed)
    }

    fn procedure_call(&mut self, block: &Block) -> Result<String> {
        let name = self.procedure_name(self.field(block, "NAME")?);
        let mut arguments = Vec::new();
        for n in 0..block.arguments().len() {
            arguments.push(self.value_or(block, &format!("ARG{n}"), JsOrder::Comma, "null")?);
        }
        Ok(format!("{name}({})", arguments.join(", ")))
    }

    pub(super) fn procedures_call_return(&mut self, block: &Block) -> Output {
        let call = self.procedure_call(block)?;
        Ok(Fragment::value(call, JsOrder::FunctionCall))
    }

    pub(super) fn procedures_call_no_return(&mut self, block: &Block) -> Output {
        let call = self.procedure_call(block)?;
        Ok(Fragment::statement(format!("{call};\n")))
    }

    pub(super) fn procedures_if_return(&mut self, block: &Block) -> Output {
        let condition = self.value_or(block, "CONDITION", JsOrder::None, "false")?;
        let indent = self.indent().to_string();
        let body = if block.has_return_value() {
            let value = self.value_or(block, "VALUE", JsOrder::None, "null")?;
            format!("{indent}return {value};\n")
        } else {
            format!("{indent}return;\n")
        };
        Ok(Fragment::statement(format!("if ({condition}) {{\n{body}}}\n")))
    }
}
