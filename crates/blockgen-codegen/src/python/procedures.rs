use super::{Output, Python};
use crate::generator::{Fragment, Generator, PythonOrder};
use blockgen_core::{Block, Result};

impl Generator<'_, Python> {
    /// Both procedure definition kinds. The text is registered as a
    /// definition; nothing is emitted in place.
    pub(super) fn procedures_def(&mut self, block: &Block) -> Output {
        let arguments = block.arguments();
        let globals: Vec<String> = self
            .graph()
            .all_variables(Some(block.id))?
            .into_iter()
            .filter(|name| !arguments.contains(name))
            .map(|name| self.variable_name(&name))
            .collect();
        let globals = if globals.is_empty() {
            String::new()
        } else {
            format!("{}global {}\n", self.indent(), globals.join(", "))
        };

        let name = self.procedure_name(self.field(block, "NAME")?);
        let mut branch = self.statement(block, "STACK")?;
        branch.insert_str(0, &self.loop_trap(block));
        let returns = match self.value(block, "RETURN", PythonOrder::None)? {
            Some(value) => format!("{}return {value}\n", self.indent()),
            None => {
                if branch.is_empty() {
                    branch = format!("{}pass\n", self.indent());
                }
                String::new()
            }
        };
        let parameters: Vec<String> = arguments
            .iter()
            .map(|argument| self.variable_name(argument))
            .collect();

        let code = format!(
            "def {name}({}):\n{globals}{branch}{returns}",
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
            arguments.push(self.value_or(block, &format!("ARG{n}"), PythonOrder::None, "None")?);
        }
        Ok(format!("{name}({})", arguments.join(", ")))
    }

    pub(super) fn procedures_call_return(&mut self, block: &Block) -> Output {
        let call = self.procedure_call(block)?;
        Ok(Fragment::value(call, PythonOrder::FUNCTION_CALL))
    }

    pub(super) fn procedures_call_no_return(&mut self, block: &Block) -> Output {
        let call = self.procedure_call(block)?;
        Ok(Fragment::statement(format!("{call}\n")))
    }

    pub(super) fn procedures_if_return(&mut self, block: &Block) -> Output {
        let condition = self.value_or(block, "CONDITION", PythonOrder::None, "False")?;
        let indent = self.indent().to_string();
        let body = if block.has_return_value() {
            let value = self.value_or(block, "VALUE", PythonOrder::None, "None")?;
            format!("{indent}return {value}\n")
        } else {
            format!("{indent}return\n")
        };
        Ok(Fragment::statement(format!("if {condition}:\n{body}")))
    }
}
