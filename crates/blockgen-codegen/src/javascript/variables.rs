use super::{JavaScript, Output};
use crate::generator::{Fragment, Generator, JsOrder};
use blockgen_core::Block;

impl Generator<'_, JavaScript> {
    pub(super) fn variables_get(&mut self, block: &Block) -> Output {
        let name = self.variable_name(self.field(block, "VAR")?);
        Ok(Fragment::value(name, JsOrder::Atomic))
    }

    pub(super) fn variables_set(&mut self, block: &Block) -> Output {
        let value = self.value_or(block, "VALUE", JsOrder::Assignment, "0")?;
        let name = self.variable_name(self.field(block, "VAR")?);
        Ok(Fragment::statement(format!("{name} = {value};\n")))
    }

    pub(super) fn variables_input_value(&mut self, block: &Block) -> Output {
        let name = self.variable_name(self.field(block, "VAR")?);
        Ok(Fragment::statement(format!(
            "{name} = window.parseInt(window.prompt('Enter a value for {name}: '));\n"
        )))
    }

    pub(super) fn variables_output_value(&mut self, block: &Block) -> Output {
        let name = self.variable_name(self.field(block, "VAR")?);
        Ok(Fragment::statement(format!(
            "window.alert('Value of {name}: ' + {name});\n"
        )))
    }
}
