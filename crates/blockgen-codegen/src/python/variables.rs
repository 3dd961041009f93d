use super::{Output, Python};
use crate::generator::{Fragment, Generator, PythonOrder};
use blockgen_core::Block;

impl Generator<'_, Python> {
    pub(super) fn variables_get(&mut self, block: &Block) -> Output {
        let name = self.variable_name(self.field(block, "VAR")?);
        Ok(Fragment::value(name, PythonOrder::Atomic))
    }

    pub(super) fn variables_set(&mut self, block: &Block) -> Output {
        let value = self.value_or(block, "VALUE", PythonOrder::None, "0")?;
        let name = self.variable_name(self.field(block, "VAR")?);
        Ok(Fragment::statement(format!("{name} = {value}\n")))
    }

    pub(super) fn variables_input_value(&mut self, block: &Block) -> Output {
        let name = self.variable_name(self.field(block, "VAR")?);
        Ok(Fragment::statement(format!(
            "{name} = int(input('Enter a value for {name}: '))\n"
        )))
    }

    pub(super) fn variables_output_value(&mut self, block: &Block) -> Output {
        let name = self.variable_name(self.field(block, "VAR")?);
        Ok(Fragment::statement(format!(
            "print('Value of {name}: ' + str({name}))\n"
        )))
    }
}
