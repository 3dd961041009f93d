use super::{Output, Python};
use crate::generator::{Fragment, Generator, PythonOrder};
use blockgen_core::{Block, Error};

const COMPARISONS: &[(&str, &str)] = &[
    ("EQ", "=="),
    ("NEQ", "!="),
    ("LT", "<"),
    ("LTE", "<="),
    ("GT", ">"),
    ("GTE", ">="),
];

const OPERATIONS: &[(&str, (&str, PythonOrder))] = &[
    ("AND", ("and", PythonOrder::LogicalAnd)),
    ("OR", ("or", PythonOrder::LogicalOr)),
];

impl Generator<'_, Python> {
    pub(super) fn controls_if(&mut self, block: &Block) -> Output {
        let mut code = String::new();
        for n in 0..=block.else_if_count() {
            let condition = self.value_or(block, &format!("IF{n}"), PythonOrder::None, "False")?;
            let branch = self.branch(block, &format!("DO{n}"))?;
            let keyword = if n == 0 { "if" } else { "elif" };
            code.push_str(&format!("{keyword} {condition}:\n{branch}"));
        }
        if block.has_else() {
            let branch = self.branch(block, "ELSE")?;
            code.push_str(&format!("else:\n{branch}"));
        }
        Ok(Fragment::statement(code))
    }

    pub(super) fn logic_compare(&mut self, block: &Block) -> Output {
        let operator = self.choice(block, "OP", COMPARISONS)?;
        let order = PythonOrder::Relational;
        let a = self.value_or(block, "A", order, "0")?;
        let b = self.value_or(block, "B", order, "0")?;
        Ok(Fragment::value(format!("{a} {operator} {b}"), order))
    }

    pub(super) fn logic_operation(&mut self, block: &Block) -> Output {
        let (operator, order) = self.choice(block, "OP", OPERATIONS)?;
        let a = self.value_or(block, "A", order, "False")?;
        let b = self.value_or(block, "B", order, "False")?;
        Ok(Fragment::value(format!("{a} {operator} {b}"), order))
    }

    pub(super) fn logic_negate(&mut self, block: &Block) -> Output {
        let order = PythonOrder::LogicalNot;
        let argument = self.value_or(block, "BOOL", order, "True")?;
        Ok(Fragment::value(format!("not {argument}"), order))
    }

    pub(super) fn logic_boolean(&mut self, block: &Block) -> Output {
        let code = match self.field(block, "BOOL")? {
            "TRUE" => "True",
            "FALSE" => "False",
            other => {
                return Err(Error::InvalidField {
                    kind: block.kind.tag(),
                    field: "BOOL".to_string(),
                    value: other.to_string(),
                });
            }
        };
        Ok(Fragment::value(code, PythonOrder::Atomic))
    }

    pub(super) fn logic_ternary(&mut self, block: &Block) -> Output {
        let order = PythonOrder::Conditional;
        let condition = self.value_or(block, "IF", order, "False")?;
        let then = self.value_or(block, "THEN", order, "None")?;
        let otherwise = self.value_or(block, "ELSE", order, "None")?;
        Ok(Fragment::value(
            format!("{then} if {condition} else {otherwise}"),
            order,
        ))
    }
}
