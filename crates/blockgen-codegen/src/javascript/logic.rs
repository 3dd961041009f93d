use super::{JavaScript, Output};
use crate::generator::{Fragment, Generator, JsOrder};
use blockgen_core::{Block, Error};

const COMPARISONS: &[(&str, (&str, JsOrder))] = &[
    ("EQ", ("==", JsOrder::Equality)),
    ("NEQ", ("!=", JsOrder::Equality)),
    ("LT", ("<", JsOrder::Relational)),
    ("LTE", ("<=", JsOrder::Relational)),
    ("GT", (">", JsOrder::Relational)),
    ("GTE", (">=", JsOrder::Relational)),
];

const OPERATIONS: &[(&str, (&str, JsOrder))] = &[
    ("AND", ("&&", JsOrder::LogicalAnd)),
    ("OR", ("||", JsOrder::LogicalOr)),
];

impl Generator<'_, JavaScript> {
    pub(super) fn controls_if(&mut self, block: &Block) -> Output {
        let mut code = String::new();
        for n in 0..=block.else_if_count() {
            let condition = self.value_or(block, &format!("IF{n}"), JsOrder::None, "false")?;
            let branch = self.statement(block, &format!("DO{n}"))?;
            if n > 0 {
                code.push_str(" else ");
            }
            code.push_str(&format!("if ({condition}) {{\n{branch}}}"));
        }
        if block.has_else() {
            let branch = self.statement(block, "ELSE")?;
            code.push_str(&format!(" else {{\n{branch}}}"));
        }
        code.push('\n');
        Ok(Fragment::statement(code))
    }

    pub(super) fn logic_compare(&mut self, block: &Block) -> Output {
        let (operator, order) = self.choice(block, "OP", COMPARISONS)?;
        let a = self.value_or(block, "A", order, "0")?;
        let b = self.value_or(block, "B", order, "0")?;
        Ok(Fragment::value(format!("{a} {operator} {b}"), order))
    }

    pub(super) fn logic_operation(&mut self, block: &Block) -> Output {
        let (operator, order) = self.choice(block, "OP", OPERATIONS)?;
        let a = self.value_or(block, "A", order, "false")?;
        let b = self.value_or(block, "B", order, "false")?;
        Ok(Fragment::value(format!("{a} {operator} {b}"), order))
    }

    pub(super) fn logic_negate(&mut self, block: &Block) -> Output {
        let order = JsOrder::LOGICAL_NOT;
        let argument = self.value_or(block, "BOOL", order, "false")?;
        Ok(Fragment::value(format!("!{argument}"), order))
    }

    pub(super) fn logic_boolean(&mut self, block: &Block) -> Output {
        let code = match self.field(block, "BOOL")? {
            "TRUE" => "true",
            "FALSE" => "false",
            other => {
                return Err(Error::InvalidField {
                    kind: block.kind.tag(),
                    field: "BOOL".to_string(),
                    value: other.to_string(),
                });
            }
        };
        Ok(Fragment::value(code, JsOrder::Atomic))
    }

    pub(super) fn logic_ternary(&mut self, block: &Block) -> Output {
        let order = JsOrder::Conditional;
        let condition = self.value_or(block, "IF", order, "false")?;
        let then = self.value_or(block, "THEN", order, "null")?;
        let otherwise = self.value_or(block, "ELSE", order, "null")?;
        Ok(Fragment::value(
            format!("{condition} ? {then} : {otherwise}"),
            order,
        ))
    }
}
