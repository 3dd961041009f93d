use super::{Output, Python};
use crate::generator::{
    Fragment, Generator, PythonOrder, Template, format_number, is_identifier, parse_int,
    parse_number,
};
use blockgen_core::{Block, Error};

#[derive(Clone, Copy)]
enum Flow {
    Break,
    Continue,
}

const FLOWS: &[(&str, Flow)] = &[("BREAK", Flow::Break), ("CONTINUE", Flow::Continue)];

/// A `controls_for` bound after hoisting.
enum Bound {
    Number(f64),
    Code(String),
}

impl Bound {
    fn render(&self) -> String {
        match self {
            Self::Number(value) => format_number(*value),
            Self::Code(code) => code.clone(),
        }
    }
}

impl Generator<'_, Python> {
    pub(super) fn controls_repeat(&mut self, block: &Block) -> Output {
        let raw = self.field(block, "TIMES")?;
        let times = parse_int(raw).ok_or_else(|| Error::InvalidField {
            kind: block.kind.tag(),
            field: "TIMES".to_string(),
            value: raw.to_string(),
        })?;
        let branch = self.loop_body(block, "DO")?;
        let counter = self.distinct_variable("count");
        Ok(Fragment::statement(format!(
            "for {counter} in range({times}):\n{branch}"
        )))
    }

    pub(super) fn controls_repeat_ext(&mut self, block: &Block) -> Output {
        let times = self.value_or(block, "TIMES", PythonOrder::None, "0")?;
        let times = match parse_int(&times) {
            Some(n) => n.to_string(),
            None => format!("int({times})"),
        };
        let branch = self.loop_body(block, "DO")?;
        let counter = self.distinct_variable("count");
        Ok(Fragment::statement(format!(
            "for {counter} in range({times}):\n{branch}"
        )))
    }

    pub(super) fn controls_while_until(&mut self, block: &Block) -> Output {
        let until = self.choice_or(block, "MODE", &[("WHILE", false), ("UNTIL", true)], false)?;
        let condition = if until {
            let condition = self.value_or(block, "BOOL", PythonOrder::LogicalNot, "False")?;
            format!("not {condition}")
        } else {
            self.value_or(block, "BOOL", PythonOrder::None, "False")?
        };
        let branch = self.loop_body(block, "DO")?;
        Ok(Fragment::statement(format!("while {condition}:\n{branch}")))
    }

    pub(super) fn controls_for(&mut self, block: &Block) -> Output {
        let variable = self.variable_name(self.field(block, "VAR")?);
        let from = self.value_or(block, "FROM", PythonOrder::None, "0")?;
        let to = self.value_or(block, "TO", PythonOrder::None, "0")?;
        let by = self.value_or(block, "BY", PythonOrder::None, "1")?;
        let branch = self.loop_body(block, "DO")?;

        let mut code = String::new();
        let range = if let (Some(start), Some(end), Some(step)) =
            (parse_number(&from), parse_number(&to), parse_number(&by))
        {
            let step = step.abs();
            if let Some(range) = integer_range(start, end, step) {
                range
            } else if start <= end {
                let up = self.up_range();
                format!("{up}({}, {}, {})", format_number(start), format_number(end), format_number(step))
            } else {
                let down = self.down_range();
                format!("{down}({}, {}, {})", format_number(start), format_number(end), format_number(step))
            }
        } else {
            let start = self.hoist_bound(&mut code, &variable, "_start", &from);
            let end = self.hoist_bound(&mut code, &variable, "_end", &to);
            let step = self.hoist_bound(&mut code, &variable, "_inc", &by).render();
            match (&start, &end) {
                (Bound::Number(a), Bound::Number(b)) => {
                    let helper = if a <= b { self.up_range() } else { self.down_range() };
                    format!("{helper}({}, {}, {step})", format_number(*a), format_number(*b))
                }
                _ => {
                    let (start, end) = (start.render(), end.render());
                    let up = self.up_range();
                    let down = self.down_range();
                    format!(
                        "({start} <= {end}) and {up}({start}, {end}, {step}) or {down}({start}, {end}, {step})"
                    )
                }
            }
        };

        code.push_str(&format!("for {variable} in {range}:\n{branch}"));
        Ok(Fragment::statement(code))
    }

    /// Binds a non-trivial bound to a temporary so it is evaluated once.
    fn hoist_bound(&mut self, code: &mut String, variable: &str, suffix: &str, bound: &str) -> Bound {
        if let Some(value) = parse_number(bound) {
            Bound::Number(value)
        } else if is_identifier(bound) {
            Bound::Code(format!("float({bound})"))
        } else {
            let name = self.distinct_variable(&format!("{variable}{suffix}"));
            code.push_str(&format!("{name} = float({bound})\n"));
            Bound::Code(name)
        }
    }

    fn up_range(&mut self) -> String {
        self.provide_function(
            "upRange",
            &Template::function(
                "def ",
                "(start, stop, step):",
                &["  while start <= stop:", "    yield start", "    start += abs(step)"],
            ),
        )
    }

    fn down_range(&mut self) -> String {
        self.provide_function(
            "downRange",
            &Template::function(
                "def ",
                "(start, stop, step):",
                &["  while start >= stop:", "    yield start", "    start -= abs(step)"],
            ),
        )
    }

    pub(super) fn controls_for_each(&mut self, block: &Block) -> Output {
        let variable = self.variable_name(self.field(block, "VAR")?);
        let list = self.value_or(block, "LIST", PythonOrder::Relational, "[]")?;
        let branch = self.loop_body(block, "DO")?;
        Ok(Fragment::statement(format!(
            "for {variable} in {list}:\n{branch}"
        )))
    }

    pub(super) fn controls_flow_statements(&mut self, block: &Block) -> Output {
        let code = match self.choice(block, "FLOW", FLOWS)? {
            Flow::Break => "break\n",
            Flow::Continue => "continue\n",
        };
        Ok(Fragment::statement(code))
    }
}

/// Largest magnitude below which every integer is exact in an `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn exact_integer(value: f64) -> Option<i64> {
    (value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER).then_some(value as i64)
}

/// `range(...)` arguments for integral literal bounds, or `None` when a bound
/// is fractional or too large to fold.
fn integer_range(start: f64, end: f64, step: f64) -> Option<String> {
    let (start, end, step) = (exact_integer(start)?, exact_integer(end)?, exact_integer(step)?);
    if start <= end {
        let stop = end.checked_add(1)?;
        Some(match (start, step) {
            (0, 1) => format!("range({stop})"),
            (_, 1) => format!("range({start}, {stop})"),
            _ => format!("range({start}, {stop}, {step})"),
        })
    } else {
        Some(format!("range({start}, {}, -{step})", end.checked_sub(1)?))
    }
}
