use super::{JavaScript, Output};
use crate::generator::{Fragment, Generator, JsOrder, Template, format_number};
use blockgen_core::{Block, Error, Result};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Arithmetic {
    Add,
    Minus,
    Multiply,
    Divide,
    Power,
}

const ARITHMETIC: &[(&str, Arithmetic)] = &[
    ("ADD", Arithmetic::Add),
    ("MINUS", Arithmetic::Minus),
    ("MULTIPLY", Arithmetic::Multiply),
    ("DIVIDE", Arithmetic::Divide),
    ("POWER", Arithmetic::Power),
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Single {
    Abs,
    Root,
    Ln,
    Log10,
    Exp,
    Pow10,
    Neg,
    Round,
    RoundUp,
    RoundDown,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

const SINGLE: &[(&str, Single)] = &[
    ("ABS", Single::Abs),
    ("ROOT", Single::Root),
    ("LN", Single::Ln),
    ("LOG10", Single::Log10),
    ("EXP", Single::Exp),
    ("POW10", Single::Pow10),
    ("NEG", Single::Neg),
    ("ROUND", Single::Round),
    ("ROUNDUP", Single::RoundUp),
    ("ROUNDDOWN", Single::RoundDown),
    ("SIN", Single::Sin),
    ("COS", Single::Cos),
    ("TAN", Single::Tan),
    ("ASIN", Single::Asin),
    ("ACOS", Single::Acos),
    ("ATAN", Single::Atan),
];

const CONSTANTS: &[(&str, (&str, JsOrder))] = &[
    ("PI", ("Math.PI", JsOrder::Member)),
    ("E", ("Math.E", JsOrder::Member)),
    ("GOLDEN_RATIO", ("(1 + Math.sqrt(5)) / 2", JsOrder::Multiplicative)),
    ("SQRT2", ("Math.SQRT2", JsOrder::Member)),
    ("SQRT1_2", ("Math.SQRT1_2", JsOrder::Member)),
    ("INFINITY", ("Infinity", JsOrder::Atomic)),
];

#[derive(Clone, Copy)]
enum Property {
    Even,
    Odd,
    Prime,
    Whole,
    Positive,
    Negative,
    DivisibleBy,
}

const PROPERTIES: &[(&str, Property)] = &[
    ("EVEN", Property::Even),
    ("ODD", Property::Odd),
    ("PRIME", Property::Prime),
    ("WHOLE", Property::Whole),
    ("POSITIVE", Property::Positive),
    ("NEGATIVE", Property::Negative),
    ("DIVISIBLE_BY", Property::DivisibleBy),
];

#[derive(Clone, Copy)]
enum Aggregate {
    Sum,
    Min,
    Max,
    Average,
    Median,
    Mode,
    StdDev,
    Random,
}

const AGGREGATES: &[(&str, Aggregate)] = &[
    ("SUM", Aggregate::Sum),
    ("MIN", Aggregate::Min),
    ("MAX", Aggregate::Max),
    ("AVERAGE", Aggregate::Average),
    ("MEDIAN", Aggregate::Median),
    ("MODE", Aggregate::Mode),
    ("STD_DEV", Aggregate::StdDev),
    ("RANDOM", Aggregate::Random),
];

impl Generator<'_, JavaScript> {
    pub(super) fn math_number(&mut self, block: &Block) -> Output {
        let raw = self.field(block, "NUM")?;
        let value = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| Error::InvalidField {
                kind: block.kind.tag(),
                field: "NUM".to_string(),
                value: raw.to_string(),
            })?;
        let order = if value < 0.0 {
            JsOrder::UNARY_NEGATION
        } else {
            JsOrder::Atomic
        };
        Ok(Fragment::value(format_number(value), order))
    }

    pub(super) fn math_arithmetic(&mut self, block: &Block) -> Output {
        let operator = self.choice(block, "OP", ARITHMETIC)?;
        if operator == Arithmetic::Power {
            let a = self.value_or(block, "A", JsOrder::Comma, "0")?;
            let b = self.value_or(block, "B", JsOrder::Comma, "0")?;
            return Ok(Fragment::value(format!("Math.pow({a}, {b})"), JsOrder::FunctionCall));
        }
        let (symbol, order) = match operator {
            Arithmetic::Add => (" + ", JsOrder::Additive),
            Arithmetic::Minus => (" - ", JsOrder::Additive),
            Arithmetic::Multiply => (" * ", JsOrder::Multiplicative),
            Arithmetic::Divide | Arithmetic::Power => (" / ", JsOrder::Multiplicative),
        };
        let a = self.value_or(block, "A", order, "0")?;
        let b = self.value_or(block, "B", order, "0")?;
        Ok(Fragment::value(format!("{a}{symbol}{b}"), order))
    }

    pub(super) fn math_single(&mut self, block: &Block) -> Output {
        let operator = self.choice(block, "OP", SINGLE)?;
        let required = match operator {
            Single::Neg => JsOrder::UNARY_NEGATION,
            Single::Sin | Single::Cos | Single::Tan => JsOrder::Multiplicative,
            _ => JsOrder::None,
        };
        let x = self.value_or(block, "NUM", required, "0")?;

        let call = JsOrder::FunctionCall;
        let divide = JsOrder::Multiplicative;
        let (code, order) = match operator {
            // `--x` would be a decrement.
            Single::Neg if x.starts_with('-') => (format!("- {x}"), JsOrder::UNARY_NEGATION),
            Single::Neg => (format!("-{x}"), JsOrder::UNARY_NEGATION),
            Single::Abs => (format!("Math.abs({x})"), call),
            Single::Root => (format!("Math.sqrt({x})"), call),
            Single::Ln => (format!("Math.log({x})"), call),
            Single::Exp => (format!("Math.exp({x})"), call),
            Single::Pow10 => (format!("Math.pow(10,{x})"), call),
            Single::Round => (format!("Math.round({x})"), call),
            Single::RoundUp => (format!("Math.ceil({x})"), call),
            Single::RoundDown => (format!("Math.floor({x})"), call),
            Single::Sin => (format!("Math.sin({x} / 180 * Math.PI)"), call),
            Single::Cos => (format!("Math.cos({x} / 180 * Math.PI)"), call),
            Single::Tan => (format!("Math.tan({x} / 180 * Math.PI)"), call),
            Single::Log10 => (format!("Math.log({x}) / Math.log(10)"), divide),
            Single::Asin => (format!("Math.asin({x}) / Math.PI * 180"), divide),
            Single::Acos => (format!("Math.acos({x}) / Math.PI * 180"), divide),
            Single::Atan => (format!("Math.atan({x}) / Math.PI * 180"), divide),
        };
        Ok(Fragment::value(code, order))
    }

    pub(super) fn math_constant(&mut self, block: &Block) -> Output {
        let (code, order) = self.choice(block, "CONSTANT", CONSTANTS)?;
        Ok(Fragment::value(code, order))
    }

    pub(super) fn math_number_property(&mut self, block: &Block) -> Output {
        let property = self.choice(block, "PROPERTY", PROPERTIES)?;
        let Some(number) = self.value(block, "NUMBER_TO_CHECK", JsOrder::Multiplicative)? else {
            return Ok(Fragment::value("false", JsOrder::Atomic));
        };

        let check = |suffix: &str| Fragment::value(format!("{number}{suffix}"), JsOrder::Equality);
        Ok(match property {
            Property::Even => check(" % 2 == 0"),
            Property::Odd => check(" % 2 == 1"),
            Property::Whole => check(" % 1 == 0"),
            Property::Positive => Fragment::value(format!("{number} > 0"), JsOrder::Relational),
            Property::Negative => Fragment::value(format!("{number} < 0"), JsOrder::Relational),
            Property::Prime => {
                let name = self.provide_function("isPrime", &is_prime_template());
                Fragment::value(format!("{name}({number})"), JsOrder::FunctionCall)
            }
            Property::DivisibleBy => match self.value(block, "DIVISOR", JsOrder::Multiplicative)? {
                Some(divisor) if divisor != "0" => check(&format!(" % {divisor} == 0")),
                _ => Fragment::value("false", JsOrder::Atomic),
            },
        })
    }

    pub(super) fn math_change(&mut self, block: &Block) -> Output {
        let variable = self.variable_name(self.field(block, "VAR")?);
        let delta = self.value_or(block, "DELTA", JsOrder::Additive, "0")?;
        Ok(Fragment::statement(format!(
            "{variable} = (typeof {variable} == 'number' ? {variable} : 0) + {delta};\n"
        )))
    }

    pub(super) fn math_on_list(&mut self, block: &Block) -> Output {
        let aggregate = self.choice(block, "OP", AGGREGATES)?;
        let code = match aggregate {
            Aggregate::Sum => {
                let list = self.value_or(block, "LIST", JsOrder::Member, "[]")?;
                format!("{list}.reduce(function(x, y) {{return x + y;}})")
            }
            Aggregate::Min => {
                let list = self.value_or(block, "LIST", JsOrder::Comma, "[]")?;
                format!("Math.min.apply(null, {list})")
            }
            Aggregate::Max => {
                let list = self.value_or(block, "LIST", JsOrder::Comma, "[]")?;
                format!("Math.max.apply(null, {list})")
            }
            Aggregate::Average => self.list_helper(block, "math_mean", "(myList) {", &[
                "  var localList = myList.filter(function (x) {return typeof x == 'number';});",
                "  if (!localList.length) return null;",
                "  return localList.reduce(function(x, y) {return x + y;}) / localList.length;",
                "}",
            ])?,
            Aggregate::Median => self.list_helper(block, "math_median", "(myList) {", &[
                "  var localList = myList.filter(function (x) {return typeof x == 'number';});",
                "  if (!localList.length) return null;",
                "  localList.sort(function(a, b) {return b - a;});",
                "  if (localList.length % 2 == 0) {",
                "    return (localList[localList.length / 2 - 1] + localList[localList.length / 2]) / 2;",
                "  } else {",
                "    return localList[(localList.length - 1) / 2];",
                "  }",
                "}",
            ])?,
            Aggregate::Mode => self.list_helper(block, "math_modes", "(values) {", &[
                "  var modes = [];",
                "  var counts = [];",
                "  var maxCount = 0;",
                "  for (var i = 0; i < values.length; i++) {",
                "    var value = values[i];",
                "    var found = false;",
                "    var thisCount;",
                "    for (var j = 0; j < counts.length; j++) {",
                "      if (counts[j][0] === value) {",
                "        thisCount = ++counts[j][1];",
                "        found = true;",
                "        break;",
                "      }",
                "    }",
                "    if (!found) {",
                "      counts.push([value, 1]);",
                "      thisCount = 1;",
                "    }",
                "    maxCount = Math.max(thisCount, maxCount);",
                "  }",
                "  for (var j = 0; j < counts.length; j++) {",
                "    if (counts[j][1] == maxCount) {",
                "      modes.push(counts[j][0]);",
                "    }",
                "  }",
                "  return modes;",
                "}",
            ])?,
            Aggregate::StdDev => self.list_helper(block, "math_standard_deviation", "(numbers) {", &[
                "  var localList = numbers.filter(function (x) {return typeof x == 'number';});",
                "  var n = localList.length;",
                "  if (!n) return null;",
                "  var mean = localList.reduce(function(x, y) {return x + y;}) / n;",
                "  var variance = 0;",
                "  for (var j = 0; j < n; j++) {",
                "    variance += Math.pow(localList[j] - mean, 2);",
                "  }",
                "  variance = variance / n;",
                "  return Math.sqrt(variance);",
                "}",
            ])?,
            Aggregate::Random => self.list_helper(block, "math_random_list", "(list) {", &[
                "  var x = Math.floor(Math.random() * list.length);",
                "  return list[x];",
                "}",
            ])?,
        };
        Ok(Fragment::value(code, JsOrder::FunctionCall))
    }

    /// Registers a one-argument list helper and calls it on `LIST`.
    fn list_helper(&mut self, block: &Block, key: &str, tail: &str, body: &[&str]) -> Result<String> {
        let name = self.provide_function(key, &Template::function("function ", tail, body));
        let list = self.value_or(block, "LIST", JsOrder::None, "[]")?;
        Ok(format!("{name}({list})"))
    }

    pub(super) fn math_modulo(&mut self, block: &Block) -> Output {
        let order = JsOrder::Multiplicative;
        let dividend = self.value_or(block, "DIVIDEND", order, "0")?;
        let divisor = self.value_or(block, "DIVISOR", order, "0")?;
        Ok(Fragment::value(format!("{dividend} % {divisor}"), order))
    }

    pub(super) fn math_constrain(&mut self, block: &Block) -> Output {
        let value = self.value_or(block, "VALUE", JsOrder::Comma, "0")?;
        let low = self.value_or(block, "LOW", JsOrder::Comma, "0")?;
        let high = self.value_or(block, "HIGH", JsOrder::Comma, "Infinity")?;
        Ok(Fragment::value(
            format!("Math.min(Math.max({value}, {low}), {high})"),
            JsOrder::FunctionCall,
        ))
    }

    pub(super) fn math_random_int(&mut self, block: &Block) -> Output {
        let name = self.provide_function(
            "math_random_int",
            &Template::function(
                "function ",
                "(a, b) {",
                &[
                    "  if (a > b) {",
                    "    // Swap a and b to ensure a is smaller.",
                    "    var c = a;",
                    "    a = b;",
                    "    b = c;",
                    "  }",
                    "  return Math.floor(Math.random() * (b - a + 1) + a);",
                    "}",
                ],
            ),
        );
        let from = self.value_or(block, "FROM", JsOrder::Comma, "0")?;
        let to = self.value_or(block, "TO", JsOrder::Comma, "0")?;
        Ok(Fragment::value(format!("{name}({from}, {to})"), JsOrder::FunctionCall))
    }
}

fn is_prime_template() -> Template {
    Template::function(
        "function ",
        "(n) {",
        &[
            "  if (n == 2 || n == 3) {",
            "    return true;",
            "  }",
            "  // False if n is NaN, negative, is 1, or not whole.",
            "  // And false if n is divisible by 2 or 3.",
            "  if (isNaN(n) || n <= 1 || n % 1 != 0 || n % 2 == 0 || n % 3 == 0) {",
            "    return false;",
            "  }",
            "  // Check all the numbers of form 6k +/- 1, up to sqrt(n).",
            "  for (var x = 6; x <= Math.sqrt(n) + 1; x += 6) {",
            "    if (n % (x - 1) == 0 || n % (x + 1) == 0) {",
            "      return false;",
            "    }",
            "  }",
            "  return true;",
            "}",
        ],
    )
}
