use super::{Output, Python};
use crate::generator::{Fragment, Generator, PythonOrder, Template, format_number};
use blockgen_core::{Block, Error};

const ARITHMETIC: &[(&str, (&str, PythonOrder))] = &[
    ("ADD", (" + ", PythonOrder::Additive)),
    ("MINUS", (" - ", PythonOrder::Additive)),
    ("MULTIPLY", (" * ", PythonOrder::Multiplicative)),
    ("DIVIDE", (" / ", PythonOrder::Multiplicative)),
    ("POWER", (" ** ", PythonOrder::Exponentiation)),
];

/// Operators of the single-argument math blocks (`math_single`,
/// `math_round` and `math_trig`).
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

const CONSTANTS: &[(&str, (&str, PythonOrder))] = &[
    ("PI", ("math.pi", PythonOrder::Member)),
    ("E", ("math.e", PythonOrder::Member)),
    ("GOLDEN_RATIO", ("(1 + math.sqrt(5)) / 2", PythonOrder::Multiplicative)),
    ("SQRT2", ("math.sqrt(2)", PythonOrder::Member)),
    ("SQRT1_2", ("math.sqrt(1.0 / 2)", PythonOrder::Member)),
    ("INFINITY", ("float('inf')", PythonOrder::Atomic)),
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

impl Generator<'_, Python> {
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
            PythonOrder::UnarySign
        } else {
            PythonOrder::Atomic
        };
        Ok(Fragment::value(format_number(value), order))
    }

    pub(super) fn math_arithmetic(&mut self, block: &Block) -> Output {
        let (operator, order) = self.choice(block, "OP", ARITHMETIC)?;
        let a = self.value_or(block, "A", order, "0")?;
        let b = self.value_or(block, "B", order, "0")?;
        Ok(Fragment::value(format!("{a}{operator}{b}"), order))
    }

    pub(super) fn math_single(&mut self, block: &Block) -> Output {
        let operator = self.choice(block, "OP", SINGLE)?;
        let required = match operator {
            Single::Neg => PythonOrder::UnarySign,
            Single::Sin | Single::Cos | Single::Tan => PythonOrder::Multiplicative,
            _ => PythonOrder::None,
        };
        if operator != Single::Neg {
            self.import_math();
        }
        let x = self.value_or(block, "NUM", required, "0")?;

        let call = PythonOrder::FUNCTION_CALL;
        let (code, order) = match operator {
            Single::Neg => (format!("-{x}"), PythonOrder::UnarySign),
            Single::Abs => (format!("math.fabs({x})"), call),
            Single::Root => (format!("math.sqrt({x})"), call),
            Single::Ln => (format!("math.log({x})"), call),
            Single::Log10 => (format!("math.log10({x})"), call),
            Single::Exp => (format!("math.exp({x})"), call),
            Single::Pow10 => (format!("math.pow(10,{x})"), call),
            Single::Round => (format!("round({x})"), call),
            Single::RoundUp => (format!("math.ceil({x})"), call),
            Single::RoundDown => (format!("math.floor({x})"), call),
            Single::Sin => (format!("math.sin({x} / 180.0 * math.pi)"), call),
            Single::Cos => (format!("math.cos({x} / 180.0 * math.pi)"), call),
            Single::Tan => (format!("math.tan({x} / 180.0 * math.pi)"), call),
            Single::Asin => (format!("math.asin({x}) / math.pi * 180"), PythonOrder::Multiplicative),
            Single::Acos => (format!("math.acos({x}) / math.pi * 180"), PythonOrder::Multiplicative),
            Single::Atan => (format!("math.atan({x}) / math.pi * 180"), PythonOrder::Multiplicative),
        };
        Ok(Fragment::value(code, order))
    }

    pub(super) fn math_constant(&mut self, block: &Block) -> Output {
        let (code, order) = self.choice(block, "CONSTANT", CONSTANTS)?;
        if code.contains("math.") {
            self.import_math();
        }
        Ok(Fragment::value(code, order))
    }

    pub(super) fn math_number_property(&mut self, block: &Block) -> Output {
        let property = self.choice(block, "PROPERTY", PROPERTIES)?;
        let Some(number) = self.value(block, "NUMBER_TO_CHECK", PythonOrder::Multiplicative)? else {
            return Ok(Fragment::value("False", PythonOrder::Atomic));
        };

        let check = |suffix: &str| Fragment::value(format!("{number}{suffix}"), PythonOrder::Relational);
        Ok(match property {
            Property::Even => check(" % 2 == 0"),
            Property::Odd => check(" % 2 == 1"),
            Property::Whole => check(" % 1 == 0"),
            Property::Positive => check(" > 0"),
            Property::Negative => check(" < 0"),
            Property::Prime => {
                self.import_math();
                let name = self.provide_function("isPrime", &is_prime_template());
                Fragment::value(format!("{name}({number})"), PythonOrder::FUNCTION_CALL)
            }
            Property::DivisibleBy => {
                match self.value(block, "DIVISOR", PythonOrder::Multiplicative)? {
                    Some(divisor) if divisor != "0" => check(&format!(" % {divisor} == 0")),
                    _ => Fragment::value("False", PythonOrder::Atomic),
                }
            }
        })
    }

    pub(super) fn math_change(&mut self, block: &Block) -> Output {
        let variable = self.variable_name(self.field(block, "VAR")?);
        let delta = self.value_or(block, "DELTA", PythonOrder::Additive, "0")?;
        Ok(Fragment::statement(format!(
            "{variable} = ({variable} if isinstance({variable}, (int, float)) else 0) + {delta}\n"
        )))
    }

    pub(super) fn math_on_list(&mut self, block: &Block) -> Output {
        let aggregate = self.choice(block, "OP", AGGREGATES)?;
        let list = self.value_or(block, "LIST", PythonOrder::None, "[]")?;
        let code = match aggregate {
            Aggregate::Sum => format!("sum({list})"),
            Aggregate::Min => format!("min({list})"),
            Aggregate::Max => format!("max({list})"),
            Aggregate::Average => {
                let name = self.provide_function(
                    "math_mean",
                    &Template::function(
                        "def ",
                        "(myList):",
                        &[
                            "  localList = [e for e in myList if isinstance(e, (int, float))]",
                            "  if not localList: return",
                            "  return float(sum(localList)) / len(localList)",
                        ],
                    ),
                );
                format!("{name}({list})")
            }
            Aggregate::Median => {
                let name = self.provide_function(
                    "math_median",
                    &Template::function(
                        "def ",
                        "(myList):",
                        &[
                            "  localList = sorted([e for e in myList if isinstance(e, (int, float))])",
                            "  if not localList: return",
                            "  if len(localList) % 2 == 0:",
                            "    return (localList[len(localList) // 2 - 1] + localList[len(localList) // 2]) / 2.0",
                            "  else:",
                            "    return localList[(len(localList) - 1) // 2]",
                        ],
                    ),
                );
                format!("{name}({list})")
            }
            Aggregate::Mode => {
                let name = self.provide_function(
                    "math_modes",
                    &Template::function(
                        "def ",
                        "(some_list):",
                        &[
                            "  modes = []",
                            "  # Count with [item, count] pairs so unhashable items work.",
                            "  counts = []",
                            "  maxCount = 1",
                            "  for item in some_list:",
                            "    found = False",
                            "    for count in counts:",
                            "      if count[0] == item:",
                            "        count[1] += 1",
                            "        maxCount = max(maxCount, count[1])",
                            "        found = True",
                            "    if not found:",
                            "      counts.append([item, 1])",
                            "  for counted_item, item_count in counts:",
                            "    if item_count == maxCount:",
                            "      modes.append(counted_item)",
                            "  return modes",
                        ],
                    ),
                );
                format!("{name}({list})")
            }
            Aggregate::StdDev => {
                self.import_math();
                let name = self.provide_function(
                    "math_standard_deviation",
                    &Template::function(
                        "def ",
                        "(numbers):",
                        &[
                            "  localList = [e for e in numbers if isinstance(e, (int, float))]",
                            "  n = len(localList)",
                            "  if n == 0: return",
                            "  mean = float(sum(localList)) / n",
                            "  variance = sum((x - mean) ** 2 for x in localList) / n",
                            "  return math.sqrt(variance)",
                        ],
                    ),
                );
                format!("{name}({list})")
            }
            Aggregate::Random => {
                self.import_random();
                format!("random.choice({list})")
            }
        };
        Ok(Fragment::value(code, PythonOrder::FUNCTION_CALL))
    }

    pub(super) fn math_modulo(&mut self, block: &Block) -> Output {
        let order = PythonOrder::Multiplicative;
        let dividend = self.value_or(block, "DIVIDEND", order, "0")?;
        let divisor = self.value_or(block, "DIVISOR", order, "0")?;
        Ok(Fragment::value(format!("{dividend} % {divisor}"), order))
    }

    pub(super) fn math_constrain(&mut self, block: &Block) -> Output {
        let value = self.value_or(block, "VALUE", PythonOrder::None, "0")?;
        let low = self.value_or(block, "LOW", PythonOrder::None, "0")?;
        let high = self.value_or(block, "HIGH", PythonOrder::None, "float('inf')")?;
        Ok(Fragment::value(
            format!("min(max({value}, {low}), {high})"),
            PythonOrder::FUNCTION_CALL,
        ))
    }

    pub(super) fn math_random_int(&mut self, block: &Block) -> Output {
        self.import_random();
        let from = self.value_or(block, "FROM", PythonOrder::None, "0")?;
        let to = self.value_or(block, "TO", PythonOrder::None, "0")?;
        Ok(Fragment::value(
            format!("random.randint({from}, {to})"),
            PythonOrder::FUNCTION_CALL,
        ))
    }

    pub(super) fn math_random_float(&mut self) -> Output {
        self.import_random();
        Ok(Fragment::value("random.random()", PythonOrder::FUNCTION_CALL))
    }
}

/// Primality by trial division over 6k +/- 1 up to the square root.
fn is_prime_template() -> Template {
    Template::function(
        "def ",
        "(n):",
        &[
            "  if not isinstance(n, (int, float)):",
            "    try:",
            "      n = float(n)",
            "    except (TypeError, ValueError):",
            "      return False",
            "  if n == 2 or n == 3:",
            "    return True",
            "  # False if n is negative, is 1, or not whole, or if n is divisible by 2 or 3.",
            "  if n <= 1 or n % 1 != 0 or n % 2 == 0 or n % 3 == 0:",
            "    return False",
            "  # Check all the numbers of form 6k +/- 1, up to sqrt(n).",
            "  for x in range(6, int(math.sqrt(n)) + 2, 6):",
            "    if n % (x - 1) == 0 or n % (x + 1) == 0:",
            "      return False",
            "  return True",
        ],
    )
}
