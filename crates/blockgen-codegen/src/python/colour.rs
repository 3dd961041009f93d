use super::{Output, Python};
use crate::generator::{Fragment, Generator, Language, PythonOrder, Template};
use blockgen_core::Block;

impl Generator<'_, Python> {
    pub(super) fn colour_picker(&mut self, block: &Block) -> Output {
        let colour = self.field(block, "COLOUR")?;
        Ok(Fragment::value(Python::quote(colour), PythonOrder::Atomic))
    }

    pub(super) fn colour_random(&mut self) -> Output {
        self.import_random();
        Ok(Fragment::value(
            "'#%06x' % random.randint(0, 2**24 - 1)",
            PythonOrder::Multiplicative,
        ))
    }

    pub(super) fn colour_rgb(&mut self, block: &Block) -> Output {
        let name = self.provide_function(
            "colour_rgb",
            &Template::function(
                "def ",
                "(r, g, b):",
                &[
                    "  r = round(min(100, max(0, r)) * 2.55)",
                    "  g = round(min(100, max(0, g)) * 2.55)",
                    "  b = round(min(100, max(0, b)) * 2.55)",
                    "  return '#%02x%02x%02x' % (r, g, b)",
                ],
            ),
        );
        let r = self.value_or(block, "RED", PythonOrder::None, "0")?;
        let g = self.value_or(block, "GREEN", PythonOrder::None, "0")?;
        let b = self.value_or(block, "BLUE", PythonOrder::None, "0")?;
        Ok(Fragment::value(
            format!("{name}({r}, {g}, {b})"),
            PythonOrder::FUNCTION_CALL,
        ))
    }

    pub(super) fn colour_blend(&mut self, block: &Block) -> Output {
        let name = self.provide_function(
            "colour_blend",
            &Template::function(
                "def ",
                "(colour1, colour2, ratio):",
                &[
                    "  r1, r2 = int(colour1[1:3], 16), int(colour2[1:3], 16)",
                    "  g1, g2 = int(colour1[3:5], 16), int(colour2[3:5], 16)",
                    "  b1, b2 = int(colour1[5:7], 16), int(colour2[5:7], 16)",
                    "  ratio = min(1, max(0, ratio))",
                    "  r = round(r1 * (1 - ratio) + r2 * ratio)",
                    "  g = round(g1 * (1 - ratio) + g2 * ratio)",
                    "  b = round(b1 * (1 - ratio) + b2 * ratio)",
                    "  return '#%02x%02x%02x' % (r, g, b)",
                ],
            ),
        );
        let colour1 = self.value_or(block, "COLOUR1", PythonOrder::None, "'#000000'")?;
        let colour2 = self.value_or(block, "COLOUR2", PythonOrder::None, "'#000000'")?;
        let ratio = self.value_or(block, "RATIO", PythonOrder::None, "0.5")?;
        Ok(Fragment::value(
            format!("{name}({colour1}, {colour2}, {ratio})"),
            PythonOrder::FUNCTION_CALL,
        ))
    }
}
