use super::{JavaScript, Output};
use crate::generator::{Fragment, Generator, JsOrder, Language, Template};
use blockgen_core::Block;

impl Generator<'_, JavaScript> {
    pub(super) fn colour_picker(&mut self, block: &Block) -> Output {
        let colour = self.field(block, "COLOUR")?;
        Ok(Fragment::value(JavaScript::quote(colour), JsOrder::Atomic))
    }

    pub(super) fn colour_random(&mut self) -> Output {
        let name = self.provide_function(
            "colour_random",
            &Template::function(
                "function ",
                "() {",
                &[
                    "  var num = Math.floor(Math.random() * Math.pow(2, 24));",
                    "  return '#' + ('00000' + num.toString(16)).substr(-6);",
                    "}",
                ],
            ),
        );
        Ok(Fragment::value(format!("{name}()"), JsOrder::FunctionCall))
    }

    pub(super) fn colour_rgb(&mut self, block: &Block) -> Output {
        let name = self.provide_function(
            "colour_rgb",
            &Template::function(
                "function ",
                "(r, g, b) {",
                &[
                    "  r = Math.max(Math.min(Number(r), 100), 0) * 2.55;",
                    "  g = Math.max(Math.min(Number(g), 100), 0) * 2.55;",
                    "  b = Math.max(Math.min(Number(b), 100), 0) * 2.55;",
                    "  r = ('0' + (Math.round(r) || 0).toString(16)).slice(-2);",
                    "  g = ('0' + (Math.round(g) || 0).toString(16)).slice(-2);",
                    "  b = ('0' + (Math.round(b) || 0).toString(16)).slice(-2);",
                    "  return '#' + r + g + b;",
                    "}",
                ],
            ),
        );
        let r = self.value_or(block, "RED", JsOrder::Comma, "0")?;
        let g = self.value_or(block, "GREEN", JsOrder::Comma, "0")?;
        let b = self.value_or(block, "BLUE", JsOrder::Comma, "0")?;
        Ok(Fragment::value(format!("{name}({r}, {g}, {b})"), JsOrder::FunctionCall))
    }

    pub(super) fn colour_blend(&mut self, block: &Block) -> Output {
        let name = self.provide_function(
            "colour_blend",
            &Template::function(
                "function ",
                "(c1, c2, ratio) {",
                &[
                    "  ratio = Math.max(Math.min(Number(ratio), 1), 0);",
                    "  var r1 = parseInt(c1.substring(1, 3), 16);",
                    "  var g1 = parseInt(c1.substring(3, 5), 16);",
                    "  var b1 = parseInt(c1.substring(5, 7), 16);",
                    "  var r2 = parseInt(c2.substring(1, 3), 16);",
                    "  var g2 = parseInt(c2.substring(3, 5), 16);",
                    "  var b2 = parseInt(c2.substring(5, 7), 16);",
                    "  var r = Math.round(r1 * (1 - ratio) + r2 * ratio);",
                    "  var g = Math.round(g1 * (1 - ratio) + g2 * ratio);",
                    "  var b = Math.round(b1 * (1 - ratio) + b2 * ratio);",
                    "  r = ('0' + (r || 0).toString(16)).slice(-2);",
                    "  g = ('0' + (g || 0).toString(16)).slice(-2);",
                    "  b = ('0' + (b || 0).toString(16)).slice(-2);",
                    "  return '#' + r + g + b;",
                    "}",
                ],
            ),
        );
        let colour1 = self.value_or(block, "COLOUR1", JsOrder::Comma, "'#000000'")?;
        let colour2 = self.value_or(block, "COLOUR2", JsOrder::Comma, "'#000000'")?;
        let ratio = self.value_or(block, "RATIO", JsOrder::Comma, "0.5")?;
        Ok(Fragment::value(
            format!("{name}({colour1}, {colour2}, {ratio})"),
            JsOrder::FunctionCall,
        ))
    }
}
