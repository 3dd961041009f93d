//! Target-independent generator machinery.

mod core;
mod fields;
mod helpers;
mod language;
mod names;
mod order;
mod utils;
mod walker;

pub use core::{Generator, GeneratorOptions};
pub use fields::{AccessMode, Position};
pub use helpers::{DefinitionKind, Definitions, Template};
pub use language::{Fragment, Language};
pub use names::{NameCategory, NameDatabase, safe_name};
pub use order::{JsOrder, Precedence, PythonOrder};
pub use utils::{
    collapse_blank_lines, format_number, is_identifier, is_number, parse_int, parse_number,
    prefix_lines, quote_single, tidy,
};
