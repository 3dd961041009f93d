//! The closed set of block kinds understood by the generators.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// How a block kind may connect to the rest of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Has an output connection and plugs into value inputs.
    Value,
    /// Chains through previous/next connections.
    Statement,
    /// Switches between value and statement form depending on its fields.
    Either,
    /// Stands alone on the workspace (procedure definitions).
    TopLevel,
}

impl Shape {
    /// Returns true if blocks of this shape may plug into a value input.
    #[must_use]
    pub const fn has_output(self) -> bool {
        matches!(self, Self::Value | Self::Either)
    }

    /// Returns true if blocks of this shape may sit in a statement chain.
    #[must_use]
    pub const fn has_previous(self) -> bool {
        matches!(self, Self::Statement | Self::Either)
    }
}

macro_rules! block_kinds {
    ($($variant:ident => $tag:literal, $shape:ident;)*) => {
        /// A block type tag.
        ///
        /// Every generator target matches on this enum exhaustively, so adding a
        /// kind is a compile error until each target knows how to emit it.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum BlockKind {
            $($variant,)*
        }

        impl BlockKind {
            /// Every known block kind, in declaration order.
            pub const ALL: &'static [BlockKind] = &[$(BlockKind::$variant,)*];

            /// Returns the editor's type tag for this kind.
            #[must_use]
            pub const fn tag(self) -> &'static str {
                match self {
                    $(BlockKind::$variant => $tag,)*
                }
            }

            /// Returns the connection shape of this kind.
            #[must_use]
            pub const fn shape(self) -> Shape {
                match self {
                    $(BlockKind::$variant => Shape::$shape,)*
                }
            }
        }

        impl FromStr for BlockKind {
            type Err = Error;

            fn from_str(tag: &str) -> Result<Self> {
                match tag {
                    $($tag => Ok(BlockKind::$variant),)*
                    other => Err(Error::UnknownBlockType(other.to_string())),
                }
            }
        }
    };
}

block_kinds! {
    // Logic
    ControlsIf => "controls_if", Statement;
    LogicCompare => "logic_compare", Value;
    LogicOperation => "logic_operation", Value;
    LogicNegate => "logic_negate", Value;
    LogicBoolean => "logic_boolean", Value;
    LogicNull => "logic_null", Value;
    LogicTernary => "logic_ternary", Value;

    // Loops
    ControlsRepeat => "controls_repeat", Statement;
    ControlsRepeatExt => "controls_repeat_ext", Statement;
    ControlsWhileUntil => "controls_whileUntil", Statement;
    ControlsFor => "controls_for", Statement;
    ControlsForEach => "controls_forEach", Statement;
    ControlsFlowStatements => "controls_flow_statements", Statement;

    // Math
    MathNumber => "math_number", Value;
    MathArithmetic => "math_arithmetic", Value;
    MathSingle => "math_single", Value;
    MathRound => "math_round", Value;
    MathTrig => "math_trig", Value;
    MathConstant => "math_constant", Value;
    MathNumberProperty => "math_number_property", Value;
    MathChange => "math_change", Statement;
    MathOnList => "math_on_list", Value;
    MathModulo => "math_modulo", Value;
    MathConstrain => "math_constrain", Value;
    MathRandomInt => "math_random_int", Value;
    MathRandomFloat => "math_random_float", Value;

    // Text
    Text => "text", Value;
    TextJoin => "text_join", Value;
    TextAppend => "text_append", Statement;
    TextLength => "text_length", Value;
    TextIsEmpty => "text_isEmpty", Value;
    TextIndexOf => "text_indexOf", Value;
    TextCharAt => "text_charAt", Value;
    TextGetSubstring => "text_getSubstring", Value;
    TextChangeCase => "text_changeCase", Value;
    TextTrim => "text_trim", Value;
    TextPrint => "text_print", Statement;
    TextPrompt => "text_prompt", Value;

    // Lists
    ListsCreateEmpty => "lists_create_empty", Value;
    ListsCreateWith => "lists_create_with", Value;
    ListsRepeat => "lists_repeat", Value;
    ListsLength => "lists_length", Value;
    ListsIsEmpty => "lists_isEmpty", Value;
    ListsIndexOf => "lists_indexOf", Value;
    ListsGetIndex => "lists_getIndex", Either;
    ListsSetIndex => "lists_setIndex", Statement;
    ListsGetSublist => "lists_getSublist", Value;
    ListsInputN => "lists_input_n", Statement;
    ListsOutputN => "lists_output_n", Statement;
    ListsGetElement => "lists_getElement", Value;
    ListsSetElement => "lists_setElement", Statement;

    // Colour
    ColourPicker => "colour_picker", Value;
    ColourRandom => "colour_random", Value;
    ColourRgb => "colour_rgb", Value;
    ColourBlend => "colour_blend", Value;

    // Procedures
    ProceduresDefReturn => "procedures_defreturn", TopLevel;
    ProceduresDefNoReturn => "procedures_defnoreturn", TopLevel;
    ProceduresCallReturn => "procedures_callreturn", Value;
    ProceduresCallNoReturn => "procedures_callnoreturn", Statement;
    ProceduresIfReturn => "procedures_ifreturn", Statement;

    // Variables
    VariablesGet => "variables_get", Value;
    VariablesSet => "variables_set", Statement;
    VariablesInputValue => "variables_input_value", Statement;
    VariablesOutputValue => "variables_output_value", Statement;
}

impl BlockKind {
    /// Returns true if this kind names a variable through its `VAR` field.
    #[must_use]
    pub const fn references_variable(self) -> bool {
        matches!(
            self,
            Self::VariablesGet
                | Self::VariablesSet
                | Self::VariablesInputValue
                | Self::VariablesOutputValue
                | Self::ControlsFor
                | Self::ControlsForEach
                | Self::MathChange
                | Self::TextAppend
        )
    }

    /// Returns true if this kind defines a procedure.
    #[must_use]
    pub const fn is_procedure_definition(self) -> bool {
        matches!(self, Self::ProceduresDefReturn | Self::ProceduresDefNoReturn)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
