//! Tests for loading program descriptions.

use blockgen_core::{BlockKind, Error, ProgramDescription};

const PROGRAM: &str = r#"
[[block]]
type = "variables_set"
fields = { VAR = "total" }
comment = "running total"
[block.values.VALUE]
type = "math_number"
fields = { NUM = "0" }
[block.next]
type = "text_print"
[block.next.values.TEXT]
type = "variables_get"
fields = { VAR = "total" }

[[block]]
type = "procedures_defnoreturn"
fields = { NAME = "greet" }
mutation = { arguments = ["who"] }
[block.statements.STACK]
type = "text_print"
"#;

#[test]
fn test_parse_program() {
    let program: ProgramDescription = toml::from_str(PROGRAM).unwrap();
    assert_eq!(program.blocks.len(), 2);
    assert_eq!(program.blocks[0].kind, "variables_set");
    assert_eq!(program.blocks[0].comment.as_deref(), Some("running total"));

    let graph = program.into_graph().unwrap();
    assert_eq!(graph.len(), 6);

    let roots: Vec<BlockKind> = graph.roots().map(|block| block.kind).collect();
    assert_eq!(
        roots,
        vec![BlockKind::VariablesSet, BlockKind::ProceduresDefNoReturn]
    );

    let set = graph.roots().next().unwrap();
    let next = graph.get(set.next.unwrap()).unwrap();
    assert_eq!(next.kind, BlockKind::TextPrint);

    let def = graph.roots().nth(1).unwrap();
    assert_eq!(def.arguments(), ["who".to_string()]);
    assert_eq!(graph.all_variables(None).unwrap(), vec!["total", "who"]);
}

#[test]
fn test_unknown_type_tag() {
    let program: ProgramDescription = toml::from_str(
        r#"
[[block]]
type = "controls_switch"
"#,
    )
    .unwrap();
    let err = program.into_graph().unwrap_err();
    assert!(matches!(err, Error::UnknownBlockType(tag) if tag == "controls_switch"));
}

#[test]
fn test_shape_violation_in_description() {
    let program: ProgramDescription = toml::from_str(
        r#"
[[block]]
type = "text_length"
[block.values.VALUE]
type = "text_print"
"#,
    )
    .unwrap();
    assert!(matches!(program.into_graph(), Err(Error::Graph(_))));
}

#[test]
fn test_empty_program() {
    let program: ProgramDescription = toml::from_str("").unwrap();
    assert!(program.into_graph().unwrap().is_empty());
}
