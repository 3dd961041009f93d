//! Tests for the JavaScript target.

use blockgen_codegen::{GeneratorOptions, generate};
use blockgen_core::{BlockGraph, BlockId, BlockKind, Error, Target};

fn javascript(graph: &BlockGraph) -> String {
    generate(graph, Target::JavaScript, &GeneratorOptions::default()).unwrap()
}

fn number(graph: &mut BlockGraph, value: &str) -> BlockId {
    graph
        .block(BlockKind::MathNumber)
        .field("NUM", value)
        .build()
        .unwrap()
}

fn get(graph: &mut BlockGraph, name: &str) -> BlockId {
    graph
        .block(BlockKind::VariablesGet)
        .field("VAR", name)
        .build()
        .unwrap()
}

fn alert(graph: &mut BlockGraph, value: BlockId) -> BlockId {
    graph
        .block(BlockKind::TextPrint)
        .value("TEXT", value)
        .build()
        .unwrap()
}

fn counting_loop(graph: &mut BlockGraph, from: BlockId, to: BlockId, by: Option<BlockId>) {
    let mut builder = graph
        .block(BlockKind::ControlsFor)
        .field("VAR", "i")
        .value("FROM", from)
        .value("TO", to);
    if let Some(by) = by {
        builder = builder.value("BY", by);
    }
    builder.build().unwrap();
}

#[test]
fn test_print_text() {
    let mut graph = BlockGraph::new();
    let hello = graph
        .block(BlockKind::Text)
        .field("TEXT", "Hello")
        .build()
        .unwrap();
    alert(&mut graph, hello);

    assert_eq!(javascript(&graph), "window.alert('Hello');\n");
}

#[test]
fn test_variables_are_declared_on_one_line() {
    let mut graph = BlockGraph::new();
    let five = number(&mut graph, "5");
    graph
        .block(BlockKind::VariablesSet)
        .field("VAR", "x")
        .value("VALUE", five)
        .build()
        .unwrap();
    let y = get(&mut graph, "y");
    alert(&mut graph, y);

    assert_eq!(
        javascript(&graph),
        "var x, y;\n\n\nx = 5;\n\nwindow.alert(y);\n"
    );
}

#[test]
fn test_reserved_variable_name_is_suffixed() {
    let mut graph = BlockGraph::new();
    let one = number(&mut graph, "1");
    graph
        .block(BlockKind::VariablesSet)
        .field("VAR", "alert")
        .value("VALUE", one)
        .build()
        .unwrap();

    assert_eq!(javascript(&graph), "var alert2;\n\n\nalert2 = 1;\n");
}

#[test]
fn test_counting_loop_upwards() {
    let mut graph = BlockGraph::new();
    let from = number(&mut graph, "1");
    let to = number(&mut graph, "10");
    counting_loop(&mut graph, from, to, None);

    assert_eq!(
        javascript(&graph),
        "var i;\n\n\nfor (i = 1; i <= 10; i++) {\n}\n"
    );
}

#[test]
fn test_counting_loop_downwards_with_step() {
    let mut graph = BlockGraph::new();
    let from = number(&mut graph, "10");
    let to = number(&mut graph, "1");
    let by = number(&mut graph, "2");
    counting_loop(&mut graph, from, to, Some(by));

    assert_eq!(
        javascript(&graph),
        "var i;\n\n\nfor (i = 10; i >= 1; i -= 2) {\n}\n"
    );
}

#[test]
fn test_counting_loop_with_dynamic_bound() {
    let mut graph = BlockGraph::new();
    let from = get(&mut graph, "a");
    let to = number(&mut graph, "10");
    counting_loop(&mut graph, from, to, None);

    assert_eq!(
        javascript(&graph),
        "var a, i;\n\n\n\
         var i_inc = 1;\n\
         if (a > 10) {\n  i_inc = -i_inc;\n}\n\
         for (i = a;\n     i_inc >= 0 ? i <= 10 : i >= 10;\n     i += i_inc) {\n}\n"
    );
}

#[test]
fn test_repeat_caches_computed_count() {
    let mut graph = BlockGraph::new();
    let n = get(&mut graph, "n");
    let one = number(&mut graph, "1");
    let sum = graph
        .block(BlockKind::MathArithmetic)
        .field("OP", "ADD")
        .value("A", n)
        .value("B", one)
        .build()
        .unwrap();
    graph
        .block(BlockKind::ControlsRepeatExt)
        .value("TIMES", sum)
        .build()
        .unwrap();

    assert!(javascript(&graph).ends_with(
        "var repeat_end = n + 1;\nfor (var count = 0; count < repeat_end; count++) {\n}\n"
    ));
}

#[test]
fn test_for_each_is_a_counted_loop() {
    let mut graph = BlockGraph::new();
    let list = get(&mut graph, "items");
    graph
        .block(BlockKind::ControlsForEach)
        .field("VAR", "x")
        .value("LIST", list)
        .build()
        .unwrap();

    assert!(javascript(&graph).ends_with(
        "for (var x_index = 0; x_index < items.length; x_index++) {\n  x = items[x_index];\n}\n"
    ));
}

#[test]
fn test_negation_wraps_looser_operand() {
    let mut graph = BlockGraph::new();
    let a = get(&mut graph, "a");
    let b = get(&mut graph, "b");
    let both = graph
        .block(BlockKind::LogicOperation)
        .field("OP", "AND")
        .value("A", a)
        .value("B", b)
        .build()
        .unwrap();
    let not = graph
        .block(BlockKind::LogicNegate)
        .value("BOOL", both)
        .build()
        .unwrap();
    alert(&mut graph, not);

    assert!(javascript(&graph).ends_with("window.alert(!(a && b));\n"));
}

#[test]
fn test_remove_first_of_empty_list() {
    let mut graph = BlockGraph::new();
    let list = graph.block(BlockKind::ListsCreateEmpty).build().unwrap();
    graph
        .block(BlockKind::ListsGetIndex)
        .field("MODE", "REMOVE")
        .field("WHERE", "FIRST")
        .value("VALUE", list)
        .build()
        .unwrap();

    assert_eq!(javascript(&graph), "[].shift();\n");
}

#[test]
fn test_random_item_uses_helper() {
    let mut graph = BlockGraph::new();
    let list = get(&mut graph, "l");
    let item = graph
        .block(BlockKind::ListsGetIndex)
        .field("MODE", "GET")
        .field("WHERE", "RANDOM")
        .value("VALUE", list)
        .build()
        .unwrap();
    alert(&mut graph, item);

    let code = javascript(&graph);
    assert!(code.contains("function lists_get_random_item(list, remove) {\n"));
    assert!(code.ends_with("window.alert(lists_get_random_item(l, false));\n"));
}

#[test]
fn test_whole_sublist_is_a_copy() {
    let mut graph = BlockGraph::new();
    let list = get(&mut graph, "l");
    let copy = graph
        .block(BlockKind::ListsGetSublist)
        .field("WHERE1", "FIRST")
        .field("WHERE2", "LAST")
        .value("LIST", list)
        .build()
        .unwrap();
    alert(&mut graph, copy);

    let code = javascript(&graph);
    assert!(!code.contains("function"));
    assert!(code.ends_with("window.alert(l.concat());\n"));
}

#[test]
fn test_partial_sublist_uses_helper() {
    let mut graph = BlockGraph::new();
    let list = get(&mut graph, "l");
    let at1 = number(&mut graph, "2");
    let at2 = number(&mut graph, "3");
    let slice = graph
        .block(BlockKind::ListsGetSublist)
        .field("WHERE1", "FROM_START")
        .field("WHERE2", "FROM_END")
        .value("LIST", list)
        .value("AT1", at1)
        .value("AT2", at2)
        .build()
        .unwrap();
    alert(&mut graph, slice);

    let code = javascript(&graph);
    assert!(code.contains("function lists_get_sublist(list, where1, at1, where2, at2) {\n"));
    assert!(code.ends_with("window.alert(lists_get_sublist(l, 'FROM_START', 2, 'FROM_END', 3));\n"));
}

#[test]
fn test_char_index_is_folded() {
    let mut graph = BlockGraph::new();
    let t = get(&mut graph, "t");
    let at = number(&mut graph, "2");
    let letter = graph
        .block(BlockKind::TextCharAt)
        .field("WHERE", "FROM_START")
        .value("VALUE", t)
        .value("AT", at)
        .build()
        .unwrap();
    alert(&mut graph, letter);

    assert!(javascript(&graph).ends_with("window.alert(t.charAt(1));\n"));
}

#[test]
fn test_change_treats_non_numbers_as_zero() {
    let mut graph = BlockGraph::new();
    let one = number(&mut graph, "1");
    graph
        .block(BlockKind::MathChange)
        .field("VAR", "x")
        .value("DELTA", one)
        .build()
        .unwrap();

    assert_eq!(
        javascript(&graph),
        "var x;\n\n\nx = (typeof x == 'number' ? x : 0) + 1;\n"
    );
}

#[test]
fn test_function_with_return_value() {
    let mut graph = BlockGraph::new();
    let x = get(&mut graph, "x");
    let two = number(&mut graph, "2");
    let product = graph
        .block(BlockKind::MathArithmetic)
        .field("OP", "MULTIPLY")
        .value("A", x)
        .value("B", two)
        .build()
        .unwrap();
    graph
        .block(BlockKind::ProceduresDefReturn)
        .field("NAME", "double")
        .arguments(["x"])
        .value("RETURN", product)
        .build()
        .unwrap();
    let three = number(&mut graph, "3");
    let call = graph
        .block(BlockKind::ProceduresCallReturn)
        .field("NAME", "double")
        .arguments(["x"])
        .value("ARG0", three)
        .build()
        .unwrap();
    alert(&mut graph, call);

    assert_eq!(
        javascript(&graph),
        "var x;\n\nfunction double(x) {\n  return x * 2;\n}\n\n\nwindow.alert(double(3));\n"
    );
}

#[test]
fn test_comments_use_line_comments() {
    let mut graph = BlockGraph::new();
    graph
        .block(BlockKind::ControlsFlowStatements)
        .field("FLOW", "BREAK")
        .comment("stop\nnow")
        .build()
        .unwrap();

    assert_eq!(javascript(&graph), "// stop\n// now\nbreak;\n");
}

#[test]
fn test_random_substring_is_unhandled() {
    let mut graph = BlockGraph::new();
    let t = get(&mut graph, "t");
    graph
        .block(BlockKind::TextGetSubstring)
        .field("WHERE1", "RANDOM")
        .field("WHERE2", "LAST")
        .value("STRING", t)
        .build()
        .unwrap();

    let err = generate(&graph, Target::JavaScript, &GeneratorOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnhandledCombination { .. }));
}

fn set_computed_list(graph: &mut BlockGraph, mode: &str, position: &str, at: Option<&str>) {
    let a = get(graph, "a");
    let two = number(graph, "2");
    let list = graph
        .block(BlockKind::ListsRepeat)
        .value("ITEM", a)
        .value("NUM", two)
        .build()
        .unwrap();
    let seven = number(graph, "7");
    let at = at.map(|at| number(graph, at));
    let mut builder = graph
        .block(BlockKind::ListsSetIndex)
        .field("MODE", mode)
        .field("WHERE", position)
        .value("LIST", list)
        .value("TO", seven);
    if let Some(at) = at {
        builder = builder.value("AT", at);
    }
    builder.build().unwrap();
}

#[test]
fn test_set_last_caches_computed_list() {
    let mut graph = BlockGraph::new();
    set_computed_list(&mut graph, "SET", "LAST", None);

    assert!(javascript(&graph).ends_with(
        "var tmp_list = (lists_repeat(a, 2));\ntmp_list[tmp_list.length - 1] = 7;\n"
    ));
}

#[test]
fn test_set_from_end_caches_computed_list() {
    let mut graph = BlockGraph::new();
    set_computed_list(&mut graph, "SET", "FROM_END", Some("2"));

    assert!(javascript(&graph).ends_with(
        "var tmp_list = (lists_repeat(a, 2));\ntmp_list[tmp_list.length - 2] = 7;\n"
    ));
}

#[test]
fn test_insert_at_random_caches_computed_list() {
    let mut graph = BlockGraph::new();
    set_computed_list(&mut graph, "INSERT", "RANDOM", None);

    assert!(javascript(&graph).ends_with(
        "var tmp_list = (lists_repeat(a, 2));\n\
         var tmp_x = Math.floor(Math.random() * tmp_list.length);\n\
         tmp_list.splice(tmp_x, 0, 7);\n"
    ));
}

#[test]
fn test_input_list_of_n_elements() {
    let mut graph = BlockGraph::new();
    let list = get(&mut graph, "a");
    let three = number(&mut graph, "3");
    graph
        .block(BlockKind::ListsInputN)
        .value("LIST", list)
        .value("NUM", three)
        .build()
        .unwrap();

    assert_eq!(
        javascript(&graph),
        "var a;\n\n\n\
         a = [0];\n\
         for (var index = 1; index <= 3; index++) {\n  \
         a.push(window.parseInt(window.prompt('Enter element a[' + index + ']: ')));\n}\n"
    );
}

#[test]
fn test_output_list_skips_padding() {
    let mut graph = BlockGraph::new();
    let list = get(&mut graph, "a");
    graph
        .block(BlockKind::ListsOutputN)
        .value("LIST", list)
        .build()
        .unwrap();

    assert_eq!(
        javascript(&graph),
        "var a;\n\n\nwindow.alert(a.join(', ').substr(3));\n"
    );
}

#[test]
fn test_element_access_uses_raw_index() {
    let mut graph = BlockGraph::new();
    let list = get(&mut graph, "a");
    let i = get(&mut graph, "i");
    let five = number(&mut graph, "5");
    graph
        .block(BlockKind::ListsSetElement)
        .value("LIST", list)
        .value("NUM", i)
        .value("TO", five)
        .build()
        .unwrap();
    let list = get(&mut graph, "a");
    let two = number(&mut graph, "2");
    let element = graph
        .block(BlockKind::ListsGetElement)
        .value("LIST", list)
        .value("NUM", two)
        .build()
        .unwrap();
    alert(&mut graph, element);

    assert_eq!(
        javascript(&graph),
        "var a, i;\n\n\na[i] = 5;\n\nwindow.alert(a[2]);\n"
    );
}

#[test]
fn test_even_check_is_inline() {
    let mut graph = BlockGraph::new();
    let n = get(&mut graph, "n");
    let even = graph
        .block(BlockKind::MathNumberProperty)
        .field("PROPERTY", "EVEN")
        .value("NUMBER_TO_CHECK", n)
        .build()
        .unwrap();
    alert(&mut graph, even);

    assert!(javascript(&graph).ends_with("window.alert(n % 2 == 0);\n"));
}
