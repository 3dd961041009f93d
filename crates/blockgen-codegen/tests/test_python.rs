//! Tests for the Python target.

use blockgen_codegen::{GeneratorOptions, generate};
use blockgen_core::{BlockGraph, BlockId, BlockKind, Error, Target};

fn python(graph: &BlockGraph) -> String {
    generate(graph, Target::Python, &GeneratorOptions::default()).unwrap()
}

fn number(graph: &mut BlockGraph, value: &str) -> BlockId {
    graph
        .block(BlockKind::MathNumber)
        .field("NUM", value)
        .build()
        .unwrap()
}

fn text(graph: &mut BlockGraph, value: &str) -> BlockId {
    graph.block(BlockKind::Text).field("TEXT", value).build().unwrap()
}

fn get(graph: &mut BlockGraph, name: &str) -> BlockId {
    graph
        .block(BlockKind::VariablesGet)
        .field("VAR", name)
        .build()
        .unwrap()
}

fn print(graph: &mut BlockGraph, value: BlockId) -> BlockId {
    graph
        .block(BlockKind::TextPrint)
        .value("TEXT", value)
        .build()
        .unwrap()
}

#[test]
fn test_repeat_with_body() {
    let mut graph = BlockGraph::new();
    let hi = text(&mut graph, "hi");
    let body = print(&mut graph, hi);
    graph
        .block(BlockKind::ControlsRepeat)
        .field("TIMES", "5")
        .statement("DO", body)
        .build()
        .unwrap();

    assert_eq!(python(&graph), "for count in range(5):\n  print('hi')\n");
}

#[test]
fn test_empty_loop_body_gets_pass() {
    let mut graph = BlockGraph::new();
    graph
        .block(BlockKind::ControlsRepeat)
        .field("TIMES", "3")
        .build()
        .unwrap();

    assert_eq!(python(&graph), "for count in range(3):\n  pass\n");
}

#[test]
fn test_variables_are_declared() {
    let mut graph = BlockGraph::new();
    let five = number(&mut graph, "5");
    graph
        .block(BlockKind::VariablesSet)
        .field("VAR", "x")
        .value("VALUE", five)
        .build()
        .unwrap();

    assert_eq!(python(&graph), "x = None\n\n\nx = 5\n");
}

#[test]
fn test_reserved_variable_name_is_suffixed() {
    let mut graph = BlockGraph::new();
    let one = number(&mut graph, "1");
    graph
        .block(BlockKind::VariablesSet)
        .field("VAR", "print")
        .value("VALUE", one)
        .build()
        .unwrap();

    assert_eq!(python(&graph), "print2 = None\n\n\nprint2 = 1\n");
}

#[test]
fn test_counting_loop_with_literal_bounds() {
    let mut graph = BlockGraph::new();
    let from = number(&mut graph, "0");
    let to = number(&mut graph, "4");
    let by = number(&mut graph, "1");
    let i = get(&mut graph, "i");
    let body = print(&mut graph, i);
    graph
        .block(BlockKind::ControlsFor)
        .field("VAR", "i")
        .value("FROM", from)
        .value("TO", to)
        .value("BY", by)
        .statement("DO", body)
        .build()
        .unwrap();

    assert_eq!(python(&graph), "i = None\n\n\nfor i in range(5):\n  print(i)\n");
}

#[test]
fn test_counting_loop_downwards() {
    let mut graph = BlockGraph::new();
    let from = number(&mut graph, "4");
    let to = number(&mut graph, "0");
    graph
        .block(BlockKind::ControlsFor)
        .field("VAR", "i")
        .value("FROM", from)
        .value("TO", to)
        .build()
        .unwrap();

    assert_eq!(
        python(&graph),
        "i = None\n\n\nfor i in range(4, -1, -1):\n  pass\n"
    );
}

#[test]
fn test_counting_loop_with_dynamic_bound() {
    let mut graph = BlockGraph::new();
    let from = get(&mut graph, "a");
    let to = number(&mut graph, "10");
    graph
        .block(BlockKind::ControlsFor)
        .field("VAR", "i")
        .value("FROM", from)
        .value("TO", to)
        .build()
        .unwrap();

    let code = python(&graph);
    assert!(code.starts_with("a = None\ni = None\n\n"));
    assert_eq!(code.matches("def upRange(start, stop, step):").count(), 1);
    assert_eq!(code.matches("def downRange(start, stop, step):").count(), 1);
    assert!(code.ends_with(
        "for i in (float(a) <= 10) and upRange(float(a), 10, 1) or downRange(float(a), 10, 1):\n  pass\n"
    ));
}

#[test]
fn test_index_literals_are_folded() {
    let mut graph = BlockGraph::new();
    let list = get(&mut graph, "l");
    let at = number(&mut graph, "3");
    let item = graph
        .block(BlockKind::ListsGetIndex)
        .field("MODE", "GET")
        .field("WHERE", "FROM_START")
        .value("VALUE", list)
        .value("AT", at)
        .build()
        .unwrap();
    print(&mut graph, item);

    assert_eq!(python(&graph), "l = None\n\n\nprint(l[2])\n");
}

#[test]
fn test_dynamic_index_is_offset_at_runtime() {
    let mut graph = BlockGraph::new();
    let list = get(&mut graph, "l");
    let at = get(&mut graph, "n");
    let item = graph
        .block(BlockKind::ListsGetIndex)
        .field("MODE", "GET")
        .field("WHERE", "FROM_START")
        .value("VALUE", list)
        .value("AT", at)
        .build()
        .unwrap();
    print(&mut graph, item);

    assert!(python(&graph).ends_with("print(l[int(n - 1)])\n"));
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

    assert_eq!(python(&graph), "[].pop(0)\n");
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
    print(&mut graph, item);

    let code = python(&graph);
    assert!(code.starts_with("import random\n\n"));
    assert!(code.contains("def lists_get_random_item(myList, remove):\n"));
    assert!(code.ends_with("print(lists_get_random_item(l, False))\n"));
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
    print(&mut graph, copy);

    assert!(python(&graph).ends_with("print(l[ : ])\n"));
}

#[test]
fn test_sublist_from_end() {
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
    print(&mut graph, slice);

    assert!(python(&graph).ends_with("print(l[1 : -2])\n"));
}

#[test]
fn test_helpers_are_emitted_once() {
    let mut graph = BlockGraph::new();
    for _ in 0..2 {
        let list = get(&mut graph, "l");
        let mean = graph
            .block(BlockKind::MathOnList)
            .field("OP", "AVERAGE")
            .value("LIST", list)
            .build()
            .unwrap();
        print(&mut graph, mean);
    }

    let code = python(&graph);
    assert_eq!(code.matches("def math_mean(").count(), 1);
    assert_eq!(code.matches("print(math_mean(l))").count(), 2);
}

#[test]
fn test_operator_precedence_adds_parentheses() {
    let mut graph = BlockGraph::new();
    let one = number(&mut graph, "1");
    let two = number(&mut graph, "2");
    let three = number(&mut graph, "3");
    let sum = graph
        .block(BlockKind::MathArithmetic)
        .field("OP", "ADD")
        .value("A", one)
        .value("B", two)
        .build()
        .unwrap();
    let product = graph
        .block(BlockKind::MathArithmetic)
        .field("OP", "MULTIPLY")
        .value("A", sum)
        .value("B", three)
        .build()
        .unwrap();
    print(&mut graph, product);

    assert_eq!(python(&graph), "print((1 + 2) * 3)\n");
}

#[test]
fn test_math_functions_import_math() {
    let mut graph = BlockGraph::new();
    let x = number(&mut graph, "9");
    let root = graph
        .block(BlockKind::MathSingle)
        .field("OP", "ROOT")
        .value("NUM", x)
        .build()
        .unwrap();
    print(&mut graph, root);

    assert_eq!(python(&graph), "import math\n\n\nprint(math.sqrt(9))\n");
}

#[test]
fn test_if_else_chain() {
    let mut graph = BlockGraph::new();
    let cond = get(&mut graph, "ok");
    let yes = text(&mut graph, "yes");
    let yes = print(&mut graph, yes);
    let no = text(&mut graph, "no");
    let no = print(&mut graph, no);
    graph
        .block(BlockKind::ControlsIf)
        .has_else(true)
        .value("IF0", cond)
        .statement("DO0", yes)
        .statement("ELSE", no)
        .build()
        .unwrap();

    assert_eq!(
        python(&graph),
        "ok = None\n\n\nif ok:\n  print('yes')\nelse:\n  print('no')\n"
    );
}

#[test]
fn test_comments_are_attached() {
    let mut graph = BlockGraph::new();
    let hi = graph
        .block(BlockKind::Text)
        .field("TEXT", "hi")
        .comment("greeting")
        .build()
        .unwrap();
    graph
        .block(BlockKind::TextPrint)
        .value("TEXT", hi)
        .comment("say hi")
        .build()
        .unwrap();

    assert_eq!(python(&graph), "# say hi\n# greeting\nprint('hi')\n");
}

#[test]
fn test_naked_value_becomes_a_statement() {
    let mut graph = BlockGraph::new();
    number(&mut graph, "42");

    assert_eq!(python(&graph), "42\n");
}

#[test]
fn test_procedure_definition_and_call() {
    let mut graph = BlockGraph::new();
    let who = get(&mut graph, "who");
    let body = print(&mut graph, who);
    graph
        .block(BlockKind::ProceduresDefNoReturn)
        .field("NAME", "greet")
        .arguments(["who"])
        .statement("STACK", body)
        .build()
        .unwrap();
    let bob = text(&mut graph, "Bob");
    graph
        .block(BlockKind::ProceduresCallNoReturn)
        .field("NAME", "greet")
        .arguments(["who"])
        .value("ARG0", bob)
        .build()
        .unwrap();

    assert_eq!(
        python(&graph),
        "who = None\n\ndef greet(who):\n  print(who)\n\n\ngreet('Bob')\n"
    );
}

#[test]
fn test_procedure_declares_globals() {
    let mut graph = BlockGraph::new();
    let zero = number(&mut graph, "0");
    let body = graph
        .block(BlockKind::VariablesSet)
        .field("VAR", "total")
        .value("VALUE", zero)
        .build()
        .unwrap();
    graph
        .block(BlockKind::ProceduresDefNoReturn)
        .field("NAME", "reset")
        .statement("STACK", body)
        .build()
        .unwrap();

    assert!(python(&graph).contains("def reset():\n  global total\n  total = 0\n"));
}

#[test]
fn test_loop_trap_is_inserted() {
    let mut graph = BlockGraph::new();
    graph
        .block(BlockKind::ControlsRepeat)
        .field("TIMES", "2")
        .build()
        .unwrap();
    let options = GeneratorOptions {
        loop_trap: Some("check(%1)\n".to_string()),
        ..GeneratorOptions::default()
    };

    let code = generate(&graph, Target::Python, &options).unwrap();
    assert_eq!(code, "for count in range(2):\ncheck('b0')\n  pass\n");
}

#[test]
fn test_invalid_boolean_is_rejected() {
    let mut graph = BlockGraph::new();
    graph
        .block(BlockKind::LogicBoolean)
        .field("BOOL", "MAYBE")
        .build()
        .unwrap();

    let err = generate(&graph, Target::Python, &GeneratorOptions::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidField { .. }));
}

#[test]
fn test_missing_field_is_rejected() {
    let mut graph = BlockGraph::new();
    graph.block(BlockKind::VariablesGet).build().unwrap();

    let err = generate(&graph, Target::Python, &GeneratorOptions::default()).unwrap_err();
    assert!(matches!(err, Error::MissingField { .. }));
}

#[test]
fn test_unknown_operator_is_rejected() {
    let mut graph = BlockGraph::new();
    graph
        .block(BlockKind::MathArithmetic)
        .field("OP", "XOR")
        .build()
        .unwrap();

    let err = generate(&graph, Target::Python, &GeneratorOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnknownOperator { .. }));
}

#[test]
fn test_write_mode_on_getter_is_unhandled() {
    let mut graph = BlockGraph::new();
    let list = get(&mut graph, "l");
    graph
        .block(BlockKind::ListsGetIndex)
        .field("MODE", "SET")
        .field("WHERE", "FIRST")
        .value("VALUE", list)
        .build()
        .unwrap();

    let err = generate(&graph, Target::Python, &GeneratorOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnhandledCombination { .. }));
}

#[test]
fn test_counting_loop_with_huge_literal_bound() {
    let mut graph = BlockGraph::new();
    let from = number(&mut graph, "0");
    let to = number(&mut graph, "1e20");
    graph
        .block(BlockKind::ControlsFor)
        .field("VAR", "i")
        .value("FROM", from)
        .value("TO", to)
        .build()
        .unwrap();

    let code = python(&graph);
    assert!(code.contains("def upRange(start, stop, step):\n"));
    assert!(!code.contains("range("));
    assert!(code.ends_with("for i in upRange(0, 100000000000000000000, 1):\n  pass\n"));
}

fn sublist_to_end(graph: &mut BlockGraph, at2: BlockId) {
    let list = get(graph, "l");
    let slice = graph
        .block(BlockKind::ListsGetSublist)
        .field("WHERE1", "FIRST")
        .field("WHERE2", "FROM_END")
        .value("LIST", list)
        .value("AT2", at2)
        .build()
        .unwrap();
    print(graph, slice);
}

#[test]
fn test_sublist_to_last_from_end_is_open() {
    let mut graph = BlockGraph::new();
    let one = number(&mut graph, "1");
    sublist_to_end(&mut graph, one);

    assert_eq!(python(&graph), "l = None\n\n\nprint(l[ : ])\n");
}

#[test]
fn test_sublist_dynamic_from_end_falls_back_to_maxsize() {
    let mut graph = BlockGraph::new();
    let x = get(&mut graph, "x");
    sublist_to_end(&mut graph, x);

    assert_eq!(
        python(&graph),
        "import sys\n\nx = None\nl = None\n\n\nprint(l[ : int(1 - x) or sys.maxsize])\n"
    );
}

fn set_random(graph: &mut BlockGraph, list: BlockId) {
    let seven = number(graph, "7");
    graph
        .block(BlockKind::ListsSetIndex)
        .field("MODE", "SET")
        .field("WHERE", "RANDOM")
        .value("LIST", list)
        .value("TO", seven)
        .build()
        .unwrap();
}

#[test]
fn test_set_random_caches_computed_list() {
    let mut graph = BlockGraph::new();
    let a = get(&mut graph, "a");
    let two = number(&mut graph, "2");
    let list = graph
        .block(BlockKind::ListsRepeat)
        .value("ITEM", a)
        .value("NUM", two)
        .build()
        .unwrap();
    set_random(&mut graph, list);

    assert_eq!(
        python(&graph),
        "import random\n\na = None\n\n\n\
         tmp_list = ([a] * 2)\n\
         tmp_x = int(random.random() * len(tmp_list))\n\
         tmp_list[tmp_x] = 7\n"
    );
}

#[test]
fn test_set_random_reads_variable_list_directly() {
    let mut graph = BlockGraph::new();
    let list = get(&mut graph, "l");
    set_random(&mut graph, list);

    assert!(python(&graph).ends_with("tmp_x = int(random.random() * len(l))\nl[tmp_x] = 7\n"));
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
        python(&graph),
        "a = None\n\n\n\
         a = [0]\n\
         for index in range(1, 3 + 1):\n  a.append(int(input('Enter element a[' + str(index) + ']: ')))\n"
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

    assert_eq!(python(&graph), "a = None\n\n\nprint(', '.join(map(str, a[1:])))\n");
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
    print(&mut graph, element);

    assert_eq!(
        python(&graph),
        "a = None\ni = None\n\n\na[i] = 5\n\nprint(a[2])\n"
    );
}
