//! Integration tests for the blockgen CLI.

use blockgen_cli::utils::{MAIN_PROGRAM_PATH, MAIN_PROGRAM_TEMPLATE};
use blockgen_cli::{Compiler, Config, pipeline};
use blockgen_codegen::GeneratorOptions;
use blockgen_core::Target;
use blockgen_utils::config::CONFIG_FILE;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn create_project(root: &Path, program: &str) -> Config {
    fs::create_dir_all(root.join("src")).unwrap();
    let config = Config::new("demo");
    config.save(root.join(CONFIG_FILE)).unwrap();
    fs::write(root.join(MAIN_PROGRAM_PATH), program).unwrap();
    config
}

#[test]
fn test_build_writes_python() {
    let temp_dir = TempDir::new().unwrap();
    create_project(temp_dir.path(), MAIN_PROGRAM_TEMPLATE);

    let compiler = Compiler::new(temp_dir.path().to_path_buf()).unwrap();
    let (output, _duration) = compiler.build(None).unwrap();

    assert_eq!(output, temp_dir.path().join("target/main.py"));
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "print('Hello, blockgen!')\n"
    );
}

#[test]
fn test_build_target_override() {
    let temp_dir = TempDir::new().unwrap();
    create_project(temp_dir.path(), MAIN_PROGRAM_TEMPLATE);

    let compiler = Compiler::new(temp_dir.path().to_path_buf()).unwrap();
    let (output, _duration) = compiler.build(Some(Target::JavaScript)).unwrap();

    assert_eq!(output, temp_dir.path().join("target/main.js"));
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "window.alert('Hello, blockgen!');\n"
    );
}

#[test]
fn test_configured_indent_is_used() {
    let temp_dir = TempDir::new().unwrap();
    let program = r#"
[[block]]
type = "controls_repeat"
fields = { TIMES = "2" }
[block.statements.DO]
type = "controls_flow_statements"
fields = { FLOW = "BREAK" }
"#;
    let mut config = create_project(temp_dir.path(), program);
    config.generator.indent = "    ".to_string();
    config.save(temp_dir.path().join(CONFIG_FILE)).unwrap();

    let compiler = Compiler::new(temp_dir.path().to_path_buf()).unwrap();
    let (output, _duration) = compiler.build(None).unwrap();

    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "for count in range(2):\n    break\n"
    );
}

#[test]
fn test_check_reports_generation_errors() {
    let temp_dir = TempDir::new().unwrap();
    let program = r#"
[[block]]
type = "logic_boolean"
fields = { BOOL = "MAYBE" }
"#;
    create_project(temp_dir.path(), program);

    let compiler = Compiler::new(temp_dir.path().to_path_buf()).unwrap();
    let err = compiler.check().unwrap_err();
    assert_eq!(err.to_string(), "Code generation failed");
    assert!(!temp_dir.path().join("target").exists());
}

#[test]
fn test_unknown_block_type_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.toml");
    fs::write(&path, "[[block]]\ntype = \"no_such_block\"\n").unwrap();

    let err = pipeline::build_pipeline(&path, Target::Python, &GeneratorOptions::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "Loading the block graph failed");
}

#[test]
fn test_options_follow_config() {
    let mut config = Config::new("demo");
    config.generator.indent = "\t".to_string();
    config.generator.loop_trap = Some("tick()\n".to_string());

    let options = pipeline::options(&config);
    assert_eq!(options.indent, "\t");
    assert_eq!(options.loop_trap.as_deref(), Some("tick()\n"));
}

#[test]
fn test_compiler_requires_config() {
    let temp_dir = TempDir::new().unwrap();
    assert!(Compiler::new(temp_dir.path().to_path_buf()).is_err());
}
