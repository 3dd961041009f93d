//! Tests for configuration handling.

use blockgen_core::Target;
use blockgen_utils::Config;
use blockgen_utils::config::CONFIG_FILE;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_new() {
    let config = Config::new("test-project");
    assert_eq!(config.package.name, "test-project");
    assert_eq!(config.package.version, "0.1.0");
    assert_eq!(config.generator.target, Target::Python);
    assert_eq!(config.generator.indent, "  ");
    assert_eq!(config.generator.loop_trap, None);
}

#[test]
fn test_config_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(CONFIG_FILE);

    let mut config = Config::new("test-project");
    config.generator.target = Target::JavaScript;
    config.generator.loop_trap = Some("checkTimeout(%1);\n".to_string());
    config.save(&config_path).unwrap();

    let loaded = Config::load(&config_path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_generator_section_is_optional() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(CONFIG_FILE);
    fs::write(
        &config_path,
        "[package]\nname = \"minimal\"\nversion = \"1.0.0\"\n",
    )
    .unwrap();

    let loaded = Config::load(&config_path).unwrap();
    assert_eq!(loaded.package.name, "minimal");
    assert_eq!(loaded.generator.target, Target::Python);
    assert_eq!(loaded.generator.indent, "  ");
}

#[test]
fn test_target_is_read_by_name() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(CONFIG_FILE);
    fs::write(
        &config_path,
        "[package]\nname = \"web\"\nversion = \"0.1.0\"\n\n[generator]\ntarget = \"javascript\"\nindent = \"    \"\n",
    )
    .unwrap();

    let loaded = Config::load(&config_path).unwrap();
    assert_eq!(loaded.generator.target, Target::JavaScript);
    assert_eq!(loaded.generator.indent, "    ");
}

#[test]
fn test_load_rejects_bad_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(CONFIG_FILE);
    fs::write(&config_path, "[package\nname = 1").unwrap();

    assert!(Config::load(&config_path).is_err());
}

#[test]
fn test_config_find_from_subdirectory() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = temp_dir.path();

    let config = Config::new("find-test");
    config.save(project_dir.join(CONFIG_FILE)).unwrap();

    let sub_dir = project_dir.join("programs");
    fs::create_dir(&sub_dir).unwrap();

    let (found_config, found_dir) = Config::find_from(&sub_dir).unwrap();
    assert_eq!(found_config.package.name, "find-test");
    assert_eq!(found_dir, project_dir);
}
