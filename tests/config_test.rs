// tests/config_test.rs
use autoversion::config::{load_config, Config, GitBackend, LOCAL_CONFIG_FILE};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.version_file, "_version.py");
    assert_eq!(config.output_path().to_str(), Some("_version.py"));
    assert!(config.git.tag);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
version_file = "pkg/_version.py"
output_file = "pkg/version.py"

[git]
backend = "libgit2"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.version_file, "pkg/_version.py");
    assert_eq!(config.output_file.as_deref(), Some("pkg/version.py"));
    assert_eq!(config.git.backend, GitBackend::Libgit2);
    assert!(config.git.tag);
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = load_config(Some(missing.to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_load_invalid_toml_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"version_file = [").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        "version_file = \"src/_version.py\"\n[git]\ntag = false\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    let config = result.unwrap();
    assert_eq!(config.version_file, "src/_version.py");
    assert!(!config.git.tag);
}
