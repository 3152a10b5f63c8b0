//! Log directory creation
//!
//! Kept in its own test binary because it points XDG_CONFIG_HOME at a
//! temporary directory for the whole process.

use entryform::config_paths;

#[cfg(not(target_os = "windows"))]
#[test]
fn test_ensure_logs_dir_creates_logs_dir() {
    let home = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", home.path());

    let expected = config_paths::logs_dir().unwrap();
    assert_eq!(expected, home.path().join("entryform").join("logs"));
    assert!(!expected.exists());

    let created = config_paths::ensure_logs_dir().unwrap();
    assert_eq!(created, expected);
    assert!(created.is_dir());

    // Existing directory is fine
    assert_eq!(config_paths::ensure_logs_dir().unwrap(), expected);
}
