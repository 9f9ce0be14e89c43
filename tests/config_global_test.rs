//! Global config layer for Settings.
//!
//! Kept in its own test binary: it points `XDG_CONFIG_HOME` at a temp directory.
#![cfg(all(unix, not(target_os = "macos")))]

use std::env;
use std::fs;

use tempfile::TempDir;

use bloodline::config::{global_config_path, Settings};

#[test]
fn given_global_config_when_load_then_overrides_default_and_yields_to_explicit_file() {
    let config_home = TempDir::new().unwrap();
    env::set_var("XDG_CONFIG_HOME", config_home.path());
    env::remove_var("BLOODLINE_MILLENNIAL_THRESHOLD");

    let global_path = global_config_path().expect("global config path");
    assert_eq!(
        global_path,
        config_home.path().join("bloodline").join("bloodline.toml")
    );

    // no global file yet: defaults
    assert_eq!(Settings::load(None).unwrap(), Settings::default());

    fs::create_dir_all(global_path.parent().unwrap()).unwrap();
    fs::write(&global_path, "millennial_threshold = 1850\n").unwrap();

    let global_only = Settings::load(None).expect("load settings");
    assert_eq!(global_only.millennial_threshold, 1850);

    let explicit_dir = TempDir::new().unwrap();
    let explicit_path = explicit_dir.path().join("bloodline.toml");
    fs::write(&explicit_path, "millennial_threshold = 1950\n").unwrap();

    let layered = Settings::load(Some(&explicit_path)).expect("load settings");
    assert_eq!(layered.millennial_threshold, 1950);

    // an explicit file that omits the key keeps the global value
    fs::write(&explicit_path, "").unwrap();
    let partial = Settings::load(Some(&explicit_path)).expect("load settings");
    assert_eq!(partial.millennial_threshold, 1850);
}
