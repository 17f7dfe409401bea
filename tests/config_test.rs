//! Config file loading and template generation.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use huewheel::config::Config;

#[test]
fn test_written_template_loads_as_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::write_template(&path).unwrap();
    let loaded = Config::load(&path).unwrap();

    assert_eq!(loaded, Config::default());
}

#[test]
fn test_partial_file_overrides_only_given_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "seed = 17\n\n[wheel]\nwidth = 640.0\nheight = 200.0\nknob_inset = 4.0\n",
    )
    .unwrap();

    let loaded = Config::resolve(Some(&path)).unwrap();
    assert_eq!(loaded.seed, Some(17));
    assert_eq!(loaded.wheel.width, 640.0);
    assert_eq!(loaded.wheel.knob_inset, 4.0);
    assert_eq!(loaded.scatter, Config::default().scatter);
}

#[test]
fn test_invalid_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[wave]\nwidth = \"wide\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("broken.toml"));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(Config::resolve(Some(&dir.path().join("absent.toml"))).is_err());
}
