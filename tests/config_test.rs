//! Integration tests for Settings loading from a local config file.
//!
//! These tests use temp directories only; a global config on the host
//! would be merged underneath and is assumed absent.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use mfnf_sitemap::application::OutputFormat;
use mfnf_sitemap::config::{local_config_path, Settings};

#[test]
fn given_no_local_config_when_load_then_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();

    // Act
    let settings = Settings::load(Some(dir.path())).unwrap();

    // Assert
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_local_config_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        "format = \"tree\"\noutput = \"/tmp/sitemap.tree\"\n",
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(dir.path())).unwrap();

    // Assert
    assert_eq!(settings.format, OutputFormat::Tree);
    assert!(settings.pretty, "unspecified field keeps default");
    assert_eq!(settings.output, Some(PathBuf::from("/tmp/sitemap.tree")));
}

#[test]
fn given_tilde_output_when_load_then_expanded() {
    // Arrange
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "output = \"~/sitemap.json\"\n").unwrap();

    // Act
    let settings = Settings::load(Some(dir.path())).unwrap();

    // Assert
    let output = settings.output.unwrap();
    assert!(!output.to_string_lossy().starts_with('~'));
}

#[test]
fn given_invalid_toml_when_load_then_config_error() {
    // Arrange
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "format = [unterminated").unwrap();

    // Act
    let err = Settings::load(Some(dir.path())).unwrap_err();

    // Assert
    assert!(err.to_string().contains(".mfnf-sitemap.toml"));
}

#[test]
fn given_unknown_format_when_load_then_config_error() {
    // Arrange
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "format = \"yaml\"\n").unwrap();

    // Act
    let result = Settings::load(Some(dir.path()));

    // Assert
    assert!(result.is_err());
}
