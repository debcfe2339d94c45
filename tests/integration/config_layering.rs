//! Integration tests for layered configuration loading
//!
//! Exercises the full precedence chain against real files and process
//! environment: defaults, global file, workspace file, environment
//! variables, and the host-supplied table.

use crate::integration::test_utils::{with_isolated_env, write_global_config};
use linkback::config::{ConfigLoader, PROJECT_SENTINEL};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults_when_no_sources_present() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    with_isolated_env(&test_dir, || {
        let config = ConfigLoader::load(&workspace).unwrap();

        assert_eq!(config.project, PROJECT_SENTINEL);
        assert_eq!(config.source_root, "lib");
        assert_eq!(config.doc_root, "doc");
        assert_eq!(config.docstring_label, "[bitbucket]");
        assert_eq!(config.page_label, "[edit this page on bitbucket]");
        assert_eq!(config.skip_regex, "_.*");
        assert_eq!(config.logging.level, "info");
    });
}

#[test]
fn test_global_file_applies() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    with_isolated_env(&test_dir, || {
        write_global_config(
            &test_dir,
            "project = \"astropy/astropy\"\ndocstring_label = \"[source]\"\n",
        );

        let config = ConfigLoader::load(&workspace).unwrap();

        assert_eq!(config.project, "astropy/astropy");
        assert_eq!(config.docstring_label, "[source]");
        // Untouched keys keep their defaults
        assert_eq!(config.source_root, "lib");
    });
}

#[test]
fn test_workspace_file_overrides_global() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    with_isolated_env(&test_dir, || {
        write_global_config(
            &test_dir,
            "project = \"global/project\"\ntooltip = \"from the global file\"\n",
        );
        fs::write(
            workspace.join("linkback.toml"),
            "project = \"workspace/project\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load(&workspace).unwrap();

        assert_eq!(config.project, "workspace/project");
        // Keys the workspace file does not set still come from the global file
        assert_eq!(config.tooltip, "from the global file");
    });
}

#[test]
fn test_environment_overrides_files() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    with_isolated_env(&test_dir, || {
        fs::write(
            workspace.join("linkback.toml"),
            "project = \"workspace/project\"\ndoc_root = \"manual\"\n",
        )
        .unwrap();
        std::env::set_var("LINKBACK_PROJECT", "env/project");
        std::env::set_var("LINKBACK_DOC_ROOT", "docs");

        let config = ConfigLoader::load(&workspace);
        std::env::remove_var("LINKBACK_PROJECT");
        std::env::remove_var("LINKBACK_DOC_ROOT");

        let config = config.unwrap();
        assert_eq!(config.project, "env/project");
        assert_eq!(config.doc_root, "docs");
    });
}

#[test]
fn test_nested_logging_key_from_environment() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    with_isolated_env(&test_dir, || {
        std::env::set_var("LINKBACK_LOGGING__LEVEL", "debug");

        let config = ConfigLoader::load(&workspace);
        std::env::remove_var("LINKBACK_LOGGING__LEVEL");

        assert_eq!(config.unwrap().logging.level, "debug");
    });
}

#[test]
fn test_host_table_overrides_environment() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    with_isolated_env(&test_dir, || {
        std::env::set_var("LINKBACK_PROJECT", "env/project");
        let table = serde_json::json!({
            "project": "host/project",
            "logging": { "level": "warn" }
        });

        let config = ConfigLoader::load_with_overrides(&workspace, Some(&table));
        std::env::remove_var("LINKBACK_PROJECT");

        let config = config.unwrap();
        assert_eq!(config.project, "host/project");
        assert_eq!(config.logging.level, "warn");
    });
}

#[test]
fn test_explicit_file_bypasses_layering() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();
    let explicit = workspace.join("ci.toml");
    fs::write(&explicit, "project = \"pinned/project\"\n").unwrap();

    with_isolated_env(&test_dir, || {
        write_global_config(&test_dir, "project = \"global/project\"\n");
        std::env::set_var("LINKBACK_DOC_ROOT", "docs");

        let config = ConfigLoader::load_from_file(&explicit);
        std::env::remove_var("LINKBACK_DOC_ROOT");

        let config = config.unwrap();
        assert_eq!(config.project, "pinned/project");
        // Neither the environment nor the global file participates
        assert_eq!(config.doc_root, "doc");
    });
}
