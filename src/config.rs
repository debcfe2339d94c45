//! Configuration System
//!
//! Registered options with defaults, layered loading, and validation for the
//! edit-link annotator. Options mirror the closed key set the plugin exposes
//! to its host; the project identifier keeps a sentinel default that fails
//! validation when left unset.

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use regex::Regex;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Sentinel default for the project identifier. A run with this value fails.
pub const PROJECT_SENTINEL: &str = "REQUIRED";

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkbackConfig {
    /// Bitbucket project in the form "username/projectname" (required)
    #[serde(default = "default_project")]
    pub project: String,

    /// Location of the Python package root within the source tree
    #[serde(default = "default_source_root")]
    pub source_root: String,

    /// Location of the documentation source within the source tree
    #[serde(default = "default_doc_root")]
    pub doc_root: String,

    /// Phrase displayed in docstring edit links
    #[serde(default = "default_docstring_label")]
    pub docstring_label: String,

    /// Phrase displayed in page edit links
    #[serde(default = "default_page_label")]
    pub page_label: String,

    /// Tooltip displayed on edit links
    #[serde(default = "default_tooltip")]
    pub tooltip: String,

    /// Documents whose relative path starts with a match get no page link
    #[serde(default = "default_skip_regex")]
    pub skip_regex: String,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_project() -> String {
    PROJECT_SENTINEL.to_string()
}

fn default_source_root() -> String {
    "lib".to_string()
}

fn default_doc_root() -> String {
    "doc".to_string()
}

fn default_docstring_label() -> String {
    "[bitbucket]".to_string()
}

fn default_page_label() -> String {
    "[edit this page on bitbucket]".to_string()
}

fn default_tooltip() -> String {
    "Push the Edit button on the next page".to_string()
}

fn default_skip_regex() -> String {
    "_.*".to_string()
}

impl Default for LinkbackConfig {
    fn default() -> Self {
        Self {
            project: default_project(),
            source_root: default_source_root(),
            doc_root: default_doc_root(),
            docstring_label: default_docstring_label(),
            page_label: default_page_label(),
            tooltip: default_tooltip(),
            skip_regex: default_skip_regex(),
            logging: LoggingConfig::default(),
        }
    }
}

impl LinkbackConfig {
    /// Source root with a trailing slash; an empty root stays empty.
    pub fn effective_source_root(&self) -> String {
        ensure_trailing_slash(&self.source_root)
    }

    /// Doc root with a trailing slash; an empty root stays empty.
    pub fn effective_doc_root(&self) -> String {
        ensure_trailing_slash(&self.doc_root)
    }

    /// Compile the skip pattern, anchored at the start of the document path.
    pub fn compiled_skip_pattern(&self) -> Result<Regex, ConfigError> {
        Regex::new(&format!("^(?:{})", self.skip_regex)).map_err(|e| {
            ConfigError::InvalidSkipPattern {
                pattern: self.skip_regex.clone(),
                message: e.to_string(),
            }
        })
    }

    /// Validate the configuration for an annotation run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project == PROJECT_SENTINEL {
            return Err(ConfigError::ProjectNotSet);
        }
        self.compiled_skip_pattern()?;
        Ok(())
    }
}

fn ensure_trailing_slash(root: &str) -> String {
    if root.is_empty() || root.ends_with('/') {
        root.to_string()
    } else {
        format!("{}/", root)
    }
}
