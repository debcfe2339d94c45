//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::PluginError;

/// Map domain errors to a string for CLI output.
/// Keeps the entry point thin; extend with stable categories if needed.
pub fn map_error(e: &PluginError) -> String {
    e.to_string()
}
