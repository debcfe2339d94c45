//! CLI route: run context for the default annotation pass.
//! Dispatches to the protocol layer; no annotation logic here.

use crate::error::PluginError;
use crate::paths;
use crate::protocol::{self, RunOptions, RunSummary};
use std::path::PathBuf;

/// Runtime context for one annotation pass over the standard streams.
/// Built from the project root and optional config path; the layered
/// configuration itself is loaded inside the pass, after the request
/// arrives, so host-table overrides can participate.
pub struct RunContext {
    root: PathBuf,
    config_path: Option<PathBuf>,
}

impl RunContext {
    /// Create the run context from the command line's root and config path.
    pub fn new(root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, PluginError> {
        let root = paths::canonicalize_root(&root)?;
        Ok(Self { root, config_path })
    }

    /// Root the annotation pass will fall back to.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Read the build request from stdin, annotate, and respond on stdout.
    pub fn run(&self) -> Result<RunSummary, PluginError> {
        let options = RunOptions {
            root: self.root.clone(),
            config_path: self.config_path.clone(),
        };
        protocol::run_stdio(&options)
    }
}
