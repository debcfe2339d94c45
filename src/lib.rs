//! Linkback: Edit-on-Bitbucket Links for Generated Documentation
//!
//! A documentation-build plugin that annotates generated document trees with
//! links into the project's Bitbucket source browser: one edit link per page
//! and one per documented Python symbol, anchored at its definition line.

pub mod annotate;
pub mod cli;
pub mod config;
pub mod doctree;
pub mod error;
pub mod logging;
pub mod paths;
pub mod protocol;
pub mod resolve;
