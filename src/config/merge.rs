//! Merge rules: registered option defaults, override order.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with every exposed option registered at its default.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("project", super::default_project())?
        .set_default("source_root", super::default_source_root())?
        .set_default("doc_root", super::default_doc_root())?
        .set_default("docstring_label", super::default_docstring_label())?
        .set_default("page_label", super::default_page_label())?
        .set_default("tooltip", super::default_tooltip())?
        .set_default("skip_regex", super::default_skip_regex())
}
