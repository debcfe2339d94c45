//! Tree annotation: the per-document edit-link passes
//!
//! An `Annotator` is constructed once per run from validated configuration
//! and invoked once per document. Construction is the only fallible step;
//! both passes degrade per item and never abort the run.

mod page;
mod symbols;

use crate::config::LinkbackConfig;
use crate::doctree::Document;
use crate::error::ConfigError;
use crate::resolve::SymbolResolver;
use regex::Regex;
use std::path::Path;
use tracing::debug;

/// Repository host; the URL scheme is Bitbucket's Mercurial "tip" browser.
const BASE_URL: &str = "http://bitbucket.org/";

/// Validated, normalized options for one annotation run.
struct EditOptions {
    /// `http://bitbucket.org/<project>/src/tip/`
    url: String,
    source_root: String,
    doc_root: String,
    docstring_label: String,
    page_label: String,
    tooltip: String,
}

/// Per-document outcome, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotateSummary {
    pub page_linked: bool,
    pub symbols_linked: usize,
    pub symbols_skipped: usize,
}

/// Applies both annotation passes to documents of one build.
pub struct Annotator {
    options: EditOptions,
    skip: Regex,
    resolver: SymbolResolver,
}

impl Annotator {
    /// Validate configuration and build the annotator for one run.
    ///
    /// Fails when the project identifier is still the sentinel or the skip
    /// pattern does not compile. `project_root` is the checkout the source
    /// root is resolved under.
    pub fn new(config: &LinkbackConfig, project_root: &Path) -> Result<Self, ConfigError> {
        config.validate()?;
        let skip = config.compiled_skip_pattern()?;

        let source_root = config.effective_source_root();
        let scan_root = project_root.join(source_root.trim_end_matches('/'));

        Ok(Self {
            options: EditOptions {
                url: format!("{}{}/src/tip/", BASE_URL, config.project),
                source_root,
                doc_root: config.effective_doc_root(),
                docstring_label: config.docstring_label.clone(),
                page_label: config.page_label.clone(),
                tooltip: config.tooltip.clone(),
            },
            skip,
            resolver: SymbolResolver::new(scan_root),
        })
    }

    /// Annotate one document in place.
    pub fn annotate(&mut self, document: &mut Document, srcdir: &Path) -> AnnotateSummary {
        let page_linked = page::add_page_link(&self.options, &self.skip, document, srcdir);
        let (symbols_linked, symbols_skipped) =
            symbols::add_docstring_links(&self.options, &mut self.resolver, document);

        debug!(
            source = %document.source.display(),
            page_linked,
            symbols_linked,
            symbols_skipped,
            "document annotated"
        );

        AnnotateSummary {
            page_linked,
            symbols_linked,
            symbols_skipped,
        }
    }
}
