//! Host callback contract
//!
//! One build request arrives as JSON on stdin: a context block plus the
//! document trees produced so far. The annotated documents go back out as a
//! JSON array on stdout. Logging stays on stderr so the response channel is
//! never polluted.

use crate::annotate::Annotator;
use crate::config::ConfigLoader;
use crate::doctree::Document;
use crate::error::PluginError;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Renderers this plugin produces links for. Non-HTML output still passes
/// through unchanged because every link sits under an HTML-only node.
pub fn renderer_supported(renderer: &str) -> bool {
    renderer == "html"
}

/// One build request from the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRequest {
    #[serde(default)]
    pub context: BuildContext,
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// Build context: where the checkout and the documentation sources live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildContext {
    /// Project checkout root; falls back to the command line `--root`
    #[serde(default)]
    pub root: Option<PathBuf>,
    /// Documentation source directory; defaults to `<root>/<doc_root>`
    #[serde(default)]
    pub srcdir: Option<PathBuf>,
    /// Renderer the host is producing
    #[serde(default = "default_renderer")]
    pub renderer: String,
    /// Host-side configuration table for this plugin, highest precedence
    #[serde(default)]
    pub config: Option<serde_json::Value>,
}

fn default_renderer() -> String {
    "html".to_string()
}

impl Default for BuildContext {
    fn default() -> Self {
        Self {
            root: None,
            srcdir: None,
            renderer: default_renderer(),
            config: None,
        }
    }
}

/// Options resolved from the command line before the request is read.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Fallback project root when the request carries none
    pub root: PathBuf,
    /// Explicit configuration file bypassing layered loading
    pub config_path: Option<PathBuf>,
}

/// Totals across one run, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub documents: usize,
    pub pages_linked: usize,
    pub symbols_linked: usize,
    pub symbols_skipped: usize,
}

/// Run one annotation pass: read the request, annotate every document, write
/// the documents back out.
pub fn run<R: Read, W: Write>(
    input: R,
    mut output: W,
    options: &RunOptions,
) -> Result<RunSummary, PluginError> {
    let request: BuildRequest =
        serde_json::from_reader(input).map_err(PluginError::MalformedRequest)?;

    let root = request
        .context
        .root
        .clone()
        .unwrap_or_else(|| options.root.clone());

    let config = match &options.config_path {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load_with_overrides(&root, request.context.config.as_ref())?,
    };

    let srcdir = request.context.srcdir.clone().unwrap_or_else(|| {
        root.join(config.effective_doc_root().trim_end_matches('/'))
    });

    if !renderer_supported(&request.context.renderer) {
        debug!(
            renderer = %request.context.renderer,
            "renderer is not html; annotating anyway under only-html nodes"
        );
    }

    let mut annotator = Annotator::new(&config, &root)?;

    let mut documents = request.documents;
    let mut summary = RunSummary {
        documents: documents.len(),
        ..RunSummary::default()
    };
    for document in &mut documents {
        let outcome = annotator.annotate(document, &srcdir);
        if outcome.page_linked {
            summary.pages_linked += 1;
        }
        summary.symbols_linked += outcome.symbols_linked;
        summary.symbols_skipped += outcome.symbols_skipped;
    }

    serde_json::to_writer(&mut output, &documents).map_err(PluginError::EncodeResponse)?;
    output.flush()?;

    info!(
        documents = summary.documents,
        pages_linked = summary.pages_linked,
        symbols_linked = summary.symbols_linked,
        symbols_skipped = summary.symbols_skipped,
        "annotation pass complete"
    );

    Ok(summary)
}

/// Run over the process's standard streams.
pub fn run_stdio(options: &RunOptions) -> Result<RunSummary, PluginError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(stdin.lock(), stdout.lock(), options)
}
