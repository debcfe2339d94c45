//! Page-edit pass: one "[edit this page]" paragraph per document tree.

use super::EditOptions;
use crate::doctree::{Document, Node};
use crate::paths;
use regex::Regex;
use std::path::Path;
use tracing::debug;

/// Append the page-edit link unless the document's path under `srcdir`
/// matches the skip pattern. Returns whether a link was added.
pub(super) fn add_page_link(
    options: &EditOptions,
    skip: &Regex,
    document: &mut Document,
    srcdir: &Path,
) -> bool {
    let doc_path = match paths::relative_doc_path(&document.source, srcdir) {
        Ok(path) => path,
        Err(err) => {
            debug!(
                source = %document.source.display(),
                error = %err,
                "cannot relativize document path"
            );
            return false;
        }
    };

    if skip.is_match(&doc_path) {
        debug!(doc_path = %doc_path, "document matches skip pattern");
        return false;
    }

    let uri = format!("{}{}{}", options.url, options.doc_root, doc_path);
    let paragraph = Node::Paragraph {
        classes: vec!["edit-on-bitbucket-para".to_string()],
        children: vec![Node::Only {
            expr: "html".to_string(),
            children: vec![Node::Reference {
                refuri: uri,
                reftitle: Some(options.tooltip.clone()),
                classes: Vec::new(),
                children: vec![Node::Inline {
                    classes: vec!["edit-on-bitbucket".to_string()],
                    children: vec![Node::text(options.page_label.clone())],
                }],
            }],
        }],
    };

    append_to_edit_section(document, paragraph);
    true
}

/// Reuse a trailing edit-section node when the tree already has one,
/// otherwise close the document with a fresh section.
fn append_to_edit_section(document: &mut Document, paragraph: Node) {
    if let Some(last) = document.children.last_mut() {
        if last.has_class("edit-section") {
            if let Some(children) = last.children_mut() {
                children.push(paragraph);
                return;
            }
        }
    }

    document.children.push(Node::Section {
        classes: vec!["edit-section".to_string()],
        children: vec![paragraph],
    });
}
