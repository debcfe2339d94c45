//! Docstring pass: per-symbol edit links with definition-line anchors.

use super::EditOptions;
use crate::doctree::{Document, Node};
use crate::resolve::SymbolResolver;
use std::collections::HashSet;
use tracing::debug;

/// Walk every described-object node and attach one edit link per resolvable
/// signature. Returns the (linked, skipped) counts.
pub(super) fn add_docstring_links(
    options: &EditOptions,
    resolver: &mut SymbolResolver,
    document: &mut Document,
) -> (usize, usize) {
    let mut linked = 0;
    let mut skipped = 0;

    visit_desc_nodes(&mut document.children, &mut |domain, children| {
        if domain != "py" {
            return;
        }

        // One link per fullname within a single described object.
        let mut seen: HashSet<String> = HashSet::new();
        for child in children.iter_mut() {
            let Node::DescSignature {
                module,
                fullname,
                children: signature_children,
            } = child
            else {
                continue;
            };
            let Some(module) = module.as_deref().filter(|m| !m.is_empty()) else {
                continue;
            };
            let Some(fullname) = fullname.as_deref().filter(|f| !f.is_empty()) else {
                skipped += 1;
                continue;
            };
            if !seen.insert(fullname.to_string()) {
                continue;
            }

            match resolver.resolve(module, fullname) {
                Some(location) => {
                    let uri = format!(
                        "{}{}{}#cl-{}",
                        options.url, options.source_root, location.file_suffix, location.line
                    );
                    signature_children.push(docstring_link(options, uri));
                    linked += 1;
                }
                None => {
                    debug!(module, fullname, "symbol not resolved; signature left bare");
                    skipped += 1;
                }
            }
        }
    });

    (linked, skipped)
}

/// HTML-only reference trailing the signature, spaced off with a hard space.
fn docstring_link(options: &EditOptions, uri: String) -> Node {
    Node::Only {
        expr: "html".to_string(),
        children: vec![Node::Reference {
            refuri: uri,
            reftitle: Some(options.tooltip.clone()),
            classes: Vec::new(),
            children: vec![Node::Inline {
                classes: vec![
                    "edit-on-bitbucket".to_string(),
                    "viewcode-link".to_string(),
                ],
                children: vec![
                    Node::raw_html("&nbsp;"),
                    Node::text(options.docstring_label.clone()),
                ],
            }],
        }],
    }
}

/// Depth-first visit of every described-object node, nested ones included.
fn visit_desc_nodes<F>(nodes: &mut Vec<Node>, visit: &mut F)
where
    F: FnMut(&str, &mut Vec<Node>),
{
    for node in nodes.iter_mut() {
        if let Node::Desc { domain, children } = node {
            visit(domain, children);
            visit_desc_nodes(children, visit);
        } else if let Some(children) = node.children_mut() {
            visit_desc_nodes(children, visit);
        }
    }
}
