//! Static Python symbol resolution
//!
//! Maps a (module, fully-qualified name) pair from a signature node to the
//! defining source file and line inside the project checkout, by scanning the
//! module file for `def` / `async def` / `class` headers. Dotted names descend
//! scope by scope: each part must appear as a header directly inside the body
//! of the previous one. Everything that cannot be resolved this way, for any
//! reason, yields `None`.

use regex::Regex;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Where a symbol is defined, relative to the repository source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolLocation {
    /// File path suffix with forward slashes, e.g. `mypkg/core.py`
    pub file_suffix: String,
    /// 1-based line of the definition header
    pub line: usize,
}

/// Best-effort resolver over one project checkout.
///
/// File contents are cached for the duration of a run, including negative
/// results for missing modules.
pub struct SymbolResolver {
    source_dir: PathBuf,
    cache: HashMap<PathBuf, Option<String>>,
    header: Regex,
}

impl SymbolResolver {
    /// Create a resolver rooted at the directory the source root maps to on disk.
    pub fn new(source_dir: PathBuf) -> Self {
        Self {
            source_dir,
            cache: HashMap::new(),
            // Captures the name defined by a Python definition header.
            header: Regex::new(r"^(?:async\s+def|def|class)\s+(\w+)").unwrap(),
        }
    }

    /// Resolve `fullname` inside `module` to a file suffix and definition line.
    ///
    /// Candidate files are `<module path>.py`, then `<module path>/__init__.py`
    /// for package modules; the first one that reads successfully is scanned.
    pub fn resolve(&mut self, module: &str, fullname: &str) -> Option<SymbolLocation> {
        if module.is_empty() || fullname.is_empty() {
            return None;
        }

        let rel = module.replace('.', "/");
        let (file_suffix, path) = self.module_path(&rel)?;
        let text = self.cache.get(&path)?.as_deref()?;
        let line = find_definition_line(&self.header, text, fullname)?;

        Some(SymbolLocation { file_suffix, line })
    }

    /// First loadable candidate file for a module path.
    ///
    /// On success the module text is cached under the returned path.
    fn module_path(&mut self, rel: &str) -> Option<(String, PathBuf)> {
        let candidates = [format!("{}.py", rel), format!("{}/__init__.py", rel)];

        for suffix in candidates {
            let relative = Path::new(&suffix);
            if relative.components().any(|c| !matches!(c, Component::Normal(_))) {
                debug!(module = rel, "candidate path leaves the source root");
                continue;
            }
            let path = self.source_dir.join(relative);
            if self.probe(&path) {
                return Some((suffix, path));
            }
        }

        None
    }

    /// Read a file into the cache if not yet attempted; report whether it has text.
    fn probe(&mut self, path: &Path) -> bool {
        if !self.cache.contains_key(path) {
            let text = std::fs::read_to_string(path).ok();
            if text.is_none() {
                debug!(file = %path.display(), "module file not readable");
            }
            self.cache.insert(path.to_path_buf(), text);
        }
        self.cache.get(path).map(|t| t.is_some()).unwrap_or(false)
    }
}

/// Scan `text` for the definition header of a dotted `fullname`.
///
/// Top-level definitions must sit in column 0. After each matched part the
/// scan continues inside that scope: the first statement fixes the body
/// indent, deeper lines are skipped, and a dedent to the enclosing level ends
/// the search. Returns the 1-based line of the final header.
fn find_definition_line(header: &Regex, text: &str, fullname: &str) -> Option<usize> {
    let mut parts = fullname.split('.');
    let mut target = parts.next()?;
    if target.is_empty() {
        return None;
    }

    let mut parent_indent: Option<usize> = None;
    let mut body_indent: Option<usize> = None;

    for (index, line) in text.lines().enumerate() {
        let stripped = line.trim_start();
        if stripped.is_empty() || stripped.starts_with('#') {
            continue;
        }
        let indent = line.len() - stripped.len();

        match parent_indent {
            None => {
                if indent != 0 {
                    continue;
                }
            }
            Some(enclosing) => {
                if indent <= enclosing {
                    // Scope closed before the target appeared.
                    return None;
                }
                match body_indent {
                    None => body_indent = Some(indent),
                    Some(body) => {
                        if indent > body {
                            continue;
                        }
                        if indent < body {
                            return None;
                        }
                    }
                }
            }
        }

        if let Some(captures) = header.captures(stripped) {
            if &captures[1] == target {
                match parts.next() {
                    None => return Some(index + 1),
                    Some(next) => {
                        if next.is_empty() {
                            return None;
                        }
                        target = next;
                        parent_indent = Some(indent);
                        body_indent = None;
                    }
                }
            }
        }
    }

    None
}
