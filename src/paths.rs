//! Path canonicalization and relative-path utilities

use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize and normalize the project root path
///
/// This function:
/// 1. Canonicalizes the path (resolves symlinks, `..`, `.`)
/// 2. Normalizes Unicode to NFC
/// 3. Removes trailing slashes (except root)
pub fn canonicalize_root(path: &Path) -> Result<PathBuf, crate::error::ConfigError> {
    // Use dunce for cross-platform canonicalization
    let canonical = dunce::canonicalize(path).map_err(|e| {
        crate::error::ConfigError::InvalidPath(format!("Failed to canonicalize project root: {}", e))
    })?;

    let path_str = canonical.to_string_lossy();

    // Normalize Unicode to NFC (Canonical Composition)
    let normalized: String = path_str.nfc().collect();

    let mut normalized_path = PathBuf::from(normalized);

    // Remove trailing slashes (except root)
    if normalized_path.as_os_str().len() > 1 {
        let mut path_str = normalized_path.to_string_lossy().to_string();
        while path_str.ends_with('/') || path_str.ends_with('\\') {
            path_str.pop();
        }
        normalized_path = PathBuf::from(path_str);
    }

    Ok(normalized_path)
}

/// Compute the path of a document source relative to the docs source directory.
///
/// Purely lexical, like the relative-path step a documentation builder performs:
/// no symlink resolution, `..` segments produced when the source lies outside
/// the base. Relative inputs are resolved against the current directory first.
/// The result uses forward slashes and is NFC-normalized.
pub fn relative_doc_path(source: &Path, srcdir: &Path) -> std::io::Result<String> {
    let source = absolute_lexical(source)?;
    let base = absolute_lexical(srcdir)?;

    let src_parts: Vec<Component> = source.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    let mut shared = 0;
    while shared < src_parts.len()
        && shared < base_parts.len()
        && src_parts[shared] == base_parts[shared]
    {
        shared += 1;
    }

    let mut segments: Vec<String> = Vec::new();
    for _ in shared..base_parts.len() {
        segments.push("..".to_string());
    }
    for part in &src_parts[shared..] {
        segments.push(part.as_os_str().to_string_lossy().into_owned());
    }
    if segments.is_empty() {
        segments.push(".".to_string());
    }

    Ok(segments.join("/").nfc().collect())
}

/// Resolve `.` and `..` segments lexically, without touching the filesystem.
fn absolute_lexical(path: &Path) -> std::io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }

    Ok(resolved)
}
