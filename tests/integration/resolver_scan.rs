//! Integration tests for symbol resolution over real checkout layouts

use linkback::resolve::{SymbolLocation, SymbolResolver};
use std::fs;
use tempfile::TempDir;

fn checkout(files: &[(&str, &str)]) -> (TempDir, SymbolResolver) {
    let temp_dir = TempDir::new().unwrap();
    for (rel, contents) in files {
        let path = temp_dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }
    let resolver = SymbolResolver::new(temp_dir.path().to_path_buf());
    (temp_dir, resolver)
}

#[test]
fn test_plain_module_beats_package_init() {
    let (_guard, mut resolver) = checkout(&[
        ("pkg/util.py", "def helper():\n    pass\n"),
        ("pkg/util/__init__.py", "def helper():\n    pass\n"),
    ]);

    let location = resolver.resolve("pkg.util", "helper").unwrap();
    assert_eq!(
        location,
        SymbolLocation {
            file_suffix: "pkg/util.py".to_string(),
            line: 1,
        }
    );
}

#[test]
fn test_package_init_fallback() {
    let (_guard, mut resolver) = checkout(&[(
        "pkg/__init__.py",
        "\"\"\"Package doc.\"\"\"\n\nclass Entry:\n    pass\n",
    )]);

    let location = resolver.resolve("pkg", "Entry").unwrap();
    assert_eq!(location.file_suffix, "pkg/__init__.py");
    assert_eq!(location.line, 3);
}

#[test]
fn test_deeply_nested_scope_descent() {
    let source = concat!(
        "class Outer:\n",
        "    class Inner:\n",
        "        def method(self):\n",
        "            pass\n",
        "\n",
        "    def method(self):\n",
        "        pass\n",
    );
    let (_guard, mut resolver) = checkout(&[("deep.py", source)]);

    assert_eq!(resolver.resolve("deep", "Outer.Inner.method").unwrap().line, 3);
    assert_eq!(resolver.resolve("deep", "Outer.method").unwrap().line, 6);
}

#[test]
fn test_sibling_classes_with_same_method_name() {
    let source = concat!(
        "class First:\n",
        "    def run(self):\n",
        "        pass\n",
        "\n",
        "class Second:\n",
        "    def run(self):\n",
        "        pass\n",
    );
    let (_guard, mut resolver) = checkout(&[("twins.py", source)]);

    assert_eq!(resolver.resolve("twins", "First.run").unwrap().line, 2);
    assert_eq!(resolver.resolve("twins", "Second.run").unwrap().line, 6);
}

#[test]
fn test_missing_module_yields_none() {
    let (_guard, mut resolver) = checkout(&[]);
    assert!(resolver.resolve("nowhere", "thing").is_none());
}

#[test]
fn test_unreadable_module_yields_none() {
    let (temp_dir, mut resolver) = checkout(&[]);
    // Invalid UTF-8 makes the file unreadable as text
    fs::write(temp_dir.path().join("binary.py"), [0xff, 0xfe, 0x00, 0x41]).unwrap();

    assert!(resolver.resolve("binary", "thing").is_none());
}

#[test]
fn test_file_contents_cached_for_the_run() {
    let (temp_dir, mut resolver) = checkout(&[("cached.py", "def stable():\n    pass\n")]);

    assert_eq!(resolver.resolve("cached", "stable").unwrap().line, 1);

    // Removing the file does not disturb resolutions within the same run
    fs::remove_file(temp_dir.path().join("cached.py")).unwrap();
    assert_eq!(resolver.resolve("cached", "stable").unwrap().line, 1);
}

#[test]
fn test_negative_probes_cached_for_the_run() {
    let (temp_dir, mut resolver) = checkout(&[]);

    assert!(resolver.resolve("late", "arrival").is_none());

    // A file appearing mid-run is not picked up until the next run
    fs::write(temp_dir.path().join("late.py"), "def arrival():\n    pass\n").unwrap();
    assert!(resolver.resolve("late", "arrival").is_none());
}

#[test]
fn test_dotted_name_must_follow_scopes() {
    let source = concat!(
        "class Shell:\n",
        "    pass\n",
        "\n",
        "def kernel():\n",
        "    pass\n",
    );
    let (_guard, mut resolver) = checkout(&[("layers.py", source)]);

    // kernel exists at module level, not inside Shell
    assert!(resolver.resolve("layers", "Shell.kernel").is_none());
    assert_eq!(resolver.resolve("layers", "kernel").unwrap().line, 4);
}
