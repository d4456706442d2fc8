use projdoc::{generate, generate_documentation, ProjdocBuilder};
use std::fs;
use tempfile::tempdir;
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("demo");
    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join("dist")).unwrap();
    fs::write(root.join("package.json"), "{}").unwrap();
    fs::write(root.join("src/index.ts"), "export const x = 1;").unwrap();
    fs::write(root.join("src/notes.txt"), "plain").unwrap();
    fs::write(root.join("dist/index.js"), "compiled").unwrap();
    fs::write(root.join(".env"), "SECRET=1").unwrap();

    let options = ProjdocBuilder::new(&root).build();
    let text = generate_documentation(&options).unwrap();

    assert!(text.starts_with("Project Path: demo\n\nSource Tree:\n\n```\n"));
    assert!(text.contains("├── package.json\n└── src\n    ├── index.ts\n    └── notes.txt\n```\n"));
    let root_label = root.display().to_string();
    for (file, body) in [
        ("package.json", "```json\n{}\n```"),
        ("src/index.ts", "```typescript\nexport const x = 1;\n```"),
        ("src/notes.txt", "plain"),
    ] {
        let segment = format!("`{}/{}`:\n\n{}\n", root_label, file, body);
        assert_eq!(text.matches(&segment).count(), 1, "missing {}", file);
    }
    assert!(!text.contains("index.js"));
    assert!(!text.contains("compiled"));
    assert!(!text.contains("SECRET"));
}
#[test]
fn every_file_is_dumped_once() {
    let dir = tempdir().unwrap();
    for d in ["a/b/c", "x"] {
        fs::create_dir_all(dir.path().join(d)).unwrap();
    }
    let files = ["top.txt", "a/one.py", "a/b/two.md", "a/b/c/three.js", "x/four"];
    for f in files {
        fs::write(dir.path().join(f), f).unwrap();
    }
    let doc = generate(&ProjdocBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(doc.files.len(), files.len());
    for f in files {
        let hits = doc
            .files
            .iter()
            .filter(|e| e.path == dir.path().join(f))
            .count();
        assert_eq!(hits, 1, "{} should appear once", f);
    }
}
#[test]
fn output_is_reproducible() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("z/y")).unwrap();
    fs::write(dir.path().join("z/y/file.rs"), "fn f() {}").unwrap();
    fs::write(dir.path().join("b.md"), "# b").unwrap();
    fs::write(dir.path().join("A.md"), "# A").unwrap();
    let options = ProjdocBuilder::new(dir.path()).build();
    let first = generate(&options).unwrap();
    let second = generate(&options).unwrap();
    assert_eq!(first.tree, second.tree);
    assert_eq!(
        first.tree,
        vec!["├── A.md", "├── b.md", "└── z", "    └── y", "        └── file.rs"]
    );
}
