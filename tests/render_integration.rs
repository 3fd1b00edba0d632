/*!
 * Integration test for rendering and writing a project document
 */

use std::fs;

use mdtree::{render_tree, Config, MarkdownWriter};
use tempfile::tempdir;

#[test]
fn test_render_and_write_document() {
    let parent = tempdir().unwrap();
    let project = parent.path().join("My Project!!@@");
    fs::create_dir_all(project.join("src")).unwrap();
    fs::write(project.join("src").join("index.ts"), "export {};\n").unwrap();
    fs::write(project.join("broken.txt"), [0xc3u8, 0x28]).unwrap();
    let output_dir = tempdir().unwrap();

    let mut config = Config::new(&project);
    config.output_dir = output_dir.path().to_path_buf();
    config.max_depth = 2;
    config.append_errors = true;
    config.validate().unwrap();

    let output = render_tree(&config).unwrap();
    let (path, document) = MarkdownWriter::new(config).write(&output).unwrap();

    let file_name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(file_name.starts_with("My Project_"));
    assert!(file_name.ends_with(".md"));

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, document);
    assert!(written.starts_with("# Project Tree Structure\n\n- broken.txt\n- **src/**\n"));
    assert!(written.contains("    - index.ts\n        ```ts\n        /* src/index.ts */\nexport {};\n\n        ```"));
    assert!(written.contains("### Errors Encountered:\n- Binary or undecodable file skipped: "));
}
