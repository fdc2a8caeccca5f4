//! Integration tests for the writer registry.

use std::io::{self, Write};
use std::sync::Arc;

use writedocx::model::{Block, BlockStyle, Document, Role};
use writedocx::writer::{persist, DocumentWriter, Sink, WriterRegistry};
use writedocx::Error;

/// Writer that emits block roles, one per line.
struct RoleWriter;

impl DocumentWriter for RoleWriter {
    fn supported_extensions(&self) -> &[&str] {
        &["roles", "rl"]
    }

    fn name(&self) -> &str {
        "roles"
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }

    fn write(&self, doc: &Document, sink: &mut dyn Sink) -> io::Result<()> {
        for block in &doc.blocks {
            writeln!(sink, "{}", block.role)?;
        }
        Ok(())
    }
}

/// Writer that always fails.
struct BrokenWriter;

impl DocumentWriter for BrokenWriter {
    fn supported_extensions(&self) -> &[&str] {
        &["broken"]
    }

    fn name(&self) -> &str {
        "broken"
    }

    fn mime_type(&self) -> &'static str {
        "application/octet-stream"
    }

    fn write(&self, _doc: &Document, sink: &mut dyn Sink) -> io::Result<()> {
        sink.write_all(b"partial")?;
        Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
    }
}

fn sample() -> Document {
    let mut doc = Document::new();
    doc.add_block(Block::new(Role::Title, "标题", BlockStyle::default()));
    doc.add_block(Block::new(Role::Subheading, "1. 一", BlockStyle::default()));
    doc.add_block(Block::new(Role::Paragraph, "正文", BlockStyle::default()));
    doc
}

#[test]
fn test_registry_register_custom_writer() {
    let mut registry = WriterRegistry::with_defaults();
    registry.register(Arc::new(RoleWriter));

    assert!(registry.supports("roles"));
    assert!(registry.supports("RL"));
    assert_eq!(registry.get_by_name("ROLES").unwrap().name(), "roles");
    assert!(registry.supported_extensions().contains(&"docx"));
}

#[test]
fn test_set_default_writer() {
    let mut registry = WriterRegistry::with_defaults();
    registry.set_default(Arc::new(RoleWriter));
    assert_eq!(registry.for_filename("article").unwrap().name(), "roles");
    assert_eq!(registry.for_filename("article.docx").unwrap().name(), "docx");
}

#[test]
fn test_persist_custom_writer() {
    let dir = tempfile::tempdir().unwrap();
    let path = persist(&sample(), &RoleWriter, dir.path(), "out.roles").unwrap();
    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "title\nsubheading\nparagraph\n"
    );
}

#[test]
fn test_failed_write_leaves_nothing_behind() {
    let dir = tempfile::tempdir().unwrap();
    let result = persist(&sample(), &BrokenWriter, dir.path(), "out.broken");

    assert!(matches!(result, Err(Error::Storage { .. })));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_failed_write_keeps_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("out.broken"), b"previous").unwrap();

    assert!(persist(&sample(), &BrokenWriter, dir.path(), "out.broken").is_err());
    assert_eq!(
        std::fs::read(dir.path().join("out.broken")).unwrap(),
        b"previous"
    );
}

#[test]
fn test_json_writer_output() {
    let registry = WriterRegistry::with_defaults();
    let writer = registry.get_by_extension("json").unwrap();
    let bytes = writer.to_bytes(&sample()).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["blocks"].as_array().unwrap().len(), 3);
    assert_eq!(value["blocks"][0]["role"], "title");
}

#[test]
fn test_docx_mime_type() {
    let registry = WriterRegistry::with_defaults();
    assert_eq!(
        registry.get_by_extension("docx").unwrap().mime_type(),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
}
