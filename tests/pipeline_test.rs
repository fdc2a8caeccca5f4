//! Integration tests for the formatting pipeline.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use writedocx::{Error, FormatJob, Formatter, ParseOptions, Role};

/// Read `word/document.xml` out of a written DOCX file.
fn document_xml(path: &Path) -> String {
    let file = File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name("word/document.xml").unwrap();
    let mut xml = String::new();
    entry.read_to_string(&mut xml).unwrap();
    xml
}

const SCENARIO_A: &str = "## 我的文章\n\n这是第一段，内容详细。\n\n1.1 引言\n\n这是引言段落。";

#[test]
fn test_scenario_a_blocks() {
    let doc = Formatter::new("unused").format(SCENARIO_A).unwrap();

    let roles: Vec<Role> = doc.blocks.iter().map(|b| b.role).collect();
    assert_eq!(
        roles,
        vec![Role::Title, Role::Paragraph, Role::Subheading, Role::Paragraph]
    );
    assert_eq!(doc.blocks[0].text, "我的文章");
    assert_eq!(doc.blocks[2].text, "1.1 引言");
}

#[test]
fn test_scenario_a_docx() {
    let dir = tempfile::tempdir().unwrap();
    let path = Formatter::new(dir.path())
        .render(SCENARIO_A, "article.docx")
        .unwrap();

    assert!(path.is_absolute());
    assert_eq!(path.file_name().unwrap(), "article.docx");

    let xml = document_xml(&path);
    let title = xml.find("我的文章").unwrap();
    let first = xml.find("这是第一段，内容详细。").unwrap();
    let heading = xml.find("1.1 引言").unwrap();
    let last = xml.find("这是引言段落。").unwrap();
    assert!(title < first && first < heading && heading < last);

    assert!(!xml.contains("##"));
    assert!(xml.contains("w:val=\"36\""));
    assert!(xml.contains("w:val=\"28\""));
    assert!(xml.contains("w:val=\"center\""));
    assert!(xml.contains("w:after=\"480\""));
    assert!(xml.contains("w:before=\"320\""));
    assert!(xml.contains("w:after=\"160\""));
    assert!(xml.contains("w:firstLine=\"475\""));
    assert!(xml.contains("w:line=\"360\""));
}

#[test]
fn test_scenario_b_title_only() {
    let doc = Formatter::new("unused").format("只有标题").unwrap();
    assert_eq!(doc.block_count(), 1);
    assert_eq!(doc.blocks[0].role, Role::Title);
    assert_eq!(doc.metadata.title.as_deref(), Some("只有标题"));
}

#[test]
fn test_scenario_c_emphasis() {
    let doc = Formatter::new("unused")
        .format("*标题*\n**加粗正文**")
        .unwrap();
    assert_eq!(doc.blocks[0].role, Role::Title);
    assert_eq!(doc.blocks[0].text, "标题");
    assert_eq!(doc.blocks[1].role, Role::Paragraph);
    assert_eq!(doc.blocks[1].text, "加粗正文");
    assert!(!doc.blocks[1].style.bold);
}

#[test]
fn test_scenario_d_empty_content_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = Formatter::new(dir.path()).render("", "empty.docx").unwrap();

    assert!(path.exists());
    let xml = document_xml(&path);
    assert!(!xml.contains("<w:t"));
}

#[test]
fn test_strict_mode_rejects_blank_content() {
    let dir = tempfile::tempdir().unwrap();
    let formatter = Formatter::new(dir.path()).with_parse_options(ParseOptions::new().strict());

    let result = formatter.render("\n\n##\n   \n", "blank.docx");
    assert!(matches!(result, Err(Error::MalformedInput(_))));
    assert!(!dir.path().join("blank.docx").exists());
}

#[test]
fn test_unbalanced_markup_line_is_kept_in_strict_mode() {
    let formatter = Formatter::new("unused").with_parse_options(ParseOptions::new().strict());
    let doc = formatter.format("\n**\n").unwrap();
    assert_eq!(doc.blocks[0].text, "**");
}

#[test]
fn test_cjk_compatibility_ideographs_survive() {
    let dir = tempfile::tempdir().unwrap();
    let formatter = Formatter::new(dir.path());
    let content = "标题\n\u{F900}\u{F91D}正文";

    let doc = formatter.format(content).unwrap();
    assert_eq!(doc.blocks[1].text, "\u{F900}\u{F91D}正文");

    let path = formatter.render(content, "compat.docx").unwrap();
    assert!(document_xml(&path).contains("\u{F900}\u{F91D}正文"));
}

#[test]
fn test_block_count_matches_non_blank_lines() {
    let text = "标题\n\n1. 一\n正文一\n   \n2、二\n正文二\n## \n";
    let doc = Formatter::new("unused").format(text).unwrap();
    assert_eq!(doc.block_count(), 5);
    assert_eq!(doc.blocks_with_role(Role::Title).count(), 1);
    assert_eq!(doc.blocks_with_role(Role::Subheading).count(), 2);
}

#[test]
fn test_first_line_numbered_is_title() {
    let doc = Formatter::new("unused").format("1. 开篇\n2. 第二节").unwrap();
    assert_eq!(doc.blocks[0].role, Role::Title);
    assert_eq!(doc.blocks[1].role, Role::Subheading);
}

#[test]
fn test_output_dir_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let path = Formatter::new(&nested).render("标题", "x.docx").unwrap();
    assert!(path.starts_with(nested.canonicalize().unwrap()));
}

#[test]
fn test_output_dir_is_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let err = Formatter::new(&blocker)
        .render("标题", "x.docx")
        .unwrap_err();
    assert!(err.is_storage());
}

#[test]
fn test_invalid_filenames() {
    let dir = tempfile::tempdir().unwrap();
    let formatter = Formatter::new(dir.path());

    for name in ["", "..", "../escape.docx", "sub/dir.docx"] {
        let result = formatter.render("标题", name);
        assert!(
            matches!(result, Err(Error::InvalidFilename(_))),
            "{:?} should be rejected",
            name
        );
    }
}

#[test]
fn test_no_temp_files_left_behind() {
    let dir = tempfile::tempdir().unwrap();
    Formatter::new(dir.path()).render("标题\n正文", "a.docx").unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.docx".to_string()]);
}

#[test]
fn test_overwrite_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let formatter = Formatter::new(dir.path());
    formatter.render("第一版", "a.docx").unwrap();
    let path = formatter.render("第二版", "a.docx").unwrap();

    let xml = document_xml(&path);
    assert!(xml.contains("第二版"));
    assert!(!xml.contains("第一版"));
}

#[test]
fn test_render_json_and_text_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let formatter = Formatter::new(dir.path());

    let json_path = formatter.render(SCENARIO_A, "a.json").unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(json["blocks"][2]["role"], "subheading");
    assert_eq!(json["metadata"]["title"], "我的文章");

    let text_path = formatter.render(SCENARIO_A, "a.txt").unwrap();
    let text = std::fs::read_to_string(text_path).unwrap();
    assert!(text.starts_with("我的文章\n"));
}

#[test]
fn test_render_with_stats() {
    let dir = tempfile::tempdir().unwrap();
    let result = Formatter::new(dir.path())
        .render_with_stats(SCENARIO_A, "a.docx")
        .unwrap();

    assert_eq!(result.stats.line_count, 7);
    assert_eq!(result.stats.blank_count, 3);
    assert_eq!(result.stats.subheading_count, 1);
    assert_eq!(result.stats.paragraph_count, 2);
    assert_eq!(result.metadata.title.as_deref(), Some("我的文章"));
}

#[test]
fn test_render_batch_keeps_order() {
    let dir = tempfile::tempdir().unwrap();
    let jobs: Vec<FormatJob> = (0..8)
        .map(|i| FormatJob::new(format!("标题{}\n正文", i), format!("doc_{}.docx", i)))
        .collect();

    for parallel in [true, false] {
        let results = Formatter::new(dir.path())
            .with_parallel(parallel)
            .render_batch(&jobs);

        assert_eq!(results.len(), jobs.len());
        for (i, result) in results.iter().enumerate() {
            let path = result.as_ref().unwrap();
            assert_eq!(
                path.file_name().unwrap().to_string_lossy(),
                format!("doc_{}.docx", i)
            );
        }
    }
}

#[test]
fn test_render_batch_reports_failures_per_job() {
    let dir = tempfile::tempdir().unwrap();
    let jobs = vec![
        FormatJob::new("标题", "ok.docx"),
        FormatJob::new("标题", "bad/name.docx"),
    ];
    let results = Formatter::new(dir.path()).render_batch(&jobs);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(Error::InvalidFilename(_))));
}

#[test]
fn test_render_batch_rejects_duplicate_filenames() {
    let dir = tempfile::tempdir().unwrap();
    let jobs = vec![
        FormatJob::new("第一篇", "x.docx"),
        FormatJob::new("第二篇", "x.docx"),
        FormatJob::new("第三篇", "y.docx"),
    ];

    for parallel in [true, false] {
        let results = Formatter::new(dir.path())
            .with_parallel(parallel)
            .render_batch(&jobs);

        let first = results[0].as_ref().unwrap();
        assert!(document_xml(first).contains("第一篇"));
        assert!(matches!(&results[1], Err(Error::DuplicateFilename(name)) if name == "x.docx"));
        assert!(results[2].is_ok());
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
}
