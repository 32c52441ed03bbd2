//! Tests for descriptor input parsing.

use crate::cli::input;
use std::fs;

#[test]
fn parse_lines_with_labels_comments_and_blanks() {
    let text = "# sources\nhttps://a.test/\tSite A\n\n  https://b.test/?x=1  \nhttps://c.test/\t \n";
    let d = input::parse_lines(text);
    assert_eq!(d.len(), 3);
    assert_eq!(d[0].id, "https://a.test/");
    assert_eq!(d[0].label.as_deref(), Some("Site A"));
    assert_eq!(d[1].id, "https://b.test/?x=1");
    assert!(d[1].label.is_none());
    assert_eq!(d[2].id, "https://c.test/");
    assert!(d[2].label.is_none());
}

#[test]
fn collect_merges_urls_and_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("batch.json");
    fs::write(
        &path,
        r#"[{"id": "https://j1.test/", "label": "J1"}, {"id": "https://j2.test/"}]"#,
    )
    .unwrap();
    let d = input::collect(&["https://pos.test/".to_string(), " ".to_string()], Some(path.as_path())).unwrap();
    let ids: Vec<&str> = d.iter().map(|x| x.id.as_str()).collect();
    assert_eq!(ids, vec!["https://pos.test/", "https://j1.test/", "https://j2.test/"]);
    assert_eq!(d[1].label(), "J1");
}

#[test]
fn collect_reports_missing_file() {
    let err = input::collect(&[], Some(std::path::Path::new("/nonexistent/pagefetch.txt")));
    assert!(err.is_err());
}
