use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use urlaudit_app::input::{parse_work_items, read_work_items, InputError};
use urlaudit_core::{Mode, WorkItem};

#[test]
fn status_rows_need_only_a_url() {
    let csv = "https://a.test/one\n  /two  ,\n\n/three,/ignored\n";
    let items = parse_work_items(csv.as_bytes(), Mode::StatusCheck).unwrap();

    assert_eq!(
        items,
        vec![
            WorkItem::new(0, "https://a.test/one", None),
            WorkItem::new(1, "/two", None),
            WorkItem::new(2, "/three", Some("/ignored".to_string())),
        ]
    );
}

#[test]
fn redirect_rows_carry_expectation() {
    let csv = "/old,/new\n/legacy, https://b.test/landing \n";
    let items = parse_work_items(csv.as_bytes(), Mode::RedirectCheck).unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].expectation(), "/new");
    assert_eq!(items[1].index, 1);
    assert_eq!(items[1].expectation(), "https://b.test/landing");
}

#[test]
fn redirect_row_without_expectation_is_rejected() {
    let csv = "/old,/new\n/lonely\n";
    let err = parse_work_items(csv.as_bytes(), Mode::RedirectCheck).unwrap_err();

    match err {
        InputError::MissingExpectation { line, url } => {
            assert_eq!(line, 2);
            assert_eq!(url, "/lonely");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn row_without_url_is_rejected() {
    let csv = "/a\n,/b\n";
    let err = parse_work_items(csv.as_bytes(), Mode::StatusCheck).unwrap_err();
    assert!(matches!(err, InputError::MissingUrl { line: 2 }));
}

#[test]
fn missing_file_is_reported_with_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.csv");

    let err = read_work_items(&path, Mode::StatusCheck).unwrap_err();
    assert!(matches!(err, InputError::Open { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn reads_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("urls.csv");
    fs::write(&path, "/a\n/b\n").unwrap();

    let items = read_work_items(&path, Mode::StatusCheck).unwrap();
    let targets: Vec<&str> = items.iter().map(|i| i.target.as_str()).collect();
    assert_eq!(targets, vec!["/a", "/b"]);
}
