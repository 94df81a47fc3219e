// Integration tests for the outbound delegation helpers

use std::process;

use folioterm::launch;

#[test]
fn test_mailto_url_round_trip_of_form_fields() {
    let url = launch::mailto_url(
        "Jane Doe",
        "jane@example.com",
        "Interested in a data project.\nSecond line.",
    );
    assert!(url.starts_with("mailto:ariranalyst@gmail.com?"));
    assert!(url.contains("subject=Message%20from%20Jane%20Doe"));
    assert!(url.contains("body=Name%3A%20Jane%20Doe"));
    assert!(url.contains("Second%20line."));
    // A mailto URL has no business containing raw spaces or newlines.
    assert!(url.chars().all(|c| !c.is_whitespace()));
}

#[test]
fn test_resume_export_writes_the_document() {
    let path = std::env::temp_dir().join(format!("folioterm_resume_{}.txt", process::id()));
    let bytes = launch::export_resume(&path).expect("export failed");
    let written = std::fs::read_to_string(&path).expect("read back failed");
    assert_eq!(bytes, written.len());
    assert!(written.contains("Ari R"));
    assert!(written.contains("EDUCATION"));
    assert!(written.contains("PROJECTS"));
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_resume_export_to_bad_path_reports_io_error() {
    let path = std::env::temp_dir().join("no_such_dir_folioterm").join("resume.txt");
    assert!(launch::export_resume(&path).is_err());
}
