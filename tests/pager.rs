use folio::document::Document;
use folio::pager::{DecodePolicy, Pager};
use std::io::Write;
use tempfile::NamedTempFile;

fn numbered_file(lines: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for i in 0..lines {
        writeln!(file, "line {i}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_250_lines_at_100_per_page() {
    let file = numbered_file(250);
    let document = Document::open(file.path()).unwrap();
    let pager = Pager::default();

    let line_count = pager.count_lines(&document).unwrap();
    assert_eq!(line_count, 250);
    assert_eq!(pager.page_count(line_count, 100), 3);

    let first = pager.read_page(&document, 0, 100).unwrap();
    assert_eq!(first.len(), 100);
    assert_eq!(first[0], "line 0\n");
    assert_eq!(first[99], "line 99\n");

    let last = pager.read_page(&document, 2, 100).unwrap();
    assert_eq!(last.len(), 50);
    assert_eq!(last[0], "line 200\n");
    assert_eq!(last[49], "line 249\n");
}

#[test]
fn test_empty_file_is_one_empty_page() {
    let file = NamedTempFile::new().unwrap();
    let document = Document::open(file.path()).unwrap();
    let pager = Pager::default();

    let line_count = pager.count_lines(&document).unwrap();
    assert_eq!(line_count, 0);
    assert_eq!(pager.page_count(line_count, 100), 1);
    assert!(pager.read_page(&document, 0, 100).unwrap().is_empty());
}

#[test]
fn test_pages_reconstruct_the_file() {
    let file = numbered_file(257);
    let document = Document::open(file.path()).unwrap();
    let pager = Pager::default();

    let line_count = pager.count_lines(&document).unwrap();
    let total_pages = pager.page_count(line_count, 50);
    assert_eq!(total_pages, 6);

    let mut reassembled = String::new();
    let mut seen_lines = 0usize;
    for page_index in 0..total_pages {
        let lines = pager.read_page(&document, page_index, 50).unwrap();
        seen_lines += lines.len();
        for line in lines {
            reassembled.push_str(&line);
        }
    }

    let original = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(seen_lines as u64, line_count);
    assert_eq!(reassembled, original);
}

#[test]
fn test_unterminated_tail_round_trips() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "alpha\nbeta\ngamma").unwrap();
    file.flush().unwrap();
    let document = Document::open(file.path()).unwrap();
    let pager = Pager::default();

    assert_eq!(pager.count_lines(&document).unwrap(), 3);
    let lines = pager.read_page(&document, 0, 10).unwrap();
    assert_eq!(lines, vec!["alpha\n", "beta\n", "gamma"]);
}

#[test]
fn test_crlf_terminators_are_preserved() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"one\r\ntwo\r\n").unwrap();
    file.flush().unwrap();
    let document = Document::open(file.path()).unwrap();
    let pager = Pager::default();

    assert_eq!(pager.count_lines(&document).unwrap(), 2);
    let lines = pager.read_page(&document, 0, 10).unwrap();
    assert_eq!(lines, vec!["one\r\n", "two\r\n"]);
}

#[test]
fn test_scattered_invalid_bytes_do_not_change_pagination() {
    let mut file = NamedTempFile::new().unwrap();
    for i in 0..120 {
        if i % 7 == 0 {
            let mut line = format!("garbled {i} ").into_bytes();
            line.extend_from_slice(b"\xff\xfe here\n");
            file.write_all(&line).unwrap();
        } else {
            writeln!(file, "clean {i}").unwrap();
        }
    }
    file.flush().unwrap();
    let document = Document::open(file.path()).unwrap();

    for policy in [DecodePolicy::Replace, DecodePolicy::Skip] {
        let pager = Pager::new(policy);
        let line_count = pager.count_lines(&document).unwrap();
        assert_eq!(line_count, 120);
        assert_eq!(pager.page_count(line_count, 100), 2);
        assert_eq!(pager.read_page(&document, 1, 100).unwrap().len(), 20);
    }
}
