use anyhow::Result;
use relister::models::display_log::DisplayLog;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_clear_then_append_holds_exactly_those_lines() {
    let mut log = DisplayLog::new();
    log.append("stale from a previous run");

    log.clear();
    assert!(log.is_empty());

    log.append("first");
    log.append("second".to_string());
    log.append("third");

    assert_eq!(log.len(), 3);
    assert_eq!(log.lines(), ["first", "second", "third"]);
}

#[test]
fn test_save_to_writes_lines_in_order() -> Result<()> {
    let temp = tempdir()?;
    let out = temp.path().join("listing.txt");

    let mut log = DisplayLog::new();
    log.append("DIR: /tmp/a/");
    log.append("FILE: /tmp/a/x.txt");
    log.save_to(&out)?;

    assert_eq!(fs::read_to_string(&out)?, "DIR: /tmp/a/\nFILE: /tmp/a/x.txt\n");

    Ok(())
}

#[test]
fn test_save_to_empty_log_writes_empty_file() -> Result<()> {
    let temp = tempdir()?;
    let out = temp.path().join("empty.txt");

    DisplayLog::new().save_to(&out)?;
    assert_eq!(fs::read_to_string(&out)?, "");

    Ok(())
}
