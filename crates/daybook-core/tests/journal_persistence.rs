use std::fs;
use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::NaiveDate;
use tempfile::{tempdir, TempDir};

use daybook_core::crypto::encrypt;
use daybook_core::storage::parse_date_key;
use daybook_core::{DaybookError, Journal};

fn date(value: &str) -> NaiveDate {
    parse_date_key(value).expect("valid date")
}

fn journal_path(prefix: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().expect("tempdir should be available");
    let path = dir.path().join(format!("{}.daybook", prefix));
    (dir, path)
}

#[test]
fn test_create_save_reopen_round_trip() {
    let (_dir, path) = journal_path("round_trip");

    let mut journal = Journal::create(&path, "pw").expect("create should succeed");
    journal
        .add_entry(date("2024-03-01"), "hello")
        .expect("add should succeed");
    journal.save().expect("save should succeed");

    let reopened = Journal::open(&path, "pw").expect("open should succeed");
    assert!(reopened.test_password());
    assert_eq!(
        reopened.get_entry(date("2024-03-01")).expect("decrypt").as_deref(),
        Some("hello")
    );
}

#[test]
fn test_create_produces_empty_file() {
    let (_dir, path) = journal_path("empty");

    let journal = Journal::create(&path, "pw").expect("create should succeed");
    assert!(path.exists());
    assert_eq!(fs::read(&path).expect("read").len(), 0);
    assert_eq!(journal.first_entry_date(), None);
    assert_eq!(journal.last_entry_date(), None);
    assert!(journal.test_password());

    let reopened = Journal::open(&path, "anything").expect("empty journal opens");
    assert!(reopened.is_empty());
    assert!(reopened.test_password());
}

#[test]
fn test_create_overwrites_existing_file() {
    let (_dir, path) = journal_path("overwrite");
    fs::write(&path, "2024-01-01=old\n").expect("seed file");

    let journal = Journal::create(&path, "pw").expect("create should replace file");
    assert!(journal.is_empty());
    assert_eq!(fs::read(&path).expect("read").len(), 0);
}

#[test]
fn test_create_read_only_file_fails() {
    let (_dir, path) = journal_path("read_only_create");
    fs::write(&path, "").expect("seed file");
    let mut permissions = fs::metadata(&path).expect("metadata").permissions();
    permissions.set_readonly(true);
    fs::set_permissions(&path, permissions).expect("set permissions");

    let result = Journal::create(&path, "pw");
    assert!(matches!(result, Err(DaybookError::ReadOnly(_))));
    assert!(result.unwrap_err().is_io());
}

#[test]
fn test_create_in_missing_directory_fails() {
    let (dir, _path) = journal_path("unused");
    let path = dir.path().join("no").join("such").join("dir.daybook");

    let result = Journal::create(&path, "pw");
    assert!(matches!(result, Err(DaybookError::Io { .. })));
}

#[test]
fn test_open_missing_file_fails() {
    let (_dir, path) = journal_path("missing");

    let result = Journal::open(&path, "pw");
    assert!(matches!(result, Err(DaybookError::JournalNotFound(_))));
}

#[test]
fn test_open_read_only_file_fails() {
    let (_dir, path) = journal_path("read_only_open");
    fs::write(&path, "").expect("seed file");
    let mut permissions = fs::metadata(&path).expect("metadata").permissions();
    permissions.set_readonly(true);
    fs::set_permissions(&path, permissions).expect("set permissions");

    let result = Journal::open(&path, "pw");
    assert!(matches!(result, Err(DaybookError::ReadOnly(_))));
}

#[test]
fn test_open_does_not_verify_password() {
    let (_dir, path) = journal_path("wrong_password");

    let mut journal = Journal::create(&path, "correct-password").expect("create");
    journal.add_entry(date("2024-01-01"), "secret").expect("add");
    journal.save().expect("save");

    let wrong = Journal::open(&path, "wrong-password").expect("open succeeds regardless");
    assert!(!wrong.test_password());
    assert!(matches!(
        wrong.get_entry(date("2024-01-01")),
        Err(DaybookError::DecryptionFailed)
    ));
}

#[test]
fn test_open_rejects_malformed_key() {
    let (_dir, path) = journal_path("bad_key");
    let blob = encrypt("text", "pw").expect("encrypt");
    fs::write(&path, format!("2024-1-5={}\n", blob)).expect("seed file");

    let result = Journal::open(&path, "pw");
    match result {
        Err(err @ DaybookError::Load(_)) => {
            assert!(err.is_io());
            assert!(err.to_string().contains("2024-1-5"));
        }
        other => panic!("expected load error, got {:?}", other),
    }
}

#[test]
fn test_open_rejects_invalid_base64() {
    let (_dir, path) = journal_path("bad_base64");
    fs::write(&path, "2024-01-05=***not-base64***\n").expect("seed file");

    let result = Journal::open(&path, "pw");
    assert!(matches!(result, Err(DaybookError::Load(_))));
}

#[test]
fn test_open_rejects_garbage_line() {
    let (_dir, path) = journal_path("garbage");
    fs::write(&path, "this is not a journal\n").expect("seed file");

    let result = Journal::open(&path, "pw");
    assert!(matches!(result, Err(DaybookError::Load(_))));
}

#[test]
fn test_short_blob_is_malformed_on_read() {
    let (_dir, path) = journal_path("short_blob");
    let short = STANDARD.encode([0u8; 20]);
    fs::write(&path, format!("2024-01-05={}\n", short)).expect("seed file");

    let journal = Journal::open(&path, "pw").expect("short blob still loads");
    assert!(journal.has_date(date("2024-01-05")));
    assert!(matches!(
        journal.get_entry(date("2024-01-05")),
        Err(DaybookError::MalformedBlob(_))
    ));
    assert!(!journal.test_password());
}

#[test]
fn test_opens_file_with_properties_header_and_escapes() {
    let (_dir, path) = journal_path("properties");
    let blob = encrypt("from an older writer", "pw").expect("encrypt");
    let escaped = blob.as_str().replace('=', "\\=");
    let contents = format!("#Mon Mar 04 09:15:00 EST 2024\n2024-03-04={}\n", escaped);
    fs::write(&path, contents).expect("seed file");

    let journal = Journal::open(&path, "pw").expect("open");
    assert!(journal.test_password());
    assert_eq!(
        journal.get_entry(date("2024-03-04")).expect("decrypt").as_deref(),
        Some("from an older writer")
    );
}

#[test]
fn test_unsaved_changes_not_on_disk() {
    let (_dir, path) = journal_path("unsaved");

    let mut journal = Journal::create(&path, "pw").expect("create");
    journal.add_entry(date("2024-01-01"), "draft").expect("add");

    let reopened = Journal::open(&path, "pw").expect("open");
    assert!(!reopened.has_date(date("2024-01-01")));
}

#[test]
fn test_blank_entry_removed_after_save() {
    let (_dir, path) = journal_path("blank_removal");

    let mut journal = Journal::create(&path, "pw").expect("create");
    journal.add_entry(date("2024-01-01"), "keep").expect("add");
    journal.add_entry(date("2024-01-02"), "drop").expect("add");
    journal.save().expect("save");

    let mut journal = Journal::open(&path, "pw").expect("open");
    journal.add_entry(date("2024-01-02"), "   ").expect("blank");
    journal.save().expect("save");

    let reopened = Journal::open(&path, "pw").expect("open");
    let dates: Vec<_> = reopened.entry_dates().collect();
    assert_eq!(dates, vec![date("2024-01-01")]);
}

#[test]
fn test_save_replaces_file_atomically() {
    let (dir, path) = journal_path("atomic");

    let mut journal = Journal::create(&path, "pw").expect("create");
    for day in 1..=5 {
        let key = NaiveDate::from_ymd_opt(2024, 1, day).expect("valid date");
        journal.add_entry(key, &format!("day {}", day)).expect("add");
    }
    journal.save().expect("first save");
    journal.remove_entry(date("2024-01-03"));
    journal.save().expect("second save");

    let contents = fs::read_to_string(&path).expect("read");
    assert_eq!(contents.lines().count(), 4);
    assert!(!contents.contains("2024-01-03"));

    let leftovers = fs::read_dir(dir.path())
        .expect("read dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .count();
    assert_eq!(leftovers, 0);
}

#[test]
fn test_save_failure_reports_io_error() {
    let (dir, path) = journal_path("vanishing_dir");
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).expect("create dir");
    let path = nested.join(path.file_name().expect("file name"));

    let mut journal = Journal::create(&path, "pw").expect("create");
    journal.add_entry(date("2024-01-01"), "text").expect("add");
    fs::remove_dir_all(&nested).expect("remove dir");

    let result = journal.save();
    assert!(matches!(result, Err(DaybookError::Io { .. })));
}

#[test]
fn test_entries_survive_with_distinct_ciphertexts() {
    let (_dir, path) = journal_path("distinct");

    let mut journal = Journal::create(&path, "pw").expect("create");
    journal.add_entry(date("2024-01-01"), "same").expect("add");
    journal.add_entry(date("2024-01-02"), "same").expect("add");
    journal.save().expect("save");

    let contents = fs::read_to_string(&path).expect("read");
    let values: Vec<&str> = contents
        .lines()
        .map(|line| line.split_once('=').expect("separator").1)
        .collect();
    assert_eq!(values.len(), 2);
    assert_ne!(values[0], values[1]);
}
