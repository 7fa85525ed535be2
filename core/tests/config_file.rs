mod common;

use std::io::Write;

use diagbuf_core::config::{load_from_path, load_from_str};
use diagbuf_core::BufferError;
use pretty_assertions::assert_eq;

#[test]
fn file_config_builds_a_buffer() {
    common::init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "name = \"container-starts\"\ncapacity = 3\nretention_secs = 120"
    )
    .unwrap();

    let cfg = load_from_path(file.path()).unwrap();
    let b = cfg.build::<&str>().unwrap();
    for v in ["a", "b", "c", "d"] {
        b.add(v);
    }

    assert_eq!(b.name(), "container-starts");
    assert_eq!(b.retention().as_secs(), 120);
    assert_eq!(b.snapshot(), vec!["b", "c", "d"]);
}

#[test]
fn negative_capacity_is_invalid_argument() {
    let cfg = load_from_str("capacity = -1").unwrap();
    let err = cfg.build::<u32>().unwrap_err();
    assert!(matches!(err, BufferError::InvalidArgument(_)));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_from_path(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, BufferError::Io { .. }));
}
