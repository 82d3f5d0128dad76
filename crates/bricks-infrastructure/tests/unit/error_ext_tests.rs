//! Error Extension Tests

use bricks_domain::Error;
use bricks_infrastructure::error_ext::ErrorContext;
use std::io;

fn failing_io() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "file not found"))
}

#[test]
fn test_context_wraps_error_with_message() {
    let error = failing_io().context("Reading bricks.toml").unwrap_err();
    match &error {
        Error::Configuration { message, source } => {
            assert!(message.starts_with("Reading bricks.toml"));
            assert!(message.contains("file not found"));
            assert!(source.is_some());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
    assert_eq!(error.key(), "config.invalid");
}

#[test]
fn test_with_context_is_lazy() {
    let mut evaluated = false;
    let ok: Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| {
            evaluated = true;
            "never used"
        })
        .unwrap();
    assert_eq!(value, 1);
    assert!(!evaluated);
}

#[test]
fn test_io_context_marks_io_failures() {
    let error = failing_io().io_context("Writing config").unwrap_err();
    assert!(error.to_string().contains("(I/O)"));
}
