//! Integration tests for national code validation.
//!
//! These tests validate:
//! - Separator handling (hyphen, space, absent, mixed)
//! - No trimming of surrounding whitespace
//! - Lenient default for all-zero groups and the opt-in strict check
//! - Field-level max length

use ir_localflavor::national_code::validate;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use ir_localflavor::{
    FieldError, NationalCode, NationalCodeField, NationalCodeValidator, ValidationError, Validator,
};

#[test]
fn test_matching_inputs_returned_unchanged() {
    let valid = [
        "123-456789-0",
        "123 456789 0",
        "1234567890",
        "123-456789 0",
        "123 456789-0",
        "123456789-0",
        "123-4567890",
    ];
    for input in valid {
        assert_eq!(
            validate(Some(input)),
            Ok(Some(input.to_string())),
            "{:?} should be accepted unchanged",
            input
        );
    }
}

#[test]
fn test_all_zero_groups_accepted_by_default() {
    assert_eq!(
        validate(Some("000-000000-0")),
        Ok(Some("000-000000-0".to_string()))
    );
}

#[test]
fn test_surrounding_whitespace_rejected() {
    for input in [" 123-456789-0", "123-456789-0 ", "\t1234567890"] {
        assert!(validate(Some(input)).is_err(), "{:?} should be rejected", input);
    }
}

#[test]
fn test_wrong_grouping_rejected() {
    let invalid = [
        "12-3456789-0",
        "1234-56789-0",
        "123-456789-",
        "123-45678-90",
        "123456789",
        "12345678901",
        "123--456789-0",
        "123.456789.0",
        "abc-defghi-j",
    ];
    for input in invalid {
        let result = validate(Some(input));
        assert!(
            matches!(result, Err(ValidationError::InvalidFormat(_))),
            "{:?} should be rejected, got {:?}",
            input,
            result
        );
    }
}

#[test]
fn test_empty_values_pass_through() {
    assert_eq!(validate(None), Ok(None));
    assert_eq!(validate(Some("")), Ok(None));
}

#[test]
fn test_error_message_describes_format() {
    let err = validate(Some("nope")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Enter a valid IR. National Code in XXX-XXXXXX-X format."
    );
}

#[test]
fn test_value_object_groups() {
    let code = NationalCode::new("123 456789-0").unwrap();
    assert_eq!(code.groups(), ("123", "456789", "0"));
    assert_eq!(code.digits(), "1234567890");
    assert_eq!(code.to_string(), "123 456789-0");
}

#[test]
fn test_strict_validator_rejects_zero_groups() {
    let strict = NationalCodeValidator::new().with_zero_group_check(true);
    assert!(strict.validate("000-000000-0").is_err());
    assert!(strict.validate("000-123456-7").is_err());
    assert!(strict.validate("123-456789-1").is_ok());

    let lenient = NationalCodeValidator::new();
    assert!(lenient.validate("000-000000-0").is_ok());
}

#[test]
fn test_field_max_length_counts_trimmed_input() {
    let field = NationalCodeField::national_code();
    assert_eq!(
        field.clean(Some("123-456789-01")),
        Err(FieldError::TooLong { max: 12, actual: 13 })
    );
    assert!(field.clean(Some("123-456789-0")).is_ok());

    // Within the limit once trimmed, but the pattern still sees the space.
    assert!(matches!(
        field.clean(Some("123-456789-0 ")),
        Err(FieldError::Invalid(ValidationError::InvalidFormat(_)))
    ));
}

#[test]
fn test_required_field_rejects_whitespace_as_missing() {
    let field = NationalCodeField::national_code().required(true);
    assert_eq!(field.clean(Some(" ")), Err(FieldError::Required));
    assert_eq!(field.clean(Some("\t \n")), Err(FieldError::Required));
}

#[test]
fn test_optional_field_validates_whitespace_raw() {
    let field = NationalCodeField::national_code();
    assert!(matches!(
        field.clean(Some(" ")),
        Err(FieldError::Invalid(_))
    ));
    assert_eq!(field.clean(Some("")), Ok(None));
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_rejection_logs_do_not_contain_the_code() {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let strict = NationalCodeValidator::new().with_zero_group_check(true);
        assert!(validate(Some("987-654321-01")).is_err());
        assert!(strict.validate("987-000000-1").is_err());
    });

    let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("rejected national code"), "logs: {}", logs);
    assert!(!logs.contains("654321"), "logs: {}", logs);
    assert!(!logs.contains("987"), "logs: {}", logs);
}

#[test]
fn test_concurrent_validation() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let input = format!("123-45678{}-0", i);
                validate(Some(&input))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
}
