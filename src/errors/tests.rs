//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.mk".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.mk".to_string()));
    let error = Error::new(
        ErrorImpl::NonAsciiByte { byte: 0xE2 },
        pos.clone(),
    );

    assert_eq!(error.get_position(), &pos);
    assert_eq!(error.get_error_name(), "NonAsciiByte");
}

#[test]
fn test_io_error() {
    let error = Error::new(
        ErrorImpl::Io {
            path: "main.mk".to_string(),
            message: "permission denied".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "Io");
    assert_eq!(error.get_position().1.as_str(), "<null>");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0, Rc::new("test.mk".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::NonAsciiByte { byte: 0xC3 },
        Position(0, Rc::new("test.mk".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("0xC3")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "$".to_string(),
        },
        Position(3, Rc::new("test.mk".to_string())),
    );

    assert_eq!(error.to_string(), "unrecognised token: \"$\" at test.mk:3");
    assert_eq!(
        ErrorImpl::NonAsciiByte { byte: 0x80 }.to_string(),
        "non-ASCII byte: 0x80"
    );
}
