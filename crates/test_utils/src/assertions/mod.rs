// Path: crates/test_utils/src/assertions/mod.rs
//! Assertion utilities for testing

/// Assert that a result is Ok and unwrap it
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(err) => panic!("Expected Ok, got Err: {:?}", err),
        }
    };
}

/// Assert that a result is Err with the given stable error code, and return
/// the error.
#[macro_export]
macro_rules! assert_err_code {
    ($expr:expr, $code:expr) => {
        match $expr {
            Ok(val) => panic!("Expected Err with code {}, got Ok: {:?}", $code, val),
            Err(err) => {
                let code = $crate::__types::error::ErrorCode::code(&err);
                assert_eq!(code, $code, "unexpected error: {}", err);
                err
            }
        }
    };
}
