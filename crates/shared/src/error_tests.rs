use super::*;
use rstest::rstest;

#[rstest]
#[case(AppError::NotFound("x".into()), 404, "NOT_FOUND")]
#[case(AppError::Validation("x".into()), 400, "VALIDATION_ERROR")]
#[case(AppError::Conflict("x".into()), 409, "CONFLICT")]
#[case(AppError::Storage("x".into()), 500, "STORAGE_ERROR")]
#[case(AppError::Internal("x".into()), 500, "INTERNAL_ERROR")]
fn test_status_and_error_codes(
    #[case] error: AppError,
    #[case] status: u16,
    #[case] code: &str,
) {
    assert_eq!(error.status_code(), status);
    assert_eq!(error.error_code(), code);
}

#[test]
fn test_client_errors() {
    assert!(AppError::NotFound(String::new()).is_client_error());
    assert!(AppError::Validation(String::new()).is_client_error());
    assert!(AppError::Conflict(String::new()).is_client_error());
    assert!(!AppError::Storage(String::new()).is_client_error());
    assert!(!AppError::Internal(String::new()).is_client_error());
}

#[test]
fn test_app_error_display() {
    assert_eq!(
        format!("{}", AppError::NotFound("classification 42".into())),
        "Not found: classification 42"
    );
    assert_eq!(
        format!("{}", AppError::Validation("msg".into())),
        "Validation error: msg"
    );
    assert_eq!(format!("{}", AppError::Conflict("msg".into())), "Conflict: msg");
    assert_eq!(
        format!("{}", AppError::Storage("msg".into())),
        "Storage error: msg"
    );
    assert_eq!(
        format!("{}", AppError::Internal("msg".into())),
        "Internal error: msg"
    );
}
