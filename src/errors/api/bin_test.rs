#[cfg(test)]
mod tests {
    use crate::errors::{ApiError, BinError, InternalError, ValidationError};
    use sea_orm::DbErr;

    #[test]
    fn test_database_error_converts_to_internal_server_error() {
        let db_err = DbErr::RecordNotFound("test".to_string());
        let api_err = ApiError::from_internal_error(InternalError::database("get_bin", db_err));

        assert_eq!(api_err.status_code(), 500);
        assert_eq!(api_err.message(), "Internal server error");
    }

    #[test]
    fn test_transaction_error_converts_to_internal_server_error() {
        let db_err = DbErr::Custom("locked".to_string());
        let api_err = ApiError::from(InternalError::transaction("create_bin", db_err));

        assert_eq!(api_err.status_code(), 500);
    }

    #[test]
    fn test_parse_error_does_not_leak_details() {
        let api_err = ApiError::from(InternalError::parse("bin items", "expected value at line 1"));

        assert_eq!(api_err.status_code(), 500);
        assert!(!api_err.message().contains("line 1"));
    }

    #[test]
    fn test_not_found_converts_to_404() {
        let api_err = ApiError::from(InternalError::from(BinError::NotFound("abc".to_string())));

        assert_eq!(api_err.status_code(), 404);
        assert_eq!(api_err.message(), "Bin not found");
    }

    #[test]
    fn test_conflict_converts_to_409() {
        let api_err = ApiError::from(InternalError::from(BinError::Conflict("abc".to_string())));

        assert_eq!(api_err.status_code(), 409);
        assert!(matches!(api_err, ApiError::Conflict(_)));
    }

    #[test]
    fn test_validation_error_joins_messages() {
        let err = ValidationError::new(vec![
            "Bin name cannot be empty.".to_string(),
            "Quantity must be at least 1.".to_string(),
        ]);
        let api_err = ApiError::from(err);

        assert_eq!(api_err.status_code(), 400);
        assert_eq!(
            api_err.message(),
            "Bin name cannot be empty., Quantity must be at least 1."
        );
    }

    #[test]
    fn test_error_envelope_marks_failure() {
        match ApiError::not_found("Bin not found") {
            ApiError::NotFound(json) => {
                assert!(!json.0.success);
                assert_eq!(json.0.error, "Bin not found");
            }
            other => panic!("Expected NotFound, got: {:?}", other),
        }
    }
}
