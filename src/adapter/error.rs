use crate::domain::error::{DomainError, ErrorKind};
use serde::Serialize;

/// Error shape handed to callers outside the crate.
///
/// `code` is stable and safe to branch on; `message` is for humans.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: &'static str,
    pub message: String,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::Database => "DATABASE",
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError {
            code: err.kind().code(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct_per_kind() {
        let not_found = ApiError::from(DomainError::NotFound("Bloc 3".to_string()));
        let invalid = ApiError::from(DomainError::InvalidArgument("Bloc must be provided".to_string()));

        assert_eq!(not_found.code, "NOT_FOUND");
        assert_eq!(invalid.code, "INVALID_ARGUMENT");
        assert_eq!(invalid.message, "Invalid argument: Bloc must be provided");
    }

    #[test]
    fn test_serializes_code_and_message() {
        let err = ApiError::from(DomainError::Database("disk I/O error".to_string()));

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "DATABASE");
        assert_eq!(json["message"], "Database error: disk I/O error");
        assert_eq!(json.as_object().map(|fields| fields.len()), Some(2));
    }
}
