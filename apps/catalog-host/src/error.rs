//! # API Error Type
//!
//! Unified error type for host commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Command Host                       │
//! │                                                                         │
//! │  Request line                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Decode failed? ───────────── BAD_REQUEST (400) ────────┐              │
//! │       │                                                  │              │
//! │       ▼                                                  │              │
//! │  ValidationErrors? ────────── VALIDATION_ERROR (400) ───┤              │
//! │       │                       + fieldErrors              │              │
//! │       ▼                                                  ▼              │
//! │  CatalogError::NotFound ───── NOT_FOUND (404) ──────► ErrorResponse    │
//! │  CatalogError::DuplicateSku ─ DUPLICATE_SKU (409) ──►  (stdout line)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Success ──────────────────────────────────────────► ApiResponse       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use catalog_core::{CatalogError, ValidationError, ValidationErrors};

/// API error returned from host commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Item not found with id: 7"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,

    /// Field name to message, for validation failures only
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub field_errors: Option<BTreeMap<String, String>>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Item does not exist (404)
    NotFound,

    /// SKU already used by another item (409)
    DuplicateSku,

    /// Payload fields failed validation (400)
    ValidationError,

    /// Request could not be understood (400)
    BadRequest,

    /// Host failure (500)
    Internal,
}

impl ErrorCode {
    /// The HTTP status an equivalent REST endpoint would answer with.
    pub fn status(self) -> u16 {
        match self {
            ErrorCode::NotFound => 404,
            ErrorCode::DuplicateSku => 409,
            ErrorCode::ValidationError | ErrorCode::BadRequest => 400,
            ErrorCode::Internal => 500,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            field_errors: None,
        }
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    pub fn status(&self) -> u16 {
        self.code.status()
    }
}

/// Converts catalog errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let code = match err {
            CatalogError::NotFound(_) => ErrorCode::NotFound,
            CatalogError::DuplicateSku(_) => ErrorCode::DuplicateSku,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts payload validation failures, keeping every failing field.
impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors
            .into_iter()
            .map(|error| (error.field().to_string(), error.to_string()))
            .collect();

        ApiError {
            field_errors: Some(field_errors),
            ..ApiError::new(ErrorCode::ValidationError, "Validation failed")
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ValidationErrors::from(error).into()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Error Response
// =============================================================================

/// The line written back for a failed request.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ErrorResponse {
    pub success: bool,
    pub status: u16,
    #[serde(flatten)]
    pub error: ApiError,
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,
}

impl From<ApiError> for ErrorResponse {
    fn from(error: ApiError) -> Self {
        ErrorResponse {
            success: false,
            status: error.status(),
            error,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::ItemId;

    #[test]
    fn test_catalog_errors_map_to_codes() {
        let not_found = ApiError::from(CatalogError::NotFound(ItemId::new(7)));
        assert_eq!(not_found.code, ErrorCode::NotFound);
        assert_eq!(not_found.status(), 404);
        assert_eq!(not_found.message, "Item not found with id: 7");

        let duplicate = ApiError::from(CatalogError::DuplicateSku("ABC-1".to_string()));
        assert_eq!(duplicate.code, ErrorCode::DuplicateSku);
        assert_eq!(duplicate.status(), 409);
    }

    #[test]
    fn test_validation_errors_keep_every_field() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::Required {
            field: "name".to_string(),
        });
        errors.push(ValidationError::Negative {
            field: "stockQuantity".to_string(),
        });

        let api_error = ApiError::from(errors);
        assert_eq!(api_error.code, ErrorCode::ValidationError);
        let field_errors = api_error.field_errors.unwrap();
        assert_eq!(field_errors["name"], "name is required");
        assert_eq!(field_errors["stockQuantity"], "stockQuantity cannot be negative");
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::from(ApiError::bad_request("Invalid quantity value"));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["status"], 400);
        assert_eq!(json["code"], "BAD_REQUEST");
        assert_eq!(json["message"], "Invalid quantity value");
        assert!(json.get("fieldErrors").is_none());
    }

    #[test]
    fn test_error_bindings_match_the_wire() {
        let decl = ErrorResponse::decl();
        assert!(decl.contains("status: number"));
        assert!(decl.contains("timestamp: string"));

        assert!(ApiError::decl().contains("fieldErrors?: "));
        assert!(ErrorCode::decl().contains("\"DUPLICATE_SKU\""));
    }
}
