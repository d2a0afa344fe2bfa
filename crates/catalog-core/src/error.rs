//! # Error Types
//!
//! Domain-specific error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  ├── CatalogError      - NotFound / DuplicateSku from the service      │
//! │  ├── ValidationError   - One field failed its rule                     │
//! │  └── ValidationErrors  - Every failing field of one payload            │
//! │                                                                         │
//! │  catalog-host errors (app)                                             │
//! │  └── ApiError          - What callers of the host see (serialized)     │
//! │                                                                         │
//! │  Flow: ValidationErrors ──┐                                            │
//! │        CatalogError ──────┴──► ApiError ──► JSON response line         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation errors never reach the service: the boundary rejects the payload
//! before any store access, so a `CatalogError` always means the fields were
//! well-formed but a catalog rule said no.

use thiserror::Error;

use crate::types::ItemId;

// =============================================================================
// Catalog Error
// =============================================================================

/// Failures raised by the catalog service.
///
/// Both kinds are terminal for the operation in progress and leave the store
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The operation referenced an id with no stored item.
    #[error("Item not found with id: {0}")]
    NotFound(ItemId),

    /// Create or update would give two items the same SKU (case-insensitive).
    #[error("Item with SKU '{0}' already exists")]
    DuplicateSku(String),
}

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Validation Error
// =============================================================================

/// A single field that failed its rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value is outside its accepted range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    /// Value must not be below zero.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Value does not match the expected shape.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Name of the field this error is about.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::Negative { field }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Every field that failed validation for one payload, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed for {} field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        ValidationErrors::default()
    }

    /// Records a failing field.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Returns the error recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field() == field)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        ValidationErrors {
            errors: vec![error],
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_messages() {
        assert_eq!(
            CatalogError::NotFound(ItemId::new(42)).to_string(),
            "Item not found with id: 42"
        );
        assert_eq!(
            CatalogError::DuplicateSku("ABC-1".to_string()).to_string(),
            "Item with SKU 'ABC-1' already exists"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "sku".to_string(),
        };
        assert_eq!(err.to_string(), "sku is required");

        let err = ValidationError::TooShort {
            field: "name".to_string(),
            min: 3,
        };
        assert_eq!(err.to_string(), "name must be at least 3 characters");

        let err = ValidationError::OutOfRange {
            field: "price".to_string(),
            min: "0.01".to_string(),
            max: "999999.99".to_string(),
        };
        assert_eq!(err.to_string(), "price must be between 0.01 and 999999.99");
    }

    #[test]
    fn test_validation_errors_lookup() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.push(ValidationError::Required {
            field: "name".to_string(),
        });
        errors.push(ValidationError::Negative {
            field: "stockQuantity".to_string(),
        });

        assert_eq!(errors.len(), 2);
        assert!(errors.get("name").is_some());
        assert!(errors.get("sku").is_none());
        assert_eq!(errors.to_string(), "validation failed for 2 field(s)");
    }
}
