//! # Validation Module
//!
//! Field rules for item payloads, run by the boundary before the core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Decode (serde)                                               │
//! │  └── JSON shape, types of present fields                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── required fields, lengths, price range, SKU pattern                │
//! │  └── ItemPayload ──► NewItem (or every failing field)                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: CatalogService                                               │
//! │  └── existence and SKU uniqueness only                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::validate_sku;
//!
//! assert!(validate_sku("SAM-S24-BLK").is_ok());
//! assert!(validate_sku("sam-s24").is_err());
//! ```

use crate::error::{ValidationError, ValidationErrors};
use crate::money::Money;
use crate::types::{ItemPayload, NewItem};
use crate::{DESCRIPTION_MAX_LEN, DESCRIPTION_MIN_LEN, MAX_PRICE, MIN_PRICE, NAME_MAX_LEN, NAME_MIN_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Payload Validation
// =============================================================================

/// Validates a full item payload and converts it into a [`NewItem`].
///
/// Every field is checked; the error lists all failing fields, not just the
/// first one.
pub fn validate_item(payload: &ItemPayload) -> Result<NewItem, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = collect(&mut errors, validate_name(payload.name.as_deref()));
    let description = collect(&mut errors, validate_description(payload.description.as_deref()));
    let price = collect(&mut errors, validate_price_cents(payload.price_cents));
    let category = collect(&mut errors, validate_category(payload.category.as_deref()));
    let stock_quantity = collect(
        &mut errors,
        validate_quantity("stockQuantity", payload.stock_quantity),
    );
    let sku = collect(
        &mut errors,
        payload
            .sku
            .as_deref()
            .ok_or_else(|| required("sku"))
            .and_then(|sku| validate_sku(sku).map(|()| sku.to_string())),
    );

    match (name, description, price, category, stock_quantity, sku) {
        (Some(name), Some(description), Some(price), Some(category), Some(stock_quantity), Some(sku)) => {
            Ok(NewItem {
                name,
                description,
                price,
                category,
                brand: payload.brand.clone(),
                stock_quantity,
                sku,
                image_url: payload.image_url.clone(),
                active: payload.active,
            })
        }
        _ => Err(errors),
    }
}

/// Validates the quantity of a stock-only update.
///
/// Missing and negative quantities are both rejected.
pub fn validate_stock_quantity(quantity: Option<i64>) -> ValidationResult<u32> {
    validate_quantity("quantity", quantity)
}

fn collect<T>(errors: &mut ValidationErrors, result: ValidationResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

fn required(field: &str) -> ValidationError {
    ValidationError::Required {
        field: field.to_string(),
    }
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name: non-blank, 3-100 characters.
pub fn validate_name(name: Option<&str>) -> ValidationResult<String> {
    validate_text("name", name, NAME_MIN_LEN, NAME_MAX_LEN)
}

/// Validates an item description: non-blank, 10-500 characters.
pub fn validate_description(description: Option<&str>) -> ValidationResult<String> {
    validate_text("description", description, DESCRIPTION_MIN_LEN, DESCRIPTION_MAX_LEN)
}

/// Validates a category: any non-blank text.
pub fn validate_category(category: Option<&str>) -> ValidationResult<String> {
    match category {
        Some(category) if !category.trim().is_empty() => Ok(category.to_string()),
        _ => Err(required("category")),
    }
}

fn validate_text(field: &str, value: Option<&str>, min: usize, max: usize) -> ValidationResult<String> {
    let value = match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Err(required(field)),
    };

    let len = value.chars().count();
    if len < min {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min,
        });
    }
    if len > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be blank
/// - Only uppercase ASCII letters, digits and hyphens
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_sku;
///
/// assert!(validate_sku("DELL-XPS15-2024").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("HAS SPACE").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    if sku.trim().is_empty() {
        return Err(required("sku"));
    }

    if !sku
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only uppercase letters, numbers, and hyphens".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents: required, 0.01 to 999999.99.
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(Some(1)).is_ok());
/// assert!(validate_price_cents(Some(0)).is_err());
/// assert!(validate_price_cents(None).is_err());
/// ```
pub fn validate_price_cents(cents: Option<i64>) -> ValidationResult<Money> {
    let price = Money::from_cents(cents.ok_or_else(|| required("price"))?);

    if price < MIN_PRICE || price > MAX_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: MIN_PRICE.to_string(),
            max: MAX_PRICE.to_string(),
        });
    }

    Ok(price)
}

fn validate_quantity(field: &str, quantity: Option<i64>) -> ValidationResult<u32> {
    let quantity = quantity.ok_or_else(|| required(field))?;

    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    u32::try_from(quantity).map_err(|_| ValidationError::OutOfRange {
        field: field.to_string(),
        min: "0".to_string(),
        max: u32::MAX.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> ItemPayload {
        ItemPayload {
            name: Some("Samsung Galaxy S24".to_string()),
            description: Some("Latest flagship smartphone with camera system".to_string()),
            price_cents: Some(89_999),
            category: Some("Electronics".to_string()),
            brand: Some("Samsung".to_string()),
            stock_quantity: Some(25),
            sku: Some("SAM-S24-BLK".to_string()),
            image_url: None,
            active: None,
        }
    }

    #[test]
    fn test_valid_payload_converts() {
        let item = validate_item(&valid_payload()).unwrap();
        assert_eq!(item.name, "Samsung Galaxy S24");
        assert_eq!(item.price, Money::from_cents(89_999));
        assert_eq!(item.stock_quantity, 25);
        assert_eq!(item.brand.as_deref(), Some("Samsung"));
        assert_eq!(item.active, None);
    }

    #[test]
    fn test_empty_payload_reports_every_required_field() {
        let errors = validate_item(&ItemPayload::default()).unwrap_err();
        for field in ["name", "description", "price", "category", "stockQuantity", "sku"] {
            assert!(
                matches!(errors.get(field), Some(ValidationError::Required { .. })),
                "expected {field} to be required"
            );
        }
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn test_optional_fields_stay_optional() {
        let payload = ItemPayload {
            brand: None,
            image_url: None,
            active: Some(false),
            ..valid_payload()
        };
        let item = validate_item(&payload).unwrap();
        assert!(item.brand.is_none());
        assert_eq!(item.active, Some(false));
    }

    #[test]
    fn test_validate_name_bounds() {
        assert!(validate_name(Some("Pen")).is_ok());
        assert!(matches!(validate_name(Some("Pn")), Err(ValidationError::TooShort { min: 3, .. })));
        assert!(matches!(validate_name(Some("   ")), Err(ValidationError::Required { .. })));
        assert!(validate_name(Some(&"A".repeat(100))).is_ok());
        assert!(matches!(
            validate_name(Some(&"A".repeat(101))),
            Err(ValidationError::TooLong { max: 100, .. })
        ));
    }

    #[test]
    fn test_validate_description_bounds() {
        assert!(validate_description(Some("0123456789")).is_ok());
        assert!(validate_description(Some("too short")).is_err());
        assert!(validate_description(Some(&"x".repeat(501))).is_err());
        assert!(validate_description(None).is_err());
    }

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("ABC-1").is_ok());
        assert!(validate_sku("123").is_ok());

        assert!(validate_sku("").is_err());
        assert!(validate_sku("abc-1").is_err());
        assert!(validate_sku("ABC_1").is_err());
        assert!(validate_sku("ABC 1").is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert_eq!(validate_price_cents(Some(1)).unwrap(), MIN_PRICE);
        assert_eq!(validate_price_cents(Some(99_999_999)).unwrap(), MAX_PRICE);

        assert!(validate_price_cents(Some(0)).is_err());
        assert!(validate_price_cents(Some(-100)).is_err());
        assert!(validate_price_cents(Some(100_000_000)).is_err());
        assert!(matches!(validate_price_cents(None), Err(ValidationError::Required { .. })));
    }

    #[test]
    fn test_validate_stock_quantity() {
        assert_eq!(validate_stock_quantity(Some(0)).unwrap(), 0);
        assert_eq!(validate_stock_quantity(Some(40)).unwrap(), 40);

        assert!(matches!(validate_stock_quantity(Some(-1)), Err(ValidationError::Negative { .. })));
        assert!(matches!(validate_stock_quantity(None), Err(ValidationError::Required { .. })));
        assert!(matches!(
            validate_stock_quantity(Some(i64::from(u32::MAX) + 1)),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_invalid_fields_are_all_reported() {
        let payload = ItemPayload {
            name: Some("X".to_string()),
            sku: Some("lower".to_string()),
            stock_quantity: Some(-5),
            ..valid_payload()
        };
        let errors = validate_item(&payload).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.get("name").is_some());
        assert!(errors.get("sku").is_some());
        assert!(errors.get("stockQuantity").is_some());
    }
}
