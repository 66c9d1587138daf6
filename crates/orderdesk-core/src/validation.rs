//! # Validation Module
//!
//! Field-constraint checks invoked before a record is persisted.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (forms)                                         │
//! │  ├── Basic format checks (empty fields, numeric parsing)               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                       │
//! │  └── Fail-fast, fixed check order, first failing rule wins             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store (SQLite)                                               │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── CHECK (stock_quantity >= 0)                                       │
//! │  └── Foreign key constraints                                           │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use orderdesk_core::validation::validate_client;
//! use orderdesk_core::Client;
//!
//! let client = Client {
//!     client_id: 0,
//!     name: "Ada Lovelace".to_string(),
//!     email: "ada@example.com".to_string(),
//!     phone_number: "0123456789".to_string(),
//!     address: "12 Analytical Row".to_string(),
//! };
//! assert!(validate_client(&client).is_ok());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::{Client, Order, Product};
use crate::{MAX_FIELD_LEN, MIN_ADDRESS_LEN, MIN_NAME_LEN, PHONE_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Client
// =============================================================================

/// Validates a client record.
///
/// ## Check Order (fail-fast, first failure returned)
/// 1. email matches `local@domain`
/// 2. phone number is exactly 10 digits
/// 3. name at least 3 characters
/// 4. address at least 5 characters
/// 5. name at most 44 characters
/// 6. address at most 44 characters
/// 7. email at most 44 characters
pub fn validate_client(client: &Client) -> ValidationResult<()> {
    validate_email_format(&client.email)?;
    validate_phone(&client.phone_number)?;

    if client.name.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::TooShort {
            field: "name",
            min: MIN_NAME_LEN,
        });
    }

    if client.address.chars().count() < MIN_ADDRESS_LEN {
        return Err(ValidationError::TooShort {
            field: "address",
            min: MIN_ADDRESS_LEN,
        });
    }

    if client.name.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_FIELD_LEN,
        });
    }

    if client.address.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: "address",
            max: MAX_FIELD_LEN,
        });
    }

    if client.email.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: "email",
            max: MAX_FIELD_LEN,
        });
    }

    Ok(())
}

/// Validates email shape: at least one character, an `@`, at least one more
/// character. Equivalent to the pattern `^(.+)@(.+)$`.
fn validate_email_format(email: &str) -> ValidationResult<()> {
    let well_formed = email
        .char_indices()
        .any(|(i, c)| c == '@' && i > 0 && i + 1 < email.len());

    if !well_formed {
        return Err(ValidationError::InvalidFormat {
            field: "email",
            reason: "must look like local@domain",
        });
    }

    Ok(())
}

/// Validates a phone number: exactly 10 ASCII digits, nothing else.
fn validate_phone(phone: &str) -> ValidationResult<()> {
    if phone.len() != PHONE_LEN || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone_number",
            reason: "must contain exactly 10 digits",
        });
    }

    Ok(())
}

// =============================================================================
// Product
// =============================================================================

/// Validates a product record.
///
/// Only the text fields are bounded here; price and stock bounds are the
/// store's job (CHECK constraint) and the fulfillment operation's job.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.name.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_FIELD_LEN,
        });
    }

    if product.description.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: "description",
            max: MAX_FIELD_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Order
// =============================================================================

/// Validates an order record: the quantity must be a positive integer.
pub fn validate_order(order: &Order) -> ValidationResult<()> {
    validate_quantity(order.quantity)
}

/// Validates an order quantity value.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }

    Ok(())
}

/// Validates an edited order date against the current date.
///
/// Order dates may be backdated but never lie in the future.
pub fn validate_order_date(order_date: NaiveDate, today: NaiveDate) -> ValidationResult<()> {
    if order_date > today {
        return Err(ValidationError::InFuture { field: "order_date" });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_client() -> Client {
        Client {
            client_id: 0,
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "0123456789".to_string(),
            address: "12 Analytical Row".to_string(),
        }
    }

    #[test]
    fn test_valid_client_accepted() {
        assert!(validate_client(&sample_client()).is_ok());
    }

    #[test]
    fn test_email_without_at_sign_rejected() {
        let mut client = sample_client();
        client.email = "no-at-sign".to_string();

        let err = validate_client(&client).unwrap_err();
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn test_email_edge_shapes() {
        let mut client = sample_client();

        client.email = "@domain".to_string();
        assert!(validate_client(&client).is_err());

        client.email = "local@".to_string();
        assert!(validate_client(&client).is_err());

        client.email = "a@b".to_string();
        assert!(validate_client(&client).is_ok());
    }

    #[test]
    fn test_short_phone_rejected() {
        let mut client = sample_client();
        client.phone_number = "12345".to_string();

        let err = validate_client(&client).unwrap_err();
        assert_eq!(err.field(), "phone_number");
    }

    #[test]
    fn test_phone_with_dash_rejected() {
        // 9 characters including the dash, and not all digits either way.
        let mut client = sample_client();
        client.phone_number = "555-1234".to_string();

        let err = validate_client(&client).unwrap_err();
        assert_eq!(err.field(), "phone_number");
    }

    #[test]
    fn test_short_name_rejected() {
        let mut client = sample_client();
        client.name = "ab".to_string();

        let err = validate_client(&client).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooShort {
                field: "name",
                min: MIN_NAME_LEN
            }
        );
    }

    #[test]
    fn test_short_address_rejected() {
        let mut client = sample_client();
        client.address = "x".to_string();

        let err = validate_client(&client).unwrap_err();
        assert_eq!(err.field(), "address");
    }

    #[test]
    fn test_overlong_fields_rejected() {
        let mut client = sample_client();
        client.name = "n".repeat(45);
        assert!(validate_client(&client).is_err());

        let mut client = sample_client();
        client.address = "a".repeat(45);
        assert!(validate_client(&client).is_err());

        let mut client = sample_client();
        // Keep the @ shape while exceeding the length bound.
        client.email = format!("{}@example.com", "e".repeat(40));
        let err = validate_client(&client).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "email",
                max: MAX_FIELD_LEN
            }
        );
    }

    #[test]
    fn test_fail_fast_order() {
        // Both email and phone are bad; the email rule fires first.
        let mut client = sample_client();
        client.email = "nope".to_string();
        client.phone_number = "bad".to_string();

        let err = validate_client(&client).unwrap_err();
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn test_validate_product() {
        let mut product = Product {
            product_id: 0,
            name: "Widget".to_string(),
            description: String::new(),
            price_cents: 0,
            stock_quantity: 0,
        };
        assert!(validate_product(&product).is_ok());

        product.name = "n".repeat(45);
        assert!(validate_product(&product).is_err());

        product.name = "Widget".to_string();
        product.description = "d".repeat(45);
        assert!(validate_product(&product).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_order_date() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();

        assert!(validate_order_date(today, today).is_ok());
        assert!(validate_order_date(today.pred_opt().unwrap(), today).is_ok());
        assert!(validate_order_date(today.succ_opt().unwrap(), today).is_err());
    }
}
