//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Business rule failures                         │
//! │  ├── ValidationError  - Single-field input failures                    │
//! │  └── TaxConfigIssue   - One broken tax configuration rule              │
//! │                                                                         │
//! │  invoice-cli errors (separate crate)                                   │
//! │  └── CliError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: TaxConfigIssue → messages → CoreError → CliError → stderr       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, 1-based tax index)
//! 3. Errors are enum variants, never String
//! 4. The calculator itself never returns any of these

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A tax configuration update failed validation.
    ///
    /// ## When This Occurs
    /// An administrator saves settings that break one or more rules, e.g.
    /// a GST rate of 150 or a custom tax without a name. The previous
    /// configuration stays in force.
    #[error("Invalid tax configuration: {}", .0.join("; "))]
    InvalidTaxConfig(Vec<String>),

    /// A stored configuration document could not be parsed at all.
    #[error("Malformed tax configuration: {0}")]
    MalformedConfig(#[from] serde_json::Error),

    /// A purchase line broke a field rule. Lines are numbered from 1.
    #[error("Purchase line {line}: {source}")]
    InvalidPurchaseLine {
        line: usize,
        #[source]
        source: ValidationError,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    Negative { field: String },
}

// =============================================================================
// Tax Configuration Issues
// =============================================================================

/// A single broken rule in a tax configuration.
///
/// The `Display` text is the message shown to the administrator. Custom
/// taxes are numbered from 1, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxConfigIssue {
    #[error("Tax configuration is required")]
    Missing,

    #[error("GST rate must be between 0 and 100")]
    GstRateOutOfRange,

    #[error("GST type must be either 'inclusive' or 'exclusive'")]
    GstTypeInvalid,

    #[error("Platform fee rate cannot be negative")]
    PlatformFeeRateNegative,

    #[error("Platform fee type must be either 'percentage' or 'fixed'")]
    PlatformFeeTypeInvalid,

    #[error("Tax {index}: name is required")]
    OtherTaxNameRequired { index: usize },

    #[error("Tax {index}: rate cannot be negative")]
    OtherTaxRateNegative { index: usize },

    #[error("Tax {index}: type must be either 'percentage' or 'fixed'")]
    OtherTaxTypeInvalid { index: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message_joins_issues() {
        let err = CoreError::InvalidTaxConfig(vec![
            TaxConfigIssue::GstRateOutOfRange.to_string(),
            TaxConfigIssue::OtherTaxNameRequired { index: 2 }.to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid tax configuration: GST rate must be between 0 and 100; Tax 2: name is required"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "tenant_id".to_string(),
        };
        assert_eq!(err.to_string(), "tenant_id is required");

        let err = ValidationError::Negative {
            field: "unit cost".to_string(),
        };
        assert_eq!(err.to_string(), "unit cost cannot be negative");
    }

    #[test]
    fn test_purchase_line_error_names_the_line() {
        let err = CoreError::InvalidPurchaseLine {
            line: 2,
            source: ValidationError::MustBePositive {
                field: "quantity".into(),
            },
        };
        assert_eq!(err.to_string(), "Purchase line 2: quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
