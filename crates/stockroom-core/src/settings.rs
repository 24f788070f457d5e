//! # Tax Settings
//!
//! A tenant's current tax configuration plus the append-only history of the
//! configurations it replaced.
//!
//! ## Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Admin saves settings                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  TaxSettings::update(next, changed_by, now) ← THIS MODULE               │
//! │       │                                                                 │
//! │       ├── validate_tax_config fails? → CoreError::InvalidTaxConfig      │
//! │       │                                (nothing changes)                │
//! │       │                                                                 │
//! │       └── OK → history.push(previous) → config = next → revision += 1   │
//! │                                                                         │
//! │  Storing the aggregate is the web application's job.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Timestamps come from the caller so the aggregate stays free of clock I/O.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::tax::calculate_taxes;
use crate::types::{TaxCalculationResult, TaxConfiguration};
use crate::validation::{validate_identifier, validate_tax_config};

/// A configuration that was replaced, and who replaced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxConfigChange {
    /// Revision number `previous` was in force under.
    pub replaced_revision: u32,

    pub previous: TaxConfiguration,

    pub changed_by: String,

    #[ts(as = "String")]
    pub changed_at: DateTime<Utc>,
}

/// Per-tenant tax settings with an audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxSettings {
    tenant_id: String,
    config: TaxConfiguration,
    revision: u32,
    updated_by: Option<String>,
    #[ts(as = "String")]
    updated_at: DateTime<Utc>,
    history: Vec<TaxConfigChange>,
}

impl TaxSettings {
    /// Starts a tenant on the default (tax-free) configuration, revision 0.
    pub fn new(tenant_id: impl Into<String>, now: DateTime<Utc>) -> CoreResult<Self> {
        let tenant_id = tenant_id.into();
        validate_identifier("tenant_id", &tenant_id)?;

        Ok(TaxSettings {
            tenant_id,
            config: TaxConfiguration::default(),
            revision: 0,
            updated_by: None,
            updated_at: now,
            history: Vec::new(),
        })
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    /// The configuration currently in force.
    pub fn config(&self) -> &TaxConfiguration {
        &self.config
    }

    /// Number of accepted updates so far.
    pub fn revision(&self) -> u32 {
        self.revision
    }

    pub fn updated_by(&self) -> Option<&str> {
        self.updated_by.as_deref()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaced configurations, oldest first.
    pub fn history(&self) -> &[TaxConfigChange] {
        &self.history
    }

    /// Replaces the configuration if it passes validation.
    ///
    /// ## Returns
    /// - `Ok(revision)` with the new revision number
    /// - `Err(CoreError::InvalidTaxConfig)` listing every broken rule; the
    ///   settings are left untouched
    /// - `Err(CoreError::Validation)` when `changed_by` is blank
    pub fn update(
        &mut self,
        next: TaxConfiguration,
        changed_by: &str,
        now: DateTime<Utc>,
    ) -> CoreResult<u32> {
        validate_identifier("changed_by", changed_by)?;

        let report = validate_tax_config(Some(&next));
        if !report.is_valid {
            debug!(
                tenant_id = %self.tenant_id,
                errors = ?report.errors,
                "Rejected tax configuration update"
            );
            return Err(CoreError::InvalidTaxConfig(report.errors));
        }

        let previous = std::mem::replace(&mut self.config, next);
        self.history.push(TaxConfigChange {
            replaced_revision: self.revision,
            previous,
            changed_by: changed_by.to_string(),
            changed_at: now,
        });

        self.revision += 1;
        self.updated_by = Some(changed_by.to_string());
        self.updated_at = now;

        debug!(
            tenant_id = %self.tenant_id,
            revision = self.revision,
            changed_by,
            "Tax configuration updated"
        );

        Ok(self.revision)
    }

    /// Prices `subtotal` under the current configuration, for settings previews.
    pub fn preview(&self, subtotal: Decimal) -> TaxCalculationResult {
        calculate_taxes(subtotal, Some(&self.config))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GstConfig, OtherTax, PlatformFeeConfig};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0).unwrap()
    }

    fn gst_config(rate: Decimal) -> TaxConfiguration {
        TaxConfiguration {
            gst: GstConfig::exclusive(rate),
            ..TaxConfiguration::default()
        }
    }

    #[test]
    fn test_new_settings_start_tax_free() {
        let settings = TaxSettings::new("tenant-1", at(9)).unwrap();
        assert_eq!(settings.tenant_id(), "tenant-1");
        assert_eq!(settings.revision(), 0);
        assert!(settings.config().is_tax_free());
        assert!(settings.history().is_empty());
        assert_eq!(settings.updated_by(), None);
        assert_eq!(settings.preview(dec!(100)).grand_total, dec!(100));
    }

    #[test]
    fn test_blank_tenant_is_rejected() {
        let err = TaxSettings::new("  ", at(9)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_update_appends_history() {
        let mut settings = TaxSettings::new("tenant-1", at(9)).unwrap();

        assert_eq!(settings.update(gst_config(dec!(18)), "alice", at(10)).unwrap(), 1);
        assert_eq!(settings.update(gst_config(dec!(12)), "bob", at(11)).unwrap(), 2);

        assert_eq!(settings.revision(), 2);
        assert_eq!(settings.config().gst.rate, dec!(12));
        assert_eq!(settings.updated_by(), Some("bob"));
        assert_eq!(settings.updated_at(), at(11));

        let history = settings.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].replaced_revision, 0);
        assert!(history[0].previous.is_tax_free());
        assert_eq!(history[0].changed_by, "alice");
        assert_eq!(history[1].replaced_revision, 1);
        assert_eq!(history[1].previous.gst.rate, dec!(18));
        assert_eq!(history[1].changed_at, at(11));
    }

    #[test]
    fn test_invalid_update_leaves_settings_untouched() {
        let mut settings = TaxSettings::new("tenant-1", at(9)).unwrap();
        settings.update(gst_config(dec!(18)), "alice", at(10)).unwrap();
        let before = settings.clone();

        let bad = TaxConfiguration {
            gst: GstConfig::exclusive(dec!(150)),
            platform_fee: PlatformFeeConfig::fixed(dec!(-1)),
            other_taxes: vec![OtherTax::percentage("", dec!(1))],
        };
        let err = settings.update(bad, "mallory", at(12)).unwrap_err();

        match err {
            CoreError::InvalidTaxConfig(errors) => assert_eq!(errors.len(), 3),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(settings, before);
    }

    #[test]
    fn test_update_requires_author() {
        let mut settings = TaxSettings::new("tenant-1", at(9)).unwrap();
        let err = settings.update(gst_config(dec!(5)), "", at(10)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(settings.revision(), 0);
    }

    #[test]
    fn test_preview_uses_current_config() {
        let mut settings = TaxSettings::new("tenant-1", at(9)).unwrap();
        settings.update(gst_config(dec!(18)), "alice", at(10)).unwrap();
        assert_eq!(settings.preview(dec!(100)).grand_total, dec!(118));
    }

    #[test]
    fn test_settings_round_trip_json() {
        let mut settings = TaxSettings::new("tenant-1", at(9)).unwrap();
        settings.update(gst_config(dec!(18)), "alice", at(10)).unwrap();

        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"replacedRevision\":0"));
        let restored: TaxSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }
}
