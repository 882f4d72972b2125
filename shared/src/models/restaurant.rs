//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Restaurant entity (one settings record embedded per restaurant)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub settings: Settings,
}

/// Restaurant settings
///
/// Wire format uses camelCase keys (`taxRate`, `acceptsCash`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Tax rate in percentage (e.g., 10 = 10%)
    pub tax_rate: f64,
    /// Service charge in percentage
    pub service_charge: f64,
    /// ISO currency code (e.g., "USD")
    pub currency: String,
    pub accepts_online_payment: bool,
    pub accepts_cash: bool,
}

/// Update settings payload (partial: absent fields are left untouched)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_charge: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepts_online_payment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepts_cash: Option<bool>,
}

impl Settings {
    /// Shallow merge: overwrite only the fields present in the patch.
    pub fn merge(&mut self, patch: SettingsUpdate) {
        if let Some(tax_rate) = patch.tax_rate {
            self.tax_rate = tax_rate;
        }
        if let Some(service_charge) = patch.service_charge {
            self.service_charge = service_charge;
        }
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(accepts_online_payment) = patch.accepts_online_payment {
            self.accepts_online_payment = accepts_online_payment;
        }
        if let Some(accepts_cash) = patch.accepts_cash {
            self.accepts_cash = accepts_cash;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_settings() -> Settings {
        Settings {
            tax_rate: 10.0,
            service_charge: 5.0,
            currency: "USD".to_string(),
            accepts_online_payment: true,
            accepts_cash: true,
        }
    }

    #[test]
    fn test_merge_overwrites_only_supplied_fields() {
        let mut settings = base_settings();
        settings.merge(SettingsUpdate {
            tax_rate: Some(12.0),
            ..Default::default()
        });
        assert_eq!(settings.tax_rate, 12.0);
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.service_charge, 5.0);
    }

    #[test]
    fn test_settings_use_camel_case_on_the_wire() {
        let json = serde_json::to_value(base_settings()).unwrap();
        assert_eq!(json["taxRate"], 10.0);
        assert_eq!(json["acceptsOnlinePayment"], true);
        assert!(json.get("tax_rate").is_none());
    }

    #[test]
    fn test_empty_update_serializes_to_empty_object() {
        let json = serde_json::to_string(&SettingsUpdate::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
