use crate::catalog::Catalog;
use crate::pricing::{unit_price, ServiceSelection};
use serde::{Deserialize, Serialize};

/// Offers are valid for a week after submission.
pub const OFFER_VALIDITY_DAYS: i64 = 7;

const VAT_RATE: f64 = 0.19;

/// Delivery estimate when no selected service carries a delivery rule.
const DEFAULT_DELIVERY_DAYS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    Percentage,
    Fixed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discount {
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    pub value: f64,
    #[serde(default)]
    pub description: String,
}

/// Computed totals. Values keep full floating precision; two-decimal
/// rounding happens once, at formatting time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub subtotal_net: f64,
    pub discount_amount: f64,
    pub total_net: f64,
    pub total_vat: f64,
    pub total_gross: f64,
}

/// Folds the enabled services into totals. Always a full fold over the
/// selection set, cheap enough to rerun on every change.
pub fn compute_quote(
    catalog: &Catalog,
    services: &[ServiceSelection],
    discount: Option<&Discount>,
) -> Quote {
    let mut subtotal_net = 0.0;
    for selection in services {
        if !selection.contributes() {
            continue;
        }
        let Some(entry) = catalog.get(selection.id) else {
            continue;
        };
        subtotal_net += unit_price(entry, selection) * f64::from(selection.quantity);
    }

    let discount_amount = match discount {
        Some(d) if d.value > 0.0 => match d.kind {
            DiscountKind::Percentage => subtotal_net * (d.value / 100.0),
            DiscountKind::Fixed => d.value,
        },
        _ => 0.0,
    };

    let total_net = subtotal_net - discount_amount;
    let total_vat = total_net * VAT_RATE;
    let total_gross = total_net + total_vat;

    Quote {
        subtotal_net,
        discount_amount,
        total_net,
        total_vat,
        total_gross,
    }
}

/// Estimated delivery window in business days.
///
/// Per service: `base + per_unit * (quantity - 1)`; the estimate is the
/// maximum across services, not the sum, reflecting parallel production.
/// The window spans three further days.
pub fn delivery_window(catalog: &Catalog, services: &[ServiceSelection]) -> (u32, u32) {
    let mut max_days = 0;
    for selection in services {
        if !selection.contributes() {
            continue;
        }
        let rule = catalog.get(selection.id).and_then(|e| e.delivery);
        if let Some(rule) = rule {
            let days = rule.base_time + rule.additional_per_unit * selection.quantity.saturating_sub(1);
            max_days = max_days.max(days);
        }
    }
    let min = if max_days > 0 { max_days } else { DEFAULT_DELIVERY_DAYS };
    (min, min + 3)
}

/// Display form used in documents and persisted records: "N - M Werktage".
pub fn format_delivery_window(window: (u32, u32)) -> String {
    format!("{} - {} Werktage", window.0, window.1)
}

/// German price formatting: thousands separated by '.', decimals by ','.
/// This is the only place currency values are rounded.
pub fn format_eur(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (sign, formatted) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted, "00"));

    let mut grouped = String::new();
    let digits = int_part.as_bytes();
    for (i, b) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*b as char);
    }

    format!("{}{},{}", sign, grouped, frac_part)
}
