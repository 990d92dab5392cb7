use crate::catalog::{CatalogEntry, PriceKey, PriceStrategy, ServiceId};
use serde::{Deserialize, Serialize};

/// One selected service as submitted by the proposal form. Pricing
/// parameters that only some services use (building type, apartment size,
/// area size) ride along as optional fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSelection {
    pub id: ServiceId,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub building_type: Option<String>,
    #[serde(default)]
    pub apartment_size: Option<String>,
    #[serde(default)]
    pub area_size: Option<String>,
    /// "commercial" switches floorplan pricing to the area-keyed table.
    #[serde(rename = "projectType", default)]
    pub pricing_project_type: Option<String>,
    /// Manual override; short-circuits the computed price when > 0.
    #[serde(default)]
    pub custom_price: Option<f64>,
    /// Free-text bullets appended to the catalog description in the
    /// document.
    #[serde(default)]
    pub custom_bullets: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

impl ServiceSelection {
    pub fn new(id: ServiceId, quantity: u32) -> Self {
        Self {
            id,
            enabled: true,
            quantity,
            building_type: None,
            apartment_size: None,
            area_size: None,
            pricing_project_type: None,
            custom_price: None,
            custom_bullets: Vec::new(),
        }
    }

    /// A selection contributes to the quote only when enabled with a
    /// positive quantity.
    pub fn contributes(&self) -> bool {
        self.enabled && self.quantity > 0
    }
}

/// Unit price for a selection against its catalog entry.
///
/// Missing or unknown lookup keys price at zero rather than failing; a
/// misconfigured selection must degrade the quote, not crash it.
pub fn unit_price(entry: &CatalogEntry, selection: &ServiceSelection) -> f64 {
    if let Some(custom) = selection.custom_price {
        if custom > 0.0 {
            return custom;
        }
    }

    match &entry.strategy {
        PriceStrategy::Flat(price) => *price,
        PriceStrategy::QuantityTiered(tiers) => tier_price(tiers, selection.quantity),
        PriceStrategy::BuildingTiered(rows) => {
            let Some(building) = selection.building_type.as_deref() else {
                return 0.0;
            };
            rows.iter()
                .find(|(bt, _)| *bt == building)
                .map(|(_, tiers)| tier_price(&tiers[..], selection.quantity))
                .unwrap_or(0.0)
        }
        PriceStrategy::Keyed { key, table } => {
            let wanted = match key {
                PriceKey::ApartmentSize => selection.apartment_size.as_deref(),
                PriceKey::BuildingType => selection.building_type.as_deref(),
            };
            let Some(wanted) = wanted else { return 0.0 };
            table
                .iter()
                .find(|(k, _)| *k == wanted)
                .map(|(_, p)| *p)
                .unwrap_or(0.0)
        }
        PriceStrategy::AreaKeyed { flat, commercial } => {
            if selection.pricing_project_type.as_deref() == Some("commercial") {
                let Some(area) = selection.area_size.as_deref() else {
                    return 0.0;
                };
                commercial
                    .iter()
                    .find(|(k, _)| *k == area)
                    .map(|(_, p)| *p)
                    .unwrap_or(0.0)
            } else {
                *flat
            }
        }
    }
}

/// Quantities beyond the table clamp to the last tier.
fn tier_price(tiers: &[f64], quantity: u32) -> f64 {
    if tiers.is_empty() || quantity == 0 {
        return 0.0;
    }
    let index = (quantity as usize).min(tiers.len()) - 1;
    tiers[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn selection(id: ServiceId, quantity: u32) -> ServiceSelection {
        ServiceSelection::new(id, quantity)
    }

    #[test]
    fn tiered_prices_are_non_increasing_and_clamp() {
        let catalog = Catalog::new();
        let entry = catalog.get(ServiceId::Interior).unwrap();

        let mut previous = f64::INFINITY;
        for qty in 1..=15 {
            let price = unit_price(entry, &selection(ServiceId::Interior, qty));
            assert!(price <= previous, "price rose at quantity {}", qty);
            previous = price;
        }
        // Beyond the table, the last entry applies (clamp, not
        // extrapolation).
        assert_eq!(unit_price(entry, &selection(ServiceId::Interior, 10)), 199.0);
        assert_eq!(unit_price(entry, &selection(ServiceId::Interior, 50)), 199.0);
    }

    #[test]
    fn building_tiered_uses_matching_row() {
        let catalog = Catalog::new();
        let entry = catalog.get(ServiceId::ExteriorGround).unwrap();

        let mut sel = selection(ServiceId::ExteriorGround, 1);
        sel.building_type = Some("EFH".to_string());
        assert_eq!(unit_price(entry, &sel), 499.0);

        sel.quantity = 5;
        assert_eq!(unit_price(entry, &sel), 199.0);
        sel.quantity = 9;
        assert_eq!(unit_price(entry, &sel), 199.0);

        sel.building_type = Some("MFH-11-15".to_string());
        sel.quantity = 2;
        assert_eq!(unit_price(entry, &sel), 599.0);
    }

    #[test]
    fn unknown_building_type_prices_at_zero() {
        let catalog = Catalog::new();
        let entry = catalog.get(ServiceId::ExteriorGround).unwrap();

        let mut sel = selection(ServiceId::ExteriorGround, 2);
        sel.building_type = Some("Schloss".to_string());
        assert_eq!(unit_price(entry, &sel), 0.0);

        sel.building_type = None;
        assert_eq!(unit_price(entry, &sel), 0.0);
    }

    #[test]
    fn keyed_lookup_degrades_to_zero_on_unmapped_key() {
        let catalog = Catalog::new();
        let entry = catalog.get(ServiceId::TourInterior).unwrap();

        let mut sel = selection(ServiceId::TourInterior, 1);
        assert_eq!(unit_price(entry, &sel), 0.0);

        sel.apartment_size = Some("80".to_string());
        assert_eq!(unit_price(entry, &sel), 1899.0);

        sel.apartment_size = Some("85".to_string());
        assert_eq!(unit_price(entry, &sel), 0.0);
    }

    #[test]
    fn commercial_floorplans_use_area_table() {
        let catalog = Catalog::new();
        let entry = catalog.get(ServiceId::Floorplan2d).unwrap();

        let mut sel = selection(ServiceId::Floorplan2d, 1);
        assert_eq!(unit_price(entry, &sel), 49.0);

        sel.pricing_project_type = Some("commercial".to_string());
        sel.area_size = Some("500".to_string());
        assert_eq!(unit_price(entry, &sel), 119.0);

        sel.area_size = Some("9999".to_string());
        assert_eq!(unit_price(entry, &sel), 0.0);
    }

    #[test]
    fn custom_price_short_circuits_everything() {
        let catalog = Catalog::new();
        let entry = catalog.get(ServiceId::HomeStaging).unwrap();

        let mut sel = selection(ServiceId::HomeStaging, 3);
        sel.custom_price = Some(85.5);
        assert_eq!(unit_price(entry, &sel), 85.5);

        // Zero or negative overrides are ignored.
        sel.custom_price = Some(0.0);
        assert_eq!(unit_price(entry, &sel), 99.0);
    }
}
