use serde::{Deserialize, Serialize};

mod data;

pub use data::{build_catalog, PROJECT_TYPES};

/// Identifier of a sellable visualization service. Wire names match the
/// kebab-case ids used by the proposal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceId {
    #[serde(rename = "exterior-ground")]
    ExteriorGround,
    #[serde(rename = "exterior-bird")]
    ExteriorBird,
    #[serde(rename = "interior")]
    Interior,
    #[serde(rename = "terrace")]
    Terrace,
    #[serde(rename = "3d-floorplan")]
    Floorplan3d,
    #[serde(rename = "3d-complete-floor")]
    CompleteFloor3d,
    #[serde(rename = "2d-floorplan")]
    Floorplan2d,
    #[serde(rename = "home-staging")]
    HomeStaging,
    #[serde(rename = "renovation")]
    Renovation,
    #[serde(rename = "360-interior")]
    TourInterior,
    #[serde(rename = "360-exterior")]
    VideoExterior,
    #[serde(rename = "slideshow")]
    Slideshow,
    #[serde(rename = "site-plan")]
    SitePlan,
    #[serde(rename = "social-media")]
    SocialMedia,
    #[serde(rename = "video-snippet")]
    VideoSnippet,
    #[serde(rename = "expose-layout")]
    ExposeLayout,
    #[serde(rename = "expose-creation")]
    ExposeCreation,
}

/// Which selection parameter a keyed price table is indexed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceKey {
    ApartmentSize,
    BuildingType,
}

/// How a service is priced. Unknown keys and missing parameters price at
/// zero instead of failing, so a misconfigured selection can never sink the
/// whole quote.
#[derive(Debug, Clone)]
pub enum PriceStrategy {
    /// Fixed unit price regardless of quantity.
    Flat(f64),
    /// Unit price by ordered quantity; quantities beyond the table clamp to
    /// the last (cheapest) tier.
    QuantityTiered(&'static [f64]),
    /// Quantity tiers selected by building type.
    BuildingTiered(&'static [(&'static str, &'static [f64; 5])]),
    /// Price keyed by a discrete selection parameter.
    Keyed {
        key: PriceKey,
        table: &'static [(&'static str, f64)],
    },
    /// Commercial floorplans are keyed by area size, residential ones use a
    /// flat rate.
    AreaKeyed {
        flat: f64,
        commercial: &'static [(&'static str, f64)],
    },
}

/// Delivery-time rule: `base_time + additional_per_unit * (quantity - 1)`
/// business days.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryRule {
    pub base_time: u32,
    pub additional_per_unit: u32,
}

pub struct CatalogEntry {
    pub id: ServiceId,
    pub name: &'static str,
    /// Bullet-point description template, reproduced verbatim in the
    /// proposal document.
    pub description: &'static [&'static str],
    /// Reference link substituted for the "KLICK" marker in bullets.
    pub link: Option<&'static str>,
    pub strategy: PriceStrategy,
    pub delivery: Option<DeliveryRule>,
    /// The last tier of the price table covers all higher quantities
    /// ("≥10 Ansichten") instead of exactly its own quantity.
    pub tiers_open_ended: bool,
}

impl CatalogEntry {
    /// Price tiers to show as a sub-table under the service row, if any.
    /// For building-keyed tiers the row of the selected building type is
    /// shown.
    pub fn price_tiers(&self, building_type: Option<&str>) -> Option<&'static [f64]> {
        match &self.strategy {
            PriceStrategy::QuantityTiered(tiers) => Some(tiers),
            PriceStrategy::BuildingTiered(rows) => {
                let wanted = building_type?;
                rows.iter()
                    .find(|(bt, _)| *bt == wanted)
                    .map(|(_, tiers)| &tiers[..])
            }
            _ => None,
        }
    }
}

/// The static service catalog, built once at startup and shared read-only
/// for the process lifetime.
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            entries: build_catalog(),
        }
    }

    pub fn get(&self, id: ServiceId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
