//! Static catalog data: service names, bullet copy, reference links, price
//! tables and delivery rules. The German copy is configuration, not logic,
//! and is reproduced verbatim in generated documents.

use super::{CatalogEntry, DeliveryRule, PriceKey, PriceStrategy, ServiceId};

pub const PROJECT_TYPES: &[&str] = &[
    "Einfamilienhaus",
    "Mehrfamilienhaus",
    "Wohnanlage",
    "Gewerbeimmobilie",
    "Bürogebäude",
    "Hotel",
    "Einzelhandel",
    "Industriegebäude",
    "Mixed-Use",
    "Custom",
];

const EXTERIOR_GROUND_TIERS: &[(&str, &[f64; 5])] = &[
    ("EFH", &[499.0, 349.0, 299.0, 229.0, 199.0]),
    ("DHH", &[599.0, 399.0, 359.0, 329.0, 299.0]),
    ("MFH-6-10", &[699.0, 499.0, 399.0, 349.0, 329.0]),
    ("MFH-11-15", &[799.0, 599.0, 499.0, 399.0, 349.0]),
];

const INTERIOR_TIERS: &[f64] = &[
    399.0, 299.0, 289.0, 269.0, 259.0, 249.0, 239.0, 229.0, 219.0, 199.0,
];

const TOUR_INTERIOR_PRICES: &[(&str, f64)] = &[
    ("30", 999.0),
    ("40", 1299.0),
    ("50", 1499.0),
    ("60", 1699.0),
    ("70", 1799.0),
    ("80", 1899.0),
    ("90", 1999.0),
    ("100", 2299.0),
    ("EFH", 2499.0),
];

const VIDEO_EXTERIOR_PRICES: &[(&str, f64)] = &[
    ("EFH-DHH", 1299.0),
    ("MFH-3-5", 1299.0),
    ("MFH-6-10", 1699.0),
    ("MFH-11-15", 1999.0),
];

const FLOORPLAN_3D_COMMERCIAL: &[(&str, f64)] = &[
    ("100", 99.0),
    ("250", 199.0),
    ("500", 299.0),
    ("1000", 399.0),
    ("1500", 499.0),
];

const FLOORPLAN_2D_COMMERCIAL: &[(&str, f64)] = &[
    ("100", 39.0),
    ("250", 79.0),
    ("500", 119.0),
    ("1000", 159.0),
    ("1500", 199.0),
];

const LINK_EXTERIOR: &str =
    "https://www.exposeprofi.de/3d-visualisierungen/architekturvisualisierungen";
const LINK_INTERIOR: &str = "https://www.exposeprofi.de/3d-visualisierungen/innenvisualisierungen";
const LINK_FLOORPLAN_3D: &str = "https://www.exposeprofi.de/3d-visualisierungen/3d-grundrisse";
const LINK_FLOORPLAN_2D: &str = "https://www.exposeprofi.de/workflow/2d-grundriss-designs";
const LINK_HOME_STAGING: &str = "https://www.exposeprofi.de/digitales-home-staging";
const LINK_RENOVATION: &str =
    "https://www.exposeprofi.de/digitales-home-staging#referenzen-virtuelle-renovierung";
const LINK_TOUR_360: &str = "https://www.exposeprofi.de/3d-visualisierungen/virtuelle-rundgaenge";
const LINK_VIDEO_360: &str = "https://www.exposeprofi.de/3d-visualisierungen/architekturvisualisierungen#referenzen-virtueller-videorundgang";
const LINK_SLIDESHOW: &str =
    "https://drive.google.com/file/d/1AW2T7wzx9-HxSOBx214YoM5MnXA3c8kp/view?usp=sharing";
const LINK_EXPOSE: &str = "https://www.exposeprofi.de/workflow/exposedesigns";

pub fn build_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            id: ServiceId::ExteriorGround,
            name: "3D-Außenvisualisierung Bodenperspektive",
            description: &[
                "Geliefert werden XXX gerenderte Außenansichten des Objektes „XXX\" aus den folgenden Bodenperspektiven (siehe rote Pfeile):",
                "○ xxx",
                "Fotorealistische Qualität",
                "Auf Wunsch eingefügt in von Ihnen zu liefernde Drohnenfotos oder schematische Modellierung der Umgebung",
                "Inkl. 1 Revisionsrunde⁽¹⁾",
                "Format: 2.500 x 1.500 px (300 DPI)",
                "Referenzen: KLICK",
            ],
            link: Some(LINK_EXTERIOR),
            strategy: PriceStrategy::BuildingTiered(EXTERIOR_GROUND_TIERS),
            delivery: Some(DeliveryRule {
                base_time: 7,
                additional_per_unit: 2,
            }),
            tiers_open_ended: false,
        },
        CatalogEntry {
            id: ServiceId::ExteriorBird,
            name: "3D-Außenvisualisierung Vogelperspektive",
            description: &[
                "Geliefert wird 1x gerenderte Außenansicht des Objektes „XXX\" aus der folgenden Vogelperspektive (siehe blauen Pfeil):",
                "○ xxx",
                "Fotorealistische Qualität",
                "Auf Wunsch eingefügt in von Ihnen zu liefernde Drohnenfotos oder schematische Modellierung der Umgebung",
                "Inkl. 1 Revisionsrunde⁽¹⁾",
                "Format: 2.500 x 1.500 px (300 DPI)",
                "Referenzen: KLICK",
                "Nur in Kombination mit allen im Angebot aufgeführten Bodenperspektiven verfügbar",
            ],
            link: Some(LINK_EXTERIOR),
            strategy: PriceStrategy::Flat(12.0),
            delivery: Some(DeliveryRule {
                base_time: 3,
                additional_per_unit: 1,
            }),
            tiers_open_ended: false,
        },
        CatalogEntry {
            id: ServiceId::Interior,
            name: "3D-Innenvisualisierung",
            description: &[
                "Geliefert werden XX gerenderte Innenansichten der Räume:",
                "○ …",
                "Fotorealistische Qualität",
                "Eingerichtet individuell nach Ihren Wünschen (allerdings keine individuelle Modellierung konkreter Möbelstücke inkludiert)",
                "Falls Türen zwischen einzelnen Räumen zu sehen sind, werden diese als geschlossen dargestellt",
                "Inkl. 1 Revisionsrunde⁽¹⁾",
                "Format: 2.500 x 1.500 px (300 DPI)",
                "Referenzen: KLICK",
            ],
            link: Some(LINK_INTERIOR),
            strategy: PriceStrategy::QuantityTiered(INTERIOR_TIERS),
            delivery: Some(DeliveryRule {
                base_time: 5,
                additional_per_unit: 2,
            }),
            tiers_open_ended: true,
        },
        CatalogEntry {
            id: ServiceId::Terrace,
            name: "3D-Visualisierung Terrasse",
            description: &[
                "Geliefert wird 1x gerenderte Ansicht folgender Einheit:",
                "1x Terrasse (Whg. XX)",
                "Fotorealistische Qualität",
                "Eingerichtet individuell nach Ihren Wünschen (allerdings keine individuelle Modellierung konkreter Möbelstücke inkludiert)",
                "Inkl. 1 Revisionsrunde⁽¹⁾",
                "Format: 2.500 x 1.500 px (300 DPI)",
            ],
            link: None,
            strategy: PriceStrategy::Flat(0.0),
            delivery: Some(DeliveryRule {
                base_time: 5,
                additional_per_unit: 0,
            }),
            tiers_open_ended: false,
        },
        CatalogEntry {
            id: ServiceId::Floorplan3d,
            name: "3D-Grundriss",
            description: &[
                "Geliefert werden XXX 3D-Grundrisse",
                "Hochwertig standardmöbliert",
                "Exklusive Qualität",
                "Inkl. 1 Revisionsrunde⁽¹⁾",
                "2.500px x 1.500 px bei 300 DPI",
                "Referenzen: KLICK",
            ],
            link: Some(LINK_FLOORPLAN_3D),
            strategy: PriceStrategy::AreaKeyed {
                flat: 69.0,
                commercial: FLOORPLAN_3D_COMMERCIAL,
            },
            delivery: Some(DeliveryRule {
                base_time: 3,
                additional_per_unit: 1,
            }),
            tiers_open_ended: false,
        },
        CatalogEntry {
            id: ServiceId::CompleteFloor3d,
            name: "3D-Geschossansicht",
            description: &[
                "Geliefert werden XXX 3D-Geschossansichten folgender Einheiten",
                "XXX",
                "Hochwertig standardmöbliert",
                "Exklusive Qualität",
                "Inkl. 1 Revisionsrunde⁽¹⁾",
                "2.500px x 1.500 px bei 300 DPI",
            ],
            link: None,
            strategy: PriceStrategy::Flat(199.0),
            delivery: Some(DeliveryRule {
                base_time: 5,
                additional_per_unit: 2,
            }),
            tiers_open_ended: false,
        },
        CatalogEntry {
            id: ServiceId::Floorplan2d,
            name: "2D-Grundriss",
            description: &[
                "Geliefert werden XXX 2D-Grundrisse",
                "Hochwertig standardmöbliert",
                "Exklusive Qualität",
                "Inkl. 1 Revisionsrunde⁽¹⁾",
                "2.500px x 1.500 px bei 300 DPI",
                "Referenzen: KLICK",
            ],
            link: Some(LINK_FLOORPLAN_2D),
            strategy: PriceStrategy::AreaKeyed {
                flat: 49.0,
                commercial: FLOORPLAN_2D_COMMERCIAL,
            },
            delivery: Some(DeliveryRule {
                base_time: 2,
                additional_per_unit: 1,
            }),
            tiers_open_ended: false,
        },
        CatalogEntry {
            id: ServiceId::HomeStaging,
            name: "Digital Home Staging",
            description: &[
                "Geliefert werden XXX Digital Home Staging Fotos der Räume:",
                "○ text",
                "Basiert auf vom Kunden bereitgestellten Fotos",
                "Individuell eingerichtet",
                "Fotorealistische Qualität",
                "Exakt identische Perspektive wie zugrundeliegende Fotos",
                "Inkl. 1 Revisionsrunde⁽¹⁾",
                "Referenzen: KLICK",
            ],
            link: Some(LINK_HOME_STAGING),
            strategy: PriceStrategy::Flat(99.0),
            delivery: Some(DeliveryRule {
                base_time: 3,
                additional_per_unit: 1,
            }),
            tiers_open_ended: false,
        },
        CatalogEntry {
            id: ServiceId::Renovation,
            name: "Digitale Renovierung",
            description: &[
                "Geliefert werden XXX Digitale Renovierungsfotos der Räume:",
                "○ text",
                "Basiert auf vom Kunden bereitgestellten Fotos",
                "Individuell eingerichtet",
                "Fotorealistische Qualität",
                "Exakt identische Perspektive wie zugrundeliegende Fotos",
                "Inkl. 1 Revisionsrunde⁽¹⁾",
                "Referenzen: KLICK",
            ],
            link: Some(LINK_RENOVATION),
            strategy: PriceStrategy::Flat(139.0),
            delivery: Some(DeliveryRule {
                base_time: 3,
                additional_per_unit: 1,
            }),
            tiers_open_ended: false,
        },
        CatalogEntry {
            id: ServiceId::TourInterior,
            name: "360° Tour Innen",
            description: &[
                "Geliefert wird 1x 360° Tour folgender Wohneinheit:",
                "○ text",
                "Begehung des kompletten Innenbereichs",
                "Individuell eingerichtet",
                "Einzigartige Technologie, da vollkommen frei bewegbar",
                "Intuitive Bedienung",
                "Passend für alle gängigen Endgeräte",
                "Inklusive Fensteraussicht (wahlweise mit beispielhafter oder Verwendung der tatsächlichen Aussicht mittels vom Auftraggeber gelieferten Bildern)",
                "Inkl. 2 Revisionsrunden⁽¹⁾",
                "Inkl. Hosting für 12 Monate⁽²⁾",
                "Referenz: KLICK",
            ],
            link: Some(LINK_TOUR_360),
            strategy: PriceStrategy::Keyed {
                key: PriceKey::ApartmentSize,
                table: TOUR_INTERIOR_PRICES,
            },
            delivery: Some(DeliveryRule {
                base_time: 10,
                additional_per_unit: 0,
            }),
            tiers_open_ended: false,
        },
        CatalogEntry {
            id: ServiceId::VideoExterior,
            name: "360° Video Außen",
            description: &[
                "Geliefert wird 1x 360° Video-Tour des Objektes XXX",
                "(nur in Kombination mit mind. 2x 3D-Außenvisualisierung)",
                "Umgebung schematisch dargestellt",
                "Fotorealistische Qualität",
                "Länge ca. 90 Sekunden",
                "Inkl. 2 Revisionsrunden",
                "Referenz: KLICK",
            ],
            link: Some(LINK_VIDEO_360),
            strategy: PriceStrategy::Keyed {
                key: PriceKey::BuildingType,
                table: VIDEO_EXTERIOR_PRICES,
            },
            delivery: Some(DeliveryRule {
                base_time: 14,
                additional_per_unit: 0,
            }),
            tiers_open_ended: false,
        },
        CatalogEntry {
            id: ServiceId::Slideshow,
            name: "Slideshow Video",
            description: &[
                "Geliefert wird XX Slideshow-Video des Objektes",
                "Inkl. aller Visualisierungen und weiterer Fotos",
                "Professionell vertont und kommentiert",
                "Inkl. Untertiteln",
                "Referenzen: KLICK",
            ],
            link: Some(LINK_SLIDESHOW),
            strategy: PriceStrategy::Flat(499.0),
            delivery: Some(DeliveryRule {
                base_time: 7,
                additional_per_unit: 0,
            }),
            tiers_open_ended: false,
        },
        CatalogEntry {
            id: ServiceId::SitePlan,
            name: "3D-Lageplan",
            description: &[
                "Geliefert wird XXX 3D-Lageplan des Objektes in Draufsicht",
                "Exklusive Qualität",
                "Inkl. 1 Revisionsrunde⁽¹⁾",
            ],
            link: None,
            strategy: PriceStrategy::Flat(99.0),
            delivery: Some(DeliveryRule {
                base_time: 5,
                additional_per_unit: 0,
            }),
            tiers_open_ended: false,
        },
        CatalogEntry {
            id: ServiceId::SocialMedia,
            name: "Social Media Paket",
            description: &[
                "Geliefert wird 1x Social Media Paket für die Visualisierung des Objektes, bestehend aus:",
                "Alle statischen Visualisierungen in den für Social Media Posts passenden Formaten",
                "Video in passendem Format",
                "Fotorealistische Qualität",
            ],
            link: None,
            strategy: PriceStrategy::Flat(299.0),
            delivery: Some(DeliveryRule {
                base_time: 3,
                additional_per_unit: 0,
            }),
            tiers_open_ended: false,
        },
        CatalogEntry {
            id: ServiceId::VideoSnippet,
            name: "Video Snippet Außen und Innen",
            description: &[
                "Geliefert wird 1x Video-Snippet des Objektes, bei dem wir durch Unterstützung von künstlicher Intelligenz aus den statischen Innen- und Außenvisualisierungen ein Video mit Bewegtbildern erstellen",
                "(nur in Kombination mit mind. 2x Außen- und 2x Innenvisualisierung)",
                "Fotorealistische Qualität",
                "Basiert auf 2x Außen- und 2x Innenvisualisierungen",
                "Länge ca. 30 Sekunden, max 9 Fotos",
                "Da KI-generiert, keine Revisionsrunde",
            ],
            link: None,
            strategy: PriceStrategy::Flat(299.0),
            delivery: None,
            tiers_open_ended: false,
        },
        CatalogEntry {
            id: ServiceId::ExposeLayout,
            name: "Exposé Layout",
            description: &[
                "Geliefert wird XXX Exposé Layout für den Vertrieb des Objektes",
                "Nur in Kombination mit allen zuvor genannten Positionen erhältlich",
                "Layout und Farbkonzept nach Absprache, einfach gehalten",
                "Bestandteile (Beispiel-Aufbau): Inhaltsverzeichnis, Kurzbeschreibung Projekt, Lagebeschreibung, Bauvorhaben/Objektbeschreibung, Ausstattung, Grundrisse (inkl. m²- Angaben und evtl. Piktogramm für die Lage im Gebäude), Preistabelle und Finanzierung, Kontaktinformationen.",
                "Format: PPT",
                "Inkl. 2 Revisionsrunden",
                "Dient auch als Layout für weitere Projekte",
            ],
            link: Some(LINK_EXPOSE),
            strategy: PriceStrategy::Flat(1199.0),
            delivery: None,
            tiers_open_ended: false,
        },
        CatalogEntry {
            id: ServiceId::ExposeCreation,
            name: "Exposé-Erstellung",
            description: &[
                "Geliefert wird XXX komplettes Exposé für den Vertrieb des Objektes",
                "In druckfertiger, digitaler Ausführung",
                "Exklusive Qualität basierend auf gelieferten Texten und Informationen",
                "Nur in Kombination mit allen zuvor genannten Positionen erhältlich",
                "Alle Texte werden vom Kunden so zur Verfügung gestellt, dass Sie unverändert übernommen werden können",
                "Alle zusätzlich benötigten Fotos werden vom Kunden so zur Verfügung gestellt, dass Sie unverändert übernommen werden können",
                "Inkl. 2 Revisionsrunden",
                "Referenzen: KLICK",
            ],
            link: Some(LINK_EXPOSE),
            strategy: PriceStrategy::Flat(499.0),
            delivery: None,
            tiers_open_ended: false,
        },
    ]
}
