use super::copy;
use super::{
    Alignment, Block, BulletLine, EmbeddedImage, Paragraph, ProposalInput, Section, SectionKind,
    StructuredDocument, Table, TableCell, TableRow, TextRun,
};
use crate::catalog::{Catalog, CatalogEntry};
use crate::pricing::{unit_price, ServiceSelection};
use crate::quote::{format_eur, DiscountKind};
use base64::Engine;
use tracing::warn;

/// Assembles the five-section proposal document. Section order and the
/// static wording are part of the document contract and never vary with
/// input; only row content, the gallery and the tour-dependent terms do.
pub fn render(catalog: &Catalog, input: &ProposalInput) -> StructuredDocument {
    let mut sections = vec![
        cover_section(input),
        services_section(catalog, input),
        summary_section(input),
    ];
    if !input.images.is_empty() {
        sections.push(gallery_section(input));
    }
    sections.push(terms_section(catalog, input));

    StructuredDocument { sections }
}

/// A tour-class service extends the terms page: delivery is promised
/// against a down payment and the hosting footnote applies.
pub fn has_tour_service(catalog: &Catalog, services: &[ServiceSelection]) -> bool {
    services
        .iter()
        .filter(|s| s.contributes())
        .filter_map(|s| catalog.get(s.id))
        .any(|entry| {
            let name = entry.name.to_lowercase();
            name.contains("360") || name.contains("virtual") || name.contains("tour")
        })
}

fn paragraph(runs: Vec<TextRun>, align: Alignment) -> Block {
    Block::Paragraph(Paragraph { runs, align })
}

fn cover_section(input: &ProposalInput) -> Section {
    let mut blocks = vec![
        paragraph(vec![TextRun::plain(copy::SENDER_LINE)], Alignment::Left),
        paragraph(
            vec![TextRun::bold(input.client.company_name.clone())],
            Alignment::Left,
        ),
        paragraph(vec![TextRun::plain(input.client.street.clone())], Alignment::Left),
        paragraph(
            vec![TextRun::plain(format!(
                "{} {}",
                input.client.postal_code, input.client.city
            ))],
            Alignment::Left,
        ),
        paragraph(vec![TextRun::plain(country_line(input))], Alignment::Left),
        paragraph(vec![TextRun::plain(input.date.clone())], Alignment::Right),
        paragraph(
            vec![
                TextRun::bold(copy::OFFER_NUMBER_LABEL),
                TextRun::bold(input.offer_number.clone()),
            ],
            Alignment::Left,
        ),
        paragraph(vec![TextRun::plain(copy::INTRO)], Alignment::Justified),
        paragraph(vec![TextRun::bold(copy::BENEFITS_TITLE)], Alignment::Left),
    ];

    for (index, (title, text)) in copy::BENEFITS.iter().enumerate() {
        blocks.push(paragraph(
            vec![
                TextRun::bold(format!("{}. {}", index + 1, title)),
                TextRun::plain(format!(" {}", text)),
            ],
            Alignment::Justified,
        ));
    }

    Section {
        kind: SectionKind::Cover,
        blocks,
    }
}

fn country_line(input: &ProposalInput) -> String {
    if input.client.country.is_empty() {
        copy::COUNTRY_LINE.to_string()
    } else {
        input.client.country.clone()
    }
}

fn services_section(catalog: &Catalog, input: &ProposalInput) -> Section {
    let mut rows = vec![TableRow {
        header: true,
        cells: copy::TABLE_HEADERS
            .iter()
            .map(|h| TableCell::bold_text(*h))
            .collect(),
    }];

    let contributing: Vec<&ServiceSelection> = input
        .services
        .iter()
        .filter(|s| s.contributes())
        .collect();

    if contributing.is_empty() {
        rows.push(TableRow {
            header: false,
            cells: vec![
                TableCell::text(""),
                TableCell::text(copy::NO_SERVICES_PLACEHOLDER),
                TableCell::text(""),
                TableCell::text(""),
            ],
        });
    }

    for selection in contributing {
        let Some(entry) = catalog.get(selection.id) else {
            continue;
        };
        rows.push(service_row(entry, selection));
        rows.extend(tier_rows(entry, selection));
    }

    Section {
        kind: SectionKind::Services,
        blocks: vec![
            paragraph(vec![TextRun::bold(copy::SERVICES_INTRO)], Alignment::Left),
            Block::Table(Table { rows }),
        ],
    }
}

fn service_row(entry: &CatalogEntry, selection: &ServiceSelection) -> TableRow {
    let mut bullets: Vec<BulletLine> = entry
        .description
        .iter()
        .map(|line| BulletLine {
            text: (*line).to_string(),
            link: if line.contains("KLICK") {
                entry.link.map(str::to_string)
            } else {
                None
            },
        })
        .collect();
    for extra in &selection.custom_bullets {
        if !extra.trim().is_empty() {
            bullets.push(BulletLine {
                text: extra.clone(),
                link: None,
            });
        }
    }

    let price = unit_price(entry, selection);
    TableRow {
        header: false,
        cells: vec![
            TableCell::text(selection.quantity.to_string()),
            TableCell::bold_text(entry.name),
            TableCell::bullets(bullets),
            TableCell::text(format!("{} €", format_eur(price))),
        ],
    }
}

/// Sub-rows spelling out the quantity tiers under a tiered service. The
/// label row comes first, then one row per tier.
fn tier_rows(entry: &CatalogEntry, selection: &ServiceSelection) -> Vec<TableRow> {
    let Some(tiers) = entry.price_tiers(selection.building_type.as_deref()) else {
        return Vec::new();
    };

    let mut rows = vec![TableRow {
        header: false,
        cells: vec![
            TableCell::text(""),
            TableCell::bold_text(copy::PRICE_TIERS_LABEL),
            TableCell::text(""),
            TableCell::text(""),
        ],
    }];

    for (index, price) in tiers.iter().enumerate() {
        let quantity = index + 1;
        let label = if quantity == 1 {
            "1 Ansicht Netto:".to_string()
        } else if entry.tiers_open_ended && index == tiers.len() - 1 {
            format!("≥{} Ansichten: Netto pro Ansicht:", quantity)
        } else {
            format!("{} Ansichten: Netto pro Ansicht:", quantity)
        };
        rows.push(TableRow {
            header: false,
            cells: vec![
                TableCell::text(""),
                TableCell::text(label),
                TableCell::text(format!("{} €", format_eur(*price))),
                TableCell::text(""),
            ],
        });
    }

    rows
}

fn summary_section(input: &ProposalInput) -> Section {
    let quote = &input.quote;
    let mut rows = Vec::new();

    if let Some(discount) = &input.discount {
        rows.push(summary_row(
            copy::SUBTOTAL_NET_LABEL,
            false,
            format!("{} €", format_eur(quote.subtotal_net)),
        ));
        let mut label = copy::DISCOUNT_LABEL.to_string();
        if discount.kind == DiscountKind::Percentage {
            label.push_str(&format!(" ({} %)", format_eur(discount.value)));
        }
        if !discount.description.is_empty() {
            label.push_str(&format!(": {}", discount.description));
        }
        rows.push(summary_row(
            &label,
            false,
            format!("- {} €", format_eur(quote.discount_amount)),
        ));
    }

    rows.push(summary_row(
        copy::TOTAL_NET_LABEL,
        true,
        format!("{} €", format_eur(quote.total_net)),
    ));
    rows.push(summary_row(
        copy::VAT_LABEL,
        false,
        format!("{} €", format_eur(quote.total_vat)),
    ));
    rows.push(summary_row(
        copy::TOTAL_GROSS_LABEL,
        true,
        format!("{} €", format_eur(quote.total_gross)),
    ));

    Section {
        kind: SectionKind::PricingSummary,
        blocks: vec![
            paragraph(vec![TextRun::bold(copy::SUMMARY_TITLE)], Alignment::Left),
            Block::Table(Table { rows }),
        ],
    }
}

fn summary_row(label: &str, bold: bool, amount: String) -> TableRow {
    let label_cell = if bold {
        TableCell::bold_text(label)
    } else {
        TableCell::text(label)
    };
    TableRow {
        header: false,
        cells: vec![
            TableCell::text(""),
            label_cell,
            TableCell::text(""),
            TableCell::text(amount),
        ],
    }
}

fn gallery_section(input: &ProposalInput) -> Section {
    let mut blocks = vec![paragraph(
        vec![TextRun::bold(copy::GALLERY_TITLE)],
        Alignment::Left,
    )];

    for (index, image) in input.images.iter().enumerate() {
        if !image.title.is_empty() {
            blocks.push(paragraph(
                vec![TextRun::bold(image.title.clone())],
                Alignment::Left,
            ));
        }
        if !image.description.is_empty() {
            blocks.push(paragraph(
                vec![TextRun::plain(image.description.clone())],
                Alignment::Justified,
            ));
        }

        match decode_image_payload(image.image_data.as_deref()) {
            Some(bytes) => blocks.push(Block::Image(EmbeddedImage {
                bytes,
                file_type: image.file_type.clone(),
            })),
            None => {
                let label = if image.title.is_empty() {
                    format!("Bild {}", index + 1)
                } else {
                    image.title.clone()
                };
                warn!(%label, "image payload missing or undecodable, inserting placeholder");
                blocks.push(paragraph(
                    vec![TextRun::italic(format!(
                        "[Bild konnte nicht geladen werden: {}]",
                        label
                    ))],
                    Alignment::Center,
                ));
            }
        }
    }

    Section {
        kind: SectionKind::Gallery,
        blocks,
    }
}

/// Base64 image payload, with or without a `data:...;base64,` prefix.
fn decode_image_payload(data: Option<&str>) -> Option<Vec<u8>> {
    let data = data?;
    let raw = match data.split_once(',') {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => data,
    };
    base64::engine::general_purpose::STANDARD.decode(raw.trim()).ok()
}

fn terms_section(catalog: &Catalog, input: &ProposalInput) -> Section {
    let tour = has_tour_service(catalog, &input.services);

    let delivery_terms = if tour {
        format!(
            "{} Arbeitstage nach Eingang der Anzahlung i.H.v. 50% des Bruttopreises ({} EUR) und Erhalt aller Unterlagen und Informationen",
            input.delivery_days,
            format_eur(input.quote.total_gross)
        )
    } else {
        format!(
            "{} Arbeitstage nach Auftragseingang und Erhalt aller Unterlagen und Informationen",
            input.delivery_days
        )
    };

    let mut blocks = vec![
        paragraph(
            vec![
                TextRun::bold(copy::VALID_UNTIL_LABEL),
                TextRun::bold(input.offer_valid_until.clone()),
            ],
            Alignment::Left,
        ),
        paragraph(
            vec![
                TextRun::bold(copy::DELIVERY_WAY_LABEL),
                TextRun::plain(copy::DELIVERY_WAY),
            ],
            Alignment::Left,
        ),
        paragraph(
            vec![
                TextRun::bold(copy::DELIVERY_DATE_LABEL),
                TextRun::plain(delivery_terms),
            ],
            Alignment::Left,
        ),
        paragraph(vec![TextRun::italic(copy::CLOSING)], Alignment::Left),
        paragraph(
            vec![TextRun::italic(input.signature_name.clone())],
            Alignment::Left,
        ),
        paragraph(vec![TextRun::bold(copy::FOOTNOTE_1_MARKER)], Alignment::Left),
        paragraph(vec![TextRun::plain(copy::FOOTNOTE_1)], Alignment::Justified),
    ];

    if tour {
        blocks.push(paragraph(
            vec![TextRun::bold(copy::FOOTNOTE_2_MARKER)],
            Alignment::Left,
        ));
        blocks.push(paragraph(
            vec![TextRun::plain(copy::FOOTNOTE_2)],
            Alignment::Justified,
        ));
    }

    blocks.push(paragraph(
        vec![TextRun::bold(copy::DISCLAIMER_TITLE)],
        Alignment::Left,
    ));
    blocks.push(paragraph(
        vec![TextRun::plain(copy::DISCLAIMER)],
        Alignment::Justified,
    ));

    Section {
        kind: SectionKind::Terms,
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ServiceId;
    use crate::document::{CellContent, ClientInfo, ProposalImage};
    use crate::quote::compute_quote;

    fn client() -> ClientInfo {
        ClientInfo {
            client_number: Some("10234".to_string()),
            company_name: "Musterbau GmbH".to_string(),
            street: "Hauptstraße 1".to_string(),
            postal_code: "78467".to_string(),
            city: "Konstanz".to_string(),
            country: "Deutschland".to_string(),
        }
    }

    fn input_with(services: Vec<ServiceSelection>, images: Vec<ProposalImage>) -> ProposalInput {
        let catalog = Catalog::new();
        let quote = compute_quote(&catalog, &services, None);
        ProposalInput {
            offer_number: "2026-03-14-8".to_string(),
            client: client(),
            date: "14.03.2026".to_string(),
            offer_valid_until: "21.03.2026".to_string(),
            delivery_days: "7 - 10".to_string(),
            services,
            discount: None,
            quote,
            signature_name: "Christopher Helm".to_string(),
            images,
        }
    }

    fn body_rows(document: &StructuredDocument) -> Vec<&TableRow> {
        let section = document.section(SectionKind::Services).unwrap();
        let Some(Block::Table(table)) = section
            .blocks
            .iter()
            .find(|b| matches!(b, Block::Table(_)))
        else {
            panic!("services section has no table");
        };
        table.rows.iter().filter(|r| !r.header).collect()
    }

    fn terms_text(document: &StructuredDocument) -> String {
        document
            .section(SectionKind::Terms)
            .unwrap()
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Paragraph(p) => Some(p.text()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn empty_selection_renders_a_single_placeholder_row() {
        let catalog = Catalog::new();
        let document = render(&catalog, &input_with(Vec::new(), Vec::new()));

        let rows = body_rows(&document);
        assert_eq!(rows.len(), 1);
        match &rows[0].cells[1].content {
            CellContent::Text(text) => assert_eq!(text, copy::NO_SERVICES_PLACEHOLDER),
            other => panic!("unexpected cell content: {:?}", other),
        }
    }

    #[test]
    fn tiered_service_gets_label_and_tier_sub_rows() {
        let catalog = Catalog::new();
        let interior = ServiceSelection::new(ServiceId::Interior, 2);
        let document = render(&catalog, &input_with(vec![interior], Vec::new()));

        let rows = body_rows(&document);
        // service row + label row + 10 tier rows
        assert_eq!(rows.len(), 12);
        let labels: Vec<String> = rows
            .iter()
            .skip(2)
            .map(|r| match &r.cells[1].content {
                CellContent::Text(t) => t.clone(),
                _ => String::new(),
            })
            .collect();
        assert_eq!(labels[0], "1 Ansicht Netto:");
        assert_eq!(labels[1], "2 Ansichten: Netto pro Ansicht:");
        assert_eq!(labels[9], "≥10 Ansichten: Netto pro Ansicht:");
    }

    #[test]
    fn reference_bullets_carry_the_catalog_link() {
        let catalog = Catalog::new();
        let staging = ServiceSelection::new(ServiceId::HomeStaging, 1);
        let document = render(&catalog, &input_with(vec![staging], Vec::new()));

        let rows = body_rows(&document);
        let CellContent::Bullets(bullets) = &rows[0].cells[2].content else {
            panic!("description cell is not a bullet list");
        };
        let reference = bullets
            .iter()
            .find(|b| b.text.contains("KLICK"))
            .expect("reference bullet");
        assert!(reference.link.is_some());
    }

    #[test]
    fn tour_service_switches_terms_to_down_payment_and_adds_footnote() {
        let catalog = Catalog::new();
        let mut tour = ServiceSelection::new(ServiceId::TourInterior, 1);
        tour.apartment_size = Some("50".to_string());
        let document = render(&catalog, &input_with(vec![tour], Vec::new()));

        let text = terms_text(&document);
        assert!(text.contains("Anzahlung i.H.v. 50% des Bruttopreises"));
        assert!(text.contains(copy::FOOTNOTE_2_MARKER));
        assert!(text.contains(copy::FOOTNOTE_2));
    }

    #[test]
    fn non_tour_terms_omit_footnote_two() {
        let catalog = Catalog::new();
        let staging = ServiceSelection::new(ServiceId::HomeStaging, 1);
        let document = render(&catalog, &input_with(vec![staging], Vec::new()));

        let text = terms_text(&document);
        assert!(text.contains("nach Auftragseingang und Erhalt aller Unterlagen"));
        assert!(!text.contains(copy::FOOTNOTE_2_MARKER));
        assert!(text.contains(copy::FOOTNOTE_1));
    }

    #[test]
    fn gallery_appears_only_when_images_are_present() {
        let catalog = Catalog::new();
        let without = render(&catalog, &input_with(Vec::new(), Vec::new()));
        assert!(without.section(SectionKind::Gallery).is_none());

        let png = base64::engine::general_purpose::STANDARD.encode([0x89, 0x50, 0x4e, 0x47]);
        let image = ProposalImage {
            title: "Perspektive 1".to_string(),
            description: "Blick von der Straße".to_string(),
            image_data: Some(format!("data:image/png;base64,{}", png)),
            file_type: "image/png".to_string(),
        };
        let with = render(&catalog, &input_with(Vec::new(), vec![image]));
        let gallery = with.section(SectionKind::Gallery).unwrap();
        assert!(gallery
            .blocks
            .iter()
            .any(|b| matches!(b, Block::Image(_))));
    }

    #[test]
    fn broken_image_payload_becomes_a_placeholder() {
        let catalog = Catalog::new();
        let image = ProposalImage {
            title: "Perspektive 2".to_string(),
            description: String::new(),
            image_data: Some("not base64 at all!!!".to_string()),
            file_type: "image/png".to_string(),
        };
        let document = render(&catalog, &input_with(Vec::new(), vec![image]));

        let gallery = document.section(SectionKind::Gallery).unwrap();
        assert!(!gallery.blocks.iter().any(|b| matches!(b, Block::Image(_))));
        let placeholder = gallery
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Paragraph(p) => Some(p.text()),
                _ => None,
            })
            .find(|t| t.contains("Bild konnte nicht geladen werden"))
            .expect("placeholder paragraph");
        assert!(placeholder.contains("Perspektive 2"));
    }

    #[test]
    fn discount_adds_subtotal_and_discount_rows() {
        use crate::quote::{Discount, DiscountKind};

        let catalog = Catalog::new();
        let slideshow = ServiceSelection::new(ServiceId::Slideshow, 1);
        let discount = Discount {
            kind: DiscountKind::Percentage,
            value: 10.0,
            description: String::new(),
        };
        let mut input = input_with(vec![slideshow.clone()], Vec::new());
        input.quote = compute_quote(&catalog, &[slideshow], Some(&discount));
        input.discount = Some(discount);

        let document = render(&catalog, &input);
        let section = document.section(SectionKind::PricingSummary).unwrap();
        let Some(Block::Table(table)) = section
            .blocks
            .iter()
            .find(|b| matches!(b, Block::Table(_)))
        else {
            panic!("summary has no table");
        };
        assert_eq!(table.rows.len(), 5);
        let labels: Vec<String> = table
            .rows
            .iter()
            .map(|r| match &r.cells[1].content {
                CellContent::Text(t) => t.clone(),
                _ => String::new(),
            })
            .collect();
        assert_eq!(labels[0], copy::SUBTOTAL_NET_LABEL);
        assert!(labels[1].starts_with(copy::DISCOUNT_LABEL));
        assert_eq!(labels[4], copy::TOTAL_GROSS_LABEL);
    }
}
