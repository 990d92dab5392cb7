//! Turns a structured proposal document into PDF bytes. Layout is a
//! single-column flow with a manual y cursor; each section starts on a
//! fresh A4 page.

use crate::document::{
    copy, Alignment, Block, CellContent, Paragraph, StructuredDocument, Table, TableRow, TextRun,
};
use printpdf::*;
use std::io::BufWriter;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("PDF rendering error: {0}")]
    Render(String),
}

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN_LEFT: f64 = 15.0;
const MARGIN_RIGHT: f64 = 15.0;
const MARGIN_TOP: f64 = 18.0;
const MARGIN_BOTTOM: f64 = 18.0;
const BODY_WIDTH: f64 = PAGE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;

const BODY_SIZE: f64 = 10.0;
const TABLE_SIZE: f64 = 8.5;
const LINE_HEIGHT: f64 = 5.0;
const TABLE_LINE_HEIGHT: f64 = 4.2;

/// Column left edges and character budgets of the four-column service
/// table (quantity, name, description, unit price).
const COLUMN_X: [f64; 4] = [MARGIN_LEFT, 30.0, 82.0, 168.0];
const COLUMN_CHARS: [usize; 4] = [8, 32, 54, 16];

/// Average Helvetica glyph width, pt-to-mm times an 0.5 em estimate.
/// Good enough for wrapping; exact metrics are not worth embedding.
fn char_width_mm(size: f64) -> f64 {
    size * 0.3528 * 0.5
}

pub fn encode(document: &StructuredDocument) -> Result<Vec<u8>, PdfError> {
    let (doc, page, layer) = PdfDocument::new("Angebot", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| PdfError::Render(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| PdfError::Render(e.to_string()))?;
    let italic = doc
        .add_builtin_font(BuiltinFont::HelveticaOblique)
        .map_err(|e| PdfError::Render(e.to_string()))?;

    let mut renderer = Renderer {
        doc,
        font,
        bold,
        italic,
        layer: None,
        y: PAGE_HEIGHT - MARGIN_TOP,
    };
    renderer.start_page(Some((page, layer)));

    for (index, section) in document.sections.iter().enumerate() {
        if index > 0 {
            renderer.start_page(None);
        }
        for block in &section.blocks {
            renderer.render_block(block);
        }
    }

    let mut writer = BufWriter::new(Vec::new());
    renderer
        .doc
        .save(&mut writer)
        .map_err(|e| PdfError::Render(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| PdfError::Render(e.to_string()))
}

struct Renderer {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
    layer: Option<PdfLayerReference>,
    y: f64,
}

impl Renderer {
    fn start_page(&mut self, existing: Option<(PdfPageIndex, PdfLayerIndex)>) {
        let layer = match existing {
            Some((page, layer)) => self.doc.get_page(page).get_layer(layer),
            None => {
                let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
                self.doc.get_page(page).get_layer(layer)
            }
        };
        layer.use_text(
            copy::SENDER_LINE,
            7.0,
            Mm(MARGIN_LEFT),
            Mm(8.0),
            &self.font,
        );
        self.layer = Some(layer);
        self.y = PAGE_HEIGHT - MARGIN_TOP;
    }

    fn layer(&self) -> &PdfLayerReference {
        // Set in start_page before any rendering happens.
        self.layer.as_ref().unwrap()
    }

    fn ensure_space(&mut self, needed: f64) {
        if self.y - needed < MARGIN_BOTTOM {
            self.start_page(None);
        }
    }

    fn font_for(&self, run: &TextRun) -> &IndirectFontRef {
        if run.bold {
            &self.bold
        } else if run.italic {
            &self.italic
        } else {
            &self.font
        }
    }

    fn render_block(&mut self, block: &Block) {
        match block {
            Block::Paragraph(paragraph) => self.render_paragraph(paragraph),
            Block::Table(table) => self.render_table(table),
            Block::Image(image) => self.render_image(&image.bytes),
            Block::PageBreak => self.start_page(None),
        }
    }

    /// Word-level flow across the paragraph's runs, so a bold label and
    /// its plain continuation share lines naturally.
    fn render_paragraph(&mut self, paragraph: &Paragraph) {
        self.ensure_space(LINE_HEIGHT * 2.0);

        let char_w = char_width_mm(BODY_SIZE);

        if paragraph.align == Alignment::Right || paragraph.align == Alignment::Center {
            let text = paragraph.text();
            let width = text.chars().count() as f64 * char_w;
            let x = match paragraph.align {
                Alignment::Right => PAGE_WIDTH - MARGIN_RIGHT - width,
                _ => (PAGE_WIDTH - width) / 2.0,
            };
            let font = paragraph
                .runs
                .first()
                .map(|r| self.font_for(r).clone())
                .unwrap_or_else(|| self.font.clone());
            self.layer()
                .use_text(&text, BODY_SIZE, Mm(x.max(MARGIN_LEFT)), Mm(self.y), &font);
            self.y -= LINE_HEIGHT * 1.5;
            return;
        }

        let mut x = MARGIN_LEFT;
        let limit = MARGIN_LEFT + BODY_WIDTH;
        for run in &paragraph.runs {
            let font = self.font_for(run).clone();
            for word in run.text.split_whitespace() {
                let word_width = (word.chars().count() + 1) as f64 * char_w;
                if x + word_width > limit && x > MARGIN_LEFT {
                    x = MARGIN_LEFT;
                    self.y -= LINE_HEIGHT;
                    self.ensure_space(LINE_HEIGHT);
                }
                self.layer()
                    .use_text(word, BODY_SIZE, Mm(x), Mm(self.y), &font);
                x += word_width;
            }
        }
        self.y -= LINE_HEIGHT * 1.5;
    }

    /// When a row does not fit, the table continues on a fresh page with
    /// the header row repeated, so no continuation page lacks column
    /// labels.
    fn render_table(&mut self, table: &Table) {
        let header = table.rows.iter().find(|r| r.header);

        for row in &table.rows {
            let cells = layout_row(row);
            let height = row_height(&cells);
            if self.y - height < MARGIN_BOTTOM {
                self.start_page(None);
                if let Some(header) = header.filter(|_| !row.header) {
                    self.draw_row(header, &layout_row(header));
                }
            }
            self.draw_row(row, &cells);
        }
        self.y -= LINE_HEIGHT;
    }

    fn draw_row(&mut self, row: &TableRow, cells: &[Vec<String>]) {
        for (col, lines) in cells.iter().enumerate() {
            let x = COLUMN_X.get(col).copied().unwrap_or(MARGIN_LEFT);
            let font = if row.header || row.cells[col].bold {
                self.bold.clone()
            } else {
                self.font.clone()
            };
            let mut line_y = self.y;
            for line in lines {
                self.layer()
                    .use_text(line, TABLE_SIZE, Mm(x), Mm(line_y), &font);
                line_y -= TABLE_LINE_HEIGHT;
            }
        }
        self.y -= row_height(cells);
    }

    /// Embeds a raster image scaled to the body width. Undecodable bytes
    /// degrade to a placeholder line instead of failing the render.
    fn render_image(&mut self, bytes: &[u8]) {
        let Some(pdf_image) = decode_pdf_image(bytes) else {
            warn!("embedded image bytes are not decodable, inserting placeholder");
            self.ensure_space(LINE_HEIGHT);
            self.layer().use_text(
                "[Bild konnte nicht geladen werden]",
                BODY_SIZE,
                Mm(MARGIN_LEFT),
                Mm(self.y),
                &self.italic.clone(),
            );
            self.y -= LINE_HEIGHT * 1.5;
            return;
        };

        let width_px = pdf_image.image.width.0 as f64;
        let height_px = pdf_image.image.height.0 as f64;
        let natural_width_mm = width_px * 25.4 / 96.0;
        let natural_height_mm = height_px * 25.4 / 96.0;

        let max_width = BODY_WIDTH.min(150.0);
        let scale = (max_width / natural_width_mm).min(1.0);
        let height_mm = natural_height_mm * scale;

        self.ensure_space(height_mm + LINE_HEIGHT);

        let transform = ImageTransform {
            translate_x: Some(Mm(MARGIN_LEFT)),
            translate_y: Some(Mm(self.y - height_mm)),
            rotate: None,
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(96.0),
        };
        pdf_image.add_to_layer(self.layer().clone(), transform);
        self.y -= height_mm + LINE_HEIGHT;
    }
}

fn layout_row(row: &TableRow) -> Vec<Vec<String>> {
    row.cells
        .iter()
        .enumerate()
        .map(|(col, cell)| {
            let budget = COLUMN_CHARS.get(col).copied().unwrap_or(30);
            match &cell.content {
                CellContent::Text(text) => wrap(text, budget),
                CellContent::Bullets(bullets) => {
                    let mut lines = Vec::new();
                    for bullet in bullets {
                        for (i, line) in
                            wrap(&bullet.text, budget.saturating_sub(2)).iter().enumerate()
                        {
                            if i == 0 {
                                lines.push(format!("\u{2022} {}", line));
                            } else {
                                lines.push(format!("  {}", line));
                            }
                        }
                    }
                    lines
                }
            }
        })
        .collect()
}

fn row_height(cells: &[Vec<String>]) -> f64 {
    cells.iter().map(Vec::len).max().unwrap_or(1) as f64 * TABLE_LINE_HEIGHT + 2.0
}

/// Raster bytes to an embeddable PDF image, sniffing the format from the
/// magic bytes. JPEG and PNG cover everything the proposal form submits.
fn decode_pdf_image(bytes: &[u8]) -> Option<Image> {
    use ::image::codecs::jpeg::JpegDecoder;
    use ::image::codecs::png::PngDecoder;
    use std::io::Cursor;

    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        let decoder = PngDecoder::new(Cursor::new(bytes)).ok()?;
        Image::try_from(decoder).ok()
    } else if bytes.starts_with(&[0xff, 0xd8]) {
        let decoder = JpegDecoder::new(Cursor::new(bytes)).ok()?;
        Image::try_from(decoder).ok()
    } else {
        None
    }
}

/// Greedy word wrap against a character budget. Words longer than the
/// budget get a line of their own.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ServiceId};
    use crate::document::{render, ClientInfo, ProposalInput};
    use crate::pricing::ServiceSelection;
    use crate::quote::compute_quote;

    fn sample_input(catalog: &Catalog) -> ProposalInput {
        let services = vec![
            ServiceSelection::new(ServiceId::Interior, 3),
            ServiceSelection::new(ServiceId::HomeStaging, 2),
        ];
        let quote = compute_quote(catalog, &services, None);
        ProposalInput {
            offer_number: "2026-03-14-8".to_string(),
            client: ClientInfo {
                client_number: None,
                company_name: "Musterbau GmbH".to_string(),
                street: "Hauptstraße 1".to_string(),
                postal_code: "78467".to_string(),
                city: "Konstanz".to_string(),
                country: "Deutschland".to_string(),
            },
            date: "14.03.2026".to_string(),
            offer_valid_until: "21.03.2026".to_string(),
            delivery_days: "9 - 12".to_string(),
            services,
            discount: None,
            quote,
            signature_name: "Christopher Helm".to_string(),
            images: Vec::new(),
        }
    }

    #[test]
    fn encoding_a_full_proposal_yields_a_pdf() {
        let catalog = Catalog::new();
        let document = render(&catalog, &sample_input(&catalog));

        let bytes = encode(&document).expect("pdf bytes");
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn long_table_continues_across_pages() {
        use crate::document::{Section, SectionKind, TableCell};

        let mut rows = vec![TableRow {
            header: true,
            cells: copy::TABLE_HEADERS
                .iter()
                .map(|h| TableCell::bold_text(*h))
                .collect(),
        }];
        for i in 0..120 {
            rows.push(TableRow {
                header: false,
                cells: vec![
                    TableCell::text("1"),
                    TableCell::text(format!("Position {}", i)),
                    TableCell::text("Fotorealistische Qualität"),
                    TableCell::text("99,00 €"),
                ],
            });
        }
        let document = StructuredDocument {
            sections: vec![Section {
                kind: SectionKind::Services,
                blocks: vec![Block::Table(Table { rows })],
            }],
        };

        let bytes = encode(&document).expect("pdf bytes");
        // "/Type /Pages" itself contains the page marker once; two or
        // more content pages push the count past two.
        let pages = count_occurrences(&bytes, b"/Type /Page");
        assert!(pages >= 3, "expected a multi-page table, got {} markers", pages);
    }

    fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
        haystack
            .windows(needle.len())
            .filter(|w| *w == needle)
            .count()
    }

    #[test]
    fn wrap_respects_the_character_budget() {
        let lines = wrap("Geliefert werden hochwertige Visualisierungen in bester Qualität", 20);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 20, "line too long: {}", line);
        }
    }

    #[test]
    fn wrap_of_empty_text_is_one_empty_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }
}
