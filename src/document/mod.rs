//! Assembly of the structured proposal document. Pure with respect to its
//! output: the same input always produces the same section/block sequence.
//! Binary encoding is the pdf module's concern.

use crate::pricing::ServiceSelection;
use crate::quote::{Discount, Quote};
use serde::{Deserialize, Serialize};

mod builder;
pub mod copy;

pub use builder::render;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    #[serde(default)]
    pub client_number: Option<String>,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub city: String,
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    "Deutschland".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[serde(default)]
    pub project_number: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub project_type: Option<String>,
    /// Submission date, DD.MM.YYYY.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "MM", default)]
    pub mm: Option<String>,
    #[serde(rename = "DD", default)]
    pub dd: Option<String>,
    #[serde(default)]
    pub delivery_days: Option<String>,
    #[serde(default)]
    pub offer_valid_until: Option<String>,
}

/// Image attached to a proposal; the payload is a base64 string, possibly
/// with a data-URL prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalImage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_data: Option<String>,
    #[serde(default = "default_file_type")]
    pub file_type: String,
}

fn default_file_type() -> String {
    "image/png".to_string()
}

/// Everything the document builder needs, already computed.
#[derive(Debug, Clone)]
pub struct ProposalInput {
    pub offer_number: String,
    pub client: ClientInfo,
    /// DD.MM.YYYY
    pub date: String,
    pub offer_valid_until: String,
    /// "N - M Werktage"
    pub delivery_days: String,
    pub services: Vec<ServiceSelection>,
    pub discount: Option<Discount>,
    pub quote: Quote,
    pub signature_name: String,
    pub images: Vec<ProposalImage>,
}

#[derive(Debug, Clone)]
pub struct StructuredDocument {
    pub sections: Vec<Section>,
}

impl StructuredDocument {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Cover,
    Services,
    PricingSummary,
    Gallery,
    Terms,
}

/// One page-flow unit with its own header/footer, rendered on a fresh page.
#[derive(Debug, Clone)]
pub struct Section {
    pub kind: SectionKind,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    Image(EmbeddedImage),
    PageBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
    Justified,
}

#[derive(Debug, Clone)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    pub align: Alignment,
}

impl Paragraph {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[derive(Debug, Clone)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: false,
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone)]
pub struct TableRow {
    pub header: bool,
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone)]
pub struct TableCell {
    pub content: CellContent,
    pub bold: bool,
}

impl TableCell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: CellContent::Text(text.into()),
            bold: false,
        }
    }

    pub fn bold_text(text: impl Into<String>) -> Self {
        Self {
            content: CellContent::Text(text.into()),
            bold: true,
        }
    }

    pub fn bullets(lines: Vec<BulletLine>) -> Self {
        Self {
            content: CellContent::Bullets(lines),
            bold: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum CellContent {
    Text(String),
    Bullets(Vec<BulletLine>),
}

/// One bullet in a description cell; a link is attached when the bullet
/// carries a reference marker.
#[derive(Debug, Clone)]
pub struct BulletLine {
    pub text: String,
    pub link: Option<String>,
}

/// Decoded image payload ready for embedding.
#[derive(Debug, Clone)]
pub struct EmbeddedImage {
    pub bytes: Vec<u8>,
    pub file_type: String,
}
