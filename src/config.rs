use crate::error::FolioError;
use folio_document::{Content, Document, Page};
use folio_types::{
    Color, EdgeInsets, Font, Info, PaperSize, Point, Size, Version, ViewerPreferences,
};
use serde::{Deserialize, Deserializer, de};
use std::path::Path;

/// Document-wide defaults, loadable from JSON.
///
/// Every field is optional in the JSON form:
///
/// ```json
/// {
///   "paperSize": "letter",
///   "margins": { "top": 36, "left": 36, "bottom": 36, "right": 36 },
///   "defaultFont": "Helvetica-Bold",
///   "defaultColor": "#333333",
///   "viewer": { "displayDocTitle": true },
///   "compress": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    #[serde(deserialize_with = "paper_size")]
    pub paper_size: PaperSize,
    pub margins: EdgeInsets,
    pub default_font: Font,
    pub default_font_size: f64,
    pub default_color: Color,
    pub line_height: f64,
    pub version: Version,
    pub info: Option<Info>,
    pub viewer: ViewerPreferences,
    /// Flate-compress content streams when writing.
    pub compress: bool,
    /// Lower pages on the parallel executor.
    pub parallel: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            margins: EdgeInsets::STANDARD,
            default_font: Font::Times,
            default_font_size: 12.0,
            default_color: Color::BLACK,
            line_height: 1.2,
            version: Version::V1_7,
            info: None,
            viewer: ViewerPreferences::default(),
            compress: true,
            parallel: false,
        }
    }
}

impl Configuration {
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FolioError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn media_box(&self) -> Size {
        self.paper_size.size()
    }

    /// The paper size minus margins.
    pub fn content_size(&self) -> Size {
        Size::new(
            self.paper_size.width - self.margins.horizontal(),
            self.paper_size.height - self.margins.vertical(),
        )
    }

    /// Distance between consecutive baselines at the default font size.
    pub fn line_spacing(&self) -> f64 {
        self.default_font_size * self.line_height
    }

    /// A text run using the configured font, size and color.
    pub fn text(&self, text: impl Into<String>, at: Point) -> Content {
        Content::styled_text(
            text,
            at,
            self.default_font,
            self.default_font_size,
            self.default_color,
        )
    }

    /// One text run per line, starting at the top-left of the content area.
    pub fn paragraph<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> Content {
        let spacing = self.line_spacing();
        lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let baseline = self.margins.top + self.default_font_size + spacing * i as f64;
                self.text(line, Point::new(self.margins.left, baseline))
            })
            .collect()
    }

    pub fn page(&self, content: Content) -> Page {
        Page::new(content)
            .with_paper_size(self.paper_size)
            .with_margins(self.margins)
    }

    pub fn document(&self, pages: Vec<Page>) -> Document {
        let document = Document::new(pages)
            .with_version(self.version)
            .with_viewer(self.viewer);
        match &self.info {
            Some(info) if !info.is_empty() => document.with_info(info.clone()),
            _ => document,
        }
    }
}

/// Accepts either a size name such as `"a4"` or explicit `{ "width", "height" }`.
fn paper_size<'de, D>(deserializer: D) -> Result<PaperSize, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PaperDef {
        Named(String),
        Dimensions(PaperSize),
    }

    match PaperDef::deserialize(deserializer)? {
        PaperDef::Named(name) => PaperSize::from_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown paper size '{}'", name))),
        PaperDef::Dimensions(size) => Ok(size),
    }
}
