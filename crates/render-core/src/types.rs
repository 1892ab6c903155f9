use crate::content::ContentStream;
use crate::font::{FontObject, ResourceName};
use folio_types::{Info, Version, ViewerPreferences};
use std::collections::BTreeMap;

/// A rectangle in PDF user space: `(x, y)` is the lower-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PdfRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PdfRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn llx(&self) -> f64 {
        self.x
    }

    pub fn lly(&self) -> f64 {
        self.y
    }

    pub fn urx(&self) -> f64 {
        self.x + self.width
    }

    pub fn ury(&self) -> f64 {
        self.y + self.height
    }

    /// `[llx lly urx ury]` as written into `/MediaBox` and `/Rect`.
    pub fn corners(&self) -> [f64; 4] {
        [self.llx(), self.lly(), self.urx(), self.ury()]
    }
}

/// Per-page resource table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resources {
    pub fonts: BTreeMap<ResourceName, FontObject>,
}

impl Resources {
    /// Registers `font` under its resource name, returning whatever the name pointed at before.
    pub fn insert_font(&mut self, font: FontObject) -> Option<FontObject> {
        self.fonts.insert(font.resource_name(), font)
    }

    pub fn font(&self, name: &ResourceName) -> Option<&FontObject> {
        self.fonts.get(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PdfAnnotation {
    Link { rect: PdfRect, uri: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfPage {
    pub media_box: PdfRect,
    pub content: ContentStream,
    pub resources: Resources,
    pub annotations: Vec<PdfAnnotation>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfDocument {
    pub version: Version,
    pub pages: Vec<PdfPage>,
    pub info: Option<Info>,
    pub viewer: ViewerPreferences,
}
