use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Physical page dimensions in points (1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaperSize {
    pub width: f64,
    pub height: f64,
}

impl PaperSize {
    /// 210mm × 297mm
    pub const A4: PaperSize = PaperSize::new(595.276, 841.890);
    /// 297mm × 420mm
    pub const A3: PaperSize = PaperSize::new(841.890, 1190.551);
    /// 148mm × 210mm
    pub const A5: PaperSize = PaperSize::new(419.528, 595.276);
    /// 8.5in × 11in
    pub const LETTER: PaperSize = PaperSize::new(612.0, 792.0);
    /// 8.5in × 14in
    pub const LEGAL: PaperSize = PaperSize::new(612.0, 1008.0);
    /// 11in × 17in
    pub const TABLOID: PaperSize = PaperSize::new(792.0, 1224.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn is_portrait(&self) -> bool {
        self.width <= self.height
    }

    /// The same sheet turned on its side. Already-landscape sizes are returned as-is.
    pub fn landscape(self) -> Self {
        if self.width < self.height {
            Self::new(self.height, self.width)
        } else {
            self
        }
    }

    /// The same sheet stood upright. Already-portrait sizes are returned as-is.
    pub fn portrait(self) -> Self {
        if self.is_portrait() {
            self
        } else {
            Self::new(self.height, self.width)
        }
    }

    /// Looks up one of the named sizes, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "a3" => Some(Self::A3),
            "a4" => Some(Self::A4),
            "a5" => Some(Self::A5),
            "letter" => Some(Self::LETTER),
            "legal" => Some(Self::LEGAL),
            "tabloid" => Some(Self::TABLOID),
            _ => None,
        }
    }
}

impl Default for PaperSize {
    fn default() -> Self {
        Self::A4
    }
}
