//! Renderer font objects and the resource names that reference them.

use std::fmt;
use std::sync::Arc;

/// The Standard 14 Type1 fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Standard14 {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
    Symbol,
    ZapfDingbats,
}

impl Standard14 {
    pub fn base_font(self) -> &'static str {
        match self {
            Standard14::Helvetica => "Helvetica",
            Standard14::HelveticaBold => "Helvetica-Bold",
            Standard14::HelveticaOblique => "Helvetica-Oblique",
            Standard14::HelveticaBoldOblique => "Helvetica-BoldOblique",
            Standard14::TimesRoman => "Times-Roman",
            Standard14::TimesBold => "Times-Bold",
            Standard14::TimesItalic => "Times-Italic",
            Standard14::TimesBoldItalic => "Times-BoldItalic",
            Standard14::Courier => "Courier",
            Standard14::CourierBold => "Courier-Bold",
            Standard14::CourierOblique => "Courier-Oblique",
            Standard14::CourierBoldOblique => "Courier-BoldOblique",
            Standard14::Symbol => "Symbol",
            Standard14::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// 1-based position in the table above; the source of resource numbering.
    fn ordinal(self) -> u8 {
        self as u8 + 1
    }
}

/// The name a content stream uses to select a font from the page resources (`/F1`).
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ResourceName(Arc<str>);

impl ResourceName {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<&str> for ResourceName {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-embedded Type1 font dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontObject {
    pub standard: Standard14,
}

impl FontObject {
    pub fn new(standard: Standard14) -> Self {
        Self { standard }
    }

    pub fn base_font(&self) -> &'static str {
        self.standard.base_font()
    }

    pub fn subtype(&self) -> &'static str {
        "Type1"
    }

    /// Symbol and ZapfDingbats use their built-in encodings.
    pub fn encoding(&self) -> Option<&'static str> {
        match self.standard {
            Standard14::Symbol | Standard14::ZapfDingbats => None,
            _ => Some("WinAnsiEncoding"),
        }
    }

    /// Stable for a given font within any document.
    pub fn resource_name(&self) -> ResourceName {
        ResourceName::new(format!("F{}", self.standard.ordinal()))
    }
}
