//! Content stream operators in PDF user space (bottom-left origin, y up).

use crate::font::{FontObject, ResourceName};
use crate::types::PdfRect;

#[derive(Debug, Clone, PartialEq)]
pub enum ContentOp {
    BeginText,
    EndText,
    SetFillGray(f64),
    SetFillRgb(f64, f64, f64),
    SetStrokeGray(f64),
    SetStrokeRgb(f64, f64, f64),
    SetFont { font: ResourceName, size: f64 },
    MoveText { x: f64, y: f64 },
    ShowText(String),
    SetLineWidth(f64),
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Rectangle(PdfRect),
    Fill,
    Stroke,
    FillAndStroke,
}

impl ContentOp {
    /// The PDF operator keyword.
    pub fn operator(&self) -> &'static str {
        match self {
            ContentOp::BeginText => "BT",
            ContentOp::EndText => "ET",
            ContentOp::SetFillGray(_) => "g",
            ContentOp::SetFillRgb(..) => "rg",
            ContentOp::SetStrokeGray(_) => "G",
            ContentOp::SetStrokeRgb(..) => "RG",
            ContentOp::SetFont { .. } => "Tf",
            ContentOp::MoveText { .. } => "Td",
            ContentOp::ShowText(_) => "Tj",
            ContentOp::SetLineWidth(_) => "w",
            ContentOp::MoveTo { .. } => "m",
            ContentOp::LineTo { .. } => "l",
            ContentOp::Rectangle(_) => "re",
            ContentOp::Fill => "f",
            ContentOp::Stroke => "S",
            ContentOp::FillAndStroke => "B",
        }
    }
}

/// An append-only list of operators making up one page's drawing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentStream {
    ops: Vec<ContentOp>,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[ContentOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn push(&mut self, op: ContentOp) -> &mut Self {
        self.ops.push(op);
        self
    }

    pub fn begin_text(&mut self) -> &mut Self {
        self.push(ContentOp::BeginText)
    }

    pub fn end_text(&mut self) -> &mut Self {
        self.push(ContentOp::EndText)
    }

    pub fn set_fill_gray(&mut self, gray: f64) -> &mut Self {
        self.push(ContentOp::SetFillGray(gray))
    }

    pub fn set_fill_rgb(&mut self, r: f64, g: f64, b: f64) -> &mut Self {
        self.push(ContentOp::SetFillRgb(r, g, b))
    }

    pub fn set_stroke_gray(&mut self, gray: f64) -> &mut Self {
        self.push(ContentOp::SetStrokeGray(gray))
    }

    pub fn set_stroke_rgb(&mut self, r: f64, g: f64, b: f64) -> &mut Self {
        self.push(ContentOp::SetStrokeRgb(r, g, b))
    }

    /// Selects `font` by its resource name; the page resources must carry it.
    pub fn set_font(&mut self, font: &FontObject, size: f64) -> &mut Self {
        self.push(ContentOp::SetFont {
            font: font.resource_name(),
            size,
        })
    }

    pub fn move_text(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(ContentOp::MoveText { x, y })
    }

    pub fn show_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(ContentOp::ShowText(text.into()))
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.push(ContentOp::SetLineWidth(width))
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(ContentOp::MoveTo { x, y })
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(ContentOp::LineTo { x, y })
    }

    pub fn rectangle(&mut self, rect: PdfRect) -> &mut Self {
        self.push(ContentOp::Rectangle(rect))
    }

    pub fn fill(&mut self) -> &mut Self {
        self.push(ContentOp::Fill)
    }

    pub fn stroke(&mut self) -> &mut Self {
        self.push(ContentOp::Stroke)
    }

    pub fn fill_and_stroke(&mut self) -> &mut Self {
        self.push(ContentOp::FillAndStroke)
    }
}
