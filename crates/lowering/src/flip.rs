//! Conversion between ergonomic space (top-left origin, y down) and PDF user
//! space (bottom-left origin, y up) for one page height.

use folio_render_core::PdfRect;
use folio_types::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisFlip {
    page_height: f64,
}

impl AxisFlip {
    pub fn new(page_height: f64) -> Self {
        Self { page_height }
    }

    pub fn y(&self, y: f64) -> f64 {
        self.page_height - y
    }

    /// `(x, y)` becomes `(x, H - y)`.
    pub fn point(&self, p: Point) -> (f64, f64) {
        (p.x, self.y(p.y))
    }

    /// The top-left corner at `y` maps to a bottom-left corner at `H - y - height`.
    pub fn rect(&self, r: Rect) -> PdfRect {
        PdfRect::new(
            r.x(),
            self.page_height - r.y() - r.height(),
            r.width(),
            r.height(),
        )
    }

    /// Inverse of [`AxisFlip::point`].
    pub fn point_from_pdf(&self, x: f64, y: f64) -> Point {
        Point::new(x, self.y(y))
    }

    /// Inverse of [`AxisFlip::rect`].
    pub fn rect_from_pdf(&self, r: PdfRect) -> Rect {
        Rect::new(r.x, self.page_height - r.y - r.height, r.width, r.height)
    }
}
