use crate::content::Content;
use folio_types::{EdgeInsets, PaperSize, Rect};

/// An interactive region on a page, positioned in ergonomic space.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    /// Opens `uri` when `rect` is clicked.
    Link { rect: Rect, uri: String },
}

impl Annotation {
    pub fn link(rect: Rect, uri: impl Into<String>) -> Self {
        Annotation::Link {
            rect,
            uri: uri.into(),
        }
    }
}

/// A single page: its sheet, margins, drawing operations and annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub paper_size: PaperSize,
    pub margins: EdgeInsets,
    pub content: Content,
    pub annotations: Vec<Annotation>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Content::empty())
    }
}

impl Page {
    /// An A4 page with one-inch margins.
    pub fn new(content: Content) -> Self {
        Self {
            paper_size: PaperSize::A4,
            margins: EdgeInsets::STANDARD,
            content,
            annotations: Vec::new(),
        }
    }

    pub fn with_paper_size(mut self, paper_size: PaperSize) -> Self {
        self.paper_size = paper_size;
        self
    }

    pub fn with_margins(mut self, margins: EdgeInsets) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn content_width(&self) -> f64 {
        self.paper_size.width - self.margins.horizontal()
    }

    pub fn content_height(&self) -> f64 {
        self.paper_size.height - self.margins.vertical()
    }

    /// The area inside the margins.
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.margins.left,
            self.margins.top,
            self.content_width(),
            self.content_height(),
        )
    }
}
