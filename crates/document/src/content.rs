//! Page content as an ordered list of drawing operations.
//!
//! Operations are painted in sequence, so later operations may cover earlier
//! ones. All coordinates are in ergonomic space (top-left origin, y down).

use folio_types::{Color, Font, Point, Rect};

// --- Operations ---

/// Draw a single run of text with its baseline starting at `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOperation {
    pub text: String,
    pub position: Point,
    pub font: Font,
    pub size: f64,
    pub color: Color,
}

impl TextOperation {
    pub fn new(text: impl Into<String>, position: Point, font: Font, size: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            position,
            font,
            size,
            color,
        }
    }
}

/// Vector graphics.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphicsOperation {
    /// A straight stroked segment.
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    /// An axis-aligned rectangle, filled and/or stroked.
    ///
    /// With neither `fill` nor `stroke` the path is still emitted and paints nothing.
    Rectangle {
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<Color>,
        stroke_width: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Text(TextOperation),
    Graphics(GraphicsOperation),
}

impl Operation {
    pub fn line(from: Point, to: Point, stroke: Stroke) -> Self {
        Operation::Graphics(GraphicsOperation::Line {
            from,
            to,
            color: stroke.color,
            width: stroke.width,
        })
    }

    pub fn filled_rect(rect: Rect, fill: Color) -> Self {
        Self::styled_rect(rect, Some(fill), None)
    }

    pub fn stroked_rect(rect: Rect, stroke: Stroke) -> Self {
        Self::styled_rect(rect, None, Some(stroke))
    }

    /// A rectangle with optional fill and stroke. Without a stroke the width defaults to 1.
    pub fn styled_rect(rect: Rect, fill: Option<Color>, stroke: Option<Stroke>) -> Self {
        Operation::Graphics(GraphicsOperation::Rectangle {
            rect,
            fill,
            stroke: stroke.map(|s| s.color),
            stroke_width: stroke.map_or(Stroke::DEFAULT_WIDTH, |s| s.width),
        })
    }

    pub fn font(&self) -> Option<Font> {
        match self {
            Operation::Text(text) => Some(text.font),
            Operation::Graphics(_) => None,
        }
    }
}

impl From<TextOperation> for Operation {
    fn from(op: TextOperation) -> Self {
        Operation::Text(op)
    }
}

impl From<GraphicsOperation> for Operation {
    fn from(op: GraphicsOperation) -> Self {
        Operation::Graphics(op)
    }
}

/// Stroke color and line width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub const DEFAULT_WIDTH: f64 = 1.0;

    pub fn new(color: Color) -> Self {
        Self {
            color,
            width: Self::DEFAULT_WIDTH,
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }
}

// --- Content ---

/// An owned, ordered sequence of operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Content {
    operations: Vec<Operation>,
}

impl Content {
    pub const DEFAULT_FONT: Font = Font::Helvetica;
    pub const DEFAULT_FONT_SIZE: f64 = 12.0;
    pub const DEFAULT_COLOR: Color = Color::BLACK;

    pub fn new(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Text in Helvetica, 12pt, black.
    pub fn text(text: impl Into<String>, at: Point) -> Self {
        Self::styled_text(
            text,
            at,
            Self::DEFAULT_FONT,
            Self::DEFAULT_FONT_SIZE,
            Self::DEFAULT_COLOR,
        )
    }

    pub fn styled_text(
        text: impl Into<String>,
        at: Point,
        font: Font,
        size: f64,
        color: Color,
    ) -> Self {
        Self::new(vec![TextOperation::new(text, at, font, size, color).into()])
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Appends every operation of `other` after the existing ones.
    pub fn append(&mut self, other: Content) {
        self.operations.extend(other.operations);
    }

    pub fn then(mut self, other: Content) -> Self {
        self.append(other);
        self
    }
}

impl From<Operation> for Content {
    fn from(op: Operation) -> Self {
        Self::new(vec![op])
    }
}

impl From<Vec<Operation>> for Content {
    fn from(operations: Vec<Operation>) -> Self {
        Self::new(operations)
    }
}

impl FromIterator<Content> for Content {
    fn from_iter<I: IntoIterator<Item = Content>>(iter: I) -> Self {
        let mut content = Content::empty();
        content.extend(iter);
        content
    }
}

impl FromIterator<Operation> for Content {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Extend<Content> for Content {
    fn extend<I: IntoIterator<Item = Content>>(&mut self, iter: I) {
        for content in iter {
            self.append(content);
        }
    }
}

impl std::ops::Add for Content {
    type Output = Content;

    fn add(self, rhs: Content) -> Content {
        self.then(rhs)
    }
}
