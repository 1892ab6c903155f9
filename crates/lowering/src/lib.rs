//! Lowering from the ergonomic document model to the renderer-native model.
//!
//! Callers position everything with a top-left origin and y growing downward.
//! PDF user space puts the origin at the bottom-left with y growing upward, so
//! every coordinate is flipped against the height of the page it belongs to.
//!
//! Lowering a page:
//!
//! 1. collects the distinct fonts used by text operations into the page's resource table,
//! 2. emits one command group per operation, in the original order,
//! 3. flips annotation regions with the same page height.
//!
//! Lowering is total: degenerate or negative geometry is passed through as-is.
//!
//! ```
//! use folio_document::{Content, Document, Page};
//! use folio_lowering::lower_document;
//! use folio_render_core::ContentOp;
//! use folio_types::{PaperSize, Point};
//!
//! let page = Page::new(Content::text("Hello", Point::new(72.0, 72.0)))
//!     .with_paper_size(PaperSize::LETTER);
//! let lowered = lower_document(&Document::single(page));
//!
//! assert!(lowered.pages[0]
//!     .content
//!     .ops()
//!     .contains(&ContentOp::MoveText { x: 72.0, y: 720.0 }));
//! ```

mod document;
mod emit;
mod flip;
mod fonts;
mod page;

pub use document::{lower_document, lower_document_with};
pub use emit::{emit_operation, emit_operations};
pub use flip::AxisFlip;
pub use fonts::{collect_font_resources, font_object, standard14};
pub use page::{lower_annotation, lower_page};
