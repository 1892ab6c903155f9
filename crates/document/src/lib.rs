//! Ergonomic document model.
//!
//! Everything here uses a top-left origin with y growing downward. Nothing in
//! this crate knows how pages are eventually rendered.

pub mod compose;
pub mod content;
pub mod document;
pub mod page;

pub use compose::Compose;
pub use content::{Content, GraphicsOperation, Operation, Stroke, TextOperation};
pub use document::{Document, DocumentBuilder};
pub use page::{Annotation, Page};
