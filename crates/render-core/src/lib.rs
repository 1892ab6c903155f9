//! Renderer-native page model.
//!
//! This crate provides the types a PDF backend consumes:
//! - `PdfDocument` / `PdfPage` in bottom-left-origin user space
//! - Standard 14 font objects and their resource names
//! - Content stream operators
//! - The `DocumentWriter` trait and `RenderError`

mod content;
mod error;
mod font;
mod traits;
mod types;

pub use content::{ContentOp, ContentStream};
pub use error::RenderError;
pub use font::{FontObject, ResourceName, Standard14};
pub use traits::DocumentWriter;
pub use types::{PdfAnnotation, PdfDocument, PdfPage, PdfRect, Resources};
