//! Folio: PDF documents described with a top-left origin.
//!
//! Pages, text, lines, rectangles and link annotations are positioned the way
//! screen layouts are, with y growing downward. Generation lowers that model
//! into PDF user space and writes it with `lopdf`.
//!
//! ```no_run
//! use folio::{Configuration, DocumentGenerator};
//! use folio::types::Point;
//!
//! let config = Configuration::default();
//! let page = config.page(config.text("Hello, world", Point::new(72.0, 72.0)));
//! let generator = DocumentGenerator::new(&config);
//! generator.generate_to_file(config.document(vec![page]), "hello.pdf")?;
//! # Ok::<(), folio::FolioError>(())
//! ```

mod config;
mod error;
mod generator;

pub use config::Configuration;
pub use error::FolioError;
pub use generator::{DocumentGenerator, render};

pub use folio_document as document;
pub use folio_executor as executor;
pub use folio_lowering as lowering;
pub use folio_render_core as render_core;
pub use folio_types as types;

pub use folio_document::{
    Annotation, Compose, Content, Document, DocumentBuilder, GraphicsOperation, Operation, Page,
    Stroke, TextOperation,
};
pub use folio_render_lopdf::LopdfWriter;
pub use folio_types::{
    Color, EdgeInsets, Font, Info, PaperSize, Point, Rect, Size, Version, ViewerPreferences,
};
