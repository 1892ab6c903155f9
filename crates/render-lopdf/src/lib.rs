//! PDF writer using lopdf.
//!
//! This crate serializes the renderer-native `PdfDocument` model into PDF bytes,
//! either plain or with every stream Flate-compressed.

mod helpers;
mod writer;

pub use helpers::{encode_content, to_win_ansi};
pub use writer::LopdfWriter;
