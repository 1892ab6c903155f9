use folio_render_core::RenderError;
use folio_types::ColorParseError;
use thiserror::Error;

/// Errors surfaced while configuring or generating a document.
///
/// Lowering itself cannot fail; everything here comes from configuration
/// input, color parsing at construction time, or the writer.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid color: {0}")]
    ColorParse(#[from] ColorParseError),
}
