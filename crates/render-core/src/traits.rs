use crate::error::RenderError;
use crate::types::PdfDocument;

/// Serializes a renderer-native document to PDF bytes.
///
/// Whether streams are compressed is a property of the writer, fixed when it is built.
pub trait DocumentWriter {
    /// Appends the serialized document to `buffer`.
    fn write_into(&self, document: &PdfDocument, buffer: &mut Vec<u8>) -> Result<(), RenderError>;

    fn write(&self, document: &PdfDocument) -> Result<Vec<u8>, RenderError> {
        let mut buffer = Vec::new();
        self.write_into(document, &mut buffer)?;
        Ok(buffer)
    }

    fn compresses(&self) -> bool;
}
