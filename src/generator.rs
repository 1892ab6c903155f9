use crate::config::Configuration;
use crate::error::FolioError;
use folio_document::Document;
use folio_executor::ExecutorImpl;
use folio_lowering::{lower_document, lower_document_with};
use folio_render_core::{DocumentWriter, PdfDocument};
use folio_render_lopdf::LopdfWriter;
use std::path::Path;

/// Lowers documents and writes them as PDF bytes.
#[derive(Debug, Clone)]
pub struct DocumentGenerator {
    writer: LopdfWriter,
    executor: ExecutorImpl,
}

impl DocumentGenerator {
    pub fn new(config: &Configuration) -> Self {
        let executor = if config.parallel {
            ExecutorImpl::parallel()
        } else {
            ExecutorImpl::sequential()
        };
        Self {
            writer: LopdfWriter::new(config.compress),
            executor,
        }
    }

    pub fn with_executor(mut self, executor: ExecutorImpl) -> Self {
        self.executor = executor;
        self
    }

    pub fn compresses(&self) -> bool {
        self.writer.compresses()
    }

    pub fn lower(&self, document: Document) -> PdfDocument {
        lower_document_with(document, &self.executor)
    }

    pub fn generate(&self, document: Document) -> Result<Vec<u8>, FolioError> {
        let mut buffer = Vec::new();
        self.generate_into(document, &mut buffer)?;
        Ok(buffer)
    }

    /// Appends the PDF to `buffer`.
    pub fn generate_into(&self, document: Document, buffer: &mut Vec<u8>) -> Result<(), FolioError> {
        let start = buffer.len();
        let lowered = self.lower(document);
        self.writer.write_into(&lowered, buffer)?;

        log::info!(
            "Generated {} pages ({} bytes, compress={})",
            lowered.pages.len(),
            buffer.len() - start,
            self.compresses()
        );
        Ok(())
    }

    pub fn generate_to_file(&self, document: Document, path: impl AsRef<Path>) -> Result<(), FolioError> {
        let bytes = self.generate(document)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for DocumentGenerator {
    fn default() -> Self {
        Self::new(&Configuration::default())
    }
}

/// Lowers `document` sequentially and writes it with the plain or flate writer.
pub fn render(document: &Document, compress: bool) -> Result<Vec<u8>, FolioError> {
    let lowered = lower_document(document);
    Ok(LopdfWriter::new(compress).write(&lowered)?)
}
