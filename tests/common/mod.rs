#![allow(dead_code)]

pub mod pdf_assertions;

use folio::{Configuration, Document, DocumentGenerator, FolioError};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Generate an uncompressed PDF so content streams stay readable in failures.
pub fn generate(document: Document) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let config = Configuration {
        compress: false,
        ..Configuration::default()
    };
    generate_with(&config, document)
}

pub fn generate_with(
    config: &Configuration,
    document: Document,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = DocumentGenerator::new(config).generate(document)?;
    GeneratedPdf::from_bytes(bytes)
}

pub fn generate_bytes(document: Document, compress: bool) -> Result<Vec<u8>, FolioError> {
    folio::render(&document, compress)
}
