use crate::page::lower_page;
use folio_document::Document;
use folio_executor::Executor;
use folio_render_core::PdfDocument;

/// Lowers every page in order. Info, version and viewer preferences are carried over unchanged.
pub fn lower_document(document: &Document) -> PdfDocument {
    PdfDocument {
        version: document.version,
        pages: document.pages.iter().map(lower_page).collect(),
        info: document.info.clone(),
        viewer: document.viewer,
    }
}

/// Lowers pages through `executor`. Pages are independent, so they may be
/// processed concurrently; the output keeps the input page order.
pub fn lower_document_with<E: Executor>(document: Document, executor: &E) -> PdfDocument {
    let Document {
        pages,
        info,
        version,
        viewer,
    } = document;

    log::debug!(
        "Lowering {} pages with the {} executor",
        pages.len(),
        executor.name()
    );
    let pages = executor.execute_all(pages, |page| lower_page(&page));

    PdfDocument {
        version,
        pages,
        info,
        viewer,
    }
}
