use crate::emit::emit_operations;
use crate::flip::AxisFlip;
use crate::fonts::collect_font_resources;
use folio_document::{Annotation, Page};
use folio_render_core::{PdfAnnotation, PdfPage, PdfRect};

/// Flips an annotation's region with the height of the page it sits on.
pub fn lower_annotation(annotation: &Annotation, flip: &AxisFlip) -> PdfAnnotation {
    match annotation {
        Annotation::Link { rect, uri } => PdfAnnotation::Link {
            rect: flip.rect(*rect),
            uri: uri.clone(),
        },
    }
}

/// Lowers one page into PDF user space.
///
/// The media box spans the whole sheet. The content stream holds one command
/// group per operation in the original order, and the resource table holds
/// exactly the fonts those operations reference.
pub fn lower_page(page: &Page) -> PdfPage {
    let paper = page.paper_size;
    let flip = AxisFlip::new(paper.height);
    let operations = page.content.operations();

    let resources = collect_font_resources(operations);
    let content = emit_operations(operations, &flip);
    let annotations = page
        .annotations
        .iter()
        .map(|a| lower_annotation(a, &flip))
        .collect();

    log::debug!(
        "Lowered page {}x{}: {} operations, {} fonts",
        paper.width,
        paper.height,
        operations.len(),
        resources.fonts.len()
    );

    PdfPage {
        media_box: PdfRect::new(0.0, 0.0, paper.width, paper.height),
        content,
        resources,
        annotations,
    }
}
