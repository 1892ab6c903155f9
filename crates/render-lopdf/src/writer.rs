use crate::helpers;
use folio_render_core::{DocumentWriter, FontObject, PdfDocument, RenderError};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use std::collections::HashMap;

/// Writes a `PdfDocument` through `lopdf`, optionally Flate-compressing every stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LopdfWriter {
    compress: bool,
}

impl LopdfWriter {
    pub fn new(compress: bool) -> Self {
        Self { compress }
    }

    /// Streams are written uncompressed.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Streams are written with FlateDecode.
    pub fn flate() -> Self {
        Self::new(true)
    }

    /// Builds the object graph: catalog, page tree, one font object per distinct
    /// font across the document, and one content stream per page.
    fn build(&self, document: &PdfDocument) -> Result<Document, RenderError> {
        let mut doc = Document::with_version(document.version.as_str());
        let pages_id = doc.new_object_id();
        let mut font_ids: HashMap<FontObject, ObjectId> = HashMap::new();
        let mut kids: Vec<Object> = Vec::with_capacity(document.pages.len());

        for page in &document.pages {
            let mut font_dict = lopdf::Dictionary::new();
            for (name, font) in &page.resources.fonts {
                let id = *font_ids
                    .entry(*font)
                    .or_insert_with(|| doc.add_object(helpers::font_dictionary(font)));
                font_dict.set(name.as_bytes(), id);
            }

            let content = helpers::encode_content(&page.content)?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, content));

            let mut page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => helpers::rect_array(&page.media_box),
                "Contents" => content_id,
                "Resources" => dictionary! { "Font" => font_dict },
            };
            if !page.annotations.is_empty() {
                let annots: Vec<Object> = page
                    .annotations
                    .iter()
                    .map(|a| doc.add_object(helpers::annotation_dictionary(a)).into())
                    .collect();
                page_dict.set("Annots", annots);
            }
            kids.push(doc.add_object(page_dict).into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
            }),
        );

        let mut catalog = dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        };
        if !document.viewer.is_default() {
            catalog.set("ViewerPreferences", helpers::viewer_dictionary(&document.viewer));
        }
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", catalog_id);

        if let Some(info) = &document.info {
            let info_id = doc.add_object(helpers::info_dictionary(info));
            doc.trailer.set("Info", info_id);
        }

        log::debug!(
            "Built PDF object graph: {} pages, {} font objects, {} objects total",
            page_count,
            font_ids.len(),
            doc.objects.len()
        );
        Ok(doc)
    }
}

impl DocumentWriter for LopdfWriter {
    fn write_into(&self, document: &PdfDocument, buffer: &mut Vec<u8>) -> Result<(), RenderError> {
        let mut doc = self.build(document)?;
        if self.compress {
            doc.compress();
        }
        doc.save_to(buffer)?;
        Ok(())
    }

    fn compresses(&self) -> bool {
        self.compress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_render_core::{
        ContentStream, PdfAnnotation, PdfPage, PdfRect, Resources, Standard14,
    };
    use folio_types::{Info, Version, ViewerPreferences};

    fn sample_page(fonts: &[Standard14]) -> PdfPage {
        let mut resources = Resources::default();
        let mut content = ContentStream::new();
        for standard in fonts {
            let font = FontObject::new(*standard);
            resources.insert_font(font);
            content
                .begin_text()
                .set_fill_gray(0.0)
                .set_font(&font, 12.0)
                .move_text(72.0, 720.0)
                .show_text("Hello")
                .end_text();
        }
        PdfPage {
            media_box: PdfRect::new(0.0, 0.0, 612.0, 792.0),
            content,
            resources,
            annotations: vec![],
        }
    }

    #[test]
    fn test_writes_loadable_pdf() {
        let document = PdfDocument {
            version: Version::V1_7,
            pages: vec![sample_page(&[Standard14::Helvetica]), sample_page(&[])],
            info: None,
            ..Default::default()
        };
        let bytes = LopdfWriter::plain().write(&document).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));

        let loaded = Document::load_mem(&bytes).unwrap();
        assert_eq!(loaded.get_pages().len(), 2);
    }

    #[test]
    fn test_fonts_shared_across_pages() {
        let document = PdfDocument {
            version: Version::V1_7,
            pages: vec![
                sample_page(&[Standard14::Helvetica, Standard14::Courier]),
                sample_page(&[Standard14::Helvetica]),
            ],
            info: None,
            ..Default::default()
        };
        let doc = LopdfWriter::plain().build(&document).unwrap();
        let font_objects = doc
            .objects
            .values()
            .filter(|o| {
                o.as_dict()
                    .ok()
                    .and_then(|d| d.get(b"Type").ok())
                    .and_then(|t| t.as_name().ok())
                    == Some(b"Font".as_slice())
            })
            .count();
        assert_eq!(font_objects, 2);
    }

    #[test]
    fn test_flate_compresses_content() {
        let document = PdfDocument {
            version: Version::V1_7,
            pages: vec![sample_page(&[Standard14::TimesRoman; 20])],
            info: None,
            ..Default::default()
        };
        let plain = LopdfWriter::plain().write(&document).unwrap();
        let flate = LopdfWriter::flate().write(&document).unwrap();
        assert!(flate.len() < plain.len());
        assert!(flate.windows(b"FlateDecode".len()).any(|w| w == b"FlateDecode"));
        assert!(!plain.windows(b"FlateDecode".len()).any(|w| w == b"FlateDecode"));
    }

    #[test]
    fn test_viewer_preferences_in_catalog() {
        let catalog_of = |document: &PdfDocument| {
            let doc = LopdfWriter::plain().build(document).unwrap();
            let root = doc.trailer.get(b"Root").unwrap().as_reference().unwrap();
            doc.get_dictionary(root).unwrap().clone()
        };

        let mut document = PdfDocument::default();
        assert!(catalog_of(&document).get(b"ViewerPreferences").is_err());

        document.viewer = ViewerPreferences {
            display_doc_title: true,
            fit_window: true,
            ..Default::default()
        };
        let catalog = catalog_of(&document);
        let prefs = catalog.get(b"ViewerPreferences").unwrap().as_dict().unwrap();
        assert!(prefs.get(b"DisplayDocTitle").unwrap().as_bool().unwrap());
        assert!(prefs.get(b"FitWindow").unwrap().as_bool().unwrap());
        assert!(prefs.get(b"HideToolbar").is_err());
    }

    #[test]
    fn test_write_into_appends() {
        let document = PdfDocument::default();
        let mut buffer = b"prefix".to_vec();
        LopdfWriter::plain().write_into(&document, &mut buffer).unwrap();
        assert!(buffer.starts_with(b"prefix%PDF-"));
    }

    #[test]
    fn test_annotations_and_info() {
        let mut page = sample_page(&[]);
        page.annotations.push(PdfAnnotation::Link {
            rect: PdfRect::new(72.0, 700.0, 100.0, 20.0),
            uri: "https://example.com".into(),
        });
        let document = PdfDocument {
            version: Version::V1_4,
            pages: vec![page],
            info: Some(Info {
                title: Some("Report".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let bytes = LopdfWriter::plain().write(&document).unwrap();
        let loaded = Document::load_mem(&bytes).unwrap();

        let page_id = *loaded.get_pages().get(&1).unwrap();
        let page_dict = loaded.get_dictionary(page_id).unwrap();
        let annots = page_dict.get(b"Annots").unwrap().as_array().unwrap();
        assert_eq!(annots.len(), 1);

        let info_id = loaded.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = loaded.get_dictionary(info_id).unwrap();
        assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"Report");
    }
}
