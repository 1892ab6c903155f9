use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId};
use std::collections::BTreeSet;

/// Page object ids in page order.
pub fn page_ids(doc: &LopdfDocument) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

fn resolve<'a>(doc: &'a LopdfDocument, obj: &'a Object) -> Option<&'a Object> {
    doc.dereference(obj).ok().map(|(_, resolved)| resolved)
}

fn page_dict(doc: &LopdfDocument, page: usize) -> Option<&Dictionary> {
    let id = *page_ids(doc).get(page)?;
    doc.get_dictionary(id).ok()
}

/// Decoded content stream operations of the zero-based `page`.
pub fn content_operations(doc: &LopdfDocument, page: usize) -> Vec<Operation> {
    let Some(id) = page_ids(doc).get(page).copied() else {
        return Vec::new();
    };
    doc.get_page_content(id)
        .ok()
        .and_then(|bytes| Content::decode(&bytes).ok())
        .map(|content| content.operations)
        .unwrap_or_default()
}

/// Operands of every `operator` on the page, as floats.
pub fn numeric_operands(doc: &LopdfDocument, page: usize, operator: &str) -> Vec<Vec<f32>> {
    content_operations(doc, page)
        .into_iter()
        .filter(|op| op.operator == operator)
        .map(|op| op.operands.iter().filter_map(|o| o.as_float().ok()).collect())
        .collect()
}

pub fn operators(doc: &LopdfDocument, page: usize) -> Vec<String> {
    content_operations(doc, page)
        .into_iter()
        .map(|op| op.operator)
        .collect()
}

/// Strings shown with `Tj` on the page.
pub fn shown_text(doc: &LopdfDocument, page: usize) -> Vec<String> {
    content_operations(doc, page)
        .into_iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        })
        .collect()
}

/// `(resource name, BaseFont)` pairs from the page's font resources.
pub fn page_fonts(doc: &LopdfDocument, page: usize) -> BTreeSet<(String, String)> {
    let mut fonts = BTreeSet::new();
    let Some(resources) = page_dict(doc, page)
        .and_then(|d| d.get(b"Resources").ok())
        .and_then(|r| resolve(doc, r))
        .and_then(|r| r.as_dict().ok())
    else {
        return fonts;
    };
    let Some(font_dict) = resources
        .get(b"Font")
        .ok()
        .and_then(|f| resolve(doc, f))
        .and_then(|f| f.as_dict().ok())
    else {
        return fonts;
    };

    for (name, value) in font_dict.iter() {
        let base_font = resolve(doc, value)
            .and_then(|v| v.as_dict().ok())
            .and_then(|d| d.get(b"BaseFont").ok())
            .and_then(|b| b.as_name().ok());
        if let Some(base_font) = base_font {
            fonts.insert((
                String::from_utf8_lossy(name).into_owned(),
                String::from_utf8_lossy(base_font).into_owned(),
            ));
        }
    }
    fonts
}

/// Number of objects in the file whose `/Type` is `/Font`.
pub fn font_object_count(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|obj| obj.as_dict().ok())
        .filter(|dict| {
            dict.get(b"Type")
                .and_then(|t| t.as_name())
                .is_ok_and(|name| name == b"Font")
        })
        .count()
}

/// `(rect, uri)` for every link annotation on the page.
pub fn link_annotations(doc: &LopdfDocument, page: usize) -> Vec<([f32; 4], String)> {
    let Some(annots) = page_dict(doc, page)
        .and_then(|d| d.get(b"Annots").ok())
        .and_then(|a| resolve(doc, a))
        .and_then(|a| a.as_array().ok())
    else {
        return Vec::new();
    };

    annots
        .iter()
        .filter_map(|annot| resolve(doc, annot).and_then(|a| a.as_dict().ok()))
        .filter_map(|annot| {
            let rect: Vec<f32> = annot
                .get(b"Rect")
                .ok()?
                .as_array()
                .ok()?
                .iter()
                .filter_map(|v| v.as_float().ok())
                .collect();
            let uri = annot
                .get(b"A")
                .ok()
                .and_then(|a| resolve(doc, a))
                .and_then(|a| a.as_dict().ok())?
                .get(b"URI")
                .ok()?
                .as_str()
                .ok()?;
            Some((
                [rect[0], rect[1], rect[2], rect[3]],
                String::from_utf8_lossy(uri).into_owned(),
            ))
        })
        .collect()
}

/// A literal entry of the trailer's `/Info` dictionary.
pub fn info_entry(doc: &LopdfDocument, key: &str) -> Option<String> {
    let info = doc.trailer.get(b"Info").ok()?;
    let info = resolve(doc, info)?.as_dict().ok()?;
    let value = info.get(key.as_bytes()).ok()?.as_str().ok()?;
    Some(String::from_utf8_lossy(value).into_owned())
}

/// A boolean entry of the catalog's `/ViewerPreferences`, if present.
pub fn viewer_preference(doc: &LopdfDocument, key: &str) -> Option<bool> {
    let root = doc.trailer.get(b"Root").ok()?;
    let catalog = resolve(doc, root)?.as_dict().ok()?;
    let prefs = resolve(doc, catalog.get(b"ViewerPreferences").ok()?)?
        .as_dict()
        .ok()?;
    prefs.get(key.as_bytes()).ok()?.as_bool().ok()
}

#[macro_export]
macro_rules! assert_shows_text {
    ($pdf:expr, $page:expr, $text:expr) => {
        let shown = $crate::common::pdf_assertions::shown_text(&$pdf.doc, $page);
        assert!(
            shown.iter().any(|s| s == $text),
            "Expected page {} to show {:?}, found {:?}",
            $page,
            $text,
            shown
        );
    };
}
