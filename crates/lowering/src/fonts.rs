//! Font identity mapping and per-page resource collection.

use folio_document::Operation;
use folio_render_core::{FontObject, Resources, Standard14};
use folio_types::Font;
use std::collections::BTreeSet;

pub fn standard14(font: Font) -> Standard14 {
    match font {
        Font::Helvetica => Standard14::Helvetica,
        Font::HelveticaBold => Standard14::HelveticaBold,
        Font::HelveticaOblique => Standard14::HelveticaOblique,
        Font::HelveticaBoldOblique => Standard14::HelveticaBoldOblique,
        Font::Times => Standard14::TimesRoman,
        Font::TimesBold => Standard14::TimesBold,
        Font::TimesItalic => Standard14::TimesItalic,
        Font::TimesBoldItalic => Standard14::TimesBoldItalic,
        Font::Courier => Standard14::Courier,
        Font::CourierBold => Standard14::CourierBold,
        Font::CourierOblique => Standard14::CourierOblique,
        Font::CourierBoldOblique => Standard14::CourierBoldOblique,
        Font::Symbol => Standard14::Symbol,
        Font::ZapfDingbats => Standard14::ZapfDingbats,
    }
}

pub fn font_object(font: Font) -> FontObject {
    FontObject::new(standard14(font))
}

/// Builds the resource table for the fonts referenced by `operations`.
///
/// Fonts are deduplicated by identity and only referenced fonts are included.
/// Names come from the renderer. If two distinct fonts ever share a name, the
/// later one replaces the earlier entry and a warning is logged.
pub fn collect_font_resources(operations: &[Operation]) -> Resources {
    let used: BTreeSet<Font> = operations.iter().filter_map(Operation::font).collect();

    let mut resources = Resources::default();
    for font in used {
        let object = font_object(font);
        if let Some(previous) = resources.insert_font(object) {
            if previous != object {
                log::warn!(
                    "Font resource {} for {} replaced {}",
                    object.resource_name(),
                    object.base_font(),
                    previous.base_font()
                );
            }
        }
    }
    resources
}
