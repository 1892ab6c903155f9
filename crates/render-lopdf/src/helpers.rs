//! Conversions from the renderer-native model to `lopdf` objects.

use folio_render_core::{ContentOp, ContentStream, FontObject, PdfAnnotation, PdfRect, RenderError};
use folio_types::{Info, ViewerPreferences};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object, StringFormat, dictionary};

/// PDF reals are written with f32 precision, so very large or very precise
/// coordinates are rounded. Values outside the f32 range are not representable.
fn real(v: f64) -> Object {
    debug_assert!(v.is_finite(), "non-finite PDF number {}", v);
    (v as f32).into()
}

pub fn rect_array(rect: &PdfRect) -> Vec<Object> {
    rect.corners().iter().map(|v| real(*v)).collect()
}

/// Encodes the operators of `stream` into content stream bytes.
pub fn encode_content(stream: &ContentStream) -> Result<Vec<u8>, RenderError> {
    let operations: Vec<Operation> = stream.ops().iter().map(to_operation).collect();
    Ok(Content { operations }.encode()?)
}

fn to_operation(op: &ContentOp) -> Operation {
    let operands = match op {
        ContentOp::BeginText
        | ContentOp::EndText
        | ContentOp::Fill
        | ContentOp::Stroke
        | ContentOp::FillAndStroke => vec![],
        ContentOp::SetFillGray(g) | ContentOp::SetStrokeGray(g) => vec![real(*g)],
        ContentOp::SetFillRgb(r, g, b) | ContentOp::SetStrokeRgb(r, g, b) => {
            vec![real(*r), real(*g), real(*b)]
        }
        ContentOp::SetFont { font, size } => {
            vec![Object::Name(font.as_bytes().to_vec()), real(*size)]
        }
        ContentOp::MoveText { x, y } | ContentOp::MoveTo { x, y } | ContentOp::LineTo { x, y } => {
            vec![real(*x), real(*y)]
        }
        ContentOp::ShowText(text) => {
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)]
        }
        ContentOp::SetLineWidth(w) => vec![real(*w)],
        ContentOp::Rectangle(r) => vec![real(r.x), real(r.y), real(r.width), real(r.height)],
    };
    Operation::new(op.operator(), operands)
}

pub fn font_dictionary(font: &FontObject) -> Dictionary {
    let mut dict = dictionary! {
        "Type" => "Font",
        "Subtype" => font.subtype(),
        "BaseFont" => font.base_font(),
    };
    if let Some(encoding) = font.encoding() {
        dict.set("Encoding", encoding);
    }
    dict
}

pub fn annotation_dictionary(annotation: &PdfAnnotation) -> Dictionary {
    match annotation {
        PdfAnnotation::Link { rect, uri } => dictionary! {
            "Type" => "Annot",
            "Subtype" => "Link",
            "Rect" => rect_array(rect),
            "Border" => vec![Object::Integer(0), Object::Integer(0), Object::Integer(0)],
            "A" => dictionary! {
                "Type" => "Action",
                "S" => "URI",
                "URI" => Object::string_literal(uri.as_str()),
            },
        },
    }
}

pub fn info_dictionary(info: &Info) -> Dictionary {
    let mut dict = Dictionary::new();
    let fields = [
        ("Title", &info.title),
        ("Author", &info.author),
        ("Subject", &info.subject),
        ("Keywords", &info.keywords),
        ("Creator", &info.creator),
        ("Producer", &info.producer),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            dict.set(key, text_string(value));
        }
    }
    dict
}

/// Only the flags that are set; unset flags default to false in viewers.
pub fn viewer_dictionary(viewer: &ViewerPreferences) -> Dictionary {
    let mut dict = Dictionary::new();
    for (key, value) in viewer.entries() {
        if value {
            dict.set(key, true);
        }
    }
    dict
}

/// ASCII stays a literal string; anything else becomes UTF-16BE with a byte order mark.
fn text_string(s: &str) -> Object {
    if s.is_ascii() {
        Object::string_literal(s)
    } else {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in s.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        Object::String(bytes, StringFormat::Hexadecimal)
    }
}

/// Encodes text for fonts declared with `/WinAnsiEncoding` (Windows-1252).
/// Characters without a WinAnsi code, including the C1 controls, become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| win_ansi_byte(c).unwrap_or(b'?'))
        .collect()
}

fn win_ansi_byte(c: char) -> Option<u8> {
    let code = c as u32;
    if code < 0x80 || (0xA0..=0xFF).contains(&code) {
        return Some(code as u8);
    }
    match code {
        0x20AC => Some(0x80), // €
        0x201A => Some(0x82), // ‚
        0x0192 => Some(0x83), // ƒ
        0x201E => Some(0x84), // „
        0x2026 => Some(0x85), // …
        0x2020 => Some(0x86), // †
        0x2021 => Some(0x87), // ‡
        0x02C6 => Some(0x88), // ˆ
        0x2030 => Some(0x89), // ‰
        0x0160 => Some(0x8A), // Š
        0x2039 => Some(0x8B), // ‹
        0x0152 => Some(0x8C), // Œ
        0x017D => Some(0x8E), // Ž
        0x2018 => Some(0x91), // ‘
        0x2019 => Some(0x92), // ’
        0x201C => Some(0x93), // “
        0x201D => Some(0x94), // ”
        0x2022 => Some(0x95), // •
        0x2013 => Some(0x96), // –
        0x2014 => Some(0x97), // —
        0x02DC => Some(0x98), // ˜
        0x2122 => Some(0x99), // ™
        0x0161 => Some(0x9A), // š
        0x203A => Some(0x9B), // ›
        0x0153 => Some(0x9C), // œ
        0x017E => Some(0x9E), // ž
        0x0178 => Some(0x9F), // Ÿ
        _ => None,
    }
}
