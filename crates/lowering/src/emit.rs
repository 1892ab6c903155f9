//! Translation of individual drawing operations into content-stream commands.

use crate::flip::AxisFlip;
use crate::fonts::font_object;
use folio_document::{GraphicsOperation, Operation, TextOperation};
use folio_render_core::ContentStream;
use folio_types::Color;

/// Appends the commands for `op` to `stream`. Coordinates are flipped into PDF
/// user space with `flip`.
pub fn emit_operation(stream: &mut ContentStream, op: &Operation, flip: &AxisFlip) {
    match op {
        Operation::Text(text) => emit_text(stream, text, flip),
        Operation::Graphics(graphics) => emit_graphics(stream, graphics, flip),
    }
}

/// Emits every operation in order.
pub fn emit_operations(ops: &[Operation], flip: &AxisFlip) -> ContentStream {
    let mut stream = ContentStream::new();
    for op in ops {
        emit_operation(&mut stream, op, flip);
    }
    stream
}

fn emit_text(stream: &mut ContentStream, op: &TextOperation, flip: &AxisFlip) {
    let (x, y) = flip.point(op.position);
    log::trace!("text {:?} at ({}, {}) in {:?} {}pt", op.text, x, y, op.font, op.size);

    stream.begin_text();
    fill_color(stream, op.color);
    stream
        .set_font(&font_object(op.font), op.size)
        .move_text(x, y)
        .show_text(op.text.as_str())
        .end_text();
}

fn emit_graphics(stream: &mut ContentStream, op: &GraphicsOperation, flip: &AxisFlip) {
    match op {
        GraphicsOperation::Line {
            from,
            to,
            color,
            width,
        } => {
            let (x1, y1) = flip.point(*from);
            let (x2, y2) = flip.point(*to);
            log::trace!("line ({}, {}) -> ({}, {})", x1, y1, x2, y2);

            stroke_color(stream, *color);
            stream
                .set_line_width(*width)
                .move_to(x1, y1)
                .line_to(x2, y2)
                .stroke();
        }
        GraphicsOperation::Rectangle {
            rect,
            fill,
            stroke,
            stroke_width,
        } => {
            let flipped = flip.rect(*rect);
            log::trace!("rect {:?} fill={:?} stroke={:?}", flipped, fill, stroke);

            if let Some(color) = fill {
                fill_color(stream, *color);
            }
            if let Some(color) = stroke {
                stroke_color(stream, *color);
                stream.set_line_width(*stroke_width);
            }
            stream.rectangle(flipped);
            match (fill.is_some(), stroke.is_some()) {
                (true, true) => {
                    stream.fill_and_stroke();
                }
                (true, false) => {
                    stream.fill();
                }
                (false, true) => {
                    stream.stroke();
                }
                (false, false) => {}
            }
        }
    }
}

fn fill_color(stream: &mut ContentStream, color: Color) {
    match color {
        Color::Gray(g) => stream.set_fill_gray(g),
        Color::Rgb { r, g, b } => stream.set_fill_rgb(r, g, b),
    };
}

fn stroke_color(stream: &mut ContentStream, color: Color) {
    match color {
        Color::Gray(g) => stream.set_stroke_gray(g),
        Color::Rgb { r, g, b } => stream.set_stroke_rgb(r, g, b),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_document::Stroke;
    use folio_render_core::{ContentOp, PdfRect};
    use folio_types::{Font, Point, Rect};

    fn letter() -> AxisFlip {
        AxisFlip::new(792.0)
    }

    fn operators(stream: &ContentStream) -> Vec<&'static str> {
        stream.ops().iter().map(ContentOp::operator).collect()
    }

    #[test]
    fn test_text_is_flipped_and_wrapped() {
        let op = TextOperation::new("Hello", Point::new(72.0, 72.0), Font::Times, 12.0, Color::BLACK);
        let stream = emit_operations(&[op.into()], &letter());

        assert_eq!(operators(&stream), ["BT", "g", "Tf", "Td", "Tj", "ET"]);
        assert_eq!(stream.ops()[3], ContentOp::MoveText { x: 72.0, y: 720.0 });
        assert_eq!(stream.ops()[4], ContentOp::ShowText("Hello".into()));
        assert_eq!(
            stream.ops()[2],
            ContentOp::SetFont {
                font: font_object(Font::Times).resource_name(),
                size: 12.0
            }
        );
    }

    #[test]
    fn test_rgb_text_uses_rgb_fill() {
        let op = TextOperation::new("x", Point::ZERO, Font::Courier, 9.0, Color::RED);
        let stream = emit_operations(&[op.into()], &letter());
        assert_eq!(stream.ops()[1], ContentOp::SetFillRgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_line_endpoints_flip_independently() {
        let op = Operation::line(
            Point::new(10.0, 10.0),
            Point::new(200.0, 100.0),
            Stroke::new(Color::BLUE).with_width(2.0),
        );
        let stream = emit_operations(&[op], &letter());

        assert_eq!(operators(&stream), ["RG", "w", "m", "l", "S"]);
        assert_eq!(stream.ops()[1], ContentOp::SetLineWidth(2.0));
        assert_eq!(stream.ops()[2], ContentOp::MoveTo { x: 10.0, y: 782.0 });
        assert_eq!(stream.ops()[3], ContentOp::LineTo { x: 200.0, y: 692.0 });
    }

    #[test]
    fn test_filled_and_stroked_rect() {
        let op = Operation::styled_rect(
            Rect::new(10.0, 20.0, 100.0, 50.0),
            Some(Color::LIGHT_GRAY),
            Some(Stroke::new(Color::BLACK)),
        );
        let stream = emit_operations(&[op], &letter());

        assert_eq!(operators(&stream), ["g", "G", "w", "re", "B"]);
        assert_eq!(
            stream.ops()[3],
            ContentOp::Rectangle(PdfRect::new(10.0, 722.0, 100.0, 50.0))
        );
    }

    #[test]
    fn test_rect_paint_operator_follows_style() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let fill_only = emit_operations(&[Operation::filled_rect(rect, Color::GREEN)], &letter());
        assert_eq!(operators(&fill_only), ["rg", "re", "f"]);

        let stroke_only = emit_operations(
            &[Operation::stroked_rect(rect, Stroke::new(Color::GRAY))],
            &letter(),
        );
        assert_eq!(operators(&stroke_only), ["G", "w", "re", "S"]);

        let neither = emit_operations(&[Operation::styled_rect(rect, None, None)], &letter());
        assert_eq!(operators(&neither), ["re"]);
    }

    /// One letter per input operation, read from the terminal operator of its group.
    fn group_kinds(stream: &ContentStream) -> Vec<char> {
        stream
            .ops()
            .iter()
            .filter_map(|op| match op {
                ContentOp::EndText => Some('T'),
                ContentOp::LineTo { .. } => Some('L'),
                ContentOp::Rectangle(_) => Some('R'),
                _ => None,
            })
            .collect()
    }

    fn operation_of_kind(kind: char, i: usize) -> Operation {
        let at = Point::new(i as f64, i as f64);
        match kind {
            'T' => TextOperation::new(format!("t{}", i), at, Font::Helvetica, 10.0, Color::BLACK)
                .into(),
            'L' => Operation::line(at, Point::new(50.0, 50.0), Stroke::new(Color::BLACK)),
            _ => Operation::filled_rect(Rect::new(at.x, at.y, 5.0, 5.0), Color::RED),
        }
    }

    #[test]
    fn test_operation_order_is_preserved() {
        let ops = vec![
            Operation::from(TextOperation::new("a", Point::ZERO, Font::Helvetica, 10.0, Color::BLACK)),
            Operation::line(Point::ZERO, Point::new(1.0, 1.0), Stroke::new(Color::BLACK)),
            Operation::filled_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::RED),
            Operation::from(TextOperation::new("b", Point::ZERO, Font::Helvetica, 10.0, Color::BLACK)),
            Operation::filled_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::BLUE),
        ];
        let stream = emit_operations(&ops, &letter());

        // Each input contributes one group ending in a terminal operator.
        assert_eq!(group_kinds(&stream), ['T', 'L', 'R', 'T', 'R']);
    }

    #[test]
    fn test_order_holds_for_every_kind_sequence() {
        const KINDS: [char; 3] = ['T', 'L', 'R'];
        for len in 1..=4u32 {
            for n in 0..KINDS.len().pow(len) {
                let expected: Vec<char> = (0..len)
                    .map(|digit| KINDS[n / KINDS.len().pow(digit) % KINDS.len()])
                    .collect();
                let ops: Vec<Operation> = expected
                    .iter()
                    .enumerate()
                    .map(|(i, &kind)| operation_of_kind(kind, i))
                    .collect();

                let stream = emit_operations(&ops, &letter());
                assert_eq!(group_kinds(&stream), expected, "sequence {:?}", expected);

                let shown: Vec<&str> = stream
                    .ops()
                    .iter()
                    .filter_map(|op| match op {
                        ContentOp::ShowText(s) => Some(s.as_str()),
                        _ => None,
                    })
                    .collect();
                let expected_text: Vec<String> = expected
                    .iter()
                    .enumerate()
                    .filter(|(_, kind)| **kind == 'T')
                    .map(|(i, _)| format!("t{}", i))
                    .collect();
                assert_eq!(shown, expected_text, "sequence {:?}", expected);
            }
        }
    }
}
