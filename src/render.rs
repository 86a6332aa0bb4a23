use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::layout::{line_height, Measure};
use crate::units::Px;

/// Drawing capability used by [paint]. Anything that can measure text can
/// position it; `draw` puts the pixels down
pub trait TextPainter: Measure {
    /// Draw one line of text with the top of its line box at (x, y)
    fn draw(&self, canvas: &mut Canvas, text: &str, font_size: u32, x: Px, y: Px, colour: Colour);
}

/// Paint fitted lines onto the canvas as one centered block.
///
/// The block is centered vertically using the stride between lines plus the
/// ink descent of the last line, and horizontally on the widest line. Each
/// line is then centered again within the block's span, so shorter lines sit
/// symmetrically under longer ones. Does nothing when there are no lines
pub fn paint<P: TextPainter>(
    canvas: &mut Canvas,
    painter: &P,
    lines: &[String],
    font_size: u32,
    max_line_width: Px,
    colour: Colour,
) {
    let Some(last) = lines.last() else {
        return;
    };

    let stride = line_height(font_size);
    let span_height = Px::from(stride * (lines.len() as u32 - 1)) + painter.descent(last, font_size);
    let margin_top = (Px::from(canvas.height()) - span_height) / 2.0;
    let margin_left = (Px::from(canvas.width()) - max_line_width) / 2.0;

    for (i, line) in lines.iter().enumerate() {
        let line_width = painter.width(line, font_size);
        let x = margin_left + (max_line_width - line_width) / 2.0;
        let y = margin_top + Px::from(i as u32 * stride);
        painter.draw(canvas, line, font_size, x, y, colour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use std::cell::RefCell;

    /// Records draw calls instead of rasterising, with the same linear
    /// measurement model as the layout tests: one pixel per character per
    /// font size unit
    struct RecordingPainter {
        calls: RefCell<Vec<(String, u32, f32, f32)>>,
    }

    impl RecordingPainter {
        fn new() -> RecordingPainter {
            RecordingPainter {
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Measure for RecordingPainter {
        fn width(&self, text: &str, font_size: u32) -> Px {
            Px(text.chars().count() as f32 * font_size as f32)
        }

        fn descent(&self, text: &str, font_size: u32) -> Px {
            if text.trim().is_empty() {
                Px::ZERO
            } else {
                Px(font_size as f32)
            }
        }
    }

    impl TextPainter for RecordingPainter {
        fn draw(
            &self,
            _canvas: &mut Canvas,
            text: &str,
            font_size: u32,
            x: Px,
            y: Px,
            _colour: Colour,
        ) {
            self.calls
                .borrow_mut()
                .push((text.to_string(), font_size, x.0, y.0));
        }
    }

    #[test]
    fn empty_lines_paint_nothing() {
        let painter = RecordingPainter::new();
        let mut canvas = Canvas::new(100, 100, colours::BLUE);
        paint(&mut canvas, &painter, &[], 10, Px(50.0), colours::WHITE);
        assert!(painter.calls.borrow().is_empty());
    }

    #[test]
    fn block_is_centered_and_lines_are_centered_within_it() {
        let painter = RecordingPainter::new();
        let mut canvas = Canvas::new(200, 100, colours::BLUE);
        let lines = vec!["AB".to_string(), "C".to_string()];

        // widths at size 10: "AB" = 20, "C" = 10; stride = 12; descent = 10
        // span = 12 * 1 + 10 = 22 -> margin_top = 39; margin_left = 90
        paint(&mut canvas, &painter, &lines, 10, Px(20.0), colours::WHITE);

        let calls = painter.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], ("AB".to_string(), 10, 90.0, 39.0));
        assert_eq!(calls[1], ("C".to_string(), 10, 95.0, 51.0));
    }

    #[test]
    fn single_empty_line_draws_at_dead_center() {
        // the empty-sign layout still paints: one empty line, no ink, so the
        // block has zero height and sits mid-canvas
        let painter = RecordingPainter::new();
        let mut canvas = Canvas::new(100, 100, colours::BLUE);
        let lines = vec![String::new()];

        paint(&mut canvas, &painter, &lines, 40, Px(100.0), colours::WHITE);

        let calls = painter.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (String::new(), 40, 50.0, 50.0));
    }
}
