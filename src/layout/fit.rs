use super::{line_height, MAX_CHAR_SIZE_RATIO};
use crate::units::Px;
use log::{debug, trace};

/// Measurement capability injected into the layout engine.
///
/// Implementations must return non-negative widths that are monotonically
/// non-decreasing in `font_size` for a fixed string; the engine relies on
/// this property but does not verify it.
pub trait Measure {
    /// Advance width of `text` rendered on one line at `font_size`
    fn width(&self, text: &str, font_size: u32) -> Px;

    /// Distance from the top of the line box down to the lowest inked pixel
    /// of `text` at `font_size`; zero when nothing is inked
    fn descent(&self, text: &str, font_size: u32) -> Px;
}

/// The result of fitting text into a box: the chosen font size, the wrapped
/// lines in reading order, and the measured width of the widest line
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub font_size: u32,
    pub lines: Vec<String>,
    pub max_line_width: Px,
}

/// Why a pass had to be abandoned at its font size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PassFailure {
    /// A single word is wider than the box; no wrapping can help
    WordTooWide,
    /// The wrapped lines stack taller than the box
    TooTall,
}

/// One wrapping attempt at a fixed font size.
///
/// Words are pushed in reading order. The accumulator closes the pending
/// line whenever the next word would overflow it, and aborts with a typed
/// failure as soon as the font size is proven unworkable. The floor pass
/// disables the failure checks so that a layout always comes back.
struct Pass<'a, M: Measure> {
    measure: &'a M,
    font_size: u32,
    line_height: u32,
    box_width: Px,
    box_height: u32,
    enforce_limits: bool,
    lines: Vec<String>,
    current: String,
    max_line_width: Px,
}

impl<'a, M: Measure> Pass<'a, M> {
    fn new(
        measure: &'a M,
        font_size: u32,
        box_width: u32,
        box_height: u32,
        enforce_limits: bool,
    ) -> Pass<'a, M> {
        Pass {
            measure,
            font_size,
            line_height: line_height(font_size),
            box_width: Px::from(box_width),
            box_height,
            enforce_limits,
            lines: Vec::new(),
            current: String::new(),
            max_line_width: Px::ZERO,
        }
    }

    /// Place the next word, closing the pending line first when appending
    /// would overflow the box width
    fn push_word(&mut self, word: &str) -> Result<(), PassFailure> {
        if self.enforce_limits && self.measure.width(word, self.font_size) > self.box_width {
            return Err(PassFailure::WordTooWide);
        }

        let mut pending = String::with_capacity(self.current.len() + word.len());
        pending.push_str(&self.current);
        pending.push_str(word);
        if !self.current.is_empty()
            && self.measure.width(pending.trim(), self.font_size) > self.box_width
        {
            self.close_line();
        }

        self.current.push_str(word);
        self.current.push(' ');

        // the pending line counts towards the stack height as soon as it has
        // content on it
        let stacked = (self.lines.len() as u32 + 1) * self.line_height;
        if self.enforce_limits && stacked > self.box_height {
            return Err(PassFailure::TooTall);
        }

        Ok(())
    }

    /// Close the pending line, recording its trimmed text and measured width
    fn close_line(&mut self) {
        let line = self.current.trim().to_string();
        let width = self.measure.width(&line, self.font_size);
        self.max_line_width = self.max_line_width.max(width);
        self.lines.push(line);
        self.current.clear();
    }

    /// Explicit newlines always start a new visual line, even when the next
    /// paragraph's first word would have fit on this one
    fn end_paragraph(&mut self) {
        self.close_line();
    }

    fn finish(self) -> Layout {
        Layout {
            font_size: self.font_size,
            lines: self.lines,
            max_line_width: self.max_line_width,
        }
    }
}

fn run_pass<M: Measure>(
    paragraphs: &[&str],
    font_size: u32,
    box_width: u32,
    box_height: u32,
    measure: &M,
    enforce_limits: bool,
) -> Result<Layout, PassFailure> {
    let mut pass = Pass::new(measure, font_size, box_width, box_height, enforce_limits);
    for paragraph in paragraphs {
        for word in paragraph.split(' ') {
            pass.push_word(word)?;
        }
        pass.end_paragraph();
    }
    Ok(pass.finish())
}

/// Find the largest font size at which `text` word-wraps into a
/// `box_width` × `box_height` canvas, and the wrapping itself.
///
/// The search seeds at `floor(min(width, height) * MAX_CHAR_SIZE_RATIO)` and
/// walks down one size at a time, accepting the first size whose pass keeps
/// every line within the box width and the stacked lines within the box
/// height. Words are never hyphenated or split; a single word wider than the
/// box at every size drives the search to its floor, where the size-1 pass
/// re-runs with the limits disabled so the caller always receives a layout —
/// the overlong word stays whole on its own line and may overflow the box.
///
/// Empty input (after trimming) short-circuits to a single empty line at the
/// seed font size, so downstream rendering math still has a size to work
/// with.
pub fn fit<M: Measure>(text: &str, box_width: u32, box_height: u32, measure: &M) -> Layout {
    let text = text.replace("\r\n", "\n");
    let text = text.trim();

    let min_span = box_width.min(box_height);
    let initial = ((min_span as f32 * MAX_CHAR_SIZE_RATIO) as u32).max(1);

    if text.is_empty() {
        return Layout {
            font_size: initial,
            lines: vec![String::new()],
            max_line_width: Px::from(box_width),
        };
    }

    let paragraphs: Vec<&str> = text.split('\n').collect();

    for font_size in (1..=initial).rev() {
        match run_pass(&paragraphs, font_size, box_width, box_height, measure, true) {
            Ok(layout) => {
                debug!(
                    "fit {} lines at font size {} (seeded at {initial})",
                    layout.lines.len(),
                    layout.font_size
                );
                return layout;
            }
            Err(failure) => trace!("font size {font_size} rejected: {failure:?}"),
        }
    }

    debug!("no font size >= 1 fits, forcing a floor layout");
    run_pass(&paragraphs, 1, box_width, box_height, measure, false)
        .expect("the floor pass runs without limits and cannot fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic measurer: every character is `char_width` pixels wide
    /// at font size 1 and scales linearly with the size
    struct CharGrid {
        char_width: f32,
    }

    impl Measure for CharGrid {
        fn width(&self, text: &str, font_size: u32) -> Px {
            Px(text.chars().count() as f32 * self.char_width * font_size as f32)
        }

        fn descent(&self, text: &str, font_size: u32) -> Px {
            if text.trim().is_empty() {
                Px::ZERO
            } else {
                Px(font_size as f32)
            }
        }
    }

    const GRID: CharGrid = CharGrid { char_width: 10.0 };

    #[test]
    fn square_box_prefers_larger_font_over_fewer_lines() {
        // at size 6 the single word "Hello" is already 300px wide, so the
        // first workable size is 5 — wrapped onto two lines, not shrunk
        // further onto one
        let layout = fit("Hello World", 256, 256, &GRID);
        assert_eq!(layout.font_size, 5);
        assert_eq!(layout.lines, vec!["Hello".to_string(), "World".to_string()]);
        assert_eq!(layout.max_line_width, Px(250.0));
    }

    #[test]
    fn wide_short_box_forces_a_single_line() {
        // the box is one line tall at most, so wrapping is never an option
        // and the height limit drives the size down instead
        let layout = fit("Hello World", 2560, 12, &GRID);
        assert_eq!(layout.lines, vec!["Hello World".to_string()]);
        assert_eq!(layout.font_size, 4);
        assert_eq!(layout.max_line_width, Px(440.0));
    }

    #[test]
    fn every_line_fits_the_box_width() {
        let layout = fit(
            "the quick brown fox jumps over the lazy dog",
            300,
            200,
            &GRID,
        );
        for line in &layout.lines {
            assert!(GRID.width(line, layout.font_size) <= Px(300.0), "line {line:?} overflows");
        }
        assert!(layout.max_line_width <= Px(300.0));
    }

    #[test]
    fn block_height_stays_within_the_box() {
        let layout = fit(
            "the quick brown fox jumps over the lazy dog",
            300,
            200,
            &GRID,
        );
        let stride = line_height(layout.font_size);
        let last = layout.lines.last().unwrap();
        let block = stride * (layout.lines.len() as u32 - 1)
            + GRID.descent(last, layout.font_size).0 as u32;
        assert!(block <= 200);
    }

    #[test]
    fn explicit_newline_always_breaks() {
        // "A B" would fit on one line at this size, but the newline wins
        let layout = fit("A\nB", 10000, 300, &GRID);
        assert_eq!(layout.lines, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn blank_line_between_paragraphs_is_preserved() {
        let layout = fit("A\n\nB", 10000, 1000, &GRID);
        assert_eq!(
            layout.lines,
            vec!["A".to_string(), String::new(), "B".to_string()]
        );
    }

    #[test]
    fn empty_input_yields_one_empty_line_at_the_seed_size() {
        let layout = fit("", 256, 256, &GRID);
        assert_eq!(layout.lines, vec![String::new()]);
        assert_eq!(layout.font_size, 102);
        assert_eq!(layout.max_line_width, Px(256.0));

        let whitespace = fit("  \r\n \n ", 256, 256, &GRID);
        assert_eq!(whitespace, layout);
    }

    #[test]
    fn fit_is_a_pure_function_of_its_inputs() {
        let first = fit("some sign text\nwith two paragraphs", 256, 128, &GRID);
        let second = fit("some sign text\nwith two paragraphs", 256, 128, &GRID);
        assert_eq!(first, second);
    }

    #[test]
    fn overlong_word_terminates_at_the_floor_untruncated() {
        // 20 characters at 10px each: 200px wide even at size 1, in a 50px box
        let layout = fit("Supercalifragilistic", 50, 50, &GRID);
        assert_eq!(layout.font_size, 1);
        assert_eq!(layout.lines, vec!["Supercalifragilistic".to_string()]);
        assert!(layout.max_line_width > Px(50.0));
    }

    #[test]
    fn overlong_word_still_wraps_its_neighbours_at_the_floor() {
        let layout = fit("ok Supercalifragilistic ok", 50, 50, &GRID);
        assert_eq!(layout.font_size, 1);
        assert_eq!(
            layout.lines,
            vec![
                "ok".to_string(),
                "Supercalifragilistic".to_string(),
                "ok".to_string()
            ]
        );
    }

    #[test]
    fn crlf_input_matches_lf_input() {
        let crlf = fit("A\r\nB", 10000, 300, &GRID);
        let lf = fit("A\nB", 10000, 300, &GRID);
        assert_eq!(crlf, lf);
    }
}
