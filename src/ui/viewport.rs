//! Focal-line windowing.
//!
//! [`window`] turns a chapter and a cursor line into exactly `height`
//! [`Slot`]s centered on the cursor, padding with blank slots where the
//! chapter runs out above or below. The [`Viewport`] carries the terminal
//! size the window height is derived from; it is passed explicitly to
//! rendering rather than read from global state.

use crate::document::{Chapter, Line};

/// Rows reserved on the reading screen: header, footer and two spacers.
pub const READING_CHROME_ROWS: u16 = 4;

/// Terminal dimensions used for layout.
///
/// # Example
///
/// ```
/// use focal::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 24);
/// assert_eq!(vp.window_height(), 20);
///
/// vp.resize(80, 3);
/// assert_eq!(vp.window_height(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
}

impl Viewport {
    /// Create a viewport for a terminal of `width` x `height` cells.
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Resize after a terminal resize event.
    pub const fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Number of focal-window rows on the reading screen (at least 1).
    pub fn window_height(&self) -> usize {
        usize::from(self.height.saturating_sub(READING_CHROME_ROWS)).max(1)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

/// One row of the focal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<'a> {
    /// The chapter line shown in this row, or `None` for padding
    pub line: Option<&'a Line>,
    /// Distance from the cursor line; 0 is the focal line
    pub distance: isize,
}

impl<'a> Slot<'a> {
    const fn blank(distance: isize) -> Self {
        Self {
            line: None,
            distance,
        }
    }

    const fn line(line: &'a Line, distance: isize) -> Self {
        Self {
            line: Some(line),
            distance,
        }
    }

    pub const fn is_focal(&self) -> bool {
        self.distance == 0 && self.line.is_some()
    }
}

/// Compute the focal window for `chapter` at `cursor`.
pub fn window(chapter: &Chapter, cursor: usize, height: usize) -> Vec<Slot<'_>> {
    window_lines(chapter.lines(), cursor, height)
}

/// Compute the focal window over a slice of lines.
///
/// With `half = height / 2`, up to `half` lines are shown on each side of
/// the cursor. Missing lines above the cursor become leading blank slots
/// with distances `half, half - 1, ...`; missing lines below become
/// trailing blank slots with ascending distances.
///
/// For an even `height` the `half` arithmetic yields `height + 1` rows; the
/// surplus row after the focal line is dropped, so exactly `height` slots
/// are returned and the window shows one more row above the cursor than
/// below (`height = 4` gives distances `-2, -1, 0, 1`). This keeps
/// `height / 2` leading blanks at the start of a chapter.
#[allow(clippy::cast_possible_wrap)]
pub fn window_lines(lines: &[Line], cursor: usize, height: usize) -> Vec<Slot<'_>> {
    if height == 0 {
        return Vec::new();
    }

    // Line counts and heights are far below isize::MAX.
    let half = (height / 2) as isize;
    let cursor_i = cursor as isize;
    let len = lines.len() as isize;

    let start = (cursor_i - half).max(0);
    let end = (cursor_i + half + 1).min(len);

    let mut slots = Vec::with_capacity(height + 1);

    let lines_before = cursor_i - start;
    let padding_before = (half - lines_before).max(0);
    for i in 0..padding_before {
        slots.push(Slot::blank(half - i));
    }

    if start < end {
        #[allow(clippy::cast_sign_loss)]
        let range = start as usize..end as usize;
        for (idx, line) in lines[range.clone()].iter().enumerate() {
            let distance = (range.start + idx) as isize - cursor_i;
            slots.push(Slot::line(line, distance));
        }
    }

    let lines_after = end - cursor_i - 1;
    let padding_after = (half - lines_after).max(0);
    for i in 0..padding_after {
        slots.push(Slot::blank(lines_after + 1 + i));
    }

    slots.truncate(height);
    while slots.len() < height {
        let next = slots.last().map_or(1, |slot| slot.distance + 1);
        slots.push(Slot::blank(next));
    }
    slots
}

/// Next non-empty line after `from`, or `None` at the end of the chapter.
pub fn next_content_line(chapter: &Chapter, from: usize) -> Option<usize> {
    let lines = chapter.lines();
    (from.saturating_add(1)..lines.len()).find(|&idx| lines[idx].is_content())
}

/// Previous non-empty line before `from`, or `None` at the start.
pub fn prev_content_line(chapter: &Chapter, from: usize) -> Option<usize> {
    let lines = chapter.lines();
    (0..from.min(lines.len())).rev().find(|&idx| lines[idx].is_content())
}

/// First non-empty line, or 0 when the chapter has no content lines.
pub fn first_content_line(chapter: &Chapter) -> usize {
    chapter
        .lines()
        .iter()
        .position(Line::is_content)
        .unwrap_or(0)
}

/// Last non-empty line, or the final index when the chapter has none.
pub fn last_content_line(chapter: &Chapter) -> usize {
    let lines = chapter.lines();
    lines
        .iter()
        .rposition(Line::is_content)
        .unwrap_or_else(|| lines.len().saturating_sub(1))
}

/// Reading progress through a chapter as a rounded percentage.
///
/// Chapters with at most one line are always 100%.
pub fn completion_percent(cursor: usize, total_lines: usize) -> u8 {
    if total_lines <= 1 {
        return 100;
    }
    let cursor = cursor.min(total_lines - 1);
    // Percentage value always 0-100
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    {
        ((cursor as f64 / (total_lines - 1) as f64) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::LineKind;

    fn para(text: &str) -> Line {
        Line::new(text, LineKind::Paragraph, text)
    }

    fn chapter_of(count: usize) -> Chapter {
        let lines = (0..count).map(|i| para(&format!("line {i}"))).collect();
        Chapter::new(1, "test.md", lines)
    }

    fn distances(slots: &[Slot<'_>]) -> Vec<isize> {
        slots.iter().map(|s| s.distance).collect()
    }

    fn texts(slots: &[Slot<'_>]) -> Vec<Option<String>> {
        slots
            .iter()
            .map(|s| s.line.map(|l| l.text().to_string()))
            .collect()
    }

    #[test]
    fn test_window_in_middle_has_no_padding() {
        let chapter = chapter_of(20);
        let slots = window(&chapter, 10, 5);
        assert_eq!(distances(&slots), vec![-2, -1, 0, 1, 2]);
        assert!(slots.iter().all(|s| s.line.is_some()));
        assert_eq!(slots[2].line.unwrap().text(), "line 10");
    }

    #[test]
    fn test_window_at_start_pads_before() {
        let chapter = chapter_of(20);
        let slots = window(&chapter, 0, 5);
        assert_eq!(distances(&slots), vec![2, 1, 0, 1, 2]);
        assert_eq!(
            texts(&slots),
            vec![
                None,
                None,
                Some("line 0".to_string()),
                Some("line 1".to_string()),
                Some("line 2".to_string()),
            ]
        );
    }

    #[test]
    fn test_window_near_start_pads_partially() {
        let chapter = chapter_of(20);
        let slots = window(&chapter, 1, 7);
        // half = 3, one line above the cursor, two blanks
        assert_eq!(distances(&slots), vec![3, 2, -1, 0, 1, 2, 3]);
        assert!(slots[0].line.is_none());
        assert!(slots[1].line.is_none());
        assert_eq!(slots[2].line.unwrap().text(), "line 0");
    }

    #[test]
    fn test_window_at_end_pads_after() {
        let chapter = chapter_of(10);
        let slots = window(&chapter, 9, 5);
        assert_eq!(distances(&slots), vec![-2, -1, 0, 1, 2]);
        assert_eq!(slots[2].line.unwrap().text(), "line 9");
        assert!(slots[3].line.is_none());
        assert!(slots[4].line.is_none());
    }

    #[test]
    fn test_window_single_line_chapter() {
        let chapter = chapter_of(1);
        let slots = window(&chapter, 0, 7);
        assert_eq!(slots.len(), 7);
        assert_eq!(slots.iter().take_while(|s| s.line.is_none()).count(), 3);
        assert!(slots[3].is_focal());
        assert_eq!(distances(&slots), vec![3, 2, 1, 0, 1, 2, 3]);
    }

    #[test]
    fn test_window_even_height_drops_last_row() {
        let chapter = chapter_of(20);
        let slots = window(&chapter, 10, 4);
        assert_eq!(distances(&slots), vec![-2, -1, 0, 1]);
    }

    #[test]
    fn test_window_height_one_is_focal_only() {
        let chapter = chapter_of(3);
        let slots = window(&chapter, 1, 1);
        assert_eq!(slots.len(), 1);
        assert!(slots[0].is_focal());
    }

    #[test]
    fn test_window_height_zero_is_empty() {
        assert!(window(&chapter_of(3), 0, 0).is_empty());
    }

    #[test]
    fn test_window_over_no_lines_is_all_blank() {
        let slots = window_lines(&[], 0, 5);
        assert_eq!(slots.len(), 5);
        assert!(slots.iter().all(|s| s.line.is_none()));
    }

    #[test]
    fn test_window_empty_chapter_still_has_focal_slot() {
        let chapter = Chapter::new(1, "empty.md", Vec::new());
        assert_eq!(chapter.line_count(), 1);
        let slots = window(&chapter, 0, 5);
        assert_eq!(slots.iter().filter(|s| s.is_focal()).count(), 1);
    }

    #[test]
    fn test_viewport_window_height_reserves_chrome() {
        assert_eq!(Viewport::new(80, 24).window_height(), 20);
        assert_eq!(Viewport::new(80, 4).window_height(), 1);
        assert_eq!(Viewport::new(80, 0).window_height(), 1);
    }

    #[test]
    fn test_resize_updates_dimensions() {
        let mut vp = Viewport::new(80, 24);
        vp.resize(120, 40);
        assert_eq!(vp.width(), 120);
        assert_eq!(vp.height(), 40);
    }

    fn mixed_chapter() -> Chapter {
        Chapter::new(
            3,
            "03.md",
            vec![
                Line::new("Three", LineKind::Header, "# Three"),
                Line::empty(),
                para("first"),
                Line::empty(),
                para("second"),
            ],
        )
    }

    #[test]
    fn test_next_content_line_skips_empty() {
        let chapter = mixed_chapter();
        assert_eq!(next_content_line(&chapter, 0), Some(2));
        assert_eq!(next_content_line(&chapter, 2), Some(4));
        assert_eq!(next_content_line(&chapter, 4), None);
    }

    #[test]
    fn test_prev_content_line_skips_empty() {
        let chapter = mixed_chapter();
        assert_eq!(prev_content_line(&chapter, 4), Some(2));
        assert_eq!(prev_content_line(&chapter, 2), Some(0));
        assert_eq!(prev_content_line(&chapter, 0), None);
    }

    #[test]
    fn test_content_lines_in_all_empty_chapter() {
        let chapter = Chapter::new(1, "blank.md", vec![Line::empty(), Line::empty()]);
        assert_eq!(next_content_line(&chapter, 0), None);
        assert_eq!(prev_content_line(&chapter, 1), None);
        assert_eq!(first_content_line(&chapter), 0);
        assert_eq!(last_content_line(&chapter), 1);
    }

    #[test]
    fn test_first_and_last_content_line() {
        let chapter = Chapter::new(
            1,
            "x.md",
            vec![Line::empty(), para("a"), para("b"), Line::empty()],
        );
        assert_eq!(first_content_line(&chapter), 1);
        assert_eq!(last_content_line(&chapter), 2);
    }

    #[test]
    fn test_completion_percent() {
        assert_eq!(completion_percent(0, 1), 100);
        assert_eq!(completion_percent(0, 0), 100);
        assert_eq!(completion_percent(0, 11), 0);
        assert_eq!(completion_percent(5, 11), 50);
        assert_eq!(completion_percent(10, 11), 100);
        assert_eq!(completion_percent(1, 3), 50);
        assert_eq!(completion_percent(1, 4), 33);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn window_always_fills_height(
                total in 1..300usize,
                cursor_seed in 0..300usize,
                height in 1..80usize,
            ) {
                let chapter = chapter_of(total);
                let cursor = cursor_seed % total;
                let slots = window(&chapter, cursor, height);
                prop_assert_eq!(slots.len(), height);
            }

            #[test]
            fn window_has_exactly_one_focal_slot(
                total in 1..300usize,
                cursor_seed in 0..300usize,
                height in 1..80usize,
            ) {
                let chapter = chapter_of(total);
                let cursor = cursor_seed % total;
                let slots = window(&chapter, cursor, height);
                let focal: Vec<_> = slots.iter().filter(|s| s.is_focal()).collect();
                prop_assert_eq!(focal.len(), 1);
                prop_assert_eq!(focal[0].line, chapter.line(cursor));
            }

            #[test]
            fn window_lines_match_their_distance(
                total in 1..300usize,
                cursor_seed in 0..300usize,
                height in 1..80usize,
            ) {
                let chapter = chapter_of(total);
                let cursor = cursor_seed % total;
                for slot in window(&chapter, cursor, height) {
                    if let Some(line) = slot.line {
                        let idx = cursor as isize + slot.distance;
                        prop_assert!(idx >= 0 && (idx as usize) < total);
                        prop_assert_eq!(Some(line), chapter.line(idx as usize));
                    }
                }
            }

            #[test]
            fn single_line_window_has_half_leading_blanks(height in 1..80usize) {
                let chapter = chapter_of(1);
                let slots = window(&chapter, 0, height);
                let leading = slots.iter().take_while(|s| s.line.is_none()).count();
                prop_assert_eq!(leading, height / 2);
            }

            #[test]
            fn content_navigation_never_lands_on_empty(
                kinds in prop::collection::vec(any::<bool>(), 1..60),
                from_seed in 0..60usize,
            ) {
                let lines = kinds
                    .iter()
                    .map(|&content| if content { para("x") } else { Line::empty() })
                    .collect::<Vec<_>>();
                let chapter = Chapter::new(1, "p.md", lines);
                let from = from_seed % kinds.len();
                if let Some(next) = next_content_line(&chapter, from) {
                    prop_assert!(next > from);
                    prop_assert!(chapter.lines()[next].is_content());
                    prop_assert!(chapter.lines()[from + 1..next].iter().all(|l| !l.is_content()));
                }
                if let Some(prev) = prev_content_line(&chapter, from) {
                    prop_assert!(prev < from);
                    prop_assert!(chapter.lines()[prev].is_content());
                    prop_assert!(chapter.lines()[prev + 1..from].iter().all(|l| !l.is_content()));
                }
            }
        }
    }
}
