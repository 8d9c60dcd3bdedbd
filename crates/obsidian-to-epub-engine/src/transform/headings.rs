//! Blank-line padding around headings.
//!
//! Pandoc starts a new EPUB page on some headings when they are glued to the
//! paragraph above or below. Surrounding each shallow heading with blank
//! lines avoids the stray page breaks.

use super::lines::split_lines;

/// The ATX heading marker.
pub const HEADING_MARKER: char = '#';

/// Deepest heading level that gets padded. `####` and deeper pass through.
pub const MAX_PADDED_LEVEL: usize = 3;

/// Returns the heading level of `line` if it is a heading this transform pads.
///
/// Leading whitespace is ignored. A run of more than [`MAX_PADDED_LEVEL`]
/// markers is not treated as a heading.
pub fn heading_level(line: &str) -> Option<usize> {
    let level = line
        .trim_start()
        .chars()
        .take_while(|&c| c == HEADING_MARKER)
        .count();
    (1..=MAX_PADDED_LEVEL).contains(&level).then_some(level)
}

/// Surrounds every heading line with a blank line before and after.
///
/// Lines are rejoined with a single `\n`, so a trailing newline in `text`
/// is not kept.
pub fn space_headings(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for line in split_lines(text) {
        if heading_level(line).is_some() {
            out.extend(["", line, ""]);
        } else {
            out.push(line);
        }
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some(1))]
    #[case("## Title", Some(2))]
    #[case("### Title", Some(3))]
    #[case("   ## Indented", Some(2))]
    #[case("#tag", Some(1))]
    #[case("#### Too deep", None)]
    #[case("##### Deeper", None)]
    #[case("plain text", None)]
    #[case("text with # inside", None)]
    #[case("", None)]
    fn classifies_heading_levels(#[case] line: &str, #[case] expected: Option<usize>) {
        assert_eq!(heading_level(line), expected);
    }

    #[test]
    fn pads_level_three_heading() {
        assert_eq!(space_headings("### Title"), "\n### Title\n");
    }

    #[test]
    fn leaves_level_four_heading_untouched() {
        assert_eq!(space_headings("#### Title"), "#### Title");
    }

    #[test]
    fn pads_heading_between_paragraphs() {
        let input = "intro\n# Chapter\nbody";
        assert_eq!(space_headings(input), "intro\n\n# Chapter\n\nbody");
    }

    #[test]
    fn text_without_headings_is_unchanged() {
        let input = "first line\nsecond line\n\n> quoted\n- item";
        assert_eq!(space_headings(input), input);
    }

    #[test]
    fn trailing_newline_is_dropped() {
        assert_eq!(space_headings("one\ntwo\n"), "one\ntwo");
    }

    #[test]
    fn pads_headings_in_carriage_return_notes() {
        assert_eq!(space_headings("intro\r# Head\rtext"), "intro\n\n# Head\n\ntext");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(space_headings(""), "");
    }
}
