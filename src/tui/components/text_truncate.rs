//! Width and height clipping for fixed-size terminal panes.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Clips `text` to `max_width` terminal columns, ending with an ellipsis
/// when anything was cut.
///
/// Widths of three columns or fewer cannot hold text plus an ellipsis and
/// render as dots.
pub(crate) fn fit_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= ELLIPSIS.len() {
        return ".".repeat(max_width);
    }

    let budget = max_width.saturating_sub(ELLIPSIS.len());
    let mut clipped = String::new();
    let mut used = 0_usize;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(ch_width) > budget {
            break;
        }
        clipped.push(ch);
        used = used.saturating_add(ch_width);
    }
    clipped.push_str(ELLIPSIS);
    clipped
}

/// Keeps at most `max_height` lines of `output`, replacing the overflow with
/// a single ellipsis line. A height of zero leaves the output untouched.
pub(crate) fn clip_lines(output: &str, max_height: usize) -> String {
    if max_height == 0 || output.lines().count() <= max_height {
        return output.to_owned();
    }

    let mut clipped: String = output
        .lines()
        .take(max_height.saturating_sub(1))
        .flat_map(|line| [line, "\n"])
        .collect();
    clipped.push_str(ELLIPSIS);
    clipped.push('\n');
    clipped
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::fits("hello", 10, "hello")]
    #[case::zero("abcdef", 0, "")]
    #[case::dots("abcdef", 2, "..")]
    #[case::exactly_ellipsis("abcdef", 3, "...")]
    #[case::ellipsis("abcdefgh", 6, "abc...")]
    #[case::wide("你好世界", 5, "你...")]
    fn fit_width_respects_columns(
        #[case] text: &str,
        #[case] width: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(fit_width(text, width), expected);
    }

    #[rstest]
    #[case::short("one\ntwo\n", 3, "one\ntwo\n")]
    #[case::overflow("one\ntwo\nthree\n", 2, "one\n...\n")]
    #[case::unbounded("one\ntwo\n", 0, "one\ntwo\n")]
    fn clip_lines_caps_height(#[case] output: &str, #[case] height: usize, #[case] expected: &str) {
        assert_eq!(clip_lines(output, height), expected);
    }
}
