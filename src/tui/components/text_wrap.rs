//! Word wrapping for review bodies and report text.

use unicode_width::UnicodeWidthStr;

use super::text_truncate::fit_width;

/// Wraps `text` at word boundaries to lines of at most `max_width` columns,
/// prefixing every line with `indent`.
///
/// Words wider than the available width are clipped with an ellipsis rather
/// than split. A zero width returns the text on a single indented line.
#[must_use]
pub fn wrap_words(text: &str, max_width: usize, indent: &str) -> Vec<String> {
    let available = max_width.saturating_sub(indent.width());
    if available == 0 {
        return vec![format!("{indent}{text}")];
    }

    let mut wrapper = LineWrapper::new(indent, available);
    for word in text.split_whitespace() {
        wrapper.push_word(word);
    }
    wrapper.finish()
}

struct LineWrapper<'a> {
    indent: &'a str,
    available: usize,
    lines: Vec<String>,
    current: String,
    current_width: usize,
}

impl<'a> LineWrapper<'a> {
    const fn new(indent: &'a str, available: usize) -> Self {
        Self {
            indent,
            available,
            lines: Vec::new(),
            current: String::new(),
            current_width: 0,
        }
    }

    fn push_word(&mut self, word: &str) {
        let word_text = fit_width(word, self.available);
        let word_width = word_text.width();
        let needed = if self.current_width == 0 {
            word_width
        } else {
            self.current_width.saturating_add(1).saturating_add(word_width)
        };

        if needed > self.available {
            self.break_line();
        }
        if self.current_width > 0 {
            self.current.push(' ');
            self.current_width = self.current_width.saturating_add(1);
        }
        self.current.push_str(&word_text);
        self.current_width = self.current_width.saturating_add(word_width);
    }

    fn break_line(&mut self) {
        if self.current_width == 0 {
            return;
        }
        let line = std::mem::take(&mut self.current);
        self.lines.push(format!("{}{line}", self.indent));
        self.current_width = 0;
    }

    fn finish(mut self) -> Vec<String> {
        self.break_line();
        self.lines
    }
}
