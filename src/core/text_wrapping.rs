//! Word wrapping for message bubbles.
//!
//! The log is rendered with explicit line breaks and no ratatui wrapping, so
//! the number of rendered rows is known up front and scroll math stays exact.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Text wrapping engine for bubble contents
pub struct TextWrapper;

impl TextWrapper {
    /// Wraps `text` into rows no wider than `width` display columns.
    ///
    /// Explicit newlines are kept, runs of whitespace inside a row collapse to
    /// one space, and words wider than `width` are split across rows. Always
    /// returns at least one row.
    pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
        let width = width.max(1);
        let mut rows = Vec::new();

        for source_line in text.split('\n') {
            let mut current = String::new();
            let mut current_width = 0usize;

            for word in source_line.split_whitespace() {
                let word_width = word.width();

                if word_width > width {
                    if !current.is_empty() {
                        rows.push(std::mem::take(&mut current));
                    }
                    // Full pieces become rows; the tail stays open for the next word.
                    let mut pieces = split_by_width(word, width);
                    if let Some(tail) = pieces.pop() {
                        rows.extend(pieces);
                        current_width = tail.width();
                        current = tail;
                    }
                    continue;
                }

                let needed = if current.is_empty() {
                    word_width
                } else {
                    current_width + 1 + word_width
                };

                if needed > width {
                    rows.push(std::mem::take(&mut current));
                    current.push_str(word);
                    current_width = word_width;
                } else {
                    if !current.is_empty() {
                        current.push(' ');
                    }
                    current.push_str(word);
                    current_width = needed;
                }
            }

            rows.push(current);
        }

        if rows.is_empty() {
            rows.push(String::new());
        }
        rows
    }

    /// Display width of the widest row.
    pub fn max_row_width(rows: &[String]) -> usize {
        rows.iter().map(|row| row.width()).max().unwrap_or(0)
    }
}

fn split_by_width(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > width && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }

    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
