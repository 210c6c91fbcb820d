//! Greedy paragraph filling.
//!
//! Splits text into alternating whitespace and word chunks and packs them
//! into lines no wider than the configured width. Whitespace inside a line
//! is kept verbatim (so column padding survives), whitespace at a line
//! break is dropped, words that cannot fit on any line are split, and
//! hyphenated words may break after the hyphen. Widths count characters.


const TAB_SIZE: usize = 8;

/// Line width and continuation indent for [`wrap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapOptions {
    pub width: usize,
    pub subsequent_indent: String,
}

impl WrapOptions {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            subsequent_indent: String::new(),
        }
    }

    /// Prefix for every line after the first.
    pub fn subsequent_indent(mut self, indent: impl Into<String>) -> Self {
        self.subsequent_indent = indent.into();
        self
    }
}

/// Wrap `text` into lines according to `options`.
///
/// Whitespace-only input yields no lines.
pub fn wrap(text: &str, options: &WrapOptions) -> Vec<String> {
    let normalized = normalize_whitespace(text);
    let mut chunks = split_chunks(&normalized);
    chunks.reverse();

    let mut lines = Vec::new();
    while !chunks.is_empty() {
        let indent = if lines.is_empty() {
            ""
        } else {
            options.subsequent_indent.as_str()
        };
        let width = options.width.saturating_sub(char_len(indent));

        // Whitespace that would start a continuation line is dropped.
        if !lines.is_empty() && chunks.last().is_some_and(|c| is_blank(c)) {
            chunks.pop();
        }

        let mut line: Vec<String> = Vec::new();
        let mut line_len = 0;
        while let Some(chunk) = chunks.last() {
            let len = char_len(chunk);
            if line_len + len > width {
                break;
            }
            line_len += len;
            line.extend(chunks.pop());
        }

        if chunks.last().is_some_and(|c| char_len(c) > width) {
            split_long_chunk(&mut chunks, &mut line, line_len, width);
        }

        if line.last().is_some_and(|c| is_blank(c)) {
            line.pop();
        }

        if !line.is_empty() {
            lines.push(format!("{}{}", indent, line.concat()));
        }
    }

    lines
}

/// Break the oversized chunk on top of the stack so its head fills the rest
/// of the current line, backing up to the last hyphen that fits.
///
/// A full line still gets an empty head pushed, so trailing whitespace
/// before it survives the blank-tail drop in [`wrap`].
fn split_long_chunk(chunks: &mut Vec<String>, line: &mut Vec<String>, line_len: usize, width: usize) {
    let space_left = if width < 1 { 1 } else { width - line_len };
    let Some(chunk) = chunks.pop() else {
        return;
    };
    let chars: Vec<char> = chunk.chars().collect();

    let mut end = space_left.min(chars.len());
    if chars.len() > space_left {
        let hyphen = chars[..space_left].iter().rposition(|&c| c == '-');
        if let Some(hyphen) = hyphen.filter(|&h| h > 0) {
            if chars[..hyphen].iter().any(|&c| c != '-') {
                end = hyphen + 1;
            }
        }
    }

    line.push(chars[..end].iter().collect());
    if end < chars.len() {
        chunks.push(chars[end..].iter().collect());
    }
}

/// Expand tabs to the next tab stop and turn every other ASCII whitespace
/// character into a plain space.
fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - (column % TAB_SIZE);
                out.extend(std::iter::repeat_n(' ', pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(' ');
                column = 0;
            }
            '\x0b' | '\x0c' => {
                out.push(' ');
                column += 1;
            }
            c => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// Split into maximal space runs and words.
///
/// Words are further split after a hyphen that has two letters (or a
/// letter, hyphen, letter) before it and a letter, optional hyphen, letter
/// after it, and around runs of two or more hyphens used as a dash between
/// words. Digits do not count as letters, so "1-2" and "e-mail" stay whole.
fn split_chunks(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = chunk_end(&chars, start);
        chunks.push(chars[start..end].iter().collect());
        start = end;
    }
    chunks
}

fn chunk_end(chars: &[char], start: usize) -> usize {
    if chars[start] == ' ' {
        return start + chars[start..].iter().take_while(|&&c| c == ' ').count();
    }
    if start > 0 && is_dash_lead(chars[start - 1]) {
        if let Some(len) = dash_run(chars, start) {
            return start + len;
        }
    }

    let mut end = start + 1;
    while end < chars.len() && chars[end] != ' ' {
        let before_dash = is_dash_lead(chars[end - 1]) && dash_run(chars, end).is_some();
        let after_hyphen = end >= start + 2 && breaks_after_hyphen(chars, end);
        if before_dash || after_hyphen {
            break;
        }
        end += 1;
    }
    end
}

/// Length of a run of two or more hyphens at `at` that is followed by a
/// word character.
fn dash_run(chars: &[char], at: usize) -> Option<usize> {
    let len = chars[at..].iter().take_while(|&&c| c == '-').count();
    let followed_by_word = chars.get(at + len).is_some_and(|&c| is_word(c));
    (len >= 2 && followed_by_word).then_some(len)
}

/// Whether a word may break between `chars[at - 1]`, a hyphen, and
/// `chars[at]`.
fn breaks_after_hyphen(chars: &[char], at: usize) -> bool {
    if at < 3 || chars[at - 1] != '-' {
        return false;
    }
    let letter_at = |i: usize| chars.get(i).is_some_and(|&c| is_letter(c));
    let behind = (letter_at(at - 3) && letter_at(at - 2))
        || (at >= 4 && letter_at(at - 4) && chars[at - 3] == '-' && letter_at(at - 2));
    let ahead = letter_at(at)
        && (letter_at(at + 1) || (chars.get(at + 1) == Some(&'-') && letter_at(at + 2)));
    behind && ahead
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_letter(c: char) -> bool {
    is_word(c) && !c.is_numeric()
}

fn is_dash_lead(c: char) -> bool {
    is_word(c) || matches!(c, '!' | '"' | '\'' | '&' | '.' | ',' | '?')
}

fn is_blank(chunk: &str) -> bool {
    chunk.chars().all(|c| c == ' ')
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
