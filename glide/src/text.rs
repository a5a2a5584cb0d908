use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Truncate to `max_width` columns, appending an ellipsis when content was
/// cut. Returns the input unchanged when it already fits.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}

/// Word-wrap into lines of at most `max_width` columns. Words wider than a
/// line fall back to character wrapping. Always yields at least one line.
pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        if input_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0;

        for word in input_line.split_whitespace() {
            let word_width = display_width(word);

            if word_width > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                let mut broken = wrap_chars(word, max_width);
                if let Some(last) = broken.pop() {
                    lines.extend(broken);
                    current_width = display_width(&last);
                    current = last;
                }
                continue;
            }

            let space = usize::from(!current.is_empty());
            if current_width + space + word_width > max_width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            } else if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Hard-wrap at character boundaries, keeping zero-width characters with
/// the preceding cell.
pub fn wrap_chars(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        if input_line.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0;

        for ch in input_line.chars() {
            let ch_width = char_width(ch);

            if ch_width == 0 {
                current.push(ch);
                continue;
            }

            if current_width + ch_width > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current_width = 0;
            }

            current.push(ch);
            current_width += ch_width;
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
