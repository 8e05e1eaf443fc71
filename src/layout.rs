//! Page layout configuration and fixed-width text primitives

use crate::error::{Error, Result};

/// Default characters per line
pub const DEFAULT_WIDTH: usize = 80;

/// Default lines per page
pub const DEFAULT_HEIGHT: usize = 50;

/// Page dimensions in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    width: usize,
    height: usize,
}

impl PageLayout {
    /// Create a layout, rejecting zero dimensions
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 {
            return Err(Error::InvalidLayout("page width must be positive".to_string()));
        }
        if height == 0 {
            return Err(Error::InvalidLayout("page height must be positive".to_string()));
        }
        Ok(Self { width, height })
    }

    /// Maximum characters per rendered line
    pub fn width(&self) -> usize {
        self.width
    }

    /// Maximum lines per content page
    pub fn height(&self) -> usize {
        self.height
    }

    /// Width the title is wrapped to, inset from the page edges
    pub fn title_width(&self) -> usize {
        self.width.saturating_sub(10).max(1)
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Greedily wrap one paragraph to at most `width` characters per line
///
/// Runs of whitespace collapse to a single space and lines break only between
/// words. A word longer than `width` starts a fresh line and is split into
/// `width`-sized pieces, each on its own line.
///
/// Returns no lines for empty or whitespace-only input.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }

        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if word_len <= width {
            current.push_str(word);
            current_len = word_len;
        } else {
            let chars: Vec<char> = word.chars().collect();
            lines.extend(chars.chunks(width).map(|piece| piece.iter().collect::<String>()));
        }
    }

    if current_len > 0 {
        lines.push(current);
    }

    lines
}

/// Center `text` in a field of `width` characters
///
/// Leading padding is the floor of the free space, trailing padding the
/// ceiling. Text at least as wide as the field comes back unchanged.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let padding = width - len;
    let left = padding / 2;
    let right = padding - left;

    let mut line = String::with_capacity(text.len() + padding);
    line.extend(std::iter::repeat(' ').take(left));
    line.push_str(text);
    line.extend(std::iter::repeat(' ').take(right));
    line
}
