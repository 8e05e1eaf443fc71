//! Pagination and title page construction
//!
//! A [`Booklet`] collects pages in two ways:
//! - [`Booklet::add_content`] wraps text to the page width and cuts it into
//!   pages of at most the page height, appending them in call order
//! - [`Booklet::add_title_page`] builds one full-height centered page and puts
//!   it in front of everything added so far

use std::collections::VecDeque;
use tracing::debug;

use crate::layout::{center, wrap, PageLayout};

/// Blank lines between the title block and the author line
const AUTHOR_GAP: usize = 3;

/// One page of fixed-width lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    lines: Vec<String>,
}

impl Page {
    fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Lines on this page, top to bottom
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines on this page
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Ordered collection of pages for one document
#[derive(Debug, Clone)]
pub struct Booklet {
    layout: PageLayout,
    pages: VecDeque<Page>,
}

impl Booklet {
    /// Create an empty booklet with the given layout
    pub fn new(layout: PageLayout) -> Self {
        Self {
            layout,
            pages: VecDeque::new(),
        }
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Pages in render order
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Wrap and paginate `text`, appending the resulting pages
    ///
    /// Every input line is wrapped on its own so paragraph breaks survive; a
    /// blank or whitespace-only line becomes one empty output line. The last
    /// page may be shorter than the page height and is not padded.
    ///
    /// Text that is empty or all whitespace adds nothing. Returns the number
    /// of pages appended.
    pub fn add_content(&mut self, text: &str) -> usize {
        if text.trim().is_empty() {
            debug!("skipping blank content");
            return 0;
        }

        let lines = wrap_paragraphs(text, self.layout.width());
        let pages = paginate(lines, self.layout.height());
        let added = pages.len();

        debug!(
            pages = added,
            width = self.layout.width(),
            height = self.layout.height(),
            "paginated content"
        );

        self.pages.extend(pages);
        added
    }

    /// Build a centered title page and insert it before all other pages
    ///
    /// The page is padded with blank lines to exactly the page height. A title
    /// and author that need more lines than that are kept whole, so the page
    /// can run past the nominal height. An empty `author` is ignored.
    ///
    /// Each call inserts at the front, so calling twice leaves the most
    /// recent title page first.
    pub fn add_title_page(&mut self, title: &str, author: Option<&str>) {
        let page = build_title_page(&self.layout, title, author);
        debug!(lines = page.len(), "inserted title page");
        self.pages.push_front(page);
    }
}

/// Split on line breaks and wrap each line independently
fn wrap_paragraphs(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            lines.push(String::new());
        } else {
            lines.extend(wrap(line, width));
        }
    }

    lines
}

/// Group lines into pages of at most `height` lines
fn paginate(lines: Vec<String>, height: usize) -> Vec<Page> {
    let mut pages = Vec::with_capacity(lines.len().div_ceil(height.max(1)));
    let mut current = Vec::with_capacity(height);

    for line in lines {
        current.push(line);
        if current.len() >= height {
            pages.push(Page::new(std::mem::replace(&mut current, Vec::with_capacity(height))));
        }
    }

    if !current.is_empty() {
        pages.push(Page::new(current));
    }

    pages
}

fn build_title_page(layout: &PageLayout, title: &str, author: Option<&str>) -> Page {
    let width = layout.width();
    let height = layout.height();

    let mut lines = vec![String::new(); height / 4];

    lines.extend(
        wrap(title, layout.title_width())
            .iter()
            .map(|line| center(line, width)),
    );

    if let Some(author) = author.filter(|a| !a.is_empty()) {
        lines.extend(std::iter::repeat(String::new()).take(AUTHOR_GAP));
        lines.push(center(&format!("by {}", author), width));
    }

    if lines.len() < height {
        lines.resize(height, String::new());
    }

    Page::new(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: usize, height: usize) -> PageLayout {
        PageLayout::new(width, height).unwrap()
    }

    #[test]
    fn test_single_short_line() {
        let mut booklet = Booklet::new(PageLayout::default());
        assert_eq!(booklet.add_content("Hello world"), 1);

        let page = booklet.pages().next().unwrap();
        assert_eq!(page.lines(), ["Hello world"]);
    }

    #[test]
    fn test_blank_content_adds_no_pages() {
        let mut booklet = Booklet::new(PageLayout::default());
        assert_eq!(booklet.add_content(""), 0);
        assert_eq!(booklet.add_content(" \n\t\n  "), 0);
        assert!(booklet.is_empty());
    }

    #[test]
    fn test_blank_lines_preserved() {
        let mut booklet = Booklet::new(PageLayout::default());
        booklet.add_content("first\n   \nsecond\n\nthird");

        let page = booklet.pages().next().unwrap();
        assert_eq!(page.lines(), ["first", "", "second", "", "third"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut booklet = Booklet::new(PageLayout::default());
        booklet.add_content("one\r\ntwo\r\n");

        let page = booklet.pages().next().unwrap();
        assert_eq!(page.lines(), ["one", "two", ""]);
    }

    #[test]
    fn test_page_break_exactness() {
        let text: Vec<String> = (0..23).map(|i| format!("line {}", i)).collect();
        let mut booklet = Booklet::new(layout(80, 5));
        assert_eq!(booklet.add_content(&text.join("\n")), 5);

        let sizes: Vec<usize> = booklet.pages().map(Page::len).collect();
        assert_eq!(sizes, vec![5, 5, 5, 5, 3]);
    }

    #[test]
    fn test_exact_multiple_has_no_empty_tail() {
        let text = vec!["x"; 10].join("\n");
        let mut booklet = Booklet::new(layout(80, 5));
        assert_eq!(booklet.add_content(&text), 2);
        assert!(booklet.pages().all(|p| p.len() == 5));
    }

    #[test]
    fn test_single_character_words_wrap() {
        let text = vec!["a"; 120].join(" ");
        let mut booklet = Booklet::new(layout(10, 1000));
        assert_eq!(booklet.add_content(&text), 1);

        let page = booklet.pages().next().unwrap();
        assert_eq!(page.len(), 24);
        assert!(page.lines().iter().all(|l| l == "a a a a a"));
    }

    #[test]
    fn test_content_calls_append_in_order() {
        let mut booklet = Booklet::new(layout(80, 1));
        booklet.add_content("first");
        booklet.add_content("second\nthird");

        let firsts: Vec<&str> = booklet.pages().map(|p| p.lines()[0].as_str()).collect();
        assert_eq!(firsts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_title_page_layout() {
        let mut booklet = Booklet::new(PageLayout::default());
        booklet.add_title_page("Report", Some("Ada"));

        let page = booklet.pages().next().unwrap();
        assert_eq!(page.len(), 50);

        let lines = page.lines();
        assert!(lines[..12].iter().all(String::is_empty));
        assert_eq!(lines[12], center("Report", 80));
        assert!(lines[13..16].iter().all(String::is_empty));
        assert_eq!(lines[16], center("by Ada", 80));
        assert!(lines[17..].iter().all(String::is_empty));
    }

    #[test]
    fn test_title_page_without_author() {
        let mut booklet = Booklet::new(layout(40, 8));
        booklet.add_title_page("Notes", None);

        let lines = booklet.pages().next().unwrap().lines().to_vec();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[2], center("Notes", 40));
        assert_eq!(lines.iter().filter(|l| !l.is_empty()).count(), 1);
    }

    #[test]
    fn test_empty_author_ignored() {
        let mut booklet = Booklet::new(layout(40, 8));
        booklet.add_title_page("Notes", Some(""));

        let lines = booklet.pages().next().unwrap().lines().to_vec();
        assert!(!lines.iter().any(|l| l.contains("by")));
    }

    #[test]
    fn test_long_title_wraps_inset() {
        let mut booklet = Booklet::new(layout(30, 20));
        booklet.add_title_page("A fairly long title that needs several lines", None);

        let page = booklet.pages().next().unwrap();
        let title_lines: Vec<&String> = page.lines().iter().filter(|l| !l.is_empty()).collect();
        assert!(title_lines.len() > 1);
        for line in title_lines {
            assert_eq!(line.chars().count(), 30);
            assert!(line.trim().chars().count() <= 20);
        }
    }

    #[test]
    fn test_title_page_can_overflow_height() {
        let mut booklet = Booklet::new(layout(15, 4));
        booklet.add_title_page("one two three four five six", Some("Someone"));

        let page = booklet.pages().next().unwrap();
        assert!(page.len() > 4);
        assert_eq!(page.lines().last().unwrap(), &center("by Someone", 15));
    }

    #[test]
    fn test_title_page_inserted_first() {
        let mut booklet = Booklet::new(layout(40, 10));
        booklet.add_content("body text");
        booklet.add_title_page("Title", None);

        assert_eq!(booklet.page_count(), 2);
        let last = booklet.pages().last().unwrap();
        assert_eq!(last.lines(), ["body text"]);
    }

    #[test]
    fn test_repeated_title_pages_reverse_order() {
        let mut booklet = Booklet::new(layout(40, 10));
        booklet.add_title_page("First", None);
        booklet.add_title_page("Second", None);

        let titles: Vec<String> = booklet
            .pages()
            .map(|p| p.lines().iter().find(|l| !l.is_empty()).unwrap().trim().to_string())
            .collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }
}
