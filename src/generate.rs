//! End-to-end booklet generation

use tracing::debug;

use crate::booklet::Booklet;
use crate::error::{Error, Result};
use crate::input::ensure_content;
use crate::layout::PageLayout;

/// Options for generating a booklet from source text
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Page dimensions
    pub layout: PageLayout,
    /// Title for the title page; no title page when absent or empty
    pub title: Option<String>,
    /// Author line for the title page, only used together with a title
    pub author: Option<String>,
}

/// Build a booklet from `content`
///
/// Fails with [`Error::EmptyContent`] for blank input and with
/// [`Error::NoPagesProduced`] if no pages came out, so a caller never writes
/// an empty document.
///
/// # Example
///
/// ```
/// use text_booklet::{generate_booklet, GenerateOptions};
///
/// let options = GenerateOptions {
///     title: Some("Report".to_string()),
///     author: Some("Ada".to_string()),
///     ..Default::default()
/// };
///
/// let booklet = generate_booklet("Hello world", &options).unwrap();
/// assert_eq!(booklet.page_count(), 2);
/// ```
pub fn generate_booklet(content: &str, options: &GenerateOptions) -> Result<Booklet> {
    ensure_content(content)?;

    let mut booklet = Booklet::new(options.layout);

    if let Some(title) = options.title.as_deref().filter(|t| !t.is_empty()) {
        booklet.add_title_page(title, options.author.as_deref());
    }

    let added = booklet.add_content(content);
    debug!(content_pages = added, total_pages = booklet.page_count(), "generated booklet");

    if booklet.is_empty() {
        return Err(Error::NoPagesProduced);
    }

    Ok(booklet)
}
