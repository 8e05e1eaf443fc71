//! Text Booklet Library
//!
//! A library for laying out plain text as a paginated, fixed-width booklet.
//! This library provides functionality to:
//! - Word-wrap text to a page width while keeping paragraph breaks
//! - Split wrapped lines into pages of a fixed height
//! - Prepend a centered title page
//! - Render pages with numbered headers and save the result
//!
//! # Example
//!
//! ```no_run
//! use text_booklet::{Booklet, PageLayout};
//! use std::path::Path;
//!
//! let mut booklet = Booklet::new(PageLayout::new(60, 40).expect("valid layout"));
//! booklet.add_title_page("Field Notes", Some("Ada"));
//! booklet.add_content("First paragraph.\n\nSecond paragraph.");
//!
//! booklet.save(Path::new("booklet.txt")).expect("Failed to save booklet");
//! ```

pub mod error;
pub mod layout;
pub mod booklet;
pub mod render;
pub mod input;
pub mod generate;

// Re-export commonly used items
pub use error::{Error, Result};
pub use layout::PageLayout;
pub use booklet::{Booklet, Page};
pub use generate::{generate_booklet, GenerateOptions};
