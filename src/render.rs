//! Plain-text rendering of a booklet
//!
//! Each page is emitted as:
//!
//! ```text
//! ================ (page width)
//!      Page N      (centered)
//! ================
//!
//! <page lines>
//!
//!
//! ```
//!
//! Blocks are joined with line breaks; the output carries no trailing newline
//! after the last page's spacing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::booklet::{Booklet, Page};
use crate::error::{Error, Result};
use crate::layout::center;

impl Booklet {
    /// Render every page, numbered from 1, into one document
    ///
    /// Rendering does not consume or change the booklet, so rendering twice
    /// gives identical output.
    pub fn render(&self) -> String {
        let width = self.layout().width();
        let separator = "=".repeat(width);

        let mut blocks = Vec::with_capacity(self.page_count() * 7);
        for (index, page) in self.pages().enumerate() {
            blocks.push(separator.clone());
            blocks.push(center(&format!("Page {}", index + 1), width));
            blocks.push(separator.clone());
            blocks.push(String::new());
            blocks.push(page_body(page));
            blocks.push(String::new());
            blocks.push(String::new());
        }

        blocks.join("\n")
    }

    /// Render the booklet and write it as UTF-8 to `path`
    ///
    /// The document is fully rendered before the file is created. Returns the
    /// destination on success.
    pub fn save(&self, path: &Path) -> Result<PathBuf> {
        let document = self.render();

        write_document(path, &document).map_err(|source| Error::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            path = %path.display(),
            pages = self.page_count(),
            bytes = document.len(),
            "wrote booklet"
        );

        Ok(path.to_path_buf())
    }
}

fn page_body(page: &Page) -> String {
    page.lines().join("\n")
}

fn write_document(path: &Path, document: &str) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(document.as_bytes())?;
    writer.flush()
}
