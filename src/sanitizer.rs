use scraper::Selector;

use crate::page::Document;

/// Strips non-content elements from the head and body regions of a page.
pub struct Sanitizer {
    selectors: Vec<Selector>,
}

impl Sanitizer {
    /// Compiles region-scoped selectors for the given tag names. A tag name
    /// that doesn't form a valid selector is skipped with a warning.
    pub fn new(head_tags: &[String], body_tags: &[String]) -> Self {
        let mut selectors = Vec::with_capacity(head_tags.len() + body_tags.len());
        for (region, tags) in [("head", head_tags), ("body", body_tags)] {
            for tag in tags {
                match Selector::parse(&format!("{region} {tag}")) {
                    Ok(sel) => selectors.push(sel),
                    Err(e) => log::warn!("Ignoring strip tag {tag:?}: {e}"),
                }
            }
        }
        Self { selectors }
    }

    /// Removes every configured element from `doc`, in place. Absent
    /// matches are a no-op, so cleaning twice equals cleaning once.
    pub fn clean(&self, doc: &mut Document) {
        for selector in &self.selectors {
            doc.remove_all(selector);
        }
    }
}
