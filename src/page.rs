use lazy_static::lazy_static;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use url::Url;

lazy_static! {
    static ref LINK_SEL: Selector = Selector::parse("a[href]").unwrap();
    static ref TITLE_SEL: Selector = Selector::parse("title").unwrap();
}

/// A fetched page: the parsed DOM plus the final URL it resolved to.
#[derive(Debug)]
pub struct Document {
    url: Url,
    dom: Html,
}

impl Document {
    pub fn parse(raw: &str, url: Url) -> Self {
        Self {
            url,
            dom: Html::parse_document(raw),
        }
    }

    /// Final URL of the page, after any redirects.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Document title, or an empty string when the page has none.
    pub fn title(&self) -> String {
        self.dom
            .select(&TITLE_SEL)
            .next()
            .map(|title| title.text().collect::<String>().trim().to_string())
            .unwrap_or_default()
    }

    /// Every hyperlink target resolved to an absolute URL. Same-page
    /// anchors and non-web schemes (`mailto:`, `tel:`, `javascript:`) are
    /// dropped; unresolvable hrefs are silently ignored.
    pub fn links(&self) -> Vec<Url> {
        let mut links = Vec::new();
        for element in self.dom.select(&LINK_SEL) {
            let href = match element.value().attr("href") {
                Some(href) => href,
                None => continue,
            };
            if href.starts_with('#')
                || href.starts_with("mailto:")
                || href.starts_with("tel:")
                || href.starts_with("javascript:")
            {
                continue;
            }
            if let Ok(url) = self.url.join(href) {
                links.push(url);
            }
        }
        links
    }

    /// Detaches every element matched by `selector` from the tree.
    pub fn remove_all(&mut self, selector: &Selector) {
        let ids: Vec<_> = self.dom.select(selector).map(|el| el.id()).collect();
        for id in ids {
            if let Some(mut node) = self.dom.tree.get_mut(id) {
                node.detach();
            }
        }
    }

    /// Serializes the document back to an HTML string.
    pub fn html(&self) -> String {
        self.dom.root_element().html()
    }
}

/// The output unit of a crawl: one cleaned page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrawledPage {
    pub url: String,
    pub title: String,
    pub content: String,
}
