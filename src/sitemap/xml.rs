// src/sitemap/xml.rs

//! Sitemap XML serialization.
//!
//! Produces a `<urlset>` document conforming to the Sitemap Protocol 0.9
//! schema, one `<url><loc>` entry per discovered page.

use std::io::Write;

use quick_xml::se::Serializer;
use serde::Serialize;

use crate::error::{AppError, Result};

/// XML namespace of the Sitemap Protocol 0.9 schema.
pub const XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Root `<urlset>` element.
#[derive(Debug, Serialize)]
#[serde(rename = "urlset")]
pub struct UrlSet {
    #[serde(rename = "@xmlns")]
    xmlns: String,

    #[serde(rename = "url")]
    urls: Vec<UrlEntry>,
}

/// A single `<url>` child holding the page location.
#[derive(Debug, Serialize)]
struct UrlEntry {
    loc: String,
}

impl UrlSet {
    /// Build a urlset from discovered page URLs.
    pub fn new(pages: &[String]) -> Self {
        Self {
            xmlns: XMLNS.to_string(),
            urls: pages
                .iter()
                .map(|page| UrlEntry { loc: page.clone() })
                .collect(),
        }
    }

    /// Serialize to an indented XML document, declaration included.
    pub fn to_xml(&self) -> Result<String> {
        let mut body = String::new();
        let mut serializer = Serializer::new(&mut body);
        serializer.indent(' ', 3);
        self.serialize(serializer).map_err(AppError::xml)?;

        let mut document = String::from(XML_DECLARATION);
        document.push_str(&body);
        document.push('\n');
        Ok(document)
    }
}

/// Write the sitemap for `pages` to `out`.
pub fn write_sitemap(pages: &[String], out: &mut impl Write) -> Result<()> {
    let document = UrlSet::new(pages).to_xml()?;
    out.write_all(document.as_bytes())?;
    Ok(())
}
