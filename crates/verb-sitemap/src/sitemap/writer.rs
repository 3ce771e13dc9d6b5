//! Serialize URL records into a sitemap `urlset` document.

use crate::error::{Result, SitemapError};
use crate::sitemap::record::UrlRecord;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

const CHANGEFREQ: &str = "monthly";

/// Create an indented XML writer with the declaration already written.
pub(crate) fn xml_writer() -> Result<Writer<Vec<u8>>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    Ok(writer)
}

/// Write `<name>text</name>`.
pub(crate) fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Finish the document and return its bytes with a trailing newline.
pub(crate) fn finish(writer: Writer<Vec<u8>>) -> Vec<u8> {
    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    bytes
}

/// Write bytes to `path`, replacing any existing file.
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|source| SitemapError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Render records as a sitemap document.
pub fn render_sitemap(records: &[UrlRecord]) -> Result<Vec<u8>> {
    let mut writer = xml_writer()?;

    writer.write_event(Event::Start(
        BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS), ("xmlns:xhtml", XHTML_NS)]),
    ))?;

    for record in records {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &record.main_url)?;
        write_text_element(&mut writer, "lastmod", &record.lastmod)?;
        write_text_element(&mut writer, "changefreq", CHANGEFREQ)?;

        for alternate in &record.alternates {
            writer.write_event(Event::Empty(BytesStart::new("xhtml:link").with_attributes([
                ("rel", "alternate"),
                ("hreflang", alternate.language.tag()),
                ("href", alternate.href.as_str()),
            ])))?;
        }

        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    Ok(finish(writer))
}

/// Render records and write them to `path`.
pub fn write_sitemap(records: &[UrlRecord], path: &Path) -> Result<()> {
    let bytes = render_sitemap(records)?;
    write_file(path, &bytes)?;
    info!("wrote {} urls to {}", records.len(), path.display());
    Ok(())
}
