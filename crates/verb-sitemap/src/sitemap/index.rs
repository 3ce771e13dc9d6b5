//! Sitemap index over every sitemap file of a run.

use crate::error::Result;
use crate::sitemap::writer::{finish, write_file, write_text_element, xml_writer, SITEMAP_NS};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use std::path::Path;
use tracing::info;

pub const INDEX_FILE_NAME: &str = "sitemap_index.xml";

/// Render a `sitemapindex` with one entry per file, located under `host`.
pub fn render_index(host: &str, lastmod: &str, file_names: &[String]) -> Result<Vec<u8>> {
    let mut writer = xml_writer()?;
    writer.write_event(Event::Start(
        BytesStart::new("sitemapindex").with_attributes([("xmlns", SITEMAP_NS)]),
    ))?;

    for name in file_names {
        writer.write_event(Event::Start(BytesStart::new("sitemap")))?;
        write_text_element(&mut writer, "loc", &format!("{host}/{name}"))?;
        write_text_element(&mut writer, "lastmod", lastmod)?;
        writer.write_event(Event::End(BytesEnd::new("sitemap")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("sitemapindex")))?;
    Ok(finish(writer))
}

pub fn write_index(host: &str, lastmod: &str, file_names: &[String], path: &Path) -> Result<()> {
    let bytes = render_index(host, lastmod, file_names)?;
    write_file(path, &bytes)?;
    info!("wrote index of {} sitemaps to {}", file_names.len(), path.display());
    Ok(())
}
