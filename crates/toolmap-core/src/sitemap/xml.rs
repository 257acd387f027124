//! Sitemap XML reading and writing.
//!
//! Writes standard `<urlset>` documents and `<sitemapindex>` documents, and
//! parses `<urlset>` documents back into [`SitemapEntry`] values.
//!
//! ```
//! use toolmap_core::sitemap::{parse_sitemap, write_urlset, SitemapEntry};
//!
//! let xml = write_urlset(&[SitemapEntry::bare("https://calc.example.com/tools")])?;
//! let entries = parse_sitemap(&xml)?;
//! assert_eq!(entries[0].url, "https://calc.example.com/tools");
//! # Ok::<(), toolmap_core::Error>(())
//! ```

use super::{ChangeFrequency, SitemapEntry};
use crate::config::PROTOCOL_MAX_URLS;
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use tracing::instrument;

/// Sitemap protocol namespace.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Result of parsing a sitemap: either entries or a sitemap index.
#[derive(Debug)]
pub(crate) enum SitemapContent {
    /// Standard sitemap with URL entries.
    Entries(Vec<SitemapEntry>),
    /// Sitemap index with locations of child sitemaps.
    Index(Vec<String>),
}

/// One file of a rendered sitemap set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapFile {
    /// File name relative to the output directory.
    pub name: String,
    /// XML document.
    pub xml: String,
}

type XmlWriter = Writer<Vec<u8>>;

fn new_writer() -> Result<XmlWriter> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    Ok(writer)
}

fn start_root(writer: &mut XmlWriter, name: &str) -> Result<()> {
    let mut root = BytesStart::new(name);
    root.push_attribute(("xmlns", SITEMAP_NS));
    writer.write_event(Event::Start(root))?;
    Ok(())
}

fn text_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn finish(mut writer: XmlWriter, root: &str) -> Result<String> {
    writer.write_event(Event::End(BytesEnd::new(root)))?;
    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).map_err(|e| Error::Serialization(e.to_string()))
}

fn format_lastmod(lastmod: &DateTime<Utc>) -> String {
    lastmod.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Render a `<urlset>` document.
///
/// Optional fields are omitted when absent. Priorities are written with one
/// decimal.
///
/// # Errors
///
/// Returns [`Error::ResourceLimited`] when `entries` exceeds the protocol cap
/// of 50 000 URLs.
#[instrument(skip(entries), fields(count = entries.len()))]
pub fn write_urlset(entries: &[SitemapEntry]) -> Result<String> {
    if entries.len() > PROTOCOL_MAX_URLS {
        return Err(Error::ResourceLimited(format!(
            "{} URLs exceed the {PROTOCOL_MAX_URLS} per-file limit",
            entries.len()
        )));
    }

    let mut writer = new_writer()?;
    start_root(&mut writer, "urlset")?;
    for entry in entries {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        text_element(&mut writer, "loc", &entry.url)?;
        if let Some(lastmod) = &entry.lastmod {
            text_element(&mut writer, "lastmod", &format_lastmod(lastmod))?;
        }
        if let Some(changefreq) = entry.changefreq {
            text_element(&mut writer, "changefreq", changefreq.as_str())?;
        }
        if let Some(priority) = entry.priority {
            text_element(&mut writer, "priority", &format!("{priority:.1}"))?;
        }
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }
    finish(writer, "urlset")
}

/// Render a `<sitemapindex>` document pointing at `locs`.
pub fn write_sitemap_index(locs: &[String], lastmod: DateTime<Utc>) -> Result<String> {
    let lastmod = format_lastmod(&lastmod);
    let mut writer = new_writer()?;
    start_root(&mut writer, "sitemapindex")?;
    for loc in locs {
        writer.write_event(Event::Start(BytesStart::new("sitemap")))?;
        text_element(&mut writer, "loc", loc)?;
        text_element(&mut writer, "lastmod", &lastmod)?;
        writer.write_event(Event::End(BytesEnd::new("sitemap")))?;
    }
    finish(writer, "sitemapindex")
}

/// Split entries into consecutive chunks of at most `max_per_file`.
///
/// An empty input yields one empty chunk so that a sitemap file is still
/// written.
///
/// # Errors
///
/// Returns [`Error::ResourceLimited`] when `max_per_file` is zero or above the
/// protocol cap.
pub fn split_into_files(
    entries: &[SitemapEntry],
    max_per_file: usize,
) -> Result<Vec<&[SitemapEntry]>> {
    if max_per_file == 0 || max_per_file > PROTOCOL_MAX_URLS {
        return Err(Error::ResourceLimited(format!(
            "max_per_file must be between 1 and {PROTOCOL_MAX_URLS}, got {max_per_file}"
        )));
    }
    if entries.is_empty() {
        return Ok(vec![entries]);
    }
    Ok(entries.chunks(max_per_file).collect())
}

/// Render the file set for `entries`.
///
/// A single chunk is written as `file_name`. Otherwise chunks become
/// `<stem>-1.xml`, `<stem>-2.xml`, ... and `file_name` is a sitemap index
/// whose locations are `<base_url>/<child>`.
pub fn render_files(
    entries: &[SitemapEntry],
    base_url: &str,
    file_name: &str,
    max_per_file: usize,
    lastmod: DateTime<Utc>,
) -> Result<Vec<SitemapFile>> {
    let chunks = split_into_files(entries, max_per_file)?;
    if let [only] = chunks.as_slice() {
        return Ok(vec![SitemapFile {
            name: file_name.to_string(),
            xml: write_urlset(only)?,
        }]);
    }

    let stem = file_name.strip_suffix(".xml").unwrap_or(file_name);
    let base_url = base_url.trim_end_matches('/');
    let mut files = Vec::with_capacity(chunks.len() + 1);
    let mut locs = Vec::with_capacity(chunks.len());
    for (idx, chunk) in chunks.iter().enumerate() {
        let name = format!("{stem}-{}.xml", idx + 1);
        locs.push(format!("{base_url}/{name}"));
        files.push(SitemapFile {
            name,
            xml: write_urlset(chunk)?,
        });
    }
    files.push(SitemapFile {
        name: file_name.to_string(),
        xml: write_sitemap_index(&locs, lastmod)?,
    });
    tracing::debug!(files = files.len(), "split sitemap into index");
    Ok(files)
}

/// Parse a `<urlset>` document into entries.
///
/// # Errors
///
/// Returns [`Error::Parse`] for malformed XML or for a sitemap index (use
/// [`super::fetch_sitemap`] or [`parse_sitemap_index`] for those).
#[instrument(skip(xml), fields(xml_len = xml.len()))]
pub fn parse_sitemap(xml: &str) -> Result<Vec<SitemapEntry>> {
    match parse_sitemap_content(xml)? {
        SitemapContent::Entries(entries) => Ok(entries),
        SitemapContent::Index(_) => Err(Error::Parse(
            "XML is a sitemap index, not a standard sitemap".to_string(),
        )),
    }
}

/// Child sitemap locations listed by a `<sitemapindex>` document.
pub fn parse_sitemap_index(xml: &str) -> Result<Vec<String>> {
    match parse_sitemap_content(xml)? {
        SitemapContent::Index(locs) => Ok(locs),
        SitemapContent::Entries(_) => Err(Error::Parse(
            "XML is a standard sitemap, not a sitemap index".to_string(),
        )),
    }
}

/// Whether the XML is a sitemap index.
#[must_use]
pub fn is_sitemap_index(xml: &str) -> bool {
    xml.contains("<sitemapindex") || xml.contains("sitemapindex>")
}

pub(crate) fn parse_sitemap_content(xml: &str) -> Result<SitemapContent> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    if is_sitemap_index(xml) {
        parse_index(&mut reader)
    } else {
        parse_urlset(&mut reader)
    }
}

fn parse_urlset(reader: &mut Reader<&[u8]>) -> Result<SitemapContent> {
    let mut entries = Vec::new();
    let mut current: Option<SitemapEntry> = None;
    let mut current_element: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                match name.as_str() {
                    "url" => current = Some(SitemapEntry::bare(String::new())),
                    "loc" | "lastmod" | "changefreq" | "priority" if current.is_some() => {
                        current_element = Some(name);
                    },
                    _ => {},
                }
            },
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"url" {
                    if let Some(entry) = current.take().filter(|entry| !entry.url.is_empty()) {
                        entries.push(entry);
                    }
                }
                current_element = None;
            },
            Ok(Event::Text(e)) => {
                if let (Some(element), Some(entry)) = (&current_element, current.as_mut()) {
                    let text = e.unescape().map_err(|e| Error::Parse(e.to_string()))?;
                    let text = text.trim();
                    match element.as_str() {
                        "loc" => entry.url = text.to_string(),
                        "lastmod" => entry.lastmod = parse_lastmod(text),
                        "changefreq" => entry.changefreq = text.parse::<ChangeFrequency>().ok(),
                        "priority" => entry.priority = parse_priority(text),
                        _ => {},
                    }
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Parse(format!("XML parse error: {e}"))),
            _ => {},
        }
    }

    Ok(SitemapContent::Entries(entries))
}

fn parse_index(reader: &mut Reader<&[u8]>) -> Result<SitemapContent> {
    let mut locs = Vec::new();
    let mut in_sitemap = false;
    let mut in_loc = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"sitemap" => in_sitemap = true,
                b"loc" if in_sitemap => in_loc = true,
                _ => {},
            },
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"sitemap" {
                    in_sitemap = false;
                }
                in_loc = false;
            },
            Ok(Event::Text(e)) if in_loc => {
                let text = e.unescape().map_err(|e| Error::Parse(e.to_string()))?;
                let text = text.trim();
                if !text.is_empty() {
                    locs.push(text.to_string());
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Parse(format!("XML parse error: {e}"))),
            _ => {},
        }
    }

    Ok(SitemapContent::Index(locs))
}

/// Parse a lastmod value.
///
/// Supports:
/// - `2024-01-15` (date only)
/// - `2024-01-15T10:30:00Z` / `2024-01-15T10:30:00+00:00`
/// - `2024-01-15T10:30:00` (no zone, assumed UTC)
fn parse_lastmod(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }

    tracing::debug!(date_str = %s, "Could not parse lastmod date");
    None
}

/// Parse a priority value, clamping to 0.0-1.0.
fn parse_priority(s: &str) -> Option<f32> {
    s.parse::<f32>().ok().map(|p| p.clamp(0.0, 1.0))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    fn entries(n: usize) -> Vec<SitemapEntry> {
        (0..n)
            .map(|i| {
                SitemapEntry::new(
                    format!("https://calc.example.com/tools/ip-lookup/{i}"),
                    at(),
                    ChangeFrequency::Weekly,
                    0.7,
                )
            })
            .collect()
    }

    #[test]
    fn test_write_urlset_shape() {
        let xml = write_urlset(&entries(1)).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
        assert!(xml.contains("<loc>https://calc.example.com/tools/ip-lookup/0</loc>"));
        assert!(xml.contains("<lastmod>2024-01-15T10:30:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.7</priority>"));
    }

    #[test]
    fn test_write_then_parse_keeps_entries() {
        let original = entries(5);
        let parsed = parse_sitemap(&write_urlset(&original).unwrap()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_write_escapes_reserved_characters() {
        let entry = SitemapEntry::bare("https://calc.example.com/?a=1&b=<2>");
        let xml = write_urlset(std::slice::from_ref(&entry)).unwrap();
        assert!(xml.contains("a=1&amp;b=&lt;2&gt;"));
        assert_eq!(parse_sitemap(&xml).unwrap(), vec![entry]);
    }

    #[test]
    fn test_omits_missing_fields() {
        let xml = write_urlset(&[SitemapEntry::bare("https://a.example/")]).unwrap();
        assert!(!xml.contains("<lastmod>"));
        assert!(!xml.contains("<priority>"));
    }

    #[test]
    fn test_write_urlset_rejects_oversized_file() {
        let too_many = vec![SitemapEntry::bare("https://a.example/"); PROTOCOL_MAX_URLS + 1];
        assert!(matches!(write_urlset(&too_many), Err(Error::ResourceLimited(_))));
    }

    #[test]
    fn test_split_into_files() {
        let all = entries(10);
        let chunks = split_into_files(&all, 4).unwrap();
        assert_eq!(chunks.iter().map(|c| c.len()).collect::<Vec<_>>(), vec![4, 4, 2]);
        assert_eq!(chunks[1][0].url, all[4].url);

        assert_eq!(split_into_files(&[], 4).unwrap().len(), 1);
        assert!(split_into_files(&all, 0).is_err());
        assert!(split_into_files(&all, PROTOCOL_MAX_URLS + 1).is_err());
    }

    #[test]
    fn test_render_single_file() {
        let files = render_files(&entries(3), "https://a.example", "sitemap.xml", 10, at()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "sitemap.xml");
        assert!(!is_sitemap_index(&files[0].xml));
    }

    #[test]
    fn test_render_index_when_split() {
        let files = render_files(&entries(5), "https://a.example/", "sitemap.xml", 2, at()).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["sitemap-1.xml", "sitemap-2.xml", "sitemap-3.xml", "sitemap.xml"]
        );

        let index = &files[3].xml;
        assert!(is_sitemap_index(index));
        assert_eq!(
            parse_sitemap_index(index).unwrap(),
            vec![
                "https://a.example/sitemap-1.xml",
                "https://a.example/sitemap-2.xml",
                "https://a.example/sitemap-3.xml",
            ]
        );
        assert_eq!(parse_sitemap(&files[2].xml).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_rejects_index() {
        let xml = write_sitemap_index(&["https://a.example/s-1.xml".to_string()], at()).unwrap();
        let err = parse_sitemap(&xml).unwrap_err();
        assert!(err.to_string().contains("sitemap index"));
    }

    #[test]
    fn test_parse_tolerates_foreign_sitemaps() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
        <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
          <url>
            <loc>  https://example.com/page1  </loc>
            <lastmod>2024-01-15</lastmod>
            <changefreq>sometimes</changefreq>
            <priority>1.5</priority>
          </url>
          <url>
            <lastmod>2024-01-15T10:30:00.123Z</lastmod>
          </url>
        </urlset>"#;

        let parsed = parse_sitemap(xml).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].url, "https://example.com/page1");
        assert_eq!(
            parsed[0].lastmod.unwrap().format("%Y-%m-%d").to_string(),
            "2024-01-15"
        );
        assert!(parsed[0].changefreq.is_none());
        assert_eq!(parsed[0].priority, Some(1.0));
    }

    #[test]
    fn test_parse_malformed_xml() {
        let result = parse_sitemap("<urlset><url><loc>x</url></urlset>");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_lastmod_formats() {
        for value in [
            "2024-01-15",
            "2024-01-15T10:30:00Z",
            "2024-01-15T10:30:00+02:00",
            "2024-01-15T10:30:00",
            "2024-01-15T10:30:00.500",
        ] {
            assert!(parse_lastmod(value).is_some(), "{value} should parse");
        }
        assert!(parse_lastmod("last tuesday").is_none());
    }
}
