//! DOCX text: the `word/document.xml` part of the zip container, one line per paragraph.

use std::io::{self, Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::DocumentError;

const DOCUMENT_PART: &str = "word/document.xml";
/// Upper bound on the decompressed document part. Real résumés stay in the
/// hundreds of KiB.
pub const MAX_DOCUMENT_PART_BYTES: u64 = 32 * 1024 * 1024;

pub fn extract_text(bytes: &[u8]) -> Result<String, DocumentError> {
    extract_text_with_limit(bytes, MAX_DOCUMENT_PART_BYTES)
}

fn extract_text_with_limit(bytes: &[u8], limit: u64) -> Result<String, DocumentError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let part = archive.by_name(DOCUMENT_PART)?;
    if part.size() > limit {
        return Err(DocumentError::TooLarge { limit });
    }
    let xml = read_limited(part, limit)?;
    paragraphs_to_text(&xml)
}

/// Reads at most `limit` bytes; the declared entry size is not trusted.
fn read_limited(reader: impl Read, limit: u64) -> Result<String, DocumentError> {
    let mut buf = Vec::new();
    reader.take(limit + 1).read_to_end(&mut buf)?;
    if buf.len() as u64 > limit {
        return Err(DocumentError::TooLarge { limit });
    }
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Walks WordprocessingML and keeps run text, tabs and breaks.
/// Every closed `w:p` ends with a newline, matching how paragraph text is joined.
fn paragraphs_to_text(xml: &str) -> Result<String, DocumentError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if e.name().as_ref() == b"w:t" {
                    in_run_text = true;
                }
            }
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_run_text => {
                text.push_str(&e.unescape()?);
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}
