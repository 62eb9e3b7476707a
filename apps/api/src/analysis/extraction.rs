//! Document Extractor — turns an uploaded resume file into plain text.
//!
//! The filename extension picks the format: `.pdf`, `.docx`, or anything else
//! decoded as UTF-8. The result is trimmed.

use std::io::{Cursor, Read};
use std::sync::LazyLock;

use bytes::Bytes;
use regex::{Captures, Regex};
use tracing::debug;

use crate::errors::AppError;

const DOCX_BODY_PART: &str = "word/document.xml";

/// A `<w:p>` paragraph, either self-closing or with content.
static PARAGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:p(?:\s[^>]*?)?(?:/>|>(.*?)</w:p>)").expect("valid paragraph regex")
});

/// Text runs plus the tab and break elements that render as whitespace.
static RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:tab/>|<w:(?:br|cr)(?:\s[^>]*)?/>")
        .expect("valid run regex")
});

/// `&name;`, `&#N;` or `&#xH;`.
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(lt|gt|quot|apos|amp|#[0-9]+|#[xX][0-9a-fA-F]+);").expect("valid entity regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            DocumentKind::Pdf
        } else if lower.ends_with(".docx") {
            DocumentKind::Docx
        } else {
            DocumentKind::PlainText
        }
    }
}

/// Extracts text on the blocking pool. A panic inside a decoder is reported
/// as an extraction failure for this upload only.
pub async fn extract_upload(filename: String, bytes: Bytes) -> Result<String, AppError> {
    let kind = DocumentKind::from_filename(&filename);
    debug!("Extracting {kind:?} upload '{filename}' ({} bytes)", bytes.len());

    tokio::task::spawn_blocking(move || extract_text(kind, &bytes))
        .await
        .map_err(|e| {
            if e.is_panic() {
                AppError::Extraction(format!("decoder crashed on '{filename}'"))
            } else {
                AppError::Internal(anyhow::Error::new(e).context("extraction task was cancelled"))
            }
        })?
}

pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, AppError> {
    let text = match kind {
        DocumentKind::Pdf => extract_pdf(bytes)?,
        DocumentKind::Docx => extract_docx(bytes)?,
        DocumentKind::PlainText => String::from_utf8(bytes.to_vec())
            .map_err(|e| AppError::Extraction(format!("file is not valid UTF-8 text: {e}")))?,
    };
    Ok(text.trim().to_string())
}

fn extract_pdf(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extraction(format!("failed to extract text from PDF: {e}")))
}

fn extract_docx(bytes: &[u8]) -> Result<String, AppError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AppError::Extraction(format!("not a valid DOCX archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY_PART)
        .map_err(|e| AppError::Extraction(format!("DOCX is missing {DOCX_BODY_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| AppError::Extraction(format!("failed to read {DOCX_BODY_PART}: {e}")))?;

    Ok(document_xml_to_text(&xml))
}

/// One line per paragraph, in document order.
fn document_xml_to_text(xml: &str) -> String {
    PARAGRAPH_RE
        .captures_iter(xml)
        .map(|paragraph| {
            paragraph
                .get(1)
                .map(|body| paragraph_text(body.as_str()))
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn paragraph_text(body: &str) -> String {
    let mut text = String::new();
    for run in RUN_RE.captures_iter(body) {
        match run.get(1) {
            Some(t) => text.push_str(&decode_entities(t.as_str())),
            None if run[0].starts_with("<w:tab") => text.push('\t'),
            None => text.push('\n'),
        }
    }
    text
}

/// Decodes the predefined XML entities and numeric character references in
/// one pass. References to invalid code points are kept verbatim.
fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "amp" => Some('&'),
                _ => entity
                    .strip_prefix("#x")
                    .or_else(|| entity.strip_prefix("#X"))
                    .map(|hex| u32::from_str_radix(hex, 16))
                    .unwrap_or_else(|| entity[1..].parse::<u32>())
                    .ok()
                    .and_then(char::from_u32),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn build_docx(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("[Content_Types].xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<Types/>").unwrap();
        writer
            .start_file(DOCX_BODY_PART, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
<w:p w:rsidR="00A1"><w:pPr><w:pStyle w:val="Title"/></w:pPr><w:r><w:t>Jane Doe</w:t></w:r></w:p>
<w:p><w:r><w:t xml:space="preserve">Rust </w:t></w:r><w:proofErr w:type="spellStart"/><w:r><w:t>&amp; Kafka</w:t></w:r></w:p>
<w:p w:rsidR="00B2"/>
<w:p><w:r><w:t>Skills:</w:t><w:tab/><w:t>Go</w:t></w:r></w:p>
</w:body></w:document>"#;

    #[test]
    fn test_kind_from_filename() {
        assert_eq!(DocumentKind::from_filename("cv.pdf"), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_filename("CV.PDF"), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_filename("cv.docx"), DocumentKind::Docx);
        assert_eq!(DocumentKind::from_filename("cv.txt"), DocumentKind::PlainText);
        assert_eq!(DocumentKind::from_filename("cv"), DocumentKind::PlainText);
        assert_eq!(DocumentKind::from_filename("cv.doc"), DocumentKind::PlainText);
    }

    #[test]
    fn test_plain_text_is_trimmed() {
        let text = extract_text(DocumentKind::PlainText, b"\n  Rust engineer  \n").unwrap();
        assert_eq!(text, "Rust engineer");
    }

    #[test]
    fn test_invalid_utf8_is_extraction_error() {
        let err = extract_text(DocumentKind::PlainText, &[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_empty_plain_text_is_empty_string() {
        assert_eq!(extract_text(DocumentKind::PlainText, b"").unwrap(), "");
    }

    #[test]
    fn test_docx_paragraphs_become_lines() {
        let text = extract_text(DocumentKind::Docx, &build_docx(DOCUMENT_XML)).unwrap();
        assert_eq!(text, "Jane Doe\nRust & Kafka\n\nSkills:\tGo");
    }

    #[test]
    fn test_docx_without_body_part_is_error() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("other.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        assert!(matches!(
            extract_text(DocumentKind::Docx, &bytes),
            Err(AppError::Extraction(_))
        ));
    }

    #[test]
    fn test_docx_garbage_is_error() {
        assert!(matches!(
            extract_text(DocumentKind::Docx, b"definitely not a zip"),
            Err(AppError::Extraction(_))
        ));
    }

    #[tokio::test]
    async fn test_corrupt_pdf_upload_is_error() {
        let result = extract_upload("cv.pdf".to_string(), Bytes::from_static(b"not a pdf")).await;
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[tokio::test]
    async fn test_text_upload_roundtrip() {
        let text = extract_upload("cv.txt".to_string(), Bytes::from_static(b"Rust, Go"))
            .await
            .unwrap();
        assert_eq!(text, "Rust, Go");
    }

    #[test]
    fn test_decode_numeric_references() {
        assert_eq!(decode_entities("Jane&#8217;s CV &#x2013; 2024"), "Jane\u{2019}s CV \u{2013} 2024");
        assert_eq!(decode_entities("&#X41;&#66;"), "AB");
    }

    #[test]
    fn test_decode_invalid_code_point_kept() {
        assert_eq!(decode_entities("&#xD800; &#99999999999;"), "&#xD800; &#99999999999;");
    }

    #[test]
    fn test_docx_numeric_references_decoded() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>Led&#160;team &#x2014; 5 devs</w:t></w:r></w:p></w:body></w:document>"#;
        let text = extract_text(DocumentKind::Docx, &build_docx(xml)).unwrap();
        assert_eq!(text, "Led\u{a0}team \u{2014} 5 devs");
    }

    #[test]
    fn test_decode_entities_amp_last() {
        assert_eq!(decode_entities("&amp;lt; &lt;b&gt;"), "&lt; <b>");
    }
}
