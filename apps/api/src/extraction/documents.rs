//! Document text extraction — turns an uploaded PDF or DOCX into plain text.
//!
//! Both decoders are CPU-bound and run inside `tokio::task::spawn_blocking`.
//! `pdf-extract` can panic on malformed input; the panic surfaces as a
//! `JoinError` and is reported as an unreadable document.

use std::io::{Cursor, Read};

use bytes::Bytes;
use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use tracing::{debug, warn};

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Document could not be read: {0}")]
    Unreadable(String),

    #[error("Document contains no readable text")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detects the format from the declared MIME type, falling back to the
    /// file extension when the MIME type is missing or generic.
    pub fn detect(
        content_type: Option<&str>,
        file_name: Option<&str>,
    ) -> Result<Self, ExtractionError> {
        let mime = content_type
            .map(|ct| ct.split(';').next().unwrap_or(ct).trim().to_ascii_lowercase());

        match mime.as_deref() {
            Some(PDF_MIME) => return Ok(DocumentFormat::Pdf),
            Some(DOCX_MIME) => return Ok(DocumentFormat::Docx),
            None | Some("") | Some("application/octet-stream") => {}
            Some(other) => return Err(ExtractionError::UnsupportedFormat(other.to_string())),
        }

        let extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => Ok(DocumentFormat::Pdf),
            Some("docx") => Ok(DocumentFormat::Docx),
            _ => Err(ExtractionError::UnsupportedFormat(
                file_name.unwrap_or("unknown").to_string(),
            )),
        }
    }
}

/// Extracts plain text from `bytes`. Fails with `Empty` when the document
/// decodes but holds no non-whitespace text.
pub async fn extract_document_text(
    format: DocumentFormat,
    bytes: Bytes,
) -> Result<String, ExtractionError> {
    let text = tokio::task::spawn_blocking(move || match format {
        DocumentFormat::Pdf => pdf_text(&bytes),
        DocumentFormat::Docx => docx_text(&bytes),
    })
    .await
    .map_err(|e| {
        warn!("Document decoder task failed: {e}");
        ExtractionError::Unreadable(format!("{format:?} decoder aborted"))
    })??;

    if text.trim().is_empty() {
        return Err(ExtractionError::Empty);
    }
    debug!("Extracted {} chars of {:?} text", text.len(), format);
    Ok(text)
}

fn pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::Unreadable(format!("PDF: {e:?}")))
}

fn docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::Unreadable(format!("DOCX container: {e}")))?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY_PART)
        .map_err(|e| ExtractionError::Unreadable(format!("DOCX body: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Unreadable(format!("DOCX body: {e}")))?;
    docx_xml_text(&xml)
}

/// Walks WordprocessingML: text runs (`w:t`) are collected, each paragraph
/// (`w:p`) ends a line, `w:tab` and `w:br` become tab and newline.
fn docx_xml_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => out.push('\t'),
                b"w:br" | b"w:cr" => out.push('\n'),
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractionError::Unreadable(format!("DOCX text: {e}")))?;
                out.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractionError::Unreadable(format!(
                    "DOCX XML at {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
    <w:p><w:r><w:t xml:space="preserve">R&amp;D </w:t></w:r><w:r><w:t>Engineer</w:t></w:r></w:p>
    <w:p><w:r><w:t>Skills</w:t><w:tab/><w:t>Rust</w:t><w:br/><w:t>Go</w:t></w:r></w:p>
    <w:p/>
  </w:body>
</w:document>"#;

    fn build_docx(body: &str) -> Bytes {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCX_BODY_PART, zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(body.as_bytes()).unwrap();
        Bytes::from(writer.finish().unwrap().into_inner())
    }

    /// Single-page PDF showing `text` in Helvetica, with a correct xref table.
    fn build_pdf(text: &str) -> Bytes {
        let content = format!("BT /F1 18 Tf 72 720 Td ({text}) Tj ET");
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
             /Resources << /Font << /F1 5 0 R >> >> >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::new();
        for (i, object) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{object}\nendobj\n", i + 1));
        }
        let xref_at = pdf.len();
        pdf.push_str(&format!(
            "xref\n0 {}\n0000000000 65535 f \n",
            objects.len() + 1
        ));
        for offset in offsets {
            pdf.push_str(&format!("{offset:010} 00000 n \n"));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
            objects.len() + 1
        ));
        Bytes::from(pdf)
    }

    #[test]
    fn test_detect_by_mime() {
        assert_eq!(
            DocumentFormat::detect(Some("application/pdf"), None).unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::detect(Some(DOCX_MIME), Some("cv.bin")).unwrap(),
            DocumentFormat::Docx
        );
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        assert_eq!(
            DocumentFormat::detect(Some("application/octet-stream"), Some("Resume.PDF")).unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::detect(None, Some("cv.docx")).unwrap(),
            DocumentFormat::Docx
        );
    }

    #[test]
    fn test_detect_rejects_other_formats() {
        assert!(matches!(
            DocumentFormat::detect(Some("text/plain"), Some("cv.pdf")),
            Err(ExtractionError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            DocumentFormat::detect(None, Some("cv.doc")),
            Err(ExtractionError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            DocumentFormat::detect(None, None),
            Err(ExtractionError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_docx_xml_paragraphs_become_lines() {
        let text = docx_xml_text(BODY).unwrap();
        assert_eq!(text, "Jane Doe\nR&D Engineer\nSkills\tRust\nGo\n\n");
    }

    #[tokio::test]
    async fn test_extract_docx_document() {
        let text = extract_document_text(DocumentFormat::Docx, build_docx(BODY))
            .await
            .unwrap();
        assert!(text.starts_with("Jane Doe\n"));
    }

    #[tokio::test]
    async fn test_extract_pdf_document() {
        let text = extract_document_text(DocumentFormat::Pdf, build_pdf("Jane Doe Resume"))
            .await
            .unwrap();
        assert!(text.contains("Jane"), "{text:?}");
        assert!(text.contains("Resume"), "{text:?}");
    }

    #[tokio::test]
    async fn test_docx_without_text_is_empty() {
        let body = r#"<w:document xmlns:w="x"><w:body><w:p/></w:body></w:document>"#;
        let result = extract_document_text(DocumentFormat::Docx, build_docx(body)).await;
        assert!(matches!(result, Err(ExtractionError::Empty)));
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_unreadable() {
        let junk = Bytes::from_static(b"definitely not a document");
        for format in [DocumentFormat::Pdf, DocumentFormat::Docx] {
            let result = extract_document_text(format, junk.clone()).await;
            assert!(
                matches!(result, Err(ExtractionError::Unreadable(_))),
                "{format:?}: {result:?}"
            );
        }
    }
}
