//! Text extraction from PDF and DOCX documents

use crate::error::{AtsScorerError, Result};
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, Run, RunChild};
use log::debug;
use std::fs;
use std::panic;
use std::path::Path;

pub trait TextExtractor {
    fn extract_from_bytes(&self, bytes: &[u8]) -> Result<String>;

    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;
        self.extract_from_bytes(&bytes).map_err(|e| match e {
            AtsScorerError::Extraction(reason) => AtsScorerError::Extraction(format!(
                "Failed to extract text from '{}': {}",
                path.display(),
                reason
            )),
            other => other,
        })
    }
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract_from_bytes(&self, bytes: &[u8]) -> Result<String> {
        // pdf-extract panics instead of erroring on some malformed files. The
        // default hook would print a backtrace for a failure we report anyway.
        let previous_hook = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        let outcome = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes));
        panic::set_hook(previous_hook);

        let pages = outcome
            .map_err(|_| {
                AtsScorerError::Extraction("PDF parser aborted on malformed content".to_string())
            })?
            .map_err(|e| AtsScorerError::Extraction(e.to_string()))?;

        debug!("Extracted {} PDF pages", pages.len());

        let mut text = String::new();
        for page in &pages {
            text.push_str(page);
            text.push('\n');
        }
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract_from_bytes(&self, bytes: &[u8]) -> Result<String> {
        let docx = docx_rs::read_docx(bytes)
            .map_err(|e| AtsScorerError::Extraction(format!("Not a readable DOCX file: {}", e)))?;

        // Only top-level body paragraphs; tables and other blocks are skipped
        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
                _ => None,
            })
            .collect();

        debug!("Extracted {} DOCX paragraphs", paragraphs.len());
        Ok(paragraphs.join("\n"))
    }
}

/// Concatenated run text of a paragraph, hyperlinked runs included.
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&paragraph.children, &mut text);
    text
}

fn push_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, text),
            ParagraphChild::Hyperlink(link) => push_children(&link.children, text),
            _ => {}
        }
    }
}

fn push_run(run: &Run, text: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    // The panic hook is process-wide; tests that swap it must not overlap
    static HOOK_LOCK: Mutex<()> = Mutex::new(());

    const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

    const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

    const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId4" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://github.com/jane" TargetMode="External"/></Relationships>"#;

    fn docx(body: &str) -> Vec<u8> {
        let document = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:body>{}<w:sectPr/></w:body></w:document>"#,
            body
        );

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in [
            ("[Content_Types].xml", CONTENT_TYPES),
            ("_rels/.rels", PACKAGE_RELS),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS),
            ("word/document.xml", document.as_str()),
        ] {
            zip.start_file(name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    fn extract(body: &str) -> String {
        DocxExtractor.extract_from_bytes(&docx(body)).unwrap()
    }

    #[test]
    fn test_paragraphs_and_runs() {
        let text = extract(
            r#"<w:p><w:r><w:t xml:space="preserve">Jane </w:t></w:r><w:r><w:t>Doe</w:t></w:r></w:p>
<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>Skills</w:t><w:tab/><w:t>AWS</w:t></w:r></w:p>"#,
        );
        assert_eq!(text, "Jane Doe\nSkills\tAWS");
    }

    #[test]
    fn test_empty_paragraphs_are_kept() {
        let text = extract(
            r#"<w:p><w:r><w:t>One</w:t></w:r></w:p><w:p/><w:p></w:p><w:p><w:r><w:t>Two</w:t></w:r></w:p>"#,
        );
        assert_eq!(text, "One\n\n\nTwo");
    }

    #[test]
    fn test_tables_are_skipped() {
        let text = extract(
            r#"<w:p><w:r><w:t>Before</w:t></w:r></w:p>
<w:tbl><w:tr><w:tc><w:p><w:r><w:t>Linux</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
<w:p><w:r><w:t>After</w:t></w:r></w:p>"#,
        );
        assert_eq!(text, "Before\nAfter");
    }

    #[test]
    fn test_hyperlinks_and_breaks() {
        let text = extract(
            r#"<w:p><w:hyperlink r:id="rId4"><w:r><w:t>github.com/jane</w:t></w:r></w:hyperlink><w:r><w:br/><w:t>linkedin.com/in/jane</w:t></w:r></w:p>"#,
        );
        assert_eq!(text, "github.com/jane\nlinkedin.com/in/jane");
    }

    #[test]
    fn test_escaped_text() {
        let text = extract(r#"<w:p><w:r><w:t>R&amp;D &lt;Security&gt;</w:t></w:r></w:p>"#);
        assert_eq!(text, "R&D <Security>");
    }

    #[test]
    fn test_not_a_zip() {
        let result = DocxExtractor.extract_from_bytes(b"plain text, not a docx");
        assert!(matches!(result, Err(AtsScorerError::Extraction(_))));
    }

    #[test]
    fn test_garbage_pdf() {
        let _guard = HOOK_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let result = PdfExtractor.extract_from_bytes(b"%PDF-1.4 this is not really a pdf");
        assert!(matches!(result, Err(AtsScorerError::Extraction(_))));
    }

    #[test]
    fn test_pdf_extraction_restores_panic_hook() {
        let _guard = HOOK_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let called = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&called);
        panic::set_hook(Box::new(move |_| flag.store(true, Ordering::SeqCst)));

        let result = PdfExtractor.extract_from_bytes(b"%PDF-1.7 truncated");
        assert!(matches!(result, Err(AtsScorerError::Extraction(_))));
        assert!(!called.load(Ordering::SeqCst));

        let _ = panic::catch_unwind(|| panic!("after extraction"));
        let _ = panic::take_hook();
        assert!(called.load(Ordering::SeqCst));
    }
}
