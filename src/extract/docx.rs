use std::io::{Cursor, Read};

use anyhow::Context;
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// Paragraph text, one paragraph per line, or an empty string if the file is
/// not a readable DOCX archive.
pub fn docx_text(bytes: &[u8]) -> String {
    match read_paragraphs(bytes) {
        Ok(paragraphs) => paragraphs.join("\n"),
        Err(e) => {
            tracing::warn!("An error occurred while reading the DOCX file: {:#}", e);
            String::new()
        }
    }
}

fn read_paragraphs(bytes: &[u8]) -> anyhow::Result<Vec<String>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).context("not a zip archive")?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .with_context(|| format!("missing {}", DOCUMENT_PART))?
        .read_to_string(&mut xml)
        .with_context(|| format!("failed to read {}", DOCUMENT_PART))?;

    parse_document_xml(&xml)
}

/// One entry per `w:p`, in closing order. Paragraphs nested inside text
/// boxes are emitted before the paragraph that contains them, and
/// `mc:Fallback` content (the legacy copy of a text box) is skipped.
fn parse_document_xml(xml: &str) -> anyhow::Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut in_text = false;
    let mut fallback_depth = 0usize;

    loop {
        match reader.read_event().context("malformed document.xml")? {
            Event::Start(e) => match e.name().as_ref() {
                b"mc:Fallback" => fallback_depth += 1,
                _ if fallback_depth > 0 => {}
                b"w:p" => open.push(String::new()),
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) if fallback_depth == 0 => match e.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" => push_to_open(&mut open, "\t"),
                b"w:br" | b"w:cr" => push_to_open(&mut open, "\n"),
                _ => {}
            },
            Event::Text(t) if in_text && fallback_depth == 0 => {
                let text = t.unescape().context("bad text escape")?;
                push_to_open(&mut open, &text);
            }
            Event::End(e) => match e.name().as_ref() {
                b"mc:Fallback" => fallback_depth = fallback_depth.saturating_sub(1),
                _ if fallback_depth > 0 => {}
                b"w:t" => in_text = false,
                b"w:p" => {
                    if let Some(paragraph) = open.pop() {
                        paragraphs.push(paragraph);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_to_open(open: &mut [String], text: &str) {
    if let Some(current) = open.last_mut() {
        current.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
    <w:p/>
    <w:p><w:r><w:t xml:space="preserve">Software </w:t></w:r><w:r><w:t>Engineer &amp; Analyst</w:t></w:r></w:p>
    <w:p><w:r><w:t>Python</w:t><w:tab/><w:t>SQL</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    fn build_docx(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_PART, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_docx_paragraphs() {
        let text = docx_text(&build_docx(BODY));
        assert_eq!(text, "Jane Doe\n\nSoftware Engineer & Analyst\nPython\tSQL");
    }

    #[test]
    fn test_text_box_keeps_outer_paragraph() {
        let xml = r#"<w:document><w:body>
<w:p><w:r><w:t>Software Engineer, Acme</w:t></w:r><w:r><w:pict><w:txbxContent><w:p><w:r><w:t>Boxed</w:t></w:r></w:p></w:txbxContent></w:pict></w:r><w:r><w:t xml:space="preserve"> 2020-2023</w:t></w:r></w:p>
<w:p><w:r><w:t>Python</w:t></w:r></w:p>
</w:body></w:document>"#;

        let paragraphs = parse_document_xml(xml).unwrap();
        assert_eq!(
            paragraphs,
            vec!["Boxed", "Software Engineer, Acme 2020-2023", "Python"]
        );
    }

    #[test]
    fn test_fallback_copy_of_text_box_skipped() {
        let xml = r#"<w:document><w:body>
<w:p><w:r><w:t>Jane Doe</w:t></w:r><w:r><mc:AlternateContent><mc:Choice Requires="wps"><w:drawing><wps:txbx><w:txbxContent><w:p><w:r><w:t>MSc, Delft University</w:t></w:r></w:p></w:txbxContent></wps:txbx></w:drawing></mc:Choice><mc:Fallback><w:pict><v:textbox><w:txbxContent><w:p><w:r><w:t>MSc, Delft University</w:t></w:r></w:p></w:txbxContent></v:textbox></w:pict></mc:Fallback></mc:AlternateContent></w:r></w:p>
</w:body></w:document>"#;

        let paragraphs = parse_document_xml(xml).unwrap();
        assert_eq!(paragraphs, vec!["MSc, Delft University", "Jane Doe"]);
    }

    #[test]
    fn test_not_a_docx() {
        assert_eq!(docx_text(b"plain text, not a zip"), "");
    }

    #[test]
    fn test_archive_without_document_part() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        assert_eq!(docx_text(&bytes), "");
    }
}
