//! Format-specific text readers for binary document formats
//!
//! PDF goes through `pdf-extract`, spreadsheets through `calamine`, and the
//! OOXML formats (DOCX, PPTX) are read straight out of the zip container
//! with `quick-xml`.

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt::Display;
use std::fs::File;
use std::io::Read;
use std::panic::{self, UnwindSafe};
use std::path::Path;
use std::sync::Once;

use calamine::{open_workbook_auto, Data, Reader as _};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use crate::extract::ExtractError;

fn xml_error(e: impl Display) -> ExtractError {
    ExtractError::Xml(e.to_string())
}

// ---------------------------------------------------------------------------
// PDF
// ---------------------------------------------------------------------------

/// Text of every page in document order, concatenated with no separator.
pub fn pdf_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;

    // pdf-extract panics on some malformed inputs instead of returning an error
    let pages = catch_quietly(|| pdf_extract::extract_text_from_mem_by_pages(&bytes))
        .map_err(|payload| ExtractError::Pdf(panic_message(payload.as_ref())))?
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    // pdf-extract opens every page with a blank line
    Ok(pages
        .iter()
        .map(|page| page.strip_prefix("\n\n").unwrap_or(page))
        .collect())
}

thread_local! {
    static QUIET_PANICS: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// `catch_unwind` that keeps the panic hook from writing to stderr.
///
/// Panics on other threads, or outside the closure, still reach the
/// previously installed hook.
fn catch_quietly<R>(f: impl FnOnce() -> R + UnwindSafe) -> std::thread::Result<R> {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !QUIET_PANICS.with(Cell::get) {
                previous(info);
            }
        }));
    });

    QUIET_PANICS.with(|quiet| quiet.set(true));
    let result = panic::catch_unwind(f);
    QUIET_PANICS.with(|quiet| quiet.set(false));

    if let Err(payload) = &result {
        tracing::debug!("PDF parser panicked: {}", panic_message(payload.as_ref()));
    }
    result
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "PDF parser failed".to_string()
    }
}

// ---------------------------------------------------------------------------
// Spreadsheets
// ---------------------------------------------------------------------------

/// One line per row (non-empty cells joined by a space), sheets in workbook order.
pub fn spreadsheet_text(path: &Path) -> Result<String, ExtractError> {
    let mut workbook = open_workbook_auto(path)?;
    let mut lines = Vec::new();

    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name)?;

        // Rows are reported from row 1, so blank rows above the used range still count
        if let Some((start_row, _)) = range.start() {
            lines.extend(std::iter::repeat_n(String::new(), start_row as usize));
        }

        for row in range.rows() {
            let cells: Vec<String> = row.iter().filter_map(cell_text).collect();
            lines.push(cells.join(" "));
        }
    }

    Ok(lines.join("\n"))
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(true) => Some("True".to_string()),
        Data::Bool(false) => Some("False".to_string()),
        Data::DateTime(dt) => Some(
            dt.as_datetime()
                .map(|d| d.to_string())
                .unwrap_or_else(|| dt.as_f64().to_string()),
        ),
        Data::Error(e) => Some(e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// OOXML helpers
// ---------------------------------------------------------------------------

fn open_archive(path: &Path) -> Result<ZipArchive<File>, ExtractError> {
    let file = File::open(path)?;
    Ok(ZipArchive::new(file)?)
}

fn read_entry(archive: &mut ZipArchive<File>, name: &str) -> Result<String, ExtractError> {
    let mut entry = archive.by_name(name)?;
    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Look up an attribute by local name, optionally requiring a namespace prefix.
fn attribute(e: &BytesStart, local: &[u8], prefixed: bool) -> Option<String> {
    e.attributes().flatten().find_map(|attr| {
        let matches =
            attr.key.local_name().as_ref() == local && attr.key.prefix().is_some() == prefixed;
        if matches {
            attr.unescape_value().ok().map(|v| v.into_owned())
        } else {
            None
        }
    })
}

fn is_parent(stack: &[Vec<u8>], name: &[u8]) -> bool {
    stack.last().is_some_and(|p| p.as_slice() == name)
}

// ---------------------------------------------------------------------------
// DOCX
// ---------------------------------------------------------------------------

/// Body paragraphs (including empty ones) joined by newlines.
pub fn document_text(path: &Path) -> Result<String, ExtractError> {
    let mut archive = open_archive(path)?;
    let xml = read_entry(&mut archive, "word/document.xml")?;
    Ok(docx_paragraphs(&xml)?.join("\n"))
}

/// Paragraphs that sit directly under `w:body`; table contents are not included.
fn docx_paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut in_text = false;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                if name == b"p" && is_parent(&stack, b"body") {
                    current = Some(String::new());
                } else if name == b"t" && current.is_some() && is_parent(&stack, b"r") {
                    in_text = true;
                }
                stack.push(name);
            }
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" if is_parent(&stack, b"body") => paragraphs.push(String::new()),
                b"tab" if is_parent(&stack, b"r") => {
                    if let Some(p) = current.as_mut() {
                        p.push('\t');
                    }
                }
                b"br" | b"cr" if is_parent(&stack, b"r") => {
                    if let Some(p) = current.as_mut() {
                        p.push('\n');
                    }
                }
                _ => {}
            },
            Event::Text(t) if in_text => {
                if let Some(p) = current.as_mut() {
                    p.push_str(&t.unescape().map_err(xml_error)?);
                }
            }
            Event::End(e) => {
                stack.pop();
                match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"p" if is_parent(&stack, b"body") => {
                        if let Some(p) = current.take() {
                            paragraphs.push(p);
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

// ---------------------------------------------------------------------------
// PPTX
// ---------------------------------------------------------------------------

/// Text of every text-bearing shape, slide order then shape order, one per line.
pub fn presentation_text(path: &Path) -> Result<String, ExtractError> {
    let mut archive = open_archive(path)?;
    let slides = slide_paths(&mut archive)?;

    let mut shapes = Vec::new();
    for slide in &slides {
        let xml = read_entry(&mut archive, slide)?;
        shapes.extend(slide_shape_texts(&xml)?);
    }

    Ok(shapes.join("\n"))
}

/// Slide part names in presentation order.
///
/// Uses the slide list in `ppt/presentation.xml`; falls back to the
/// numbering of `ppt/slides/slideN.xml` when that can't be resolved.
fn slide_paths(archive: &mut ZipArchive<File>) -> Result<Vec<String>, ExtractError> {
    let listed = match (
        read_entry(archive, "ppt/presentation.xml"),
        read_entry(archive, "ppt/_rels/presentation.xml.rels"),
    ) {
        (Ok(presentation), Ok(rels)) => {
            let targets = relationship_targets(&rels)?;
            slide_rel_ids(&presentation)?
                .iter()
                .filter_map(|id| targets.get(id))
                .map(|target| resolve_part("ppt", target))
                .collect()
        }
        _ => Vec::new(),
    };
    if !listed.is_empty() {
        return Ok(listed);
    }

    let mut numbered: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| {
            let n = name
                .strip_prefix("ppt/slides/slide")?
                .strip_suffix(".xml")?
                .parse()
                .ok()?;
            Some((n, name.to_string()))
        })
        .collect();
    numbered.sort();
    Ok(numbered.into_iter().map(|(_, name)| name).collect())
}

/// Map of relationship ID -> target from a `.rels` part.
fn relationship_targets(xml: &str) -> Result<HashMap<String, String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut targets = HashMap::new();

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                if let (Some(id), Some(target)) =
                    (attribute(&e, b"Id", false), attribute(&e, b"Target", false))
                {
                    targets.insert(id, target);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(targets)
}

/// Relationship IDs of `p:sldId` entries, in list order.
fn slide_rel_ids(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut ids = Vec::new();

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sldId" => {
                if let Some(id) = attribute(&e, b"id", true) {
                    ids.push(id);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(ids)
}

fn resolve_part(base: &str, target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("{base}/{target}"),
    }
}

#[derive(Default)]
struct ShapeText {
    has_text_body: bool,
    paragraphs: Vec<String>,
}

/// Text of each top-level shape on a slide that carries a text body.
fn slide_shape_texts(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut texts = Vec::new();
    let mut shape: Option<ShapeText> = None;
    let mut in_text = false;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                if name == b"sp" && is_parent(&stack, b"spTree") {
                    shape = Some(ShapeText::default());
                } else if let Some(s) = shape.as_mut() {
                    match name.as_slice() {
                        b"txBody" => s.has_text_body = true,
                        b"p" if is_parent(&stack, b"txBody") => s.paragraphs.push(String::new()),
                        b"t" => in_text = true,
                        _ => {}
                    }
                }
                stack.push(name);
            }
            Event::Empty(e) => {
                if let Some(s) = shape.as_mut() {
                    match e.local_name().as_ref() {
                        b"txBody" => s.has_text_body = true,
                        b"p" if is_parent(&stack, b"txBody") => s.paragraphs.push(String::new()),
                        b"br" => {
                            if let Some(p) = s.paragraphs.last_mut() {
                                p.push('\n');
                            }
                        }
                        _ => {}
                    }
                }
            }
            Event::Text(t) if in_text => {
                if let Some(p) = shape.as_mut().and_then(|s| s.paragraphs.last_mut()) {
                    p.push_str(&t.unescape().map_err(xml_error)?);
                }
            }
            Event::End(e) => {
                stack.pop();
                match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"sp" if is_parent(&stack, b"spTree") => {
                        if let Some(s) = shape.take() {
                            if s.has_text_body {
                                texts.push(s.paragraphs.join("\n"));
                            }
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(texts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn write_zip(path: &Path, entries: &[(&str, &str)]) {
        let mut zip = ZipWriter::new(File::create(path).unwrap());
        for (name, body) in entries {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }

    const DOCX_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>Quarterly</w:t></w:r><w:r><w:t xml:space="preserve"> report</w:t></w:r></w:p>
    <w:p/>
    <w:tbl><w:tr><w:tc><w:p><w:r><w:t>in a table</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
    <w:p><w:r><w:t>A</w:t><w:tab/><w:t>B &amp; C</w:t></w:r></w:p>
    <w:sectPr/>
  </w:body>
</w:document>"#;

    #[test]
    fn test_docx_paragraphs() {
        let paragraphs = docx_paragraphs(DOCX_BODY).unwrap();
        assert_eq!(paragraphs, vec!["Quarterly report", "", "A\tB & C"]);
    }

    #[test]
    fn test_document_text_from_archive() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("report.docx");
        write_zip(&path, &[("word/document.xml", DOCX_BODY)]);

        assert_eq!(document_text(&path).unwrap(), "Quarterly report\n\nA\tB & C");
    }

    #[test]
    fn test_document_missing_part() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("broken.docx");
        write_zip(&path, &[("word/other.xml", "<x/>")]);

        assert!(matches!(
            document_text(&path),
            Err(ExtractError::Archive(_))
        ));
    }

    #[test]
    fn test_not_a_zip() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("fake.docx");
        std::fs::write(&path, "plain text pretending").unwrap();
        assert!(document_text(&path).is_err());
    }

    fn slide(shapes: &str) -> String {
        format!(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"><p:cSld><p:spTree><p:nvGrpSpPr/>{shapes}</p:spTree></p:cSld></p:sld>"#
        )
    }

    #[test]
    fn test_slide_shape_texts() {
        let xml = slide(concat!(
            r#"<p:sp><p:txBody><a:bodyPr/><a:p><a:r><a:t>Title</a:t></a:r></a:p></p:txBody></p:sp>"#,
            r#"<p:pic><p:blipFill/></p:pic>"#,
            r#"<p:sp><p:spPr/></p:sp>"#,
            r#"<p:sp><p:txBody><a:p><a:r><a:t>one</a:t></a:r><a:br/><a:r><a:t>two</a:t></a:r></a:p><a:p><a:r><a:t>three</a:t></a:r></a:p></p:txBody></p:sp>"#,
            r#"<p:grpSp><p:sp><p:txBody><a:p><a:r><a:t>grouped</a:t></a:r></a:p></p:txBody></p:sp></p:grpSp>"#,
        ));

        let texts = slide_shape_texts(&xml).unwrap();
        assert_eq!(texts, vec!["Title", "one\ntwo\nthree"]);
    }

    #[test]
    fn test_presentation_follows_slide_list_order() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("deck.pptx");
        let presentation = r#"<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><p:sldIdLst><p:sldId id="256" r:id="rId3"/><p:sldId id="257" r:id="rId2"/></p:sldIdLst></p:presentation>"#;
        let rels = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide1.xml"/><Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide2.xml"/></Relationships>"#;
        let first = slide(r#"<p:sp><p:txBody><a:p><a:r><a:t>from slide1</a:t></a:r></a:p></p:txBody></p:sp>"#);
        let second = slide(r#"<p:sp><p:txBody><a:p><a:r><a:t>from slide2</a:t></a:r></a:p></p:txBody></p:sp>"#);

        write_zip(
            &path,
            &[
                ("ppt/presentation.xml", presentation),
                ("ppt/_rels/presentation.xml.rels", rels),
                ("ppt/slides/slide1.xml", &first),
                ("ppt/slides/slide2.xml", &second),
            ],
        );

        assert_eq!(presentation_text(&path).unwrap(), "from slide2\nfrom slide1");
    }

    #[test]
    fn test_presentation_falls_back_to_numbering() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("deck.pptx");
        let s2 = slide(r#"<p:sp><p:txBody><a:p><a:r><a:t>two</a:t></a:r></a:p></p:txBody></p:sp>"#);
        let s10 = slide(r#"<p:sp><p:txBody><a:p><a:r><a:t>ten</a:t></a:r></a:p></p:txBody></p:sp>"#);
        write_zip(
            &path,
            &[("ppt/slides/slide10.xml", &s10), ("ppt/slides/slide2.xml", &s2)],
        );

        assert_eq!(presentation_text(&path).unwrap(), "two\nten");
    }

    #[test]
    fn test_resolve_part() {
        assert_eq!(resolve_part("ppt", "slides/slide1.xml"), "ppt/slides/slide1.xml");
        assert_eq!(resolve_part("ppt", "/ppt/slides/slide1.xml"), "ppt/slides/slide1.xml");
    }

    #[test]
    fn test_spreadsheet_rows_and_sheets() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("budget.xlsx");
        let ns = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
        let workbook = format!(
            r#"<workbook xmlns="{ns}" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="First" sheetId="1" r:id="rId1"/><sheet name="Second" sheetId="2" r:id="rId2"/></sheets></workbook>"#
        );
        let rels = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet2.xml"/></Relationships>"#;
        let sheet1 = format!(
            r#"<worksheet xmlns="{ns}"><sheetData><row r="1"><c r="A1" t="inlineStr"><is><t>alpha</t></is></c><c r="C1"><v>3</v></c></row><row r="2"><c r="A2" t="b"><v>1</v></c><c r="B2"><v>2.5</v></c></row></sheetData></worksheet>"#
        );
        let sheet2 = format!(
            r#"<worksheet xmlns="{ns}"><sheetData><row r="3"><c r="A3" t="inlineStr"><is><t>late</t></is></c></row></sheetData></worksheet>"#
        );
        let content_types = r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/></Types>"#;

        write_zip(
            &path,
            &[
                ("[Content_Types].xml", content_types),
                ("xl/workbook.xml", &workbook),
                ("xl/_rels/workbook.xml.rels", rels),
                ("xl/worksheets/sheet1.xml", &sheet1),
                ("xl/worksheets/sheet2.xml", &sheet2),
            ],
        );

        assert_eq!(
            spreadsheet_text(&path).unwrap(),
            "alpha 3\nTrue 2.5\n\n\nlate"
        );
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(cell_text(&Data::Float(4.0)).as_deref(), Some("4"));
        assert_eq!(cell_text(&Data::Float(0.25)).as_deref(), Some("0.25"));
        assert_eq!(cell_text(&Data::Int(-7)).as_deref(), Some("-7"));
        assert_eq!(cell_text(&Data::Bool(false)).as_deref(), Some("False"));
        assert_eq!(
            cell_text(&Data::String("x y".into())).as_deref(),
            Some("x y")
        );
    }

    /// Minimal PDF with one Helvetica text line per page.
    fn write_pdf(path: &Path, pages: &[&str]) {
        let font_id = 3 + 2 * pages.len();
        let kids: Vec<String> = (0..pages.len()).map(|i| format!("{} 0 R", 3 + 2 * i)).collect();

        let mut objects = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), pages.len()),
        ];
        for (i, text) in pages.iter().enumerate() {
            let content = format!("BT /F1 24 Tf 72 700 Td ({text}) Tj ET");
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 {font_id} 0 R >> >> /Contents {} 0 R >>",
                4 + 2 * i
            ));
            objects.push(format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ));
        }
        objects.push(
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
        );

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
        for offset in offsets {
            pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref}\n%%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );

        std::fs::write(path, pdf).unwrap();
    }

    #[test]
    fn test_pdf_pages_joined_in_order_without_separator() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("two.pdf");
        write_pdf(&path, &["First", "Second"]);

        assert_eq!(pdf_text(&path).unwrap(), "FirstSecond");
    }

    #[test]
    fn test_catch_quietly_reports_panic_message() {
        let result = catch_quietly(|| -> usize { panic!("bad xref") });
        let payload = result.unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "bad xref");

        assert_eq!(catch_quietly(|| 7).unwrap(), 7);
        assert!(!QUIET_PANICS.with(Cell::get));
    }

    #[test]
    fn test_corrupt_pdf_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("broken.pdf");
        std::fs::write(&path, b"this is not a pdf at all").unwrap();

        assert!(matches!(pdf_text(&path), Err(ExtractError::Pdf(_))));
    }
}
