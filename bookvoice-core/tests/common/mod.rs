//! Shared fixtures for integration tests

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// One spine entry of a generated EPUB
pub struct FixtureChapter {
    pub id: &'static str,
    /// Table of contents label; `None` leaves the chapter out of the TOC
    pub title: Option<&'static str>,
    pub body: &'static str,
    /// Content file relative to `OEBPS/`; `None` means `{id}.xhtml`
    pub file: Option<&'static str>,
}

impl FixtureChapter {
    pub fn new(id: &'static str, title: &'static str, body: &'static str) -> Self {
        Self {
            id,
            title: Some(title),
            body,
            file: None,
        }
    }

    pub fn untitled(id: &'static str, body: &'static str) -> Self {
        Self {
            id,
            title: None,
            body,
            file: None,
        }
    }

    /// Store the chapter under another file name, linked from the TOC with a fragment
    pub fn in_file(mut self, file: &'static str) -> Self {
        self.file = Some(file);
        self
    }

    fn href(&self) -> String {
        match self.file {
            Some(file) => file.to_string(),
            None => format!("{}.xhtml", self.id),
        }
    }

    fn toc_src(&self) -> String {
        match self.file {
            Some(file) => format!("{}#top", file),
            None => self.href(),
        }
    }
}

/// Write a minimal EPUB 2 book with the given chapters in spine order
pub fn write_epub(path: &Path, chapters: &[FixtureChapter]) {
    let file = File::create(path).expect("Failed to create EPUB fixture");
    let mut zip = ZipWriter::new(file);
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    zip.start_file("mimetype", stored).unwrap();
    zip.write_all(b"application/epub+zip").unwrap();

    zip.start_file("META-INF/container.xml", SimpleFileOptions::default()).unwrap();
    zip.write_all(CONTAINER_XML.as_bytes()).unwrap();

    zip.start_file("OEBPS/content.opf", SimpleFileOptions::default()).unwrap();
    zip.write_all(content_opf(chapters).as_bytes()).unwrap();

    zip.start_file("OEBPS/toc.ncx", SimpleFileOptions::default()).unwrap();
    zip.write_all(toc_ncx(chapters).as_bytes()).unwrap();

    for chapter in chapters {
        zip.start_file(format!("OEBPS/{}", chapter.href()), SimpleFileOptions::default())
            .unwrap();
        zip.write_all(chapter_xhtml(chapter).as_bytes()).unwrap();
    }

    zip.finish().unwrap();
}

const CONTAINER_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>
"#;

fn content_opf(chapters: &[FixtureChapter]) -> String {
    let manifest: String = chapters
        .iter()
        .map(|c| {
            format!(
                r#"    <item id="{}" href="{}" media-type="application/xhtml+xml"/>
"#,
                c.id,
                c.href()
            )
        })
        .collect();
    let spine: String = chapters
        .iter()
        .map(|c| format!("    <itemref idref=\"{}\"/>\n", c.id))
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="2.0" unique-identifier="bookid">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
    <dc:title>Fixture Book</dc:title>
    <dc:identifier id="bookid">urn:uuid:00000000-0000-0000-0000-000000000001</dc:identifier>
    <dc:language>en</dc:language>
  </metadata>
  <manifest>
    <item id="ncx" href="toc.ncx" media-type="application/x-dtbncx+xml"/>
{manifest}  </manifest>
  <spine toc="ncx">
{spine}  </spine>
</package>
"#
    )
}

fn toc_ncx(chapters: &[FixtureChapter]) -> String {
    let nav_points: String = chapters
        .iter()
        .filter_map(|c| c.title.map(|title| (c, title)))
        .enumerate()
        .map(|(i, (chapter, title))| {
            format!(
                r#"    <navPoint id="nav-{id}" playOrder="{order}">
      <navLabel><text>{title}</text></navLabel>
      <content src="{src}"/>
    </navPoint>
"#,
                id = chapter.id,
                src = chapter.toc_src(),
                order = i + 1
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <head>
    <meta name="dtb:uid" content="urn:uuid:00000000-0000-0000-0000-000000000001"/>
  </head>
  <docTitle><text>Fixture Book</text></docTitle>
  <navMap>
{nav_points}  </navMap>
</ncx>
"#
    )
}

fn chapter_xhtml(chapter: &FixtureChapter) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<html xmlns="http://www.w3.org/1999/xhtml">
<head><title>{id}</title></head>
<body>{body}</body>
</html>
"#,
        id = chapter.id,
        body = chapter.body
    )
}

/// Write a PDF with one Helvetica line per page
///
/// Each page's line sits lower and further left than the previous one, so
/// the extracted text has a blank line between pages.
pub fn write_pdf(path: &Path, pages: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids: Vec<Object> = Vec::new();
    for (i, line) in pages.iter().enumerate() {
        let step = 100 * i as i64;
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![(400 - step).into(), (792 - step).into()]),
                Operation::new("Tj", vec![Object::string_literal(*line)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_tree = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => pages.len() as i64,
        "Resources" => dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        },
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(page_tree));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut file = File::create(path).expect("Failed to create PDF fixture");
    doc.save_to(&mut file).unwrap();
}
