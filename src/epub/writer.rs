use std::io::{self, Seek, Write};
use std::path::Path;

use base64::Engine;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::book::{Book, Section};

/// Minimal 1x1 transparent PNG, used as the generated cover image.
const COVER_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

/// Write a [`Book`] to an EPUB file on disk.
///
/// Creates a valid EPUB 2 file with OPF package document, NCX table of
/// contents, a generated cover image, and one XHTML content document per
/// section.
///
/// # Example
///
/// ```no_run
/// use kindlify::{Book, Metadata, write_epub};
///
/// let mut book = Book::new(Metadata::new("My Book").with_author("Me"));
/// book.add_section("Chapter 1", "<p>Hello.</p>");
/// write_epub(&book, "output.epub")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_epub<P: AsRef<Path>>(book: &Book, path: P) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_epub_to_writer(book, file)
}

/// Write a [`Book`] to any [`Write`] + [`Seek`] destination.
///
/// Useful for writing to memory buffers or network streams.
pub fn write_epub_to_writer<W: Write + Seek>(book: &Book, writer: W) -> io::Result<()> {
    let mut zip = ZipWriter::new(writer);

    // 1. Write mimetype (must be first, uncompressed)
    let options_stored =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    let options_deflate =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file("mimetype", options_stored)?;
    zip.write_all(b"application/epub+zip")?;

    // 2. Write META-INF/container.xml
    zip.start_file("META-INF/container.xml", options_deflate)?;
    zip.write_all(CONTAINER_XML.as_bytes())?;

    // Generate identifier once for consistency between OPF and NCX
    let identifier = if book.metadata.identifier.is_empty() {
        format!("urn:uuid:{}", uuid_v4())
    } else {
        book.metadata.identifier.clone()
    };

    // 3. Write content.opf
    let opf = generate_opf(book, &identifier);
    zip.start_file("OEBPS/content.opf", options_deflate)?;
    zip.write_all(opf.as_bytes())?;

    // 4. Write toc.ncx
    let ncx = generate_ncx(book, &identifier);
    zip.start_file("OEBPS/toc.ncx", options_deflate)?;
    zip.write_all(ncx.as_bytes())?;

    // 5. Write the cover image
    let cover = base64::engine::general_purpose::STANDARD
        .decode(COVER_PNG_BASE64)
        .expect("embedded cover is valid base64");
    zip.start_file("OEBPS/cover.png", options_deflate)?;
    zip.write_all(&cover)?;

    // 6. Write one XHTML document per section
    for (i, section) in book.sections.iter().enumerate() {
        zip.start_file(format!("OEBPS/{}", section_href(i)), options_deflate)?;
        zip.write_all(section_xhtml(section).as_bytes())?;
    }

    zip.finish()?;
    Ok(())
}

const CONTAINER_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>"#;

fn section_href(index: usize) -> String {
    format!("section-{}.xhtml", index + 1)
}

fn section_id(index: usize) -> String {
    format!("section-{}", index + 1)
}

/// Wrap a section's HTML fragment in an XHTML skeleton.
///
/// The body is inserted as-is; it is already HTML from the converter.
fn section_xhtml(section: &Section) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml">
<head><title>{}</title></head>
<body>
{}
</body>
</html>"#,
        escape_xml(&section.title),
        section.body
    )
}

fn generate_opf(book: &Book, identifier: &str) -> String {
    let mut opf = String::new();

    opf.push_str(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="2.0" unique-identifier="BookId">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:opf="http://www.idpf.org/2007/opf">
"#,
    );

    // Dublin Core metadata
    opf.push_str(&format!(
        "    <dc:title>{}</dc:title>\n",
        escape_xml(&book.metadata.title)
    ));

    opf.push_str(&format!(
        "    <dc:identifier id=\"BookId\">{}</dc:identifier>\n",
        escape_xml(identifier)
    ));

    let language = if book.metadata.language.is_empty() {
        "en"
    } else {
        &book.metadata.language
    };
    opf.push_str(&format!("    <dc:language>{}</dc:language>\n", language));

    if !book.metadata.author.is_empty() {
        opf.push_str(&format!(
            "    <dc:creator>{}</dc:creator>\n",
            escape_xml(&book.metadata.author)
        ));
    }

    opf.push_str("    <meta name=\"cover\" content=\"cover-image\"/>\n");
    opf.push_str("  </metadata>\n  <manifest>\n");

    // NCX and cover items
    opf.push_str(
        "    <item id=\"ncx\" href=\"toc.ncx\" media-type=\"application/x-dtbncx+xml\"/>\n",
    );
    opf.push_str("    <item id=\"cover-image\" href=\"cover.png\" media-type=\"image/png\"/>\n");

    // Section items
    for (i, _) in book.sections.iter().enumerate() {
        opf.push_str(&format!(
            "    <item id=\"{}\" href=\"{}\" media-type=\"application/xhtml+xml\"/>\n",
            section_id(i),
            section_href(i)
        ));
    }

    opf.push_str("  </manifest>\n  <spine toc=\"ncx\">\n");

    for (i, _) in book.sections.iter().enumerate() {
        opf.push_str(&format!("    <itemref idref=\"{}\"/>\n", section_id(i)));
    }

    opf.push_str("  </spine>\n</package>\n");
    opf
}

fn generate_ncx(book: &Book, identifier: &str) -> String {
    let mut ncx = String::new();

    ncx.push_str(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE ncx PUBLIC "-//NISO//DTD ncx 2005-1//EN" "http://www.daisy.org/z3986/2005/ncx-2005-1.dtd">
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <head>
    <meta name="dtb:uid" content=""#,
    );

    ncx.push_str(&escape_xml(identifier));
    ncx.push_str(
        r#""/>
    <meta name="dtb:depth" content="1"/>
    <meta name="dtb:totalPageCount" content="0"/>
    <meta name="dtb:maxPageNumber" content="0"/>
  </head>
  <docTitle>
    <text>"#,
    );
    ncx.push_str(&escape_xml(&book.metadata.title));
    ncx.push_str(
        r#"</text>
  </docTitle>
  <navMap>
"#,
    );

    // One navPoint per section, flat
    for (i, section) in book.sections.iter().enumerate() {
        let play_order = i + 1;
        ncx.push_str(&format!(
            "    <navPoint id=\"navpoint-{}\" playOrder=\"{}\">\n",
            play_order, play_order
        ));
        ncx.push_str(&format!(
            "      <navLabel>\n        <text>{}</text>\n      </navLabel>\n",
            escape_xml(&section.title)
        ));
        ncx.push_str(&format!(
            "      <content src=\"{}\"/>\n    </navPoint>\n",
            section_href(i)
        ));
    }

    ncx.push_str("  </navMap>\n</ncx>\n");
    ncx
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Generate a simple UUID v4 (random)
fn uuid_v4() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(12345);

    // Simple PRNG for UUID generation (not cryptographically secure, but fine for identifiers)
    let mut state = seed;
    let mut bytes = [0u8; 16];
    for byte in &mut bytes {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        *byte = (state >> 33) as u8;
    }

    // Set version (4) and variant (2)
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let mut out = String::with_capacity(36);
    for (i, byte) in bytes.iter().enumerate() {
        if matches!(i, 4 | 6 | 8 | 10) {
            out.push('-');
        }
        out.push_str(&format!("{:02x}", byte));
    }
    out
}
