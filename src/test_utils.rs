#[cfg(test)]
pub mod fixtures {
    use std::io::Cursor;

    use docx_rs::{Docx, Paragraph, Run};

    /// Packs a real DOCX archive with one paragraph per entry.
    pub fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }

        let mut cursor = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut cursor)
            .expect("failed to pack test docx");
        cursor.into_inner()
    }

    /// Builds a single-page PDF around the given content stream, with a
    /// byte-accurate xref table. An empty stream yields a valid PDF that
    /// carries no text layer.
    pub fn pdf_bytes(content_stream: &str) -> Vec<u8> {
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                content_stream.len(),
                content_stream
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut buf: Vec<u8> = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(buf.len());
            buf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }

        let xref_offset = buf.len();
        buf.extend_from_slice(
            format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes(),
        );
        for offset in &offsets {
            buf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        buf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_offset
            )
            .as_bytes(),
        );
        buf
    }
}

#[cfg(test)]
pub mod multipart {
    pub const BOUNDARY: &str = "----examgen-test-boundary";

    pub struct Part<'a> {
        pub name: &'a str,
        pub filename: Option<&'a str>,
        pub body: &'a [u8],
    }

    impl<'a> Part<'a> {
        pub fn file(name: &'a str, filename: &'a str, body: &'a [u8]) -> Self {
            Self {
                name,
                filename: Some(filename),
                body,
            }
        }

        pub fn text(name: &'a str, value: &'a str) -> Self {
            Self {
                name,
                filename: None,
                body: value.as_bytes(),
            }
        }
    }

    pub fn content_type() -> String {
        format!("multipart/form-data; boundary={}", BOUNDARY)
    }

    pub fn body_with_parts(parts: &[Part<'_>]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
            match part.filename {
                Some(filename) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n",
                        part.name, filename
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                        part.name
                    )
                    .as_bytes(),
                ),
            }
            body.extend_from_slice(part.body);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docx_fixture_is_a_zip_archive() {
        let bytes = fixtures::docx_bytes(&["hello"]);
        // DOCX is a zip container; check the magic bytes.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_pdf_fixture_has_header_and_trailer() {
        let bytes = fixtures::pdf_bytes("");
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(bytes.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn test_multipart_body_shape() {
        let body = multipart::body_with_parts(&[
            multipart::Part::file("file", "notes.txt", b"hi"),
            multipart::Part::text("questionCount", "3"),
        ]);
        let text = String::from_utf8(body).unwrap();
        assert!(text.contains("name=\"file\"; filename=\"notes.txt\""));
        assert!(text.contains("name=\"questionCount\""));
        assert!(text.ends_with(&format!("--{}--\r\n", multipart::BOUNDARY)));
    }
}
