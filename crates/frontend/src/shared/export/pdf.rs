//! Minimal PDF writer for report downloads
//!
//! Produces plain PDF 1.4: Helvetica text, one content stream per page,
//! uncompressed. Enough for headings, paragraphs and simple tables.

const PAGE_WIDTH: f64 = 595.0;
const PAGE_HEIGHT: f64 = 842.0;
const MARGIN: f64 = 50.0;

const HEADING_SIZE: f64 = 16.0;
const SUBHEADING_SIZE: f64 = 12.0;
const BODY_SIZE: f64 = 10.0;

pub struct PdfDocument {
    finished_pages: Vec<String>,
    current: String,
    y: f64,
}

impl PdfDocument {
    pub fn new() -> Self {
        Self {
            finished_pages: Vec::new(),
            current: String::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    /// Large bold line, used once per document or per report section.
    pub fn heading(&mut self, text: &str) {
        self.line(text, "F2", HEADING_SIZE, HEADING_SIZE * 1.6);
    }

    /// Bold line for section titles inside a page.
    pub fn subheading(&mut self, text: &str) {
        self.line(text, "F2", SUBHEADING_SIZE, SUBHEADING_SIZE * 1.6);
    }

    /// Regular body line.
    pub fn text(&mut self, text: &str) {
        self.line(text, "F1", BODY_SIZE, BODY_SIZE * 1.5);
    }

    /// Vertical gap between blocks.
    pub fn spacer(&mut self) {
        self.y -= BODY_SIZE;
    }

    /// A simple grid: bold header row, one body line per row. Columns
    /// share the usable width evenly.
    pub fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        if headers.is_empty() {
            return;
        }
        let usable = PAGE_WIDTH - 2.0 * MARGIN;
        let col_width = usable / headers.len() as f64;
        // Rough fit for Helvetica at body size
        let max_chars = (col_width / (BODY_SIZE * 0.55)) as usize;

        self.row_line(headers.iter().map(|h| (*h).to_string()), "F2", col_width, max_chars);
        for row in rows {
            self.row_line(row.iter().cloned(), "F1", col_width, max_chars);
        }
        self.spacer();
    }

    fn row_line(
        &mut self,
        cells: impl Iterator<Item = String>,
        font: &str,
        col_width: f64,
        max_chars: usize,
    ) {
        let line_height = BODY_SIZE * 1.5;
        self.ensure_space(line_height);
        self.y -= line_height;

        for (i, cell) in cells.enumerate() {
            let x = MARGIN + col_width * i as f64;
            let cell = truncate(&cell, max_chars);
            self.current.push_str(&format!(
                "BT /{} {:.1} Tf {:.1} {:.1} Td ({}) Tj ET\n",
                font,
                BODY_SIZE,
                x,
                self.y,
                escape_pdf_text(&cell)
            ));
        }
    }

    fn line(&mut self, text: &str, font: &str, size: f64, line_height: f64) {
        self.ensure_space(line_height);
        self.y -= line_height;
        self.current.push_str(&format!(
            "BT /{} {:.1} Tf {:.1} {:.1} Td ({}) Tj ET\n",
            font,
            size,
            MARGIN,
            self.y,
            escape_pdf_text(text)
        ));
    }

    fn ensure_space(&mut self, needed: f64) {
        if self.y - needed < MARGIN {
            self.break_page();
        }
    }

    fn break_page(&mut self) {
        let content = std::mem::take(&mut self.current);
        self.finished_pages.push(content);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    /// Serializes the document. Consumes the builder.
    pub fn finish(mut self) -> Vec<u8> {
        if !self.current.is_empty() || self.finished_pages.is_empty() {
            self.break_page();
        }
        let pages = self.finished_pages;
        let page_count = pages.len();

        // Object layout: 1 catalog, 2 page tree, 3/4 fonts, then for each
        // page a page object followed by its content stream.
        let first_page_obj = 5;
        let mut objects: Vec<String> = Vec::new();

        let kids: Vec<String> = (0..page_count)
            .map(|i| format!("{} 0 R", first_page_obj + i * 2))
            .collect();

        objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
        objects.push(format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_count
        ));
        objects.push(
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
        );
        objects.push(
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
                .to_string(),
        );

        for (i, content) in pages.iter().enumerate() {
            let content_obj = first_page_obj + i * 2 + 1;
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH:.0} {PAGE_HEIGHT:.0}] \
                 /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {content_obj} 0 R >>"
            ));
            objects.push(format!(
                "<< /Length {} >>\nstream\n{}endstream",
                content.len(),
                content
            ));
        }

        let mut out: Vec<u8> = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n");

        let mut offsets: Vec<usize> = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }

        let xref_start = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets {
            out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_start
            )
            .as_bytes(),
        );

        out
    }
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_pdf_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\n' | '\r' => out.push(' '),
            c if c.is_ascii() => out.push(c),
            // Non-ASCII falls outside WinAnsi coverage we guarantee
            _ => out.push('?'),
        }
    }
    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    if max_chars == 0 || text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}.", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_markers() {
        let mut doc = PdfDocument::new();
        doc.heading("Quarterly Report");
        doc.text("Generated 2024-06-30");
        let bytes = doc.finish();
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.trim_end().ends_with("%%EOF"));
        assert!(text.contains("(Quarterly Report) Tj"));
        assert!(text.contains("/Count 1"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let mut doc = PdfDocument::new();
        doc.heading("Title");
        doc.table(
            &["Name", "Value"],
            &[vec!["Total".to_string(), "45".to_string()]],
        );
        let bytes = doc.finish();
        let text = String::from_utf8_lossy(&bytes).to_string();

        let xref_pos = text.rfind("xref\n").unwrap();
        let after = &text[xref_pos..];
        for (i, line) in after.lines().skip(3).enumerate() {
            if !line.ends_with("n ") {
                break;
            }
            let offset: usize = line[..10].parse().unwrap();
            let expected = format!("{} 0 obj", i + 1);
            assert!(text[offset..].starts_with(&expected), "bad offset for obj {}", i + 1);
        }
    }

    #[test]
    fn test_long_content_spans_pages() {
        let mut doc = PdfDocument::new();
        for i in 0..80 {
            doc.text(&format!("line {}", i));
        }
        let bytes = doc.finish();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 2"));
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_pdf_text("a(b)c\\d"), "a\\(b\\)c\\\\d");
        assert_eq!(escape_pdf_text("café"), "caf?");
    }
}
