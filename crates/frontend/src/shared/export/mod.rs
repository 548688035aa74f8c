//! Client-side export of list and report data
//!
//! Spreadsheet exports are CSV files assembled in memory; PDF exports go
//! through the writer in [`pdf`]. Both are handed to the browser as a
//! Blob download, nothing leaves the page.

pub mod pdf;

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// A titled block of rows inside a CSV document. Reports export several
/// of these into a single file, separated by blank lines.
pub struct CsvSection {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvSection {
    pub fn new(
        title: impl Into<String>,
        headers: &[&str],
        rows: Vec<Vec<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }
}

/// Exports several titled sections as one CSV file and triggers a download.
pub fn export_sections_to_spreadsheet(
    sections: &[CsvSection],
    filename: &str,
) -> Result<(), String> {
    let content = csv_document(sections);
    let blob = create_csv_blob(&content)?;
    download_blob(&blob, filename)
}

/// Triggers a download of a finished PDF document.
pub fn download_pdf(bytes: &[u8], filename: &str) -> Result<(), String> {
    let blob = create_pdf_blob(bytes)?;
    download_blob(&blob, filename)
}

/// Builds the full CSV text for a list of sections.
///
/// Starts with a UTF-8 BOM so Excel picks the right encoding. A section
/// with a title gets a single-cell title row before its header row;
/// sections are separated by one blank line.
pub fn csv_document(sections: &[CsvSection]) -> String {
    let mut content = String::new();
    content.push('\u{FEFF}');

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            content.push('\n');
        }
        if !section.title.is_empty() {
            content.push_str(&escape_csv_cell(&section.title));
            content.push('\n');
        }
        let escaped_headers: Vec<String> =
            section.headers.iter().map(|h| escape_csv_cell(h)).collect();
        content.push_str(&escaped_headers.join(","));
        content.push('\n');

        for row in &section.rows {
            let escaped_row: Vec<String> = row.iter().map(|cell| escape_csv_cell(cell)).collect();
            content.push_str(&escaped_row.join(","));
            content.push('\n');
        }
    }

    content
}

/// Escapes a CSV cell if necessary
fn escape_csv_cell(cell: &str) -> String {
    // Cells containing the separator, quotes or newlines are wrapped in quotes
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        // Double the quotes inside the value
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn create_pdf_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type("application/pdf");

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Triggers a Blob download through the browser
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    // Temporary invisible link: append, click, remove
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_csv_document_single_section() {
        let section = CsvSection::new(
            "",
            &["Name", "Value"],
            vec![vec!["a".to_string(), "1".to_string()]],
        );
        let doc = csv_document(&[section]);
        assert_eq!(doc, "\u{FEFF}Name,Value\na,1\n");
    }

    #[test]
    fn test_csv_document_sections_are_titled_and_separated() {
        let first = CsvSection::new(
            "Overview",
            &["Metric", "Value"],
            vec![vec!["Total".to_string(), "45".to_string()]],
        );
        let second = CsvSection::new(
            "By Status",
            &["Status", "Count"],
            vec![vec!["Active".to_string(), "32".to_string()]],
        );
        let doc = csv_document(&[first, second]);
        assert_eq!(
            doc,
            "\u{FEFF}Overview\nMetric,Value\nTotal,45\n\nBy Status\nStatus,Count\nActive,32\n"
        );
    }
}
