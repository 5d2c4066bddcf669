//! DOCX → raw text, read from the packaged `word/document.xml` via `docx-rs`.

use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};

use super::ExtractionError;

/// Returns one line per paragraph. Table cells contribute their paragraphs in reading
/// order; everything else (images, headers, comments) is ignored.
pub fn extract_docx_text(data: &[u8]) -> Result<String, ExtractionError> {
    let docx = read_docx(data).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut lines = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(p) => lines.push(paragraph_text(p)),
            DocumentChild::Table(t) => table_lines(t, &mut lines),
            _ => {}
        }
    }

    Ok(lines.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_paragraph_children(&paragraph.children, &mut text);
    text
}

fn push_paragraph_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) | RunChild::Break(_) => out.push(' '),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, out),
            _ => {}
        }
    }
}

fn table_lines(table: &Table, lines: &mut Vec<String>) {
    for row in &table.rows {
        if let TableChild::TableRow(row) = row {
            for cell in &row.cells {
                if let TableRowChild::TableCell(cell) = cell {
                    for content in &cell.children {
                        if let TableCellContent::Paragraph(p) = content {
                            lines.push(paragraph_text(p));
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::fixtures::{docx_bytes, docx_with_table_bytes};

    #[test]
    fn test_extracts_one_line_per_paragraph() {
        let data = docx_bytes(&["Jane Doe", "Senior Rust Engineer"]);
        let text = extract_docx_text(&data).unwrap();
        assert_eq!(text, "Jane Doe\nSenior Rust Engineer");
    }

    #[test]
    fn test_includes_table_cell_text() {
        let data = docx_with_table_bytes("SKILLS", &["Rust", "PostgreSQL"]);
        let text = extract_docx_text(&data).unwrap();
        assert!(text.contains("SKILLS"));
        assert!(text.contains("Rust"));
        assert!(text.contains("PostgreSQL"));
    }

    #[test]
    fn test_rejects_non_zip_input() {
        let err = extract_docx_text(b"plain text pretending to be a docx").unwrap_err();
        assert!(matches!(err, ExtractionError::Docx(_)));
    }
}
