use crate::domain::model::ResultTable;
use crate::domain::ports::TableRenderer;
use crate::utils::error::{Result, ScoreError};

/// Delimited-text rendering of a result table. The core only hands over
/// ordered rows and named columns; whatever display surface sits on the
/// other side is its own business.
pub struct DelimitedRenderer {
    delimiter: u8,
}

impl DelimitedRenderer {
    pub fn csv() -> Self {
        Self { delimiter: b',' }
    }

    pub fn tsv() -> Self {
        Self { delimiter: b'\t' }
    }
}

impl TableRenderer for DelimitedRenderer {
    fn render(&self, table: &ResultTable) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        let mut header = vec!["#".to_string(), "text".to_string()];
        header.extend(table.columns.iter().cloned());
        writer.write_record(&header)?;

        for row in &table.rows {
            let mut record = vec![row.index.to_string(), row.text.as_str().to_string()];
            record.extend(row.cells.iter().map(|cell| cell.to_string()));
            writer.write_record(&record)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ScoreError::RenderError { message: e.to_string() })?;
        String::from_utf8(bytes).map_err(|e| ScoreError::RenderError { message: e.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ResultRow, ScoreResult};
    use crate::core::sanitize::Sanitizer;

    fn sample_table() -> ResultTable {
        let sanitizer = Sanitizer::new();
        ResultTable {
            columns: vec!["vader: -1.0 (negative emotion) to +1.0 (positive emotion)".to_string()],
            rows: vec![
                ResultRow {
                    index: 1,
                    text: sanitizer.sanitize("hello, world"),
                    cells: vec![ScoreResult::Value(0.67)],
                },
                ResultRow {
                    index: 2,
                    text: sanitizer.sanitize("second"),
                    cells: vec![ScoreResult::Failed("ERROR: quota exceeded".to_string())],
                },
            ],
        }
    }

    #[test]
    fn test_csv_render_quotes_and_orders() {
        let rendered = DelimitedRenderer::csv().render(&sample_table()).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("#,text,"));
        // comma in the text forces quoting
        assert!(lines[1].starts_with("1,\"hello, world\",0.670"));
        assert!(lines[2].contains("ERROR: quota exceeded"));
    }

    #[test]
    fn test_tsv_render_uses_tabs() {
        let rendered = DelimitedRenderer::tsv().render(&sample_table()).unwrap();
        assert!(rendered.lines().next().unwrap().starts_with("#\ttext\t"));
    }
}
