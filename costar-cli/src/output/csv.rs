//! CSV output formatting for data export.

/// CSV output formatter
pub struct CsvOutput;

impl CsvOutput {
    /// Build a CSV document from a header row and data rows.
    ///
    /// With no rows the output is the header line alone.
    pub fn from_rows(headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut output = headers.join(",");

        for row in rows {
            output.push('\n');
            output.push_str(&Self::format_row(row));
        }

        output
    }

    /// Format one data row, escaping each cell.
    pub fn format_row(row: &[String]) -> String {
        row.iter()
            .map(|cell| Self::escape_value(cell))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Escape a string value for CSV
    ///
    /// Wraps in quotes if the value contains comma, newline, or quote.
    /// Doubles any existing quotes.
    fn escape_value(s: &str) -> String {
        if s.contains(',') || s.contains('\n') || s.contains('\r') || s.contains('"') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
