//! In-memory view of a tabular dataset
//!
//! A `Table` is a plain headers-plus-rows snapshot of a CSV file. Columns are
//! accessed by name, either as raw string labels or parsed into numeric
//! vectors for metric calculations.

use csv::ReaderBuilder;
use ndarray::Array1;
use std::io::Read;

use super::error::{DataError, DataResult};

/// Headers and rows of a loaded dataset
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse a table from any CSV reader
    pub fn from_reader<R: Read>(reader: R) -> DataResult<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Number of data rows
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Column names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    fn column_index(&self, name: &str) -> DataResult<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::ColumnNotFound(name.to_string()))
    }

    /// Get a column as raw string labels
    pub fn column(&self, name: &str) -> DataResult<Vec<String>> {
        let idx = self.column_index(name)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(idx).cloned().unwrap_or_default())
            .collect())
    }

    /// Get a column parsed as a numeric vector
    pub fn numeric_column(&self, name: &str) -> DataResult<Array1<f64>> {
        let idx = self.column_index(name)?;

        let mut values = Vec::with_capacity(self.rows.len());
        for (row_idx, row) in self.rows.iter().enumerate() {
            let cell = row.get(idx).map(String::as_str).unwrap_or("");
            let value = cell.parse::<f64>().map_err(|_| DataError::NonNumeric {
                column: name.to_string(),
                row: row_idx,
                value: cell.to_string(),
            })?;
            values.push(value);
        }

        Ok(Array1::from_vec(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        let csv = "label,score,model\n1,0.9,a\n0,0.2,b\n1,0.7,a\n";
        Table::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_parse_headers_and_rows() {
        let table = sample_table();
        assert_eq!(table.headers(), &["label", "score", "model"]);
        assert_eq!(table.n_rows(), 3);
    }

    #[test]
    fn test_string_column() {
        let table = sample_table();
        let models = table.column("model").unwrap();
        assert_eq!(models, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_numeric_column() {
        let table = sample_table();
        let scores = table.numeric_column("score").unwrap();
        assert_eq!(scores.len(), 3);
        assert!((scores[0] - 0.9).abs() < 1e-10);
        assert!((scores[1] - 0.2).abs() < 1e-10);
    }

    #[test]
    fn test_missing_column() {
        let table = sample_table();
        let err = table.column("nope").unwrap_err();
        assert!(matches!(err, DataError::ColumnNotFound(name) if name == "nope"));
    }

    #[test]
    fn test_non_numeric_cell() {
        let table = sample_table();
        let err = table.numeric_column("model").unwrap_err();
        assert!(matches!(err, DataError::NonNumeric { row: 0, .. }));
    }
}
