//! Record table shared by every test in the battery.
//!
//! A [`RecordTable`] holds an ordered batch of bit strings plus the metric
//! columns the tests append, one column per test run. Tests read only the
//! string column, never each other's output, so they compose in any order.

use serde::{Deserialize, Serialize};

/// A single derived metric column, one value per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricColumn {
    /// Column name, e.g. `block_3_test`.
    pub name: String,
    /// One scalar per row, in row order.
    pub values: Vec<f64>,
}

/// Ordered collection of bit strings with appended metric columns.
///
/// Row identity and order are stable: tests never reorder or filter rows,
/// and every appended column carries exactly one value per row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordTable {
    strings: Vec<String>,
    columns: Vec<MetricColumn>,
}

impl RecordTable {
    /// Build a table from a batch of bit strings.
    ///
    /// Strings are taken as-is. Characters outside {`'0'`, `'1'`} are not
    /// rejected — the battery treats them as matching no pattern — but rows
    /// containing them are logged so surprising zeros stay traceable.
    pub fn from_strings(strings: Vec<String>) -> Self {
        let malformed = strings
            .iter()
            .filter(|s| s.bytes().any(|b| b != b'0' && b != b'1'))
            .count();
        if malformed > 0 {
            log::warn!("{malformed} row(s) contain characters outside {{0,1}}");
        }
        Self {
            strings,
            columns: Vec::new(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// The bit-string column.
    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    /// One row's bit string as ASCII bytes.
    pub fn bits(&self, row: usize) -> &[u8] {
        self.strings[row].as_bytes()
    }

    /// All metric columns, in append order.
    pub fn columns(&self) -> &[MetricColumn] {
        &self.columns
    }

    /// Values of a metric column by name.
    pub fn metric(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Append a metric column, one value per row.
    ///
    /// Re-appending an existing name replaces that column in place, so
    /// re-running a test leaves the table shape unchanged. Panics when
    /// `values.len()` differs from the row count.
    pub fn append_metric(&mut self, name: impl Into<String>, values: Vec<f64>) {
        let name = name.into();
        assert_eq!(
            values.len(),
            self.strings.len(),
            "metric column `{name}` has {} values for {} rows",
            values.len(),
            self.strings.len()
        );
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(col) => col.values = values,
            None => self.columns.push(MetricColumn { name, values }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_lookup() {
        let mut table = RecordTable::from_strings(vec!["101".into(), "000".into()]);
        table.append_metric("freq_test", vec![2.0 / 3.0, 0.0]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.metric("freq_test"), Some(&[2.0 / 3.0, 0.0][..]));
        assert_eq!(table.metric("missing"), None);
    }

    #[test]
    fn reappend_replaces_in_place() {
        let mut table = RecordTable::from_strings(vec!["101".into()]);
        table.append_metric("run_test", vec![2.0]);
        table.append_metric("freq_test", vec![0.5]);
        table.append_metric("run_test", vec![2.0]);
        assert_eq!(table.columns().len(), 2);
        assert_eq!(table.columns()[0].name, "run_test");
        assert_eq!(table.columns()[1].name, "freq_test");
    }

    #[test]
    #[should_panic(expected = "metric column")]
    fn length_mismatch_panics() {
        let mut table = RecordTable::from_strings(vec!["101".into(), "010".into()]);
        table.append_metric("freq_test", vec![0.5]);
    }

    #[test]
    fn bits_view() {
        let table = RecordTable::from_strings(vec!["0110".into()]);
        assert_eq!(table.bits(0), b"0110");
    }

    #[test]
    fn serializes_to_json() {
        let mut table = RecordTable::from_strings(vec!["10".into()]);
        table.append_metric("run_test", vec![1.0]);
        let json = serde_json::to_string(&table).unwrap();
        assert!(json.contains("run_test"));
        let back: RecordTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
