//! Table types.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Column alignment in a pipe table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Justification {
    /// Left alignment (`:--`)
    #[default]
    Left,
    /// Right alignment (`--:`)
    Right,
    /// Center alignment (`:-:`)
    Center,
}

impl Justification {
    /// Canonical token for this justification.
    pub fn as_str(&self) -> &'static str {
        match self {
            Justification::Left => "left",
            Justification::Right => "right",
            Justification::Center => "center",
        }
    }

    /// Build the alignment-row cell for a column with the given name.
    ///
    /// The dash run is `max(len(name) - 2, 1)` long.
    pub fn marker(&self, column: &str) -> String {
        let width = column.chars().count().saturating_sub(2).max(1);
        match self {
            Justification::Left => format!(":{}", "-".repeat(width)),
            Justification::Right => format!("{}:", "-".repeat(width)),
            Justification::Center => {
                format!(":{}:", "-".repeat(width.saturating_sub(1).max(1)))
            }
        }
    }
}

impl FromStr for Justification {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "" | "left" | "none" => Ok(Justification::Left),
            "right" => Ok(Justification::Right),
            "center" | "full" => Ok(Justification::Center),
            _ => Err(Error::InvalidJustification(token.to_string())),
        }
    }
}

impl fmt::Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column declaration: a name plus an unparsed justification token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnSpec {
    /// Name only, left aligned
    Name(String),
    /// Name with a justification token
    Justified {
        /// Column name
        name: String,
        /// Justification token (`left`, `right`, `center`, `full`, `none` or empty)
        #[serde(default)]
        justification: String,
    },
}

impl ColumnSpec {
    fn into_parts(self) -> Result<(String, Justification)> {
        match self {
            ColumnSpec::Name(name) => Ok((name, Justification::Left)),
            ColumnSpec::Justified {
                name,
                justification,
            } => Ok((name, justification.parse()?)),
        }
    }
}

impl From<&str> for ColumnSpec {
    fn from(name: &str) -> Self {
        ColumnSpec::Name(name.to_string())
    }
}

impl From<String> for ColumnSpec {
    fn from(name: String) -> Self {
        ColumnSpec::Name(name)
    }
}

impl From<(&str, &str)> for ColumnSpec {
    fn from((name, justification): (&str, &str)) -> Self {
        ColumnSpec::Justified {
            name: name.to_string(),
            justification: justification.to_string(),
        }
    }
}

impl From<(String, String)> for ColumnSpec {
    fn from((name, justification): (String, String)) -> Self {
        ColumnSpec::Justified {
            name,
            justification,
        }
    }
}

impl From<(&str, Justification)> for ColumnSpec {
    fn from((name, justification): (&str, Justification)) -> Self {
        ColumnSpec::Justified {
            name: name.to_string(),
            justification: justification.as_str().to_string(),
        }
    }
}

/// A row handed to [`Table::add_row`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Row {
    /// Cells in column order; must match the column count exactly
    Positional(Vec<String>),
    /// Cells by column name; missing columns become empty cells
    Keyed(Vec<(String, String)>),
}

impl Row {
    /// Build a positional row from any displayable values.
    pub fn positional<T: ToString>(cells: impl IntoIterator<Item = T>) -> Self {
        Row::Positional(cells.into_iter().map(|c| c.to_string()).collect())
    }

    /// Build a keyed row from `(column, value)` pairs.
    pub fn keyed<K: Into<String>, V: ToString>(cells: impl IntoIterator<Item = (K, V)>) -> Self {
        Row::Keyed(
            cells
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

impl From<Vec<String>> for Row {
    fn from(cells: Vec<String>) -> Self {
        Row::Positional(cells)
    }
}

impl From<Vec<&str>> for Row {
    fn from(cells: Vec<&str>) -> Self {
        Row::positional(cells)
    }
}

impl<const N: usize> From<[&str; N]> for Row {
    fn from(cells: [&str; N]) -> Self {
        Row::positional(cells)
    }
}

impl From<Vec<(String, String)>> for Row {
    fn from(cells: Vec<(String, String)>) -> Self {
        Row::Keyed(cells)
    }
}

impl From<Vec<(&str, &str)>> for Row {
    fn from(cells: Vec<(&str, &str)>) -> Self {
        Row::keyed(cells)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Row {
    fn from(cells: [(&str, &str); N]) -> Self {
        Row::keyed(cells)
    }
}

impl From<HashMap<String, String>> for Row {
    fn from(cells: HashMap<String, String>) -> Self {
        Row::Keyed(cells.into_iter().collect())
    }
}

impl From<BTreeMap<String, String>> for Row {
    fn from(cells: BTreeMap<String, String>) -> Self {
        Row::Keyed(cells.into_iter().collect())
    }
}

/// A pipe table with declared, aligned columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable", into = "RawTable")]
pub struct Table {
    title: String,
    columns: Vec<String>,
    justifications: Vec<Justification>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a new table with no columns.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Create a table with columns already declared.
    pub fn with_columns<C: Into<ColumnSpec>>(
        title: impl Into<String>,
        columns: impl IntoIterator<Item = C>,
    ) -> Result<Self> {
        let mut table = Self::new(title);
        table.add_columns(columns)?;
        Ok(table)
    }

    /// Append columns. Nothing is added if any justification token is invalid.
    ///
    /// Existing rows get an empty cell for every new column.
    pub fn add_columns<C: Into<ColumnSpec>>(
        &mut self,
        columns: impl IntoIterator<Item = C>,
    ) -> Result<()> {
        let parsed = columns
            .into_iter()
            .map(|c| {
                let spec: ColumnSpec = c.into();
                spec.into_parts()
            })
            .collect::<Result<Vec<_>>>()?;

        for (name, justification) in parsed {
            self.columns.push(name);
            self.justifications.push(justification);
        }
        for row in &mut self.rows {
            row.resize(self.columns.len(), String::new());
        }
        Ok(())
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: impl Into<Row>) -> Result<()> {
        let cells = match row.into() {
            Row::Positional(cells) => {
                if cells.len() != self.columns.len() {
                    return Err(Error::RowLength {
                        expected: self.columns.len(),
                        found: cells.len(),
                    });
                }
                cells
            }
            Row::Keyed(pairs) => self.fill_keyed(pairs)?,
        };
        self.rows.push(cells);
        Ok(())
    }

    fn fill_keyed(&self, pairs: Vec<(String, String)>) -> Result<Vec<String>> {
        let unknown: Vec<String> = pairs
            .iter()
            .filter(|(key, _)| !self.columns.contains(key))
            .map(|(key, _)| key.clone())
            .collect();
        if !unknown.is_empty() {
            return Err(Error::UnknownColumns(unknown));
        }

        let mut cells = vec![String::new(); self.columns.len()];
        for (key, value) in pairs {
            if let Some(index) = self.column_index(&key) {
                cells[index] = value;
            }
        }
        Ok(cells)
    }

    /// Alignment-row cell for `column` under the given justification token.
    pub fn justify(column: &str, justification: &str) -> Result<String> {
        let justification: Justification = justification.parse()?;
        Ok(justification.marker(column))
    }

    /// Get the table title (may be empty).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the table title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Declared column names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Justifications parallel to [`Table::columns`].
    pub fn justifications(&self) -> &[Justification] {
        &self.justifications
    }

    /// Stored rows, each as long as the column list.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no columns (and so renders to nothing).
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Remove all rows, keeping the columns.
    pub fn clear_rows(&mut self) {
        self.rows.clear();
    }
}

/// Serialized form of a [`Table`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    title: String,
    #[serde(default)]
    columns: Vec<ColumnSpec>,
    #[serde(default)]
    rows: Vec<RawRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawRow {
    Positional(Vec<String>),
    Keyed(BTreeMap<String, String>),
}

impl TryFrom<RawTable> for Table {
    type Error = Error;

    fn try_from(raw: RawTable) -> Result<Self> {
        let mut table = Table::with_columns(raw.title, raw.columns)?;
        for row in raw.rows {
            match row {
                RawRow::Positional(cells) => table.add_row(cells)?,
                RawRow::Keyed(cells) => table.add_row(cells)?,
            }
        }
        Ok(table)
    }
}

impl From<Table> for RawTable {
    fn from(table: Table) -> Self {
        let columns = table
            .columns
            .into_iter()
            .zip(table.justifications)
            .map(|(name, justification)| ColumnSpec::Justified {
                name,
                justification: justification.as_str().to_string(),
            })
            .collect();
        Self {
            title: table.title,
            columns,
            rows: table.rows.into_iter().map(RawRow::Positional).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Table {
        Table::with_columns("People", ["Name", "Age"]).unwrap()
    }

    #[test]
    fn test_table_new() {
        let table = Table::new("");
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_add_columns_mixed() {
        let mut table = Table::new("t");
        table.add_columns(["Name"]).unwrap();
        table
            .add_columns([("Score", "right"), ("Note", "full")])
            .unwrap();

        assert_eq!(table.columns(), ["Name", "Score", "Note"]);
        assert_eq!(
            table.justifications(),
            [
                Justification::Left,
                Justification::Right,
                Justification::Center
            ]
        );
    }

    #[test]
    fn test_add_columns_invalid_token_is_atomic() {
        let mut table = people();
        let err = table
            .add_columns([("A", "left"), ("B", "diagonal")])
            .unwrap_err();
        assert_eq!(err, Error::InvalidJustification("diagonal".to_string()));
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_positional_row() {
        let mut table = people();
        table.add_row(["Alice", "30"]).unwrap();
        assert_eq!(table.rows(), [vec!["Alice".to_string(), "30".to_string()]]);

        let err = table.add_row(["Bob"]).unwrap_err();
        assert_eq!(
            err,
            Error::RowLength {
                expected: 2,
                found: 1
            }
        );
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_keyed_row_fills_missing() {
        let mut table = people();
        table.add_row([("Age", "41")]).unwrap();
        assert_eq!(table.rows()[0], vec![String::new(), "41".to_string()]);
    }

    #[test]
    fn test_keyed_row_from_map() {
        let mut table = people();
        let mut cells = HashMap::new();
        cells.insert("Name".to_string(), "Carol".to_string());
        table.add_row(cells).unwrap();
        assert_eq!(table.rows()[0], vec!["Carol".to_string(), String::new()]);
    }

    #[test]
    fn test_keyed_row_unknown_column() {
        let mut table = people();
        let err = table.add_row([("Name", "x"), ("Email", "y")]).unwrap_err();
        assert_eq!(err, Error::UnknownColumns(vec!["Email".to_string()]));
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_row_helpers_stringify() {
        let mut table = people();
        table
            .add_row(Row::positional(["Dan".to_string(), 7.to_string()]))
            .unwrap();
        table.add_row(Row::keyed([("Age", 12)])).unwrap();
        assert_eq!(table.rows()[0][1], "7");
        assert_eq!(table.rows()[1], vec![String::new(), "12".to_string()]);
    }

    #[test]
    fn test_justify() {
        assert_eq!(Table::justify("Name", "left").unwrap(), ":--");
        assert_eq!(Table::justify("Name", "right").unwrap(), "--:");
        assert_eq!(Table::justify("Name", "center").unwrap(), ":-:");
        assert_eq!(Table::justify("Name", "full").unwrap(), ":-:");
        assert_eq!(Table::justify("Name", "").unwrap(), ":--");
        assert_eq!(Table::justify("Name", "none").unwrap(), ":--");
        assert_eq!(Table::justify("A", "left").unwrap(), ":-");
        assert_eq!(Table::justify("A", "right").unwrap(), "-:");
        assert_eq!(Table::justify("A", "center").unwrap(), ":-:");
        assert_eq!(Table::justify("Status", "left").unwrap(), ":----");
        assert!(matches!(
            Table::justify("Name", "sideways"),
            Err(Error::InvalidJustification(_))
        ));
    }

    #[test]
    fn test_add_columns_pads_existing_rows() {
        let mut table = Table::with_columns("", ["A"]).unwrap();
        table.add_row(["x"]).unwrap();
        table.add_columns([("B", "right")]).unwrap();

        assert_eq!(table.column_count(), 2);
        assert_eq!(table.rows()[0], vec!["x".to_string(), String::new()]);
        assert_eq!(table.to_string(), "| A | B |\n| :- | -: |\n| x |  |");

        table.add_row(["y", "z"]).unwrap();
        assert_eq!(table.row_count(), 2);
    }
}
