use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Identity of a table within its page, used in errors and skip reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableId {
    /// Zero-based position among the page's recognized tables.
    pub position: usize,
    /// The table element's `id` attribute, when it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_id: Option<String>,
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.html_id {
            Some(id) => write!(f, "table #{} (id=\"{id}\")", self.position),
            None => write!(f, "table #{}", self.position),
        }
    }
}

/// A reconstructed table: every row has exactly `columns` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub columns: usize,
    pub rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(|r| r.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedTable {
    pub table: TableId,
    pub name: String,
    pub path: PathBuf,
    pub rows: usize,
}

/// A table left out of a page export in skip-and-continue mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedTable {
    pub table: TableId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub reason: String,
}

/// Outcome of scraping every table of a page into a folder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapeReport {
    pub exported: Vec<ExportedTable>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedTable>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_id_display() {
        let plain = TableId {
            position: 2,
            html_id: None,
        };
        assert_eq!(plain.to_string(), "table #2");

        let with_id = TableId {
            position: 0,
            html_id: Some("films".into()),
        };
        assert_eq!(with_id.to_string(), "table #0 (id=\"films\")");
    }

    #[test]
    fn test_grid_header() {
        let grid = Grid {
            columns: 2,
            rows: vec![vec!["a".into(), "b".into()], vec!["1".into(), "2".into()]],
        };
        assert_eq!(grid.header(), Some(&["a".to_string(), "b".to_string()][..]));
        assert!(Grid::default().header().is_none());
    }
}
