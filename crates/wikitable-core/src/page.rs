use crate::dom::MarkupNode;
use crate::error::WikitableError;
use crate::export;
use crate::model::{ExportedTable, Grid, ScrapeReport, SkippedTable, TableId};
use crate::options::{ErrorMode, ScrapeOptions};
use crate::parsing::{derive_name, reconstruct, HeadingRule};
use once_cell::sync::OnceCell;
use std::fmt;
use std::path::Path;

/// A data table within a page.
pub struct Table<N> {
    node: N,
    id: TableId,
    heading: HeadingRule,
    name: OnceCell<String>,
}

impl<'doc, N: MarkupNode<'doc>> Table<N> {
    pub fn new(node: N, position: usize) -> Self {
        Self::with_heading_rule(node, position, HeadingRule::default())
    }

    pub fn with_heading_rule(node: N, position: usize, heading: HeadingRule) -> Self {
        let id = TableId {
            position,
            html_id: node.attribute("id").map(str::to_string),
        };
        Self {
            node,
            id,
            heading,
            name: OnceCell::new(),
        }
    }

    pub fn id(&self) -> &TableId {
        &self.id
    }

    /// Name from the caption or the preceding headline, computed once.
    pub fn name(&self) -> Result<&str, WikitableError> {
        self.name
            .get_or_try_init(|| {
                derive_name(&self.node, &self.heading).ok_or_else(|| WikitableError::Naming {
                    table: self.id.clone(),
                })
            })
            .map(String::as_str)
    }

    pub fn rows(&self) -> Result<Grid, WikitableError> {
        reconstruct(&self.node, &self.id)
    }
}

impl<'doc, N: MarkupNode<'doc>> fmt::Debug for Table<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name.get() {
            Some(name) => write!(f, "<Table {} \"{name}\">", self.id),
            None => write!(f, "<Table {}>", self.id),
        }
    }
}

/// The data tables of one parsed document, discovered on first access.
pub struct Page<N> {
    root: N,
    options: ScrapeOptions,
    tables: OnceCell<Vec<Table<N>>>,
}

impl<'doc, N: MarkupNode<'doc>> Page<N> {
    pub fn new(root: N) -> Self {
        Self::with_options(root, ScrapeOptions::default())
    }

    pub fn with_options(root: N, options: ScrapeOptions) -> Self {
        Self {
            root,
            options,
            tables: OnceCell::new(),
        }
    }

    /// Tables carrying one of the configured classes, in document order.
    pub fn tables(&self) -> &[Table<N>] {
        self.tables.get_or_init(|| {
            let classes = &self.options.table_classes;
            let heading = HeadingRule {
                heading_tag: self.options.heading_tag.clone(),
                headline_class: self.options.headline_class.clone(),
            };
            let tables: Vec<Table<N>> = self
                .root
                .descendants_matching(&|n| {
                    n.is_tag("table") && classes.iter().any(|c| n.has_class(c))
                })
                .into_iter()
                .enumerate()
                .map(|(position, node)| Table::with_heading_rule(node, position, heading.clone()))
                .collect();
            log::debug!("found {} data table(s)", tables.len());
            tables
        })
    }

    /// First table with the given name. Tables that cannot be named never
    /// match.
    pub fn table(&self, name: &str) -> Option<&Table<N>> {
        self.tables().iter().find(|table| match table.name() {
            Ok(candidate) => candidate == name,
            Err(e) => {
                log::debug!("{e}");
                false
            }
        })
    }

    /// Write one table to `destination` as delimited text, replacing any
    /// existing file. Returns the number of rows written.
    pub fn export(&self, table: &Table<N>, destination: &Path) -> Result<usize, WikitableError> {
        let grid = table.rows()?;
        export::export_grid(&grid, destination, self.options.delimiter)?;
        Ok(grid.rows.len())
    }

    /// Export every table into `folder`, one file per table named after it.
    ///
    /// The folder is created when missing. Tables with the same name map to
    /// the same file; the later one wins.
    pub fn scrape_all(&self, folder: &Path) -> Result<ScrapeReport, WikitableError> {
        export::ensure_folder(folder)?;

        let mut report = ScrapeReport::default();
        for table in self.tables() {
            match self.export_into(table, folder) {
                Ok(exported) => report.exported.push(exported),
                Err(e) if e.is_table_error() && self.options.on_error == ErrorMode::SkipAndContinue => {
                    log::warn!("skipping {}: {e}", table.id());
                    report.skipped.push(SkippedTable {
                        table: table.id().clone(),
                        name: table.name().ok().map(str::to_string),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }

    fn export_into(&self, table: &Table<N>, folder: &Path) -> Result<ExportedTable, WikitableError> {
        let name = table.name()?;
        let filename = export::table_filename(name, table.id().position, self.options.extension());
        let path = folder.join(filename);

        let rows = self.export(table, &path)?;
        log::debug!("wrote {} ({rows} rows) to {}", table.id(), path.display());

        Ok(ExportedTable {
            table: table.id().clone(),
            name: name.to_string(),
            path,
            rows,
        })
    }
}
