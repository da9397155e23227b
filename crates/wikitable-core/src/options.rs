use crate::error::WikitableError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What a page export does when a single table cannot be named or parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMode {
    /// Abort the whole export on the first failing table.
    #[default]
    FailFast,
    /// Record the failing table in the report and carry on.
    SkipAndContinue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    /// A `table` element is scraped when it carries any of these classes.
    pub table_classes: Vec<String>,
    pub delimiter: char,
    pub on_error: ErrorMode,
    /// Section heading searched for when a table has no caption.
    pub heading_tag: String,
    /// Class of the element inside the heading that holds its text.
    pub headline_class: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            table_classes: vec!["sortable".into(), "plainrowheaders".into()],
            delimiter: ',',
            on_error: ErrorMode::default(),
            heading_tag: "h2".into(),
            headline_class: "mw-headline".into(),
        }
    }
}

impl ScrapeOptions {
    pub fn skip_failed_tables(mut self) -> Self {
        self.on_error = ErrorMode::SkipAndContinue;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// File extension matching the delimiter.
    pub fn extension(&self) -> &'static str {
        match self.delimiter {
            '\t' => "tsv",
            _ => "csv",
        }
    }
}

/// Load options from a JSON file.
pub fn load_options(path: &Path) -> Result<ScrapeOptions, WikitableError> {
    let content = std::fs::read_to_string(path).map_err(|e| WikitableError::OptionsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let options: ScrapeOptions =
        serde_json::from_str(&content).map_err(|e| WikitableError::OptionsLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_options(&options)?;
    Ok(options)
}

/// Parse options from a JSON string (no file path context).
pub fn parse_options(json: &str) -> Result<ScrapeOptions, WikitableError> {
    let options: ScrapeOptions = serde_json::from_str(json)?;
    validate_options(&options)?;
    Ok(options)
}

pub fn validate_options(options: &ScrapeOptions) -> Result<(), WikitableError> {
    if options.table_classes.iter().all(|c| c.trim().is_empty()) {
        return Err(WikitableError::OptionsInvalid(
            "table_classes must name at least one class".into(),
        ));
    }

    let d = options.delimiter;
    if !d.is_ascii() || matches!(d, '"' | '\r' | '\n') {
        return Err(WikitableError::OptionsInvalid(format!(
            "delimiter {d:?} must be a single ASCII character other than a quote or line break"
        )));
    }

    if options.heading_tag.trim().is_empty() {
        return Err(WikitableError::OptionsInvalid(
            "heading_tag must not be empty".into(),
        ));
    }

    Ok(())
}
