pub mod dom;
pub mod error;
pub mod export;
pub mod model;
pub mod options;
pub mod page;
pub mod parsing;

use std::path::Path;

use error::WikitableError;
use model::ScrapeReport;
use options::ScrapeOptions;
use page::Page;
use scraper::Html;

/// Main API entry point: export every data table of a parsed document into
/// `folder`, one delimited file per table.
///
/// The folder is created if needed; scraping into an existing folder
/// overwrites files of the same name. Per-table failures abort the export
/// unless `options.on_error` asks to skip them.
pub fn scrape_all(
    document: &Html,
    folder: &Path,
    options: &ScrapeOptions,
) -> Result<ScrapeReport, WikitableError> {
    options::validate_options(options)?;
    let page = Page::with_options(document.root_element(), options.clone());
    let report = page.scrape_all(folder)?;

    log::debug!(
        "exported {} table(s) to {}, skipped {}",
        report.exported.len(),
        folder.display(),
        report.skipped.len()
    );
    Ok(report)
}

/// Parse raw HTML and scrape it with [`scrape_all`].
pub fn scrape_html(
    html: &str,
    folder: &Path,
    options: &ScrapeOptions,
) -> Result<ScrapeReport, WikitableError> {
    let document = dom::parse_document(html);
    scrape_all(&document, folder, options)
}
