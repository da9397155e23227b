use crate::error::WikitableError;
use crate::model::Grid;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Write a grid as delimited text.
///
/// Fields containing the delimiter, quotes or line breaks are quoted, with
/// embedded quotes doubled. Lines always end in `\n`, on every platform.
pub fn write_grid<W: Write>(writer: W, grid: &Grid, delimiter: char) -> Result<(), WikitableError> {
    if !delimiter.is_ascii() {
        return Err(WikitableError::OptionsInvalid(format!(
            "delimiter {delimiter:?} is not an ASCII character"
        )));
    }
    let delimiter = delimiter as u8;

    let mut csv_writer = WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    for row in &grid.rows {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write a grid to `path`, replacing any existing file.
pub fn export_grid(grid: &Grid, path: &Path, delimiter: char) -> Result<(), WikitableError> {
    let file = File::create(path)?;
    write_grid(io::BufWriter::new(file), grid, delimiter)
}

/// Render a grid as delimited text in memory.
pub fn grid_to_string(grid: &Grid, delimiter: char) -> Result<String, WikitableError> {
    let mut buf: Vec<u8> = Vec::new();
    write_grid(&mut buf, grid, delimiter)?;
    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/// Create `folder` if it does not exist yet. An existing folder is fine.
pub fn ensure_folder(folder: &Path) -> Result<(), WikitableError> {
    match std::fs::create_dir(folder) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// File name for a table: lowercased, whitespace runs joined by `_`.
///
/// Characters that are not allowed in file names on common platforms
/// become `_`. An empty result falls back to `table_<position>`.
pub fn table_filename(name: &str, position: usize, extension: &str) -> String {
    let stem: String = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if stem.is_empty() || stem.chars().all(|c| c == '.') {
        format!("table_{position}.{extension}")
    } else {
        format!("{stem}.{extension}")
    }
}
