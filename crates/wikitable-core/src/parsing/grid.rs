use crate::dom::MarkupNode;
use crate::error::WikitableError;
use crate::model::{Grid, TableId};
use crate::parsing::normalize::clean_cell;

/// A cell that spans rows below its own, waiting to be copied into them.
#[derive(Debug, Clone)]
struct RowspanSlot<N> {
    /// Rows still to receive a copy; always at least 1 while stored.
    remaining: usize,
    value: N,
}

/// Where a cell in a reconciled row came from.
enum RowCell<N> {
    /// Present in this row's markup.
    Own(N),
    /// Copied down from a row-spanning cell above.
    Carried(N),
}

impl<N> RowCell<N> {
    fn node(&self) -> &N {
        match self {
            RowCell::Own(n) | RowCell::Carried(n) => n,
        }
    }
}

/// Reconstruct the rectangular grid of a table.
///
/// The first row with any `th`/`td` fixes the column count. Later rows that
/// come up short receive copies of row-spanning cells from above at the
/// same column index, and anything still missing on the right is padded
/// with empty strings. Rows without cells are skipped.
pub fn reconstruct<'doc, N: MarkupNode<'doc>>(
    table: &N,
    id: &TableId,
) -> Result<Grid, WikitableError> {
    let mut slots: Vec<Option<RowspanSlot<N>>> = Vec::new();
    let mut rows = Vec::new();

    for (row_index, tr) in table
        .descendants_matching(&|n| n.is_tag("tr"))
        .into_iter()
        .enumerate()
    {
        let own = tr.descendants_matching(&|n| n.is_tag("th") || n.is_tag("td"));
        if own.is_empty() {
            continue;
        }

        let mut cells: Vec<RowCell<N>> = own.into_iter().map(RowCell::Own).collect();

        if slots.is_empty() {
            slots = (0..cells.len()).map(|_| None).collect();
        } else if cells.len() != slots.len() {
            carry_down(&mut slots, &mut cells);
        }

        for (column, cell) in cells.iter().enumerate() {
            let RowCell::Own(node) = cell else { continue };
            let Some(raw) = node.attribute("rowspan") else {
                continue;
            };
            let span = parse_rowspan(raw).ok_or_else(|| WikitableError::InvalidRowspan {
                table: id.clone(),
                row: row_index,
                value: raw.to_string(),
            })?;

            let Some(slot) = slots.get_mut(column) else {
                log::warn!("{id}: rowspan in row {row_index} at column {column} is past the last column");
                continue;
            };
            *slot = (span > 1).then(|| RowspanSlot {
                remaining: span - 1,
                value: node.clone(),
            });
        }

        let mut cleaned: Vec<String> = cells.iter().map(|c| clean_cell(c.node())).collect();
        if cleaned.len() > slots.len() {
            log::warn!(
                "{id}: row {row_index} has {} cells, truncating to {}",
                cleaned.len(),
                slots.len()
            );
        }
        cleaned.resize(slots.len(), String::new());
        rows.push(cleaned);
    }

    Ok(Grid {
        columns: slots.len(),
        rows,
    })
}

/// Insert every pending row-spanning value into `cells` at its column.
fn carry_down<N: Clone>(slots: &mut [Option<RowspanSlot<N>>], cells: &mut Vec<RowCell<N>>) {
    for (column, slot) in slots.iter_mut().enumerate() {
        let Some(pending) = slot.as_mut() else {
            continue;
        };
        let at = column.min(cells.len());
        cells.insert(at, RowCell::Carried(pending.value.clone()));

        pending.remaining -= 1;
        if pending.remaining == 0 {
            *slot = None;
        }
    }
}

fn parse_rowspan(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()
}
