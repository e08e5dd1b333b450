use prettytable::{format, Cell, Row, Table};
use strum::IntoEnumIterator;

use deshare_core::{FundColumn, FundRow};

use crate::Explorer;

pub use console::ConsoleDisplay;

/// Terminal display surface
mod console;

/// Render fund rows as a box-drawn table with an explorer details link per
/// fund. Empty cells render as `-`.
pub fn fund_table(rows: &[FundRow], explorer: &Explorer) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);

    let mut header: Vec<Cell> = FundColumn::iter()
        .map(|column| Cell::new(&column.to_string()))
        .collect();
    header.push(Cell::new("Details"));
    table.set_titles(Row::new(header));

    for row in rows {
        let mut cells: Vec<Cell> = FundColumn::iter()
            .map(|column| Cell::new(row.cells.get(&column).map_or("-", String::as_str)))
            .collect();
        cells.push(Cell::new(&explorer.address_url(row.address)));
        table.add_row(Row::new(cells));
    }
    table
}

#[cfg(test)]
mod test {
    use deshare_core::{FundTable, H160};
    use url::Url;

    use super::*;

    #[test]
    fn renders_missing_cells_as_dashes() {
        let explorer = Explorer::new(&Url::parse("https://testnet.bscscan.com").unwrap());
        let fund = H160::repeat_byte(0x0f);
        let mut rows = FundTable::default();
        let row = rows.append(fund);
        rows.set_cell(row, FundColumn::Name, "Alpha Growth".into());

        let rendered = fund_table(rows.rows(), &explorer).to_string();
        assert!(rendered.contains("Portfolio Size"));
        assert!(rendered.contains("Alpha Growth"));
        assert!(rendered.contains(" - "));
        assert!(rendered.contains(&explorer.address_url(fund)));
    }
}
