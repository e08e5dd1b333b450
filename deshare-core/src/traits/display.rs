use std::collections::BTreeMap;

use strum::Display;

use crate::{Action, FundColumn, H160};

/// Presentation state of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeKind {
    /// Something is in progress, e.g. a transaction awaiting confirmation
    Info,
    /// An action completed
    Success,
    /// An action failed or cannot start
    Error,
}

/// A message for the notice region, optionally linking to more detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// How to present it
    pub kind: NoticeKind,
    /// Message text
    pub message: String,
    /// Block explorer or remediation link
    pub link: Option<String>,
}

impl Notice {
    /// Info notice
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message)
    }

    /// Success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    /// Error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    /// Attach a link
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            link: None,
        }
    }
}

/// Where workflow state becomes visible to the user.
///
/// Methods take `&self` because concurrent fund reads update cells as they
/// resolve; implementations keep their own interior mutability.
#[auto_impl::auto_impl(&, Box, Arc)]
pub trait DisplaySurface: Send + Sync {
    /// Replace the notice region content.
    fn show_notice(&self, notice: Notice);

    /// Show or hide the loading indicator.
    fn set_loading(&self, loading: bool);

    /// Enable or disable the control that triggers `action`.
    fn set_control_enabled(&self, action: Action, enabled: bool);

    /// Remove every row from the fund table.
    fn clear_fund_rows(&self);

    /// Append an empty row for `fund` and return its index. Does not check
    /// for an existing row.
    fn append_fund_row(&self, fund: H160) -> usize;

    /// Fill one cell of the row at `row`, as returned by `append_fund_row`.
    fn set_fund_cell(&self, row: usize, column: FundColumn, value: String);
}

/// One row of the fund table. Cells fill in independently as reads resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundRow {
    /// Fund contract address
    pub address: H160,
    /// Populated cells
    pub cells: BTreeMap<FundColumn, String>,
}

/// In-memory fund table as a display surface keeps it.
///
/// Rows carry a fund address but the address is not unique: appending the
/// same fund twice yields two rows. Cells are addressed by row index, so each
/// row only ever receives the reads issued for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FundTable {
    rows: Vec<FundRow>,
}

impl FundTable {
    /// Drop every row
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Append an empty row for `address`, returning its index
    pub fn append(&mut self, address: H160) -> usize {
        self.rows.push(FundRow {
            address,
            cells: BTreeMap::new(),
        });
        self.rows.len() - 1
    }

    /// Set a cell on the row at `row`. Returns false when there is no such
    /// row, e.g. after the table was cleared.
    pub fn set_cell(&mut self, row: usize, column: FundColumn, value: String) -> bool {
        match self.rows.get_mut(row) {
            Some(row) => {
                row.cells.insert(column, value);
                true
            }
            None => false,
        }
    }

    /// Rows in insertion order
    pub fn rows(&self) -> &[FundRow] {
        &self.rows
    }

    /// Number of rows keyed by `address`
    pub fn count(&self, address: H160) -> usize {
        self.rows.iter().filter(|row| row.address == address).count()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn duplicate_funds_keep_their_own_cells() {
        let fund = H160::repeat_byte(1);
        let mut table = FundTable::default();
        let first = table.append(fund);
        let second = table.append(fund);
        assert_eq!((first, second), (0, 1));

        // the second row's read resolves first
        assert!(table.set_cell(second, FundColumn::Name, "Beta".into()));
        assert!(table.set_cell(first, FundColumn::Name, "Alpha".into()));

        assert_eq!(table.count(fund), 2);
        assert_eq!(table.rows()[0].cells[&FundColumn::Name], "Alpha");
        assert_eq!(table.rows()[1].cells[&FundColumn::Name], "Beta");
    }

    #[test]
    fn cleared_rows_are_ignored() {
        let mut table = FundTable::default();
        let row = table.append(H160::zero());
        table.clear();
        assert!(!table.set_cell(row, FundColumn::Symbol, "AX".into()));
        assert!(table.rows().is_empty());
    }
}
