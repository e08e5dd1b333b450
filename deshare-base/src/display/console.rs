use parking_lot::Mutex;

use deshare_core::{Action, DisplaySurface, FundColumn, FundTable, Notice, NoticeKind, H160};

use crate::Explorer;

/// Writes notices to stdout and keeps the fund table in memory until it is
/// printed.
#[derive(Debug)]
pub struct ConsoleDisplay {
    explorer: Explorer,
    table: Mutex<FundTable>,
    /// Suppress notices, e.g. when stdout carries JSON
    quiet: bool,
}

impl ConsoleDisplay {
    /// Console display linking to `explorer`
    pub fn new(explorer: Explorer, quiet: bool) -> Self {
        Self {
            explorer,
            table: Mutex::new(FundTable::default()),
            quiet,
        }
    }

    /// Print the fund table
    pub fn print_funds(&self) {
        let table = self.table.lock();
        if table.rows().is_empty() {
            println!("No funds found.");
            return;
        }
        super::fund_table(table.rows(), &self.explorer).printstd();
    }
}

impl DisplaySurface for ConsoleDisplay {
    fn show_notice(&self, notice: Notice) {
        if self.quiet {
            return;
        }
        let tag = match notice.kind {
            NoticeKind::Info => "pending",
            NoticeKind::Success => "ok",
            NoticeKind::Error => "error",
        };
        match notice.link {
            Some(link) => println!("[{tag}] {}: {link}", notice.message),
            None => println!("[{tag}] {}", notice.message),
        }
    }

    fn set_loading(&self, loading: bool) {
        if loading && !self.quiet {
            println!("Waiting for confirmation...");
        }
    }

    // a terminal has no buttons to grey out
    fn set_control_enabled(&self, _action: Action, _enabled: bool) {}

    fn clear_fund_rows(&self) {
        self.table.lock().clear();
    }

    fn append_fund_row(&self, fund: H160) -> usize {
        self.table.lock().append(fund)
    }

    fn set_fund_cell(&self, row: usize, column: FundColumn, value: String) {
        self.table.lock().set_cell(row, column, value);
    }
}
