use std::collections::HashMap;

use parking_lot::Mutex;

use deshare_core::*;

/// A display surface that keeps everything it is shown.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    inner: Mutex<Recorded>,
}

#[derive(Debug, Default)]
struct Recorded {
    notices: Vec<Notice>,
    loading: Vec<bool>,
    controls: HashMap<Action, Vec<bool>>,
    table: FundTable,
}

impl RecordingDisplay {
    /// Every notice, oldest first
    pub fn notices(&self) -> Vec<Notice> {
        self.inner.lock().notices.clone()
    }

    /// The notice currently shown
    pub fn last_notice(&self) -> Option<Notice> {
        self.inner.lock().notices.last().cloned()
    }

    /// Whether the loading indicator is currently shown
    pub fn loading(&self) -> bool {
        self.inner.lock().loading.last().copied().unwrap_or(false)
    }

    /// Every loading indicator change, oldest first
    pub fn loading_history(&self) -> Vec<bool> {
        self.inner.lock().loading.clone()
    }

    /// Every enablement change of the control for `action`, oldest first
    pub fn control_history(&self, action: Action) -> Vec<bool> {
        self.inner
            .lock()
            .controls
            .get(&action)
            .cloned()
            .unwrap_or_default()
    }

    /// Current enablement of the control for `action`. Controls start enabled.
    pub fn control_enabled(&self, action: Action) -> bool {
        self.control_history(action).last().copied().unwrap_or(true)
    }

    /// Snapshot of the fund table
    pub fn table(&self) -> FundTable {
        self.inner.lock().table.clone()
    }
}

impl DisplaySurface for RecordingDisplay {
    fn show_notice(&self, notice: Notice) {
        self.inner.lock().notices.push(notice);
    }

    fn set_loading(&self, loading: bool) {
        self.inner.lock().loading.push(loading);
    }

    fn set_control_enabled(&self, action: Action, enabled: bool) {
        self.inner
            .lock()
            .controls
            .entry(action)
            .or_default()
            .push(enabled);
    }

    fn clear_fund_rows(&self) {
        self.inner.lock().table.clear();
    }

    fn append_fund_row(&self, fund: H160) -> usize {
        self.inner.lock().table.append(fund)
    }

    fn set_fund_cell(&self, row: usize, column: FundColumn, value: String) {
        self.inner.lock().table.set_cell(row, column, value);
    }
}
