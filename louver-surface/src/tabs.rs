/// Default tab interval.
const INITIAL_TABSTOPS: usize = 8;

/// Horizontal tab stops, one flag per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TabStops {
    tabs: Vec<bool>,
}

impl TabStops {
    pub(crate) fn new(columns: usize) -> Self {
        Self {
            tabs: (0..columns).map(is_initial_stop).collect(),
        }
    }

    /// Remove all tab stops.
    pub(crate) fn clear_all(&mut self) {
        self.tabs.fill(false);
    }

    pub(crate) fn set(&mut self, column: usize) {
        self.tabs[column] = true;
    }

    pub(crate) fn clear(&mut self, column: usize) {
        self.tabs[column] = false;
    }

    /// The first stop strictly right of `column`, if any.
    pub(crate) fn next_stop(&self, column: usize) -> Option<usize> {
        (column + 1..self.tabs.len()).find(|&i| self.tabs[i])
    }

    /// The first stop strictly left of `column`, if any.
    pub(crate) fn prev_stop(&self, column: usize) -> Option<usize> {
        (0..column).rev().find(|&i| self.tabs[i])
    }

    /// Increase or decrease the amount of columns, keeping default stops
    /// for any newly added column.
    pub(crate) fn resize(&mut self, columns: usize) {
        let mut index = self.tabs.len();
        self.tabs.resize_with(columns, || {
            let is_tabstop = is_initial_stop(index);
            index += 1;
            is_tabstop
        });
    }
}

fn is_initial_stop(column: usize) -> bool {
    column != 0 && column % INITIAL_TABSTOPS == 0
}
